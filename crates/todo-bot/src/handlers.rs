//! Routing recognized commands to the store.

use todo_persistence::{ReplySink, TodoFs, TodoStore};
use tracing::debug;

use crate::command::TodoCommand;

/// Runs one command, sending its replies to `sink`.
pub async fn handle_todo<F, S>(store: &TodoStore<F>, sink: &S, cmd: TodoCommand)
where
    F: TodoFs,
    S: ReplySink + ?Sized,
{
    match cmd {
        TodoCommand::List => store.list(sink).await,
        TodoCommand::Add(content) => store.add(&content, sink).await,
        TodoCommand::Remove(id) => store.remove(&id, sink).await,
    }
}

/// Parses `text` and runs the command it contains.
///
/// Returns false, without replying, when the text is not a todo command.
pub async fn dispatch<F, S>(store: &TodoStore<F>, sink: &S, text: &str) -> bool
where
    F: TodoFs,
    S: ReplySink + ?Sized,
{
    match TodoCommand::parse(text) {
        Some(cmd) => {
            debug!(command = cmd.name(), "Dispatching todo command");
            handle_todo(store, sink, cmd).await;
            true
        }
        None => {
            debug!("Message is not a todo command");
            false
        }
    }
}
