//! Replies sent back to the user, and where they go.

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use todo_models::{TodoId, TodoItem};

/// Every message a todo operation can send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// One listed todo.
    Item(TodoItem),
    /// The storage directory has no todos.
    Empty,
    /// The storage directory could not be enumerated.
    ListFailed,
    /// One todo file could not be read.
    OpenFailed,
    /// A todo was written; carries the text as the user typed it.
    Added(String),
    /// The todo file could not be written.
    WriteFailed,
    /// A todo was deleted.
    Removed(TodoId),
    /// A todo could not be deleted.
    NotFound(TodoId),
}

impl Reply {
    /// Whether this reply reports a failure.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Reply::ListFailed | Reply::OpenFailed | Reply::WriteFailed | Reply::NotFound(_)
        )
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Item(item) => write!(f, "{}", item.line()),
            Reply::Empty => write!(f, "The list is empty!"),
            Reply::ListFailed => write!(f, "Oh no... I couldn't look for todos..."),
            Reply::OpenFailed => write!(f, "Uh oh! Had trouble opening a todo..."),
            Reply::Added(content) => write!(f, "OK! I added {} to the todo list", content),
            Reply::WriteFailed => write!(f, "Oh no... I couldn't write the todo file..."),
            Reply::Removed(id) => write!(f, "OK! Removed {}", id),
            Reply::NotFound(id) => write!(f, "Couldn't find {}", id),
        }
    }
}

/// The host's reply primitive, bound to the user who sent the command.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Sends one reply. Delivery problems are the sink's to handle.
    async fn reply(&self, reply: Reply);
}

/// Sink that keeps replies in memory, in the order they were sent.
#[derive(Debug, Default)]
pub struct RecordingSink {
    replies: Mutex<Vec<Reply>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn replies(&self) -> Vec<Reply> {
        self.lock().clone()
    }

    /// Drains and returns everything recorded so far.
    pub fn take(&self) -> Vec<Reply> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Reply>> {
        self.replies.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn reply(&self, reply: Reply) {
        self.lock().push(reply);
    }
}
