//! Local interactive shell, for talking to the bot without Telegram.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use todo_persistence::{Reply, ReplySink, TodoStore};
use tracing::debug;

use crate::command::USAGE;
use crate::config::BotConfig;
use crate::error::Result;
use crate::handlers::dispatch;

/// Prints replies to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

#[async_trait]
impl ReplySink for ConsoleSink {
    async fn reply(&self, reply: Reply) {
        println!("{}", reply);
    }
}

/// What the shell should do with a line of input.
#[derive(Debug, PartialEq, Eq)]
enum ShellInput<'a> {
    Quit,
    Help,
    Empty,
    Chat(&'a str),
}

impl<'a> ShellInput<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => ShellInput::Quit,
            "/help" => ShellInput::Help,
            "" => ShellInput::Empty,
            _ => ShellInput::Chat(line),
        }
    }
}

/// Name of the shell history file.
pub const HISTORY_FILE: &str = ".todo_shell_history";

/// Where the shell keeps its history: beside the storage directory, never
/// inside it.
///
/// The directory is canonicalized first so paths ending in `.` or `..`
/// resolve to a real parent. Returns `None` when the directory cannot be
/// resolved or has no parent, in which case history is not kept.
pub fn history_path(storage_dir: &Path) -> Option<PathBuf> {
    let dir = std::fs::canonicalize(storage_dir).ok()?;
    dir.parent().map(|parent| parent.join(HISTORY_FILE))
}

/// Read-eval-print loop over the todo commands.
pub struct Shell {
    editor: DefaultEditor,
    store: TodoStore,
    runtime: tokio::runtime::Runtime,
    history_path: Option<PathBuf>,
}

impl Shell {
    /// Creates a shell on the configured storage directory.
    pub fn new(config: &BotConfig) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let runtime = tokio::runtime::Runtime::new()?;
        let store = TodoStore::new(config.storage_dir.clone());

        runtime.block_on(store.bootstrap())?;

        let history_path = history_path(&config.storage_dir);
        if let Some(path) = &history_path {
            if path.exists() {
                let _ = editor.load_history(path);
            }
        }

        Ok(Self {
            editor,
            store,
            runtime,
            history_path,
        })
    }

    /// Runs until `/quit` or Ctrl+D.
    pub fn run(&mut self) -> Result<()> {
        println!("Todo bot shell v{}", env!("CARGO_PKG_VERSION"));
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            match self.editor.readline("todo> ") {
                Ok(line) => {
                    self.editor.add_history_entry(&line)?;

                    match ShellInput::parse(&line) {
                        ShellInput::Quit => break,
                        ShellInput::Help => println!("{}", USAGE),
                        ShellInput::Empty => {}
                        ShellInput::Chat(text) => {
                            let handled = self
                                .runtime
                                .block_on(dispatch(&self.store, &ConsoleSink, text));
                            if !handled {
                                debug!(text = %text, "Unrecognized shell input");
                                println!("I didn't get that. Type /help to see what I understand.");
                            }
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(path) = &self.history_path {
            let _ = self.editor.save_history(path);
        }

        println!("Goodbye!");
        Ok(())
    }
}
