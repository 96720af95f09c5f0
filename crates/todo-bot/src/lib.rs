//! Chat bot that keeps a todo list.
//!
//! Users talk to the bot in plain sentences; three of them are understood:
//!
//! - `show my todo list`
//! - `add <text> to my todo list`
//! - `<id> is done`
//!
//! Each todo is a file in the storage directory (see `todo-persistence`).
//! The bot runs against Telegram, or as a local shell for trying things out.
//!
//! # Environment Variables
//!
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather (Telegram mode only)
//! - `TODO_DIR`: Storage directory (default: `todos`)
//! - `RUST_LOG`: Overrides the log filter chosen from `-v`

pub mod bot;
pub mod command;
pub mod config;
pub mod error;
pub mod handlers;
pub mod shell;

pub use bot::{ChatReplySink, TodoBot};
pub use command::TodoCommand;
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use handlers::{dispatch, handle_todo};
pub use shell::Shell;
