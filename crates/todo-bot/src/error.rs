//! Error types for the bot.

use thiserror::Error;

/// Errors that stop the bot from starting or running.
#[derive(Debug, Error)]
pub enum BotError {
    /// Bot token not provided.
    #[error("Telegram bot token not set. Set TELEGRAM_BOT_TOKEN environment variable.")]
    NoToken,

    /// Failed to start the bot.
    #[error("Failed to start bot: {0}")]
    BotStartFailed(String),

    /// Storage directory could not be prepared.
    #[error("Storage error: {0}")]
    Storage(#[from] todo_persistence::PersistenceError),

    /// Interactive shell error.
    #[error("Shell error: {0}")]
    Shell(#[from] rustyline::error::ReadlineError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;
