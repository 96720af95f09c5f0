//! Bot configuration.
//!
//! Built once at startup and passed by value; nothing changes it afterwards.

use std::path::PathBuf;

/// Environment variable for the Telegram bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable for the storage directory.
pub const TODO_DIR_ENV: &str = "TODO_DIR";

/// Default storage directory, relative to the working directory.
pub const DEFAULT_TODO_DIR: &str = "todos";

/// Settings the bot runs with.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Directory holding one file per todo.
    pub storage_dir: PathBuf,
    /// Telegram bot token, if one was provided.
    pub token: Option<String>,
}

impl BotConfig {
    /// Creates a config for the given storage directory, expanding `~`.
    ///
    /// The token is read from `TELEGRAM_BOT_TOKEN`; empty values count as
    /// unset.
    pub fn new(storage_dir: &str) -> Self {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self {
            storage_dir: expand_dir(storage_dir),
            token,
        }
    }
}

/// Expands a leading `~` in a directory argument.
pub fn expand_dir(dir: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(dir).into_owned())
}

/// Loads `.env.local`, falling back to `.env`, from the working directory.
///
/// Variables already set in the environment win.
pub fn load_env_files() {
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_dir_relative() {
        assert_eq!(expand_dir("todos"), PathBuf::from("todos"));
    }

    #[test]
    fn test_expand_dir_absolute() {
        assert_eq!(expand_dir("/var/lib/todos"), PathBuf::from("/var/lib/todos"));
    }

    #[test]
    fn test_expand_dir_tilde() {
        let expanded = expand_dir("~/todos");
        assert!(expanded.ends_with("todos"));
        if std::env::var_os("HOME").is_some() {
            assert!(!expanded.starts_with("~"));
        }
    }

    #[test]
    fn test_new_keeps_storage_dir() {
        let config = BotConfig::new("/tmp/my-todos");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/my-todos"));
    }
}
