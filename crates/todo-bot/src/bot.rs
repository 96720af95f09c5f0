//! Telegram front end.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use todo_persistence::{Reply, ReplySink, TodoStore};
use tracing::{debug, info, warn};

use crate::command::USAGE;
use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::handlers::dispatch;

/// Slash commands, on top of the plain-sentence todo commands.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot and get help")]
    Start,

    #[command(description = "Show help message")]
    Help,
}

/// Sends replies to the chat a command came from.
#[derive(Clone)]
pub struct ChatReplySink {
    bot: Bot,
    chat_id: ChatId,
}

impl ChatReplySink {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ReplySink for ChatReplySink {
    async fn reply(&self, reply: Reply) {
        match self.bot.send_message(self.chat_id, reply.to_string()).await {
            Ok(_) => debug!(chat_id = %self.chat_id, failure = reply.is_failure(), "Reply sent"),
            Err(e) => warn!(chat_id = %self.chat_id, error = %e, "Failed to send reply"),
        }
    }
}

/// The todo bot on Telegram.
pub struct TodoBot {
    bot: Bot,
    store: Arc<TodoStore>,
}

impl TodoBot {
    /// Creates a bot from the startup config.
    ///
    /// Fails if no Telegram token is configured.
    pub fn new(config: &BotConfig) -> Result<Self> {
        let token = config.token.clone().ok_or(BotError::NoToken)?;
        let store = Arc::new(TodoStore::new(config.storage_dir.clone()));
        Ok(Self::with_store(token, store))
    }

    /// Creates a bot around an existing store.
    pub fn with_store(token: impl Into<String>, store: Arc<TodoStore>) -> Self {
        Self {
            bot: Bot::new(token),
            store,
        }
    }

    /// Get the bot's username.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Runs the bot with long polling until Ctrl+C.
    pub async fn start_polling(&self) -> Result<()> {
        self.store.bootstrap().await?;
        info!(dir = %self.store.dir().display(), "Starting Telegram bot in polling mode...");

        let store = Arc::clone(&self.store);

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(|bot: Bot, msg: Message, cmd: Command| async move {
                        handle_command(bot, msg, cmd).await
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| msg.text().map(is_chat_text).unwrap_or(false))
                    .endpoint(move |bot: Bot, msg: Message| {
                        let store = Arc::clone(&store);
                        async move { handle_message(bot, msg, store).await }
                    }),
            );

        Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|upd| async move {
                debug!("Unhandled update: {:?}", upd);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Bot stopped");
        Ok(())
    }
}

/// Whether a message is plain chat text, eligible for todo dispatch.
///
/// Anything starting with `/` belongs to the slash-command branch, so
/// unknown slash commands are never dispatched.
pub fn is_chat_text(text: &str) -> bool {
    !text.starts_with('/')
}

/// Handle slash commands.
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    let text = match cmd {
        Command::Start => {
            info!(chat_id = %msg.chat.id, user = ?msg.from.as_ref().map(|u| &u.username), "User started bot");
            format!("Hi! {}", USAGE)
        }
        Command::Help => format!("{}\n\n{}", USAGE, Command::descriptions()),
    };

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle a plain text message. Anything that is not a todo command is
/// ignored.
pub async fn handle_message(bot: Bot, msg: Message, store: Arc<TodoStore>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let sink = ChatReplySink::new(bot, msg.chat.id);
    if !dispatch(&*store, &sink, text).await {
        debug!(chat_id = %msg.chat.id, "Ignoring message");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_chat_text() {
        assert!(is_chat_text("show my todo list"));
        assert!(is_chat_text(" /not at the start"));
        assert!(!is_chat_text("/help"));
        assert!(!is_chat_text("/show my todo list"));
    }

    #[test]
    fn test_commands_parse() {
        assert!(matches!(Command::parse("/start", "todo_bot"), Ok(Command::Start)));
        assert!(matches!(Command::parse("/help", "todo_bot"), Ok(Command::Help)));
        assert!(Command::parse("/show my todo list", "todo_bot").is_err());
    }
}
