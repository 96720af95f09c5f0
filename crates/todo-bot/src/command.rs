//! Recognizing todo commands in chat text.
//!
//! Commands are plain sentences. Matching is case-insensitive and anchored
//! at the end of the message only, so `hey bot, show my todo list` works.

use std::sync::OnceLock;

use regex::Regex;
use todo_models::ids::ID_PATTERN;
use todo_models::TodoId;

/// A todo command recognized in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// `show my todo list`
    List,
    /// `add <text> to my todo list`
    Add(String),
    /// `<id> is done`
    Remove(TodoId),
}

fn list_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)show my todo list$").expect("Invalid regex pattern"))
}

fn add_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)add (.*) to my todo list$").expect("Invalid regex pattern")
    })
}

fn remove_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&format!(r"(?i)({}) is done$", ID_PATTERN)).expect("Invalid regex pattern")
    })
}

impl TodoCommand {
    /// Parses a chat message. Returns `None` for anything that is not a
    /// todo command.
    pub fn parse(text: &str) -> Option<Self> {
        if list_regex().is_match(text) {
            return Some(TodoCommand::List);
        }

        if let Some(caps) = add_regex().captures(text) {
            return Some(TodoCommand::Add(caps[1].to_string()));
        }

        remove_regex()
            .captures(text)
            .and_then(|caps| TodoId::parse(&caps[1]))
            .map(TodoCommand::Remove)
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            TodoCommand::List => "list",
            TodoCommand::Add(_) => "add",
            TodoCommand::Remove(_) => "remove",
        }
    }
}

/// Usage text shared by the Telegram and shell front ends.
pub const USAGE: &str = "\
I keep a todo list. Try:\n\
- show my todo list\n\
- add <something> to my todo list\n\
- <todo id> is done";
