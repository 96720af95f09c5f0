//! Todo identifiers.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

/// Textual form of a todo id: 8-4-4-4-12 hex digits, any case.
pub const ID_PATTERN: &str =
    r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";

fn id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(&format!("^{}$", ID_PATTERN)).expect("id pattern is a valid regex")
    })
}

/// Identifier of a single todo, also used verbatim as its filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoId(String);

impl TodoId {
    /// Creates a new random id (UUID v4, lowercase, 36 characters).
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parses user input as an id.
    ///
    /// Surrounding whitespace is ignored. The text is kept as typed, so an
    /// uppercase id names a different file than its lowercase form.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        id_regex().is_match(text).then(|| Self(text.to_string()))
    }

    /// Wraps an arbitrary filename without validating it.
    ///
    /// Used for whatever happens to be in the storage directory.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
