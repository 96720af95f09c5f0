//! Core data models for the todo bot.
//!
//! A todo is nothing more than an id and a piece of text. The id doubles as
//! the filename under which the text is stored.

pub mod ids;
pub mod item;

pub use ids::TodoId;
pub use item::{decode_content, encode_content, TodoItem};
