//! Storage layer for the todo bot.
//!
//! Every todo lives in its own file inside a single storage directory. The
//! filename is the todo id and the file body is the todo text. There is no
//! index: whatever is in the directory is the list.
//!
//! ```text
//! todos/
//! ├── 0f8fad5b-d9cb-469f-a165-70867728950e
//! └── 7c9e6679-7425-40de-944b-e07fc1f90ae7
//! ```
//!
//! # Example
//!
//! ```no_run
//! use todo_persistence::{RecordingSink, TodoStore};
//!
//! # async fn example() {
//! let store = TodoStore::new("todos");
//! let sink = RecordingSink::new();
//!
//! store.add("buy milk", &sink).await;
//! store.list(&sink).await;
//!
//! for reply in sink.take() {
//!     println!("{}", reply);
//! }
//! # }
//! ```

pub mod atomic;
pub mod error;
pub mod fs;
pub mod reply;
pub mod store;

pub use error::{PersistenceError, Result};
pub use fs::{TodoFs, TokioFs};
pub use reply::{RecordingSink, Reply, ReplySink};
pub use store::TodoStore;
