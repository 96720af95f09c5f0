//! The todo store: list, add and remove against the storage directory.

use std::path::{Path, PathBuf};

use futures::stream::{FuturesUnordered, StreamExt};
use todo_models::{TodoId, TodoItem};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::{PersistenceError, Result};
use crate::fs::{TodoFs, TokioFs};
use crate::reply::{Reply, ReplySink};

/// Manages the todo files in one storage directory.
///
/// The directory is fixed for the lifetime of the store. Nothing is cached:
/// each operation goes to the filesystem, and concurrent operations are not
/// coordinated beyond what individual file creates, reads and deletes
/// guarantee.
pub struct TodoStore<F = TokioFs> {
    dir: PathBuf,
    fs: F,
    ready: OnceCell<()>,
}

impl TodoStore<TokioFs> {
    /// Creates a store on the real filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(dir, TokioFs)
    }
}

impl<F: TodoFs> TodoStore<F> {
    /// Creates a store using the given filesystem backend.
    pub fn with_fs(dir: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            dir: dir.into(),
            fs,
            ready: OnceCell::new(),
        }
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn item_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Creates the storage directory if it is missing.
    ///
    /// Succeeds at most once per store; later calls return immediately. A
    /// failed attempt is retried on the next call.
    pub async fn bootstrap(&self) -> Result<()> {
        self.ready
            .get_or_try_init(|| async {
                debug!(dir = %self.dir.display(), "Ensuring storage directory exists");
                self.fs
                    .create_dir_all(&self.dir)
                    .await
                    .map_err(|source| PersistenceError::DirectoryError {
                        path: self.dir.clone(),
                        source,
                    })
            })
            .await?;
        Ok(())
    }

    /// Returns the names of all entries in the storage directory.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.fs
            .list_names(&self.dir)
            .await
            .map_err(|source| PersistenceError::ListError {
                path: self.dir.clone(),
                source,
            })
    }

    /// Reads the todo stored under `name`.
    pub async fn read_item(&self, name: &str) -> Result<TodoItem> {
        let path = self.item_path(name);
        let bytes = self
            .fs
            .read(&path)
            .await
            .map_err(|source| PersistenceError::ReadError { path, source })?;
        Ok(TodoItem::from_stored(TodoId::from_string(name), &bytes))
    }

    /// Writes a new todo under a fresh id.
    ///
    /// The returned item carries `content` as given, not as encoded on disk.
    pub async fn create(&self, content: &str) -> Result<TodoItem> {
        let item = TodoItem::new(content);
        let path = self.item_path(item.id.as_str());
        self.fs
            .write_new(&path, &item.to_bytes())
            .await
            .map_err(|source| PersistenceError::WriteError { path, source })?;
        Ok(item)
    }

    /// Deletes the todo stored under `id`.
    pub async fn delete(&self, id: &TodoId) -> Result<()> {
        let path = self.item_path(id.as_str());
        self.fs
            .remove(&path)
            .await
            .map_err(|source| PersistenceError::DeleteError { path, source })
    }

    async fn ensure_ready(&self) {
        if let Err(e) = self.bootstrap().await {
            warn!(error = %e, "Storage directory unavailable");
        }
    }

    /// Lists every todo, one reply per file.
    ///
    /// Files are read concurrently and each reply is sent as soon as its own
    /// read finishes, so the order is whatever the filesystem produces. A
    /// file that cannot be read gets its own failure reply without affecting
    /// the others.
    pub async fn list<S: ReplySink + ?Sized>(&self, sink: &S) {
        self.ensure_ready().await;

        let names = match self.names().await {
            Ok(names) => names,
            Err(e) => {
                warn!(error = %e, "Could not enumerate todos");
                sink.reply(Reply::ListFailed).await;
                return;
            }
        };

        if names.is_empty() {
            sink.reply(Reply::Empty).await;
            return;
        }

        debug!(count = names.len(), "Reading todos");

        let mut reads: FuturesUnordered<_> = names
            .into_iter()
            .map(|name| async move {
                let reply = match self.read_item(&name).await {
                    Ok(item) => Reply::Item(item),
                    Err(e) => {
                        warn!(todo = %name, error = %e, "Could not open todo");
                        Reply::OpenFailed
                    }
                };
                sink.reply(reply).await;
            })
            .collect();

        while reads.next().await.is_some() {}
    }

    /// Adds a todo and confirms it.
    pub async fn add<S: ReplySink + ?Sized>(&self, content: &str, sink: &S) {
        self.ensure_ready().await;

        let reply = match self.create(content).await {
            Ok(item) => {
                info!(id = %item.id, "Todo added");
                Reply::Added(content.to_string())
            }
            Err(e) => {
                warn!(error = %e, "Could not write todo");
                Reply::WriteFailed
            }
        };
        sink.reply(reply).await;
    }

    /// Removes a todo and confirms it.
    ///
    /// Every deletion failure is reported as not found.
    pub async fn remove<S: ReplySink + ?Sized>(&self, id: &TodoId, sink: &S) {
        self.ensure_ready().await;

        let reply = match self.delete(id).await {
            Ok(()) => {
                info!(id = %id, "Todo removed");
                Reply::Removed(id.clone())
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Could not remove todo");
                Reply::NotFound(id.clone())
            }
        };
        sink.reply(reply).await;
    }
}
