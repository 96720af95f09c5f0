//! Filesystem primitives the store is built on.
//!
//! The `TodoFs` trait is the only way the store touches the disk, so tests
//! can swap in a backend that fails on purpose.

use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::atomic::{atomic_write_new, is_temp_name};

/// Non-blocking filesystem operations used by [`TodoStore`](crate::TodoStore).
#[async_trait]
pub trait TodoFs: Send + Sync {
    /// Creates the directory and any missing parents.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Returns the names of all entries in the directory.
    ///
    /// Fails as a whole if any part of the enumeration fails.
    async fn list_names(&self, path: &Path) -> io::Result<Vec<String>>;

    /// Reads a whole file.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Creates a new file with the given contents.
    ///
    /// Must leave no file behind on failure.
    async fn write_new(&self, path: &Path, data: &[u8]) -> io::Result<()>;

    /// Deletes a file.
    async fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Production backend on top of `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl TodoFs for TokioFs {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn list_names(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !is_temp_name(&name) {
                names.push(name);
            }
        }

        Ok(names)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write_new(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let path = path.to_path_buf();
        let data = data.to_vec();

        tokio::task::spawn_blocking(move || atomic_write_new(&path, &data))
            .await
            .map_err(io::Error::other)?
    }

    async fn remove(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_list_names_skips_temp_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a"), "1").unwrap();
        std::fs::write(dir.path().join(".todo-tmpXYZ"), "partial").unwrap();

        let names = TokioFs.list_names(dir.path()).await.unwrap();

        assert_eq!(names, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_list_names_missing_dir() {
        let dir = tempdir().unwrap();
        let result = TokioFs.list_names(&dir.path().join("missing")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_write_read_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("item");

        TokioFs.write_new(&path, b"content").await.unwrap();
        assert_eq!(TokioFs.read(&path).await.unwrap(), b"content".to_vec());

        TokioFs.remove(&path).await.unwrap();
        assert!(TokioFs.read(&path).await.is_err());
        assert!(TokioFs.remove(&path).await.is_err());
    }
}
