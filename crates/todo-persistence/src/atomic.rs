//! Atomic file creation for crash-safe todo writes.

use std::io::{self, Write};
use std::path::Path;

/// Prefix of the temporary files written next to their final path.
///
/// Directory listings skip names with this prefix.
pub const TEMP_PREFIX: &str = ".todo-tmp";

/// Returns true if `name` is an in-flight temporary file.
pub fn is_temp_name(name: &str) -> bool {
    name.starts_with(TEMP_PREFIX)
}

/// Creates a new file atomically, refusing to replace an existing one.
///
/// The data goes to a temporary file in the same directory first, which is
/// then renamed onto `path`. Readers never observe a partially written file,
/// and on any error the temporary file is removed so nothing new is left
/// behind. The parent directory must already exist.
///
/// # Errors
/// Returns an error if the directory is missing, the write fails, or `path`
/// already exists.
pub fn atomic_write_new(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut temp_file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)?;

    temp_file.write_all(data)?;
    temp_file.flush()?;

    temp_file.persist_noclobber(path).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entry_names(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_atomic_write_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo");

        atomic_write_new(&path, b"hello world").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
        // Temp file was renamed, not copied
        assert_eq!(entry_names(dir.path()), vec!["todo".to_string()]);
    }

    #[test]
    fn test_atomic_write_refuses_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todo");
        fs::write(&path, "original").unwrap();

        let err = atomic_write_new(&path, b"replacement").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert_eq!(entry_names(dir.path()).len(), 1);
    }

    #[test]
    fn test_atomic_write_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone").join("todo");

        assert!(atomic_write_new(&path, b"data").is_err());
        assert!(!dir.path().join("gone").exists());
    }

    #[test]
    fn test_is_temp_name() {
        assert!(is_temp_name(".todo-tmpA1b2C3"));
        assert!(!is_temp_name("0f8fad5b-d9cb-469f-a165-70867728950e"));
        assert!(!is_temp_name(".hidden"));
    }
}
