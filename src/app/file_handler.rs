//! File system helpers for the application layer.
//!
//! Validates the maze path given on the command line and writes the rendered
//! report to disk. Uses macros from the parent `app` module for verbose logging.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Validates the maze file path and returns it as a UTF-8 string.
///
/// # Errors
/// Returns `AppError::General` if the path does not exist or is not a file,
/// and `AppError::InvalidPath` if it is not valid UTF-8.
pub fn validate_maze_file(maze_file_path: &Path, quiet_mode: bool) -> Result<String, AppError> {
    if !maze_file_path.exists() {
        let error_msg = format!("File not found: {}", maze_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !maze_file_path.is_file() {
        let error_msg = format!("Path is not a file: {}", maze_file_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    maze_file_path
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidPath(maze_file_path.display().to_string()))
}

/// Writes string content to a file, creating or truncating it.
///
/// The writer is flushed before returning so the file is complete once this
/// call succeeds.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.txt");
        std::fs::write(&path, "S.F\n").unwrap();
        let validated = validate_maze_file(&path, true).unwrap();
        assert!(validated.ends_with("maze.txt"));
    }

    #[test]
    fn test_validate_rejects_missing_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            validate_maze_file(&dir.path().join("nope.txt"), true),
            Err(AppError::General(_))
        ));
        assert!(matches!(
            validate_maze_file(dir.path(), true),
            Err(AppError::General(_))
        ));
    }

    #[test]
    fn test_write_content_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_content_to_file(&path, "a much longer first report").unwrap();
        write_content_to_file(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }
}
