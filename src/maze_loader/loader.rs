use std::fs::File;
use std::io::{self, BufRead, BufReader};

use super::error::MazeLoaderError;

//─────────────────────────────────────────────────────────────────────────────

/// Loads maze lines from a file.
pub fn load_maze_from_file(file_path: &str) -> Result<Vec<String>, MazeLoaderError> {
    let file = File::open(file_path).map_err(|e| MazeLoaderError::ReadFile(file_path.into(), e))?;
    load_maze_from_reader(BufReader::new(file))
        .map_err(|e| MazeLoaderError::ReadFile(file_path.into(), e))
}

/// Loads maze lines typed or piped on standard input.
pub fn load_maze_from_stdin() -> Result<Vec<String>, MazeLoaderError> {
    let stdin = io::stdin();
    load_maze_from_reader(stdin.lock()).map_err(MazeLoaderError::ReadStdin)
}

/// Collects maze lines from `reader`.
///
/// Each line is trimmed of surrounding whitespace. Collection stops at the
/// first blank line or at end of input, whichever comes first.
pub fn load_maze_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        rows.push(trimmed.to_string());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_reader_stops_at_blank_line() {
        let input = Cursor::new("S..\n..F\n\n###\n");
        let rows = load_maze_from_reader(input).unwrap();
        assert_eq!(rows, vec!["S..", "..F"]);
    }

    #[test]
    fn test_reader_trims_and_handles_missing_newline() {
        let input = Cursor::new("  S.F  \r\n#.#");
        let rows = load_maze_from_reader(input).unwrap();
        assert_eq!(rows, vec!["S.F", "#.#"]);
    }

    #[test]
    fn test_reader_empty_input() {
        let rows = load_maze_from_reader(Cursor::new("")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.txt");
        let mut f = File::create(&path).unwrap();
        writeln!(f, "S.#").unwrap();
        writeln!(f, "..F").unwrap();

        let rows = load_maze_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(rows, vec!["S.#", "..F"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = load_maze_from_file(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, MazeLoaderError::ReadFile(_, _)));
    }
}
