use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for maze loading operations.
/// Covers failures while acquiring raw maze lines, before any parsing.
#[derive(Error, Debug)]
pub enum MazeLoaderError {
    /// Error when reading a maze file.
    #[error("Failed to read maze file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when reading the maze from standard input.
    #[error("Failed to read maze from standard input: {0}")]
    ReadStdin(std::io::Error),
}
