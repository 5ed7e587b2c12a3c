use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze loading error: {0}")]
    MazeLoad(#[from] crate::maze_loader::MazeLoaderError),
    #[error("Invalid maze: {0}")]
    Grid(#[from] crate::grid::GridError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
