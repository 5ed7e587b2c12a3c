pub mod error;
mod loader;

pub use error::MazeLoaderError;
pub use loader::{load_maze_from_file, load_maze_from_reader, load_maze_from_stdin};
