//! Enumerates every simple path between the start and finish of a text maze
//! and ranks them by length.
//!
//! The pipeline is `maze_loader` → `grid` → `path` (explorer, then ranking),
//! driven by the command-line front end in `app`.

pub mod app;
pub mod grid;
pub mod maze_loader;
pub mod path;
