// error module
mod error;
// explorer module
mod explorer;
// ranking module
mod ranking;
// route module
mod route;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the path modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::PathError;
pub use explorer::PathExplorer;
pub use ranking::{rank_paths, PathStats, RankedPaths};
pub use route::{MazePath, Step};
