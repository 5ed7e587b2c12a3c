// cell module
mod cell;
// direction module
mod direction;
// error module
mod error;
// model module
mod model;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the grid modules.
//─────────────────────────────────────────────────────────────────────────────
pub use cell::{CellKind, Landmark, Position, FINISH, START};
pub use direction::Direction;
pub use error::GridError;
pub use model::Grid;
