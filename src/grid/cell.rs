use std::fmt;

/// Character marking an impassable cell.
pub const WALL: char = '#';
/// Character marking the start cell.
pub const START: char = 'S';
/// Character marking the finish cell.
pub const FINISH: char = 'F';

/// A `(row, col)` coordinate inside the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The unique cells a maze must contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Landmark {
    Start,
    Finish,
}

impl Landmark {
    /// Character used for this landmark in maze text.
    pub fn symbol(self) -> char {
        match self {
            Landmark::Start => START,
            Landmark::Finish => FINISH,
        }
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Landmark::Start => f.write_str("start"),
            Landmark::Finish => f.write_str("finish"),
        }
    }
}

/// Kind of a single maze cell.
///
/// Free cells keep the character they were read from so the maze can be
/// rendered back exactly as it was given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Free(char),
    Wall,
    Start,
    Finish,
}

impl CellKind {
    pub fn is_wall(self) -> bool {
        matches!(self, CellKind::Wall)
    }

    /// The landmark this cell stands for, if any.
    pub fn landmark(self) -> Option<Landmark> {
        match self {
            CellKind::Start => Some(Landmark::Start),
            CellKind::Finish => Some(Landmark::Finish),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellKind::Free(c) => c,
            CellKind::Wall => WALL,
            CellKind::Start => START,
            CellKind::Finish => FINISH,
        }
    }
}

impl From<char> for CellKind {
    fn from(c: char) -> Self {
        match c {
            WALL => CellKind::Wall,
            START => CellKind::Start,
            FINISH => CellKind::Finish,
            other => CellKind::Free(other),
        }
    }
}
