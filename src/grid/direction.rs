use super::cell::Position;
use std::fmt;

/// One of the four cardinal moves allowed inside the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order the search tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` unit delta of this move.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Arrow used when rendering a step.
    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }

    /// Direction of the single step leading from `from` to `to`.
    /// Returns `None` unless the two positions are orthogonally adjacent.
    pub fn between(from: Position, to: Position) -> Option<Direction> {
        let d_row = to.row as isize - from.row as isize;
        let d_col = to.col as isize - from.col as isize;
        Self::ALL.into_iter().find(|dir| dir.delta() == (d_row, d_col))
    }

    /// Applies this move to `pos`, returning `None` on underflow.
    /// Upper bounds are the grid's concern.
    pub fn step(self, pos: Position) -> Option<Position> {
        let (d_row, d_col) = self.delta();
        Some(Position::new(
            pos.row.checked_add_signed(d_row)?,
            pos.col.checked_add_signed(d_col)?,
        ))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_adjacent_cells() {
        let origin = Position::new(1, 1);
        assert_eq!(Direction::between(origin, Position::new(0, 1)), Some(Direction::Up));
        assert_eq!(Direction::between(origin, Position::new(2, 1)), Some(Direction::Down));
        assert_eq!(Direction::between(origin, Position::new(1, 0)), Some(Direction::Left));
        assert_eq!(Direction::between(origin, Position::new(1, 2)), Some(Direction::Right));
    }

    #[test]
    fn test_between_rejects_other_deltas() {
        let origin = Position::new(1, 1);
        assert_eq!(Direction::between(origin, origin), None);
        assert_eq!(Direction::between(origin, Position::new(0, 0)), None);
        assert_eq!(Direction::between(origin, Position::new(1, 3)), None);
    }

    #[test]
    fn test_step_underflow() {
        assert_eq!(Direction::Up.step(Position::new(0, 4)), None);
        assert_eq!(Direction::Left.step(Position::new(2, 0)), None);
        assert_eq!(Direction::Right.step(Position::new(2, 0)), Some(Position::new(2, 1)));
    }
}
