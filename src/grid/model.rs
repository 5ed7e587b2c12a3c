// model.rs
// ──────────────────────────────────────────────────────────────────────────────
// Rectangular maze grid parsed from text lines.  `#` is a wall, `S` the
// start, `F` the finish and every other character a free cell.  A grid is
// only ever built through `Grid::from_lines`, which enforces: at least one
// row, all rows of equal length, exactly one start and exactly one finish.
// ──────────────────────────────────────────────────────────────────────────────
use super::cell::{CellKind, Landmark, Position};
use super::direction::Direction;
use super::error::GridError;

/// Immutable maze grid with its located landmarks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>, // row-major, rows * cols entries
    start: Position,
    finish: Position,
}

impl Grid {
    /// Builds a grid from maze lines.
    ///
    /// Row lengths are counted in characters, not bytes.
    ///
    /// # Errors
    /// * `GridError::EmptyInput` if `lines` is empty.
    /// * `GridError::MalformedGrid` if any row differs in length from the first.
    /// * `GridError::MissingLandmark` if `S` or `F` does not occur exactly once.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (row, line) in lines.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line.as_ref().chars().map(CellKind::from));
            let found = cells.len() - before;

            if row == 0 {
                cols = found;
            } else if found != cols {
                return Err(GridError::MalformedGrid {
                    row,
                    found,
                    expected: cols,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(GridError::EmptyInput);
        }

        let mut grid = Self {
            rows,
            cols,
            cells,
            start: Position::new(0, 0),
            finish: Position::new(0, 0),
        };
        grid.start = grid.locate(Landmark::Start)?;
        grid.finish = grid.locate(Landmark::Finish)?;
        Ok(grid)
    }

    /// Returns the unique position of `landmark`.
    ///
    /// Fails with `GridError::MissingLandmark` when the landmark occurs zero
    /// times or more than once; duplicates are never resolved silently.
    pub fn locate(&self, landmark: Landmark) -> Result<Position, GridError> {
        let mut found = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.landmark() == Some(landmark))
            .map(|(idx, _)| self.position_of(idx));

        match (found.next(), found.count()) {
            (Some(pos), 0) => Ok(pos),
            (first, rest) => Err(GridError::MissingLandmark {
                landmark,
                count: usize::from(first.is_some()) + rest,
            }),
        }
    }

    /// True iff `pos` is inside the grid and not a wall.
    pub fn passable(&self, pos: Position) -> bool {
        self.get_cell(pos).is_some_and(|cell| !cell.is_wall())
    }

    /// Neighbor of `pos` one step in `dir`, if it is inside the grid.
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        dir.step(pos).filter(|next| self.contains(*next))
    }

    /// True iff `pos` lies inside the grid bounds.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Returns the cell at `pos`, or `None` when out of bounds.
    pub fn get_cell(&self, pos: Position) -> Option<CellKind> {
        self.index_of(pos).map(|idx| self.cells[idx])
    }

    /// Row-major index of `pos`, used by the search for its visited mask.
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    fn position_of(&self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, walls included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn get_start(&self) -> Position {
        self.start
    }

    pub fn get_finish(&self) -> Position {
        self.finish
    }

    /// Renders the grid back to characters, one vector per row.
    pub fn to_lines(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_row() {
        let grid = Grid::from_lines(["S.F"]).unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell_count(), 3);
        assert_eq!(grid.get_start(), Position::new(0, 0));
        assert_eq!(grid.get_finish(), Position::new(0, 2));
    }

    #[test]
    fn test_empty_input() {
        let lines: Vec<String> = Vec::new();
        assert_eq!(Grid::from_lines(lines), Err(GridError::EmptyInput));
    }

    #[test]
    fn test_unequal_rows_are_malformed() {
        let err = Grid::from_lines(["SF", "F"]).unwrap_err();
        assert_eq!(
            err,
            GridError::MalformedGrid {
                row: 1,
                found: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_missing_start() {
        let err = Grid::from_lines(["..F"]).unwrap_err();
        assert_eq!(
            err,
            GridError::MissingLandmark {
                landmark: Landmark::Start,
                count: 0
            }
        );
    }

    #[test]
    fn test_missing_finish() {
        let err = Grid::from_lines(["S.."]).unwrap_err();
        assert!(matches!(
            err,
            GridError::MissingLandmark {
                landmark: Landmark::Finish,
                count: 0
            }
        ));
    }

    #[test]
    fn test_duplicate_start_is_rejected() {
        let err = Grid::from_lines(["S.S", "..F"]).unwrap_err();
        assert_eq!(
            err,
            GridError::MissingLandmark {
                landmark: Landmark::Start,
                count: 2
            }
        );
    }

    #[test]
    fn test_passable() {
        let grid = Grid::from_lines(["S#", ".F"]).unwrap();
        assert!(grid.passable(Position::new(0, 0)));
        assert!(!grid.passable(Position::new(0, 1)));
        assert!(grid.passable(Position::new(1, 0)));
        assert!(grid.passable(Position::new(1, 1)));
        assert!(!grid.passable(Position::new(2, 0)));
        assert!(!grid.passable(Position::new(0, 2)));
    }

    #[test]
    fn test_neighbor_respects_bounds() {
        let grid = Grid::from_lines(["S.", ".F"]).unwrap();
        let corner = Position::new(1, 1);
        assert_eq!(grid.neighbor(corner, Direction::Up), Some(Position::new(0, 1)));
        assert_eq!(grid.neighbor(corner, Direction::Down), None);
        assert_eq!(grid.neighbor(corner, Direction::Right), None);
        assert_eq!(grid.neighbor(Position::new(0, 0), Direction::Up), None);
    }

    #[test]
    fn test_free_cells_keep_their_symbol() {
        let grid = Grid::from_lines(["S o", "#xF"]).unwrap();
        assert_eq!(grid.get_cell(Position::new(0, 1)), Some(CellKind::Free(' ')));
        assert_eq!(grid.to_lines()[1], vec!['#', 'x', 'F']);
    }

    #[test]
    fn test_row_length_counts_chars() {
        // Multi-byte free cells must not trip the rectangle check.
        let grid = Grid::from_lines(["S·", "·F"]).unwrap();
        assert_eq!(grid.cols(), 2);
    }
}
