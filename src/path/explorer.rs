use super::route::MazePath;
use crate::grid::{Direction, Grid, Position};

/// One level of the depth-first search: the cell on the path and the index
/// into `Direction::ALL` of the next move to try from it.
#[derive(Clone, Copy, Debug)]
struct Frame {
    pos: Position,
    idx: usize,
    next_dir: usize,
}

/// `PathExplorer` is responsible for finding every simple path through a `Grid`.
pub struct PathExplorer;

impl PathExplorer {
    /// Returns all simple paths from the grid's start to its finish.
    ///
    /// Paths come back in discovery order. An empty vector means the finish
    /// is unreachable, which is not an error.
    pub fn get_paths(grid: &Grid) -> Vec<MazePath> {
        Self::traverse(grid, grid.get_start(), grid.get_finish(), None)
    }

    /// Same as `get_paths`, but stops once `limit` paths have been found.
    pub fn get_paths_with_limit(grid: &Grid, limit: Option<usize>) -> Vec<MazePath> {
        Self::traverse(grid, grid.get_start(), grid.get_finish(), limit)
    }

    /// Returns all simple paths between two arbitrary cells of `grid`.
    ///
    /// If `from == to` the only result is the single-cell path. Endpoints
    /// that are walls or out of bounds yield no paths.
    pub fn get_paths_between(grid: &Grid, from: Position, to: Position) -> Vec<MazePath> {
        Self::traverse(grid, from, to, None)
    }

    /// Depth-first enumeration with backtracking over an explicit frame stack.
    ///
    /// `visited` and `path` change together: a cell is marked and pushed when
    /// its frame is created and unmarked and popped when the frame is
    /// discarded, so sibling branches never see each other's cells.
    fn traverse(grid: &Grid, from: Position, to: Position, limit: Option<usize>) -> Vec<MazePath> {
        let mut all_paths: Vec<MazePath> = Vec::new();
        if limit == Some(0) || !grid.passable(from) || !grid.passable(to) {
            return all_paths;
        }
        let Some(from_idx) = grid.index_of(from) else {
            return all_paths;
        };

        // No simple path can hold more cells than the grid has.
        let depth_cap = grid.cell_count();
        let mut visited = vec![false; depth_cap];
        let mut path: Vec<Position> = Vec::with_capacity(depth_cap);
        let mut stack: Vec<Frame> = Vec::with_capacity(depth_cap);

        visited[from_idx] = true;
        path.push(from);
        stack.push(Frame {
            pos: from,
            idx: from_idx,
            next_dir: 0,
        });
        if from == to {
            all_paths.push(MazePath::from_search(path.clone()));
        }

        while let Some(frame) = stack.last_mut() {
            let exhausted = frame.pos == to
                || frame.next_dir == Direction::ALL.len()
                || path.len() >= depth_cap;
            if exhausted {
                // Backtrack.
                visited[frame.idx] = false;
                stack.pop();
                path.pop();
                continue;
            }

            let here = frame.pos;
            let dir = Direction::ALL[frame.next_dir];
            frame.next_dir += 1;

            let Some(next) = grid.neighbor(here, dir) else {
                continue;
            };
            let Some(next_idx) = grid.index_of(next) else {
                continue;
            };
            if visited[next_idx] || !grid.passable(next) {
                continue;
            }

            visited[next_idx] = true;
            path.push(next);
            stack.push(Frame {
                pos: next,
                idx: next_idx,
                next_dir: 0,
            });

            if next == to {
                all_paths.push(MazePath::from_search(path.clone()));
                if limit.is_some_and(|max| all_paths.len() >= max) {
                    break;
                }
            }
        }
        all_paths
    }
}
