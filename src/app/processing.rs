//! Core pipeline steps of the application.
//!
//! This module loads maze lines, builds the grid, enumerates every simple
//! path and ranks the result, logging each step when not in quiet mode.

use super::error::AppError;
use super::file_handler;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grid::Grid;
use crate::maze_loader;
use crate::path::{rank_paths, PathExplorer, RankedPaths};
use std::path::Path;

/// Loads raw maze lines from `maze_file`, or from standard input when `None`.
pub fn load_maze_lines(maze_file: Option<&Path>, quiet_mode: bool) -> Result<Vec<String>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading maze...");
    let lines = match maze_file {
        Some(path) => {
            let path_str = file_handler::validate_maze_file(path, quiet_mode)?;
            verbose_println!(quiet_mode, "   => Reading {}", path_str);
            maze_loader::load_maze_from_file(&path_str)?
        }
        None => {
            verbose_println!(quiet_mode, "   => Reading standard input");
            maze_loader::load_maze_from_stdin()?
        }
    };
    verbose_println!(quiet_mode, "   => Read {} line(s).", lines.len());
    Ok(lines)
}

/// Builds and validates the grid. Any `GridError` stops the pipeline here.
pub fn build_grid(lines: &[String], quiet_mode: bool) -> Result<Grid, AppError> {
    verbose_println!(quiet_mode, "[STEP 2] Building grid...");
    let grid = Grid::from_lines(lines).map_err(|e| {
        verbose_eprintln!(quiet_mode, "   [ERROR] {}", e);
        AppError::Grid(e)
    })?;
    verbose_println!(
        quiet_mode,
        "   => {}x{} grid, start {}, finish {}.",
        grid.rows(),
        grid.cols(),
        grid.get_start(),
        grid.get_finish()
    );
    Ok(grid)
}

/// Enumerates all simple paths through `grid` and ranks them by length.
///
/// A `limit` stops the search once that many paths have been found.
pub fn find_ranked_paths(grid: &Grid, limit: Option<u64>, quiet_mode: bool) -> RankedPaths {
    verbose_println!(quiet_mode, "[STEP 3] Searching for all paths...");
    let limit = limit.map(|max| usize::try_from(max).unwrap_or(usize::MAX));
    let paths = PathExplorer::get_paths_with_limit(grid, limit);
    verbose_println!(quiet_mode, "   => Found {} path(s).", paths.len());
    if limit.is_some_and(|max| paths.len() >= max) {
        verbose_println!(quiet_mode, "   => Search stopped at the path limit.");
    }

    verbose_println!(quiet_mode, "[STEP 4] Ranking paths by length...");
    let ranked = rank_paths(paths);
    match ranked.stats() {
        Some(stats) => verbose_println!(
            quiet_mode,
            "   => min {}, max {}, mean {:.2}",
            stats.min,
            stats.max,
            stats.mean
        ),
        None => verbose_println!(quiet_mode, "   => No path reaches the finish."),
    }
    ranked
}
