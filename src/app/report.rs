//! Text rendering of ranked maze paths.
//!
//! Everything here writes to a caller supplied `Write`, so the same report can
//! go to stdout, to a file, or into a buffer in tests.

use crate::grid::{Grid, Position, FINISH, START};
use crate::path::{MazePath, RankedPaths};
use std::io::{self, Write};

const BANNER_WIDTH: usize = 60;
const RULE_WIDTH: usize = 50;

/// Formats a path as `S(r,c) → (r,c) ... F(r,c)`.
pub fn format_path(path: &MazePath, grid: &Grid) -> String {
    let mut out = format!("{}{}", START, path.first());
    for step in path.steps() {
        out.push(' ');
        out.push(step.direction.arrow());
        out.push(' ');
        if step.to == grid.get_finish() {
            out.push(FINISH);
        }
        out.push_str(&step.to.to_string());
    }
    out
}

/// Renders the grid with every intermediate cell of `path` replaced by `*`.
/// Start and finish keep their own symbols.
pub fn render_overlay(path: &MazePath, grid: &Grid) -> Vec<String> {
    grid.to_lines()
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .into_iter()
                .enumerate()
                .map(|(col, c)| {
                    if path.passes_through(Position::new(row, col)) {
                        '*'
                    } else {
                        c
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Writes the opening banner.
pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(writer, "ALL SIMPLE PATHS THROUGH THE MAZE (NO CYCLES)")?;
    writeln!(writer, "{}", "=".repeat(BANNER_WIDTH))?;
    Ok(())
}

fn write_highlight(
    writer: &mut dyn Write,
    title: &str,
    path: &MazePath,
    grid: &Grid,
) -> io::Result<()> {
    writeln!(writer, "{} (length {}):", title, path.length())?;
    writeln!(writer, "{}", format_path(path, grid))?;
    writeln!(writer, "Maze with path:")?;
    for line in render_overlay(path, grid) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Writes the full report for `ranked` paths through `grid`.
pub fn write_report(writer: &mut dyn Write, grid: &Grid, ranked: &RankedPaths) -> io::Result<()> {
    let (Some(shortest), Some(longest), Some(stats)) =
        (ranked.shortest(), ranked.longest(), ranked.stats())
    else {
        writeln!(writer, "No path from {} to {} found.", START, FINISH)?;
        return Ok(());
    };
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(writer)?;
    writeln!(writer, "Found {} path(s)", ranked.len())?;
    writeln!(writer, "{}", rule)?;

    writeln!(writer, "All paths from shortest to longest:")?;
    for (i, path) in ranked.paths().iter().enumerate() {
        writeln!(
            writer,
            "Path {} (length {}): {}",
            i + 1,
            path.length(),
            format_path(path, grid)
        )?;
    }
    writeln!(writer, "{}", rule)?;

    write_highlight(writer, "Shortest path", shortest, grid)?;
    writeln!(writer, "{}", rule)?;
    write_highlight(writer, "Longest path", longest, grid)?;
    writeln!(writer, "{}", rule)?;

    writeln!(writer, "Lengths of all paths: {:?}", ranked.lengths())?;
    writeln!(writer, "Mean length: {:.2}", stats.mean)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{rank_paths, PathExplorer};

    fn report_for(lines: &[&str]) -> String {
        let grid = Grid::from_lines(lines).unwrap();
        let ranked = rank_paths(PathExplorer::get_paths(&grid));
        let mut buf = Vec::new();
        write_report(&mut buf, &grid, &ranked).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_path_marks_landmarks_and_arrows() {
        let grid = Grid::from_lines(["S.", ".F"]).unwrap();
        let paths = PathExplorer::get_paths(&grid);
        // Down first, then right.
        assert_eq!(format_path(&paths[0], &grid), "S(0,0) ↓ (1,0) → F(1,1)");
        assert_eq!(format_path(&paths[1], &grid), "S(0,0) → (0,1) ↓ F(1,1)");
    }

    #[test]
    fn test_overlay_keeps_start_and_finish() {
        let grid = Grid::from_lines(["S.#", "..F"]).unwrap();
        let ranked = rank_paths(PathExplorer::get_paths(&grid));
        let overlay = render_overlay(ranked.shortest().unwrap(), &grid);
        assert_eq!(overlay[0].chars().next(), Some('S'));
        assert_eq!(overlay[1].chars().last(), Some('F'));
        assert_eq!(overlay.concat().matches('*').count(), 2);
        assert_eq!(overlay[0].chars().nth(2), Some('#'));
    }

    #[test]
    fn test_report_for_corridor() {
        let report = report_for(&["S.F"]);
        assert!(report.contains("Found 1 path(s)"));
        assert!(report.contains("Path 1 (length 2): S(0,0) → (0,1) → F(0,2)"));
        assert!(report.contains("Shortest path (length 2):"));
        assert!(report.contains("S*F"));
        assert!(report.contains("Lengths of all paths: [2]"));
        assert!(report.contains("Mean length: 2.00"));
    }

    #[test]
    fn test_report_orders_paths() {
        let report = report_for(&["S..", "..F"]);
        assert!(report.contains("Found 4 path(s)"));
        assert!(report.contains("Longest path (length 5):"));
        assert!(report.contains("Lengths of all paths: [3, 3, 3, 5]"));
        assert!(report.contains("Mean length: 3.50"));
    }

    #[test]
    fn test_report_without_paths() {
        let report = report_for(&["S#F"]);
        assert_eq!(report, "No path from S to F found.\n");
    }
}
