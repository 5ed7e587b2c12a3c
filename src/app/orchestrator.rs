//! Main application orchestrator.
//!
//! Coordinates one run of the path finder:
//! 1. Initializes logging.
//! 2. Loads maze lines from a file or standard input.
//! 3. Builds and validates the grid.
//! 4. Enumerates and ranks every simple path from start to finish.
//! 5. Renders the report to stdout and, if requested, to an output file.
//!
//! Adheres to command-line arguments like `quiet` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::report;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grid::Grid;
use crate::path::RankedPaths;
use std::io::{self, Write};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` when the maze cannot be read, is invalid, or the report
/// cannot be written. An unreachable finish is not an error.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Verbose file logging is unavailable but the run continues.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    if cli.maze_file.is_none() && !quiet_mode {
        println!("Enter the maze (blank line to finish):");
    }

    let result = run_pipeline(&cli);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "{}", e);
    }
    final_flush(quiet_mode);
    result
}

fn run_pipeline(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;
    let lines = processing::load_maze_lines(cli.maze_file.as_deref(), quiet_mode)?;
    let grid = processing::build_grid(&lines, quiet_mode)?;
    flush_log(quiet_mode);

    let ranked = processing::find_ranked_paths(&grid, cli.limit, quiet_mode);
    flush_log(quiet_mode);

    let rendered = render_report(&grid, &ranked)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    report::write_header(&mut handle)?;
    handle.write_all(rendered.as_bytes())?;
    handle.flush()?;

    if let Some(output_path) = &cli.output {
        file_handler::write_content_to_file(output_path, &rendered).map_err(|e| {
            verbose_eprintln!(
                quiet_mode,
                "[ERROR] Failed to write report ({}): {}",
                output_path.display(),
                e
            );
            AppError::Io(e)
        })?;
        verbose_println!(
            quiet_mode,
            "\n[INFO] Report written to {}",
            output_path.display()
        );
    }
    Ok(())
}

/// Renders the report into a `String` so it can be printed and saved alike.
fn render_report(grid: &Grid, ranked: &RankedPaths) -> Result<String, AppError> {
    let mut buf = Vec::new();
    report::write_report(&mut buf, grid, ranked)?;
    String::from_utf8(buf).map_err(|e| AppError::General(e.to_string()))
}

fn flush_log(quiet_mode: bool) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to flush verbose log: {}", e);
    }
}

fn final_flush(quiet_mode: bool) {
    verbose_println!(quiet_mode, "Run finished.");
    flush_log(quiet_mode);
}
