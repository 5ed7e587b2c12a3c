mod cli;
mod error;
mod file_handler;
mod logger;
mod orchestrator;
mod processing;
mod report;

pub use cli::Cli;
pub use error::AppError;
pub use orchestrator::run_app;

// Logging macros for the child modules of `app`. They expand to calls on
// `super::logger`, so they only resolve from a direct child of this module.
macro_rules! verbose_println {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_message_args(format_args!($($arg)*));
        }
    };
}

macro_rules! verbose_eprintln {
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            super::logger::log_verbose_error_args(format_args!($($arg)*));
        }
    };
}

// Path-importable from siblings as `super::{verbose_println, verbose_eprintln}`.
use verbose_eprintln;
use verbose_println;
