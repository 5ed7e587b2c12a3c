use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Lists every simple path from S to F in a text maze, shortest first.", long_about = None)]
pub struct Cli {
    /// Maze file to read. Reads standard input until a blank line when omitted.
    pub maze_file: Option<PathBuf>,

    /// Suppress the verbose log file, only printing the report.
    #[clap(short, long)]
    pub quiet: bool,

    /// Stop searching after this many paths have been found.
    #[clap(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Also write the report to this file.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Where verbose progress messages are written.
    #[clap(long, default_value = "maze_paths.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["maze-paths"]);
        assert!(cli.maze_file.is_none());
        assert!(!cli.quiet);
        assert!(cli.limit.is_none());
        assert_eq!(cli.log_file, PathBuf::from("maze_paths.log"));
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "maze-paths",
            "maze.txt",
            "-q",
            "--limit",
            "10",
            "-o",
            "report.txt",
        ]);
        assert_eq!(cli.maze_file, Some(PathBuf::from("maze.txt")));
        assert!(cli.quiet);
        assert_eq!(cli.limit, Some(10));
        assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(Cli::try_parse_from(["maze-paths", "--limit", "0"]).is_err());
    }
}
