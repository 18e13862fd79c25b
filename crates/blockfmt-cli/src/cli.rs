//! CLI argument parsing using clap derive

use std::path::PathBuf;

use blockfmt_formatter::FormatterChoice;
use blockfmt_text::{Position, TextRange};
use clap::{Parser, Subcommand};

/// blockfmt - Format selected top-level blocks with whole-file formatters
#[derive(Parser, Debug)]
#[command(name = "blockfmt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the global config.toml
    #[arg(long, global = true, env = "BLOCKFMT_CONFIG_DIR", hide = true)]
    pub config_dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Format a file, or only the blocks around a range of it
    ///
    /// Positions are zero-based.
    ///
    /// Examples:
    ///   blockfmt format src/Main.purs                # whole file
    ///   blockfmt format src/Main.purs --range 12-14  # lines 12 to 14
    ///   blockfmt format src/Main.purs --range 12:4-12:20 --write
    Format {
        /// File to format
        file: PathBuf,

        /// Range to format: `LINE:COL-LINE:COL`, `LINE-LINE` or `LINE`
        #[arg(short, long, value_parser = parse_range)]
        range: Option<TextRange>,

        /// Built-in formatter to use (purty, pose, tidy or none)
        #[arg(short, long)]
        formatter: Option<FormatterChoice>,

        /// Without --range, only normalise whitespace
        #[arg(long)]
        only_selection: bool,

        /// Config file to use instead of the nearest .blockfmt.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the result back to the file
        #[arg(short, long, conflicts_with = "json")]
        write: bool,

        /// Print the edits as JSON instead of the formatted file
        #[arg(long)]
        json: bool,
    },

    /// Show the block range a selection expands to
    Locate {
        /// File to inspect
        file: PathBuf,

        /// Selection: `LINE:COL-LINE:COL`, `LINE-LINE` or `LINE`
        #[arg(short, long, value_parser = parse_range)]
        range: TextRange,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List built-in formatters and whether they are installed
    Formatters {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Parse `L:C-L:C`, `L-L` or `L`. Whole-line forms select to the end of
/// the last line.
pub fn parse_range(s: &str) -> Result<TextRange, String> {
    let (start, end) = match s.split_once('-') {
        Some((start, end)) => (start, Some(end)),
        None => (s, None),
    };

    let start = parse_position(start, 0)?;
    let end = match end {
        Some(end) => parse_position(end, usize::MAX)?,
        None => Position::new(start.line, usize::MAX),
    };
    Ok(TextRange::new(start, end))
}

fn parse_position(s: &str, default_character: usize) -> Result<Position, String> {
    let number = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| format!("invalid position '{s}': expected LINE or LINE:COL"))
    };
    match s.split_once(':') {
        Some((line, character)) => Ok(Position::new(number(line)?, number(character)?)),
        None => Ok(Position::new(number(s)?, default_character)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn range(start: (usize, usize), end: (usize, usize)) -> TextRange {
        TextRange::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case("3:2-5:7", range((3, 2), (5, 7)))]
    #[case("3-5", range((3, 0), (5, usize::MAX)))]
    #[case("4", range((4, 0), (4, usize::MAX)))]
    #[case("5:7-3:2", range((3, 2), (5, 7)))]
    fn parses_ranges(#[case] input: &str, #[case] expected: TextRange) {
        assert_eq!(parse_range(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("a-b")]
    #[case("1:x")]
    fn rejects_bad_ranges(#[case] input: &str) {
        assert!(parse_range(input).is_err());
    }

    #[test]
    fn parse_format_command() {
        let cli = Cli::try_parse_from([
            "blockfmt", "format", "Main.purs", "--range", "1-2", "--formatter", "purty", "--write",
        ])
        .unwrap();
        match cli.command {
            Commands::Format {
                file,
                range,
                formatter,
                write,
                json,
                ..
            } => {
                assert_eq!(file, PathBuf::from("Main.purs"));
                assert!(range.is_some());
                assert_eq!(formatter, Some(FormatterChoice::Purty));
                assert!(write);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn write_and_json_conflict() {
        let result = Cli::try_parse_from(["blockfmt", "format", "Main.purs", "--write", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_formatter_is_rejected() {
        let result = Cli::try_parse_from(["blockfmt", "format", "Main.purs", "-f", "gofmt"]);
        assert!(result.is_err());
    }
}
