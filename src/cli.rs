//! Command-line surface of the `treesort` binary: argument definitions,
//! input parsing and the errors shown to the user.

use std::fs;
use std::io::{self, Read, Write};
use std::num::ParseIntError;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use thiserror::Error;
use tracing::{debug, info};

use treesort::tree_sort_owned;

/// Standard exit codes (BSD sysexits.h compatible)
pub mod exitcode {
    /// Successful termination
    pub const OK: i32 = 0;

    /// Data format error
    pub const DATAERR: i32 = 65;

    /// Cannot open input
    pub const NOINPUT: i32 = 66;

    /// Input/output error
    pub const IOERR: i32 = 74;
}

/// Sort integers by building a binary search tree and walking it in order
#[derive(Parser, Debug)]
#[command(name = "treesort")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Integers to sort (read from --input or stdin when none are given)
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read whitespace separated integers from this file
    #[arg(short, long, value_hint = ValueHint::FilePath, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// Separator printed between sorted values
    #[arg(short, long, env = "TREESORT_SEPARATOR", default_value = " ")]
    pub separator: String,

    /// Print one value per line (overrides --separator)
    #[arg(short, long)]
    pub lines: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    fn separator(&self) -> &str {
        if self.lines {
            "\n"
        } else {
            &self.separator
        }
    }
}

/// Errors surfaced to the user by the binary.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("not an integer: {token:?}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("cannot read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Parse { .. } => exitcode::DATAERR,
            CliError::Input { .. } => exitcode::NOINPUT,
            CliError::Io(_) => exitcode::IOERR,
        }
    }
}

/// Splits `text` on whitespace and parses every token as an `i64`.
pub fn parse_values(text: &str) -> CliResult<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse().map_err(|source| CliError::Parse {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Joins the values with `separator`.
pub fn render(values: &[i64], separator: &str) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Gathers the input text: positional values first, then `--input`, then
/// whatever is on `stdin`.
fn read_input(cli: &Cli, stdin: &mut impl Read) -> CliResult<String> {
    if !cli.values.is_empty() {
        debug!(count = cli.values.len(), "reading values from arguments");
        return Ok(cli.values.join(" "));
    }
    match &cli.input {
        Some(path) => {
            debug!(path = %path.display(), "reading values from file");
            fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.clone(),
                source,
            })
        }
        None => {
            debug!("reading values from stdin");
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Reads, sorts and prints the values described by `cli`.
pub fn run(cli: &Cli, stdin: &mut impl Read, out: &mut impl Write) -> CliResult<()> {
    let values = parse_values(&read_input(cli, stdin)?)?;
    info!(count = values.len(), "sorting");

    let sorted = tree_sort_owned(values);
    writeln!(out, "{}", render(&sorted, cli.separator()))?;
    out.flush()?;
    Ok(())
}
