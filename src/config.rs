//! Command-line options and the validated run configuration.
//!
//! Flags are collected by [`Cli`] and then checked by `Config::try_from`, so
//! nothing is read or generated until the whole configuration is known to be
//! valid.

use crate::error::{GeneratorError, Result};
use crate::hash::HashAlgorithm;
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};

/// Sentinel output path meaning "write to standard output".
pub const STDOUT_SENTINEL: &str = "-";

/// Raw command-line flags.
#[derive(Parser, Debug, Clone)]
#[command(name = "user-generator")]
#[command(version)]
#[command(about = "Backoffice CLI user generator")]
pub struct Cli {
    /// File to read with user emails. Newline delimited list of emails.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Hash function to use: MD5, SHA1, SHA256, SHA512
    #[arg(short = 'H', long, default_value = "md5")]
    pub hash: String,

    /// File to write output to. Default is stdout.
    #[arg(short, long, default_value = STDOUT_SENTINEL)]
    pub output: String,

    /// Output formatted JSON
    #[arg(short, long)]
    pub pretty: bool,
}

/// Where the rendered records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// Maps the `--output` argument, treating `-` as stdout.
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDOUT_SENTINEL {
            Output::Stdout
        } else {
            Output::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("stdout"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated, immutable configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Existing file holding one email per line.
    pub input: PathBuf,

    /// Algorithm used for every record.
    pub hash: HashAlgorithm,

    pub output: Output,

    /// Indent JSON with two spaces (and overwrite instead of append).
    pub pretty: bool,
}

impl TryFrom<Cli> for Config {
    type Error = GeneratorError;

    fn try_from(cli: Cli) -> Result<Self> {
        let input = match cli.file {
            Some(path) if path_exists(&path) => path,
            file => return Err(GeneratorError::Usage { file }),
        };

        let hash = cli.hash.parse::<HashAlgorithm>()?;

        Ok(Config {
            input,
            hash,
            output: Output::from_arg(&cli.output),
            pretty: cli.pretty,
        })
    }
}

fn path_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}
