//! Command line arguments

// restools modules
use restools_scan::{Dialect, DEFAULT_MAX_DATES, DEFAULT_MAX_KEYS};

// standard library
use std::path::PathBuf;

// external crates
use clap::{Args, Parser, Subcommand};

/// Quick indexing of reservoir simulation binaries
///
/// Records are found from their headers alone, so even very large restart
/// files are listed in moments.
#[derive(Parser, Debug)]
#[command(name = "restools", version, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging (-v, -vv)
    ///
    /// If specified, the default log level of INFO is increased to DEBUG (-v)
    /// or TRACE (-vv). Errors and warnings are always logged unless quiet
    /// (-q) is used.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output (overrules --verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every record in a file
    Keywords(KeywordArgs),

    /// List the report steps of a restart file
    Dates(DateArgs),
}

#[derive(Args, Debug)]
pub struct KeywordArgs {
    /// Path to the binary file
    pub file: PathBuf,

    /// Container layout of the file ('ecl', 'roff')
    #[arg(short, long, value_parser = parse_dialect, default_value = "ecl")]
    pub format: Dialect,

    /// Add the report step date to every record (ecl only)
    #[arg(short, long)]
    pub dates: bool,

    /// Most records expected in the file
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_KEYS)]
    pub max_keys: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct DateArgs {
    /// Path to the restart file
    pub file: PathBuf,

    /// Most report steps expected in the file
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DATES)]
    pub max_dates: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Where the table goes, the terminal by default
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Write the table as CSV to a file
    #[arg(long, value_name = "path", conflicts_with = "json")]
    pub csv: Option<PathBuf>,

    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_dialect(s: &str) -> Result<Dialect, String> {
    s.parse::<Dialect>().map_err(|e| e.to_string())
}
