use std::path::PathBuf;

use clap::Parser;

/// Merges every V8 precise-coverage JSON file under a directory into one
/// normalized report.
#[derive(Debug, Parser)]
#[command(name = "coverage-merge", version)]
pub struct Cli {
    /// Directory of per-process coverage JSON files to merge.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Path the merged report is written to.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Validate every input report before merging; abort on the first
    /// invariant violation instead of merging through it.
    #[arg(long, default_value_t = false)]
    pub validate: bool,

    /// Increase log verbosity; repeatable (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all but error-level logging.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// TOML file supplying defaults for `input`/`output`/`pretty`. CLI flags
    /// override values it sets.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn log_level_filter(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
