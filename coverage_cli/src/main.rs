mod args;
mod config;
mod error;
mod io;

use clap::Parser;

use args::Cli;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new().filter_level(cli.log_level_filter()).init();

    if let Err(err) = run(&cli) {
        log::error!("{err}");
        eprintln!("coverage-merge: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file_config = cli
        .config
        .as_deref()
        .map(config::load)
        .transpose()?
        .unwrap_or_default();

    let input = cli
        .input
        .clone()
        .or(file_config.input)
        .ok_or_else(|| CliError::NoInputFiles(std::path::PathBuf::from(".")))?;
    let output = cli.output.clone().or(file_config.output).ok_or_else(|| CliError::Io {
        path: std::path::PathBuf::from("--output"),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no output path given"),
    })?;
    let pretty = cli.pretty || file_config.pretty;

    log::info!("reading reports from {}", input.display());
    let reports = io::reader::read_reports(&input)?;
    log::info!("loaded {} report(s)", reports.len());

    if cli.validate {
        for report in &reports {
            coverage_core::validate::validate_process(report)?;
        }
        log::info!("all inputs passed validation");
    }

    let merged = coverage_core::merge_processes(reports);
    log::info!(
        "merged into {} script(s)",
        merged.result.len()
    );

    io::writer::write_report(&output, &merged, pretty)?;
    log::info!("wrote merged report to {}", output.display());
    Ok(())
}
