use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};

use rusbit_webseed::cli::Cli;
use rusbit_webseed::config::UsageError;
use rusbit_webseed::engine;

enum CliError {
    Usage(UsageError),
    Failure(anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Failure(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // clap prints its own usage errors and exits with status 2
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                CliError::Usage(usage) => {
                    eprintln!("error: {}", usage);
                    eprintln!("{}", Cli::command().render_usage());
                }
                CliError::Failure(failure) => eprintln!("error: {:#}", failure),
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.into_config().map_err(CliError::Usage)?;

    let outcome = engine::run(&config)
        .with_context(|| {
            format!(
                "could not {} webseeds in {}",
                config.mode.name(),
                config.torrent_path.display()
            )
        })
        .map_err(CliError::Failure)?;

    engine::report(&outcome, &mut io::stdout().lock())
        .context("failed to write to stdout")
        .map_err(CliError::Failure)?;
    Ok(())
}
