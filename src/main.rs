use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cronograma::app::{self, Outcome};
use cronograma::cli::Cli;
use cronograma::config::CronogramaConfig;
use cronograma::ui::Diagnostics;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the schedule.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let diagnostics = Diagnostics::new();
    match run(&cli, &diagnostics) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            diagnostics.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, diagnostics: &Diagnostics) -> Result<()> {
    let mut config = CronogramaConfig::load(cli.config.as_deref())
        .context("falha ao carregar a configuração")?;
    cli.apply(&mut config);
    debug!(?config, "configuration resolved");

    let stdout = std::io::stdout();
    let outcome = app::run(&config, diagnostics, &mut stdout.lock())?;

    if cli.verbose
        && let Outcome::Scheduled(schedule) = &outcome
    {
        diagnostics.summary(schedule);
    }

    Ok(())
}
