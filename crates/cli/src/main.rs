// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regmatch CLI entry point.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use regmatch::cli::Cli;
use regmatch::color::resolve_color;
use regmatch::config::{LogLevel, OutputFormat, RunConfig};
use regmatch::error::ExitCode;
use regmatch::output::json::JsonFormatter;
use regmatch::output::text::TextFormatter;

fn init_logging(level: LogLevel) {
    let filter = match level.filter() {
        Some(filter) => EnvFilter::new(filter.to_string()),
        None => EnvFilter::try_from_env("REGMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off")),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = RunConfig::from(&cli);
    init_logging(config.log_level);
    tracing::debug!(debug_level = ?config.log_level, "starting");

    let exit_code = match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("regmatch: {}", e);
            match e.downcast_ref::<regmatch::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run(config: &RunConfig) -> anyhow::Result<ExitCode> {
    let outcome = regmatch::run(config)?;

    match config.output {
        OutputFormat::Text => TextFormatter::stdout(resolve_color()).write(config, &outcome)?,
        OutputFormat::Json => JsonFormatter::new(std::io::stdout()).write(config, &outcome)?,
    }

    Ok(outcome.exit_code())
}
