//! caret CLI entry point.

use std::{io, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use caret_cli::{Args, error_adapter::render_reports};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting caret");
    debug!(args:?; "Parsed arguments");

    let stdout = io::stdout();
    if let Err(err) = caret_cli::run(&args, &mut stdout.lock()) {
        let handler = miette::GraphicalReportHandler::new();
        match render_reports(&err, &handler) {
            Ok(reports) => reports.iter().for_each(|report| error!("{report}")),
            Err(_) => error!("{err}"),
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
