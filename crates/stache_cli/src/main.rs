//! stache CLI - Main entry point.
//!
//! A thin development front end for the template store: render a template,
//! dump raw source, or list the merged namespace. Useful with `--reload`
//! while editing a template tree.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::from_default_env()
                .add_directive("stache=info".parse().expect("static directive parses"))
                .add_directive("warn".parse().expect("static directive parses")),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();
    let store = cli.store();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(&store, args).await,
        Commands::Source(args) => commands::source::execute(&store, args).await,
        Commands::List => commands::list::execute(&store).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
