//! Handbase CLI entry point.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use handbase::import::JsonHandParser;
use handbase::session::Session;
use handbase::ui::Ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Interactive shell over an in-memory poker hand-history database.
#[derive(Parser, Debug)]
#[command(name = "handbase", version)]
struct Cli {
    /// Import a hand-history file before the session starts.
    #[arg(long, value_name = "FILE")]
    import: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("handbase=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("handbase=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Handbase starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = Ui::new();
    let mut session = Session::new(Box::new(JsonHandParser));

    // Startup import is fatal; it means the requested data set is missing.
    if let Some(path) = &cli.import {
        match session.import_file(path) {
            Ok(lines) => {
                for line in &lines {
                    ui.message(line);
                }
            }
            Err(e) => {
                ui.error(&e.to_string());
                return ExitCode::from(1);
            }
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    match session.run(&mut input, &mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
