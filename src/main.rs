use std::io;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mouse_mover::cli::Cli;
use mouse_mover::render::StatusScreen;
use mouse_mover::{Cursor, CycleDriver};

/// Log to stderr. `RUST_LOG` wins over the verbosity flags.
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_filter());

    let config = cli.load_config()?;
    let cursor = Cursor::detect(config.cursor.backend)?;
    let display = cursor.screen_size(config.fallback_screen());

    let (interrupt_tx, interrupts) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(());
    })
    .context("failed to install Ctrl+C handler")?;

    let interactive = atty::is(atty::Stream::Stdout);
    let screen = StatusScreen::new(io::stdout(), interactive);
    let mut driver = CycleDriver::new(config.driver_settings(), cursor, screen, display);
    let report = driver.run(&interrupts)?;

    tracing::debug!(?report, "run finished");
    Ok(())
}
