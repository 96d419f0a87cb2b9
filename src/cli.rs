//! Command-line interface definition.
//!
//! Lives in the library so xtask can render the man page from it.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Config, ConfigError};
use crate::cursor::Backend;
use crate::pattern::Pattern;

#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("MOUSE_MOVER_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("MOUSE_MOVER_BUILD_DATE"),
    ")"
);

/// Keep the cursor moving along random patterns.
#[derive(Debug, Parser)]
#[command(
    name = "mouse-mover",
    version = VERSION,
    about = "Keep the mouse cursor moving along random sine, zigzag and circle patterns",
    long_about = "Moves the mouse cursor along a randomly chosen pattern (sine wave, zigzag \
                  or circle) once per interval, shows live statistics, and prints a summary \
                  when all cycles ran or Ctrl+C is pressed.\n\n\
                  Settings are read from $XDG_CONFIG_HOME/mouse-mover/config.toml when it \
                  exists; flags override the file."
)]
pub struct Cli {
    /// Number of cycles before exiting
    #[arg(short = 'n', long, value_name = "N")]
    pub cycles: Option<u32>,

    /// Milliseconds between cycles
    #[arg(short, long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Cursor control backend
    #[arg(short, long, value_enum)]
    pub backend: Option<Backend>,

    /// Do not move the cursor (same as --backend dry-run)
    #[arg(long, conflicts_with = "backend")]
    pub dry_run: bool,

    /// Comma separated patterns to choose from (sine, zigzag, circle)
    #[arg(short, long, value_delimiter = ',', value_name = "LIST")]
    pub patterns: Option<Vec<Pattern>>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Load the config file, apply flag overrides and validate the result.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Overwrite config values with the flags that were given.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(cycles) = self.cycles {
            config.run.total_cycles = cycles;
        }
        if let Some(interval) = self.interval_ms {
            config.run.interval_ms = interval;
        }
        if let Some(patterns) = &self.patterns {
            config.run.patterns = patterns.clone();
        }
        if self.dry_run {
            config.cursor.backend = Backend::DryRun;
        } else if let Some(backend) = self.backend {
            config.cursor.backend = backend;
        }
    }

    /// Default log filter for the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
