//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use ulam::{UlamConfig, DEFAULT_DIMENSION};

/// Visualize the Ulam spiral.
///
/// Writes a DIM x DIM grayscale image in which prime cells are black and
/// all other cells white. The image format follows the file extension.
#[derive(Parser, Debug)]
#[command(name = "uspiral", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Output image path (e.g. ulam.png).
    pub output: PathBuf,

    /// Side length of the square lattice.
    #[arg(short, long, value_name = "DIM", default_value_t = DEFAULT_DIMENSION)]
    pub dimension: i64,

    /// Also write the lattice as text, one row per line.
    #[arg(long, value_name = "PATH")]
    pub text: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level.
    ///
    /// `RUST_LOG` takes precedence over the `-v` count when set.
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()));

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Build the run configuration from the parsed arguments.
    pub fn to_config(&self) -> UlamConfig {
        let config = UlamConfig::new(self.dimension, &self.output);
        match &self.text {
            Some(path) => config.with_text_output(path),
            None => config,
        }
    }
}
