//! The end-to-end pipeline: dimension to lattice to image file.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use ulam_core::{text, Dimension};
use ulam_render::{write_image, write_image_as, RenderError};
use ulam_spiral::build_lattice;

use crate::config::{ConfigError, UlamConfig};

/// What a successful [`run`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Side length of the lattice.
    pub dimension: Dimension,
    /// Number of prime (black) cells.
    pub prime_count: usize,
    /// FNV-1a fingerprint of the lattice.
    pub fingerprint: u64,
    /// Where the image was written.
    pub output: PathBuf,
}

/// Errors from [`run`].
#[derive(Debug)]
pub enum UlamError {
    /// The configuration was rejected before any work started.
    Config(ConfigError),
    /// The image could not be encoded or written.
    Render(RenderError),
    /// The reference text dump could not be written.
    Io {
        /// The text output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for UlamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::Render(e) => write!(f, "{e}"),
            Self::Io { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl Error for UlamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Render(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for UlamError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RenderError> for UlamError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

/// Build the spiral described by `config` and write it out.
///
/// Validation happens first; an invalid config writes nothing.
#[tracing::instrument(skip_all, fields(dimension = config.dimension, output = %config.output.display()))]
pub fn run(config: &UlamConfig) -> Result<RunSummary, UlamError> {
    let dimension = config.validate()?;
    let lattice = build_lattice(dimension);

    match config.format {
        Some(format) => write_image_as(&lattice, &config.output, format)?,
        None => write_image(&lattice, &config.output)?,
    }

    if let Some(path) = &config.text_output {
        let io_err = |source: io::Error| UlamError::Io {
            path: path.clone(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        text::write_lattice(BufWriter::new(file), &lattice).map_err(io_err)?;
        tracing::debug!(path = %path.display(), "reference text written");
    }

    let summary = RunSummary {
        dimension,
        prime_count: lattice.prime_count(),
        fingerprint: lattice.fingerprint(),
        output: config.output.clone(),
    };
    tracing::info!(
        primes = summary.prime_count,
        fingerprint = summary.fingerprint,
        "ulam spiral written"
    );
    Ok(summary)
}
