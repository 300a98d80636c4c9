//! Run configuration and validation.
//!
//! [`UlamConfig`] is the input to [`run`](crate::run).
//! [`validate()`](UlamConfig::validate) checks it before any work starts.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use ulam_core::{Dimension, SpiralError};
use ulam_render::ImageFormat;

/// Side length used when none is given.
pub const DEFAULT_DIMENSION: i64 = 201;

// ── UlamConfig ─────────────────────────────────────────────────────

/// What to generate and where to write it.
#[derive(Clone, Debug, PartialEq)]
pub struct UlamConfig {
    /// Requested side length. Validated by [`UlamConfig::validate`].
    pub dimension: i64,
    /// Output image path.
    pub output: PathBuf,
    /// Image container. `None` infers it from the extension of `output`.
    pub format: Option<ImageFormat>,
    /// Optional path for a copy of the lattice in the reference text format.
    pub text_output: Option<PathBuf>,
}

impl UlamConfig {
    /// A config writing a `dimension x dimension` spiral to `output`.
    pub fn new(dimension: i64, output: impl Into<PathBuf>) -> Self {
        Self {
            dimension,
            output: output.into(),
            format: None,
            text_output: None,
        }
    }

    /// Force the image container instead of inferring it from the extension.
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Also write the lattice as reference text to `path`.
    pub fn with_text_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.text_output = Some(path.into());
        self
    }

    /// Check structural invariants and return the validated dimension.
    pub fn validate(&self) -> Result<Dimension, ConfigError> {
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }
        if self.text_output.as_ref() == Some(&self.output) {
            return Err(ConfigError::SameOutputPaths {
                path: self.output.clone(),
            });
        }
        Ok(Dimension::new(self.dimension)?)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`UlamConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The dimension is out of range.
    Dimension(SpiralError),
    /// The output image path is empty.
    EmptyOutputPath,
    /// The image and the reference text would overwrite each other.
    SameOutputPaths {
        /// The shared path.
        path: PathBuf,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension(e) => write!(f, "{e}"),
            Self::EmptyOutputPath => write!(f, "output image path not specified"),
            Self::SameOutputPaths { path } => write!(
                f,
                "image and text output both point at '{}'",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dimension(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpiralError> for ConfigError {
    fn from(e: SpiralError) -> Self {
        Self::Dimension(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_yields_dimension() {
        let cfg = UlamConfig::new(DEFAULT_DIMENSION, "ulam.png");
        assert_eq!(cfg.validate().unwrap().get(), 201);
    }

    #[test]
    fn non_positive_dimension_rejected() {
        for dim in [0, -1] {
            let cfg = UlamConfig::new(dim, "ulam.png");
            assert_eq!(
                cfg.validate(),
                Err(ConfigError::Dimension(SpiralError::InvalidDimension { dim }))
            );
        }
    }

    #[test]
    fn empty_output_rejected() {
        let cfg = UlamConfig::new(5, "");
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyOutputPath));
    }

    #[test]
    fn text_output_must_differ_from_image() {
        let cfg = UlamConfig::new(5, "ulam.png").with_text_output("ulam.png");
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::SameOutputPaths { .. })
        ));
        let ok = UlamConfig::new(5, "ulam.png").with_text_output("ulam.txt");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let cfg = UlamConfig::new(9, "a.out")
            .with_format(ImageFormat::Png)
            .with_text_output("a.txt");
        assert_eq!(cfg.format, Some(ImageFormat::Png));
        assert_eq!(cfg.text_output, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn invalid_dimension_message() {
        let err = UlamConfig::new(0, "x.png").validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid dimension 0");
    }
}
