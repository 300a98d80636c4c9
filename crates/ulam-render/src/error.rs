//! Error types for image output.

use std::fmt;
use std::path::PathBuf;

/// Errors from encoding or writing a rendered lattice.
#[derive(Debug)]
pub enum RenderError {
    /// The output path has no extension that maps to a supported image format.
    UnsupportedFormat {
        /// The output path.
        path: PathBuf,
    },
    /// Encoding or writing the image failed.
    Image(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat { path } => {
                write!(f, "cannot infer image format from '{}'", path.display())
            }
            Self::Image(e) => write!(f, "image output failed: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
