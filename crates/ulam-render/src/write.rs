//! Encode a rendered lattice to an image file.
//!
//! The container is chosen from the output path's extension (`.png`,
//! `.bmp`, `.pgm`, `.tiff`, ...) unless given explicitly.

use std::path::Path;

use image::ImageFormat;
use ulam_core::Lattice;

use crate::error::RenderError;
use crate::raster::render;

/// Infer the image format from `path`'s extension.
pub fn format_for_path(path: &Path) -> Result<ImageFormat, RenderError> {
    ImageFormat::from_path(path).map_err(|_| RenderError::UnsupportedFormat {
        path: path.to_path_buf(),
    })
}

/// Render `lattice` and write it to `path`, inferring the format from the extension.
pub fn write_image(lattice: &Lattice, path: &Path) -> Result<(), RenderError> {
    let format = format_for_path(path)?;
    write_image_as(lattice, path, format)
}

/// Render `lattice` and write it to `path` in the given format.
pub fn write_image_as(
    lattice: &Lattice,
    path: &Path,
    format: ImageFormat,
) -> Result<(), RenderError> {
    let img = render(lattice);
    img.save_with_format(path, format)?;
    tracing::debug!(
        path = %path.display(),
        format = ?format,
        width = img.width(),
        "image written"
    );
    Ok(())
}
