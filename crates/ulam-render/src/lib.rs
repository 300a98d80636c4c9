//! Monochrome rendering of Ulam lattices.
//!
//! A finished [`Lattice`](ulam_core::Lattice) maps to an 8-bit grayscale
//! image one pixel per cell: prime cells are black ([`PRIME_LUMA`]), all
//! others white ([`BACKGROUND_LUMA`]). The renderer does no primality work
//! of its own; a nonzero cell is a prime by construction.
//!
//! - [`render`]: lattice to in-memory [`image::GrayImage`]
//! - [`write_image`] / [`write_image_as`]: render and encode to a file

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod raster;
pub mod write;

pub use error::RenderError;
pub use raster::{render, BACKGROUND_LUMA, PRIME_LUMA};
pub use write::{format_for_path, write_image, write_image_as};

pub use image::{GrayImage, ImageFormat};
