//! Lattice to grayscale pixel buffer.

use image::{GrayImage, Luma};
use ulam_core::Lattice;

/// Luma value for prime cells (black).
pub const PRIME_LUMA: u8 = 0;

/// Luma value for every other cell (white).
pub const BACKGROUND_LUMA: u8 = 255;

/// Render a lattice as a `dim x dim` grayscale image.
///
/// Pixel `(x, y)` is cell `(row = y, col = x)`: black when the cell is
/// nonzero, white otherwise.
///
/// # Examples
///
/// ```
/// use ulam_core::Lattice;
/// use ulam_render::{render, BACKGROUND_LUMA, PRIME_LUMA};
///
/// let lattice = Lattice::from_rows(vec![vec![2, 0], vec![3, 0]]).unwrap();
/// let img = render(&lattice);
/// assert_eq!(img.dimensions(), (2, 2));
/// assert_eq!(img.get_pixel(0, 1).0, [PRIME_LUMA]);
/// assert_eq!(img.get_pixel(1, 1).0, [BACKGROUND_LUMA]);
/// ```
pub fn render(lattice: &Lattice) -> GrayImage {
    let side = lattice.dimension().get();
    let mut img = GrayImage::new(side, side);

    for (y, row) in lattice.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            let luma = if value != 0 {
                PRIME_LUMA
            } else {
                BACKGROUND_LUMA
            };
            img.put_pixel(x as u32, y as u32, Luma([luma]));
        }
    }
    img
}
