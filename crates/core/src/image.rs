//! In-memory RGB rendering of a basin map.

use crate::color::Srgb;
use crate::error::BasinError;

/// A `size x size x 3` image with `f64` channels in [0, 1].
///
/// Same row-major layout as [`ClassGrid`](crate::grid::ClassGrid): row 0 is
/// y = -1, so a renderer that draws row 0 at the top flips the map vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    size: usize,
    data: Vec<f64>,
}

impl RgbImage {
    /// Builds an image from one color per pixel in row-major order.
    pub fn from_pixels(size: usize, pixels: &[Srgb]) -> Result<Self, BasinError> {
        if size == 0 {
            return Err(BasinError::InvalidGridSize);
        }
        let expected = size.checked_mul(size).ok_or(BasinError::InvalidGridSize)?;
        if pixels.len() != expected {
            return Err(BasinError::DimensionMismatch {
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            size,
            data: pixels.iter().flat_map(|c| c.to_array()).collect(),
        })
    }

    /// Pixels per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat channel data, `[r, g, b]` per pixel, row-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Color of the pixel at `(row, col)`.
    pub fn pixel(&self, row: usize, col: usize) -> Result<Srgb, BasinError> {
        if row >= self.size || col >= self.size {
            return Err(BasinError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let base = 3 * (row * self.size + col);
        Ok(Srgb {
            r: self.data[base],
            g: self.data[base + 1],
            b: self.data[base + 2],
        })
    }

    /// Quantizes every channel to a byte, giving an RGB8 buffer of length
    /// `size * size * 3`.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data
            .chunks_exact(3)
            .flat_map(|px| {
                Srgb {
                    r: px[0],
                    g: px[1],
                    b: px[2],
                }
                .to_rgb8()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> RgbImage {
        RgbImage::from_pixels(2, &[Srgb::RED, Srgb::WHITE, Srgb::GREEN, Srgb::BLUE]).unwrap()
    }

    #[test]
    fn from_pixels_lays_out_channels() {
        let img = checker();
        assert_eq!(img.size(), 2);
        assert_eq!(img.data().len(), 12);
        assert_eq!(&img.data()[0..6], &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn from_pixels_validates_length() {
        assert!(matches!(
            RgbImage::from_pixels(2, &[Srgb::RED]),
            Err(BasinError::DimensionMismatch { expected: 4, got: 1 })
        ));
        assert!(RgbImage::from_pixels(0, &[]).is_err());
    }

    #[test]
    fn pixel_reads_back_colors() {
        let img = checker();
        assert_eq!(img.pixel(1, 0).unwrap(), Srgb::GREEN);
        assert_eq!(img.pixel(1, 1).unwrap(), Srgb::BLUE);
        assert!(img.pixel(0, 2).is_err());
    }

    #[test]
    fn to_rgb8_quantizes() {
        let bytes = checker().to_rgb8();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[0..3], &[255, 0, 0]);
        assert_eq!(&bytes[3..6], &[255, 255, 255]);
        assert_eq!(&bytes[9..12], &[0, 0, 255]);
    }
}
