//! Frame representation for the levels pipeline.

use image::RgbaImage;
use thiserror::Error;

/// Errors raised when converting between frame representations.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("pixel buffer length {actual} does not match {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },
}

/// One complete image buffer processed by a single render invocation.
///
/// Always stored as RGBA f32 with normalized `[0, 1]` channels, matching the
/// working format of the per-pixel evaluation. Width and height are fixed for
/// the duration of a render call.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major RGBA f32 format, `width * height` entries.
    pub pixels: Vec<[f32; 4]>,
}

impl Frame {
    /// Allocate a frame filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; width as usize * height as usize],
        }
    }

    /// Wrap an existing pixel buffer, validating its length.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[f32; 4]>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(FrameError::DimensionMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert an 8-bit RGBA image into the normalized working format.
    pub fn from_rgba8(image: &RgbaImage) -> Self {
        let pixels = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                [
                    f32::from(r) / 255.0,
                    f32::from(g) / 255.0,
                    f32::from(b) / 255.0,
                    f32::from(a) / 255.0,
                ]
            })
            .collect();
        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    /// Quantize back to an 8-bit RGBA image, rounding to nearest.
    pub fn to_rgba8(&self) -> Result<RgbaImage, FrameError> {
        let mut data = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            for c in px {
                data.push((c.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        RgbaImage::from_raw(self.width, self.height, data).ok_or(FrameError::DimensionMismatch {
            width: self.width,
            height: self.height,
            actual: self.pixels.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let result = Frame::from_pixels(2, 2, vec![[0.0; 4]; 3]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rgba8_round_trip_preserves_values() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, image::Rgba([0, 127, 255, 64]));
        image.put_pixel(1, 0, image::Rgba([50, 200, 10, 255]));

        let frame = Frame::from_rgba8(&image);
        let back = frame.to_rgba8().unwrap();
        assert_eq!(image, back);
    }

    #[test]
    fn test_new_frame_is_transparent_black() {
        let frame = Frame::new(3, 2);
        assert_eq!(frame.pixels.len(), 6);
        assert!(frame.pixels.iter().all(|p| *p == [0.0; 4]));
    }
}
