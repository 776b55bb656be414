//! HDR TGA image data types

use half::f16;

/// What to do when the pixel payload ends before `width * height * 3` samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShortReadPolicy {
    /// Fail with `ConversionError::TruncatedPayload`
    #[default]
    Reject,
    /// Pad the missing samples with `+0.0`
    ZeroFill,
}

/// Decoded 48-bit HDR TGA image
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Width of the image in pixels
    pub width: u16,
    /// Height of the image in pixels
    pub height: u16,
    /// Bits per pixel as declared in the header (always 48 once decoded)
    pub bit_depth: u8,
    /// Interleaved RGB samples, source row 0 first
    pub samples: Vec<f16>,
    /// Samples actually present in the file; differs from `samples.len()` only when zero-filled
    pub samples_read: usize,
}

impl SourceImage {
    pub fn grid(&self) -> PixelGrid<'_> {
        PixelGrid {
            samples: &self.samples,
            width: self.width as usize,
            height: self.height as usize,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.samples_read == self.samples.len()
    }
}

/// Row-major `height x width x 3` view over the source samples.
#[derive(Debug, Clone, Copy)]
pub struct PixelGrid<'a> {
    samples: &'a [f16],
    width: usize,
    height: usize,
}

impl<'a> PixelGrid<'a> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All `width * 3` samples of one row.
    pub fn row(&self, row: usize) -> &'a [f16] {
        let stride = self.width * 3;
        &self.samples[row * stride..(row + 1) * stride]
    }

    pub fn pixel(&self, row: usize, col: usize) -> [f16; 3] {
        let i = (row * self.width + col) * 3;
        [self.samples[i], self.samples[i + 1], self.samples[i + 2]]
    }
}
