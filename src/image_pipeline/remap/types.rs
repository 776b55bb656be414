//! Types for the remapped, EXR-ready pixel layout

use bytemuck::{Pod, Zeroable};
use half::f16;

/// One interleaved half-float RGBA pixel record.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RgbaPixel {
    pub r: f16,
    pub g: f16,
    pub b: f16,
    pub a: f16,
}

impl RgbaPixel {
    /// Opaque pixel from an RGB triple.
    pub fn opaque([r, g, b]: [f16; 3]) -> Self {
        Self { r, g, b, a: f16::ONE }
    }
}

/// Image data in output order: row 0 is the last row of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// `width * height` pixel records, row-major
    pub pixels: Vec<RgbaPixel>,
}

impl DestinationImage {
    pub fn pixel(&self, row: usize, col: usize) -> RgbaPixel {
        self.pixels[row * self.width + col]
    }

    /// The pixel buffer as raw bytes, in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
