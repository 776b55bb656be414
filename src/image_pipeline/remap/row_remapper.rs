use tracing::debug;

use crate::image_pipeline::remap::types::{DestinationImage, RgbaPixel};
use crate::image_pipeline::tga::SourceImage;

/// Reorders a bottom-up RGB TGA raster into top-down RGBA records.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowRemapper;

impl RowRemapper {
    pub fn new() -> Self {
        Self
    }

    pub fn process(&self, source: &SourceImage) -> DestinationImage {
        let grid = source.grid();
        let (width, height) = (grid.width(), grid.height());
        debug!("Remapping {}x{} image", width, height);

        let mut pixels = Vec::with_capacity(width * height);
        if width > 0 {
            // destination row r <- source row height - 1 - r
            for src_row in (0..height).rev() {
                pixels.extend(
                    grid.row(src_row)
                        .chunks_exact(3)
                        .map(|rgb| RgbaPixel::opaque([rgb[0], rgb[1], rgb[2]])),
                );
            }
        }

        DestinationImage {
            width,
            height,
            pixels,
        }
    }
}

/// Shorthand for `RowRemapper.process(source)`.
pub fn remap(source: &SourceImage) -> DestinationImage {
    RowRemapper.process(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;

    fn source(width: u16, height: u16, values: &[f32]) -> SourceImage {
        let samples: Vec<f16> = values.iter().map(|v| f16::from_f32(*v)).collect();
        assert_eq!(samples.len(), width as usize * height as usize * 3);
        SourceImage {
            width,
            height,
            bit_depth: 48,
            samples_read: samples.len(),
            samples,
        }
    }

    fn px(r: f32, g: f32, b: f32) -> RgbaPixel {
        RgbaPixel::opaque([f16::from_f32(r), f16::from_f32(g), f16::from_f32(b)])
    }

    #[test]
    fn test_single_row_keeps_channel_order() {
        let src = source(2, 1, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let dst = remap(&src);

        assert_eq!(dst.pixels, vec![px(1.0, 2.0, 3.0), px(4.0, 5.0, 6.0)]);
    }

    #[test]
    fn test_single_column_is_flipped() {
        let src = source(1, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let dst = remap(&src);

        assert_eq!(dst.pixel(0, 0), px(4.0, 5.0, 6.0));
        assert_eq!(dst.pixel(1, 0), px(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_flip_invariant_holds_for_every_pixel() {
        let (w, h) = (4u16, 3u16);
        let values: Vec<f32> = (0..(w * h * 3)).map(|i| i as f32 * 0.25 - 4.0).collect();
        let src = source(w, h, &values);
        let grid = src.grid();

        let dst = RowRemapper::new().process(&src);

        assert_eq!((dst.width, dst.height), (w as usize, h as usize));
        assert_eq!(dst.pixels.len(), (w * h) as usize);
        for r in 0..h as usize {
            for c in 0..w as usize {
                let expected = RgbaPixel::opaque(grid.pixel(h as usize - 1 - r, c));
                assert_eq!(dst.pixel(r, c), expected, "pixel ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_alpha_is_one_regardless_of_input() {
        let src = source(2, 2, &[f32::NAN, -0.0, 65504.0, -65504.0, 0.0, 1.0e-7, 7.0, 8.0, 9.0, 0.0, 0.0, 0.0]);

        let dst = remap(&src);

        assert!(dst.pixels.iter().all(|p| p.a == f16::ONE));
    }

    #[test]
    fn test_bit_patterns_pass_through() {
        let mut src = source(1, 1, &[0.0, 0.0, 0.0]);
        src.samples = vec![f16::from_bits(0x7E01), f16::from_bits(0x8000), f16::from_bits(0x0001)];

        let dst = remap(&src);

        assert_eq!(dst.pixels[0].r.to_bits(), 0x7E01);
        assert_eq!(dst.pixels[0].g.to_bits(), 0x8000);
        assert_eq!(dst.pixels[0].b.to_bits(), 0x0001);
    }

    #[test]
    fn test_zero_width_yields_empty_image() {
        let src = source(0, 5, &[]);

        let dst = remap(&src);

        assert_eq!((dst.width, dst.height), (0, 5));
        assert!(dst.pixels.is_empty());
    }

    #[test]
    fn test_pixel_record_layout() {
        assert_eq!(std::mem::size_of::<RgbaPixel>(), 8);
        let dst = remap(&source(1, 1, &[1.0, 2.0, 3.0]));
        let bytes = dst.as_bytes();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..2], &f16::from_f32(1.0).to_ne_bytes());
        assert_eq!(&bytes[6..8], &f16::ONE.to_ne_bytes());
    }
}
