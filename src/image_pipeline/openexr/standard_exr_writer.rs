use std::mem::offset_of;
use std::path::Path;

use half::f16;
use tracing::{debug, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::openexr::encoder::ExrEncoder;
use crate::image_pipeline::openexr::exrs_encoder::ExrsEncoder;
use crate::image_pipeline::openexr::frame_buffer::{ChannelBinding, FrameBuffer, SliceLayout};
use crate::image_pipeline::openexr::types::{ConversionConfig, ExrHeader};
use crate::image_pipeline::openexr::writer::ExrImageWriter;
use crate::image_pipeline::remap::{DestinationImage, RgbaPixel};

/// Writes `DestinationImage`s as RGB half-float EXR files.
///
/// Alpha is present in the pixel records but is never declared or bound.
pub struct StandardExrWriter<E: ExrEncoder = ExrsEncoder> {
    encoder: E,
}

impl StandardExrWriter<ExrsEncoder> {
    pub fn new() -> Self {
        Self {
            encoder: ExrsEncoder,
        }
    }
}

impl Default for StandardExrWriter<ExrsEncoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ExrEncoder> StandardExrWriter<E> {
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }
}

/// Binds `R`, `G` and `B` to their fields inside each `RgbaPixel` record.
pub fn rgb_frame_buffer(image: &DestinationImage) -> Result<FrameBuffer<'_>> {
    if image.pixels.len() != image.width * image.height {
        return Err(ConversionError::InvalidArgument(format!(
            "{} pixels do not fill a {}x{} image",
            image.pixels.len(),
            image.width,
            image.height
        )));
    }

    let bytes = image.as_bytes();
    let x_stride = size_of::<RgbaPixel>();
    let y_stride = x_stride * image.width;

    let mut frame_buffer = FrameBuffer::new();
    for (name, offset) in [
        ("R", offset_of!(RgbaPixel, r)),
        ("G", offset_of!(RgbaPixel, g)),
        ("B", offset_of!(RgbaPixel, b)),
    ] {
        let layout = SliceLayout {
            element_size: size_of::<f16>(),
            offset,
            x_stride,
            y_stride,
        };
        frame_buffer.insert(ChannelBinding::new(
            name,
            bytes,
            layout,
            image.width,
            image.height,
        )?)?;
    }
    Ok(frame_buffer)
}

impl<E: ExrEncoder> ExrImageWriter for StandardExrWriter<E> {
    fn write_exr(
        &self,
        path: &Path,
        image: Option<&DestinationImage>,
        config: &ConversionConfig,
    ) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(ConversionError::InvalidArgument("output path is empty".to_string()));
        }
        let image = image.ok_or_else(|| {
            ConversionError::InvalidArgument("no image data to write".to_string())
        })?;
        if image.width == 0 || image.height == 0 {
            return Err(ConversionError::InvalidDimensions(image.width, image.height));
        }

        debug!("Writing EXR image: {}x{}", image.width, image.height);

        let header = ExrHeader::rgb_half(image.width, image.height, config.compression);
        let frame_buffer = rgb_frame_buffer(image)?;

        if let Err(e) = self.encoder.encode(path, &header, &frame_buffer) {
            if config.remove_partial_output && path.exists() {
                match std::fs::remove_file(path) {
                    Ok(()) => debug!("Removed partial output {}", path.display()),
                    Err(rm) => warn!("Could not remove partial output {}: {}", path.display(), rm),
                }
            }
            return Err(match e {
                ConversionError::EncodeError(_) => e,
                other => ConversionError::EncodeError(other.to_string()),
            });
        }

        Ok(())
    }
}
