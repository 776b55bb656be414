//! EXR encoder backed by the `exr` crate.
//!
//! Produces a single-part scanline image. Each output sample is pulled through
//! the frame buffer bindings while the file is being written, so the remapped
//! pixel buffer is never copied into planar storage.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use exr::prelude::{
    ChannelDescription, Compression, Encoding, Image, Layer, LayerAttributes, SampleType,
    SpecificChannels, Vec2, WritableImage,
};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::openexr::encoder::ExrEncoder;
use crate::image_pipeline::openexr::frame_buffer::{ChannelBinding, FrameBuffer};
use crate::image_pipeline::openexr::types::{ChannelSpec, ExrCompression, ExrHeader, SampleKind};

/// Production `ExrEncoder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExrsEncoder;

impl From<ExrCompression> for Compression {
    fn from(compression: ExrCompression) -> Self {
        match compression {
            ExrCompression::None => Compression::Uncompressed,
            ExrCompression::Rle => Compression::RLE,
            ExrCompression::Zip => Compression::ZIP16,
            ExrCompression::Zips => Compression::ZIP1,
            ExrCompression::Piz => Compression::PIZ,
        }
    }
}

fn describe(spec: &ChannelSpec) -> ChannelDescription {
    let sample_type = match spec.sample_type {
        SampleKind::Half => SampleType::F16,
    };
    ChannelDescription::named(spec.name.as_str(), sample_type)
}

fn bound<'f, 'a>(
    frame_buffer: &'f FrameBuffer<'a>,
    header: &ExrHeader,
    spec: &ChannelSpec,
) -> Result<&'f ChannelBinding<'a>> {
    let binding = frame_buffer.get(&spec.name).ok_or_else(|| {
        ConversionError::EncodeError(format!("no frame buffer slice for channel {}", spec.name))
    })?;
    if binding.width() != header.width || binding.height() != header.height {
        return Err(ConversionError::EncodeError(format!(
            "channel {} is bound as {}x{}, header declares {}x{}",
            spec.name,
            binding.width(),
            binding.height(),
            header.width,
            header.height
        )));
    }
    Ok(binding)
}

impl ExrEncoder for ExrsEncoder {
    fn encode(&self, path: &Path, header: &ExrHeader, frame_buffer: &FrameBuffer<'_>) -> Result<()> {
        let [r, g, b] = header.channels.as_slice() else {
            return Err(ConversionError::EncodeError(format!(
                "expected 3 channels, header declares {}",
                header.channels.len()
            )));
        };
        let (r_slice, g_slice, b_slice) = (
            bound(frame_buffer, header, r)?,
            bound(frame_buffer, header, g)?,
            bound(frame_buffer, header, b)?,
        );

        debug!(
            "Encoding EXR image: {}x{}, {:?}",
            header.width, header.height, header.compression
        );

        let channels = SpecificChannels::new(
            (describe(r), describe(g), describe(b)),
            |pos: Vec2<usize>| {
                let (x, y) = (pos.x(), pos.y());
                (r_slice.sample(x, y), g_slice.sample(x, y), b_slice.sample(x, y))
            },
        );

        let encoding = Encoding {
            compression: header.compression.into(),
            ..Encoding::UNCOMPRESSED
        };
        let layer = Layer::new(
            (header.width, header.height),
            LayerAttributes::default(),
            encoding,
            channels,
        );

        let encode_error = |e: &dyn std::fmt::Display| {
            ConversionError::EncodeError(format!("{}: {}", path.display(), e))
        };

        // A failed write leaves the file in place; the writer decides whether to remove it.
        let file = File::create(path).map_err(|e| encode_error(&e))?;
        let mut out = BufWriter::new(file);
        Image::from_layer(layer)
            .write()
            .to_buffered(&mut out)
            .map_err(|e| encode_error(&e))?;
        out.flush().map_err(|e| encode_error(&e))?;

        debug!("EXR encoding complete");
        Ok(())
    }
}
