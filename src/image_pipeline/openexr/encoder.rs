use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::openexr::frame_buffer::FrameBuffer;
use crate::image_pipeline::openexr::types::ExrHeader;

/// Serializes a header plus bound channel data to an EXR file in one pass.
pub trait ExrEncoder {
    fn encode(&self, path: &Path, header: &ExrHeader, frame_buffer: &FrameBuffer<'_>) -> Result<()>;
}
