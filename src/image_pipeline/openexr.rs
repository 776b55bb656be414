//! OpenEXR writing module
//!
//! This module turns remapped images into OpenEXR files. Encoding is delegated
//! to an `ExrEncoder`, so the writer can run against a fake in tests.

mod encoder;
mod exrs_encoder;
pub mod frame_buffer;
mod standard_exr_writer;
pub mod types;
mod writer;

pub use encoder::ExrEncoder;
pub use exrs_encoder::ExrsEncoder;
pub use frame_buffer::{ChannelBinding, FrameBuffer, SliceLayout};
pub use standard_exr_writer::{StandardExrWriter, rgb_frame_buffer};
pub use types::{
    ChannelSpec, ConversionConfig, ConversionConfigBuilder, ExrCompression, ExrHeader, SampleKind,
};
pub use writer::ExrImageWriter;
