//! Image processing pipeline module
//!
//! This module provides a structured approach to HDR TGA to OpenEXR conversion,
//! with separate modules for TGA reading, row remapping, EXR writing, and
//! conversion orchestration.

pub mod tga;
pub mod remap;
pub mod openexr;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    ErrorKind,
    Result,
};

pub use tga::{
    HdrTgaReader,
    PixelGrid,
    ShortReadPolicy,
    SourceImage,
    TgaHeader,
    TgaImageReader,
};

pub use remap::{
    DestinationImage,
    RgbaPixel,
    RowRemapper,
    remap,
};

pub use openexr::{
    ChannelBinding,
    ConversionConfig,
    ConversionConfigBuilder,
    ExrCompression,
    ExrEncoder,
    ExrHeader,
    ExrImageWriter,
    ExrsEncoder,
    FrameBuffer,
    StandardExrWriter,
};

pub use conversions::{
    TgaToExrPipeline,
};
