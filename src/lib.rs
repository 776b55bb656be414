//! Converts 48-bit half-float HDR TGA images to OpenEXR.

pub mod image_pipeline;
pub mod logger;
