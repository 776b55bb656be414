//! Row remapping module
//!
//! Converts the TGA raster (bottom-up, RGB) into the interleaved RGBA layout
//! the EXR writer binds its channels to.

mod row_remapper;
pub mod types;

pub use row_remapper::{RowRemapper, remap};
pub use types::{DestinationImage, RgbaPixel};
