//! HDR TGA reading module
//!
//! This module parses 48-bit half-float TGA files into `SourceImage`s.

pub mod header;
mod reader;
mod hdr_tga_reader;
pub mod types;

pub use header::TgaHeader;
pub use reader::TgaImageReader;
pub use hdr_tga_reader::HdrTgaReader;
pub use types::{PixelGrid, ShortReadPolicy, SourceImage};
