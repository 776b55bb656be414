//! Pipeline conversions module
//!
//! This module contains orchestration logic for image format conversions.

mod tga_to_exr;


pub use tga_to_exr::TgaToExrPipeline;
