use std::io::{Read, Write};

use byteorder_lite::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::image_pipeline::common::error::{ConversionError, Result};

/// ID length, color-map type, image type, color-map spec and x/y origin.
pub const PREAMBLE_LEN: usize = 12;

/// Total size of the fixed header that precedes the pixel payload.
pub const HEADER_LEN: usize = PREAMBLE_LEN + 6;

/// Three 16-bit channels per pixel.
pub const HDR_BIT_DEPTH: u8 = 48;

/// Uncompressed true-color image type code.
const RAW_TRUE_COLOR: u8 = 2;

/// The header fields this converter cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TgaHeader {
    pub width: u16,
    pub height: u16,
    pub bit_depth: u8,
    pub descriptor: u8,
}

impl TgaHeader {
    pub fn hdr(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            bit_depth: HDR_BIT_DEPTH,
            descriptor: 0,
        }
    }

    /// Reads the 18 header bytes. The preamble is skipped without interpretation.
    pub fn from_reader(r: &mut dyn Read) -> Result<Self> {
        let mut preamble = [0u8; PREAMBLE_LEN];
        r.read_exact(&mut preamble).map_err(truncated_header)?;

        Ok(Self {
            width: r.read_u16::<LittleEndian>().map_err(truncated_header)?,
            height: r.read_u16::<LittleEndian>().map_err(truncated_header)?,
            bit_depth: r.read_u8().map_err(truncated_header)?,
            descriptor: r.read_u8().map_err(truncated_header)?,
        })
    }

    /// Writes a minimal uncompressed true-color header.
    pub fn write_to(&self, w: &mut dyn Write) -> Result<()> {
        w.write_u8(0)?; // id length
        w.write_u8(0)?; // no color map
        w.write_u8(RAW_TRUE_COLOR)?;
        w.write_all(&[0u8; 5])?; // color-map spec
        w.write_u16::<LittleEndian>(0)?; // x origin
        w.write_u16::<LittleEndian>(0)?; // y origin
        w.write_u16::<LittleEndian>(self.width)?;
        w.write_u16::<LittleEndian>(self.height)?;
        w.write_u8(self.bit_depth)?;
        w.write_u8(self.descriptor)?;
        Ok(())
    }

    pub fn validate_hdr(&self) -> Result<()> {
        if self.bit_depth != HDR_BIT_DEPTH {
            return Err(ConversionError::UnsupportedFormat(format!(
                "{} bits per pixel, only {} bit HDR images are supported",
                self.bit_depth, HDR_BIT_DEPTH
            )));
        }
        Ok(())
    }

    /// Number of 16-bit samples the payload is expected to hold.
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

fn truncated_header(e: std::io::Error) -> ConversionError {
    if e.kind() == std::io::ErrorKind::UnexpectedEof {
        ConversionError::InputReadError(format!("header shorter than {} bytes", HEADER_LEN))
    } else {
        ConversionError::IoError(e)
    }
}
