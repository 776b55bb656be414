//! Reader for 48-bit HDR TGA files.
//!
//! These files store three half-float channels per pixel behind the standard
//! 18-byte TGA header. Only the dimensions and the bit depth are taken from the
//! header; every other field is ignored, and color-mapped or RLE variants are
//! not supported.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use half::f16;
use tracing::{debug, info, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::tga::header::TgaHeader;
use crate::image_pipeline::tga::reader::TgaImageReader;
use crate::image_pipeline::tga::types::{ShortReadPolicy, SourceImage};

/// Bytes per stored sample.
const SAMPLE_BYTES: usize = 2;

/// HDR TGA reader.
///
/// The pixel payload is read into memory in one pass and reinterpreted as
/// little-endian `f16` bit patterns, without any scaling.
#[derive(Debug, Clone, Copy, Default)]
pub struct HdrTgaReader;

impl HdrTgaReader {
    /// Opens and decodes the file at `path`.
    ///
    /// The file handle lives only for the duration of this call.
    ///
    /// # Errors
    ///
    /// * `InputReadError` - the file cannot be opened, or its header is cut short
    /// * `UnsupportedFormat` - the bit depth is not 48
    /// * `TruncatedPayload` - fewer samples than expected, under `ShortReadPolicy::Reject`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tga2exr_rs::image_pipeline::{HdrTgaReader, ShortReadPolicy};
    ///
    /// let image = HdrTgaReader.read_file("sky.tga", ShortReadPolicy::Reject).unwrap();
    /// println!("{}x{}", image.width, image.height);
    /// ```
    pub fn read_file<P: AsRef<Path>>(&self, path: P, short_read: ShortReadPolicy) -> Result<SourceImage> {
        let path = path.as_ref();
        info!(file = %path.display(), "Reading TGA file");

        let file = File::open(path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        self.read_tga(&mut BufReader::new(file), short_read)
    }
}

/// Reads until `buf` is full or the stream ends, returning the number of bytes read.
fn fill_from(input: &mut dyn Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

impl TgaImageReader for HdrTgaReader {
    fn read_tga(&self, input: &mut dyn Read, short_read: ShortReadPolicy) -> Result<SourceImage> {
        let header = TgaHeader::from_reader(input)?;
        debug!(
            width = header.width,
            height = header.height,
            bit_depth = header.bit_depth,
            "Parsed TGA header"
        );

        // Nothing past the header is touched for unsupported depths.
        header.validate_hdr()?;

        let expected = header.sample_count();
        let mut samples = vec![f16::ZERO; expected];
        let bytes_read = fill_from(input, bytemuck::cast_slice_mut(&mut samples))?;
        let samples_read = bytes_read / SAMPLE_BYTES;
        // A dangling half sample counts as missing.
        samples[samples_read..].fill(f16::ZERO);
        for sample in &mut samples[..samples_read] {
            *sample = f16::from_bits(u16::from_le(sample.to_bits()));
        }
        debug!(samples_read, expected, "Read pixel payload");

        if samples_read < expected {
            match short_read {
                ShortReadPolicy::Reject => {
                    return Err(ConversionError::TruncatedPayload {
                        expected,
                        read: samples_read,
                    });
                }
                ShortReadPolicy::ZeroFill => {
                    warn!(
                        missing = expected - samples_read,
                        "Pixel payload is truncated, padding with zeros"
                    );
                }
            }
        }

        Ok(SourceImage {
            width: header.width,
            height: header.height,
            bit_depth: header.bit_depth,
            samples,
            samples_read,
        })
    }
}
