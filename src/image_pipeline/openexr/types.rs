//! EXR output description and conversion configuration types

use crate::image_pipeline::tga::ShortReadPolicy;

/// EXR compression methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExrCompression {
    /// No compression (fastest, largest file)
    None,
    /// Run-length encoding (fast, lossless)
    #[default]
    Rle,
    /// Deflate over blocks of 16 scanlines
    Zip,
    /// Deflate over single scanlines
    Zips,
    /// Wavelet compression, good for noisy photographic content
    Piz,
}

/// Precision of a stored channel. Only half floats are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Half,
}

/// A channel declared in the output header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    pub name: String,
    pub sample_type: SampleKind,
}

impl ChannelSpec {
    pub fn half(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sample_type: SampleKind::Half,
        }
    }
}

/// Everything the encoder needs to know before pixel data is bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExrHeader {
    pub width: usize,
    pub height: usize,
    pub channels: Vec<ChannelSpec>,
    pub compression: ExrCompression,
}

impl ExrHeader {
    /// Header with half-float `R`, `G` and `B` channels and no alpha.
    pub fn rgb_half(width: usize, height: usize, compression: ExrCompression) -> Self {
        Self {
            width,
            height,
            channels: ["R", "G", "B"].into_iter().map(ChannelSpec::half).collect(),
            compression,
        }
    }
}

/// Configuration for TGA to EXR conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method to use for the EXR output
    pub compression: ExrCompression,
    /// How to handle a pixel payload shorter than the header promises
    pub short_read: ShortReadPolicy,
    /// Whether to reject zero-sized images before remapping
    pub validate_dimensions: bool,
    /// Whether to delete the output file if encoding fails part way
    pub remove_partial_output: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: ExrCompression::Rle,
            short_read: ShortReadPolicy::Reject,
            validate_dimensions: true,
            remove_partial_output: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<ExrCompression>,
    short_read: Option<ShortReadPolicy>,
    validate_dimensions: Option<bool>,
    remove_partial_output: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: ExrCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn short_read(mut self, policy: ShortReadPolicy) -> Self {
        self.short_read = Some(policy);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn remove_partial_output(mut self, remove: bool) -> Self {
        self.remove_partial_output = Some(remove);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            short_read: self.short_read.unwrap_or(default.short_read),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            remove_partial_output: self
                .remove_partial_output
                .unwrap_or(default.remove_partial_output),
        }
    }
}
