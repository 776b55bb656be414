//! Strided channel views over an interleaved pixel buffer.
//!
//! A `ChannelBinding` lets the encoder pull one channel's samples straight out
//! of the remapped RGBA buffer without copying it into a planar layout. The
//! addressing is `offset + x * x_stride + y * y_stride`, checked against the
//! buffer length once when the binding is created.

use half::f16;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Byte addressing of one channel inside an interleaved buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceLayout {
    /// Size of one sample in bytes
    pub element_size: usize,
    /// Byte offset of the first sample
    pub offset: usize,
    /// Bytes between horizontally adjacent samples
    pub x_stride: usize,
    /// Bytes between vertically adjacent samples
    pub y_stride: usize,
}

/// A named half-float channel view.
#[derive(Debug, Clone)]
pub struct ChannelBinding<'a> {
    name: String,
    bytes: &'a [u8],
    layout: SliceLayout,
    width: usize,
    height: usize,
}

impl<'a> ChannelBinding<'a> {
    pub fn new(
        name: impl Into<String>,
        bytes: &'a [u8],
        layout: SliceLayout,
        width: usize,
        height: usize,
    ) -> Result<Self> {
        let name = name.into();

        if layout.element_size != size_of::<f16>() {
            return Err(ConversionError::InvalidArgument(format!(
                "channel {}: element size {} is not a half float",
                name, layout.element_size
            )));
        }
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        let end = (width - 1)
            .checked_mul(layout.x_stride)
            .zip((height - 1).checked_mul(layout.y_stride))
            .and_then(|(x, y)| x.checked_add(y))
            .and_then(|last| last.checked_add(layout.offset))
            .and_then(|last| last.checked_add(layout.element_size));

        match end {
            Some(end) if end <= bytes.len() => Ok(Self {
                name,
                bytes,
                layout,
                width,
                height,
            }),
            _ => Err(ConversionError::InvalidArgument(format!(
                "channel {}: {:?} over {}x{} exceeds buffer of {} bytes",
                name,
                layout,
                width,
                height,
                bytes.len()
            ))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layout(&self) -> SliceLayout {
        self.layout
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at column `x` of row `y`. Panics if the position is outside the view.
    pub fn sample(&self, x: usize, y: usize) -> f16 {
        assert!(x < self.width && y < self.height, "({}, {}) outside channel {}", x, y, self.name);
        let i = self.layout.offset + x * self.layout.x_stride + y * self.layout.y_stride;
        f16::from_ne_bytes([self.bytes[i], self.bytes[i + 1]])
    }
}

/// The set of channel bindings handed to the encoder.
#[derive(Debug, Clone, Default)]
pub struct FrameBuffer<'a> {
    slices: Vec<ChannelBinding<'a>>,
}

impl<'a> FrameBuffer<'a> {
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    pub fn insert(&mut self, binding: ChannelBinding<'a>) -> Result<()> {
        if self.get(binding.name()).is_some() {
            return Err(ConversionError::InvalidArgument(format!(
                "channel {} is already bound",
                binding.name()
            )));
        }
        self.slices.push(binding);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ChannelBinding<'a>> {
        self.slices.iter().find(|s| s.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelBinding<'a>> {
        self.slices.iter()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half_bytes(values: &[f32]) -> Vec<u8> {
        values
            .iter()
            .flat_map(|v| f16::from_f32(*v).to_ne_bytes())
            .collect()
    }

    fn interleaved(offset: usize, width: usize) -> SliceLayout {
        SliceLayout {
            element_size: 2,
            offset,
            x_stride: 6,
            y_stride: 6 * width,
        }
    }

    #[test]
    fn test_strided_reads_pick_one_channel() {
        // 2x2 RGB, values encode (row, col, channel)
        let bytes = half_bytes(&[
            0.0, 1.0, 2.0, 10.0, 11.0, 12.0, //
            100.0, 101.0, 102.0, 110.0, 111.0, 112.0,
        ]);

        let g = ChannelBinding::new("G", &bytes, interleaved(2, 2), 2, 2).unwrap();

        assert_eq!(g.sample(0, 0), f16::from_f32(1.0));
        assert_eq!(g.sample(1, 0), f16::from_f32(11.0));
        assert_eq!(g.sample(0, 1), f16::from_f32(101.0));
        assert_eq!(g.sample(1, 1), f16::from_f32(111.0));
    }

    #[test]
    fn test_rejects_view_past_end_of_buffer() {
        let bytes = half_bytes(&[0.0; 12]);

        assert!(ChannelBinding::new("B", &bytes, interleaved(4, 2), 2, 2).is_ok());
        let result = ChannelBinding::new("A", &bytes, interleaved(6, 2), 2, 2);
        assert!(matches!(result, Err(ConversionError::InvalidArgument(_))));
    }

    #[test]
    fn test_rejects_stride_overflow() {
        let bytes = half_bytes(&[0.0; 4]);
        let layout = SliceLayout {
            element_size: 2,
            offset: 0,
            x_stride: usize::MAX,
            y_stride: 2,
        };
        assert!(ChannelBinding::new("R", &bytes, layout, 2, 1).is_err());
    }

    #[test]
    fn test_rejects_non_half_elements_and_empty_views() {
        let bytes = half_bytes(&[0.0; 12]);
        let wide = SliceLayout {
            element_size: 4,
            ..interleaved(0, 2)
        };
        assert!(ChannelBinding::new("R", &bytes, wide, 2, 2).is_err());
        assert!(matches!(
            ChannelBinding::new("R", &bytes, interleaved(0, 2), 0, 2),
            Err(ConversionError::InvalidDimensions(0, 2))
        ));
    }

    #[test]
    fn test_frame_buffer_refuses_duplicate_names() {
        let bytes = half_bytes(&[0.0; 3]);
        let layout = interleaved(0, 1);
        let mut fb = FrameBuffer::new();

        fb.insert(ChannelBinding::new("R", &bytes, layout, 1, 1).unwrap()).unwrap();
        let again = fb.insert(ChannelBinding::new("R", &bytes, layout, 1, 1).unwrap());

        assert!(matches!(again, Err(ConversionError::InvalidArgument(_))));
        assert_eq!(fb.len(), 1);
        assert!(fb.get("R").is_some());
        assert!(fb.get("G").is_none());
    }
}
