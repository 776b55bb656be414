use std::io::Read;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tga::types::{ShortReadPolicy, SourceImage};

pub trait TgaImageReader {
    fn read_tga(&self, input: &mut dyn Read, short_read: ShortReadPolicy) -> Result<SourceImage>;
}
