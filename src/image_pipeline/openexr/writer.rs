use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::openexr::types::ConversionConfig;
use crate::image_pipeline::remap::DestinationImage;

pub trait ExrImageWriter {
    fn write_exr(
        &self,
        path: &Path,
        image: Option<&DestinationImage>,
        config: &ConversionConfig,
    ) -> Result<()>;
}
