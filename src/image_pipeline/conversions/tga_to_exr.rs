use tracing::{error, info, instrument};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    openexr::{ConversionConfig, ExrImageWriter, StandardExrWriter},
    remap::RowRemapper,
    tga::{HdrTgaReader, TgaImageReader},
};

/// Logs a failure inside the span of the stage that raised it.
fn log_stage_failure(e: &ConversionError) {
    error!(kind = e.kind().label(), "Stage failed: {}", e);
}

pub struct TgaToExrPipeline<R: TgaImageReader, W: ExrImageWriter> {
    reader: R,
    writer: W,
    remapper: RowRemapper,
    config: ConversionConfig,
}

impl TgaToExrPipeline<HdrTgaReader, StandardExrWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: HdrTgaReader,
            writer: StandardExrWriter::new(),
            remapper: RowRemapper::new(),
            config,
        }
    }
}

impl<R: TgaImageReader, W: ExrImageWriter> TgaToExrPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            remapper: RowRemapper::new(),
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input, output), fields(output = %output.display()))]
    pub fn convert(&self, input: &mut dyn Read, output: &Path) -> Result<()> {
        info!("Starting TGA to EXR conversion");

        let source = {
            let _span = tracing::info_span!("read_tga").entered();
            self.reader
                .read_tga(input, self.config.short_read)
                .inspect_err(log_stage_failure)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = source.width,
                height = source.height
            ).entered();
            self.validate_dimensions(source.width as usize, source.height as usize)
                .inspect_err(log_stage_failure)?;
        }

        let image = {
            let _span = tracing::info_span!("remap_rows").entered();
            self.remapper.process(&source)
        };
        // The flat sample buffer is no longer needed once remapped.
        drop(source);

        {
            let _span = tracing::info_span!("encode_exr").entered();
            self.writer
                .write_exr(output, Some(&image), &self.config)
                .inspect_err(log_stage_failure)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let mut input_file = {
            let _span = tracing::info_span!("open_input_file").entered();
            File::open(input_path)
                .map(BufReader::new)
                .map_err(|e| {
                    ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
                })
                .inspect_err(log_stage_failure)?
        };

        self.convert(&mut input_file, output_path)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
