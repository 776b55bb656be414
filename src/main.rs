use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tga2exr_rs::image_pipeline::{
    ConversionConfig, ExrCompression, ShortReadPolicy, TgaToExrPipeline,
};
use tga2exr_rs::logger;

use tracing::{error, info};

/// Convert a 48-bit half-float HDR TGA image to OpenEXR.
#[derive(Parser, Debug)]
#[command(name = "tga2exr", version)]
struct Cli {
    /// HDR TGA file to read
    input: PathBuf,

    /// EXR file to write
    output: PathBuf,

    /// Compression used for the EXR output
    #[arg(long, value_enum, default_value_t = CompressionArg::Rle)]
    compression: CompressionArg,

    /// Pad a truncated pixel payload with zeros instead of failing
    #[arg(long)]
    allow_truncated: bool,

    /// Leave a partially written EXR file in place if encoding fails
    #[arg(long)]
    keep_partial_output: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CompressionArg {
    None,
    Rle,
    Zip,
    Zips,
    Piz,
}

impl From<CompressionArg> for ExrCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => ExrCompression::None,
            CompressionArg::Rle => ExrCompression::Rle,
            CompressionArg::Zip => ExrCompression::Zip,
            CompressionArg::Zips => ExrCompression::Zips,
            CompressionArg::Piz => ExrCompression::Piz,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init();

    let config = ConversionConfig::builder()
        .compression(cli.compression.into())
        .short_read(if cli.allow_truncated {
            ShortReadPolicy::ZeroFill
        } else {
            ShortReadPolicy::Reject
        })
        .remove_partial_output(!cli.keep_partial_output)
        .build();
    let pipeline = TgaToExrPipeline::new(config);

    info!("Compression: {:?}", pipeline.config().compression);

    match pipeline.convert_file(&cli.input, &cli.output) {
        Ok(()) => {
            info!("EXR file {} successfully written", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(kind = e.kind().label(), "Conversion failed: {}", e);
            ExitCode::from(e.kind().exit_code())
        }
    }
}
