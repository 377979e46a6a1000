mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rawframe_rs::image_pipeline::{ConversionConfig, RawConversionPipeline};
use rawframe_rs::logger;

use tracing::{error, info, warn};

fn main() {
    let args = cli::Args::parse();
    logger::init(args.verbose);

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &cli::Args) -> Result<()> {
    info!("Starting rawframe...");

    let config = ConversionConfig::builder()
        .output_format(args.resolve_output_format()?)
        .compression(args.compression.to_tiff_compression())
        .predictor(args.predictor.then_some(2))
        .strict_format_codes(args.strict)
        .max_dimension(args.max_dimension)
        .drop_alpha(args.drop_alpha)
        .build();
    let request = args.decode_request();
    let pipeline = RawConversionPipeline::new(config);

    info!("Output format: {:?}", pipeline.config().output_format);

    let image = match &args.output {
        Some(output) => pipeline
            .convert_file(&args.input, &request, output)
            .with_context(|| format!("converting {}", args.input.display()))?,
        None => pipeline
            .decode_file(&args.input, &request)
            .with_context(|| format!("decoding {}", args.input.display()))?,
    };

    if let Some((x, y)) = args.pixel {
        match image.pixel(x, y) {
            Some(px) => info!("Pixel at ({}, {}) in {} order: {:?}", x, y, image.layout(), px),
            None => warn!(
                "Pixel ({}, {}) is outside the {}x{} image",
                x, y, image.width, image.height
            ),
        }
    }

    Ok(())
}
