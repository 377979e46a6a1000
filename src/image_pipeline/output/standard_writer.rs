use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::{ConversionConfig, OutputFormat};
use crate::image_pipeline::output::writer::ImageWriter;
use crate::image_pipeline::output::{PngImageWriter, PpmImageWriter, TiffImageWriter};
use crate::image_pipeline::raw::types::DecodedImage;

/// Picks the concrete writer from `config.output_format`.
pub struct StandardImageWriter;

impl ImageWriter for StandardImageWriter {
    fn write_image(&self, image: &DecodedImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        match config.output_format {
            OutputFormat::Png => PngImageWriter.write_image(image, output, config),
            OutputFormat::Tiff => TiffImageWriter.write_image(image, output, config),
            OutputFormat::Ppm => PpmImageWriter.write_image(image, output, config),
        }
    }
}
