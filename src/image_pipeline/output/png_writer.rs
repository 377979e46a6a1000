use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, RawImageError};
use crate::image_pipeline::config::ConversionConfig;
use crate::image_pipeline::output::writer::ImageWriter;
use crate::image_pipeline::raw::types::DecodedImage;

pub struct PngImageWriter;

impl ImageWriter for PngImageWriter {
    fn write_image(&self, image: &DecodedImage, output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        debug!("Encoding PNG image: {}x{}x{}", image.width, image.height, image.channels);

        let color = match image.channels {
            3 => png::ColorType::Rgb,
            4 => png::ColorType::Rgba,
            n => return Err(RawImageError::UnsupportedFormat(format!("{n}-channel PNG"))),
        };

        let mut encoder = png::Encoder::new(output, image.width, image.height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| RawImageError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(&image.to_rgb_order())
            .map_err(|e| RawImageError::EncodeError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| RawImageError::EncodeError(e.to_string()))?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
