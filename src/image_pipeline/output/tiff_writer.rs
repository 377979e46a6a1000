use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, RawImageError};
use crate::image_pipeline::config::{ConversionConfig, TiffCompression};
use crate::image_pipeline::output::writer::ImageWriter;
use crate::image_pipeline::raw::types::DecodedImage;

pub struct TiffImageWriter;

impl ImageWriter for TiffImageWriter {
    fn write_image(&self, image: &DecodedImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}x{}", image.width, image.height, image.channels);

        // TiffEncoder needs Seek, so encode into memory first
        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| RawImageError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        let samples = image.to_rgb_order();
        let written = match image.channels {
            3 => encoder.write_image::<tiff::encoder::colortype::RGB8>(image.width, image.height, &samples),
            4 => encoder.write_image::<tiff::encoder::colortype::RGBA8>(image.width, image.height, &samples),
            n => return Err(RawImageError::UnsupportedFormat(format!("{n}-channel TIFF"))),
        };
        written.map_err(|e| RawImageError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
