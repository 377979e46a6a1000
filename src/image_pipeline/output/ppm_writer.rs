use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, RawImageError};
use crate::image_pipeline::config::ConversionConfig;
use crate::image_pipeline::output::writer::ImageWriter;
use crate::image_pipeline::raw::types::DecodedImage;

/// Binary PPM (P6) writer. PPM has no alpha, so four-channel images are
/// rejected; strip alpha first with `drop_alpha`.
pub struct PpmImageWriter;

impl ImageWriter for PpmImageWriter {
    fn write_image(&self, image: &DecodedImage, output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        if image.channels != 3 {
            return Err(RawImageError::UnsupportedFormat(format!(
                "PPM only supports 3-channel images, got {}",
                image.channels
            )));
        }

        debug!("Encoding PPM image: {}x{}", image.width, image.height);

        write!(output, "P6\n{} {}\n255\n", image.width, image.height)?;
        output.write_all(&image.to_rgb_order())?;
        Ok(())
    }
}
