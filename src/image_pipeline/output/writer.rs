use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::config::ConversionConfig;
use crate::image_pipeline::raw::types::DecodedImage;

pub trait ImageWriter {
    fn write_image(&self, image: &DecodedImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
