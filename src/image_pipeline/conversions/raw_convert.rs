use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{RawImageError, Result},
    config::ConversionConfig,
    output::{ImageWriter, StandardImageWriter},
    raw::{read_raw_file, DecodeRequest, DecodedImage, RawImageDecoder, RawImageReader},
};

pub struct RawConversionPipeline<R: RawImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl RawConversionPipeline<RawImageDecoder, StandardImageWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: RawImageDecoder::from_config(&config),
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<R: RawImageReader, W: ImageWriter> RawConversionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes `input_data`, applying `drop_alpha` from the config.
    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn decode(&self, input_data: &[u8], request: &DecodeRequest) -> Result<DecodedImage> {
        let image = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(input_data, request)?
        };

        info!(
            width = image.width,
            height = image.height,
            format = %image.format,
            "Loaded {}x{} image in {} format, shape {:?}",
            image.width,
            image.height,
            image.format,
            image.shape()
        );

        if self.config.drop_alpha && image.channels == 4 {
            let _span = tracing::info_span!("drop_alpha").entered();
            return Ok(image.without_alpha());
        }
        Ok(image)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], request: &DecodeRequest, output: &mut dyn Write) -> Result<DecodedImage> {
        info!("Starting raw image conversion");

        let image = self.decode(input_data, request)?;

        {
            let _span = tracing::info_span!("encode_output",
                format = ?self.config.output_format
            ).entered();
            self.writer.write_image(&image, output, &self.config)?;
        }

        info!(
            width = image.width,
            height = image.height,
            "Conversion complete"
        );
        Ok(image)
    }

    #[instrument(skip(self, input_path))]
    pub fn decode_file<P: AsRef<Path>>(&self, input_path: P, request: &DecodeRequest) -> Result<DecodedImage> {
        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            read_raw_file(input_path.as_ref())?
        };
        self.decode(&input_data, request)
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        request: &DecodeRequest,
        output_path: Q,
    ) -> Result<DecodedImage> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            read_raw_file(input_path)?
        };

        let image = self.decode(&input_data, request)?;

        // Encode fully in memory so a rejected image leaves no file behind
        let encoded = {
            let _span = tracing::info_span!("encode_output",
                format = ?self.config.output_format
            ).entered();
            let mut encoded = Vec::new();
            self.writer.write_image(&image, &mut encoded, &self.config)?;
            encoded
        };

        {
            let _span = tracing::info_span!("write_output_file", bytes = encoded.len()).entered();
            let write_error = |source| RawImageError::OutputWrite {
                path: output_path.to_path_buf(),
                source,
            };
            let mut output_file = std::fs::File::create(output_path).map_err(write_error)?;
            output_file.write_all(&encoded).map_err(write_error)?;
            output_file.sync_all().map_err(write_error)?;
        }

        info!(path = %output_path.display(), "Saved output");
        Ok(image)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }
}
