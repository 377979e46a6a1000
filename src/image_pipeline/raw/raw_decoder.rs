//! Decoder for headerless and header-prefixed raw pixel dumps.
//!
//! A file with metadata starts with three little-endian `u32`s (width, height,
//! format code) followed by the pixel payload. A file without metadata is the
//! payload alone and the caller supplies the shape. Either way the payload
//! must be exactly `width * height * channels` bytes, and RGB(A) payloads are
//! reordered to BGR(A).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, warn};

use crate::image_pipeline::common::error::{RawImageError, Result};
use crate::image_pipeline::config::ConversionConfig;
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{DecodeRequest, DecodedImage, PixelFormat, RawImageHeader};

/// Stateless raw image decoder. Holds only its validation settings, so one
/// instance can serve any number of independent decodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawImageDecoder {
    strict_format_codes: bool,
    max_dimension: Option<u32>,
}

/// Shape and payload resolved from the request, before reshaping.
struct ResolvedLayout<'a> {
    width: u32,
    height: u32,
    format: PixelFormat,
    payload: &'a [u8],
}

impl RawImageDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self {
            strict_format_codes: config.strict_format_codes,
            max_dimension: config.max_dimension,
        }
    }

    pub fn with_strict_format_codes(mut self, strict: bool) -> Self {
        self.strict_format_codes = strict;
        self
    }

    pub fn with_max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = max;
        self
    }

    /// Decodes a complete raw file held in memory.
    ///
    /// # Errors
    ///
    /// * `InputContractViolation` - no metadata and a missing or zero dimension
    /// * `MalformedHeader` - metadata expected but fewer than 12 bytes present
    /// * `UnknownFormatCode` - only when strict format codes are enabled
    /// * `InvalidDimensions` - a dimension exceeds the configured maximum
    /// * `ShapeMismatch` - payload length differs from `width * height * channels`
    pub fn decode_bytes(&self, data: &[u8], request: &DecodeRequest) -> Result<DecodedImage> {
        debug!("Decoding raw image, {} bytes, metadata={}", data.len(), request.has_metadata());

        let layout = self.resolve(data, request)?;
        self.check_dimensions(layout.width, layout.height)?;

        let channels = layout.format.channels();
        let expected = (layout.width as usize)
            .checked_mul(layout.height as usize)
            .and_then(|n| n.checked_mul(channels));

        if expected != Some(layout.payload.len()) {
            return Err(RawImageError::ShapeMismatch {
                width: layout.width,
                height: layout.height,
                channels,
                expected,
                actual: layout.payload.len(),
            });
        }

        let mut pixels = layout.payload.to_vec();
        if layout.format.canonical() != layout.format {
            pixels.chunks_exact_mut(channels).for_each(|px| px.swap(0, 2));
        }

        debug!(
            "Decoded {}x{} {} image, shape [{}, {}, {}]",
            layout.width, layout.height, layout.format, layout.height, layout.width, channels
        );

        Ok(DecodedImage {
            width: layout.width,
            height: layout.height,
            channels,
            format: layout.format,
            data: pixels,
        })
    }

    /// Reads `reader` to the end and decodes the result.
    pub fn decode_reader<R: Read>(&self, mut reader: R, request: &DecodeRequest) -> Result<DecodedImage> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.decode_bytes(&data, request)
    }

    /// Opens `path`, reads it fully and decodes it. The file is closed before
    /// decoding starts.
    pub fn decode_file<P: AsRef<Path>>(&self, path: P, request: &DecodeRequest) -> Result<DecodedImage> {
        let data = read_raw_file(path.as_ref())?;
        self.decode_bytes(&data, request)
    }

    fn resolve<'a>(&self, data: &'a [u8], request: &DecodeRequest) -> Result<ResolvedLayout<'a>> {
        match *request {
            DecodeRequest::WithMetadata => {
                let header = RawImageHeader::parse(data)?;
                let format = self.resolve_format_code(header.format_code)?;
                debug!(
                    "Header: {}x{}, format code {} ({})",
                    header.width, header.height, header.format_code, format
                );
                Ok(ResolvedLayout {
                    width: header.width,
                    height: header.height,
                    format,
                    payload: &data[RawImageHeader::SIZE..],
                })
            }
            DecodeRequest::WithoutMetadata { width, height, format } => {
                let (width, height) = match (width, height) {
                    (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
                    _ => {
                        return Err(RawImageError::InputContractViolation(format!(
                            "width and height must be positive when the file has no metadata \
                             (width={width:?}, height={height:?})"
                        )));
                    }
                };
                Ok(ResolvedLayout {
                    width,
                    height,
                    format,
                    payload: data,
                })
            }
        }
    }

    fn resolve_format_code(&self, code: u32) -> Result<PixelFormat> {
        match PixelFormat::try_from_code(code) {
            Some(format) => Ok(format),
            None if self.strict_format_codes => Err(RawImageError::UnknownFormatCode(code)),
            None => {
                warn!("Unknown format code {}, reading as BGR", code);
                Ok(PixelFormat::Bgr)
            }
        }
    }

    fn check_dimensions(&self, width: u32, height: u32) -> Result<()> {
        match self.max_dimension {
            Some(max) if width > max || height > max => {
                Err(RawImageError::InvalidDimensions { width, height })
            }
            _ => Ok(()),
        }
    }
}

/// Reads a whole raw file. The handle is dropped before returning, on both
/// the success and the error path.
pub(crate) fn read_raw_file(path: &Path) -> Result<Vec<u8>> {
    let read_error = |source| RawImageError::InputRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut data = Vec::new();
    BufReader::new(file).read_to_end(&mut data).map_err(read_error)?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

impl RawImageReader for RawImageDecoder {
    fn read_raw(&self, data: &[u8], request: &DecodeRequest) -> Result<DecodedImage> {
        self.decode_bytes(data, request)
    }
}
