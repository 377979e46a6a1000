//! Conversion configuration types

/// File format written by the output stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Tiff,
    /// Binary PPM (P6), three-channel images only
    Ppm,
}

impl OutputFormat {
    /// Guesses the format from a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "tif" | "tiff" => Some(OutputFormat::Tiff),
            "ppm" => Some(OutputFormat::Ppm),
            _ => None,
        }
    }
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

/// Configuration for decoding a raw file and writing it back out
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Output file format
    pub output_format: OutputFormat,
    /// TIFF compression method, ignored by the other formats
    pub compression: TiffCompression,
    /// TIFF predictor (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Reject header format codes outside the known table instead of
    /// reading them as BGR
    pub strict_format_codes: bool,
    /// Upper bound on width and height, checked before the payload is touched
    pub max_dimension: Option<u32>,
    /// Strip the alpha channel before writing
    pub drop_alpha: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Png,
            compression: TiffCompression::None,
            predictor: None,
            strict_format_codes: false,
            max_dimension: None,
            drop_alpha: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    output_format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    strict_format_codes: Option<bool>,
    max_dimension: Option<Option<u32>>,
    drop_alpha: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn strict_format_codes(mut self, strict: bool) -> Self {
        self.strict_format_codes = Some(strict);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn drop_alpha(mut self, enable: bool) -> Self {
        self.drop_alpha = Some(enable);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            output_format: self.output_format.unwrap_or(default.output_format),
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            strict_format_codes: self.strict_format_codes.unwrap_or(default.strict_format_codes),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            drop_alpha: self.drop_alpha.unwrap_or(default.drop_alpha),
        }
    }
}
