//! Raw image pipeline module
//!
//! This module decodes raw pixel dumps into BGR/BGRA images and writes them
//! out as standard image files, with separate modules for raw reading,
//! output writing and conversion orchestration.

pub mod raw;
pub mod output;
pub mod config;
pub mod conversions;
pub mod common;

pub use common::{
    RawImageError,
    Result,
};

pub use raw::{
    DecodeRequest,
    DecodedImage,
    PixelFormat,
    RawImageDecoder,
    RawImageHeader,
    RawImageReader,
};

pub use config::{
    ConversionConfig,
    ConversionConfigBuilder,
    OutputFormat,
    TiffCompression,
};

pub use output::{
    ImageWriter,
    PngImageWriter,
    PpmImageWriter,
    StandardImageWriter,
    TiffImageWriter,
};

pub use conversions::{
    RawConversionPipeline,
};
