//! Raw image reading module
//!
//! This module decodes uncompressed pixel dumps, with or without the 12-byte
//! metadata header, into BGR/BGRA images.

mod reader;
mod raw_decoder;
pub mod types;

pub use reader::RawImageReader;
pub use raw_decoder::RawImageDecoder;
pub(crate) use raw_decoder::read_raw_file;
pub use types::{DecodeRequest, DecodedImage, PixelFormat, RawImageHeader};
