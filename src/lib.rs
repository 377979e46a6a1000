//! Decoding of raw pixel dumps, optionally prefixed with a 12-byte
//! `(width, height, format_code)` header, into BGR/BGRA images.

pub mod image_pipeline;
pub mod logger;
