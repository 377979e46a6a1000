//! Pipeline conversions module
//!
//! This module wires a raw reader to an image writer.

mod raw_convert;


pub use raw_convert::RawConversionPipeline;
