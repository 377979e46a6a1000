//! Common utilities module
//!
//! This module contains the error type shared by the decoder, the writers
//! and the conversion pipeline.

pub mod error;

pub use error::{RawImageError, Result};
