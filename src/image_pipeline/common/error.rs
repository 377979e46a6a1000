use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RawImageError {
    #[error("Invalid decode request: {0}")]
    InputContractViolation(String),

    #[error("Malformed metadata header: expected 12 bytes, got {available}")]
    MalformedHeader { available: usize },

    #[error(
        "Cannot reshape {actual} bytes into {height}x{width}x{channels} (expected {})",
        expected_len(.expected)
    )]
    ShapeMismatch {
        width: u32,
        height: u32,
        channels: usize,
        expected: Option<usize>,
        actual: usize,
    },

    #[error("Unknown pixel format code: {0}")]
    UnknownFormatCode(u32),

    #[error("Invalid image dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to read input file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode output image: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn expected_len(expected: &Option<usize>) -> String {
    match expected {
        Some(len) => len.to_string(),
        None => "a size that overflows usize".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, RawImageError>;
