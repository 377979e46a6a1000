//! Raw image data types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{RawImageError, Result};

/// Byte layout of a single pixel in a raw dump.
///
/// The discriminants are the codes stored in the metadata header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelFormat {
    Bgra = 1,
    Rgba = 2,
    Bgr = 3,
    Rgb = 4,
}

impl PixelFormat {
    /// Maps a header code to a format, falling back to `Bgr` for codes
    /// outside the table.
    pub fn from_code(code: u32) -> Self {
        Self::try_from_code(code).unwrap_or(PixelFormat::Bgr)
    }

    pub fn try_from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(PixelFormat::Bgra),
            2 => Some(PixelFormat::Rgba),
            3 => Some(PixelFormat::Bgr),
            4 => Some(PixelFormat::Rgb),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Bgra | PixelFormat::Rgba)
    }

    /// Samples per pixel: 4 with alpha, 3 without.
    pub fn channels(self) -> usize {
        if self.has_alpha() { 4 } else { 3 }
    }

    /// The in-memory layout decoded images are normalized to.
    pub fn canonical(self) -> Self {
        match self {
            PixelFormat::Rgb => PixelFormat::Bgr,
            PixelFormat::Rgba => PixelFormat::Bgra,
            other => other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PixelFormat::Bgra => "BGRA",
            PixelFormat::Rgba => "RGBA",
            PixelFormat::Bgr => "BGR",
            PixelFormat::Rgb => "RGB",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = RawImageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BGRA" => Ok(PixelFormat::Bgra),
            "RGBA" => Ok(PixelFormat::Rgba),
            "BGR" => Ok(PixelFormat::Bgr),
            "RGB" => Ok(PixelFormat::Rgb),
            _ => Err(RawImageError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// The 12-byte little-endian prefix of a raw file with metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawImageHeader {
    pub width: u32,
    pub height: u32,
    pub format_code: u32,
}

impl RawImageHeader {
    pub const SIZE: usize = 12;

    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format_code: format.code(),
        }
    }

    /// Parses the header from the start of `data`. Bytes past the first 12
    /// are ignored.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let Some(bytes) = data.get(..Self::SIZE) else {
            return Err(RawImageError::MalformedHeader {
                available: data.len(),
            });
        };

        let field = |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);

        Ok(Self {
            width: field(0),
            height: field(4),
            format_code: field(8),
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut out = [0u8; Self::SIZE];
        out[0..4].copy_from_slice(&self.width.to_le_bytes());
        out[4..8].copy_from_slice(&self.height.to_le_bytes());
        out[8..12].copy_from_slice(&self.format_code.to_le_bytes());
        out
    }

    /// Format named by the header, with the lenient fallback for unknown codes.
    pub fn format(&self) -> PixelFormat {
        PixelFormat::from_code(self.format_code)
    }
}

/// How a raw payload should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeRequest {
    /// The file starts with a [`RawImageHeader`].
    WithMetadata,
    /// The file is pixel data only; the caller declares its shape.
    WithoutMetadata {
        width: Option<u32>,
        height: Option<u32>,
        format: PixelFormat,
    },
}

impl DecodeRequest {
    pub fn with_metadata() -> Self {
        DecodeRequest::WithMetadata
    }

    pub fn without_metadata(width: Option<u32>, height: Option<u32>, format: PixelFormat) -> Self {
        DecodeRequest::WithoutMetadata {
            width,
            height,
            format,
        }
    }

    pub fn has_metadata(&self) -> bool {
        matches!(self, DecodeRequest::WithMetadata)
    }
}

/// A decoded image, row-major `[height][width][channels]`, in BGR or BGRA
/// sample order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    /// Layout the payload was stored in before normalization.
    pub format: PixelFormat,
    pub data: Vec<u8>,
}

impl DecodedImage {
    pub fn shape(&self) -> [usize; 3] {
        [self.height as usize, self.width as usize, self.channels]
    }

    /// Layout of `data`: the canonical form of `format`, or BGR once alpha
    /// has been stripped.
    pub fn layout(&self) -> PixelFormat {
        match self.format.canonical() {
            layout if layout.channels() == self.channels => layout,
            _ => PixelFormat::Bgr,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * self.channels;
        self.data.get(start..start + self.channels)
    }

    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * self.channels;
        let start = y as usize * stride;
        self.data.get(start..start + stride)
    }

    /// Drops the alpha sample of every pixel. Three-channel images are
    /// returned unchanged.
    pub fn without_alpha(self) -> Self {
        if self.channels != 4 {
            return self;
        }
        let data = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        Self {
            channels: 3,
            data,
            ..self
        }
    }

    /// Copies the samples out in RGB(A) order, as most file formats expect.
    pub fn to_rgb_order(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        out.chunks_exact_mut(self.channels).for_each(|px| px.swap(0, 2));
        out
    }
}
