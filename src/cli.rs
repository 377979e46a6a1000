//! Command-line argument definitions and type conversions

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use rawframe_rs::image_pipeline::{DecodeRequest, OutputFormat, PixelFormat, TiffCompression};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Bgr,
    Rgb,
    Bgra,
    Rgba,
}

impl FormatArg {
    pub fn to_pixel_format(self) -> PixelFormat {
        match self {
            FormatArg::Bgr => PixelFormat::Bgr,
            FormatArg::Rgb => PixelFormat::Rgb,
            FormatArg::Bgra => PixelFormat::Bgra,
            FormatArg::Rgba => PixelFormat::Rgba,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Png,
    Tiff,
    /// Binary PPM, three channels only (combine with --drop-alpha for BGRA/RGBA input)
    Ppm,
}

impl OutputFormatArg {
    pub fn to_output_format(self) -> OutputFormat {
        match self {
            OutputFormatArg::Png => OutputFormat::Png,
            OutputFormatArg::Tiff => OutputFormat::Tiff,
            OutputFormatArg::Ppm => OutputFormat::Ppm,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl CompressionArg {
    pub fn to_tiff_compression(self) -> TiffCompression {
        match self {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

/// Decode a raw BGR/RGB(A) pixel dump and save it as PNG, TIFF or PPM
#[derive(Debug, Parser)]
#[command(name = "rawframe", version)]
pub struct Args {
    /// Raw input file
    pub input: PathBuf,

    /// Output image; the format follows the extension unless --output-format is given
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input is pixel data only, without the 12-byte metadata header
    #[arg(long)]
    pub no_metadata: bool,

    /// Image width, required with --no-metadata
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height, required with --no-metadata
    #[arg(long)]
    pub height: Option<u32>,

    /// Pixel layout of headerless input
    #[arg(long, value_enum, default_value_t = FormatArg::Bgr)]
    pub format: FormatArg,

    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormatArg>,

    /// TIFF compression
    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    pub compression: CompressionArg,

    /// Use the horizontal TIFF predictor
    #[arg(long)]
    pub predictor: bool,

    /// Fail on unknown header format codes instead of reading them as BGR
    #[arg(long)]
    pub strict: bool,

    /// Reject images wider or taller than this
    #[arg(long)]
    pub max_dimension: Option<u32>,

    /// Strip the alpha channel before saving
    #[arg(long)]
    pub drop_alpha: bool,

    /// Print the pixel at X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub pixel: Option<(u32, u32)>,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn decode_request(&self) -> DecodeRequest {
        if self.no_metadata {
            DecodeRequest::without_metadata(self.width, self.height, self.format.to_pixel_format())
        } else {
            DecodeRequest::with_metadata()
        }
    }

    pub fn resolve_output_format(&self) -> Result<OutputFormat> {
        if let Some(format) = self.output_format {
            return Ok(format.to_output_format());
        }
        let Some(output) = &self.output else {
            return Ok(OutputFormat::Png);
        };
        let ext = output.extension().and_then(|e| e.to_str()).unwrap_or_default();
        match OutputFormat::from_extension(ext) {
            Some(format) => Ok(format),
            None => bail!(
                "cannot infer output format from {}; pass --output-format",
                output.display()
            ),
        }
    }
}

fn parse_point(s: &str) -> std::result::Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("invalid X {x:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("invalid Y {y:?}: {e}"))?;
    Ok((x, y))
}
