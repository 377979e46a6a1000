//! Image writing module
//!
//! Writers take a decoded BGR(A) image and encode it into a standard file
//! format. They stand in for the display/save library a viewer would use.

mod writer;
mod png_writer;
mod ppm_writer;
mod tiff_writer;
mod standard_writer;

pub use writer::ImageWriter;
pub use png_writer::PngImageWriter;
pub use ppm_writer::PpmImageWriter;
pub use tiff_writer::TiffImageWriter;
pub use standard_writer::StandardImageWriter;
