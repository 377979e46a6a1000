use std::fs;
use std::io::Write;

use rawframe_rs::image_pipeline::{
    ConversionConfig, DecodeRequest, OutputFormat, PixelFormat, RawConversionPipeline,
    RawImageDecoder, RawImageError, RawImageHeader,
};
use tempfile::{NamedTempFile, tempdir};

fn gradient(width: u32, height: u32, channels: usize) -> Vec<u8> {
    (0..width as usize * height as usize * channels)
        .map(|i| (i % 251) as u8)
        .collect()
}

fn write_raw(header: Option<RawImageHeader>, payload: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    if let Some(header) = header {
        file.write_all(&header.to_bytes()).unwrap();
    }
    file.write_all(payload).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn decodes_file_with_metadata() {
    let payload = gradient(8, 4, 4);
    let file = write_raw(Some(RawImageHeader::new(8, 4, PixelFormat::Bgra)), &payload);

    let image = RawImageDecoder::new()
        .decode_file(file.path(), &DecodeRequest::with_metadata())
        .unwrap();

    assert_eq!(image.shape(), [4, 8, 4]);
    assert_eq!(image.format, PixelFormat::Bgra);
    assert_eq!(image.data, payload);
}

#[test]
fn decodes_headerless_rgb_file() {
    let payload = gradient(3, 3, 3);
    let file = write_raw(None, &payload);

    let request = DecodeRequest::without_metadata(Some(3), Some(3), PixelFormat::Rgb);
    let image = RawImageDecoder::new().decode_file(file.path(), &request).unwrap();

    assert_eq!(image.format, PixelFormat::Rgb);
    assert_eq!(image.pixel(0, 0), Some(&[payload[2], payload[1], payload[0]][..]));
    assert_eq!(image.pixel(2, 2), Some(&[payload[26], payload[25], payload[24]][..]));
}

#[test]
fn headerless_file_with_wrong_declared_size_fails() {
    let file = write_raw(None, &gradient(4, 4, 3));

    let request = DecodeRequest::without_metadata(Some(4), Some(5), PixelFormat::Bgr);
    let result = RawImageDecoder::new().decode_file(file.path(), &request);

    assert!(matches!(
        result,
        Err(RawImageError::ShapeMismatch { expected: Some(60), actual: 48, .. })
    ));
}

#[test]
fn converts_file_to_png_on_disk() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out.png");
    let file = write_raw(Some(RawImageHeader::new(2, 2, PixelFormat::Rgb)), &gradient(2, 2, 3));

    let pipeline = RawConversionPipeline::new(ConversionConfig::default());
    let image = pipeline
        .convert_file(file.path(), &DecodeRequest::with_metadata(), &output_path)
        .unwrap();

    assert_eq!(image.shape(), [2, 2, 3]);
    let written = fs::read(&output_path).unwrap();
    assert!(written.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn failed_decode_leaves_no_output_file() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out.ppm");
    let file = write_raw(None, &[1, 0, 0, 0, 1]);

    let config = ConversionConfig::builder().output_format(OutputFormat::Ppm).build();
    let result = RawConversionPipeline::new(config).convert_file(
        file.path(),
        &DecodeRequest::with_metadata(),
        &output_path,
    );

    assert!(matches!(result, Err(RawImageError::MalformedHeader { available: 5 })));
    assert!(!output_path.exists());
}

#[test]
fn missing_input_reports_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.raw");

    let pipeline = RawConversionPipeline::new(ConversionConfig::default());
    let err = pipeline
        .decode_file(&missing, &DecodeRequest::with_metadata())
        .unwrap_err();

    assert!(matches!(err, RawImageError::InputRead { .. }));
    assert!(err.to_string().contains("missing.raw"));
}

#[test]
fn rejected_write_leaves_no_output_file() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out.ppm");
    let file = write_raw(Some(RawImageHeader::new(1, 1, PixelFormat::Rgba)), &[1, 2, 3, 4]);

    let config = ConversionConfig::builder().output_format(OutputFormat::Ppm).build();
    let result = RawConversionPipeline::new(config).convert_file(
        file.path(),
        &DecodeRequest::with_metadata(),
        &output_path,
    );

    assert!(matches!(result, Err(RawImageError::UnsupportedFormat(_))));
    assert!(!output_path.exists());
}

#[test]
fn empty_image_rejected_by_png_leaves_no_output_file() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out.png");
    let file = write_raw(Some(RawImageHeader::new(0, 0, PixelFormat::Bgr)), &[]);

    let result = RawConversionPipeline::new(ConversionConfig::default()).convert_file(
        file.path(),
        &DecodeRequest::with_metadata(),
        &output_path,
    );

    assert!(matches!(result, Err(RawImageError::EncodeError(_))));
    assert!(!output_path.exists());
}

#[test]
fn alpha_input_to_ppm_succeeds_with_drop_alpha() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("out.ppm");
    let file = write_raw(Some(RawImageHeader::new(1, 1, PixelFormat::Rgba)), &[1, 2, 3, 4]);

    let config = ConversionConfig::builder()
        .output_format(OutputFormat::Ppm)
        .drop_alpha(true)
        .build();
    RawConversionPipeline::new(config)
        .convert_file(file.path(), &DecodeRequest::with_metadata(), &output_path)
        .unwrap();

    assert_eq!(fs::read(&output_path).unwrap(), b"P6\n1 1\n255\n\x01\x02\x03".to_vec());
}
