use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rawframe_rs::image_pipeline::{DecodeRequest, PixelFormat, RawImageDecoder, RawImageHeader};

fn generate_raw_file(width: u32, height: u32, format: PixelFormat) -> Vec<u8> {
    let mut data = RawImageHeader::new(width, height, format).to_bytes().to_vec();
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            data.extend(std::iter::repeat(value).take(format.channels()));
        }
    }
    data
}

fn benchmark_decode_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_by_size");
    let decoder = RawImageDecoder::new();

    let sizes = vec![
        (100, 100, "100x100"),
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let data = generate_raw_file(width, height, PixelFormat::Bgr);

        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            b.iter(|| decoder.decode_bytes(black_box(data), &DecodeRequest::with_metadata()));
        });
    }

    group.finish();
}

fn benchmark_channel_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_by_format");
    let decoder = RawImageDecoder::new();

    for format in [PixelFormat::Bgr, PixelFormat::Rgb, PixelFormat::Bgra, PixelFormat::Rgba] {
        let data = generate_raw_file(1920, 1080, format);

        group.bench_with_input(BenchmarkId::from_parameter(format), &data, |b, data| {
            b.iter(|| decoder.decode_bytes(black_box(data), &DecodeRequest::with_metadata()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode_sizes, benchmark_channel_swap);
criterion_main!(benches);
