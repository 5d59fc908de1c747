use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image::ImageFormat;
use rangeconv::image_pipeline::{
    ConversionConfig, ImageBuffer, ImageWriter, RangeConversionPipeline, RangeDirection,
    StandardImageWriter, convert_range,
};
use std::path::Path;

fn generate_limited_image(width: usize, height: usize) -> ImageBuffer {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let value = (16 + (x + y) % 220) as u8;
            data.extend_from_slice(&[value, value, value]);
        }
    }
    ImageBuffer::new(height, width, 3, data).unwrap()
}

fn benchmark_mapping_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (1000, 1000, "1000x1000"),
        (4000, 3000, "4000x3000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_limited_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| convert_range(black_box(image), RangeDirection::ToFull));
        });
    }

    group.finish();
}

fn benchmark_directions(c: &mut Criterion) {
    let mut group = c.benchmark_group("directions");
    let image = generate_limited_image(1000, 1000);

    for direction in [RangeDirection::ToFull, RangeDirection::ToLimited] {
        group.bench_with_input(BenchmarkId::from_parameter(direction), &image, |b, image| {
            b.iter(|| convert_range(black_box(image), direction));
        });
    }

    group.finish();
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_map_encode");
    let image = generate_limited_image(500, 500);
    let config = ConversionConfig::default();

    for (format, label) in [(ImageFormat::Png, "png"), (ImageFormat::Jpeg, "jpeg")] {
        let mut encoded = Vec::new();
        StandardImageWriter
            .write_image(&image, format, &mut encoded, &config)
            .unwrap();
        let pipeline = RangeConversionPipeline::new(config.clone());

        group.bench_with_input(BenchmarkId::from_parameter(label), &encoded, |b, data| {
            b.iter(|| {
                let mut output = Vec::new();
                pipeline
                    .convert(
                        black_box(data),
                        Path::new("bench"),
                        format,
                        RangeDirection::ToFull,
                        &mut output,
                    )
                    .unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_mapping_sizes,
    benchmark_directions,
    benchmark_full_pipeline
);
criterion_main!(benches);
