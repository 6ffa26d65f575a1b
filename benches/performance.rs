use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use mlb_colors::sampling::{average_color, center_pixel, DEFAULT_ALPHA_THRESHOLD};
use mlb_colors::teams::{export_csv, lookup_declared_color, team_id_by_abbreviation, validate_table};
use mlb_colors::types::TeamId;

/// Build a spot-logo sized image: an opaque disc on a transparent background
fn create_spot_image(size: u32) -> RgbaImage {
    let center = size as i64 / 2;
    let radius = center - 2;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as i64 - center;
        let dy = y as i64 - center;
        if dx * dx + dy * dy <= radius * radius {
            Rgba([0x13, 0x24, 0x48, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn bench_sampling(c: &mut Criterion) {
    let small = create_spot_image(200);
    let large = create_spot_image(1000);

    let mut group = c.benchmark_group("sampling");

    group.bench_function("average_200px", |b| {
        b.iter(|| average_color(black_box(small.as_raw()), DEFAULT_ALPHA_THRESHOLD))
    });

    group.bench_function("average_1000px", |b| {
        b.iter(|| average_color(black_box(large.as_raw()), DEFAULT_ALPHA_THRESHOLD))
    });

    group.bench_function("center_pixel_200px", |b| {
        b.iter(|| center_pixel(black_box(&small)))
    });

    group.finish();
}

fn bench_team_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("team_table");

    group.bench_function("lookup_declared_all_ids", |b| {
        b.iter(|| {
            for id in 100..170 {
                black_box(lookup_declared_color(TeamId(black_box(id))));
            }
        })
    });

    group.bench_function("abbreviation_lookup", |b| {
        b.iter(|| team_id_by_abbreviation(black_box("nyy")))
    });

    group.bench_function("export_csv", |b| b.iter(export_csv));

    group.bench_function("validate_table", |b| b.iter(validate_table));

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_team_table);
criterion_main!(benches);
