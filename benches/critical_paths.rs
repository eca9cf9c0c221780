//! Criterion benchmarks for the tile codec
//!
//! Covers the paths every load and save goes through:
//! - Encode: grid to hex text and raw bytes
//! - Decode: hex text and raw bytes back into a grid
//! - Render: grid to RGBA image through the palette

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gbsprite::codec::{decode, encode, from_bytes, to_bytes, Separator};
use gbsprite::grid::PixelGrid;
use gbsprite::registry::Palette;
use gbsprite::renderer::render_grid;

/// Sizes in pixels, square.
const SIZES: [usize; 4] = [8, 32, 128, 256];

/// A grid whose cells cycle through all four indices.
fn make_grid(size: usize) -> PixelGrid {
    let rows = (0..size).map(|y| (0..size).map(|x| ((x + y) % 4) as u8).collect()).collect();
    PixelGrid::from_rows(rows).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in SIZES {
        let grid = make_grid(size);
        group.throughput(Throughput::Bytes(grid.byte_len() as u64));
        group.bench_with_input(BenchmarkId::new("hex", size), &grid, |b, grid| {
            b.iter(|| encode(black_box(grid), Separator::Space))
        });
        group.bench_with_input(BenchmarkId::new("bytes", size), &grid, |b, grid| {
            b.iter(|| to_bytes(black_box(grid)))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in SIZES {
        let source = make_grid(size);
        let hex = encode(&source, Separator::Space);
        let bytes = to_bytes(&source);
        let mut target = PixelGrid::new(size, size).unwrap();

        group.throughput(Throughput::Bytes(source.byte_len() as u64));
        group.bench_with_input(BenchmarkId::new("hex", size), &hex, |b, hex| {
            b.iter(|| decode(&mut target, black_box(hex)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("bytes", size), &bytes, |b, bytes| {
            b.iter(|| from_bytes(&mut target, black_box(bytes)).unwrap())
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let palette = Palette::default();
    for size in SIZES {
        let grid = make_grid(size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| render_grid(black_box(grid), &palette))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_render);
criterion_main!(benches);
