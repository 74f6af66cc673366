// rust/engine/benches/resolve_bench.rs
#![forbid(unsafe_code)]

/**
 * Style resolver micro-benchmarks.
 *
 * Focus:
 * - Per-cell lookup on a pre-decoded table, one per table format
 * - One-shot `resolve` (decode + lookup)
 * - Full piece rasterization
 */
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use block_sprites::{CELLS_PER_PIECE, Kind, Orientation, VisualStyle, rasterize, resolve};

fn bench_resolve_decoded(c: &mut Criterion) {
    for style in [
        VisualStyle::Solid,
        VisualStyle::TronSquare,
        VisualStyle::ShadedDither,
    ] {
        let table = style.table().expect("built-in style decodes");
        c.bench_function(&format!("sprites.resolve.decoded.{style:?}"), |b| {
            b.iter(|| {
                for &kind in Kind::all() {
                    for &o in Orientation::all() {
                        for cell in 0..CELLS_PER_PIECE {
                            black_box(table.resolve(black_box(kind), o, cell).ok());
                        }
                    }
                }
            });
        });
    }
}

fn bench_resolve_one_shot(c: &mut Criterion) {
    c.bench_function("sprites.resolve.one_shot", |b| {
        b.iter(|| {
            black_box(resolve(
                black_box(VisualStyle::Line),
                black_box(Kind::T),
                Orientation::East,
                2,
            ))
        });
    });
}

fn bench_rasterize(c: &mut Criterion) {
    let table = VisualStyle::TronAngled.table().expect("built-in style decodes");
    c.bench_function("sprites.rasterize.all_pieces", |b| {
        b.iter(|| {
            for &kind in Kind::all() {
                for &o in Orientation::all() {
                    black_box(rasterize(&table, kind, o).ok());
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_decoded,
    bench_resolve_one_shot,
    bench_rasterize
);
criterion_main!(benches);
