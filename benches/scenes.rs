//! Benchmarks for scene generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tetris_weather::{all_scenes, app_main, draw_grid, Grid, Palette};

fn bench_scenes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenes");
    let palette = Palette::weather();

    group.bench_function("build_all", |b| {
        b.iter(|| all_scenes(black_box(&palette)).unwrap())
    });

    group.bench_function("render_app_main", |b| {
        let scene = app_main(&palette).unwrap();
        b.iter(|| black_box(&scene).svg())
    });

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let palette = Palette::weather();

    let rows: Vec<String> = (0..64)
        .map(|y| {
            (0..64)
                .map(|x| ['B', 'C', 'G', 'O', 'R', '.'][(x + y) % 6])
                .collect()
        })
        .collect();
    let grid = Grid::parse(rows.as_slice()).unwrap();

    group.bench_function("draw_grid_64x64", |b| {
        b.iter(|| draw_grid(black_box(&grid), &palette, (0, 0), 16, 2))
    });

    group.finish();
}

criterion_group!(benches, bench_scenes, bench_grid);
criterion_main!(benches);
