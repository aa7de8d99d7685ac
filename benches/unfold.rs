// SPDX-License-Identifier: Apache-2.0

//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foldnet::topology::bfs::bfs_forest;
use foldnet::topology::face::entities_from_surfaces;
use foldnet::topology::FaceGraph;
use foldnet::unfold::planar_unfold;
use foldnet::{pack, unfold_surfaces, PlanarSurface};
use nalgebra::Point3;

fn face_strip(n: usize) -> Vec<PlanarSurface> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            PlanarSurface::new(vec![
                Point3::new(x, 0.0, 0.0),
                Point3::new(x + 1.0, 0.0, 0.0),
                Point3::new(x + 1.0, 1.0, 0.0),
                Point3::new(x, 1.0, 0.0),
            ])
            .unwrap()
        })
        .collect()
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");

    for n in [16, 64, 256] {
        let surfaces = face_strip(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &surfaces, |b, surfaces| {
            b.iter(|| FaceGraph::build(entities_from_surfaces(black_box(surfaces.clone()))));
        });
    }

    group.finish();
}

fn bench_unfold(c: &mut Criterion) {
    let mut group = c.benchmark_group("unfold");

    for n in [16, 64] {
        let forest = bfs_forest(&FaceGraph::build(entities_from_surfaces(face_strip(n))));
        group.bench_with_input(BenchmarkId::from_parameter(n), &forest, |b, forest| {
            b.iter(|| planar_unfold(black_box(forest), None).unwrap());
        });
    }

    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let unfolding = unfold_surfaces(face_strip(32)).unwrap();

    c.bench_function("pack_strip_32", |b| {
        b.iter(|| pack(black_box(&unfolding), 100.0, 100.0, 0.5).unwrap());
    });
}

criterion_group!(benches, bench_graph_build, bench_unfold, bench_pack);
criterion_main!(benches);
