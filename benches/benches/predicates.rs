// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrille_geometry::predicates::{
    point_in_simple_polygon, polygons_intersect, segments_intersect,
};
use quadrille_geometry::{Point, Segment, SimplePolygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Regular-ish polygon with `n` vertices on an integer circle of radius `r` around `c`.
fn gen_polygon(n: usize, c: Point<i64>, r: f64) -> SimplePolygon<i64> {
    let vertices = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * core::f64::consts::TAU;
            Point::new(c.x + (r * t.cos()) as i64, c.y + (r * t.sin()) as i64)
        })
        .collect();
    SimplePolygon::new(vertices)
}

fn random_point(rng: &mut StdRng) -> Point<i64> {
    let x = rng.random_range(0..10_000);
    let y = rng.random_range(0..10_000);
    Point::new(x, y)
}

fn bench_segments(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let segments: Vec<_> = (0..1024)
        .map(|_| Segment::new(random_point(&mut rng), random_point(&mut rng)))
        .collect();

    let mut group = c.benchmark_group("segments_intersect");
    group.throughput(Throughput::Elements((segments.len() / 2) as u64));
    group.bench_function("random_pairs_i64", |b| {
        b.iter(|| {
            let hits = segments
                .chunks_exact(2)
                .filter(|pair| segments_intersect(&pair[0], &pair[1]))
                .count();
            black_box(hits);
        });
    });
    group.finish();
}

fn bench_polygons(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_predicates");
    for &n in &[8_usize, 64, 512] {
        let poly = gen_polygon(n, Point::new(5_000, 5_000), 4_000.0);
        let other = gen_polygon(n, Point::new(9_000, 5_000), 1_000.0);
        let mut rng = StdRng::seed_from_u64(5);
        let points: Vec<_> = (0..256).map(|_| random_point(&mut rng)).collect();

        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("point_in_polygon_n{n}"), |b| {
            b.iter(|| {
                let inside = points
                    .iter()
                    .filter(|p| point_in_simple_polygon(&poly, **p))
                    .count();
                black_box(inside);
            });
        });
        group.bench_function(format!("sat_n{n}"), |b| {
            b.iter(|| black_box(polygons_intersect(&poly, &other)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_segments, bench_polygons);
criterion_main!(benches);
