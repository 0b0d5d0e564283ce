// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrille_geometry::Rect;
use quadrille_tree::QuadTree;

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

fn to_rstar_rect(r: &Rect<f64>) -> Rectangle<[f64; 2]> {
    let max = [r.pos.x + r.width, r.pos.y + r.height];
    Rectangle::from_corners([r.pos.x, r.pos.y], max)
}

fn to_rstar_rects(v: &[Rect<f64>]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter().map(to_rstar_rect).collect()
}

// Float rects ordered with `total_cmp` so they can be quadtree keys.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Key(Rect<f64>);

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        let (a, b) = (&self.0, &other.0);
        a.pos
            .x
            .total_cmp(&b.pos.x)
            .then(a.pos.y.total_cmp(&b.pos.y))
            .then(a.width.total_cmp(&b.width))
            .then(a.height.total_cmp(&b.height))
    }
}

impl quadrille_geometry::AxisAligned for Key {
    type Scalar = f64;

    fn bottom_left(&self) -> quadrille_geometry::Point<f64> {
        self.0.pos
    }

    fn width(&self) -> f64 {
        self.0.width
    }

    fn height(&self) -> f64 {
        self.0.height
    }
}

fn bench_quadtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_external_compare_f64");
    for &n in &[64_usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = Rect::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadrille_build_query_n{n}"), |b| {
            b.iter_batched(
                QuadTree::<Key>::new,
                |mut tree| {
                    tree.extend(rects.iter().copied().map(Key));
                    let hits: usize = tree.query(query).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_n{n}"), |b| {
            b.iter_batched(
                RTree::new,
                |mut tree| {
                    for r in to_rstar_rects(&rects) {
                        tree.insert(r);
                    }
                    let aabb = AABB::from_corners(
                        [query.pos.x, query.pos.y],
                        [query.pos.x + query.width, query.pos.y + query.height],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        let tree: QuadTree<_> = rects.iter().copied().map(Key).collect();
        let rtree = RTree::bulk_load(to_rstar_rects(&rects));
        group.bench_function(format!("quadrille_query_only_n{n}"), |b| {
            b.iter(|| black_box(tree.query(query).count()));
        });
        group.bench_function(format!("rstar_query_only_n{n}"), |b| {
            let aabb = AABB::from_corners(
                [query.pos.x, query.pos.y],
                [query.pos.x + query.width, query.pos.y + query.height],
            );
            b.iter(|| black_box(rtree.locate_in_envelope_intersecting(&aabb).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_external_compare_f64);
criterion_main!(benches);
