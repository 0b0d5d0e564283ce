// Copyright 2025 the Quadrille Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use quadrille_geometry::{Point, Rect};
use quadrille_tree::QuadTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn gen_grid_rects(n: i32, cell: i32) -> Vec<Rect<i32>> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(Rect::from_xywh(x * cell, y * cell, cell - 1, cell - 1));
        }
    }
    out
}

fn gen_random_rects(count: usize, extent: i32, max_side: i32, seed: u64) -> Vec<Rect<i32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Rect::from_xywh(
                rng.random_range(0..extent),
                rng.random_range(0..extent),
                rng.random_range(0..max_side),
                rng.random_range(0..max_side),
            )
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[32_i32, 64, 128] {
        let rects = gen_grid_rects(n, 10);
        group.throughput(Throughput::Elements(rects.len() as u64));
        group.bench_function(format!("grid_n{n}"), |b| {
            b.iter_batched(
                QuadTree::new,
                |mut tree| {
                    tree.extend(rects.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    for &count in &[1_000_usize, 10_000] {
        let rects = gen_random_rects(count, 4096, 64, 7);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("random_{count}"), |b| {
            b.iter_batched(
                QuadTree::new,
                |mut tree| {
                    tree.extend(rects.iter().copied());
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let rects = gen_random_rects(10_000, 4096, 64, 11);
    let tree: QuadTree<_> = rects.iter().copied().collect();
    let areas = gen_random_rects(256, 4096, 256, 13);

    group.throughput(Throughput::Elements(areas.len() as u64));
    group.bench_function("rect_random_10k", |b| {
        b.iter(|| {
            let hits: usize = areas.iter().map(|a| tree.query(*a).count()).sum();
            black_box(hits);
        });
    });
    group.bench_function("point_random_10k", |b| {
        b.iter(|| {
            let hits: usize = areas
                .iter()
                .map(|a| tree.query_point(Point::new(a.pos.x, a.pos.y)).count())
                .sum();
            black_box(hits);
        });
    });
    group.bench_function("contains_random_10k", |b| {
        b.iter(|| {
            let found = rects.iter().take(256).filter(|r| tree.contains(r)).count();
            black_box(found);
        });
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_remove");
    let rects = gen_random_rects(10_000, 4096, 64, 17);
    let tree: QuadTree<_> = rects.iter().copied().collect();
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("remove_all_random_10k", |b| {
        b.iter_batched(
            || tree.clone(),
            |mut tree| {
                for r in &rects {
                    tree.remove(r);
                }
                black_box(tree.is_empty());
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_query, bench_remove);
criterion_main!(benches);
