// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the per-frame hover tick.
//!
//! A deterministic grid of buttons under one layer, with a sweep of pointer
//! positions so that every tick produces a handful of enter/exit transitions.
//! The `blocked` variants add sibling overlays next to the layer to measure
//! the z-order scan.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_hover::{DebugOutline, HoverEntry, HoverTracker, NodeId, SceneNode, SceneTree};

const CELL: f64 = 40.0;

fn build_grid(side: usize, overlays: usize) -> (SceneTree, NodeId, HoverTracker<NodeId>) {
    let mut scene = SceneTree::new();
    let root = scene.insert(None, SceneNode::default());
    scene.set_scene_root(Some(root));
    let layer = scene.insert(Some(root), SceneNode::default());
    for i in 0..overlays {
        let overlay = scene.insert(Some(root), SceneNode::default());
        // Only the last overlay is stacked above the layer.
        scene.set_z_order(overlay, if i + 1 == overlays { 1 } else { -1 });
    }

    let mut tracker = HoverTracker::new(layer);
    for row in 0..side {
        for col in 0..side {
            let id = scene.insert(
                Some(layer),
                SceneNode {
                    position: Point::new(col as f64 * CELL, row as f64 * CELL),
                    content_size: Size::new(CELL * 0.8, CELL * 0.8),
                    anchor: Vec2::new(0.5, 0.5),
                    ..SceneNode::default()
                },
            );
            tracker.watch(id, HoverEntry::new().with_enter(|_, _| {}).with_exit(|_, _| {}));
        }
    }
    (scene, layer, tracker)
}

fn sweep(side: usize) -> Vec<Point> {
    let extent = side as f64 * CELL;
    (0..64)
        .map(|i| {
            let t = f64::from(i) / 64.0;
            Point::new(t * extent, (1.0 - t) * extent)
        })
        .collect()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover/update");

    for side in [8usize, 32, 64] {
        let nodes = side * side;
        group.throughput(Throughput::Elements(nodes as u64));
        let pointers = sweep(side);

        group.bench_with_input(BenchmarkId::new("plain", nodes), &side, |b, &side| {
            let (scene, _, mut tracker) = build_grid(side, 0);
            let mut i = 0;
            b.iter(|| {
                let p = pointers[i % pointers.len()];
                i += 1;
                black_box(tracker.update(&scene, &p, &mut (), 1.0 / 60.0));
            });
        });

        group.bench_with_input(BenchmarkId::new("debug_draw", nodes), &side, |b, &side| {
            let (scene, _, mut tracker) = build_grid(side, 0);
            tracker.set_debug_draw(true);
            let mut canvas: Vec<DebugOutline> = Vec::with_capacity(nodes);
            let mut i = 0;
            b.iter(|| {
                let p = pointers[i % pointers.len()];
                i += 1;
                black_box(tracker.update(&scene, &p, &mut canvas, 1.0 / 60.0));
            });
        });
    }

    group.finish();
}

fn bench_blocked(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover/blocked");

    for overlays in [1usize, 64, 1_024] {
        group.bench_with_input(
            BenchmarkId::new("z_order_scan", overlays),
            &overlays,
            |b, &overlays| {
                let (scene, _, mut tracker) = build_grid(32, overlays);
                tracker.set_respect_z_order(true);
                b.iter(|| {
                    black_box(tracker.update(&scene, &Point::new(0.0, 0.0), &mut (), 1.0 / 60.0));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_update, bench_blocked);
criterion_main!(benches);
