// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use arbor_host::{HostConfig, LayoutNode, NodeHost};
use arbor_node::{NodeId, Orientation, TransitionConfig, TreeNodeDatum};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;

/// A complete tree with `fanout` children per branch, laid out row by row.
fn gen_layout(depth: usize, fanout: usize, dx: f64) -> Vec<LayoutNode> {
    let mut out = Vec::new();
    let root = Point::new(0.0, 0.0);
    out.push(LayoutNode::new(TreeNodeDatum::new("n", "root"), root, None));
    let mut frontier = vec![(String::from("n"), root)];
    for level in 1..=depth {
        let mut next = Vec::with_capacity(frontier.len() * fanout);
        for (pid, parent) in &frontier {
            for i in 0..fanout {
                let id = format!("{pid}.{i}");
                let x = parent.x * fanout as f64 + i as f64 * dx;
                let position = Point::new(x, level as f64 * 100.0);
                out.push(LayoutNode::child_of(
                    TreeNodeDatum::new(id.as_str(), id.as_str()),
                    position,
                    NodeId::from(pid.as_str()),
                    *parent,
                ));
                next.push((id, position));
            }
        }
        frontier = next;
    }
    out
}

fn shifted(layout: &[LayoutNode], dx: f64) -> Vec<LayoutNode> {
    layout
        .iter()
        .map(|n| LayoutNode {
            position: Point::new(n.position.x + dx, n.position.y),
            ..n.clone()
        })
        .collect()
}

fn mounted(layout: &[LayoutNode], transition: TransitionConfig) -> NodeHost {
    let mut host = NodeHost::new(HostConfig {
        orientation: Orientation::Vertical,
        transition,
        node_class_name: None,
    });
    host.sync(layout, Duration::ZERO);
    host.tick(Duration::from_secs(10));
    host
}

fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync");
    for &depth in &[4usize, 6] {
        let layout = gen_layout(depth, 4, 40.0);
        let moved = shifted(&layout, 10.0);
        group.throughput(Throughput::Elements(layout.len() as u64));

        group.bench_function(format!("mount_d{depth}"), |b| {
            b.iter_batched(
                || {
                    NodeHost::new(HostConfig {
                        orientation: Orientation::Vertical,
                        ..Default::default()
                    })
                },
                |mut host| black_box(host.sync(&layout, Duration::ZERO)),
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("unchanged_d{depth}"), |b| {
            b.iter_batched(
                || mounted(&layout, TransitionConfig::IMMEDIATE),
                |mut host| black_box(host.sync(&layout, Duration::from_secs(1))),
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("all_moved_d{depth}"), |b| {
            b.iter_batched(
                || mounted(&layout, TransitionConfig::IMMEDIATE),
                |mut host| black_box(host.sync(&moved, Duration::from_secs(1))),
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("collapse_root_d{depth}"), |b| {
            b.iter_batched(
                || mounted(&layout, TransitionConfig::IMMEDIATE),
                |mut host| black_box(host.sync(&layout[..1], Duration::from_secs(1))),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    let layout = gen_layout(5, 4, 40.0);
    let moved = shifted(&layout, 10.0);
    group.throughput(Throughput::Elements(layout.len() as u64));
    group.bench_function("animated_frame", |b| {
        b.iter_batched(
            || {
                let transition = TransitionConfig::animated(TransitionConfig::DEFAULT_DURATION);
                let mut host = mounted(&layout, transition);
                host.sync(&moved, Duration::from_secs(20));
                host
            },
            |mut host| black_box(host.tick(Duration::from_millis(20_250))),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_sync, bench_tick);
criterion_main!(benches);
