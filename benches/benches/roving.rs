// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_roving::{Focus, resolve_in_slice};

#[derive(Clone)]
struct Row {
    id: String,
    disabled: bool,
}

fn rows(len: usize, disabled_every: usize) -> Vec<Row> {
    (0..len)
        .map(|i| Row {
            id: format!("row-{i}"),
            disabled: i % disabled_every != 0,
        })
        .collect()
}

fn resolve(focus: Focus<'_>, rows: &[Row], active: Option<usize>) -> Option<usize> {
    resolve_in_slice(
        focus,
        rows,
        active,
        |row: &Row| row.id.as_str(),
        |row: &Row| row.disabled,
    )
}

fn bench_boundary_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/boundary");

    // Worst case for First/Last: only the item at the far end is enabled.
    for len in [16usize, 256, 4_096] {
        let mut items = rows(len, usize::MAX);
        items[0].disabled = true;
        items[len - 1].disabled = false;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("first", len), &items, |b, items| {
            b.iter(|| black_box(resolve(Focus::First, black_box(items), None)));
        });
        group.bench_with_input(BenchmarkId::new("last", len), &items, |b, items| {
            b.iter(|| black_box(resolve(Focus::Last, black_box(items), None)));
        });
    }

    group.finish();
}

fn bench_relative_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/relative");

    // Sparse enablement: one enabled row in eight.
    for len in [16usize, 256, 4_096] {
        let items = rows(len, 8);
        let middle = (len / 2) & !7;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("next", len), &items, |b, items| {
            b.iter(|| black_box(resolve(Focus::Next, black_box(items), Some(middle))));
        });
        group.bench_with_input(BenchmarkId::new("previous", len), &items, |b, items| {
            b.iter(|| black_box(resolve(Focus::Previous, black_box(items), Some(middle))));
        });
    }

    group.finish();
}

fn bench_specific(c: &mut Criterion) {
    let mut group = c.benchmark_group("roving/specific");

    for len in [16usize, 256, 4_096] {
        let items = rows(len, 2);
        let target = format!("row-{}", len - 1);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("last_id", len), &items, |b, items| {
            b.iter(|| {
                black_box(resolve(
                    Focus::Specific(target.as_str()),
                    black_box(items),
                    Some(0),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_boundary_moves,
    bench_relative_moves,
    bench_specific
);
criterion_main!(benches);
