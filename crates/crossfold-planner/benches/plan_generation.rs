// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for crossfold plan generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crossfold_planner::{CrossfoldSpec, OutputFormat};
use data_spec::{DataSourceSpec, PreferenceDomain, TextDataSourceSpec};

fn source() -> DataSourceSpec {
    let mut t = TextDataSourceSpec::new("data/ml100k/u.data");
    t.name = Some("ml100k".into());
    t.domain = Some(PreferenceDomain::new(1.0, 5.0));
    t.into()
}

fn bench_plan_by_fold_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_by_fold_count");
    for folds in [5usize, 10, 50] {
        let spec = CrossfoldSpec::new()
            .with_source(source())
            .with_partition_count(folds)
            .with_output_dir("/tmp/cf");
        group.bench_with_input(BenchmarkId::from_parameter(folds), &spec, |b, spec| {
            b.iter(|| black_box(spec.plan().unwrap()))
        });
    }
    group.finish();
}

fn bench_deferred_source(c: &mut Criterion) {
    let spec = CrossfoldSpec::new()
        .with_deferred_source(|| Ok(Some(source())))
        .with_output_format(OutputFormat::Pack)
        .with_output_dir("/tmp/cf");
    c.bench_function("plan_deferred_pack", |b| {
        b.iter(|| black_box(spec.plan().unwrap()))
    });
}

fn bench_manifest_json(c: &mut Criterion) {
    let plan = CrossfoldSpec::new()
        .with_source(source())
        .with_partition_count(10)
        .with_output_dir("/tmp/cf")
        .plan()
        .unwrap();
    c.bench_function("manifest_to_json", |b| {
        b.iter(|| black_box(plan.manifest().to_json().unwrap()))
    });
}

criterion_group!(
    benches,
    bench_plan_by_fold_count,
    bench_deferred_source,
    bench_manifest_json
);
criterion_main!(benches);
