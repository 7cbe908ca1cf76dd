// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_select::{Choice, Record, SelectController, SelectValue};

const WORDS: [&str; 8] = [
    "Äpfel", "Crème", "naïve", "Ørsted", "Straße", "Łódź", "café", "résumé",
];

fn record_options(len: usize) -> Vec<Choice> {
    (0..len)
        .map(|i| {
            let label = format!("{} {i}", WORDS[i % WORDS.len()]);
            Choice::from(Record::new().with("id", i as i64).with("label", label))
        })
        .collect()
}

fn bench_visible_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/visible_options");

    // Every search folds each label, so cost grows with option count.
    for len in [128usize, 1_024, 8_192] {
        let mut select = SelectController::builder()
            .options(record_options(len))
            .build();
        select.set_search("STRASSE");
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("folded_search", len), &select, |b, select| {
            b.iter(|| black_box(select.visible_options()));
        });

        let mut tagging = SelectController::builder()
            .taggable(true)
            .options(record_options(len))
            .build();
        tagging.set_search("no such option");
        group.bench_with_input(BenchmarkId::new("tag_candidate", len), &tagging, |b, select| {
            b.iter(|| black_box(select.visible_options()));
        });
    }

    group.finish();
}

fn bench_multi_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/multi_select");

    // Each select scans the current value for a match, so filling a value is O(n^2).
    for len in [64usize, 256, 1_024] {
        let options = record_options(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("select_all", len), &options, |b, options| {
            b.iter_batched(
                || {
                    SelectController::builder()
                        .multiple(true)
                        .close_on_select(false)
                        .options(options.clone())
                        .build()
                },
                |mut select| {
                    for option in options {
                        select.select(option.clone());
                    }
                    black_box(select.take_events().len());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_options_changed(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/options_changed");

    for len in [128usize, 1_024, 8_192] {
        let options = record_options(len);
        let ids: Vec<Choice> = (0..len as i64).step_by(7).map(Choice::from).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("rederive_by_key", len),
            &(options, ids),
            |b, (options, ids)| {
                b.iter_batched(
                    || {
                        SelectController::builder()
                            .multiple(true)
                            .value_key("id")
                            .value(SelectValue::Multiple(ids.clone()))
                            .build()
                    },
                    |mut select| {
                        select.options_changed(options.clone());
                        black_box(select.selected().len());
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_visible_options,
    bench_multi_select,
    bench_options_changed
);
criterion_main!(benches);
