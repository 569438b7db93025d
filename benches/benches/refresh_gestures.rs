// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Insets;
use understory_refresh::{RefreshConfig, RefreshController, ScrollSample, ScrollView, Subscription};

/// Offsets for a pull from rest to `depth` and back, `steps` samples each way.
fn gen_pull_offsets(rest: f64, depth: f64, steps: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(steps * 2);
    for i in 0..steps {
        out.push(rest - depth * i as f64 / steps as f64);
    }
    for i in (0..steps).rev() {
        out.push(rest - depth * i as f64 / steps as f64);
    }
    out
}

fn attached(top: f64) -> (Rc<ScrollView>, RefreshController<ScrollView>) {
    let view = Rc::new(ScrollView::with_insets(Insets::new(0.0, top, 0.0, 0.0)));
    let mut control = RefreshController::new(RefreshConfig::new(80.0)).unwrap();
    control.attach(&Rc::downgrade(&view)).unwrap();
    (view, control)
}

fn bench_partial_pulls(c: &mut Criterion) {
    let offsets = gen_pull_offsets(-10.0, 60.0, 500);
    let mut group = c.benchmark_group("refresh_partial_pull");
    group.throughput(Throughput::Elements(offsets.len() as u64));
    group.bench_function("handle_scroll_1000", |b| {
        let (view, mut control) = attached(10.0);
        let sub = view.subscribers()[0];
        b.iter(|| {
            for &y in &offsets {
                control.handle_scroll(sub, ScrollSample::new(y, true));
            }
            control.handle_scroll(sub, ScrollSample::new(-10.0, false));
            black_box(control.state());
        });
    });
    group.finish();
}

fn bench_trigger_cycle(c: &mut Criterion) {
    let offsets = gen_pull_offsets(-10.0, 120.0, 50);
    let mut group = c.benchmark_group("refresh_trigger_cycle");
    group.bench_function("pull_release_end", |b| {
        b.iter_batched(
            || attached(10.0),
            |(view, mut control)| {
                let sub: Subscription = view.subscribers()[0];
                for &y in &offsets[..50] {
                    control.handle_scroll(sub, ScrollSample::new(y, true));
                }
                control.handle_scroll(sub, ScrollSample::new(-130.0, false));
                control.end_refreshing();
                black_box(control.state());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_partial_pulls, bench_trigger_cycle);
criterion_main!(benches);
