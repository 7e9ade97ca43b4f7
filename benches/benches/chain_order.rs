// Copyright 2026 the Headroom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use headroom_chain::{ChainEntry, FocusChain};
use headroom_host::ElementId;
use kurbo::Rect;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / ((1_u64 << 53) as f64)
    }
}

// A form worth of inputs scattered across a tall screen, in shuffled
// declaration order.
fn gen_form(n: usize, seed: u64) -> Vec<ChainEntry> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let top = rng.next_f64() * 4000.0;
        let left = rng.next_f64() * 340.0;
        out.push(ChainEntry {
            element: ElementId(i as u64 + 1),
            frame: Rect::new(left, top, left + 120.0, top + 40.0),
        });
    }
    out
}

fn bench_chain_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_build");
    for &n in &[8_usize, 64, 512] {
        let entries = gen_form(n, 0x5eed);
        let focused = entries[n / 2].element;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("reading_order_{n}"), |b| {
            b.iter_batched(
                || entries.clone(),
                |entries| black_box(FocusChain::build(entries, focused)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_neighbor_lookup(c: &mut Criterion) {
    let entries = gen_form(512, 0x5eed);
    let focused = entries[256].element;
    let chain = FocusChain::build(entries, focused);
    c.bench_function("neighbor_lookup_512", |b| {
        b.iter(|| black_box(chain.neighbors()));
    });
}

fn bench_retarget(c: &mut Criterion) {
    let entries = gen_form(512, 0x5eed);
    let focused = entries[0].element;
    let mut chain = FocusChain::build(entries, focused);
    let mut i = 0_u64;
    c.bench_function("retarget_512", |b| {
        b.iter(|| {
            i = (i % 512) + 1;
            black_box(chain.retarget(ElementId(i)))
        });
    });
}

criterion_group!(
    benches,
    bench_chain_build,
    bench_neighbor_lookup,
    bench_retarget
);
criterion_main!(benches);
