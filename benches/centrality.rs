//! 介数中心性基准
//!
//! 穷举枚举随图规模指数增长，基准覆盖预期的小规模网络区间

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keynode::algorithm::CentralityEngine;
use keynode::builtin_graphs;

fn bench_centrality(c: &mut Criterion) {
    let bridge = builtin_graphs::bridge_demo().unwrap();
    c.bench_function("topk_bridge_demo", |b| {
        b.iter(|| {
            let engine = CentralityEngine::new(&bridge);
            black_box(engine.top_k(3))
        })
    });

    let line = builtin_graphs::line(12).unwrap();
    c.bench_function("scores_line_12", |b| {
        b.iter(|| {
            let engine = CentralityEngine::new(&line);
            black_box(engine.scores())
        })
    });
}

criterion_group!(benches, bench_centrality);
criterion_main!(benches);
