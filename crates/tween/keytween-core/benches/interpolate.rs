//! Drag-loop benchmark: one snapshot, many interpolate calls, the way a
//! slider drives the engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use keytween_core::{BlendMode, NullRecorder, SelectionContext, TweenSession};
use keytween_test_fixtures::CurveBank;

fn drag_loop(c: &mut Criterion) {
    let mut bank = CurveBank::new();
    let curves: Vec<_> = (0..64)
        .map(|i| {
            let keys: Vec<(f64, f64)> = (0..32)
                .map(|k| (k as f64, ((i + k) % 7) as f64))
                .collect();
            bank.add_curve(&keys)
        })
        .collect();

    let ctx = SelectionContext::at_time(curves.iter().copied(), 16.0);

    for mode in [BlendMode::Between, BlendMode::Average, BlendMode::CurveTangent] {
        let session = TweenSession::begin(&mut bank, &ctx, mode, false, &mut NullRecorder);
        c.bench_function(&format!("interpolate/{mode:?}"), |b| {
            let mut blend = -1.0;
            b.iter(|| {
                blend = if blend >= 1.0 { -1.0 } else { blend + 0.01 };
                black_box(session.interpolate(black_box(blend), &mut bank, &mut NullRecorder))
            });
        });
    }
}

criterion_group!(benches, drag_loop);
criterion_main!(benches);
