use keytween_core::{BlendMode, NullRecorder, SelectionContext, TweenSession};
use keytween_test_fixtures::{CurveBank, Edit, UndoRecorder};

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should run a full press/drag/release cycle against one recorder
#[test]
fn press_drag_release_round_trip() {
    let mut bank = CurveBank::new();
    let curve = bank.add_curve(&[(0.0, 0.0), (10.0, 2.0), (20.0, 10.0)]);
    let mut recorder = UndoRecorder::new();

    let ctx = SelectionContext::at_time([curve], 10.0);
    let session = TweenSession::begin(
        &mut bank,
        &ctx,
        BlendMode::Between,
        false,
        &mut recorder,
    );
    assert!(!session.is_empty());

    // Simulated drag: 75px right of the press point.
    let blend = session.blend_from_drag(75.0);
    approx(blend, 0.5, 1e-12);
    session.interpolate(blend, &mut bank, &mut recorder);
    approx(bank.value(curve, 1), 7.5, 1e-12);

    // Release commits by simply stopping; the recorder can take the whole
    // interaction back.
    bank.revert(&recorder);
    approx(bank.value(curve, 1), 2.0, 1e-12);
}

/// it should clamp drag blends at 1 normally and 2 with overshoot
#[test]
fn drag_clamping_honors_overshoot() {
    let mut bank = CurveBank::new();
    let curve = bank.add_curve(&[(0.0, 0.0), (10.0, 2.0), (20.0, 10.0)]);
    let ctx = SelectionContext::at_time([curve], 10.0);

    let plain = TweenSession::begin(
        &mut bank,
        &ctx,
        BlendMode::Between,
        false,
        &mut NullRecorder,
    );
    approx(plain.blend_from_drag(600.0), 1.0, 0.0);
    approx(plain.blend_from_drag(-600.0), -1.0, 0.0);

    let overshoot = TweenSession::begin(
        &mut bank,
        &ctx,
        BlendMode::Between,
        true,
        &mut NullRecorder,
    );
    approx(overshoot.blend_from_drag(600.0), 2.0, 0.0);
    approx(overshoot.clamp_blend(-5.0), -2.0, 0.0);
    approx(overshoot.blend_from_drag(150.0), 1.0, 1e-12);
}

/// it should report an empty session for a selection that resolves nothing
#[test]
fn empty_selection_produces_empty_session() {
    let mut bank = CurveBank::new();
    let ctx = SelectionContext::default();
    let session = TweenSession::begin(
        &mut bank,
        &ctx,
        BlendMode::Towards,
        false,
        &mut NullRecorder,
    );
    assert!(session.is_empty());
    assert_eq!(session.interpolate(1.0, &mut bank, &mut NullRecorder), 0);
}

/// it should batch the press-time key insertion and every drag write into
/// one revertible recording
#[test]
fn recorder_reverts_insertion_and_writes_together() {
    let mut bank = CurveBank::new();
    let curve = bank.add_curve(&[(0.0, 0.0), (10.0, 10.0)]);
    let mut recorder = UndoRecorder::new();

    let ctx = SelectionContext::at_time([curve], 5.0);
    let session = TweenSession::begin(
        &mut bank,
        &ctx,
        BlendMode::Towards,
        false,
        &mut recorder,
    );
    assert_eq!(bank.key_count(curve), 3);
    assert!(matches!(recorder.edits()[0], Edit::KeyInsert { .. }));

    session.interpolate(-0.5, &mut bank, &mut recorder);
    session.interpolate(1.0, &mut bank, &mut recorder);
    approx(bank.value(curve, 1), 10.0, 1e-12);

    bank.revert(&recorder);
    assert_eq!(bank.key_count(curve), 2);
    assert_eq!(bank.values(curve), vec![0.0, 10.0]);
}

/// it should replace one session with the next without any cleanup step
#[test]
fn sessions_replace_each_other() {
    let mut bank = CurveBank::new();
    let curve = bank.add_curve(&[(0.0, 0.0), (10.0, 2.0), (20.0, 10.0)]);
    let ctx = SelectionContext::at_time([curve], 10.0);

    let first = TweenSession::begin(
        &mut bank,
        &ctx,
        BlendMode::Between,
        false,
        &mut NullRecorder,
    );
    first.interpolate(1.0, &mut bank, &mut NullRecorder);
    approx(bank.value(curve, 1), 10.0, 1e-12);

    // A new press snapshots the moved value as the new neutral center.
    let second = TweenSession::begin(
        &mut bank,
        &ctx,
        BlendMode::Towards,
        false,
        &mut NullRecorder,
    );
    second.interpolate(0.0, &mut bank, &mut NullRecorder);
    approx(bank.value(curve, 1), 10.0, 1e-12);
}
