use keytween_core::BlendMode;

/// it should keep the external-storage ids stable across releases
#[test]
fn stored_ids_are_stable() {
    assert_eq!(BlendMode::Between.id(), 0);
    assert_eq!(BlendMode::Towards.id(), 1);
    assert_eq!(BlendMode::Average.id(), 2);
    assert_eq!(BlendMode::CurveTangent.id(), 3);
    assert_eq!(BlendMode::Default.id(), 4);
}

/// it should round-trip modes through serde with the short external names
#[test]
fn serde_round_trip_uses_short_names() {
    for (mode, name) in [
        (BlendMode::Between, "\"between\""),
        (BlendMode::Towards, "\"towards\""),
        (BlendMode::Average, "\"average\""),
        (BlendMode::CurveTangent, "\"curve\""),
        (BlendMode::Default, "\"default\""),
    ] {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, name);
        let back: BlendMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
}

/// it should fall back to Between for ids no release ever assigned
#[test]
fn unknown_ids_fall_back_to_between() {
    assert_eq!(BlendMode::from_id(7), BlendMode::Between);
    assert_eq!(BlendMode::from_id(i32::MIN), BlendMode::Between);
}
