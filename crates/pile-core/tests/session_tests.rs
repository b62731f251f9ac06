// Integration tests for session state, parameters and config snapshots.

use pile_core::*;

#[test]
fn reshuffle_advances_seed_by_photo_count() {
    let mut session = PileSession::new(Theme::Light, 5);
    assert_eq!(session.seed(), 0);
    let before = session.layout();

    assert_eq!(session.reshuffle(), 5);
    assert_eq!(session.seed(), 5);
    let after = session.layout();
    assert_ne!(before[0], after[0]);
    assert_eq!(after[0], compute_slot(0, 0, 5, &PileParams::default()));

    session.reshuffle();
    assert_eq!(session.seed(), 10);
}

#[test]
fn reshuffle_with_no_photos_keeps_seed() {
    let mut session = PileSession::new(Theme::Dark, 0);
    assert_eq!(session.reshuffle(), 0);
    assert!(session.layout().is_empty());
    assert_eq!(session.pile_height_vh(), 0.0);
}

#[test]
fn drag_counter_is_monotonic_and_survives_reshuffle() {
    let mut session = PileSession::new(Theme::Light, 4);
    let slots = session.layout();

    assert_eq!(session.bring_to_front(2), 101);
    assert_eq!(session.bring_to_front(0), 102);
    assert_eq!(session.bring_to_front(2), 103);
    assert_eq!(session.stack_index(2, &slots[2]), 103);
    assert_eq!(session.stack_index(1, &slots[1]), slots[1].stack_index);

    session.reshuffle();
    let slots = session.layout();
    assert_eq!(session.drag_override(2), None);
    assert_eq!(session.stack_index(2, &slots[2]), slots[2].stack_index);

    // a fresh drag still lands above everything handed out before
    assert_eq!(session.bring_to_front(1), 104);

    let mut fresh = PileSession::new(Theme::Light, 4);
    assert_eq!(fresh.bring_to_front(0), 101);
}

#[test]
fn changing_photo_count_drops_drag_overrides() {
    let mut session = PileSession::new(Theme::Light, 3);
    session.bring_to_front(1);
    session.set_photo_count(3);
    assert_eq!(session.drag_override(1), Some(101));
    session.set_photo_count(6);
    assert_eq!(session.drag_override(1), None);
    assert_eq!(session.layout().len(), 6);
}

#[test]
fn theme_selects_a_different_layout() {
    let light = PileSession::new(Theme::Light, 6).layout();
    let dark = PileSession::new(Theme::Dark, 6).layout();
    assert_ne!(light, dark);
    assert_eq!(Theme::Dark.offset(), 97);
    assert_eq!(Theme::Dark.subtitle(), "Dark table");
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!("Dark".parse::<Theme>().ok(), Some(Theme::Dark));
    assert!("sepia".parse::<Theme>().is_err());
}

#[test]
fn slider_values_round_to_one_decimal() {
    let mut params = PileParams::default();
    params.apply_slider(ParamKey::Scatter, 12.345);
    assert_eq!(params.scatter, 12.3);
    params.apply_slider(ParamKey::Rotation, 7.25);
    assert_eq!(params.rotation, 7.3);
    params.apply_slider(ParamKey::OffsetX, -2.25);
    assert_eq!(params.offset_x, -2.2);
    // out-of-range values are stored, not clamped
    params.apply_slider(ParamKey::CanvasWidth, 140.0);
    assert_eq!(params.canvas_width, 140.0);
}

#[test]
fn param_keys_round_trip_through_wire_names() {
    for key in ParamKey::ALL {
        assert_eq!(key.wire_name().parse::<ParamKey>().ok(), Some(key));
        assert_eq!(key.slider().key, key);
    }
    assert!(matches!(
        "zoom".parse::<ParamKey>(),
        Err(ConfigError::UnknownParam(name)) if name == "zoom"
    ));
}

#[test]
fn slider_table_matches_documented_ranges() {
    let spec = ParamKey::OffsetY.slider();
    assert_eq!((spec.min, spec.max, spec.step), (-20.0, 20.0, 1.0));
    assert_eq!(spec.label(), "Offset Y");
    assert_eq!(ParamKey::Stagger.slider().step, 5.0);
    assert_eq!(ParamKey::Scatter.slider().fill_percent(25.0), 50.0);

    let defaults = PileParams::default();
    for spec in &SLIDERS {
        let v = defaults.get(spec.key);
        assert!(v >= spec.min && v <= spec.max, "{} default out of range", spec.key);
    }
}

#[test]
fn assignments_parse_key_and_value() {
    let mut params = PileParams::default();
    assert_eq!(params.apply_assignment("tightness=40").ok(), Some(ParamKey::Tightness));
    assert_eq!(params.tightness, 40.0);
    assert!(params.apply_assignment(" offsetX = -12.5 ").is_ok());
    assert_eq!(params.offset_x, -12.5);

    assert!(matches!(
        params.apply_assignment("scatter"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        params.apply_assignment("scatter=lots"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        params.apply_assignment("scatter=NaN"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        params.apply_assignment("blur=3"),
        Err(ConfigError::UnknownParam(_))
    ));
}

#[test]
fn reset_restores_defaults() {
    let mut session = PileSession::new(Theme::Light, 2);
    session.set_param(ParamKey::Rotation, 5.0);
    session.apply_slider(ParamKey::PhotoSize, 20.04);
    assert_eq!(session.params.photo_size, 20.0);
    session.reset_params();
    assert_eq!(session.params, PileParams::default());
}

#[test]
fn snapshot_json_is_flat_with_integer_values() {
    let session = PileSession::new(Theme::Light, 5);
    let json = session.snapshot().to_json().expect("serialize");
    let expected = "{\n  \"canvasWidth\": 80,\n  \"tightness\": 0,\n  \"scatter\": 15,\n  \"rotation\": 35,\n  \"photoSize\": 15,\n  \"canvasHeight\": 8,\n  \"offsetX\": 0,\n  \"offsetY\": 0,\n  \"stagger\": 30,\n  \"seed\": 0\n}";
    assert_eq!(json, expected);
}

#[test]
fn snapshot_keeps_fractional_values() {
    let mut session = PileSession::new(Theme::Light, 5);
    session.apply_slider(ParamKey::Scatter, 12.5);
    session.reshuffle();
    let json = session.snapshot().to_json().expect("serialize");
    assert!(json.contains("\"scatter\": 12.5"), "{json}");
    assert!(json.contains("\"seed\": 5"), "{json}");
}

#[test]
fn restoring_a_snapshot_reproduces_the_layout() {
    let mut original = PileSession::new(Theme::Dark, 9);
    original.set_param(ParamKey::Tightness, 30.0);
    original.apply_slider(ParamKey::OffsetY, -4.5);
    original.reshuffle();
    original.reshuffle();
    let json = original.snapshot().to_json().expect("serialize");

    let snapshot = ConfigSnapshot::from_json(&json).expect("parse");
    let mut other = PileSession::new(Theme::Dark, 9);
    other.bring_to_front(3);
    other.restore(&snapshot);

    assert_eq!(other.seed(), 18);
    assert_eq!(other.params, original.params);
    assert_eq!(other.layout(), original.layout());
    assert_eq!(other.drag_override(3), None);
}

#[test]
fn partial_snapshot_fills_in_defaults() {
    let snapshot = ConfigSnapshot::from_json(r#"{ "scatter": 3, "rotation": 12.5 }"#)
        .expect("parse");
    assert_eq!(snapshot.seed, 0);
    assert_eq!(snapshot.params.scatter, 3.0);
    assert_eq!(snapshot.params.rotation, 12.5);
    assert_eq!(snapshot.params.canvas_width, 80.0);
}

#[test]
fn malformed_snapshot_is_a_json_error() {
    assert!(matches!(
        ConfigSnapshot::from_json("{ scatter: }"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        ConfigSnapshot::from_json(r#"{ "scatter": "wide" }"#),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn snapshot_files_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pile.json");
    let snapshot = ConfigSnapshot::new(
        PileParams {
            scatter: 40.0,
            ..PileParams::default()
        },
        25,
    );
    snapshot.save(&path).expect("save");
    assert_eq!(ConfigSnapshot::load(&path).expect("load"), snapshot);
    assert!(matches!(
        ConfigSnapshot::load(&dir.path().join("missing.json")),
        Err(ConfigError::Io(_))
    ));
}
