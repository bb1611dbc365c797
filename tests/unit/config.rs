use super::*;

#[test]
fn defaults_match_cli_defaults() {
    let cfg = MountainConfig::default();
    assert_eq!((cfg.width, cfg.height), (1280, 720));
    assert_eq!(cfg.step_max, 3.0);
    assert_eq!(cfg.step_change, 1.0);
    assert_eq!(cfg.layers, 1);
    assert_eq!(cfg.starting_color, "000000");
    assert_eq!(cfg.gradient_color, "FFFFFF");
    assert!(!cfg.top_to_bottom);
    assert_eq!(cfg.occlusion_offset, 25.0);
    assert_eq!(cfg.drift_span, 25.0);
    assert_eq!(cfg.stroke_width, 5.0);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = MountainConfig::from_json_str(r#"{ "width": 100, "layers": 3, "topToBottom": true }"#)
        .unwrap();
    assert_eq!(cfg.width, 100);
    assert_eq!(cfg.layers, 3);
    assert!(cfg.top_to_bottom);
    assert_eq!(cfg.height, 720);
    assert_eq!(cfg.background_axis(), GradientAxis::TopToBottom);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = MountainConfig::from_json_str(r#"{ "widht": 100 }"#).unwrap_err();
    assert!(matches!(err, MountainsError::Serde(_)));
}

#[test]
fn json_round_trip_preserves_every_field() {
    let cfg = MountainConfig {
        seed: 42,
        ending_color: "FF8000".to_owned(),
        ..MountainConfig::default()
    };
    let text = cfg.to_json_pretty().unwrap();
    assert!(text.contains("\"stepMax\""));
    assert_eq!(MountainConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn validate_rejects_unusable_values() {
    let bad = [
        MountainConfig {
            width: 0,
            ..MountainConfig::default()
        },
        MountainConfig {
            height: 0,
            ..MountainConfig::default()
        },
        MountainConfig {
            step_max: -1.0,
            ..MountainConfig::default()
        },
        MountainConfig {
            step_change: f64::NAN,
            ..MountainConfig::default()
        },
        MountainConfig {
            occlusion_offset: f64::INFINITY,
            ..MountainConfig::default()
        },
        MountainConfig {
            stroke_width: 0.0,
            ..MountainConfig::default()
        },
    ];
    for cfg in bad {
        assert!(
            matches!(cfg.validate(), Err(MountainsError::Validation(_))),
            "{cfg:?}"
        );
    }
}

#[test]
fn zero_layers_is_a_valid_background_only_run() {
    let cfg = MountainConfig {
        layers: 0,
        ..MountainConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn palette_falls_back_to_black() {
    let cfg = MountainConfig {
        starting_color: "00G000".to_owned(),
        ending_color: "FF8000".to_owned(),
        ..MountainConfig::default()
    };
    let p = cfg.palette();
    assert_eq!(p.foreground_start, Color::BLACK);
    assert_eq!(p.foreground_end, Color::rgb(255.0, 128.0, 0.0));
    assert_eq!(p.background_start, Color::WHITE);
}

#[test]
fn walk_params_follow_canvas_height() {
    let cfg = MountainConfig {
        height: 50,
        step_max: 2.0,
        step_change: 0.5,
        ..MountainConfig::default()
    };
    let p = cfg.walk_params();
    assert_eq!(p.height_max, 50.0);
    assert_eq!(p.step_max, 2.0);
    assert_eq!(p.step_change, 0.5);
}

#[test]
fn oversized_canvas_is_rejected_not_allocated() {
    let huge = MountainConfig {
        width: u32::MAX,
        height: u32::MAX,
        layers: 0,
        ..MountainConfig::default()
    };
    assert!(matches!(huge.validate(), Err(MountainsError::Validation(_))));

    let over_cap = MountainConfig {
        width: 16_384,
        height: 16_385,
        ..MountainConfig::default()
    };
    assert!(matches!(
        over_cap.validate(),
        Err(MountainsError::Validation(_))
    ));

    let at_cap = MountainConfig {
        width: 16_384,
        height: 16_384,
        ..MountainConfig::default()
    };
    at_cap.validate().unwrap();
}

#[test]
fn json_value_parsing_matches_text_parsing() {
    let value = serde_json::json!({ "height": 50, "seed": 9 });
    let from_value = MountainConfig::from_json_value(value).unwrap();
    let from_text = MountainConfig::from_json_str(r#"{ "height": 50, "seed": 9 }"#).unwrap();
    assert_eq!(from_value, from_text);
    assert_eq!(from_value.height, 50);

    let err = MountainConfig::from_json_value(serde_json::json!({ "hieght": 1 })).unwrap_err();
    assert!(matches!(err, MountainsError::Serde(_)));
}
