use sierpinski_core::{FractalConfig, FractalError, FractalKind};

#[test]
fn partial_json_fills_defaults() {
    let config = FractalConfig::from_json(r#"{"pixels": 500}"#).unwrap();
    assert_eq!(config.pixels, 500);
    assert_eq!(config.iterations, 5);
    assert!(config.parallel);
}

#[test]
fn empty_object_is_the_default_config() {
    let config = FractalConfig::from_json("{}").unwrap();
    assert_eq!(config, FractalConfig::default());
}

#[test]
fn full_json_is_read_verbatim() {
    let config =
        FractalConfig::from_json(r#"{"pixels": 27, "iterations": 3, "parallel": false}"#).unwrap();
    assert_eq!(config, FractalConfig::new(27, 3).with_parallel(false));
}

#[test]
fn out_of_range_iterations_in_json_is_invalid_argument() {
    let err = FractalConfig::from_json(r#"{"iterations": 256}"#).unwrap_err();
    match err {
        FractalError::InvalidArgument { name, .. } => assert_eq!(name, "iterations"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = FractalConfig::from_json(r#"{"pixels": "wide"}"#).unwrap_err();
    assert!(matches!(err, FractalError::Config(_)));
}

#[test]
fn config_serializes_all_fields() {
    let json = serde_json::to_value(FractalConfig::new(9, 2)).unwrap();
    assert_eq!(json["pixels"], 9);
    assert_eq!(json["iterations"], 2);
    assert_eq!(json["parallel"], true);
}

#[test]
fn every_kind_round_trips_through_its_id() {
    for kind in FractalKind::ALL {
        assert_eq!(FractalKind::from_id(kind.id()), Some(kind));
    }
}
