use super::*;

#[test]
fn default_is_identity() {
    assert!(EditParams::default().is_identity());
    let set = EditParams {
        brightness: Some(0.0),
        ..EditParams::default()
    };
    assert!(!set.is_identity());
}

#[test]
fn from_params_reads_recognized_channels() {
    let v = serde_json::json!({
        "brightness": 0.5,
        "contrast": -0.2,
        "gamma": 0.1,
        "hue": 90,
        "saturation": 1.5,
        "sharpen": 0.8,
        "noise": 0.05,
        "opacity": 0.75
    });
    let p = EditParams::from_params(&v).unwrap();
    assert_eq!(p.brightness, Some(0.5));
    assert_eq!(p.contrast, Some(-0.2));
    assert_eq!(p.gamma, Some(0.1));
    assert_eq!(p.hue, Some(90.0));
    assert_eq!(p.saturation, Some(1.5));
    assert_eq!(p.sharpen, Some(0.8));
    assert_eq!(p.noise, Some(0.05));
    assert_eq!(p.opacity, Some(0.75));
}

#[test]
fn from_params_empty_object_is_identity() {
    let p = EditParams::from_params(&serde_json::json!({})).unwrap();
    assert!(p.is_identity());
}

#[test]
fn from_params_rejects_unknown_channel() {
    let err = EditParams::from_params(&serde_json::json!({"blur": 1.0})).unwrap_err();
    assert!(err.to_string().contains("unknown edit channel 'blur'"));
}

#[test]
fn from_params_rejects_non_numbers_and_non_objects() {
    assert!(EditParams::from_params(&serde_json::json!({"hue": "red"})).is_err());
    assert!(EditParams::from_params(&serde_json::json!([1, 2])).is_err());
}

#[test]
fn serde_roundtrip_keeps_absent_channels_absent() {
    let p = EditParams {
        contrast: Some(0.3),
        ..EditParams::default()
    };
    let json = serde_json::to_string(&p).unwrap();
    let back: EditParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
    assert_eq!(back.hue, None);
}
