use super::*;

use crate::{foundation::error::MaskfxError, mask::bitmap::MaskBitmap};

fn checker(width: u32, height: u32) -> ImageRgb8 {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = if (x + y) % 2 == 0 { 40 } else { 200 };
            data.extend_from_slice(&[v, v / 2, 255 - v]);
        }
    }
    ImageRgb8::from_raw(width, height, data).unwrap()
}

fn components(width: u32, height: u32) -> Vec<Component> {
    let mask = MaskBitmap::from_fn(width, height, |x, _| x < width / 2);
    vec![Component::from_mask(ComponentId(1), mask, 0.9, None)]
}

#[test]
fn no_components_edits_the_whole_image() {
    let img = checker(12, 12);
    let edits = EditParams {
        brightness: Some(0.2),
        ..EditParams::default()
    };
    let out = apply_to_target(&img, &[], None, &edits).unwrap();
    assert_ne!(out.pixel(0, 0), img.pixel(0, 0));
    assert_ne!(out.pixel(11, 11), img.pixel(11, 11));
}

#[test]
fn component_target_edits_only_its_region() {
    let img = checker(12, 12);
    let comps = components(12, 12);
    let edits = EditParams {
        brightness: Some(0.3),
        ..EditParams::default()
    };
    let out = apply_to_target(&img, &comps, Some(ComponentId(1)), &edits).unwrap();
    for y in 0..12 {
        for x in 6..12 {
            assert_eq!(out.pixel(x, y), img.pixel(x, y), "pixel ({x}, {y})");
        }
    }
    assert_ne!(out.pixel(0, 0), img.pixel(0, 0));
}

#[test]
fn unknown_target_propagates_from_the_resolver() {
    let img = checker(8, 8);
    let comps = components(8, 8);
    let err = apply_to_target(&img, &comps, Some(ComponentId(5)), &EditParams::default())
        .unwrap_err();
    assert!(matches!(err, MaskfxError::UnknownComponent(5)));
}

#[test]
fn missing_target_with_components_is_rejected() {
    let img = checker(8, 8);
    let comps = components(8, 8);
    assert!(apply_to_target(&img, &comps, None, &EditParams::default()).is_err());
}

#[test]
fn noisy_edits_are_reproducible_end_to_end() {
    let img = checker(16, 16);
    let comps = components(16, 16);
    let edits = EditParams {
        noise: Some(0.15),
        sharpen: Some(0.5),
        ..EditParams::default()
    };
    let a = apply_to_target(&img, &comps, Some(ComponentId(1)), &edits).unwrap();
    let b = apply_to_target(&img, &comps, Some(ComponentId(1)), &edits).unwrap();
    assert_eq!(a, b);
}
