use super::*;

#[test]
fn from_raw_validates_buffer_length() {
    assert!(MaskBitmap::from_raw(3, 3, vec![0u8; 9]).is_ok());
    assert!(MaskBitmap::from_raw(3, 3, vec![0u8; 8]).is_err());
}

#[test]
fn full_mask_covers_everything() {
    let m = MaskBitmap::full(4, 3);
    assert_eq!(m.area(), 12);
    assert!(!m.is_empty());
    let b = m.bbox().unwrap();
    assert_eq!((b.x_min, b.y_min, b.x_max, b.y_max), (0, 0, 3, 2));
}

#[test]
fn bbox_of_scattered_pixels() {
    let m = MaskBitmap::from_fn(10, 10, |x, y| (x, y) == (2, 3) || (x, y) == (7, 5));
    let b = m.bbox().unwrap();
    assert_eq!((b.x_min, b.y_min, b.x_max, b.y_max), (2, 3, 7, 5));
    assert_eq!(m.area(), 2);
}

#[test]
fn all_zero_mask_is_empty_with_no_bbox() {
    let m = MaskBitmap::from_fn(5, 5, |_, _| false);
    assert!(m.is_empty());
    assert_eq!(m.bbox(), None);
    assert_eq!(m.area(), 0);
}

#[test]
fn resize_same_dims_is_copy() {
    let m = MaskBitmap::from_fn(6, 6, |x, _| x < 3);
    assert_eq!(m.resize_to(6, 6).unwrap(), m);
}

#[test]
fn resize_doubles_with_nearest_neighbor() {
    // Left half inside, right half outside; doubling keeps the split exact.
    let m = MaskBitmap::from_fn(4, 4, |x, _| x < 2);
    let r = m.resize_to(8, 8).unwrap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(r.is_inside(x, y), x < 4, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn resize_rejects_different_aspect_ratio() {
    let m = MaskBitmap::full(50, 25);
    let err = m.resize_to(100, 100).unwrap_err();
    assert!(matches!(err, MaskfxError::MaskDimensionMismatch(_)));
}

#[test]
fn resize_rejects_zero_dimensions() {
    let m = MaskBitmap::full(4, 4);
    assert!(m.resize_to(0, 4).is_err());
}

#[test]
fn png_roundtrip_preserves_region() {
    let m = MaskBitmap::from_fn(9, 7, |x, y| (x + y) % 3 == 0);
    let png = encode_mask_png(&m).unwrap();
    let back = decode_mask_png(&png).unwrap();
    assert_eq!(back, m);
}
