use super::*;

#[test]
fn from_raw_validates_buffer_length() {
    assert!(ImageRgb8::from_raw(2, 2, vec![0u8; 12]).is_ok());
    assert!(ImageRgb8::from_raw(2, 2, vec![0u8; 11]).is_err());
}

#[test]
fn filled_sets_every_pixel() {
    let img = ImageRgb8::filled(3, 2, [10, 20, 30]).unwrap();
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(img.pixel(x, y), [10, 20, 30]);
        }
    }
}

#[test]
fn pixel_roundtrip() {
    let mut img = ImageRgb8::filled(4, 4, [0, 0, 0]).unwrap();
    img.put_pixel(2, 3, [1, 2, 3]);
    assert_eq!(img.pixel(2, 3), [1, 2, 3]);
    assert_eq!(img.pixel(3, 3), [0, 0, 0]);
}

#[test]
fn png_roundtrip_preserves_bytes() {
    let mut img = ImageRgb8::filled(5, 4, [200, 100, 50]).unwrap();
    img.put_pixel(0, 0, [1, 2, 3]);
    let png = img.encode_png().unwrap();
    let back = decode_rgb8(&png).unwrap();
    assert_eq!(back, img);
}

#[test]
fn bbox_dimensions_are_inclusive() {
    let b = BBox {
        x_min: 2,
        y_min: 3,
        x_max: 4,
        y_max: 3,
    };
    assert_eq!(b.width(), 3);
    assert_eq!(b.height(), 1);
}
