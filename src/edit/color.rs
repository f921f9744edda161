use crate::foundation::raster::ImageRgb8;

/// Maximum per-pixel channel spread (8-bit steps) still considered
/// grayscale. One step absorbs rounding introduced by decode paths.
const GRAYSCALE_MAX_SPREAD: u8 = 1;

/// Whether the image is effectively grayscale: every pixel's channel spread
/// is at or below a one-step threshold.
///
/// Computed once per compositing call and threaded through explicitly so the
/// hue and saturation steps make one consistent decision.
pub(crate) fn detect_grayscale(image: &ImageRgb8) -> bool {
    image.as_raw().chunks_exact(3).all(|px| {
        let max = px[0].max(px[1]).max(px[2]);
        let min = px[0].min(px[1]).min(px[2]);
        max - min <= GRAYSCALE_MAX_SPREAD
    })
}

/// RGB -> HSV, all channels normalized to `[0, 1]` (hue as a fraction of a
/// full turn).
pub(crate) fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        (((g - b) / delta).rem_euclid(6.0)) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };
    let s = if max <= 0.0 { 0.0 } else { delta / max };
    [h, s, max]
}

/// HSV -> RGB, inverse of [`rgb_to_hsv`].
pub(crate) fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let h = h.rem_euclid(1.0) * 6.0;
    let i = (h.floor() as i32).clamp(0, 5);
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match i {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Rotate a normalized hue by `degrees`, wrapping modulo a full turn.
pub(crate) fn rotate_hue(h: f32, degrees: f32) -> f32 {
    (h + degrees / 360.0).rem_euclid(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/color.rs"]
mod tests;
