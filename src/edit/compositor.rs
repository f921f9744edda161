use crate::{
    edit::{
        color::{detect_grayscale, hsv_to_rgb, rgb_to_hsv, rotate_hue},
        noise::{FULL_MASK_NOISE_ID, GaussianSampler, component_noise_seed},
        params::EditParams,
        sharpen::unsharp_rgb_f32,
    },
    foundation::{
        error::{MaskfxError, MaskfxResult},
        raster::ImageRgb8,
    },
    mask::bitmap::MaskBitmap,
};

/// Gaussian sigma used by the unsharp-mask sharpen step.
const SHARPEN_SIGMA: f32 = 1.0;

/// Apply an edit parameter set to the pixels under `mask` and composite the
/// result back into `image`.
///
/// The transform chain runs in a fixed order (brightness, contrast, gamma,
/// hue, saturation, sharpen, noise, clamp, opacity blend); callers rely on
/// that exact sequence for reproducibility. Hue and saturation are silently
/// skipped on detected-grayscale sources. The output is byte-identical to
/// the input at every pixel outside the mask.
///
/// A mask whose dimensions differ from the image is resampled first; an
/// irreconcilable aspect ratio is [`MaskfxError::MaskDimensionMismatch`].
/// `gamma <= -1` is [`MaskfxError::InvalidGamma`] and nothing is written.
///
/// Noise is seeded from the full-mask sentinel identity; the component-aware
/// entry point is [`crate::apply_to_target`].
#[tracing::instrument(skip(image, mask, edits))]
pub fn apply(
    image: &ImageRgb8,
    mask: &MaskBitmap,
    edits: &EditParams,
) -> MaskfxResult<ImageRgb8> {
    apply_seeded(image, mask, edits, FULL_MASK_NOISE_ID)
}

/// Compositor core with an explicit noise identity (the component id, or the
/// full-mask sentinel).
pub(crate) fn apply_seeded(
    image: &ImageRgb8,
    mask: &MaskBitmap,
    edits: &EditParams,
    noise_id: u32,
) -> MaskfxResult<ImageRgb8> {
    if let Some(g) = edits.gamma {
        // Guard before any pixel work: a non-positive exponent base is an
        // error, not a clamp.
        if g <= -1.0 {
            return Err(MaskfxError::InvalidGamma(g));
        }
    }

    let mask = mask.resize_to(image.width(), image.height())?;

    // The output starts as a byte copy of the input and only in-mask pixels
    // are ever written below, which enforces the outside-mask invariant
    // exactly (no floating-point drift outside the region).
    let mut out = image.clone();
    let Some(bbox) = mask.bbox() else {
        // All-zero mask: a valid no-op pass.
        return Ok(out);
    };
    if edits.is_identity() {
        return Ok(out);
    }

    let grayscale = detect_grayscale(image);
    let opacity = edits.opacity.unwrap_or(1.0).clamp(0.0, 1.0);

    // Work in normalized f32 over the bbox subregion only.
    let bw = bbox.width() as usize;
    let bh = bbox.height() as usize;
    let mut region = vec![0f32; bw * bh * 3];
    for ry in 0..bh {
        for rx in 0..bw {
            let px = image.pixel(bbox.x_min + rx as u32, bbox.y_min + ry as u32);
            let o = (ry * bw + rx) * 3;
            for c in 0..3 {
                region[o + c] = f32::from(px[c]) / 255.0;
            }
        }
    }
    let inside = |rx: usize, ry: usize| {
        mask.is_inside(bbox.x_min + rx as u32, bbox.y_min + ry as u32)
    };

    // Brightness, contrast, gamma: straight per-channel math, clamped after
    // each step so gamma's exponent base stays in [0, 1].
    if edits.brightness.is_some() || edits.contrast.is_some() || edits.gamma.is_some() {
        for ry in 0..bh {
            for rx in 0..bw {
                if !inside(rx, ry) {
                    continue;
                }
                let o = (ry * bw + rx) * 3;
                for v in &mut region[o..o + 3] {
                    if let Some(b) = edits.brightness {
                        *v = (*v + b).clamp(0.0, 1.0);
                    }
                    if let Some(c) = edits.contrast {
                        *v = ((*v - 0.5) * (1.0 + c) + 0.5).clamp(0.0, 1.0);
                    }
                    if let Some(g) = edits.gamma {
                        *v = v.powf(1.0 / (1.0 + g)).clamp(0.0, 1.0);
                    }
                }
            }
        }
    }

    // Hue rotation and saturation share one HSV round trip. Both are silent
    // no-ops on grayscale sources.
    if !grayscale && (edits.hue.is_some() || edits.saturation.is_some()) {
        for ry in 0..bh {
            for rx in 0..bw {
                if !inside(rx, ry) {
                    continue;
                }
                let o = (ry * bw + rx) * 3;
                let mut hsv = rgb_to_hsv([region[o], region[o + 1], region[o + 2]]);
                if let Some(h) = edits.hue {
                    hsv[0] = rotate_hue(hsv[0], h);
                }
                if let Some(s) = edits.saturation {
                    hsv[1] = (hsv[1] * (1.0 + s)).clamp(0.0, 1.0);
                }
                let rgb = hsv_to_rgb(hsv);
                region[o..o + 3].copy_from_slice(&rgb);
            }
        }
    }

    // Unsharp-mask sharpen over the bbox plane; only in-mask pixels take the
    // sharpened values.
    if let Some(amount) = edits.sharpen
        && amount > 0.0
    {
        let sharpened = unsharp_rgb_f32(&region, bw as u32, bh as u32, amount, SHARPEN_SIGMA);
        for ry in 0..bh {
            for rx in 0..bw {
                if !inside(rx, ry) {
                    continue;
                }
                let o = (ry * bw + rx) * 3;
                region[o..o + 3].copy_from_slice(&sharpened[o..o + 3]);
            }
        }
    }

    // Additive Gaussian noise, seeded from the component identity so repeat
    // runs are bit-identical. Samples are drawn per masked pixel in scan
    // order, three channels each.
    if let Some(std) = edits.noise
        && std > 0.0
    {
        let seed = component_noise_seed(mask.area(), noise_id);
        let mut sampler = GaussianSampler::new(seed);
        for ry in 0..bh {
            for rx in 0..bw {
                if !inside(rx, ry) {
                    continue;
                }
                let o = (ry * bw + rx) * 3;
                for v in &mut region[o..o + 3] {
                    *v = (*v + sampler.sample(std)).clamp(0.0, 1.0);
                }
            }
        }
    }

    // Final clamp, opacity blend against the original untransformed pixels,
    // and write-back of in-mask pixels only.
    for ry in 0..bh {
        for rx in 0..bw {
            if !inside(rx, ry) {
                continue;
            }
            let x = bbox.x_min + rx as u32;
            let y = bbox.y_min + ry as u32;
            let orig = image.pixel(x, y);
            let o = (ry * bw + rx) * 3;
            let mut px = [0u8; 3];
            for c in 0..3 {
                let transformed = region[o + c].clamp(0.0, 1.0);
                let original = f32::from(orig[c]) / 255.0;
                let blended = opacity * transformed + (1.0 - opacity) * original;
                px[c] = (blended * 255.0).round().clamp(0.0, 255.0) as u8;
            }
            out.put_pixel(x, y, px);
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/compositor.rs"]
mod tests;
