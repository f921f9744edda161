/// Separable Gaussian blur over an interleaved RGB f32 plane.
///
/// Two passes (horizontal then vertical) with edge clamping. The kernel is
/// built for `radius = ceil(3 * sigma)` and normalized to sum 1.
pub(crate) fn gaussian_blur_rgb_f32(src: &[f32], width: u32, height: u32, sigma: f32) -> Vec<f32> {
    debug_assert_eq!(src.len(), (width as usize) * (height as usize) * 3);
    if sigma <= 0.0 || src.is_empty() {
        return src.to_vec();
    }

    let kernel = gaussian_kernel(sigma);
    let mut tmp = vec![0f32; src.len()];
    let mut out = vec![0f32; src.len()];
    horizontal_pass(src, &mut tmp, width, height, &kernel);
    vertical_pass(&tmp, &mut out, width, height, &kernel);
    out
}

/// Unsharp mask: `out = in + amount * (in - blurred)`, clamped to `[0, 1]`.
///
/// Amount 0 is a no-op; amounts above 1 amplify edges strongly and may clip.
pub(crate) fn unsharp_rgb_f32(
    region: &[f32],
    width: u32,
    height: u32,
    amount: f32,
    sigma: f32,
) -> Vec<f32> {
    if amount <= 0.0 {
        return region.to_vec();
    }
    let blurred = gaussian_blur_rgb_f32(region, width, height, sigma);
    region
        .iter()
        .zip(&blurred)
        .map(|(&v, &b)| (v + amount * (v - b)).clamp(0.0, 1.0))
        .collect()
}

fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil() as i32;
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f32> = (-radius..=radius)
        .map(|i| {
            let x = i as f32;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

fn horizontal_pass(src: &[f32], dst: &mut [f32], width: u32, height: u32, k: &[f32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0f32; 3];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let o = ((y * w + sx) * 3) as usize;
                acc[0] += src[o] * kw;
                acc[1] += src[o + 1] * kw;
                acc[2] += src[o + 2] * kw;
            }
            let o = ((y * w + x) * 3) as usize;
            dst[o..o + 3].copy_from_slice(&acc);
        }
    }
}

fn vertical_pass(src: &[f32], dst: &mut [f32], width: u32, height: u32, k: &[f32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0f32; 3];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let o = ((sy * w + x) * 3) as usize;
                acc[0] += src[o] * kw;
                acc[1] += src[o + 1] * kw;
                acc[2] += src[o + 2] * kw;
            }
            let o = ((y * w + x) * 3) as usize;
            dst[o..o + 3].copy_from_slice(&acc);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/sharpen.rs"]
mod tests;
