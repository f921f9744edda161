use rand::{Rng, SeedableRng, rngs::StdRng};

/// Sentinel component id used to seed noise for the full-mask fallback.
pub(crate) const FULL_MASK_NOISE_ID: u32 = 0;

/// Stable noise seed derived from the component's identity:
/// `(area * (id + 13)) mod (2^32 - 1)`.
///
/// Re-running with the same component, area and noise parameter must produce
/// a bit-identical noise pattern, so the seed depends on nothing else.
pub(crate) fn component_noise_seed(area: u64, component_id: u32) -> u64 {
    (area.wrapping_mul(u64::from(component_id) + 13)) % (u32::MAX as u64)
}

/// Deterministic Gaussian sampler (Box-Muller over a seeded `StdRng`).
pub(crate) struct GaussianSampler {
    rng: StdRng,
    spare: Option<f32>,
}

impl GaussianSampler {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            spare: None,
        }
    }

    /// Next sample from N(0, std^2).
    pub(crate) fn sample(&mut self, std: f32) -> f32 {
        if let Some(z) = self.spare.take() {
            return z * std;
        }
        // Box-Muller; u1 in (0, 1] keeps the log finite.
        let u1: f32 = 1.0 - self.rng.random::<f32>();
        let u2: f32 = self.rng.random::<f32>();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f32::consts::PI * u2;
        self.spare = Some(r * theta.sin());
        r * theta.cos() * std
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/noise.rs"]
mod tests;
