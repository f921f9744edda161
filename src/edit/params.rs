use crate::foundation::error::{MaskfxError, MaskfxResult};

/// Qualitative edit parameters for one compositing pass.
///
/// Every channel is optional; an absent channel is a no-op. The compositor
/// applies present channels in a fixed order (brightness, contrast, gamma,
/// hue, saturation, sharpen, noise, then the opacity blend) — callers rely
/// on that exact sequence for reproducibility.
///
/// The engine does not range-check values (that is a caller concern) apart
/// from the gamma guard, but the expected ranges are:
///
/// | channel      | range        | semantics                                |
/// |--------------|--------------|------------------------------------------|
/// | `brightness` | `[-1, 1]`    | additive in normalized `[0, 1]` space    |
/// | `contrast`   | `[-1, 1]`    | scale around the 0.5 midpoint            |
/// | `gamma`      | `(-1, 2]`    | delta exponent, `in^(1 / (1 + gamma))`   |
/// | `hue`        | `[-180, 180]`| rotation in degrees, wraps mod 360       |
/// | `saturation` | `[-1, 3]`    | multiplicative, `s * (1 + saturation)`   |
/// | `sharpen`    | `[0, 2]`     | unsharp-mask amount                      |
/// | `noise`      | `[0, 0.2]`   | additive Gaussian std, seeded            |
/// | `opacity`    | `[0, 1]`     | blend weight of the transformed region   |
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EditParams {
    /// Additive brightness in normalized space.
    pub brightness: Option<f32>,
    /// Contrast scale around the midpoint.
    pub contrast: Option<f32>,
    /// Gamma delta exponent; must stay above -1.
    pub gamma: Option<f32>,
    /// Hue rotation in degrees. Silently skipped on grayscale sources.
    pub hue: Option<f32>,
    /// Saturation scale. Silently skipped on grayscale sources.
    pub saturation: Option<f32>,
    /// Unsharp-mask amount.
    pub sharpen: Option<f32>,
    /// Additive Gaussian noise standard deviation.
    pub noise: Option<f32>,
    /// Blend weight of the transformed region against the original.
    pub opacity: Option<f32>,
}

impl EditParams {
    /// Whether every channel is absent — a fully empty edit set is a no-op.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a JSON object of recognized edit channels.
    ///
    /// Strict: unknown keys and non-finite numbers are validation errors.
    pub fn from_params(params: &serde_json::Value) -> MaskfxResult<Self> {
        let obj = params
            .as_object()
            .ok_or_else(|| MaskfxError::validation("edit params must be an object"))?;

        let mut out = Self::default();
        for (key, value) in obj {
            let slot = match key.as_str() {
                "brightness" => &mut out.brightness,
                "contrast" => &mut out.contrast,
                "gamma" => &mut out.gamma,
                "hue" => &mut out.hue,
                "saturation" => &mut out.saturation,
                "sharpen" => &mut out.sharpen,
                "noise" => &mut out.noise,
                "opacity" => &mut out.opacity,
                other => {
                    return Err(MaskfxError::validation(format!(
                        "unknown edit channel '{other}'"
                    )));
                }
            };
            let v = value
                .as_f64()
                .ok_or_else(|| MaskfxError::validation(format!("{key} must be a number")))?
                as f32;
            if !v.is_finite() {
                return Err(MaskfxError::validation(format!("{key} must be finite")));
            }
            *slot = Some(v);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/params.rs"]
mod tests;
