use crate::{
    edit::{compositor::apply_seeded, noise::FULL_MASK_NOISE_ID, params::EditParams},
    foundation::{error::MaskfxResult, raster::ImageRgb8},
    mask::{
        component::{Component, ComponentId},
        resolve::resolve,
    },
};

/// Resolve an edit target and composite the edits in one call.
///
/// This is the primary "one-shot" API for editing a component region.
///
/// Pipeline:
/// 1. [`resolve`] — target to concrete mask + bbox (full-image fallback when
///    no components were ever saved)
/// 2. [`apply`](crate::apply) — the ordered photometric transform chain
///
/// Noise seeding uses the resolved component's id, or the full-mask sentinel
/// when the empty-component fallback fires, so identical inputs produce
/// bit-identical output.
#[tracing::instrument(skip(image, components, edits))]
pub fn apply_to_target(
    image: &ImageRgb8,
    components: &[Component],
    target: Option<ComponentId>,
    edits: &EditParams,
) -> MaskfxResult<ImageRgb8> {
    let resolved = resolve(components, target, image.width(), image.height())?;
    let noise_id = if components.is_empty() {
        FULL_MASK_NOISE_ID
    } else {
        // resolve() already rejected a missing target on a non-empty list.
        target.map(|id| id.0).unwrap_or(FULL_MASK_NOISE_ID)
    };
    apply_seeded(image, &resolved.mask, edits, noise_id)
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
