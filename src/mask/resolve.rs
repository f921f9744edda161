use crate::{
    foundation::{
        error::{MaskfxError, MaskfxResult},
        raster::BBox,
    },
    mask::{
        bitmap::MaskBitmap,
        component::{Component, ComponentId},
    },
};

/// A mask reconciled to the target image, with its bounding box.
///
/// The bbox lets downstream passes restrict work to the occupied region; it
/// is `None` for an all-zero mask (a valid no-op region).
#[derive(Clone, Debug)]
pub struct ResolvedMask {
    /// The region bitmap, sized to the target image.
    pub mask: MaskBitmap,
    /// Inclusive bounding box of the inside pixels.
    pub bbox: Option<BBox>,
}

/// Resolve an edit target to a concrete mask over a `width` x `height` image.
///
/// Policy:
///
/// - empty component list: the full-image mask, whatever the target — the
///   deliberate "no components saved ⇒ operate over the whole image"
///   fallback;
/// - non-empty list + known id: that component's stored mask, resized to the
///   image if needed;
/// - non-empty list + unknown id: [`MaskfxError::UnknownComponent`], never a
///   silent fallback;
/// - non-empty list + no target: ambiguous, rejected as a validation error.
pub fn resolve(
    components: &[Component],
    target: Option<ComponentId>,
    width: u32,
    height: u32,
) -> MaskfxResult<ResolvedMask> {
    if components.is_empty() {
        let mask = MaskBitmap::full(width, height);
        let bbox = mask.bbox();
        return Ok(ResolvedMask { mask, bbox });
    }

    let id = target.ok_or_else(|| {
        MaskfxError::validation("a component target is required when components exist")
    })?;
    let component = components
        .iter()
        .find(|c| c.id == id)
        .ok_or(MaskfxError::UnknownComponent(id.0))?;

    let mask = component.mask.resize_to(width, height)?;
    let bbox = mask.bbox();
    Ok(ResolvedMask { mask, bbox })
}

#[cfg(test)]
#[path = "../../tests/unit/mask/resolve.rs"]
mod tests;
