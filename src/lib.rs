//! Maskfx is a mask-guided photometric compositing engine.
//!
//! Given a binary object mask (produced externally by a promptable
//! segmentation model) and a set of qualitative edit parameters, maskfx
//! deterministically transforms only the masked region of an image and
//! composites it back into the original.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `&[Component] + target -> ResolvedMask` (which pixels are
//!    inside the edit region, and their bounding box)
//! 2. **Composite**: `ImageRgb8 + ResolvedMask + EditParams -> ImageRgb8`
//!    (the ordered photometric transform chain, blended by opacity)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a call with identical inputs produces
//!   bit-identical output, including the seeded noise channel.
//! - **Outside-mask pixels are never modified**: output is byte-identical to
//!   the input everywhere the mask is false, for every edit combination.
//! - **No IO in the engine**: segmentation is a capability trait
//!   ([`Segmenter`]) implemented by external adapters; decode helpers are
//!   front-loaded in [`decode_rgb8`] / [`decode_mask_png`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod edit;
mod engine;
mod foundation;
mod mask;
mod segment;

pub use batch::job::{BatchItem, BatchOutcome, BatchThreading, EditTemplate, apply_batch};
pub use edit::compositor::apply;
pub use edit::params::EditParams;
pub use engine::apply_to_target;
pub use foundation::error::{MaskfxError, MaskfxResult};
pub use foundation::raster::{BBox, ImageRgb8, decode_rgb8};
pub use mask::bitmap::{MaskBitmap, decode_mask_png, encode_mask_png};
pub use mask::component::{Component, ComponentId, ComponentStore};
pub use mask::resolve::{ResolvedMask, resolve};
pub use segment::capability::{
    CachingSegmenter, PointPrompt, PointSummary, Segmentation, Segmenter, denormalize_points,
    summarize_points,
};
