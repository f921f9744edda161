use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Mutex,
};

use crate::{
    foundation::{
        error::{MaskfxError, MaskfxResult},
        raster::ImageRgb8,
    },
    mask::bitmap::MaskBitmap,
};

/// A point prompt in resolution-independent coordinates.
///
/// Coordinates are normalized to `[0, 1]` of image width/height so templates
/// transfer across images of different sizes; the segmenter adapter
/// denormalizes before inference.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointPrompt {
    /// Horizontal position as a fraction of image width.
    pub x_norm: f32,
    /// Vertical position as a fraction of image height.
    pub y_norm: f32,
    /// Whether the point marks the object (true) or background (false).
    pub positive: bool,
}

/// Result of one segmentation call.
#[derive(Clone, Debug)]
pub struct Segmentation {
    /// Predicted object mask.
    pub mask: MaskBitmap,
    /// Model confidence score.
    pub score: f32,
}

/// The single capability the engine consumes from its segmentation
/// collaborator.
///
/// Implementations are external adapters (a model server, a local network,
/// a test fake). Embedding caching, when wanted, lives entirely inside an
/// adapter such as [`CachingSegmenter`] — never inside the compositor.
pub trait Segmenter {
    /// Segment the object indicated by `points` on `image`.
    fn segment(&self, image: &ImageRgb8, points: &[PointPrompt]) -> MaskfxResult<Segmentation>;
}

/// Counts of positive/negative prompts, reported alongside candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PointSummary {
    /// All prompts.
    pub total: usize,
    /// Object (positive) prompts.
    pub positive: usize,
    /// Background (negative) prompts.
    pub negative: usize,
}

/// Summarize a prompt list into positive/negative counts.
pub fn summarize_points(points: &[PointPrompt]) -> PointSummary {
    let positive = points.iter().filter(|p| p.positive).count();
    PointSummary {
        total: points.len(),
        positive,
        negative: points.len() - positive,
    }
}

/// Map normalized prompts to pixel coordinates on a `width` x `height`
/// image. Out-of-range normalized coordinates are validation errors.
pub fn denormalize_points(
    points: &[PointPrompt],
    width: u32,
    height: u32,
) -> MaskfxResult<Vec<(u32, u32, bool)>> {
    if width == 0 || height == 0 {
        return Err(MaskfxError::validation("image dimensions must be nonzero"));
    }
    points
        .iter()
        .map(|p| {
            if !(0.0..=1.0).contains(&p.x_norm) || !(0.0..=1.0).contains(&p.y_norm) {
                return Err(MaskfxError::validation(format!(
                    "point ({}, {}) outside normalized range",
                    p.x_norm, p.y_norm
                )));
            }
            let x = ((p.x_norm * (width as f32 - 1.0)).round() as u32).min(width - 1);
            let y = ((p.y_norm * (height as f32 - 1.0)).round() as u32).min(height - 1);
            Ok((x, y, p.positive))
        })
        .collect()
}

/// Memoizing adapter around any [`Segmenter`].
///
/// Keyed by image content and the exact prompt list, so repeated template
/// application over a dataset pays for inference once per (image, prompts)
/// pair. The cache is this adapter's concern alone.
pub struct CachingSegmenter<S> {
    inner: S,
    cache: Mutex<HashMap<u64, Segmentation>>,
}

impl<S: Segmenter> CachingSegmenter<S> {
    /// Wrap a segmenter with an empty cache.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of memoized entries.
    pub fn cached_entries(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }

    fn cache_key(image: &ImageRgb8, points: &[PointPrompt]) -> u64 {
        let mut hasher = DefaultHasher::new();
        image.width().hash(&mut hasher);
        image.height().hash(&mut hasher);
        image.as_raw().hash(&mut hasher);
        for p in points {
            p.x_norm.to_bits().hash(&mut hasher);
            p.y_norm.to_bits().hash(&mut hasher);
            p.positive.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl<S: Segmenter> Segmenter for CachingSegmenter<S> {
    fn segment(&self, image: &ImageRgb8, points: &[PointPrompt]) -> MaskfxResult<Segmentation> {
        let key = Self::cache_key(image, points);
        if let Ok(cache) = self.cache.lock()
            && let Some(hit) = cache.get(&key)
        {
            return Ok(hit.clone());
        }
        let result = self.inner.segment(image, points)?;
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(key, result.clone());
        }
        Ok(result)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segment/capability.rs"]
mod tests;
