use anyhow::Context;

use crate::foundation::{
    error::{MaskfxError, MaskfxResult},
    raster::BBox,
};

/// Maximum relative aspect-ratio disagreement tolerated when resizing a mask
/// to its target image. Anything larger is an irreconcilable mismatch.
const ASPECT_TOLERANCE: f64 = 0.01;

/// Single-channel region bitmap, one byte per pixel, nonzero = inside.
///
/// A mask must match its target image dimensions before compositing; see
/// [`MaskBitmap::resize_to`] for the reconciliation rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskBitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl MaskBitmap {
    /// Wrap raw per-pixel bytes, validating the buffer length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> MaskfxResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| MaskfxError::validation("mask buffer size overflow"))?;
        if data.len() != expected {
            return Err(MaskfxError::validation(format!(
                "mask buffer length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a mask by evaluating a predicate at every `(x, y)`.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> bool) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(u8::from(f(x, y)));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// The full-image mask: every pixel inside.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![1u8; (width as usize) * (height as usize)],
        }
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at `(x, y)` is inside the region.
    #[inline]
    pub fn is_inside(&self, x: u32, y: u32) -> bool {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] != 0
    }

    /// Number of inside pixels.
    pub fn area(&self) -> u64 {
        self.data.iter().filter(|&&v| v != 0).count() as u64
    }

    /// Whether no pixel is inside. An all-zero mask is valid and composites
    /// to a no-op.
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Inclusive bounding box of the inside pixels, or `None` when empty.
    pub fn bbox(&self) -> Option<BBox> {
        let mut bbox: Option<BBox> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.is_inside(x, y) {
                    continue;
                }
                bbox = Some(match bbox {
                    None => BBox {
                        x_min: x,
                        y_min: y,
                        x_max: x,
                        y_max: y,
                    },
                    Some(b) => BBox {
                        x_min: b.x_min.min(x),
                        y_min: b.y_min.min(y),
                        x_max: b.x_max.max(x),
                        y_max: b.y_max.max(y),
                    },
                });
            }
        }
        bbox
    }

    /// Reconcile the mask to `(width, height)`.
    ///
    /// Same dimensions return a copy. Different dimensions with an agreeing
    /// aspect ratio resample with nearest-neighbor. A disagreeing aspect
    /// ratio is [`MaskfxError::MaskDimensionMismatch`] — a mask is never
    /// silently stretched into a different shape.
    pub fn resize_to(&self, width: u32, height: u32) -> MaskfxResult<Self> {
        if width == 0 || height == 0 || self.width == 0 || self.height == 0 {
            return Err(MaskfxError::mask_mismatch(
                "cannot resize an empty-dimension mask",
            ));
        }
        if self.width == width && self.height == height {
            return Ok(self.clone());
        }

        let src_aspect = f64::from(self.width) / f64::from(self.height);
        let dst_aspect = f64::from(width) / f64::from(height);
        if ((src_aspect - dst_aspect) / dst_aspect).abs() > ASPECT_TOLERANCE {
            return Err(MaskfxError::mask_mismatch(format!(
                "mask {}x{} and image {width}x{height} have different aspect ratios",
                self.width, self.height
            )));
        }

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            // Nearest-neighbor: map the destination pixel center back to the
            // source grid.
            let sy = ((u64::from(y) * 2 + 1) * u64::from(self.height) / (u64::from(height) * 2))
                .min(u64::from(self.height) - 1) as u32;
            for x in 0..width {
                let sx = ((u64::from(x) * 2 + 1) * u64::from(self.width) / (u64::from(width) * 2))
                    .min(u64::from(self.width) - 1) as u32;
                data.push(u8::from(self.is_inside(sx, sy)));
            }
        }
        Self::from_raw(width, height, data)
    }
}

/// Decode a grayscale PNG into a mask, treating values above 127 as inside.
pub fn decode_mask_png(bytes: &[u8]) -> MaskfxResult<MaskBitmap> {
    let dyn_img = image::load_from_memory(bytes).context("decode mask png")?;
    let gray = dyn_img.to_luma8();
    let (width, height) = gray.dimensions();
    let data = gray.into_raw().iter().map(|&v| u8::from(v > 127)).collect();
    MaskBitmap::from_raw(width, height, data)
}

/// Encode a mask as a grayscale PNG (inside = 255, outside = 0).
pub fn encode_mask_png(mask: &MaskBitmap) -> MaskfxResult<Vec<u8>> {
    let data: Vec<u8> = (0..mask.height())
        .flat_map(|y| (0..mask.width()).map(move |x| if mask.is_inside(x, y) { 255 } else { 0 }))
        .collect();
    let img = image::GrayImage::from_raw(mask.width(), mask.height(), data)
        .ok_or_else(|| MaskfxError::validation("mask buffer inconsistent with dimensions"))?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .context("encode mask png")?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/mask/bitmap.rs"]
mod tests;
