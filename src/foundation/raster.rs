use anyhow::Context;

use crate::foundation::error::{MaskfxError, MaskfxResult};

/// Inclusive pixel bounding box (min/max column and row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BBox {
    /// Leftmost column containing a region pixel.
    pub x_min: u32,
    /// Topmost row containing a region pixel.
    pub y_min: u32,
    /// Rightmost column containing a region pixel.
    pub x_max: u32,
    /// Bottommost row containing a region pixel.
    pub y_max: u32,
}

impl BBox {
    /// Width of the box in pixels (inclusive bounds).
    pub fn width(self) -> u32 {
        self.x_max - self.x_min + 1
    }

    /// Height of the box in pixels (inclusive bounds).
    pub fn height(self) -> u32 {
        self.y_max - self.y_min + 1
    }
}

/// Owned 8-bit, 3-channel interleaved RGB raster.
///
/// Grayscale sources are represented as RGB with equal channels; the engine
/// detects that case once per call and gates hue/saturation on it. Images are
/// treated as immutable for the duration of one compositing operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgb8 {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageRgb8 {
    /// Wrap raw interleaved RGB bytes, validating the buffer length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> MaskfxResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| MaskfxError::validation("image buffer size overflow"))?;
        if data.len() != expected {
            return Err(MaskfxError::validation(format!(
                "image buffer length {} does not match {width}x{height}x3",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create an image filled with a single RGB value.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> MaskfxResult<Self> {
        let px = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| MaskfxError::validation("image buffer size overflow"))?;
        let mut data = Vec::with_capacity(px * 3);
        for _ in 0..px {
            data.extend_from_slice(&rgb);
        }
        Self::from_raw(width, height, data)
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw interleaved RGB bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub(crate) fn pixel_offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 3
    }

    /// RGB value at `(x, y)`. Panics on out-of-bounds coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let o = self.pixel_offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }

    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let o = self.pixel_offset(x, y);
        self.data[o..o + 3].copy_from_slice(&rgb);
    }

    /// Encode the image as PNG bytes.
    pub fn encode_png(&self) -> MaskfxResult<Vec<u8>> {
        let img = image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| MaskfxError::validation("image buffer inconsistent with dimensions"))?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .context("encode png")?;
        Ok(out.into_inner())
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...) and convert to RGB8.
pub fn decode_rgb8(bytes: &[u8]) -> MaskfxResult<ImageRgb8> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    ImageRgb8::from_raw(width, height, rgb.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/raster.rs"]
mod tests;
