/// Convenience result type used across maskfx.
pub type MaskfxResult<T> = Result<T, MaskfxError>;

/// Top-level error taxonomy used by engine APIs.
///
/// All variants are local validation failures detected before or during an
/// `apply` call; none are retryable, and a failed call never writes partial
/// output.
#[derive(thiserror::Error, Debug)]
pub enum MaskfxError {
    /// Invalid caller-provided data (dimensions, parameters, targets).
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested component id is not in a non-empty component list.
    #[error("unknown component: id {0} not found")]
    UnknownComponent(u32),

    /// A gamma delta at or below -1 would produce a non-positive exponent.
    #[error("invalid gamma: {0} (must be > -1)")]
    InvalidGamma(f32),

    /// A mask could not be reconciled to the image dimensions.
    #[error("mask dimension mismatch: {0}")]
    MaskDimensionMismatch(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskfxError {
    /// Build a [`MaskfxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MaskfxError::MaskDimensionMismatch`] value.
    pub fn mask_mismatch(msg: impl Into<String>) -> Self {
        Self::MaskDimensionMismatch(msg.into())
    }

    /// Build a [`MaskfxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
