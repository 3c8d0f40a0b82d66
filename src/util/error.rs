//! Error types for corrdetect.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for corrdetect operations.
pub type CorrDetectResult<T> = std::result::Result<T, CorrDetectError>;

/// Errors that can occur when loading, matching or writing images.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CorrDetectError {
    /// A grid with zero width or height was supplied.
    #[error("empty input: {width}x{height} grid has zero area")]
    EmptyInput { width: usize, height: usize },
    /// The template does not fit inside the image.
    #[error(
        "invalid dimensions: template {tpl_width}x{tpl_height} exceeds image {img_width}x{img_height}"
    )]
    InvalidDimensions {
        tpl_width: usize,
        tpl_height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// The row stride is smaller than the row width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The backing buffer is too short for the requested layout.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// An owned buffer does not hold exactly `width * height` pixels.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch { expected: usize, got: usize },
    /// The similarity threshold is not a number in `[-1, 1]`.
    #[error("invalid threshold {value}: expected a value in [-1, 1]")]
    InvalidThreshold { value: f32 },
    /// An input file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    /// An input file exists but could not be decoded.
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    /// The output image could not be encoded or written.
    #[error("failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },
}
