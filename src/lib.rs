//! corrdetect finds every occurrence of a grayscale template in an image.
//!
//! Each valid top-left placement is scored with the normalized correlation
//! coefficient, and every placement at or above a threshold is reported as a
//! [`Detection`]. Detections are raw threshold crossings in scan order; no
//! non-maximum suppression is applied, so a broad correlation peak yields a
//! cluster of adjacent detections.
//!
//! The cross-correlation can be computed directly (optionally row-parallel via
//! the `rayon` feature) or through an FFT; window statistics come from integral
//! images, so both backends produce the same scores. With the `image-io`
//! feature the crate also loads and saves images, draws detection boxes and
//! runs the full load/match/annotate/resize/save [`pipeline`].

#[cfg(feature = "image-io")]
pub mod annotate;
pub mod image;
pub mod kernel;
#[cfg(feature = "image-io")]
pub mod pipeline;
pub mod search;
pub mod template;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;
pub use crate::image::{ImageView, OwnedImage};
pub use kernel::Kernel;
pub use search::{
    match_template, Backend, Detection, MatchConfig, Matcher, Metric, ScoreMap,
    DEFAULT_THRESHOLD,
};
pub use template::{Template, TemplatePlan};
pub use util::{CorrDetectError, CorrDetectResult};
