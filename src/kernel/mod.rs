//! Cross-correlation kernels.
//!
//! A kernel computes the raw cross-correlation `sum(T * I)` for every valid
//! top-left placement of the template. Normalization happens afterwards in
//! [`crate::search`], using exact window statistics from an integral image,
//! so every kernel yields identical scores.

use crate::image::ImageView;
use crate::template::TemplatePlan;
use crate::util::{CorrDetectError, CorrDetectResult};

/// Kernel trait for dense cross-correlation.
pub trait Kernel {
    /// Returns `sum(T * I)` for every placement, row-major over
    /// `(W - w + 1) x (H - h + 1)`.
    fn correlate(image: ImageView<'_, u8>, plan: &TemplatePlan) -> CorrDetectResult<Vec<u64>>;
}

/// Returns the placement grid size `(cols, rows)` for a template on an image.
pub fn placement_grid(
    image: ImageView<'_, u8>,
    plan: &TemplatePlan,
) -> CorrDetectResult<(usize, usize)> {
    let img_width = image.width();
    let img_height = image.height();
    let tpl_width = plan.width();
    let tpl_height = plan.height();
    if tpl_width > img_width || tpl_height > img_height {
        return Err(CorrDetectError::InvalidDimensions {
            tpl_width,
            tpl_height,
            img_width,
            img_height,
        });
    }
    Ok((img_width - tpl_width + 1, img_height - tpl_height + 1))
}

pub mod fft;
pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use fft::FftCorrelator;
pub use scalar::DirectScalar;

#[cfg(feature = "rayon")]
pub use self::rayon::DirectParallel;
