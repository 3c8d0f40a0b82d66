//! Rayon-parallel direct kernel (feature-gated).
//!
//! Parallelizes over placement rows; each worker owns a disjoint output row,
//! so the result is identical to [`crate::kernel::DirectScalar`].

use crate::image::ImageView;
use crate::kernel::scalar::correlate_row;
use crate::kernel::{placement_grid, Kernel};
use crate::template::TemplatePlan;
use crate::util::CorrDetectResult;
use rayon::prelude::*;

/// Row-parallel direct cross-correlation.
pub struct DirectParallel;

impl Kernel for DirectParallel {
    fn correlate(image: ImageView<'_, u8>, plan: &TemplatePlan) -> CorrDetectResult<Vec<u64>> {
        let (cols, rows) = placement_grid(image, plan)?;
        let img_rows: Vec<&[u8]> = image.rows().collect();
        let mut out = vec![0u64; cols * rows];
        out.par_chunks_mut(cols)
            .enumerate()
            .for_each(|(y, row_out)| correlate_row(&img_rows, plan, y, row_out));
        Ok(out)
    }
}
