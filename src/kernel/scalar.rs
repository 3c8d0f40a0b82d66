//! Scalar reference kernel: direct summation over every placement.

use crate::image::ImageView;
use crate::kernel::{placement_grid, Kernel};
use crate::template::TemplatePlan;
use crate::util::CorrDetectResult;

/// Direct `O(W * H * w * h)` cross-correlation with exact `u64` sums.
pub struct DirectScalar;

impl Kernel for DirectScalar {
    fn correlate(image: ImageView<'_, u8>, plan: &TemplatePlan) -> CorrDetectResult<Vec<u64>> {
        let (cols, rows) = placement_grid(image, plan)?;
        let img_rows: Vec<&[u8]> = image.rows().collect();
        let mut out = vec![0u64; cols * rows];
        for (y, row_out) in out.chunks_mut(cols).enumerate() {
            correlate_row(&img_rows, plan, y, row_out);
        }
        Ok(out)
    }
}

/// Fills one output row: the cross-correlation at placements `(0..cols, y)`.
pub(crate) fn correlate_row(img_rows: &[&[u8]], plan: &TemplatePlan, y: usize, out: &mut [u64]) {
    let tpl_width = plan.width();
    let tpl = plan.pixels();
    for (x, slot) in out.iter_mut().enumerate() {
        let mut dot = 0u64;
        for (tpl_row, img_row) in tpl.chunks_exact(tpl_width).zip(&img_rows[y..]) {
            let window = &img_row[x..x + tpl_width];
            dot += tpl_row
                .iter()
                .zip(window)
                .map(|(&t, &i)| u64::from(t) * u64::from(i))
                .sum::<u64>();
        }
        *slot = dot;
    }
}

#[cfg(test)]
mod tests {
    use super::DirectScalar;
    use crate::image::ImageView;
    use crate::kernel::Kernel;
    use crate::template::TemplatePlan;
    use crate::util::CorrDetectError;

    #[test]
    fn correlate_matches_hand_computed_values() {
        let image = [1u8, 2, 3, 4, 5, 6];
        let tpl = [1u8, 1];
        let image = ImageView::from_slice(&image, 3, 2).unwrap();
        let plan = TemplatePlan::from_view(ImageView::from_slice(&tpl, 2, 1).unwrap());

        let out = DirectScalar::correlate(image, &plan).unwrap();
        assert_eq!(out, vec![3, 5, 9, 11]);
    }

    #[test]
    fn correlate_rejects_oversized_template() {
        let image = [0u8; 4];
        let tpl = [0u8; 3];
        let image = ImageView::from_slice(&image, 2, 2).unwrap();
        let plan = TemplatePlan::from_view(ImageView::from_slice(&tpl, 3, 1).unwrap());

        let err = DirectScalar::correlate(image, &plan).unwrap_err();
        assert_eq!(
            err,
            CorrDetectError::InvalidDimensions {
                tpl_width: 3,
                tpl_height: 1,
                img_width: 2,
                img_height: 2,
            }
        );
    }
}
