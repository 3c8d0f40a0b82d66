//! FFT cross-correlation kernel.
//!
//! Image and template are zero-padded to a common power-of-two grid of at
//! least the image size. Because every valid placement keeps `x + i < W`, the
//! circular correlation never wraps for the placements we read back. The 2D
//! transform is done as 1D row transforms, a transpose, then 1D column
//! transforms; the spectrum stays transposed until the inverse pass.
//!
//! The exact cross-correlation of 8-bit data is an integer, so results are
//! rounded to the nearest integer, which makes this kernel agree exactly with
//! [`crate::kernel::DirectScalar`] whenever the transform error stays below
//! one half.

use crate::image::ImageView;
use crate::kernel::{placement_grid, Kernel};
use crate::template::TemplatePlan;
use crate::trace::{trace_event, trace_span};
use crate::util::CorrDetectResult;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Frequency-domain cross-correlation.
pub struct FftCorrelator;

impl Kernel for FftCorrelator {
    fn correlate(image: ImageView<'_, u8>, plan: &TemplatePlan) -> CorrDetectResult<Vec<u64>> {
        let (cols, rows) = placement_grid(image, plan)?;
        let padded_w = image.width().next_power_of_two();
        let padded_h = image.height().next_power_of_two();
        let _span = trace_span!("fft_correlate", padded_w = padded_w, padded_h = padded_h).entered();

        let mut planner = FftPlanner::<f64>::new();
        let row_fwd = planner.plan_fft_forward(padded_w);
        let col_fwd = planner.plan_fft_forward(padded_h);
        let row_inv = planner.plan_fft_inverse(padded_w);
        let col_inv = planner.plan_fft_inverse(padded_h);

        let mut img_freq = pad(image.rows(), padded_w, padded_h);
        let tpl_view = plan
            .pixels()
            .chunks_exact(plan.width())
            .collect::<Vec<_>>();
        let mut tpl_freq = pad(tpl_view.into_iter(), padded_w, padded_h);

        // Forward: rows, transpose, then columns (as rows of the transpose).
        row_fwd.process(&mut img_freq);
        row_fwd.process(&mut tpl_freq);
        let mut img_freq = transpose(&img_freq, padded_w, padded_h);
        let mut tpl_freq = transpose(&tpl_freq, padded_w, padded_h);
        col_fwd.process(&mut img_freq);
        col_fwd.process(&mut tpl_freq);

        for (i, t) in img_freq.iter_mut().zip(&tpl_freq) {
            *i *= t.conj();
        }

        col_inv.process(&mut img_freq);
        let mut spatial = transpose(&img_freq, padded_h, padded_w);
        row_inv.process(&mut spatial);

        let scale = 1.0 / (padded_w * padded_h) as f64;
        let mut out = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            let row = &spatial[y * padded_w..y * padded_w + cols];
            out.extend(row.iter().map(|c| (c.re * scale).round().max(0.0) as u64));
        }
        trace_event!("fft_correlate_done", placements = out.len());
        Ok(out)
    }
}

/// Copies rows into the top-left corner of a zeroed `w x h` complex grid.
fn pad<'a, I>(rows: I, w: usize, h: usize) -> Vec<Complex<f64>>
where
    I: Iterator<Item = &'a [u8]>,
{
    let mut out = vec![Complex::new(0.0, 0.0); w * h];
    for (y, row) in rows.enumerate() {
        for (x, &value) in row.iter().enumerate() {
            out[y * w + x] = Complex::new(f64::from(value), 0.0);
        }
    }
    out
}

/// Transposes a row-major `w x h` grid into a row-major `h x w` grid.
fn transpose(src: &[Complex<f64>], w: usize, h: usize) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::new(0.0, 0.0); w * h];
    for y in 0..h {
        for x in 0..w {
            out[x * h + y] = src[y * w + x];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{transpose, FftCorrelator};
    use crate::image::ImageView;
    use crate::kernel::{DirectScalar, Kernel};
    use crate::template::TemplatePlan;
    use rustfft::num_complex::Complex;

    #[test]
    fn transpose_swaps_axes() {
        let src: Vec<Complex<f64>> = (0..6).map(|v| Complex::new(v as f64, 0.0)).collect();
        let out = transpose(&src, 3, 2);
        let re: Vec<f64> = out.iter().map(|c| c.re).collect();
        assert_eq!(re, vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    }

    #[test]
    fn fft_matches_direct_on_non_power_of_two_sizes() {
        let width = 13;
        let height = 7;
        let image: Vec<u8> = (0..width * height).map(|v| ((v * 37) % 251) as u8).collect();
        let tpl: Vec<u8> = vec![9, 200, 3, 41, 0, 255];
        let image = ImageView::from_slice(&image, width, height).unwrap();
        let plan = TemplatePlan::from_view(ImageView::from_slice(&tpl, 3, 2).unwrap());

        let direct = DirectScalar::correlate(image, &plan).unwrap();
        let fft = FftCorrelator::correlate(image, &plan).unwrap();
        assert_eq!(direct, fft);
    }
}
