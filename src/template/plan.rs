//! Template plan precomputation for normalized correlation.

use crate::image::ImageView;

/// Precomputed exact statistics and pixel buffer for a template.
///
/// Sums are kept as integers so the template variance term
/// `n * sum_sq - sum^2` is exact and flatness is decided without tolerance.
pub struct TemplatePlan {
    width: usize,
    height: usize,
    sum: u64,
    sum_sq: u64,
    pixels: Vec<u8>,
}

impl TemplatePlan {
    /// Builds a plan from a template view.
    pub fn from_view(tpl: ImageView<'_, u8>) -> Self {
        let width = tpl.width();
        let height = tpl.height();
        let mut pixels = Vec::with_capacity(width * height);
        let mut sum = 0u64;
        let mut sum_sq = 0u64;
        for row in tpl.rows() {
            for &value in row {
                let v = u64::from(value);
                sum += v;
                sum_sq += v * v;
            }
            pixels.extend_from_slice(row);
        }

        Self {
            width,
            height,
            sum,
            sum_sq,
            pixels,
        }
    }

    /// Returns the template width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of template pixels.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Returns the sum of template intensities.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Returns the sum of squared template intensities.
    pub fn sum_sq(&self) -> u64 {
        self.sum_sq
    }

    /// Returns `n * sum_sq - sum^2`, i.e. `n^2` times the population variance.
    pub fn scaled_variance(&self) -> u128 {
        let n = self.area() as u128;
        n * u128::from(self.sum_sq) - u128::from(self.sum) * u128::from(self.sum)
    }

    /// Returns the mean intensity of the template.
    pub fn mean(&self) -> f64 {
        self.sum as f64 / self.area() as f64
    }

    /// Returns true when every template pixel has the same intensity.
    pub fn is_flat(&self) -> bool {
        self.scaled_variance() == 0
    }

    /// Returns the template pixels in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::TemplatePlan;
    use crate::image::ImageView;

    #[test]
    fn plan_matches_known_stats() {
        let data = [0u8, 1, 2, 3];
        let plan = TemplatePlan::from_view(ImageView::from_slice(&data, 2, 2).unwrap());
        assert_eq!(plan.area(), 4);
        assert_eq!(plan.sum(), 6);
        assert_eq!(plan.sum_sq(), 14);
        // 4 * 14 - 36
        assert_eq!(plan.scaled_variance(), 20);
        assert!((plan.mean() - 1.5).abs() < 1e-12);
        assert!(!plan.is_flat());
    }

    #[test]
    fn constant_template_is_flat() {
        let data = vec![200u8; 9];
        let plan = TemplatePlan::from_view(ImageView::from_slice(&data, 3, 3).unwrap());
        assert!(plan.is_flat());
    }
}
