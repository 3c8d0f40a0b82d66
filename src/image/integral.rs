//! Summed-area tables for O(1) window statistics.
//!
//! Both tables have one extra leading row and column of zeros so that the sum
//! over `[x, x + w) x [y, y + h)` is
//! `t[y + h][x + w] - t[y][x + w] - t[y + h][x] + t[y][x]`.
//! Sums are accumulated in `u64`, which is exact for 8-bit data on any image
//! that fits in memory.

use crate::image::ImageView;

/// Integral images of pixel values and squared pixel values.
pub struct IntegralImage {
    width: usize,
    height: usize,
    sum: Vec<u64>,
    sum_sq: Vec<u64>,
}

/// Exact first and second moments of a rectangular window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSums {
    /// Sum of pixel values.
    pub sum: u64,
    /// Sum of squared pixel values.
    pub sum_sq: u64,
}

impl IntegralImage {
    /// Builds both tables in a single pass over the image.
    pub fn build(image: ImageView<'_, u8>) -> Self {
        let width = image.width();
        let height = image.height();
        let cols = width + 1;
        let mut sum = vec![0u64; cols * (height + 1)];
        let mut sum_sq = vec![0u64; cols * (height + 1)];

        for (y, row) in image.rows().enumerate() {
            let mut row_sum = 0u64;
            let mut row_sq = 0u64;
            let above = y * cols;
            let here = (y + 1) * cols;
            for (x, &value) in row.iter().enumerate() {
                let v = u64::from(value);
                row_sum += v;
                row_sq += v * v;
                sum[here + x + 1] = sum[above + x + 1] + row_sum;
                sum_sq[here + x + 1] = sum_sq[above + x + 1] + row_sq;
            }
        }

        Self {
            width,
            height,
            sum,
            sum_sq,
        }
    }

    /// Returns the width of the source image.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the source image.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the sums over the `w x h` window anchored at `(x, y)`.
    ///
    /// The caller guarantees `x + w <= width` and `y + h <= height`.
    #[inline]
    pub fn window(&self, x: usize, y: usize, w: usize, h: usize) -> WindowSums {
        let cols = self.width + 1;
        let tl = y * cols + x;
        let tr = y * cols + x + w;
        let bl = (y + h) * cols + x;
        let br = (y + h) * cols + x + w;
        WindowSums {
            sum: self.sum[br] + self.sum[tl] - self.sum[tr] - self.sum[bl],
            sum_sq: self.sum_sq[br] + self.sum_sq[tl] - self.sum_sq[tr] - self.sum_sq[bl],
        }
    }
}
