//! Score map construction and threshold extraction.

use crate::image::integral::{IntegralImage, WindowSums};
use crate::search::{Detection, Metric};
use crate::template::TemplatePlan;

/// Dense grid of similarity scores, one per top-left template placement.
///
/// Scores lie in `[-1, 1]`. The map is immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreMap {
    width: usize,
    height: usize,
    scores: Vec<f32>,
}

impl ScoreMap {
    pub(crate) fn from_cross(
        cross: &[u64],
        cols: usize,
        rows: usize,
        integral: &IntegralImage,
        plan: &TemplatePlan,
        metric: Metric,
    ) -> Self {
        let tpl_w = plan.width();
        let tpl_h = plan.height();
        let mut scores = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                let window = integral.window(x, y, tpl_w, tpl_h);
                let cross = cross[y * cols + x];
                let score = match metric {
                    Metric::CcoeffNormed => ccoeff_normed(plan, window, cross),
                    Metric::CcorrNormed => ccorr_normed(plan, window, cross),
                };
                scores.push(score);
            }
        }
        Self {
            width: cols,
            height: rows,
            scores,
        }
    }

    /// Number of placements along x (`W - w + 1`).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of placements along y (`H - h + 1`).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the score for the placement anchored at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.scores.get(y * self.width + x).copied()
    }

    /// Returns all scores in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.scores
    }

    /// Returns the highest-scoring placement, first in scan order on ties.
    pub fn max(&self) -> Option<Detection> {
        let mut best: Option<Detection> = None;
        for (idx, &score) in self.scores.iter().enumerate() {
            if best.map_or(true, |b| score > b.score) {
                best = Some(Detection {
                    x: idx % self.width,
                    y: idx / self.width,
                    score,
                });
            }
        }
        best
    }

    /// Returns every placement with `score >= threshold`, in row-major order.
    ///
    /// No suppression is applied: a broad peak yields a cluster of adjacent
    /// detections.
    pub fn detections(&self, threshold: f32) -> Vec<Detection> {
        self.scores
            .iter()
            .enumerate()
            .filter(|(_, &score)| score >= threshold)
            .map(|(idx, &score)| Detection {
                x: idx % self.width,
                y: idx / self.width,
                score,
            })
            .collect()
    }
}

/// Correlation coefficient from exact integer moments.
///
/// A flat side makes the coefficient undefined; it is reported as 0, except
/// when both sides are flat, which counts as a perfect match.
fn ccoeff_normed(plan: &TemplatePlan, window: WindowSums, cross: u64) -> f32 {
    let n = plan.area() as i128;
    let var_t = plan.scaled_variance();
    let var_i = (n as u128) * u128::from(window.sum_sq)
        - u128::from(window.sum) * u128::from(window.sum);
    match (var_t == 0, var_i == 0) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }
    let numer = n * i128::from(cross) - i128::from(plan.sum()) * i128::from(window.sum);
    let denom = (var_t as f64).sqrt() * (var_i as f64).sqrt();
    clamp_unit(numer as f64 / denom)
}

/// Cosine similarity without mean removal.
fn ccorr_normed(plan: &TemplatePlan, window: WindowSums, cross: u64) -> f32 {
    if plan.sum_sq() == 0 || window.sum_sq == 0 {
        return 0.0;
    }
    let denom = (plan.sum_sq() as f64).sqrt() * (window.sum_sq as f64).sqrt();
    clamp_unit(cross as f64 / denom)
}

fn clamp_unit(score: f64) -> f32 {
    score.clamp(-1.0, 1.0) as f32
}

#[cfg(test)]
mod tests {
    use super::ScoreMap;
    use crate::search::Detection;

    fn map(width: usize, height: usize, scores: Vec<f32>) -> ScoreMap {
        ScoreMap {
            width,
            height,
            scores,
        }
    }

    #[test]
    fn detections_follow_scan_order() {
        let m = map(3, 2, vec![0.1, 0.9, 0.5, 0.5, 0.2, 0.95]);
        let dets = m.detections(0.5);
        let coords: Vec<(usize, usize)> = dets.iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(coords, vec![(1, 0), (2, 0), (0, 1), (2, 1)]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let m = map(2, 1, vec![0.3, 0.29999]);
        assert_eq!(m.detections(0.3).len(), 1);
    }

    #[test]
    fn max_prefers_first_in_scan_order() {
        let m = map(2, 2, vec![0.2, 0.8, 0.8, 0.1]);
        assert_eq!(
            m.max(),
            Some(Detection {
                x: 1,
                y: 0,
                score: 0.8
            })
        );
    }

    #[test]
    fn get_rejects_out_of_range() {
        let m = map(2, 2, vec![0.0; 4]);
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 2).is_none());
        assert_eq!(m.get(1, 1), Some(0.0));
    }
}
