//! Template matching and detection extraction.
//!
//! [`Matcher`] builds a [`ScoreMap`] from a kernel's cross-correlation and
//! exact window statistics, then reports every placement whose score meets the
//! threshold. Detections are raw threshold crossings with no non-maximum
//! suppression, so one object instance usually produces a small cluster of
//! adjacent detections.

mod score_map;

pub use score_map::ScoreMap;

use crate::image::integral::IntegralImage;
use crate::image::ImageView;
use crate::kernel::{placement_grid, DirectScalar, FftCorrelator, Kernel};
use crate::template::{Template, TemplatePlan};
use crate::trace::{trace_event, trace_span};
use crate::util::{CorrDetectError, CorrDetectResult};

/// Default similarity threshold.
pub const DEFAULT_THRESHOLD: f32 = 0.30;

/// Similarity metric used to score placements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    /// Normalized correlation coefficient (zero-mean normalized correlation).
    #[default]
    CcoeffNormed,
    /// Normalized cross-correlation without mean removal.
    CcorrNormed,
}

/// Strategy used to compute the raw cross-correlation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    /// Direct summation over each placement.
    #[default]
    Direct,
    /// Frequency-domain correlation.
    Fft,
}

/// Configuration for a matching run.
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Similarity metric.
    pub metric: Metric,
    /// Minimum score for a placement to be reported, in `[-1, 1]`.
    pub threshold: f32,
    /// Cross-correlation backend.
    pub backend: Backend,
    /// Use the row-parallel direct kernel (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            metric: Metric::CcoeffNormed,
            threshold: DEFAULT_THRESHOLD,
            backend: Backend::Direct,
            parallel: false,
        }
    }
}

impl MatchConfig {
    /// Checks that the threshold is a number in `[-1, 1]`.
    pub fn validate(&self) -> CorrDetectResult<()> {
        if !(-1.0..=1.0).contains(&self.threshold) {
            return Err(CorrDetectError::InvalidThreshold {
                value: self.threshold,
            });
        }
        Ok(())
    }
}

/// Top-left corner of a placement whose score met the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    /// X coordinate (column) of the placement.
    pub x: usize,
    /// Y coordinate (row) of the placement.
    pub y: usize,
    /// Score at the placement.
    pub score: f32,
}

/// Threshold template matcher.
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the given configuration.
    pub fn new(cfg: MatchConfig) -> Self {
        Self { cfg }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Computes the full score map for `template` over `image`.
    pub fn score_map(
        &self,
        image: ImageView<'_, u8>,
        template: &Template,
    ) -> CorrDetectResult<ScoreMap> {
        let plan = TemplatePlan::from_view(template.view());
        let (cols, rows) = placement_grid(image, &plan)?;
        let _span = trace_span!(
            "score_map",
            cols = cols,
            rows = rows,
            backend = ?self.cfg.backend
        )
        .entered();

        let cross = match self.cfg.backend {
            Backend::Direct => self.correlate_direct(image, &plan)?,
            Backend::Fft => FftCorrelator::correlate(image, &plan)?,
        };
        let integral = IntegralImage::build(image);
        Ok(ScoreMap::from_cross(
            &cross,
            cols,
            rows,
            &integral,
            &plan,
            self.cfg.metric,
        ))
    }

    /// Returns every placement scoring at least the configured threshold,
    /// in row-major scan order.
    pub fn match_template(
        &self,
        image: ImageView<'_, u8>,
        template: &Template,
    ) -> CorrDetectResult<Vec<Detection>> {
        self.cfg.validate()?;
        let _span = trace_span!(
            "match_template",
            img_width = image.width(),
            img_height = image.height(),
            tpl_width = template.width(),
            tpl_height = template.height()
        )
        .entered();

        let map = self.score_map(image, template)?;
        let detections = map.detections(self.cfg.threshold);
        trace_event!(
            "detections",
            count = detections.len(),
            threshold = self.cfg.threshold
        );
        Ok(detections)
    }

    #[cfg(feature = "rayon")]
    fn correlate_direct(
        &self,
        image: ImageView<'_, u8>,
        plan: &TemplatePlan,
    ) -> CorrDetectResult<Vec<u64>> {
        if self.cfg.parallel {
            crate::kernel::DirectParallel::correlate(image, plan)
        } else {
            DirectScalar::correlate(image, plan)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn correlate_direct(
        &self,
        image: ImageView<'_, u8>,
        plan: &TemplatePlan,
    ) -> CorrDetectResult<Vec<u64>> {
        DirectScalar::correlate(image, plan)
    }
}

/// Matches `template` against `image` with the default metric and backend.
pub fn match_template(
    image: ImageView<'_, u8>,
    template: &Template,
    threshold: f32,
) -> CorrDetectResult<Vec<Detection>> {
    Matcher::new(MatchConfig {
        threshold,
        ..MatchConfig::default()
    })
    .match_template(image, template)
}
