//! End-to-end detection run: load, match, annotate, resize, save.
//!
//! Available when the `image-io` feature is enabled.

use crate::annotate::{draw_detections, resize_to_canvas, BoxStyle, Visualizer, DEFAULT_CANVAS};
use crate::image::io::{load_gray_image, load_image, owned_from_dynamic_image, save_rgb_image};
use crate::search::{Detection, MatchConfig, Matcher};
use crate::template::Template;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::CorrDetectResult;
use std::path::PathBuf;

/// Title passed to the visualizer.
pub const WINDOW_TITLE: &str = "Detected";

/// What to do when no placement meets the threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Still write the (unannotated) output image.
    #[default]
    Proceed,
    /// Stop after matching and write nothing.
    Skip,
}

/// Configuration for one pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Source photo.
    pub image_path: PathBuf,
    /// Template to search for; decoded as grayscale.
    pub template_path: PathBuf,
    /// Annotated output image; the format follows the extension.
    pub output_path: PathBuf,
    /// Matcher settings, including the threshold.
    pub matching: MatchConfig,
    /// Detection box style.
    pub style: BoxStyle,
    /// Output canvas size, or `None` to keep the source size.
    pub canvas: Option<(u32, u32)>,
    /// Behaviour when there are no detections.
    pub on_empty: EmptyPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("ww2.jpg"),
            template_path: PathBuf::from("Waldo.png"),
            output_path: PathBuf::from("Detections.png"),
            matching: MatchConfig::default(),
            style: BoxStyle::default(),
            canvas: Some(DEFAULT_CANVAS),
            on_empty: EmptyPolicy::Proceed,
        }
    }
}

/// Summary of a pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// Template width in pixels.
    pub template_width: usize,
    /// Template height in pixels.
    pub template_height: usize,
    /// Raw detections in scan order.
    pub detections: Vec<Detection>,
    /// Where the output was written, or `None` if it was skipped.
    pub output_path: Option<PathBuf>,
}

/// Runs the full pipeline and optionally shows the result.
pub fn run(
    cfg: &PipelineConfig,
    visualizer: Option<&mut dyn Visualizer>,
) -> CorrDetectResult<PipelineReport> {
    cfg.matching.validate()?;
    let _span = trace_span!("pipeline").entered();

    let source = load_image(&cfg.image_path)?;
    let gray = owned_from_dynamic_image(&source)?;
    let template = Template::from(load_gray_image(&cfg.template_path)?);
    let (template_width, template_height) = (template.width(), template.height());
    trace_event!(
        "template_loaded",
        width = template_width,
        height = template_height
    );

    let matcher = Matcher::new(cfg.matching.clone());
    let detections = matcher.match_template(gray.view(), &template)?;
    if detections.is_empty() {
        trace_warn!(
            "no matches in this image, try a lower threshold",
            threshold = cfg.matching.threshold
        );
        if cfg.on_empty == EmptyPolicy::Skip {
            return Ok(PipelineReport {
                template_width,
                template_height,
                detections,
                output_path: None,
            });
        }
    }

    let mut annotated = source.to_rgb8();
    draw_detections(
        &mut annotated,
        &detections,
        template_width,
        template_height,
        &cfg.style,
    );
    let output = match cfg.canvas {
        Some((width, height)) => resize_to_canvas(&annotated, width, height),
        None => annotated,
    };
    save_rgb_image(&output, &cfg.output_path)?;
    trace_event!("output_written", detections = detections.len());

    if let Some(visualizer) = visualizer {
        visualizer.show(WINDOW_TITLE, &output)?;
    }

    Ok(PipelineReport {
        template_width,
        template_height,
        detections,
        output_path: Some(cfg.output_path.clone()),
    })
}
