//! Drawing detection boxes and preparing the output canvas.
//!
//! Available when the `image-io` feature is enabled.

use crate::search::Detection;
use crate::util::CorrDetectResult;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

/// Default output canvas size `(width, height)`.
pub const DEFAULT_CANVAS: (u32, u32) = (1000, 960);

/// Outline style for detection boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxStyle {
    /// RGB outline colour.
    pub color: [u8; 3],
    /// Outline thickness in pixels, growing inwards from the placement edge.
    pub thickness: u32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: [255, 255, 255],
            thickness: 2,
        }
    }
}

/// Draws one box per detection spanning `(x, y)` to `(x + w, y + h)`.
///
/// Boxes are clipped to the image. Overlapping detections overdraw each other.
pub fn draw_detections(
    img: &mut RgbImage,
    detections: &[Detection],
    tpl_width: usize,
    tpl_height: usize,
    style: &BoxStyle,
) {
    let color = Rgb(style.color);
    for det in detections {
        for inset in 0..style.thickness {
            let inset = inset as usize;
            let w = (tpl_width + 1).saturating_sub(2 * inset);
            let h = (tpl_height + 1).saturating_sub(2 * inset);
            if w == 0 || h == 0 {
                break;
            }
            let rect = Rect::at((det.x + inset) as i32, (det.y + inset) as i32)
                .of_size(w as u32, h as u32);
            draw_hollow_rect_mut(img, rect, color);
        }
    }
}

/// Returns a copy of `img` resized to exactly `width x height`.
pub fn resize_to_canvas(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(img, width, height, FilterType::Triangle)
}

/// Presentation hook for the annotated result, e.g. an on-screen window.
///
/// The matcher never calls this; only the pipeline hands its final image to
/// a visualizer when one is supplied.
pub trait Visualizer {
    /// Shows the annotated image under a window title.
    fn show(&mut self, title: &str, img: &RgbImage) -> CorrDetectResult<()>;
}
