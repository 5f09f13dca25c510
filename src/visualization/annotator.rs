use crate::annotations::detection_result::DetectionResult;
use crate::error::Result;
use crate::visualization::font::embedded_font;
use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage, imageops};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use itertools::Itertools;

pub const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const BOX_THICKNESS: i32 = 2;
const SCORE_SCALE: f32 = 16.0;
/// Gap between a score label's baseline and the top edge of its box.
const SCORE_OFFSET: i32 = 10;
const SUMMARY_SCALE: f32 = 32.0;
/// Baseline position of the "People Count" summary.
const SUMMARY_ORIGIN: (i32, i32) = (10, 30);
const TITLE_SCALE: f32 = 28.0;
const TITLE_PADDING: u32 = 8;

/// Burns detections and labels into images.
pub struct Annotator {
    font: FontArc,
}

impl Annotator {
    pub fn new(font: FontArc) -> Self {
        Annotator { font }
    }

    /// An annotator using the font bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Ok(Annotator::new(embedded_font()?))
    }

    /// Draws every box with its score, then the total count in the top-left corner.
    pub fn draw_detections(&self, image: &mut RgbImage, result: &DetectionResult) {
        for (bbox, score) in result.boxes().iter().zip_eq(result.scores()) {
            let [x1, y1, x2, y2] = bbox.map(|v| v as i32);
            draw_thick_rect(image, x1, y1, x2, y2);
            self.draw_label(
                image,
                x1,
                y1 - SCORE_OFFSET,
                SCORE_SCALE,
                BOX_COLOR,
                &format!("{:.2}", score),
            );
        }
        self.draw_label(
            image,
            SUMMARY_ORIGIN.0,
            SUMMARY_ORIGIN.1,
            SUMMARY_SCALE,
            BOX_COLOR,
            &format!("People Count: {}", result.count()),
        );
    }

    /// Returns a copy of `image` with a white banner above it holding one centered line per
    /// entry of `lines`.
    pub fn with_title(&self, image: &RgbImage, lines: &[String]) -> RgbImage {
        let font = &self.font;
        let line_height = text_size(TITLE_SCALE, font, "Ag").1 + TITLE_PADDING;
        let banner_height = line_height * lines.len() as u32 + TITLE_PADDING;
        let mut canvas = RgbImage::from_pixel(
            image.width(),
            image.height() + banner_height,
            Rgb([255, 255, 255]),
        );
        for (index, line) in lines.iter().enumerate() {
            let text_width = text_size(TITLE_SCALE, font, line).0;
            let x = (image.width().saturating_sub(text_width) / 2) as i32;
            let y = (TITLE_PADDING + index as u32 * line_height) as i32;
            draw_text_mut(&mut canvas, Rgb([0, 0, 0]), x, y, TITLE_SCALE, font, line);
        }
        imageops::replace(&mut canvas, image, 0, banner_height as i64);
        canvas
    }

    /// Draws `text` so that its baseline sits at `baseline_y`.
    fn draw_label(
        &self,
        image: &mut RgbImage,
        x: i32,
        baseline_y: i32,
        scale: f32,
        color: Rgb<u8>,
        text: &str,
    ) {
        let scale = PxScale::from(scale);
        let height = text_size(scale, &self.font, text).1 as i32;
        draw_text_mut(image, color, x, baseline_y - height, scale, &self.font, text);
    }
}

/// Outlines `(x1, y1)..(x2, y2)` with a `BOX_THICKNESS` pixel stroke growing inwards.
fn draw_thick_rect(image: &mut RgbImage, x1: i32, y1: i32, x2: i32, y2: i32) {
    for inset in 0..BOX_THICKNESS {
        let width = (x2 - x1 - 2 * inset + 1).max(1) as u32;
        let height = (y2 - y1 - 2 * inset + 1).max(1) as u32;
        let rect = Rect::at(x1 + inset, y1 + inset).of_size(width, height);
        draw_hollow_rect_mut(image, rect, BOX_COLOR);
    }
}
