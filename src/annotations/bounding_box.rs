use crate::error::{CounterError, Result};
use serde::Serialize;

/// A struct representing a bounding box.
///
/// An ideal bounding box is the smallest axis-aligned rectangle that totally contains a person
/// in the image. Detection models emit one box per detected person alongside a confidence score.
///
/// This project uses the standard convention of the left side of the image being x=0 and the top
/// of the image being y=0. Coordinates are in pixels of the original (unpadded) image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl BoundingBox {
    /// Checks if a box has valid parameters before constructing.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Result<Self> {
        if left > right {
            Err(CounterError::InvalidBoundingBox {
                lower_name: "left",
                upper_name: "right",
                lower: left,
                upper: right,
            })
        } else if top > bottom {
            Err(CounterError::InvalidBoundingBox {
                lower_name: "top",
                upper_name: "bottom",
                lower: top,
                upper: bottom,
            })
        } else {
            Ok(BoundingBox {
                left,
                top,
                right,
                bottom,
            })
        }
    }

    /// Builds a box from a center point and a size, the layout YOLO heads emit.
    pub fn from_center(cx: f32, cy: f32, width: f32, height: f32) -> Result<Self> {
        let half_w = width.abs() / 2.0;
        let half_h = height.abs() / 2.0;
        BoundingBox::new(cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    pub fn as_xyxy(&self) -> [f32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// Divides every coordinate by `ratio`, undoing a uniform resize.
    pub fn unscale(&self, ratio: f32) -> Self {
        BoundingBox {
            left: self.left / ratio,
            top: self.top / ratio,
            right: self.right / ratio,
            bottom: self.bottom / ratio,
        }
    }

    /// Clamps the box into `[0, width] x [0, height]`.
    ///
    /// Clamping both corners into the same range keeps `left <= right` and `top <= bottom`.
    pub fn clip(&self, width: f32, height: f32) -> Self {
        BoundingBox {
            left: self.left.clamp(0.0, width),
            top: self.top.clamp(0.0, height),
            right: self.right.clamp(0.0, width),
            bottom: self.bottom.clamp(0.0, height),
        }
    }

    pub fn intersection_area(&self, other: &BoundingBox) -> f32 {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        (right - left).max(0.0) * (bottom - top).max(0.0)
    }

    pub fn intersection_over_union(&self, other: &BoundingBox) -> f32 {
        let intersection = self.intersection_area(other);
        if intersection == 0.0 {
            return 0.0;
        }
        intersection / (self.area() + other.area() - intersection)
    }
}
