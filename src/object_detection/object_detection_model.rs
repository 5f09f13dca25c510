use crate::annotations::detection::Detection;
use crate::config::Device;
use crate::error::Result;
use image::RgbImage;

/// Defines a trait that all object detection models must follow.
///
/// This is the whole contract the counter relies on: give the model an image and a confidence
/// threshold, get back the boxes it believes contain people. Region proposal, scoring and
/// non-maximum suppression all happen behind this call.
pub trait ObjectDetectionModel {
    /// Returns every detection scoring at least `confidence`, in the model's own order.
    ///
    /// Box coordinates are pixels of `image`. Takes `&mut self` because ONNX Runtime sessions
    /// need exclusive access while running.
    fn run_inference(&mut self, image: &RgbImage, confidence: f32) -> Result<Vec<Detection>>;

    /// The device inference runs on, fixed when the model was loaded.
    fn device(&self) -> Device;
}
