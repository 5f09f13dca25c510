use crate::annotations::detection_result::DetectionResult;
use crate::config::{CounterConfig, Device};
use crate::error::{CounterError, Result};
use crate::image_utils::image_io::read_image_as_rgb8;
use crate::object_detection::object_detection_model::ObjectDetectionModel;
use crate::object_detection::yolov11_bounding_box::Yolov11BoundingBox;
use crate::visualization::annotator::Annotator;
use crate::visualization::font::load_font;
use image::RgbImage;
use log::info;
use std::path::Path;

/// Counts people in thermal images with a pretrained detection model.
///
/// The model, threshold and device are fixed at construction. Every call loads the image
/// afresh and keeps nothing between calls.
pub struct ThermalCrowdCounter<M: ObjectDetectionModel> {
    model: M,
    conf_threshold: f32,
    annotator: Annotator,
}

impl ThermalCrowdCounter<Yolov11BoundingBox> {
    /// Loads the ONNX model and label font described by `config`.
    pub fn from_config(config: &CounterConfig) -> Result<Self> {
        info!("Loading model from {:?}...", config.model_path);
        let model = Yolov11BoundingBox::new(config)?;
        let annotator = Annotator::new(load_font(config.font_path.as_deref())?);
        ThermalCrowdCounter::new(model, config.conf_threshold, annotator)
    }
}

impl<M: ObjectDetectionModel> ThermalCrowdCounter<M> {
    pub fn new(model: M, conf_threshold: f32, annotator: Annotator) -> Result<Self> {
        if !(0.0..=1.0).contains(&conf_threshold) {
            return Err(CounterError::InvalidThreshold(conf_threshold));
        }
        Ok(ThermalCrowdCounter {
            model,
            conf_threshold,
            annotator,
        })
    }

    pub fn conf_threshold(&self) -> f32 {
        self.conf_threshold
    }

    pub fn device(&self) -> Device {
        self.model.device()
    }

    /// Counts the people in the image at `image_path`.
    pub fn count(&mut self, image_path: &Path) -> Result<(usize, DetectionResult)> {
        let image = read_image_as_rgb8(image_path)?;
        let result = self.detect(&image)?;
        Ok((result.count(), result))
    }

    /// Returns a new image with every detection, its score and the total count drawn on it.
    pub fn visualize(&mut self, image_path: &Path) -> Result<RgbImage> {
        self.annotate(image_path).map(|(image, _)| image)
    }

    /// Runs inference once and returns both the annotated image and the detections.
    pub fn annotate(&mut self, image_path: &Path) -> Result<(RgbImage, DetectionResult)> {
        let mut image = read_image_as_rgb8(image_path)?;
        let result = self.detect(&image)?;
        self.annotator.draw_detections(&mut image, &result);
        Ok((image, result))
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn annotator(&self) -> &Annotator {
        &self.annotator
    }

    fn detect(&mut self, image: &RgbImage) -> Result<DetectionResult> {
        let mut detections = self.model.run_inference(image, self.conf_threshold)?;
        detections.retain(|det| det.confidence >= self.conf_threshold);
        Ok(DetectionResult::from_detections(&detections))
    }
}
