use crate::annotations::bounding_box::BoundingBox;
use crate::annotations::detection::Detection;
use crate::config::{CounterConfig, Device};
use crate::error::{CounterError, Result};
use crate::image_utils::image_conversion::convert_rgb_image_to_owned_array;
use crate::image_utils::padding::letterbox;
use crate::object_detection::object_detection_model::ObjectDetectionModel;
use crate::object_detection::object_detection_utils::non_maximum_suppression;
use crate::object_detection::ort_inference_session::OrtInferenceSession;
use image::RgbImage;
use log::debug;
use ndarray::{ArrayView2, Axis, Ix3};
use ort::inputs;
use ort::session::SessionOutputs;
use ort::value::TensorRef;

/// A YOLO detection head exported to ONNX (`images` in, `output0` out).
///
/// The output tensor is `[1, 4 + classes, candidates]`, each candidate holding a center-format
/// box in network-input pixels followed by one score per class.
pub struct Yolov11BoundingBox {
    ort_session: OrtInferenceSession,
    input_size: u32,
    iou_threshold: f32,
}

impl Yolov11BoundingBox {
    pub fn new(config: &CounterConfig) -> Result<Self> {
        if config.input_size == 0 {
            return Err(CounterError::InvalidInputSize(config.input_size));
        }
        let ort_session =
            OrtInferenceSession::new(&config.model_path, config.device, config.device_id)?;
        Ok(Yolov11BoundingBox {
            ort_session,
            input_size: config.input_size,
            iou_threshold: config.iou_threshold,
        })
    }
}

impl ObjectDetectionModel for Yolov11BoundingBox {
    fn run_inference(&mut self, image: &RgbImage, confidence: f32) -> Result<Vec<Detection>> {
        let letterboxed = letterbox(image, self.input_size);
        let input_array = convert_rgb_image_to_owned_array(&letterboxed.image);
        let outputs: SessionOutputs = self
            .ort_session
            .session
            .run(inputs!["images" => TensorRef::from_array_view(&input_array)?])?;
        let output = outputs["output0"].try_extract_array::<f32>()?;
        let shape = output.shape().to_vec();
        let output = output
            .into_dimensionality::<Ix3>()
            .map_err(|_| CounterError::UnexpectedOutputShape { shape: shape.clone() })?;
        if output.shape()[0] != 1 || output.shape()[1] < 5 {
            return Err(CounterError::UnexpectedOutputShape { shape });
        }
        // (4 + classes, candidates) -> one row per candidate.
        let predictions = output.index_axis_move(Axis(0), 0).reversed_axes();
        let candidates = decode_predictions(
            predictions,
            confidence,
            letterboxed.ratio,
            image.width(),
            image.height(),
        )?;
        debug!("{} candidates above {:.2} before NMS", candidates.len(), confidence);
        Ok(non_maximum_suppression(candidates, self.iou_threshold))
    }

    fn device(&self) -> Device {
        self.ort_session.device()
    }
}

/// Turns raw prediction rows into detections in original-image pixels.
///
/// Each row is `[cx, cy, w, h, score_0, .., score_n]`. Only the best class of a row is kept,
/// and only when its score reaches `confidence`.
pub fn decode_predictions(
    predictions: ArrayView2<f32>,
    confidence: f32,
    ratio: f32,
    image_width: u32,
    image_height: u32,
) -> Result<Vec<Detection>> {
    let mut detections: Vec<Detection> = Vec::new();
    for row in predictions.axis_iter(Axis(0)) {
        let best = row
            .iter()
            .skip(4) // skips bounding box coords.
            .copied()
            .enumerate()
            .reduce(|accum, row| if row.1 > accum.1 { row } else { accum });
        let Some((class_id, prob)) = best else {
            continue;
        };
        if prob < confidence {
            continue;
        }
        let bbox = BoundingBox::from_center(row[0], row[1], row[2], row[3])?
            .unscale(ratio)
            .clip(image_width as f32, image_height as f32);
        detections.push(Detection {
            annotation: bbox,
            confidence: prob,
            class_id,
        });
    }
    Ok(detections)
}
