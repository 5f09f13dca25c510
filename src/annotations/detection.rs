use crate::annotations::bounding_box::BoundingBox;
use serde::Serialize;

/// A detection is what is produced as output from an object detection model.
///
/// A detection is a bounding box combined with a confidence score: a probability value that
/// encodes the model's belief that the box contains a person.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Detection {
    pub annotation: BoundingBox,
    pub confidence: f32,
    pub class_id: usize,
}
