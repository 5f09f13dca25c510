use crate::annotations::detection::Detection;
use serde::Serialize;

/// The per-image output of the counter.
///
/// `boxes[i]` and `scores[i]` describe the same detection, and both sequences always have
/// exactly `count()` entries. Order is the order the model returned them in.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DetectionResult {
    count: usize,
    boxes: Vec<[f32; 4]>,
    scores: Vec<f32>,
}

impl DetectionResult {
    pub fn from_detections(detections: &[Detection]) -> Self {
        let (boxes, scores): (Vec<[f32; 4]>, Vec<f32>) = detections
            .iter()
            .map(|det| (det.annotation.as_xyxy(), det.confidence))
            .unzip();
        DetectionResult {
            count: boxes.len(),
            boxes,
            scores,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Boxes as `[x1, y1, x2, y2]` pixel coordinates.
    pub fn boxes(&self) -> &[[f32; 4]] {
        &self.boxes
    }

    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::bounding_box::BoundingBox;

    #[test]
    fn empty_detections_give_empty_result() {
        let result = DetectionResult::from_detections(&[]);
        assert_eq!(result.count(), 0);
        assert!(result.boxes().is_empty());
        assert!(result.scores().is_empty());
        assert_eq!(result, DetectionResult::default());
    }

    #[test]
    fn boxes_and_scores_stay_index_aligned() {
        let dets = vec![
            Detection {
                annotation: BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap(),
                confidence: 0.3,
                class_id: 0,
            },
            Detection {
                annotation: BoundingBox::new(5.0, 5.0, 9.0, 9.0).unwrap(),
                confidence: 0.8,
                class_id: 0,
            },
        ];
        let result = DetectionResult::from_detections(&dets);
        assert_eq!(result.count(), 2);
        assert_eq!(result.boxes(), &[[0.0, 0.0, 1.0, 1.0], [5.0, 5.0, 9.0, 9.0]]);
        assert_eq!(result.scores(), &[0.3, 0.8]);
    }

    #[test]
    fn serializes_to_json() {
        let dets = vec![Detection {
            annotation: BoundingBox::new(1.0, 2.0, 3.0, 4.0).unwrap(),
            confidence: 0.5,
            class_id: 0,
        }];
        let json = serde_json::to_value(DetectionResult::from_detections(&dets)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"count": 1, "boxes": [[1.0, 2.0, 3.0, 4.0]], "scores": [0.5]})
        );
    }
}
