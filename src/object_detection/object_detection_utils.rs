use crate::annotations::detection::Detection;
use std::cmp::Ordering;

/// Non maxmimum suppression is a way of removing duplicate detections.
///
/// Survivors come back sorted by descending confidence. Boxes of different classes never
/// suppress each other.
pub fn non_maximum_suppression(mut detections: Vec<Detection>, iou_threshold: f32) -> Vec<Detection> {
    detections.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    let mut detections_to_remove: Vec<bool> = vec![false; detections.len()];
    for (current_index, current_det) in detections.iter().enumerate() {
        if detections_to_remove[current_index] {
            continue;
        }
        for (other_index, other_det) in detections[current_index + 1..].iter().enumerate() {
            if detections_to_remove[current_index + other_index + 1] {
                continue;
            }
            if current_det.class_id != other_det.class_id {
                continue;
            }
            let iou = current_det
                .annotation
                .intersection_over_union(&other_det.annotation);
            if iou > iou_threshold {
                detections_to_remove[current_index + other_index + 1] = true;
            }
        }
    }
    let mut drop_iter = detections_to_remove.into_iter();
    detections.retain(|_| !drop_iter.next().unwrap_or(false));
    detections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations::bounding_box::BoundingBox;

    fn det(left: f32, top: f32, right: f32, bottom: f32, class_id: usize, confidence: f32) -> Detection {
        Detection {
            annotation: BoundingBox::new(left, top, right, bottom).unwrap(),
            confidence,
            class_id,
        }
    }

    #[test]
    fn nms_no_overlap() {
        let dets = vec![det(0., 0., 1., 1., 0, 0.6), det(2., 2., 3., 3., 0, 0.6)];
        let nms_result = non_maximum_suppression(dets.clone(), 0.5);
        assert_eq!(dets, nms_result);
    }

    #[test]
    fn nms_standard_usage() {
        let dets = vec![
            det(0., 0., 4., 4., 0, 0.6),
            det(0., 0., 5., 5., 0, 0.55),
            det(6., 6., 10., 10., 0, 0.75),
        ];
        let nms_result = non_maximum_suppression(dets, 0.5);
        let true_dets = vec![det(6., 6., 10., 10., 0, 0.75), det(0., 0., 4., 4., 0, 0.6)];
        assert_eq!(true_dets, nms_result);
    }

    #[test]
    fn nms_overlap_but_different_classes() {
        let dets = vec![
            det(0., 0., 4.5, 4.5, 0, 0.6),
            det(0., 0., 5., 5., 1, 0.55),
            det(0.5, 0.5, 4., 4., 0, 0.8),
            det(6., 6., 10., 10., 0, 0.75),
        ];
        let nms_result = non_maximum_suppression(dets, 0.5);
        let true_dets = vec![
            det(0.5, 0.5, 4., 4., 0, 0.8),
            det(6., 6., 10., 10., 0, 0.75),
            det(0., 0., 5., 5., 1, 0.55),
        ];
        assert_eq!(true_dets, nms_result);
    }

    #[test]
    fn suppressed_boxes_do_not_suppress_others() {
        // b overlaps a and c, a and c barely overlap. Once a removes b, c must survive.
        let dets = vec![
            det(0., 0., 10., 10., 0, 0.9),
            det(3., 0., 13., 10., 0, 0.8),
            det(6., 0., 16., 10., 0, 0.7),
        ];
        let nms_result = non_maximum_suppression(dets, 0.5);
        assert_eq!(
            nms_result,
            vec![det(0., 0., 10., 10., 0, 0.9), det(6., 0., 16., 10., 0, 0.7)]
        );
    }
}
