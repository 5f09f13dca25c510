pub mod bounding_box;
pub mod detection;
pub mod detection_result;
