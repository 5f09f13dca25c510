//! Counts people in thermal images with a pretrained YOLO model exported to ONNX, and renders
//! the detections for visual inspection.

pub mod annotations;
pub mod config;
pub mod counter;
pub mod error;
pub mod image_utils;
pub mod object_detection;
pub mod runner;
pub mod visualization;

pub use crate::annotations::detection_result::DetectionResult;
pub use crate::config::{CounterConfig, Device, DeviceSelection, RunnerConfig};
pub use crate::counter::ThermalCrowdCounter;
pub use crate::error::{CounterError, Result};
