use std::fmt;
use std::path::PathBuf;

/// Which execution device to request from ONNX Runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DeviceSelection {
    /// Use CUDA when ONNX Runtime reports it as available, otherwise the CPU.
    #[default]
    Auto,
    Cpu,
    Cuda,
}

/// The device an inference session was actually built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Cuda(i32),
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda(id) => write!(f, "cuda:{}", id),
        }
    }
}

/// Immutable settings for a [`crate::counter::ThermalCrowdCounter`].
#[derive(Clone, Debug, PartialEq)]
pub struct CounterConfig {
    pub model_path: PathBuf,
    /// Minimum score for a detection to be reported, in [0, 1].
    pub conf_threshold: f32,
    /// Overlap above which the weaker of two same-class boxes is suppressed.
    pub iou_threshold: f32,
    /// Square network input side in pixels.
    pub input_size: u32,
    pub device: DeviceSelection,
    pub device_id: i32,
    /// TrueType font used for score and count labels. `None` falls back to system fonts.
    pub font_path: Option<PathBuf>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            model_path: PathBuf::from("models/weights/best.onnx"),
            conf_threshold: 0.25,
            iou_threshold: 0.7,
            input_size: 640,
            device: DeviceSelection::Auto,
            device_id: 0,
            font_path: None,
        }
    }
}

/// Settings for the interactive sample loop.
#[derive(Clone, Debug, PartialEq)]
pub struct RunnerConfig {
    pub images_dir: PathBuf,
    /// File extension of sample images, without the leading dot.
    pub extension: String,
    /// Where numbered results are written in headless mode.
    pub output_dir: PathBuf,
    /// Save results to files instead of showing them in the viewer.
    pub headless: bool,
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            images_dir: PathBuf::from("data/sample_images"),
            extension: "jpg".to_string(),
            output_dir: PathBuf::from("output"),
            headless: false,
            seed: None,
        }
    }
}
