use crate::config::{Device, DeviceSelection};
use log::info;
use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};
use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use std::path::Path;

/// An onnxruntime inference session.
///
/// All of the object detection classes in this project are just wrappers
/// around an ONNX inference session that handles running the model on
/// hardware. The device is decided once, here, and never re-checked.
pub struct OrtInferenceSession {
    pub session: Session,
    device: Device,
}

impl OrtInferenceSession {
    pub fn new(model_path: &Path, selection: DeviceSelection, device_id: i32) -> ort::Result<Self> {
        let device = resolve_device(selection, device_id)?;
        let builder = Session::builder()?.with_optimization_level(GraphOptimizationLevel::Level3)?;
        let builder = match device {
            Device::Cpu => builder,
            Device::Cuda(id) => builder.with_execution_providers([CUDAExecutionProvider::default()
                .with_device_id(id)
                .build()
                .error_on_failure()])?,
        };
        let session = builder.commit_from_file(model_path)?;
        info!("Loaded {:?} on {}", model_path, device);
        Ok(Self { session, device })
    }

    pub fn device(&self) -> Device {
        self.device
    }
}

/// Turns a requested device into a concrete one.
///
/// An explicit CUDA request is honored as-is; if CUDA turns out to be missing, registering the
/// execution provider fails and that error reaches the caller.
pub fn resolve_device(selection: DeviceSelection, device_id: i32) -> ort::Result<Device> {
    match selection {
        DeviceSelection::Cpu => Ok(Device::Cpu),
        DeviceSelection::Cuda => Ok(Device::Cuda(device_id)),
        DeviceSelection::Auto => {
            if CUDAExecutionProvider::default().is_available()? {
                Ok(Device::Cuda(device_id))
            } else {
                Ok(Device::Cpu)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_selections_skip_availability_check() {
        assert_eq!(resolve_device(DeviceSelection::Cpu, 3).unwrap(), Device::Cpu);
        assert_eq!(resolve_device(DeviceSelection::Cuda, 1).unwrap(), Device::Cuda(1));
    }
}
