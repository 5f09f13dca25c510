use crate::error::Result;
use image::RgbImage;
use log::info;
use std::path::PathBuf;

/// Where the runner sends each titled result.
pub trait ResultSink {
    /// Shows or stores one result. Returns the written path when the sink persists to disk.
    fn present(&mut self, title: &str, image: &RgbImage) -> Result<Option<PathBuf>>;
}

/// Headless sink: writes `result_001.png`, `result_002.png`, ... into one directory.
pub struct FileSink {
    output_dir: PathBuf,
    saved: u32,
}

impl FileSink {
    pub fn new(output_dir: PathBuf) -> Self {
        FileSink {
            output_dir,
            saved: 0,
        }
    }

    pub fn saved(&self) -> u32 {
        self.saved
    }
}

impl ResultSink for FileSink {
    fn present(&mut self, _title: &str, image: &RgbImage) -> Result<Option<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)?;
        let output_path = self
            .output_dir
            .join(format!("result_{:03}.png", self.saved + 1));
        image.save(&output_path)?;
        self.saved += 1;
        info!("Saved visualization to {:?}", output_path);
        Ok(Some(output_path))
    }
}

/// Interactive sink: streams each result to a Rerun viewer.
///
/// The viewer is spawned with the first result, so a run that fails earlier never opens it.
pub struct ViewerSink {
    application_id: String,
    recording: Option<rerun::RecordingStream>,
    shown: u32,
}

impl ViewerSink {
    pub fn new(application_id: &str) -> Self {
        ViewerSink {
            application_id: application_id.to_string(),
            recording: None,
            shown: 0,
        }
    }

    pub fn is_spawned(&self) -> bool {
        self.recording.is_some()
    }

    fn recording(&mut self) -> Result<&rerun::RecordingStream> {
        let recording = match self.recording.take() {
            Some(recording) => recording,
            None => {
                info!("Spawning viewer for {}", self.application_id);
                rerun::RecordingStreamBuilder::new(self.application_id.as_str()).spawn()?
            }
        };
        Ok(self.recording.insert(recording))
    }
}

impl ResultSink for ViewerSink {
    fn present(&mut self, title: &str, image: &RgbImage) -> Result<Option<PathBuf>> {
        let entity = format!("results/{:03}", self.shown + 1);
        self.recording()?.log(
            entity,
            &rerun::Image::from_elements(
                image.as_raw().as_slice(),
                [image.width(), image.height()],
                rerun::ColorModel::RGB,
            ),
        )?;
        self.shown += 1;
        info!("Sent {} to the viewer", title);
        Ok(None)
    }
}
