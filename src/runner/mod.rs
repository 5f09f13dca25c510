pub mod display;
pub mod prompt;
pub mod sample_pool;

use crate::counter::ThermalCrowdCounter;
use crate::error::Result;
use crate::object_detection::object_detection_model::ObjectDetectionModel;
use display::ResultSink;
use log::info;
use prompt::{PromptAnswer, ask};
use rand::Rng;
use sample_pool::SamplePool;
use std::io::{BufRead, Write};

/// Draws random sample images, shows their annotated detections and waits for the user.
///
/// One inference runs per iteration; the count shown in the title is the one drawn on the image.
pub struct SampleRunner<M: ObjectDetectionModel, S: ResultSink, R: Rng> {
    counter: ThermalCrowdCounter<M>,
    pool: SamplePool,
    sink: S,
    rng: R,
}

impl<M: ObjectDetectionModel, S: ResultSink, R: Rng> SampleRunner<M, S, R> {
    pub fn new(counter: ThermalCrowdCounter<M>, pool: SamplePool, sink: S, rng: R) -> Self {
        SampleRunner {
            counter,
            pool,
            sink,
            rng,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Loops until the user answers `q` or input ends. Returns how many images were shown.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<usize> {
        self.pool.ensure_non_empty()?;
        let mut processed = 0;
        loop {
            let image_path = self.pool.choose(&mut self.rng)?.to_path_buf();
            let name = image_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| image_path.display().to_string());
            writeln!(output, "Selected image: {}", name)?;

            info!("Running inference on {:?}", image_path);
            let (annotated, result) = self.counter.annotate(&image_path)?;
            let count = result.count();
            let titled = self
                .counter
                .annotator()
                .with_title(&annotated, &[name.clone(), format!("People Count: {}", count)]);
            self.sink.present(&name, &titled)?;
            processed += 1;
            writeln!(output, "Processed image with {} people detected", count)?;

            if ask(input, output)? == PromptAnswer::Quit {
                return Ok(processed);
            }
        }
    }
}
