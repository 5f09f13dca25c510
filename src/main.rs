use anyhow::Context;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use thermal_crowd_counter::object_detection::yolov11_bounding_box::Yolov11BoundingBox;
use thermal_crowd_counter::runner::SampleRunner;
use thermal_crowd_counter::runner::display::{FileSink, ResultSink, ViewerSink};
use thermal_crowd_counter::runner::sample_pool::SamplePool;
use thermal_crowd_counter::{CounterConfig, DeviceSelection, RunnerConfig, ThermalCrowdCounter};

/// Count people in thermal images and review the detections one random sample at a time.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// ONNX model exported from the trained detector
    #[arg(long, default_value = "models/weights/best.onnx")]
    model: PathBuf,

    /// Directory of sample images
    #[arg(long, default_value = "data/sample_images")]
    images: PathBuf,

    /// Extension of the sample images
    #[arg(long, default_value = "jpg")]
    extension: String,

    /// Where numbered results are saved in headless mode
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Confidence threshold
    #[arg(long, default_value_t = 0.25)]
    conf: f32,

    /// IoU threshold for non-maximum suppression
    #[arg(long, default_value_t = 0.7)]
    iou: f32,

    /// Network input size
    #[arg(long, default_value_t = 640)]
    input_size: u32,

    #[arg(long, value_enum, default_value_t = DeviceSelection::Auto)]
    device: DeviceSelection,

    /// CUDA device id
    #[arg(long, default_value_t = 0)]
    device_id: i32,

    /// TrueType font for labels
    #[arg(long)]
    font: Option<PathBuf>,

    /// Seed for sample selection
    #[arg(long)]
    seed: Option<u64>,

    /// Count a single image, print the result as JSON and exit
    #[arg(long)]
    image: Option<PathBuf>,

    /// Any non-empty value saves results to files instead of opening the viewer
    #[arg(long, env = "DISPLAY_BACKEND")]
    display_backend: Option<String>,
}

impl Args {
    fn counter_config(&self) -> CounterConfig {
        CounterConfig {
            model_path: self.model.clone(),
            conf_threshold: self.conf,
            iou_threshold: self.iou,
            input_size: self.input_size,
            device: self.device,
            device_id: self.device_id,
            font_path: self.font.clone(),
        }
    }

    fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            images_dir: self.images.clone(),
            extension: self.extension.clone(),
            output_dir: self.output.clone(),
            headless: self
                .display_backend
                .as_deref()
                .is_some_and(|backend| !backend.is_empty()),
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let counter_config = args.counter_config();
    let mut counter = ThermalCrowdCounter::from_config(&counter_config)
        .with_context(|| format!("failed to load model {:?}", counter_config.model_path))?;
    info!("Model ready on {}", counter.device());

    if let Some(image) = &args.image {
        let (_, result) = counter.count(image)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let runner_config = args.runner_config();
    let pool = SamplePool::from_dir(&runner_config.images_dir, &runner_config.extension)?;
    pool.ensure_non_empty()?;
    info!("Found {} sample images in {:?}", pool.len(), runner_config.images_dir);
    if runner_config.headless {
        let sink = FileSink::new(runner_config.output_dir.clone());
        run_loop(counter, pool, sink, runner_config.seed)
    } else {
        let sink = ViewerSink::new("thermal-crowd-counter");
        run_loop(counter, pool, sink, runner_config.seed)
    }
}

fn run_loop<S: ResultSink>(
    counter: ThermalCrowdCounter<Yolov11BoundingBox>,
    pool: SamplePool,
    sink: S,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut runner = SampleRunner::new(counter, pool, sink, rng);
    let processed = runner.run(&mut io::stdin().lock(), &mut io::stdout())?;
    info!("Reviewed {} images", processed);
    Ok(())
}
