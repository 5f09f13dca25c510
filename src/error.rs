use std::path::PathBuf;

/// Errors raised while loading the model, running inference or driving the sample loop.
///
/// Failures from the underlying libraries are carried through untouched so the
/// caller sees the original diagnostic.
#[derive(thiserror::Error, Debug)]
pub enum CounterError {
    #[error(transparent)]
    Ort(#[from] ort::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Viewer(#[from] rerun::RecordingStreamError),

    #[error("Cannot choose from an empty sequence: no '*.{extension}' images in {dir:?}.")]
    EmptyImagePool { dir: PathBuf, extension: String },

    #[error(
        "Failed to create BoundingBox, value for {lower_name} > value for {upper_name} ({lower} > {upper})."
    )]
    InvalidBoundingBox {
        lower_name: &'static str,
        upper_name: &'static str,
        lower: f32,
        upper: f32,
    },

    #[error("Confidence threshold must lie in [0, 1], got {0}.")]
    InvalidThreshold(f32),

    #[error("Network input size must be positive, got {0}.")]
    InvalidInputSize(u32),

    #[error("Unexpected model output shape {shape:?}, expected [1, 4 + classes, candidates].")]
    UnexpectedOutputShape { shape: Vec<usize> },

    #[error("Failed to parse font file {path:?}.")]
    Font { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CounterError>;
