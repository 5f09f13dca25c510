use crate::error::{CounterError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The fixed list of sample images the runner draws from.
#[derive(Debug)]
pub struct SamplePool {
    dir: PathBuf,
    extension: String,
    images: Vec<PathBuf>,
}

impl SamplePool {
    /// Lists the files directly inside `dir` whose extension matches, ignoring case.
    ///
    /// Paths are sorted so the pool order does not depend on the filesystem.
    pub fn from_dir(dir: &Path, extension: &str) -> Result<Self> {
        let mut images = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            let matches = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if entry.file_type().is_file() && matches {
                images.push(entry.into_path());
            }
        }
        images.sort();
        Ok(SamplePool {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
            images,
        })
    }

    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Fails with `EmptyImagePool` when there is nothing to sample.
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(self.empty_error());
        }
        Ok(())
    }

    /// Picks one image uniformly at random; repeats across calls are expected.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Result<&Path> {
        self.images
            .choose(rng)
            .map(PathBuf::as_path)
            .ok_or_else(|| self.empty_error())
    }

    fn empty_error(&self) -> CounterError {
        CounterError::EmptyImagePool {
            dir: self.dir.clone(),
            extension: self.extension.clone(),
        }
    }
}
