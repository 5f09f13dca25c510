use crate::error::{CounterError, Result};
use ab_glyph::FontArc;
use log::info;
use std::path::{Path, PathBuf};

/// DejaVu Sans, shipped with the crate so labels render on hosts without system fonts.
const EMBEDDED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const EMBEDDED_FONT_PATH: &str = "assets/fonts/DejaVuSans.ttf";

pub fn embedded_font() -> Result<FontArc> {
    FontArc::try_from_slice(EMBEDDED_FONT).map_err(|_| CounterError::Font {
        path: PathBuf::from(EMBEDDED_FONT_PATH),
    })
}

pub fn read_font(path: &Path) -> Result<FontArc> {
    let data = std::fs::read(path)?;
    FontArc::try_from_vec(data).map_err(|_| CounterError::Font {
        path: path.to_path_buf(),
    })
}

/// Loads the label font: the configured file when given, the embedded one otherwise.
pub fn load_font(configured: Option<&Path>) -> Result<FontArc> {
    match configured {
        Some(path) => {
            let font = read_font(path)?;
            info!("Using label font {:?}", path);
            Ok(font)
        }
        None => embedded_font(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_font_parses() {
        assert!(load_font(None).is_ok());
    }

    #[test]
    fn configured_font_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.ttf");
        assert!(load_font(Some(path.as_path())).is_err());
    }

    #[test]
    fn configured_font_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(
            load_font(Some(path.as_path())),
            Err(CounterError::Font { .. })
        ));
    }

    #[test]
    fn configured_font_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copy.ttf");
        std::fs::write(&path, EMBEDDED_FONT).unwrap();
        assert!(load_font(Some(path.as_path())).is_ok());
    }
}
