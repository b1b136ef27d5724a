use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

fn is_png(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext == "png")
}

/// PNG files directly inside `input_dir`, sorted by path.
pub fn list_png_images(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(Error::InputDirMissing(input_dir.to_path_buf()));
    }

    let mut images = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if is_png(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

/// Ordered list of paths; the first one that exists wins.
#[derive(Debug, Clone)]
pub struct IconCandidate {
    paths: Vec<PathBuf>,
}

impl IconCandidate {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn in_dir(dir: &Path, names: &[&str]) -> Self {
        Self::new(names.iter().map(|name| dir.join(name)).collect())
    }

    pub fn select(&self) -> Option<&Path> {
        self.paths.iter().find(|p| p.is_file()).map(PathBuf::as_path)
    }

    pub fn require(&self) -> Result<&Path> {
        self.select().ok_or_else(|| Error::NoIcon {
            candidates: self.paths.clone(),
        })
    }
}
