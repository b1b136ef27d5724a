//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, resize and HTTP errors, and provides semantic
//! variants for the fatal preconditions of both pipelines.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Input directory not found: {}", .0.display())]
    InputDirMissing(PathBuf),

    #[error("No PNG images found in: {}", .0.display())]
    NoImages(PathBuf),

    #[error("No images could be processed ({total} attempted)")]
    NothingProcessed { total: usize },

    #[error("{var} environment variable not set")]
    MissingCredential { var: &'static str },

    #[error("No icon file found")]
    NoIcon { candidates: Vec<PathBuf> },

    #[error("No image generation model available")]
    NoModelAvailable,

    #[error("No image in response ({parts} part(s) received)")]
    NoImageInResponse { parts: usize },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[cfg(feature = "generate")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "generate")]
    #[error("Invalid inline image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }

    /// Failures of the generation round trip itself, where retrying may help.
    pub fn is_generation_failure(&self) -> bool {
        match self {
            Error::NoImageInResponse { .. } | Error::Api { .. } | Error::Image(_) => true,
            #[cfg(feature = "generate")]
            Error::Http(_) | Error::Decode(_) => true,
            _ => false,
        }
    }
}
