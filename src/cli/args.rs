use clap::Parser;
use std::path::PathBuf;

use crate::config::{
    DEFAULT_APPLE_OUTPUT_DIR, DEFAULT_ASSETS_DIR, DEFAULT_FEATURE_OUTPUT_DIR, DEFAULT_INPUT_DIR,
};

#[derive(Parser, Debug)]
#[command(
    name = "crop-for-apple",
    version,
    about = "Crop preview images to Apple App Store dimensions"
)]
pub struct CropArgs {
    /// Display size key: 6.7 (1284x2778, default) or 6.5 (1242x2688).
    /// Unknown values fall back to the default.
    pub size: Option<String>,

    /// Directory containing the source PNG previews
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory receiving the cropped PNGs (created if absent)
    #[arg(long, default_value = DEFAULT_APPLE_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "feature-graphic",
    version,
    about = "Generate a Google Play feature graphic from the app icon"
)]
pub struct FeatureGraphicArgs {
    /// Directory searched for icon.png, then adaptive-icon.png
    #[arg(long, default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// Directory receiving feature-graphic.png (created if absent)
    #[arg(long, default_value = DEFAULT_FEATURE_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
