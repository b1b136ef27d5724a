//! Hard-coded defaults for both tools. Directories are relative to the working
//! directory and can be overridden on the command line.
use crate::types::TargetDimensions;

pub const DEFAULT_INPUT_DIR: &str = "previews-ai";
pub const DEFAULT_APPLE_OUTPUT_DIR: &str = "previews-apple";

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_FEATURE_OUTPUT_DIR: &str = "feature-graphic";
pub const FEATURE_GRAPHIC_FILE: &str = "feature-graphic.png";

/// Icon file names under the assets directory, in order of preference.
pub const ICON_CANDIDATES: &[&str] = &["icon.png", "adaptive-icon.png"];

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const API_KEY_URL: &str = "https://aistudio.google.com/app/apikey";
pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Image generation models, in order of preference.
pub const MODEL_CANDIDATES: &[&str] = &["gemini-3-pro-image-preview", "gemini-2.5-flash-image"];

pub const PROBE_PROMPT: &str = "Say hello";

pub const BRAND_COLOR: &str = "#E0F7EF";
pub const BRAND_COLOR_NAME: &str = "light mint green";

/// Builds the banner prompt sent alongside the icon.
pub fn feature_graphic_prompt(size: TargetDimensions) -> String {
    format!(
        "Generate a simple, minimal Google Play Store feature graphic banner.

SPECIFICATIONS:
- Dimensions: {width}x{height} pixels (wide horizontal banner)

DESIGN:
- Place the app icon I'm providing a little to the right of the center of the image
- Background: Clean, solid using {color} ({color_name})
- NO text, NO words, NO taglines - just the icon
- Minimalist and clean aesthetic
- The icon should be sized appropriately (not too large, not too small)
- Keep it simple and elegant

STYLE:
- Simple, understated, professional
- Not flashy or busy
- Calm and clean
- Premium minimal feel

Generate a clean, simple banner with just the icon centered on the {color_name} background.",
        width = size.width,
        height = size.height,
        color = BRAND_COLOR,
        color_name = BRAND_COLOR_NAME,
    )
}
