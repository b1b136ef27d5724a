use tracing::{debug, error, info};

use crate::api::{BatchReport, crop_directory};
use crate::config::API_KEY_URL;
use crate::error::{Error, Result};
use crate::types::AppleDisplay;

use super::args::CropArgs;

pub fn run_crop(args: &CropArgs) -> Result<BatchReport> {
    info!("=== Crop Previews for Apple App Store ===");

    let device = AppleDisplay::resolve(args.size.as_deref());
    if let Some(key) = args.size.as_deref() {
        if AppleDisplay::from_key(key).is_none() {
            debug!("Unknown size {:?}, using {}", key, device.key());
        }
    }
    let target = device.dimensions();
    info!("Target: {}px ({})", target, device);

    let report = crop_directory(&args.input_dir, &args.output_dir, target)?;

    let mark = if report.processed > 0 { "✓" } else { "✗" };
    info!(
        "{} Processed {}/{} image(s)",
        mark, report.processed, report.total
    );
    if report.all_failed() {
        return Err(Error::NothingProcessed {
            total: report.total,
        });
    }

    info!("Output directory: {:?}", args.output_dir);
    for other in AppleDisplay::ALL.iter().filter(|d| **d != device) {
        info!("To use {} dimensions instead:", other);
        info!("  crop-for-apple {}", other.key());
    }
    Ok(report)
}

/// Log a fatal error together with a hint on how to fix it.
pub fn report_fatal(err: &Error) {
    error!("Error: {}", err);
    match err {
        Error::InputDirMissing(_) => info!("Generate the preview images first."),
        Error::MissingCredential { var } => {
            info!("To set it:");
            info!("  export {}=\"your-api-key\"", var);
            info!("Get your API key from: {}", API_KEY_URL);
        }
        Error::NoIcon { candidates } => {
            info!("Expected locations:");
            for path in candidates {
                info!("  - {}", path.display());
            }
        }
        Error::NoModelAvailable => {
            info!("Please check your API key has access to image generation models.")
        }
        e if e.is_generation_failure() => {
            info!("✗ Failed to generate feature graphic");
            info!("Try running the tool again or check your API key.");
        }
        _ => {}
    }
}

#[cfg(feature = "generate")]
pub use generate::{read_api_key, run_feature_graphic, run_feature_graphic_with};

#[cfg(feature = "generate")]
mod generate {
    use tracing::info;

    use crate::api::{FeatureGraphic, generate_feature_graphic};
    use crate::cli::args::FeatureGraphicArgs;
    use crate::config::{API_KEY_VAR, FEATURE_GRAPHIC_FILE, ICON_CANDIDATES, MODEL_CANDIDATES};
    use crate::error::{Error, Result};
    use crate::genai::{ContentGenerator, GeminiClient, select_model};
    use crate::io::IconCandidate;
    use crate::types::FEATURE_GRAPHIC;

    /// Blank or missing values both count as absent.
    pub fn read_api_key(value: Option<String>) -> Result<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingCredential { var: API_KEY_VAR })
    }

    pub fn run_feature_graphic(args: &FeatureGraphicArgs) -> Result<FeatureGraphic> {
        info!("=== Google Play Feature Graphic Generator ===");

        let api_key = read_api_key(std::env::var(API_KEY_VAR).ok())?;
        let client = GeminiClient::new(api_key)?;
        run_feature_graphic_with(&client, args)
    }

    /// Everything after the credential check, against any generator.
    pub fn run_feature_graphic_with<G: ContentGenerator + ?Sized>(
        generator: &G,
        args: &FeatureGraphicArgs,
    ) -> Result<FeatureGraphic> {
        let icon = IconCandidate::in_dir(&args.assets_dir, ICON_CANDIDATES);
        let icon_path = icon.require()?;
        info!(
            "Using icon: {}",
            icon_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        );

        std::fs::create_dir_all(&args.output_dir)?;
        info!("Output: {:?}", args.output_dir);

        let model = select_model(generator, MODEL_CANDIDATES)?;

        info!("Generating feature graphic...");
        let output = args.output_dir.join(FEATURE_GRAPHIC_FILE);
        let graphic =
            generate_feature_graphic(generator, model, icon_path, FEATURE_GRAPHIC, &output)?;

        info!("✓ Feature graphic generated successfully!");
        info!("Output: {}", graphic.path.display());
        info!("Dimensions: {}px", FEATURE_GRAPHIC);
        info!("Ready for Google Play Store!");
        Ok(graphic)
    }
}
