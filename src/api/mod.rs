//! High-level, ergonomic library API: crop a directory of screenshots to an App
//! Store size, and turn an app icon into a Google Play feature graphic. Prefer
//! these entrypoints over the low-level `core` transforms when integrating.
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage};
use tracing::{info, warn};

use crate::core::processing::crop::center_crop_to_target;
use crate::core::processing::fit::fit_to_exact_size;
use crate::core::processing::flatten::flatten_onto_white;
use crate::error::{Error, Result};
use crate::io::{list_png_images, load_image, load_image_from_memory, save_png};
use crate::types::TargetDimensions;

#[cfg(feature = "generate")]
pub use generate::{FeatureGraphic, generate_feature_graphic};

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
    pub total: usize,
}

impl BatchReport {
    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.processed == 0
    }
}

/// Outcome of cropping one file.
#[derive(Debug, Clone, Copy)]
pub struct CropOutcome {
    pub original: (u32, u32),
    pub bytes_written: u64,
}

fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Crop one image file to `target` and write the result as PNG to `output`.
pub fn crop_file(input: &Path, output: &Path, target: TargetDimensions) -> Result<CropOutcome> {
    let image = load_image(input)?;
    let original = (image.width(), image.height());
    info!("  Original: {}x{}", original.0, original.1);

    let cropped = center_crop_to_target(&image, target)?;
    let bytes_written = save_png(&cropped, output)?;
    info!(
        "  Cropped:  {} ({:.0} KB)",
        target,
        kilobytes(bytes_written)
    );

    Ok(CropOutcome {
        original,
        bytes_written,
    })
}

/// Crop every PNG in `input_dir` into `output_dir` under the same file name,
/// in sorted order. Per-file failures are logged and counted; existing outputs
/// are overwritten and inputs are never touched.
pub fn crop_directory(
    input_dir: &Path,
    output_dir: &Path,
    target: TargetDimensions,
) -> Result<BatchReport> {
    let images = list_png_images(input_dir)?;
    if images.is_empty() {
        return Err(Error::NoImages(input_dir.to_path_buf()));
    }
    info!("Found {} image(s) in {:?}", images.len(), input_dir);

    std::fs::create_dir_all(output_dir)?;
    info!("Output: {:?}", output_dir);

    let mut report = BatchReport {
        total: images.len(),
        ..Default::default()
    };

    for input_path in &images {
        let Some(file_name) = input_path.file_name() else {
            continue;
        };
        info!("Processing: {}", file_name.to_string_lossy());
        let output_path = output_dir.join(file_name);

        match crop_file(input_path, &output_path, target) {
            Ok(outcome) => {
                info!(
                    "  Saved:    {} (from {}x{})",
                    file_name.to_string_lossy(),
                    outcome.original.0,
                    outcome.original.1
                );
                report.processed += 1;
            }
            Err(e) => {
                warn!("  Error: {}", e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Normalize a generated image for the store: aspect-fit to `target` and drop
/// transparency onto white.
pub fn render_feature_graphic(image: &DynamicImage, target: TargetDimensions) -> Result<RgbImage> {
    let fitted = fit_to_exact_size(image, target)?;
    Ok(flatten_onto_white(fitted))
}

/// Decode `bytes`, render them with [`render_feature_graphic`] and save as PNG.
pub fn save_feature_graphic(
    bytes: &[u8],
    target: TargetDimensions,
    output: &Path,
) -> Result<(PathBuf, u64)> {
    let decoded = load_image_from_memory(bytes)?;
    let rendered = render_feature_graphic(&decoded, target)?;
    let written = save_png(&DynamicImage::ImageRgb8(rendered), output)?;
    info!(
        "  Saved: {} ({:.0} KB)",
        output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        kilobytes(written)
    );
    Ok((output.to_path_buf(), written))
}

#[cfg(feature = "generate")]
mod generate {
    use std::path::{Path, PathBuf};

    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use tracing::{info, warn};

    use super::save_feature_graphic;
    use crate::config::feature_graphic_prompt;
    use crate::error::{Error, Result};
    use crate::genai::{
        ContentGenerator, GenerateContentRequest, Modality, ResponsePart, text_preview,
    };
    use crate::io::images::guess_mime_type;
    use crate::io::load_image_from_memory;
    use crate::types::TargetDimensions;

    /// Saved feature graphic.
    #[derive(Debug, Clone)]
    pub struct FeatureGraphic {
        pub path: PathBuf,
        pub bytes_written: u64,
        pub mime_type: String,
    }

    /// Ask `model` for a banner built around the icon at `icon_path`, then
    /// normalize the first inline image of the response to `target` and write it
    /// to `output`. A response without image data yields
    /// [`Error::NoImageInResponse`] after its parts have been logged.
    pub fn generate_feature_graphic<G: ContentGenerator + ?Sized>(
        generator: &G,
        model: &str,
        icon_path: &Path,
        target: TargetDimensions,
        output: &Path,
    ) -> Result<FeatureGraphic> {
        let icon_bytes = std::fs::read(icon_path)?;
        let icon = load_image_from_memory(&icon_bytes)?;
        info!("  Icon loaded: {}x{}", icon.width(), icon.height());

        let request = GenerateContentRequest::text(
            feature_graphic_prompt(target),
            &[Modality::Text, Modality::Image],
        )
        .with_image(guess_mime_type(&icon_bytes), STANDARD.encode(&icon_bytes));

        info!("  Generating with AI...");
        let response = generator.generate_content(model, &request)?;

        // parts are decoded one at a time; the first usable image wins
        let mut parts = Vec::new();
        for part in response.parts() {
            match ResponsePart::from_part(part) {
                Ok(ResponsePart::Image { data, mime_type }) => {
                    info!("  Found image data (mime: {})", mime_type);
                    let (path, bytes_written) = save_feature_graphic(&data, target, output)?;
                    return Ok(FeatureGraphic {
                        path,
                        bytes_written,
                        mime_type,
                    });
                }
                Ok(other) => parts.push(other),
                Err(e) => {
                    warn!("  Skipping unreadable inline data: {}", e);
                    parts.push(ResponsePart::Unknown);
                }
            }
        }

        info!("  No image in response. Parts received:");
        for (i, part) in parts.iter().enumerate() {
            match part {
                ResponsePart::Text(text) if !text.is_empty() => {
                    info!("    Part {}: text - \"{}...\"", i, text_preview(text, 80))
                }
                other => info!("    Part {}: {}", i, other.kind()),
            }
        }
        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            info!("  Prompt blocked: {}", reason);
        }

        Err(Error::NoImageInResponse { parts: parts.len() })
    }
}


#[cfg(all(test, feature = "generate"))]
mod generate_tests {
    use super::*;
    use crate::genai::testing::FakeGenerator;
    use crate::io::images::encode_png;
    use crate::types::FEATURE_GRAPHIC;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use image::Rgb;
    use serde_json::json;

    fn icon(dir: &Path) -> PathBuf {
        let path = dir.join("icon.png");
        DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([1, 2, 3])))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn inline_image_is_normalized_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let banner = encode_png(&DynamicImage::ImageRgb8(RgbImage::from_pixel(
            1376,
            768,
            Rgb([224, 247, 239]),
        )))
        .unwrap();
        let generator = FakeGenerator::default().with(
            "m",
            json!({"candidates": [{"content": {"parts": [
                {"text": "Here is your banner"},
                {"inlineData": {"mimeType": "image/png", "data": STANDARD.encode(&banner)}}
            ]}}]}),
        );

        let output = dir.path().join("feature-graphic.png");
        let result =
            generate_feature_graphic(&generator, "m", &icon(dir.path()), FEATURE_GRAPHIC, &output)
                .unwrap();

        assert_eq!(result.mime_type, "image/png");
        let saved = load_image(&output).unwrap();
        assert_eq!((saved.width(), saved.height()), (1024, 500));
        assert!(!saved.color().has_alpha());

        let calls = generator.calls.borrow();
        let (_, request) = &calls[0];
        assert_eq!(
            request.generation_config.response_modalities,
            vec![crate::genai::Modality::Text, crate::genai::Modality::Image]
        );
        let sent = request.contents[0].parts[1].inline_data.as_ref().unwrap();
        assert_eq!(sent.mime_type, "image/png");
    }

    fn inline(data: String) -> serde_json::Value {
        json!({"inlineData": {"mimeType": "image/png", "data": data}})
    }

    fn small_banner() -> String {
        let png = encode_png(&DynamicImage::ImageRgb8(RgbImage::from_pixel(
            200,
            100,
            Rgb([9, 9, 9]),
        )))
        .unwrap();
        STANDARD.encode(&png)
    }

    #[test]
    fn corrupt_part_after_image_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let generator = FakeGenerator::default().with(
            "m",
            json!({"candidates": [
                {"content": {"parts": [inline(small_banner())]}},
                {"content": {"parts": [inline("@@@".to_string())]}}
            ]}),
        );
        let output = dir.path().join("feature-graphic.png");
        generate_feature_graphic(&generator, "m", &icon(dir.path()), FEATURE_GRAPHIC, &output)
            .unwrap();

        let saved = load_image(&output).unwrap();
        assert_eq!((saved.width(), saved.height()), (1024, 500));
    }

    #[test]
    fn corrupt_part_before_image_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let generator = FakeGenerator::default().with(
            "m",
            json!({"candidates": [{"content": {"parts": [
                inline("not base64!".to_string()),
                inline(small_banner())
            ]}}]}),
        );
        let output = dir.path().join("feature-graphic.png");
        let result =
            generate_feature_graphic(&generator, "m", &icon(dir.path()), FEATURE_GRAPHIC, &output)
                .unwrap();
        assert_eq!(result.path, output);
        assert!(output.exists());
    }

    #[test]
    fn only_corrupt_parts_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let generator = FakeGenerator::default().with(
            "m",
            json!({"candidates": [{"content": {"parts": [
                {"text": "sorry"},
                inline("@@@".to_string())
            ]}}]}),
        );
        let output = dir.path().join("feature-graphic.png");
        let err =
            generate_feature_graphic(&generator, "m", &icon(dir.path()), FEATURE_GRAPHIC, &output)
                .unwrap_err();
        assert!(matches!(err, Error::NoImageInResponse { parts: 2 }));
        assert!(!output.exists());
    }

    #[test]
    fn text_only_response_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let generator = FakeGenerator::default().with(
            "m",
            json!({"candidates": [{"content": {"parts": [{"text": "I cannot draw that"}]}}]}),
        );
        let output = dir.path().join("feature-graphic.png");
        let err =
            generate_feature_graphic(&generator, "m", &icon(dir.path()), FEATURE_GRAPHIC, &output)
                .unwrap_err();
        assert!(matches!(err, Error::NoImageInResponse { parts: 1 }));
        assert!(!output.exists());
    }

    #[test]
    fn transport_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let generator = FakeGenerator::default();
        let output = dir.path().join("feature-graphic.png");
        let err = generate_feature_graphic(
            &generator,
            "missing",
            &icon(dir.path()),
            FEATURE_GRAPHIC,
            &output,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Api { status: 404, .. }));
    }
}
