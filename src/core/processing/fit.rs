use image::DynamicImage;
use tracing::info;

use crate::core::geometry::aspect_fit_rect;
use crate::core::processing::resize::resize_exact;
use crate::error::Result;
use crate::types::TargetDimensions;

/// Crop the relatively longer axis to the target aspect ratio, then resample to
/// exactly `target`. Never pads.
pub fn fit_to_exact_size(image: &DynamicImage, target: TargetDimensions) -> Result<DynamicImage> {
    let rect = aspect_fit_rect(image.width(), image.height(), target);

    let cropped = if rect.covers(image.width(), image.height()) {
        image.clone()
    } else {
        info!(
            "  Cropping {}x{} -> {}x{} at ({}, {})",
            image.width(),
            image.height(),
            rect.width,
            rect.height,
            rect.x,
            rect.y
        );
        image.crop_imm(rect.x, rect.y, rect.width, rect.height)
    };

    let resized = if cropped.width() == target.width && cropped.height() == target.height {
        cropped
    } else {
        resize_exact(&cropped, target.width, target.height)?
    };

    info!("  Final size: {}x{}", resized.width(), resized.height());
    Ok(resized)
}
