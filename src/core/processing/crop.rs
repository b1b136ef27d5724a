use image::DynamicImage;
use tracing::{debug, info};

use crate::core::geometry::{center_crop_rect, upscale_factor, upscaled_dimensions};
use crate::core::processing::resize::resize_exact;
use crate::error::Result;
use crate::types::TargetDimensions;

/// Center-crop `image` to exactly `target`, upscaling uniformly first when either
/// side is short. Sources that already cover the target are cut without resampling.
pub fn center_crop_to_target(image: &DynamicImage, target: TargetDimensions) -> Result<DynamicImage> {
    let mut working: Option<DynamicImage> = None;

    if let Some(scale) = upscale_factor(image.width(), image.height(), target) {
        let (new_cols, new_rows) = upscaled_dimensions(image.width(), image.height(), scale, target);
        info!(
            "  Upscaling x{:.4}: {}x{} -> {}x{}",
            scale,
            image.width(),
            image.height(),
            new_cols,
            new_rows
        );
        working = Some(resize_exact(image, new_cols, new_rows)?);
    }

    let source = working.as_ref().unwrap_or(image);
    let rect = center_crop_rect(source.width(), source.height(), target);
    debug!(
        "Crop window origin=({}, {}) size={}x{}",
        rect.x, rect.y, rect.width, rect.height
    );
    let cropped = source.crop_imm(rect.x, rect.y, rect.width, rect.height);

    if cropped.width() != target.width || cropped.height() != target.height {
        // only reachable through degenerate rounding; the output size is fixed
        return resize_exact(&cropped, target.width, target.height);
    }
    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 239) as u8])
        })
    }

    #[test]
    fn covering_source_yields_exact_centered_window() {
        let src = gradient(60, 90);
        let target = TargetDimensions::new(20, 50);
        let out = center_crop_to_target(&DynamicImage::ImageRgb8(src.clone()), target).unwrap();
        assert_eq!((out.width(), out.height()), (20, 50));

        let out = out.to_rgb8();
        for y in 0..50 {
            for x in 0..20 {
                assert_eq!(out.get_pixel(x, y), src.get_pixel(x + 20, y + 20));
            }
        }
    }

    #[test]
    fn spec_sized_source_gets_expected_origin() {
        let src = gradient(2000, 3000);
        let target = TargetDimensions::new(1284, 2778);
        let out = center_crop_to_target(&DynamicImage::ImageRgb8(src.clone()), target)
            .unwrap()
            .to_rgb8();
        assert_eq!(out.dimensions(), (1284, 2778));
        assert_eq!(out.get_pixel(0, 0), src.get_pixel(358, 111));
        assert_eq!(out.get_pixel(1283, 2777), src.get_pixel(358 + 1283, 111 + 2777));
    }

    #[test]
    fn small_source_is_upscaled_to_exact_size() {
        let src = DynamicImage::ImageRgb8(gradient(80, 80));
        let target = TargetDimensions::new(128, 277);
        let out = center_crop_to_target(&src, target).unwrap();
        assert_eq!((out.width(), out.height()), (128, 277));
    }

    #[test]
    fn one_short_axis_triggers_upscale() {
        let src = DynamicImage::ImageRgb8(gradient(300, 100));
        let target = TargetDimensions::new(100, 200);
        let out = center_crop_to_target(&src, target).unwrap();
        assert_eq!((out.width(), out.height()), (100, 200));
    }

    #[test]
    fn exact_size_source_is_returned_unchanged() {
        let src = gradient(33, 44);
        let out = center_crop_to_target(
            &DynamicImage::ImageRgb8(src.clone()),
            TargetDimensions::new(33, 44),
        )
        .unwrap();
        assert_eq!(out.to_rgb8(), src);
    }

    #[test]
    fn alpha_channel_is_preserved() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([1, 2, 3, 4])));
        let out = center_crop_to_target(&src, TargetDimensions::new(20, 40)).unwrap();
        assert!(out.color().has_alpha());
        assert_eq!((out.width(), out.height()), (20, 40));
    }
}
