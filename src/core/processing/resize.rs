use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

fn lanczos_options() -> ResizeOptions {
    ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
}

pub fn resize_rgb8_image(src: &RgbImage, target_cols: u32, target_rows: u32) -> Result<RgbImage> {
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src.width(),
        src.height(),
        src.as_raw().clone(),
        PixelType::U8x3,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x3);
    resizer
        .resize(&src_image, &mut dst_image, &lanczos_options())
        .map_err(Error::resize)?;

    RgbImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized RGB buffer has unexpected length".to_string()))
}

/// Alpha is premultiplied for the convolution and divided back afterwards, so
/// transparent pixels do not bleed their color into opaque neighbours.
pub fn resize_rgba8_image(
    src: &RgbaImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbaImage> {
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src.width(),
        src.height(),
        src.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &lanczos_options().use_alpha(true),
        )
        .map_err(Error::resize)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized RGBA buffer has unexpected length".to_string()))
}

/// Lanczos3 resize to exact dimensions. Images with an alpha channel come back as
/// RGBA8, everything else as RGB8.
pub fn resize_exact(image: &DynamicImage, target_cols: u32, target_rows: u32) -> Result<DynamicImage> {
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::Processing(format!(
            "cannot resize to empty dimensions {}x{}",
            target_cols, target_rows
        )));
    }
    debug!(
        "Resizing {}x{} -> {}x{}",
        image.width(),
        image.height(),
        target_cols,
        target_rows
    );

    if image.color().has_alpha() {
        let resized = resize_rgba8_image(&image.to_rgba8(), target_cols, target_rows)?;
        Ok(DynamicImage::ImageRgba8(resized))
    } else {
        let resized = resize_rgb8_image(&image.to_rgb8(), target_cols, target_rows)?;
        Ok(DynamicImage::ImageRgb8(resized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn rgb_resize_hits_exact_dimensions() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([10, 20, 30])));
        let out = resize_exact(&src, 17, 91).unwrap();
        assert_eq!((out.width(), out.height()), (17, 91));
        assert!(matches!(out, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn uniform_color_survives_resampling() {
        let src = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([200, 100, 50])));
        let out = resize_exact(&src, 32, 32).unwrap().to_rgb8();
        for p in out.pixels() {
            for (got, want) in p.0.iter().zip([200u8, 100, 50]) {
                assert!((*got as i16 - want as i16).abs() <= 1);
            }
        }
    }

    #[test]
    fn alpha_images_stay_rgba() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 128])));
        let out = resize_exact(&src, 20, 5).unwrap();
        assert!(matches!(out, DynamicImage::ImageRgba8(_)));
        assert_eq!((out.width(), out.height()), (20, 5));
    }

    #[test]
    fn grayscale_is_resized_as_rgb() {
        let src = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(6, 6, image::Luma([90])));
        let out = resize_exact(&src, 3, 3).unwrap();
        assert!(matches!(out, DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        assert!(resize_exact(&src, 0, 4).is_err());
    }
}
