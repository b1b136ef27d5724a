//! Integer geometry behind the crop and fit transforms. Kept free of pixel data
//! so the arithmetic can be checked directly.
use crate::types::TargetDimensions;

/// Axis-aligned sub-rectangle of an image, origin at the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == width && self.height == height
    }
}

/// Uniform upscale factor needed so both axes reach the target, or `None` when the
/// source already covers it.
pub fn upscale_factor(width: u32, height: u32, target: TargetDimensions) -> Option<f64> {
    if width >= target.width && height >= target.height {
        return None;
    }
    let scale_x = target.width as f64 / width as f64;
    let scale_y = target.height as f64 / height as f64;
    Some(scale_x.max(scale_y))
}

/// Dimensions after a uniform upscale by `scale`, never smaller than the target on
/// either axis.
pub fn upscaled_dimensions(
    width: u32,
    height: u32,
    scale: f64,
    target: TargetDimensions,
) -> (u32, u32) {
    let new_width = (width as f64 * scale).round() as u32;
    let new_height = (height as f64 * scale).round() as u32;
    (new_width.max(target.width), new_height.max(target.height))
}

/// Centered window of the target size, clamped to the image bounds.
pub fn center_crop_rect(width: u32, height: u32, target: TargetDimensions) -> CropRect {
    let crop_width = target.width.min(width);
    let crop_height = target.height.min(height);
    CropRect {
        x: (width - crop_width) / 2,
        y: (height - crop_height) / 2,
        width: crop_width,
        height: crop_height,
    }
}

/// Largest centered window with the target aspect ratio. Only the axis that is
/// relatively too long is cut; the kept length is truncated to whole pixels.
pub fn aspect_fit_rect(width: u32, height: u32, target: TargetDimensions) -> CropRect {
    // compare width/height against target.width/target.height without floats
    let current = width as u64 * target.height as u64;
    let wanted = height as u64 * target.width as u64;

    if current > wanted {
        let new_width = (wanted / target.height as u64).clamp(1, width as u64) as u32;
        CropRect {
            x: (width - new_width) / 2,
            y: 0,
            width: new_width,
            height,
        }
    } else if current < wanted {
        let new_height = (current / target.width as u64).clamp(1, height as u64) as u32;
        CropRect {
            x: 0,
            y: (height - new_height) / 2,
            width,
            height: new_height,
        }
    } else {
        CropRect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }
}
