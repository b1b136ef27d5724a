use image::{DynamicImage, Rgb, RgbImage};

const WHITE: u16 = 255;

fn blend_channel(value: u8, alpha: u8) -> u8 {
    let a = alpha as u16;
    ((value as u16 * a + WHITE * (255 - a) + 127) / 255) as u8
}

/// Composite any transparency onto an opaque white background and return RGB8.
/// Images without alpha are converted as-is.
pub fn flatten_onto_white(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        img if img.color().has_alpha() => {
            let rgba = img.to_rgba8();
            RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
                let [r, g, b, a] = rgba.get_pixel(x, y).0;
                Rgb([blend_channel(r, a), blend_channel(g, a), blend_channel(b, a)])
            })
        }
        img => img.to_rgb8(),
    }
}
