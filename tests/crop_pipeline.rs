use std::path::Path;

use image::{DynamicImage, Rgb, RgbImage};
use storeart::{AppleDisplay, BatchReport, crop_directory};

fn checkerboard(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = if (x / 16 + y / 16) % 2 == 0 { 230 } else { 20 };
        Rgb([v, (x % 256) as u8, (y % 256) as u8])
    })
}

fn save(img: &RgbImage, path: &Path) {
    DynamicImage::ImageRgb8(img.clone()).save(path).unwrap();
}

#[test]
fn large_preview_is_cut_from_its_center() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let source = checkerboard(2000, 3000);
    save(&source, &input.path().join("01-home.png"));

    let target = AppleDisplay::Inch6_7.dimensions();
    let report = crop_directory(input.path(), output.path(), target).unwrap();
    assert_eq!(
        report,
        BatchReport {
            processed: 1,
            errors: 0,
            total: 1
        }
    );

    let cropped = image::open(output.path().join("01-home.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(cropped.dimensions(), (1284, 2778));
    for (x, y) in [(0, 0), (641, 1388), (1283, 2777), (100, 2000)] {
        assert_eq!(cropped.get_pixel(x, y), source.get_pixel(x + 358, y + 111));
    }
}

#[test]
fn rerunning_overwrites_with_identical_dimensions() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    save(&checkerboard(800, 800), &input.path().join("a.png"));
    save(&checkerboard(1500, 1000), &input.path().join("b.png"));

    let target = AppleDisplay::Inch6_5.dimensions();
    for _ in 0..2 {
        let report = crop_directory(input.path(), output.path(), target).unwrap();
        assert_eq!(report.processed, 2);
        for name in ["a.png", "b.png"] {
            let img = image::open(output.path().join(name)).unwrap();
            assert_eq!((img.width(), img.height()), (1242, 2688));
        }
    }
    // inputs stay as they were
    let a = image::open(input.path().join("a.png")).unwrap();
    assert_eq!((a.width(), a.height()), (800, 800));
}
