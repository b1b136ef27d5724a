#![doc = r#"
storeart — marketing image preparation for the app stores.

Two pipelines share this crate:

- **Cropper** (`crop-for-apple`): center-crops preview screenshots to a fixed Apple App
  Store size, upscaling first with Lanczos3 when a source is too small.
- **Feature graphic** (`feature-graphic`): sends the app icon and a prompt to a Gemini image
  model, then aspect-fits the returned image to exactly 1024x500, flattens transparency
  onto white and writes a PNG.

Both binaries are thin wrappers over the library API below.

Crop a directory
----------------
```rust,no_run
use std::path::Path;
use storeart::{AppleDisplay, crop_directory};

fn main() -> storeart::Result<()> {
    let report = crop_directory(
        Path::new("previews-ai"),
        Path::new("previews-apple"),
        AppleDisplay::Inch6_7.dimensions(),
    )?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Pure transforms
---------------
```rust
use image::{DynamicImage, RgbImage};
use storeart::{TargetDimensions, center_crop_to_target, fit_to_exact_size};

let src = DynamicImage::ImageRgb8(RgbImage::new(800, 800));
let cropped = center_crop_to_target(&src, TargetDimensions::new(1284, 2778)).unwrap();
assert_eq!((cropped.width(), cropped.height()), (1284, 2778));

let banner = fit_to_exact_size(&src, TargetDimensions::new(1024, 500)).unwrap();
assert_eq!((banner.width(), banner.height()), (1024, 500));
```

Generate a feature graphic
--------------------------
```rust,no_run
# #[cfg(feature = "generate")]
# fn main() -> storeart::Result<()> {
use std::path::Path;
use storeart::genai::{GeminiClient, select_model};
use storeart::{FEATURE_GRAPHIC, generate_feature_graphic};

let client = GeminiClient::new(std::env::var("GOOGLE_API_KEY").unwrap_or_default())?;
let model = select_model(&client, storeart::config::MODEL_CANDIDATES)?;
generate_feature_graphic(
    &client,
    model,
    Path::new("assets/icon.png"),
    FEATURE_GRAPHIC,
    Path::new("feature-graphic/feature-graphic.png"),
)?;
# Ok(())
# }
# #[cfg(not(feature = "generate"))]
# fn main() {}
```

Feature flags
-------------
- `generate` (default): the Gemini client, generation API and `feature-graphic` binary.
- `full`: enables a complete feature set.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop/fit geometry and pixel transforms.
- [`io`] — input discovery and PNG read/write.
- [`types`] — `TargetDimensions`, `AppleDisplay`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Generation client (only available with generate feature)
#[cfg(feature = "generate")]
pub mod genai;

// Curated public API surface
pub use error::{Error, Result};
pub use types::{AppleDisplay, FEATURE_GRAPHIC, TargetDimensions};

pub use crate::core::processing::crop::center_crop_to_target;
pub use crate::core::processing::fit::fit_to_exact_size;
pub use crate::core::processing::flatten::flatten_onto_white;

pub use io::{IconCandidate, list_png_images};

// High-level API re-exports
pub use api::{
    BatchReport, CropOutcome, crop_directory, crop_file, render_feature_graphic,
    save_feature_graphic,
};

#[cfg(feature = "generate")]
pub use api::{FeatureGraphic, generate_feature_graphic};
