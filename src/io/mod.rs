//! Filesystem side of both pipelines: input discovery (`discovery`) and image
//! decode/encode helpers (`images`).
pub mod discovery;
pub use discovery::{IconCandidate, list_png_images};

pub mod images;
pub use images::{load_image, load_image_from_memory, save_png};
