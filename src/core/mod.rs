//! Core transform building blocks: crop/fit geometry, Lanczos resizing and
//! transparency flattening. These are pure functions over in-memory images,
//! consumed by the high-level `api` module.
pub mod geometry;
pub mod processing;
