//! Command Line Interface (CLI) layer for storeart.
//!
//! This module defines argument parsing (`args`), logging setup (`logging`)
//! and the orchestration logic (`runner`) behind the `crop-for-apple` and
//! `feature-graphic` binaries. Runners return the crate `Result`; the binaries
//! turn an error into a diagnostic and exit status 1.
//!
//! If you are embedding storeart into another application, prefer using
//! the high-level `storeart::api` module instead of calling the CLI code.
pub mod args;
pub mod logging;
pub mod runner;

pub use args::{CropArgs, FeatureGraphicArgs};
pub use logging::init_logging;
pub use runner::{report_fatal, run_crop};

#[cfg(feature = "generate")]
pub use runner::run_feature_graphic;
