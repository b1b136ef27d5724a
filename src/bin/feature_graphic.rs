//! `feature-graphic` entrypoint.
//!
//! Reads `GOOGLE_API_KEY`, picks the first available image model and writes
//! a 1024x500 Google Play feature graphic built around the app icon.
#[cfg(feature = "generate")]
use std::process::ExitCode;

#[cfg(feature = "generate")]
use clap::Parser;
#[cfg(feature = "generate")]
use storeart::cli::{self, FeatureGraphicArgs};

#[cfg(feature = "generate")]
fn main() -> ExitCode {
    let args = FeatureGraphicArgs::parse();
    cli::init_logging(args.verbose);

    match cli::run_feature_graphic(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "generate"))]
fn main() {
    eprintln!("Generation feature is not enabled. Please build with --features generate");
    std::process::exit(1);
}
