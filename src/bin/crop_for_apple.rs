//! `crop-for-apple` entrypoint.
//!
//! Crops every PNG in the input directory to an App Store screenshot size.
//! Exits 1 when the input directory or images are missing, or when no image
//! could be processed; partial failures still exit 0.
use std::process::ExitCode;

use clap::Parser;
use storeart::cli::{self, CropArgs};

fn main() -> ExitCode {
    let args = CropArgs::parse();
    cli::init_logging(args.verbose);

    match cli::run_crop(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}
