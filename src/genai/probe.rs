use tracing::{info, warn};

use crate::config::PROBE_PROMPT;
use crate::error::{Error, Result};
use crate::genai::client::ContentGenerator;
use crate::genai::parts::text_preview;
use crate::genai::wire::{GenerateContentRequest, Modality};

/// Issue a trivial text-only request; any successful response counts.
pub fn probe_model<G: ContentGenerator + ?Sized>(generator: &G, model: &str) -> Result<()> {
    let request = GenerateContentRequest::text(PROBE_PROMPT, &[Modality::Text]);
    generator.generate_content(model, &request).map(|_| ())
}

/// First candidate that answers a probe, in list order.
pub fn select_model<'a, G: ContentGenerator + ?Sized>(
    generator: &G,
    candidates: &[&'a str],
) -> Result<&'a str> {
    for &model in candidates {
        info!("Trying model: {}...", model);
        match probe_model(generator, model) {
            Ok(()) => {
                info!("Using {}", model);
                return Ok(model);
            }
            Err(e) => warn!("  Not available: {}", text_preview(&e.to_string(), 100)),
        }
    }
    Err(Error::NoModelAvailable)
}
