//! Minimal blocking client for the Gemini `generateContent` REST endpoint.
//!
//! Only the pieces the feature-graphic pipeline needs are modelled: text and
//! inline-image request parts, response modalities, and a response reader that
//! turns heterogeneous parts into the tagged [`ResponsePart`] enum.
//!
//! [`ContentGenerator`] is the seam between the pipeline and the service;
//! [`GeminiClient`] is the HTTP implementation.
pub mod client;
pub mod parts;
pub mod probe;
pub mod wire;

pub use client::{ContentGenerator, GeminiClient};
pub use parts::{ResponsePart, text_preview};
pub use probe::{probe_model, select_model};
pub use wire::{GenerateContentRequest, GenerateContentResponse, Modality};
