use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::Result;
use crate::genai::wire::Part;

/// A response part, classified by payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePart {
    Text(String),
    Image { data: Vec<u8>, mime_type: String },
    Unknown,
}

impl ResponsePart {
    pub fn from_part(part: &Part) -> Result<Self> {
        if let Some(blob) = &part.inline_data {
            let data = STANDARD.decode(blob.data.trim())?;
            return Ok(ResponsePart::Image {
                data,
                mime_type: blob.mime_type.clone(),
            });
        }
        match &part.text {
            Some(text) => Ok(ResponsePart::Text(text.clone())),
            None => Ok(ResponsePart::Unknown),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ResponsePart::Text(_) => "text",
            ResponsePart::Image { .. } => "image",
            ResponsePart::Unknown => "unknown",
        }
    }
}

/// First `max_chars` characters of `text` on a single line.
pub fn text_preview(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
