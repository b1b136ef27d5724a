use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config::API_BASE_URL;
use crate::error::{Error, Result};
use crate::genai::wire::{ApiErrorBody, GenerateContentRequest, GenerateContentResponse};

/// Image generation can take well over the default 30s of the blocking client.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Anything that can answer a `generateContent` call for a named model.
pub trait ContentGenerator {
    fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

impl ContentGenerator for GeminiClient {
    fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }
        Ok(response.json::<GenerateContentResponse>()?)
    }
}

/// Prefer the service's own `error.message`; fall back to the raw body.
fn api_error(status: u16, body: &str) -> Error {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => match parsed.error.status {
            Some(code) => format!("{} {}", code, parsed.error.message),
            None => parsed.error.message,
        },
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    };
    Error::Api { status, message }
}
