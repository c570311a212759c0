/// LLM Client: the single point of entry for remote model calls.
///
/// Speaks the OpenAI chat-completions API and the Gemini generateContent API
/// and returns the raw reply text. Each call is a single attempt: callers
/// fall back locally on failure instead of retrying.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::analysis::models::Provider;

pub mod prompts;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";
pub const OPENAI_MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured for {0}")]
    MissingApiKey(Provider),

    #[error("resume text is too short for remote analysis")]
    InputTooShort,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API error (status {status}): {message}")]
    Api {
        provider: Provider,
        status: u16,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} returned empty content")]
    EmptyContent(Provider),

    #[error("no valid JSON found in {0} response")]
    NoJson(Provider),
}

// ── OpenAI wire types ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiReplyMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiReplyMessage {
    content: Option<String>,
}

// ── Gemini wire types ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiReplyContent,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyContent {
    #[serde(default)]
    parts: Vec<GeminiReplyPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyPart {
    text: Option<String>,
}

/// Both providers report failures as `{"error": {"message": ...}}`.
#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// API keys per provider. A missing key makes that provider unavailable.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub openai: Option<String>,
    pub gemini: Option<String>,
}

impl ApiKeys {
    fn for_provider(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.openai.as_deref(),
            Provider::Gemini => self.gemini.as_deref(),
        }
        .filter(|k| !k.trim().is_empty())
    }
}

/// HTTP client shared by every remote analysis.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    keys: ApiKeys,
}

impl LlmClient {
    pub fn new(keys: ApiKeys, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            keys,
        })
    }

    pub fn has_key(&self, provider: Provider) -> bool {
        self.keys.for_provider(provider).is_some()
    }

    /// Sends one prompt to `provider` and returns the trimmed reply text.
    pub async fn call(
        &self,
        provider: Provider,
        prompt: &str,
        system: &str,
    ) -> Result<String, LlmError> {
        let api_key = self
            .keys
            .for_provider(provider)
            .ok_or(LlmError::MissingApiKey(provider))?;

        let text = match provider {
            Provider::OpenAi => self.call_openai(api_key, prompt, system).await?,
            Provider::Gemini => self.call_gemini(api_key, prompt).await?,
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyContent(provider));
        }
        debug!("{provider} call succeeded: {} chars", text.len());
        Ok(text.to_string())
    }

    async fn call_openai(
        &self,
        api_key: &str,
        prompt: &str,
        system: &str,
    ) -> Result<String, LlmError> {
        let body = OpenAiRequest {
            model: OPENAI_MODEL,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: system,
                },
                OpenAiMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let body = read_success_body(Provider::OpenAi, response).await?;
        openai_reply_text(&body)
    }

    async fn call_gemini(&self, api_key: &str, prompt: &str) -> Result<String, LlmError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_TOKENS,
            },
        };

        let response = self
            .client
            .post(GEMINI_API_URL)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let body = read_success_body(Provider::Gemini, response).await?;
        gemini_reply_text(&body)
    }
}

/// `choices[0].message.content` of a chat-completions body.
fn openai_reply_text(body: &str) -> Result<String, LlmError> {
    let parsed: OpenAiResponse = serde_json::from_str(body)?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(LlmError::EmptyContent(Provider::OpenAi))
}

/// `candidates[0].content.parts[0].text` of a generateContent body.
fn gemini_reply_text(body: &str) -> Result<String, LlmError> {
    let parsed: GeminiResponse = serde_json::from_str(body)?;
    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(LlmError::EmptyContent(Provider::Gemini))
}

/// Returns the body of a 2xx response, or an `Api` error carrying the
/// provider's error message (falling back to the status text).
async fn read_success_body(
    provider: Provider,
    response: reqwest::Response,
) -> Result<String, LlmError> {
    let status = response.status();
    let body = response.text().await?;
    check_status(provider, status, body)
}

fn check_status(provider: Provider, status: StatusCode, body: String) -> Result<String, LlmError> {
    if status.is_success() {
        return Ok(body);
    }

    let message = api_error_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
    Err(LlmError::Api {
        provider,
        status: status.as_u16(),
        message,
    })
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ProviderError>(body)
        .ok()
        .map(|e| e.error.message)
}

/// Finds the first top-level JSON object in free text.
///
/// Models often wrap the object in prose or code fences. Each `{` is tried in
/// turn as the start of an object; trailing text after the object is ignored.
pub fn extract_json_object(text: &str) -> Option<Value> {
    text.match_indices('{').find_map(|(start, _)| {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value @ Value::Object(_))) => Some(value),
            _ => None,
        }
    })
}
