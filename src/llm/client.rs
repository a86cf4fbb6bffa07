use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Placeholder key used by development environments; treated as unconfigured
const MOCK_API_KEY: &str = "mock-key-for-development";

/// Configuration for the Groq chat-completions client
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key (from GROQ_API_KEY env var)
    pub api_key: String,
    /// Model to use (e.g., "llama3-70b-8192")
    pub model: String,
    /// Temperature (0-1, lower = more deterministic)
    pub temperature: f64,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl GroqConfig {
    /// Create config from environment variables.
    ///
    /// Fails when GROQ_API_KEY is unset or holds the development placeholder,
    /// in which case callers run the deterministic fallbacks instead.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("GROQ_API_KEY").context("GROQ_API_KEY environment variable not set")?;
        if api_key.is_empty() || api_key == MOCK_API_KEY {
            anyhow::bail!("GROQ_API_KEY is a development placeholder");
        }

        Ok(Self::new(api_key, "llama3-70b-8192".to_string()))
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            temperature: 0.2,
            max_tokens: 4096,
        }
    }
}

/// Groq API client (OpenAI-compatible chat completions)
pub struct GroqClient {
    client: Client,
    config: GroqConfig,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a system+user message pair and return the completion text.
    ///
    /// With `json_mode` set, the provider is asked for a JSON object/array
    /// response; the text still arrives as a string and goes through shape
    /// repair before use.
    pub async fn chat(&self, system: &str, user: &str, json_mode: bool) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            response_format: json_mode.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Groq API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Groq API error: {} - {}", status, body);
        }

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Groq API response")?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("No choices in Groq API response")
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    max_tokens: u32,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}
