use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::schema::StructuredOutput;
use crate::config::ProviderConfig;

/// Hosted tools the provider may call while producing a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    /// Live web search, serialized as `{"type": "web_search"}`
    WebSearch,
}

/// A single structured-output request
#[derive(Debug, Clone)]
pub struct ParseRequest<'a> {
    /// System-level instructions
    pub instructions: &'a str,
    /// User task description
    pub input: &'a str,
    pub tools: &'a [Tool],
}

/// Client for the provider's Responses API
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Body posted to the Responses endpoint
#[derive(Debug, Serialize)]
pub(crate) struct ResponsesRequest<'a> {
    model: &'a str,
    tools: &'a [Tool],
    instructions: &'a str,
    input: &'a str,
    text: TextConfig,
}

#[derive(Debug, Serialize)]
struct TextConfig {
    format: TextFormat,
}

#[derive(Debug, Serialize)]
struct TextFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    incomplete_details: Option<serde_json::Value>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    OutputText { text: String },
    Refusal { refusal: String },
    #[serde(other)]
    Other,
}

impl LlmClient {
    /// Build a client for the configured provider. No request timeout is set.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        tracing::info!(
            "Created LlmClient: model={}, base_url={}",
            config.model,
            config.base_url
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Assemble the request body for `request` with the strict schema of `T`
    pub(crate) fn request_body<'a, T: StructuredOutput>(
        &'a self,
        request: ParseRequest<'a>,
    ) -> ResponsesRequest<'a> {
        let schema = T::strict_schema();
        tracing::debug!(
            "Structured output schema for {}: {}",
            T::format_name(),
            schema
        );

        ResponsesRequest {
            model: &self.model,
            tools: request.tools,
            instructions: request.instructions,
            input: request.input,
            text: TextConfig {
                format: TextFormat {
                    format_type: "json_schema",
                    name: T::format_name(),
                    strict: true,
                    schema,
                },
            },
        }
    }

    /// Run a request whose output must conform to the schema of `T`
    pub async fn parse<T: StructuredOutput>(&self, request: ParseRequest<'_>) -> Result<T> {
        let body = self.request_body::<T>(request);
        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("Failed to send LLM request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("LLM API error ({}): {}", status, error_text);
            anyhow::bail!("LLM API error ({}): {}", status, error_text);
        }

        let parsed: ResponsesResponse = response
            .json()
            .await
            .context("Failed to parse LLM response")?;

        let text = output_text(&parsed)?;
        tracing::debug!("LLM structured output: {}", text);

        serde_json::from_str(text).with_context(|| {
            format!("LLM output does not match {} schema", T::format_name())
        })
    }
}

/// First `output_text` part of the response's message items
fn output_text(response: &ResponsesResponse) -> Result<&str> {
    let parts = response.output.iter().flat_map(|item| match item {
        OutputItem::Message { content } => content.as_slice(),
        OutputItem::Other => &[][..],
    });

    for part in parts {
        match part {
            ContentPart::OutputText { text } => return Ok(text.as_str()),
            ContentPart::Refusal { refusal } => {
                anyhow::bail!("LLM refused the request: {}", refusal)
            }
            ContentPart::Other => {}
        }
    }

    if response.status.as_deref() == Some("incomplete") {
        anyhow::bail!(
            "LLM response is incomplete: {}",
            response
                .incomplete_details
                .as_ref()
                .map(|d| d.to_string())
                .unwrap_or_default()
        );
    }

    anyhow::bail!("LLM response has no output text")
}
