use serde::{Deserialize, Serialize};

use crate::config::CategorizerConfig;
use crate::models::Categorization;

#[derive(Debug, thiserror::Error)]
pub enum CategorizeError {
    #[error("Input text is required")]
    EmptyInput,
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Upstream responded with status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Strict shape of the JSON object the model is asked to produce
#[derive(Debug, Deserialize)]
struct ModelOutput {
    category: String,
    description: String,
    tags: Vec<String>,
}

/// Client that asks an Ollama model to categorize free text
#[derive(Debug, Clone)]
pub struct Categorizer {
    endpoint: String,
    model: String,
    http: reqwest::Client,
}

impl Categorizer {
    pub fn new(config: &CategorizerConfig) -> Result<Self, CategorizeError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            endpoint: format!("{}/api/generate", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Categorizes `text` into a category, a description and a tag list
    pub async fn categorize(&self, text: &str) -> Result<Categorization, CategorizeError> {
        if text.trim().is_empty() {
            return Err(CategorizeError::EmptyInput);
        }

        let request = GenerateRequest {
            model: &self.model,
            prompt: build_prompt(text),
            stream: false,
            format: "json",
        };

        log::info!("Sending categorization request to {} (model {})", self.endpoint, self.model);
        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Ollama server error response: {}", body);
            return Err(CategorizeError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        log::debug!("Raw model response: {}", body);
        let categorization = parse_generate_response(&body)?;
        log::info!(
            "Categorized as '{}' with {} tags",
            categorization.category,
            categorization.tags.len()
        );
        Ok(categorization)
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Categorize the following text, provide a brief description, and suggest relevant tags. \
         Respond with a JSON object containing 'category', 'description', and 'tags'. \
         Ensure the response is in the same language as the input text, but the keys \
         ('category', 'description', 'tags') should always be in English: \"{}\"",
        text
    )
}

/// Decodes a non-streaming `/api/generate` body into a categorization.
///
/// Both the envelope and the embedded model output are validated; nothing is
/// defaulted.
pub fn parse_generate_response(body: &str) -> Result<Categorization, CategorizeError> {
    let envelope: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| CategorizeError::MalformedResponse(format!("invalid envelope: {}", e)))?;
    parse_model_output(&envelope.response)
}

/// Decodes the JSON object produced by the model itself
pub fn parse_model_output(output: &str) -> Result<Categorization, CategorizeError> {
    let output: ModelOutput = serde_json::from_str(output.trim())
        .map_err(|e| CategorizeError::MalformedResponse(format!("invalid model output: {}", e)))?;

    if output.category.trim().is_empty() {
        return Err(CategorizeError::MalformedResponse("category is empty".into()));
    }

    Ok(Categorization {
        category: output.category,
        description: output.description,
        tags: output.tags,
    })
}
