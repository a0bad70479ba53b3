use crate::config::OracleConfig;
use crate::ports::outbound::OracleTransport;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// GenerativeTransport adapter for a Gemini-style `generateContent` REST
/// endpoint.
///
/// Sends one prompt per request and returns the first candidate's text.
/// The client-level timeout bounds calls that would otherwise never
/// return; retrying is the oracle client's concern, not this adapter's.
pub struct GenerativeTransport {
    client: reqwest::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GenerativeTransport {
    /// Creates a transport from resolved configuration.
    pub fn new(config: &OracleConfig) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("partscout/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, self.api_key
        )
    }
}

#[async_trait]
impl OracleTransport for GenerativeTransport {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("oracle API returned status code {}", response.status());
        }

        let body: GenerateContentResponse = response.json().await?;
        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| anyhow::anyhow!("oracle API returned no candidates"))
    }
}

// Generative API request/response structures

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
