use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Comment, CommentGenerator, CommentSource, CommentaryError};
use crate::config::GeminiConfig;
use crate::workflows::checksheet::domain::ScoreReport;
use crate::workflows::checksheet::prompt::CommentPrompt;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiCommentary {
    client: Client,
    config: GeminiConfig,
}

impl GeminiCommentary {
    pub fn new(config: GeminiConfig) -> Result<Self, CommentaryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| CommentaryError::Client(err.to_string()))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn attempt(
        &self,
        url: &str,
        api_key: &str,
        prompt: &str,
    ) -> Result<String, CommentaryError> {
        let request = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|err| CommentaryError::Transport(err.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| CommentaryError::Transport(err.without_url().to_string()))?;

        if status != StatusCode::OK {
            return Err(CommentaryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        extract_candidate_text(&body)
    }
}

#[async_trait]
impl CommentGenerator for GeminiCommentary {
    async fn generate(
        &self,
        _report: &ScoreReport,
        prompt: &CommentPrompt,
    ) -> Result<Comment, CommentaryError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CommentaryError::MissingCredential)?;

        let url = self.endpoint();
        let total_attempts = self.config.max_retries + 1;
        let mut attempt = 1;

        loop {
            match self.attempt(&url, api_key, &prompt.text).await {
                Ok(text) => {
                    debug!(attempt, model = %self.config.model, "gemini comment generated");
                    return Ok(Comment {
                        text,
                        source: CommentSource::Generated,
                    });
                }
                Err(err) if attempt < total_attempts && err.is_retryable() => {
                    warn!(attempt, total_attempts, error = %err, "gemini request failed, retrying");
                    tokio::time::sleep(self.config.retry_backoff * attempt).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn extract_candidate_text(body: &str) -> Result<String, CommentaryError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|err| CommentaryError::MalformedResponse(format!("{err}: {body}")))?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| CommentaryError::MalformedResponse(body.to_string()))
}

impl CommentaryError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => matches!(
                StatusCode::from_u16(*status),
                Ok(StatusCode::TOO_MANY_REQUESTS
                    | StatusCode::INTERNAL_SERVER_ERROR
                    | StatusCode::BAD_GATEWAY
                    | StatusCode::SERVICE_UNAVAILABLE
                    | StatusCode::GATEWAY_TIMEOUT)
            ),
            _ => false,
        }
    }
}
