//! Advisory comment generation: the Gemini client, the deterministic
//! template generator, and the strategy that falls back from one to the other.

pub mod analysis;
mod fallback;
mod gemini;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use super::domain::ScoreReport;
use super::prompt::CommentPrompt;

pub use fallback::{default_comment, DefaultCommentary};
pub use gemini::GeminiCommentary;

/// Which generator produced a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentSource {
    Generated,
    Fallback,
}

/// Markdown-subset advisory text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub source: CommentSource,
}

#[derive(Debug, thiserror::Error)]
pub enum CommentaryError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingCredential,
    #[error("unable to build generator client: {0}")]
    Client(String),
    #[error("generator request failed: {0}")]
    Transport(String),
    #[error("generator responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generator response did not contain candidate text: {0}")]
    MalformedResponse(String),
}

impl CommentaryError {
    /// Configuration problems abort the request instead of falling back.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential | Self::Client(_))
    }
}

/// Capability shared by every comment source.
#[async_trait]
pub trait CommentGenerator: Send + Sync {
    async fn generate(
        &self,
        report: &ScoreReport,
        prompt: &CommentPrompt,
    ) -> Result<Comment, CommentaryError>;
}

/// Try the primary generator; on upstream failure use the deterministic one.
#[derive(Clone)]
pub struct FallbackCommentary {
    primary: Arc<dyn CommentGenerator>,
    fallback: DefaultCommentary,
}

impl FallbackCommentary {
    pub fn new(primary: Arc<dyn CommentGenerator>) -> Self {
        Self {
            primary,
            fallback: DefaultCommentary,
        }
    }
}

impl std::fmt::Debug for FallbackCommentary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackCommentary").finish_non_exhaustive()
    }
}

#[async_trait]
impl CommentGenerator for FallbackCommentary {
    async fn generate(
        &self,
        report: &ScoreReport,
        prompt: &CommentPrompt,
    ) -> Result<Comment, CommentaryError> {
        match self.primary.generate(report, prompt).await {
            Ok(comment) => Ok(comment),
            Err(err) if err.is_configuration() => Err(err),
            Err(err) => {
                warn!(error = %err, "comment generator unavailable, using default commentary");
                self.fallback.generate(report, prompt).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::checksheet::prompt::build_prompt;

    struct FixedGenerator(fn() -> Result<Comment, CommentaryError>);

    #[async_trait]
    impl CommentGenerator for FixedGenerator {
        async fn generate(
            &self,
            _report: &ScoreReport,
            _prompt: &CommentPrompt,
        ) -> Result<Comment, CommentaryError> {
            (self.0)()
        }
    }

    fn report() -> ScoreReport {
        ScoreReport::from_scores([2, 3, 4, 1]).expect("valid scores")
    }

    #[tokio::test]
    async fn passes_through_generated_comments() {
        let strategy = FallbackCommentary::new(Arc::new(FixedGenerator(|| {
            Ok(Comment {
                text: "## generated".to_string(),
                source: CommentSource::Generated,
            })
        })));
        let report = report();
        let comment = strategy
            .generate(&report, &build_prompt(&report))
            .await
            .expect("comment");
        assert_eq!(comment.source, CommentSource::Generated);
        assert_eq!(comment.text, "## generated");
    }

    #[tokio::test]
    async fn upstream_failures_fall_back_to_default() {
        let strategy = FallbackCommentary::new(Arc::new(FixedGenerator(|| {
            Err(CommentaryError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        })));
        let report = report();
        let comment = strategy
            .generate(&report, &build_prompt(&report))
            .await
            .expect("fallback comment");
        assert_eq!(comment.source, CommentSource::Fallback);
        assert_eq!(comment.text, default_comment(&report));
    }

    #[tokio::test]
    async fn missing_credentials_are_not_absorbed() {
        let strategy = FallbackCommentary::new(Arc::new(FixedGenerator(|| {
            Err(CommentaryError::MissingCredential)
        })));
        let report = report();
        let err = strategy
            .generate(&report, &build_prompt(&report))
            .await
            .expect_err("configuration error propagates");
        assert!(err.is_configuration());
    }
}
