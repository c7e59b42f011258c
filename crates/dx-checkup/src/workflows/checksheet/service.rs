use std::sync::Arc;

use chrono::Local;
use tracing::{error, info};

use super::answer_log::{AnswerLog, SinkError};
use super::commentary::{CommentGenerator, CommentSource, CommentaryError};
use super::domain::{AnswerSet, AnswerSetError, ScoreReport};
use super::prompt::build_prompt;
use super::report::{
    build_report_document, chart_outcome, render_html, ChartRenderer, PublishError,
    PublishedReport, ReportPublisher,
};
use super::scoring::score;

/// Failure categories surfaced to clients as `details.kind`.
#[derive(Debug, thiserror::Error)]
pub enum CheckSheetError {
    #[error("invalid answers: {0}")]
    InvalidAnswers(#[from] AnswerSetError),
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("comment generation failed: {0}")]
    UpstreamGenerator(#[source] CommentaryError),
    #[error(transparent)]
    UpstreamDocument(#[from] PublishError),
    #[error("unable to record answers: {0}")]
    SinkWrite(#[from] SinkError),
}

impl CheckSheetError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAnswers(_) | Self::MalformedRequest(_) => "validation",
            Self::Configuration(_) => "configuration",
            Self::UpstreamGenerator(_) => "upstream_generator",
            Self::UpstreamDocument(_) => "upstream_document",
            Self::SinkWrite(_) => "sink_write",
        }
    }
}

impl From<CommentaryError> for CheckSheetError {
    fn from(value: CommentaryError) -> Self {
        if value.is_configuration() {
            Self::Configuration(value.to_string())
        } else {
            Self::UpstreamGenerator(value)
        }
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone)]
pub struct CheckSheetOutcome {
    pub report: ScoreReport,
    pub comment_source: CommentSource,
    pub published: PublishedReport,
}

/// Runs a submission through validation, logging, scoring, commentary and
/// report publishing.
pub struct CheckSheetService<L> {
    answer_log: Arc<L>,
    commentary: Arc<dyn CommentGenerator>,
    chart: Option<Arc<dyn ChartRenderer>>,
    publisher: Option<ReportPublisher>,
}

impl<L> CheckSheetService<L>
where
    L: AnswerLog + 'static,
{
    pub fn new(
        answer_log: Arc<L>,
        commentary: Arc<dyn CommentGenerator>,
        publisher: Option<ReportPublisher>,
    ) -> Self {
        Self {
            answer_log,
            commentary,
            chart: None,
            publisher,
        }
    }

    pub fn with_chart(mut self, chart: Arc<dyn ChartRenderer>) -> Self {
        self.chart = Some(chart);
        self
    }

    pub async fn submit<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<CheckSheetOutcome, CheckSheetError> {
        let result = self.run(tokens).await;
        if let Err(err) = &result {
            error!(kind = err.kind(), error = %err, "check sheet submission failed");
        }
        result
    }

    async fn run<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<CheckSheetOutcome, CheckSheetError> {
        let answers = AnswerSet::from_tokens(tokens)?;

        let publisher = self.publisher.as_ref().ok_or_else(|| {
            CheckSheetError::Configuration(
                "DRIVE_SERVICE_ACCOUNT_KEY is not configured".to_string(),
            )
        })?;

        self.record(answers.clone()).await?;
        info!("answers recorded");

        let report = score(&answers);
        info!(total = report.total(), tier = ?report.tier(), "answers scored");

        let prompt = build_prompt(&report);
        let comment = self.commentary.generate(&report, &prompt).await?;
        info!(source = ?comment.source, "comment ready");

        let chart = chart_outcome(self.chart.as_deref(), &report).await;
        let document = build_report_document(&report, &comment, chart);
        let published = publisher.publish(&render_html(&document)).await?;
        info!(url = %published.url, "report delivered");

        Ok(CheckSheetOutcome {
            report,
            comment_source: comment.source,
            published,
        })
    }

    /// Appends on the blocking pool.
    async fn record(&self, answers: AnswerSet) -> Result<(), SinkError> {
        let answer_log = Arc::clone(&self.answer_log);
        tokio::task::spawn_blocking(move || answer_log.append(Local::now(), &answers))
            .await
            .map_err(|err| SinkError::Unavailable(format!("answer log task failed: {err}")))?
    }
}
