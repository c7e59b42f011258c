use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::ChartConfig;
use crate::workflows::checksheet::domain::{ScoreReport, QUESTIONS_PER_CATEGORY};

use super::document::ChartOutcome;

const CHART_RETRIES: u32 = 1;

/// PNG radar chart embedded in the report.
#[derive(Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub png: Vec<u8>,
    pub alt: String,
}

impl ChartImage {
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

impl std::fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartImage")
            .field("bytes", &self.png.len())
            .field("alt", &self.alt)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("unable to build chart client: {0}")]
    Client(String),
    #[error("chart request failed: {0}")]
    Transport(String),
    #[error("chart service responded with status {0}")]
    Status(u16),
    #[error("chart service returned an empty image")]
    EmptyImage,
}

#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn render(&self, report: &ScoreReport) -> Result<ChartImage, ChartError>;
}

/// Fetch the chart, degrading to [`ChartOutcome::Unavailable`] on any failure.
pub async fn chart_outcome(
    renderer: Option<&dyn ChartRenderer>,
    report: &ScoreReport,
) -> ChartOutcome {
    let Some(renderer) = renderer else {
        return ChartOutcome::Disabled;
    };

    match renderer.render(report).await {
        Ok(image) => ChartOutcome::Rendered(image),
        Err(err) => {
            warn!(error = %err, "radar chart unavailable, rendering score listing instead");
            ChartOutcome::Unavailable
        }
    }
}

/// Client for QuickChart-compatible `POST` chart endpoints.
#[derive(Debug, Clone)]
pub struct QuickChartRenderer {
    client: Client,
    endpoint: String,
}

impl QuickChartRenderer {
    pub fn new(endpoint: impl Into<String>, config: &ChartConfig) -> Result<Self, ChartError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ChartError::Client(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Build a renderer when the configuration names an endpoint.
    pub fn from_config(config: &ChartConfig) -> Result<Option<Self>, ChartError> {
        config
            .endpoint
            .as_deref()
            .map(|endpoint| Self::new(endpoint, config))
            .transpose()
    }

    async fn attempt(&self, payload: &Value) -> Result<Vec<u8>, ChartError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|err| ChartError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ChartError::Transport(err.to_string()))?;
        if bytes.is_empty() {
            return Err(ChartError::EmptyImage);
        }
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ChartRenderer for QuickChartRenderer {
    async fn render(&self, report: &ScoreReport) -> Result<ChartImage, ChartError> {
        let payload = radar_chart_payload(report);
        let mut attempt = 0;

        loop {
            match self.attempt(&payload).await {
                Ok(png) => {
                    debug!(bytes = png.len(), "radar chart rendered");
                    return Ok(ChartImage {
                        png,
                        alt: "カテゴリ別スコアのレーダーチャート".to_string(),
                    });
                }
                Err(err @ (ChartError::Transport(_) | ChartError::Status(_)))
                    if attempt < CHART_RETRIES =>
                {
                    debug!(error = %err, "retrying chart request");
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn radar_chart_payload(report: &ScoreReport) -> Value {
    let (labels, scores): (Vec<&str>, Vec<u8>) = report
        .categories()
        .map(|entry| (entry.category.label(), entry.score))
        .unzip();

    json!({
        "width": 500,
        "height": 400,
        "format": "png",
        "backgroundColor": "white",
        "chart": {
            "type": "radar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "スコア",
                    "data": scores,
                    "backgroundColor": "rgba(11, 87, 208, 0.2)",
                    "borderColor": "rgb(11, 87, 208)",
                }],
            },
            "options": {
                "legend": { "display": false },
                "scale": {
                    "ticks": { "min": 0, "max": QUESTIONS_PER_CATEGORY, "stepSize": 1 },
                },
            },
        },
    })
}
