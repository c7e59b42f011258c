use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::AppError;

use super::answer_log::AnswerLog;
use super::questions::catalog;
use super::service::{CheckSheetError, CheckSheetService};

pub const SERVICE_MESSAGE: &str = "デジタル化推進度チェックシート API が正常に動作しています";

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub answers: Vec<String>,
}

/// Router builder exposing the submission endpoint and the question catalog.
pub fn checksheet_router<L>(service: Arc<CheckSheetService<L>>) -> Router
where
    L: AnswerLog + 'static,
{
    Router::new()
        .route("/", get(status_handler).post(submit_handler::<L>))
        .route("/api/v1/questions", get(questions_handler))
        .with_state(service)
}

pub fn status_payload() -> Value {
    json!({
        "status": "success",
        "message": SERVICE_MESSAGE,
        "version": env!("CARGO_PKG_VERSION"),
    })
}

pub(crate) async fn status_handler() -> Json<Value> {
    Json(status_payload())
}

pub(crate) async fn questions_handler() -> Json<Value> {
    Json(json!({ "questions": catalog() }))
}

/// Every outcome is answered with `200`; failures carry `status: "error"`.
pub(crate) async fn submit_handler<L>(
    State(service): State<Arc<CheckSheetService<L>>>,
    body: Bytes,
) -> Result<Json<Value>, AppError>
where
    L: AnswerLog + 'static,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Json(status_payload()));
    }

    let request: SubmissionRequest = serde_json::from_slice(&body)
        .map_err(|err| {
            warn!(error = %err, "rejecting malformed submission body");
            CheckSheetError::MalformedRequest(err.to_string())
        })?;
    let outcome = service.submit(&request.answers).await?;

    Ok(Json(json!({
        "status": "success",
        "pdfUrl": outcome.published.url,
    })))
}

pub fn error_payload(err: &CheckSheetError) -> Value {
    json!({
        "status": "error",
        "message": err.to_string(),
        "details": { "kind": err.kind() },
    })
}

impl IntoResponse for CheckSheetError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(error_payload(&self))).into_response()
    }
}
