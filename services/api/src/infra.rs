use axum::http::{header, HeaderValue, Method};
use dx_checkup::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Browser access for the survey page; `*` allows any origin.
pub(crate) fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let origin = allowed_origin.trim();
    if origin == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let value = HeaderValue::from_str(origin).map_err(|err| {
        AppError::Bootstrap(format!("invalid allowed origin '{origin}': {err}"))
    })?;
    Ok(layer.allow_origin(value))
}
