use crate::cli::ServeArgs;
use crate::infra::{cors_layer, AppState};
use crate::routes::with_probe_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dx_checkup::config::AppConfig;
use dx_checkup::error::AppError;
use dx_checkup::telemetry;
use dx_checkup::workflows::checksheet::report::{
    GoogleDriveClient, QuickChartRenderer, ReportPublisher,
};
use dx_checkup::workflows::checksheet::{
    checksheet_router, CheckSheetService, CsvAnswerLog, FallbackCommentary, GeminiCommentary,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(build_service(&config).await?);

    let app = with_probe_routes(checksheet_router(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors_layer(&config.server.allowed_origin)?);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "dx check sheet service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn build_service(config: &AppConfig) -> Result<CheckSheetService<CsvAnswerLog>, AppError> {
    let answer_log = Arc::new(CsvAnswerLog::new(config.answer_log.path.clone()));
    info!(path = %answer_log.path().display(), "answer log configured");

    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; submissions will be rejected until it is configured");
    }
    let gemini = GeminiCommentary::new(config.gemini.clone())?;
    let commentary = Arc::new(FallbackCommentary::new(Arc::new(gemini)));

    let publisher = match &config.drive.service_account_key {
        Some(key_path) => {
            let drive =
                GoogleDriveClient::from_service_account(key_path, config.drive.timeout).await?;
            info!(folder = ?config.drive.folder_id, "drive publisher configured");
            Some(ReportPublisher::new(
                Arc::new(drive),
                config.drive.folder_id.clone(),
            ))
        }
        None => {
            warn!(
                "DRIVE_SERVICE_ACCOUNT_KEY is not set; submissions will be rejected until it is configured"
            );
            None
        }
    };

    let mut service = CheckSheetService::new(answer_log, commentary, publisher);
    match QuickChartRenderer::from_config(&config.chart)? {
        Some(renderer) => service = service.with_chart(Arc::new(renderer)),
        None => info!("CHART_ENDPOINT is not set; reports will omit the radar chart"),
    }

    Ok(service)
}
