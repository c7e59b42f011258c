use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::drive::{DriveGateway, DriveOperationError};

pub const REPORT_NAME_PREFIX: &str = "デジタル化推進度チェックシート_診断レポート";

/// Where the shared PDF ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedReport {
    pub file_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    CreateDocument,
    ExportPdf,
    UploadPdf,
    Share,
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PublishStep::CreateDocument => "create document",
            PublishStep::ExportPdf => "export pdf",
            PublishStep::UploadPdf => "upload pdf",
            PublishStep::Share => "share pdf",
        };
        f.write_str(label)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("report publishing failed at {step}: {source}")]
pub struct PublishError {
    pub step: PublishStep,
    #[source]
    pub source: DriveOperationError,
}

/// Name used for the intermediate document; the PDF appends `.pdf`.
pub fn report_file_stem(timestamp_millis: i64) -> String {
    format!("{REPORT_NAME_PREFIX}_{timestamp_millis}")
}

/// Canonical viewer URL for files without a `webViewLink`.
pub fn file_view_url(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{file_id}/view")
}

/// Converts report HTML into a publicly readable PDF on Drive.
#[derive(Debug, Clone)]
pub struct ReportPublisher {
    drive: Arc<dyn DriveGateway>,
    folder_id: Option<String>,
}

impl ReportPublisher {
    pub fn new(drive: Arc<dyn DriveGateway>, folder_id: Option<String>) -> Self {
        Self { drive, folder_id }
    }

    pub async fn publish(&self, html: &str) -> Result<PublishedReport, PublishError> {
        let stem = report_file_stem(chrono::Utc::now().timestamp_millis());
        self.publish_named(&stem, html).await
    }

    pub async fn publish_named(
        &self,
        stem: &str,
        html: &str,
    ) -> Result<PublishedReport, PublishError> {
        let folder = self.folder_id.as_deref();

        let document_id = self
            .drive
            .create_document(stem, html, folder)
            .await
            .map_err(at(PublishStep::CreateDocument))?;

        let result = self.convert(&document_id, stem, folder).await;

        if let Err(err) = self.drive.delete_file(&document_id).await {
            warn!(%document_id, error = %err, "unable to delete intermediate document");
        }

        let published = result?;
        info!(file_id = %published.file_id, "report published");
        Ok(published)
    }

    async fn convert(
        &self,
        document_id: &str,
        stem: &str,
        folder: Option<&str>,
    ) -> Result<PublishedReport, PublishError> {
        let pdf = self
            .drive
            .export_pdf(document_id)
            .await
            .map_err(at(PublishStep::ExportPdf))?;

        let file = self
            .drive
            .upload_pdf(&format!("{stem}.pdf"), pdf, folder)
            .await
            .map_err(at(PublishStep::UploadPdf))?;

        self.drive
            .share_publicly(&file.file_id)
            .await
            .map_err(at(PublishStep::Share))?;

        let url = file
            .web_view_link
            .filter(|link| !link.is_empty())
            .unwrap_or_else(|| file_view_url(&file.file_id));
        Ok(PublishedReport {
            file_id: file.file_id,
            url,
        })
    }
}

fn at(step: PublishStep) -> impl Fn(DriveOperationError) -> PublishError {
    move |source| PublishError { step, source }
}
