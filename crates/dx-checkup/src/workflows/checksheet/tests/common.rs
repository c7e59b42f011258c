use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::{DateTime, Local};
use http_body_util::BodyExt;
use serde_json::Value;

use crate::workflows::checksheet::answer_log::{answer_row, AnswerLog, SinkError};
use crate::workflows::checksheet::commentary::{
    Comment, CommentGenerator, CommentSource, CommentaryError,
};
use crate::workflows::checksheet::domain::{AnswerSet, ScoreReport};
use crate::workflows::checksheet::prompt::CommentPrompt;
use crate::workflows::checksheet::report::{
    DriveFile, DriveGateway, DriveOperationError, ReportPublisher,
};
use crate::workflows::checksheet::CheckSheetService;

pub(super) const PDF_LINK: &str = "https://drive.google.com/file/d/pdf-1/view?usp=drivesdk";

pub(super) fn answers(yes_positions: &[usize]) -> Vec<String> {
    (0..20)
        .map(|index| {
            if yes_positions.contains(&index) {
                "yes".to_string()
            } else {
                "no".to_string()
            }
        })
        .collect()
}

#[derive(Default)]
pub(super) struct MemoryAnswerLog {
    rows: Mutex<Vec<Vec<String>>>,
}

impl MemoryAnswerLog {
    pub(super) fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().expect("answer log mutex poisoned").clone()
    }
}

impl AnswerLog for MemoryAnswerLog {
    fn append(&self, submitted_at: DateTime<Local>, answers: &AnswerSet) -> Result<(), SinkError> {
        self.rows
            .lock()
            .expect("answer log mutex poisoned")
            .push(answer_row(submitted_at, answers));
        Ok(())
    }
}

pub(super) struct UnavailableAnswerLog;

impl AnswerLog for UnavailableAnswerLog {
    fn append(&self, _submitted_at: DateTime<Local>, _answers: &AnswerSet) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("disk full".to_string()))
    }
}

pub(super) struct StaticCommentary(pub(super) &'static str);

#[async_trait]
impl CommentGenerator for StaticCommentary {
    async fn generate(
        &self,
        _report: &ScoreReport,
        _prompt: &CommentPrompt,
    ) -> Result<Comment, CommentaryError> {
        Ok(Comment {
            text: self.0.to_string(),
            source: CommentSource::Generated,
        })
    }
}

pub(super) struct FailingCommentary(pub(super) fn() -> CommentaryError);

#[async_trait]
impl CommentGenerator for FailingCommentary {
    async fn generate(
        &self,
        _report: &ScoreReport,
        _prompt: &CommentPrompt,
    ) -> Result<Comment, CommentaryError> {
        Err((self.0)())
    }
}

#[derive(Debug, Default)]
pub(super) struct DriveCalls {
    pub(super) documents: Vec<(String, String)>,
    pub(super) exported: Vec<String>,
    pub(super) uploaded: Vec<(String, usize)>,
    pub(super) shared: Vec<String>,
    pub(super) deleted: Vec<String>,
}

#[derive(Debug, Default)]
pub(super) struct FakeDrive {
    pub(super) calls: Mutex<DriveCalls>,
    pub(super) fail_export: bool,
    pub(super) fail_delete: bool,
    pub(super) omit_link: bool,
}

impl FakeDrive {
    pub(super) fn calls(&self) -> std::sync::MutexGuard<'_, DriveCalls> {
        self.calls.lock().expect("drive mutex poisoned")
    }
}

#[async_trait]
impl DriveGateway for FakeDrive {
    async fn create_document(
        &self,
        title: &str,
        html_body: &str,
        _parent_folder_id: Option<&str>,
    ) -> Result<String, DriveOperationError> {
        self.calls()
            .documents
            .push((title.to_string(), html_body.to_string()));
        Ok("doc-1".to_string())
    }

    async fn export_pdf(&self, document_id: &str) -> Result<Vec<u8>, DriveOperationError> {
        self.calls().exported.push(document_id.to_string());
        if self.fail_export {
            return Err(DriveOperationError::Backend("export quota exceeded".to_string()));
        }
        Ok(b"%PDF-1.4".to_vec())
    }

    async fn upload_pdf(
        &self,
        name: &str,
        pdf: Vec<u8>,
        _parent_folder_id: Option<&str>,
    ) -> Result<DriveFile, DriveOperationError> {
        self.calls().uploaded.push((name.to_string(), pdf.len()));
        Ok(DriveFile {
            file_id: "pdf-1".to_string(),
            web_view_link: (!self.omit_link).then(|| PDF_LINK.to_string()),
        })
    }

    async fn share_publicly(&self, file_id: &str) -> Result<(), DriveOperationError> {
        self.calls().shared.push(file_id.to_string());
        Ok(())
    }

    async fn delete_file(&self, file_id: &str) -> Result<(), DriveOperationError> {
        self.calls().deleted.push(file_id.to_string());
        if self.fail_delete {
            return Err(DriveOperationError::Backend("permission denied".to_string()));
        }
        Ok(())
    }
}

pub(super) fn service_with<L: AnswerLog + 'static>(
    log: Arc<L>,
    commentary: Arc<dyn CommentGenerator>,
    drive: Arc<FakeDrive>,
) -> CheckSheetService<L> {
    CheckSheetService::new(
        log,
        commentary,
        Some(ReportPublisher::new(drive, Some("folder-1".to_string()))),
    )
}

pub(super) fn build_service() -> (
    CheckSheetService<MemoryAnswerLog>,
    Arc<MemoryAnswerLog>,
    Arc<FakeDrive>,
) {
    let log = Arc::new(MemoryAnswerLog::default());
    let drive = Arc::new(FakeDrive::default());
    let service = service_with(
        log.clone(),
        Arc::new(StaticCommentary("## 総評\n**重要**な指摘")),
        drive.clone(),
    );
    (service, log, drive)
}

pub(super) async fn json_body(response: Response) -> Value {
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
