use std::fmt::Debug;
use std::future::Future;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use google_drive3::api::{File, Permission, Scope};
use google_drive3::hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use google_drive3::hyper_util::client::legacy::connect::HttpConnector;
use google_drive3::hyper_util::client::legacy::Client;
use google_drive3::hyper_util::rt::TokioExecutor;
use google_drive3::{yup_oauth2, DriveHub};
use http_body_util::BodyExt;

pub const GOOGLE_DOC_MIME: &str = "application/vnd.google-apps.document";
pub const PDF_MIME: &str = "application/pdf";

/// Connector used by the service-account backed client.
pub type DriveConnector = HttpsConnector<HttpConnector>;

/// A file stored on Drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveFile {
    pub file_id: String,
    pub web_view_link: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DriveOperationError {
    #[error("drive operation failed: {0}")]
    Backend(String),
    #[error("drive {operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },
    #[error("drive returned no file id for {0}")]
    MissingId(&'static str),
    #[error("unable to initialise drive client: {0}")]
    Setup(String),
}

/// The Drive calls needed to turn report HTML into a shared PDF.
#[async_trait]
pub trait DriveGateway: Debug + Send + Sync {
    /// Import HTML as a Google Doc and return its id.
    async fn create_document(
        &self,
        title: &str,
        html_body: &str,
        parent_folder_id: Option<&str>,
    ) -> Result<String, DriveOperationError>;

    async fn export_pdf(&self, document_id: &str) -> Result<Vec<u8>, DriveOperationError>;

    async fn upload_pdf(
        &self,
        name: &str,
        pdf: Vec<u8>,
        parent_folder_id: Option<&str>,
    ) -> Result<DriveFile, DriveOperationError>;

    /// Grant `anyone` the `reader` role.
    async fn share_publicly(&self, file_id: &str) -> Result<(), DriveOperationError>;

    async fn delete_file(&self, file_id: &str) -> Result<(), DriveOperationError>;
}

/// Thin async wrapper around the generated google-drive3 client. Every call is
/// bounded by `timeout`.
pub struct GoogleDriveClient<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    hub: DriveHub<C>,
    timeout: Duration,
}

impl<C> GoogleDriveClient<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    pub fn new(hub: DriveHub<C>, timeout: Duration) -> Self {
        Self { hub, timeout }
    }

    fn map_error<E: std::fmt::Display>(err: E) -> DriveOperationError {
        DriveOperationError::Backend(err.to_string())
    }

    async fn bounded<T, E, F>(
        &self,
        operation: &'static str,
        call: F,
    ) -> Result<T, DriveOperationError>
    where
        F: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| DriveOperationError::Timeout {
                operation,
                after: self.timeout,
            })?
            .map_err(Self::map_error)
    }
}

impl GoogleDriveClient<DriveConnector> {
    /// Authenticate with a service account key file.
    pub async fn from_service_account(
        key_path: &Path,
        timeout: Duration,
    ) -> Result<Self, DriveOperationError> {
        let key = yup_oauth2::read_service_account_key(key_path)
            .await
            .map_err(|err| {
                DriveOperationError::Setup(format!("{}: {err}", key_path.display()))
            })?;
        let auth = yup_oauth2::ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|err| DriveOperationError::Setup(err.to_string()))?;

        let connector = HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|err| DriveOperationError::Setup(err.to_string()))?
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(connector);

        Ok(Self::new(DriveHub::new(client, auth), timeout))
    }
}

impl<C> std::fmt::Debug for GoogleDriveClient<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleDriveClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn parents(parent_folder_id: Option<&str>) -> Option<Vec<String>> {
    parent_folder_id.map(|parent| vec![parent.to_string()])
}

#[async_trait]
impl<C> DriveGateway for GoogleDriveClient<C>
where
    C: google_drive3::common::Connector + Send + Sync + 'static,
{
    async fn create_document(
        &self,
        title: &str,
        html_body: &str,
        parent_folder_id: Option<&str>,
    ) -> Result<String, DriveOperationError> {
        let metadata = File {
            name: Some(title.to_string()),
            mime_type: Some(GOOGLE_DOC_MIME.to_string()),
            parents: parents(parent_folder_id),
            ..File::default()
        };
        let cursor = Cursor::new(html_body.as_bytes().to_vec());

        let (_, file) = self
            .bounded(
                "document import",
                self.hub
                    .files()
                    .create(metadata)
                    .param("fields", "id")
                    .supports_all_drives(true)
                    .add_scope(Scope::Full)
                    .upload(cursor, mime::TEXT_HTML),
            )
            .await?;

        file.id
            .filter(|id| !id.is_empty())
            .ok_or(DriveOperationError::MissingId("document import"))
    }

    async fn export_pdf(&self, document_id: &str) -> Result<Vec<u8>, DriveOperationError> {
        let response = self
            .bounded(
                "pdf export",
                self.hub
                    .files()
                    .export(document_id, PDF_MIME)
                    .add_scope(Scope::Full)
                    .doit(),
            )
            .await?;

        let body = self
            .bounded("pdf download", response.into_body().collect())
            .await?;
        Ok(body.to_bytes().to_vec())
    }

    async fn upload_pdf(
        &self,
        name: &str,
        pdf: Vec<u8>,
        parent_folder_id: Option<&str>,
    ) -> Result<DriveFile, DriveOperationError> {
        let metadata = File {
            name: Some(name.to_string()),
            mime_type: Some(PDF_MIME.to_string()),
            parents: parents(parent_folder_id),
            ..File::default()
        };
        let (_, file) = self
            .bounded(
                "pdf upload",
                self.hub
                    .files()
                    .create(metadata)
                    .param("fields", "id,webViewLink")
                    .supports_all_drives(true)
                    .add_scope(Scope::Full)
                    .upload(Cursor::new(pdf), mime::APPLICATION_PDF),
            )
            .await?;

        let file_id = file
            .id
            .filter(|id| !id.is_empty())
            .ok_or(DriveOperationError::MissingId("pdf upload"))?;
        Ok(DriveFile {
            file_id,
            web_view_link: file.web_view_link,
        })
    }

    async fn share_publicly(&self, file_id: &str) -> Result<(), DriveOperationError> {
        let permission = Permission {
            role: Some("reader".to_string()),
            type_: Some("anyone".to_string()),
            ..Permission::default()
        };

        self.bounded(
            "share",
            self.hub
                .permissions()
                .create(permission, file_id)
                .supports_all_drives(true)
                .add_scope(Scope::Full)
                .doit(),
        )
        .await?;
        Ok(())
    }

    async fn delete_file(&self, file_id: &str) -> Result<(), DriveOperationError> {
        self.bounded(
            "delete",
            self.hub
                .files()
                .delete(file_id)
                .supports_all_drives(true)
                .add_scope(Scope::Full)
                .doit(),
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_service_account_key_is_a_setup_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.json");
        let err = GoogleDriveClient::from_service_account(&path, Duration::from_secs(1))
            .await
            .expect_err("key file is absent");
        assert!(matches!(err, DriveOperationError::Setup(_)));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn timeout_errors_name_the_operation() {
        let err = DriveOperationError::Timeout {
            operation: "pdf export",
            after: Duration::from_secs(60),
        };
        assert_eq!(err.to_string(), "drive pdf export timed out after 60s");
    }
}
