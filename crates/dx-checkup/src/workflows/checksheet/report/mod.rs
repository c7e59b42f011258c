//! Report rendering: document model, HTML export, radar chart and Drive publishing.

pub mod chart;
pub mod document;
pub mod drive;
pub mod html;
pub mod markdown;
pub mod publisher;

pub use chart::{chart_outcome, ChartError, ChartImage, ChartRenderer, QuickChartRenderer};
pub use document::{build_report_document, Block, ChartOutcome, ReportDocument, ScoreRow};
pub use drive::{DriveConnector, DriveFile, DriveGateway, DriveOperationError, GoogleDriveClient};
pub use html::render_html;
pub use markdown::Run;
pub use publisher::{
    file_view_url, report_file_stem, PublishError, PublishStep, PublishedReport, ReportPublisher,
};
