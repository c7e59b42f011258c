//! Digital transformation check sheet: scoring, advisory commentary and PDF
//! report publishing.

pub mod answer_log;
pub mod commentary;
pub mod domain;
pub mod prompt;
pub mod questions;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answer_log::{AnswerLog, CsvAnswerLog, SinkError};
pub use commentary::{
    default_comment, Comment, CommentGenerator, CommentSource, CommentaryError, DefaultCommentary,
    FallbackCommentary, GeminiCommentary,
};
pub use domain::{
    Answer, AnswerSet, AnswerSetError, Category, CategoryRating, CategoryScore, ResultTier,
    ScoreReport, ScoreReportView, QUESTIONS_PER_CATEGORY, QUESTION_COUNT,
};
pub use prompt::{build_prompt, CommentPrompt};
pub use questions::{catalog, Question};
pub use router::checksheet_router;
pub use scoring::{flagged_questions, score, score_tokens};
pub use service::{CheckSheetError, CheckSheetOutcome, CheckSheetService};
