use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};

use super::domain::{AnswerSet, QUESTION_COUNT};

pub const TIMESTAMP_HEADER: &str = "タイムスタンプ";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only sink for raw answer submissions.
pub trait AnswerLog: Send + Sync {
    fn append(&self, submitted_at: DateTime<Local>, answers: &AnswerSet) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("answer log io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("answer log csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("answer log unavailable: {0}")]
    Unavailable(String),
}

/// Header row: timestamp followed by `Q1..Q20`.
pub fn header_row() -> Vec<String> {
    std::iter::once(TIMESTAMP_HEADER.to_string())
        .chain((1..=QUESTION_COUNT).map(|number| format!("Q{number}")))
        .collect()
}

/// Data row in header order.
pub fn answer_row(submitted_at: DateTime<Local>, answers: &AnswerSet) -> Vec<String> {
    std::iter::once(submitted_at.format(TIMESTAMP_FORMAT).to_string())
        .chain(answers.tokens().map(str::to_string))
        .collect()
}

/// CSV file sink. The header is written when the file is new or empty; appends
/// are serialized so rows never interleave.
#[derive(Debug)]
pub struct CsvAnswerLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvAnswerLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl AnswerLog for CsvAnswerLog {
    fn append(&self, submitted_at: DateTime<Local>, answers: &AnswerSet) -> Result<(), SinkError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| SinkError::Unavailable("answer log mutex poisoned".to_string()))?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;
        let is_empty = file.metadata().map_err(|err| self.io_error(err))?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_empty {
            writer.write_record(header_row())?;
        }
        writer.write_record(answer_row(submitted_at, answers))?;
        writer.flush().map_err(|err| self.io_error(err))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::checksheet::domain::Answer;
    use chrono::TimeZone;

    #[test]
    fn header_lists_twenty_questions() {
        let header = header_row();
        assert_eq!(header.len(), QUESTION_COUNT + 1);
        assert_eq!(header[0], TIMESTAMP_HEADER);
        assert_eq!(header[1], "Q1");
        assert_eq!(header[20], "Q20");
    }

    #[test]
    fn rows_keep_answer_order() {
        let mut answers = [Answer::No; QUESTION_COUNT];
        answers[0] = Answer::Yes;
        answers[19] = Answer::Yes;
        let submitted_at = Local
            .with_ymd_and_hms(2025, 4, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp");

        let row = answer_row(submitted_at, &AnswerSet::new(answers));
        assert_eq!(row[0], "2025-04-01 09:30:00");
        assert_eq!(row[1], "yes");
        assert_eq!(row[2], "no");
        assert_eq!(row[20], "yes");
    }
}
