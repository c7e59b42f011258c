//! Line classifier for the Markdown subset used by advisory comments.

use serde::Serialize;

/// A span of text, optionally bold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentLine {
    Heading { level: u8, text: String },
    Bullet(Vec<Run>),
    Numbered { number: u32, runs: Vec<Run> },
    Blank,
    Paragraph(Vec<Run>),
}

/// Classify one comment line after trimming surrounding whitespace.
pub fn classify(line: &str) -> CommentLine {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return CommentLine::Blank;
    }
    for (prefix, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if let Some(text) = trimmed.strip_prefix(prefix) {
            return CommentLine::Heading {
                level,
                text: text.trim().to_string(),
            };
        }
    }
    if let Some(item) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
    {
        return CommentLine::Bullet(parse_inline(item));
    }
    if let Some((number, item)) = numbered_item(trimmed) {
        return CommentLine::Numbered {
            number,
            runs: parse_inline(item),
        };
    }

    CommentLine::Paragraph(parse_inline(trimmed))
}

fn numbered_item(line: &str) -> Option<(u32, &str)> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(". ")?;
    let number = line[..digits].parse().ok()?;
    Some((number, rest))
}

/// Split `**bold**` spans out of a line. An opening `**` without a matching
/// close is kept as literal text.
pub fn parse_inline(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("**") else {
            break;
        };

        if open > 0 {
            runs.push(Run::plain(&rest[..open]));
        }
        let inner = &after_open[..close];
        if !inner.is_empty() {
            runs.push(Run::bold(inner));
        }
        rest = &after_open[close + 2..];
    }

    if !rest.is_empty() {
        runs.push(Run::plain(rest));
    }
    runs
}
