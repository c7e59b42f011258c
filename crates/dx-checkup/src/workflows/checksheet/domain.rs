use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Number of questions in a check sheet submission.
pub const QUESTION_COUNT: usize = 20;
/// Questions covered by each category block.
pub const QUESTIONS_PER_CATEGORY: usize = 5;

/// A single yes/no answer. `Yes` indicates a problem and scores a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// The literal that increments a category score.
    pub const PROBLEM: Answer = Answer::Yes;

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn points(self) -> u8 {
        u8::from(self == Self::PROBLEM)
    }
}

/// Validated, ordered set of exactly [`QUESTION_COUNT`] answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    answers: [Answer; QUESTION_COUNT],
}

impl AnswerSet {
    pub fn new(answers: [Answer; QUESTION_COUNT]) -> Self {
        Self { answers }
    }

    /// Parse raw answer literals, rejecting wrong lengths and unknown tokens.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, AnswerSetError> {
        if tokens.len() != QUESTION_COUNT {
            return Err(AnswerSetError::WrongLength {
                expected: QUESTION_COUNT,
                received: tokens.len(),
            });
        }

        let mut answers = [Answer::No; QUESTION_COUNT];
        for (index, raw) in tokens.iter().enumerate() {
            let raw = raw.as_ref();
            answers[index] = Answer::parse(raw).ok_or_else(|| AnswerSetError::InvalidToken {
                position: index + 1,
                value: raw.to_string(),
            })?;
        }

        Ok(Self { answers })
    }

    pub fn answers(&self) -> &[Answer; QUESTION_COUNT] {
        &self.answers
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.answers.iter().map(|answer| answer.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerSetError {
    #[error("expected {expected} answers, received {received}")]
    WrongLength { expected: usize, received: usize },
    #[error("answer to Q{position} must be \"yes\" or \"no\", received {value:?}")]
    InvalidToken { position: usize, value: String },
}

/// The four fixed problem domains, declared in answer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Communication,
    Process,
    Security,
    Management,
}

impl Category {
    /// Answer order, used for every per-category breakdown.
    pub const CANONICAL: [Category; 4] = [
        Category::Communication,
        Category::Process,
        Category::Security,
        Category::Management,
    ];

    /// Tie-break order when a single top issue has to be named.
    pub const PRIORITY: [Category; 4] = [
        Category::Security,
        Category::Management,
        Category::Process,
        Category::Communication,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Communication => "コミュニケーション・情報共有",
            Self::Process => "業務プロセス・効率化",
            Self::Security => "セキュリティ・情報管理",
            Self::Management => "経営・データ活用",
        }
    }

    pub const fn canonical_index(self) -> usize {
        match self {
            Self::Communication => 0,
            Self::Process => 1,
            Self::Security => 2,
            Self::Management => 3,
        }
    }

    pub const fn question_range(self) -> Range<usize> {
        let start = self.canonical_index() * QUESTIONS_PER_CATEGORY;
        start..start + QUESTIONS_PER_CATEGORY
    }

    pub fn for_question(index: usize) -> Option<Self> {
        Self::CANONICAL
            .into_iter()
            .find(|category| category.question_range().contains(&index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
}

/// Per-category scores in canonical order plus the derived total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    scores: [u8; 4],
}

impl ScoreReport {
    /// Build a report from canonical-order scores; `None` if any exceeds the
    /// category question count.
    pub fn from_scores(scores: [u8; 4]) -> Option<Self> {
        scores
            .iter()
            .all(|score| usize::from(*score) <= QUESTIONS_PER_CATEGORY)
            .then_some(Self { scores })
    }

    /// Blocks of five answers can never exceed the per-category maximum.
    pub(super) fn from_block_scores(scores: [u8; 4]) -> Self {
        Self { scores }
    }

    pub fn score(&self, category: Category) -> u8 {
        self.scores[category.canonical_index()]
    }

    pub fn total(&self) -> u8 {
        self.scores.iter().sum()
    }

    pub fn categories(&self) -> impl Iterator<Item = CategoryScore> + '_ {
        Category::CANONICAL.into_iter().map(|category| CategoryScore {
            category,
            score: self.score(category),
        })
    }

    pub fn tier(&self) -> ResultTier {
        ResultTier::for_total(self.total())
    }

    /// Highest scoring category, ties resolved by [`Category::PRIORITY`].
    pub fn top_issue(&self) -> CategoryScore {
        let category = Category::PRIORITY
            .into_iter()
            .fold(Category::PRIORITY[0], |best, candidate| {
                if self.score(candidate) > self.score(best) {
                    candidate
                } else {
                    best
                }
            });
        CategoryScore {
            category,
            score: self.score(category),
        }
    }

    pub fn view(&self) -> ScoreReportView {
        let tier = self.tier();
        ScoreReportView {
            categories: self.categories().collect(),
            total: self.total(),
            tier,
            tier_label: tier.label(),
            top_issue: self.top_issue(),
        }
    }
}

/// Serializable projection of a [`ScoreReport`].
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReportView {
    pub categories: Vec<CategoryScore>,
    pub total: u8,
    pub tier: ResultTier,
    pub tier_label: &'static str,
    pub top_issue: CategoryScore,
}

/// Coarse urgency band for the total score. Ordering follows urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultTier {
    Exemplary,
    NearlyThere,
    Warning,
    Critical,
}

impl ResultTier {
    /// Descending lower bounds (inclusive); the first match wins.
    pub const THRESHOLDS: [(u8, ResultTier); 4] = [
        (15, ResultTier::Critical),
        (10, ResultTier::Warning),
        (5, ResultTier::NearlyThere),
        (0, ResultTier::Exemplary),
    ];

    pub fn for_total(total: u8) -> Self {
        Self::THRESHOLDS
            .into_iter()
            .find(|(floor, _)| total >= *floor)
            .map(|(_, tier)| tier)
            .unwrap_or(Self::Exemplary)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "【赤信号】今すぐ改革必須！DX待ったなしタイプ",
            Self::Warning => "【黄信号】課題が山積！アナログ業務見直しタイプ",
            Self::NearlyThere => "【青信号】あと一歩！デジタル化優等生タイプ",
            Self::Exemplary => "【素晴らしい！】DX推進リーダータイプ",
        }
    }

    pub const fn overall_evaluation(self) -> &'static str {
        match self {
            Self::Critical => {
                "緊急の対応が必要な状態です。デジタル化の抜本的見直しが求められます。"
            }
            Self::Warning => "改善が必要な状態です。段階的なデジタル化推進が重要です。",
            Self::NearlyThere => {
                "部分的に改善が必要な状態です。さらなる効率化が期待できます。"
            }
            Self::Exemplary => "良好な状態です。継続的な改善により更なる向上が期待できます。",
        }
    }

    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Critical => "緊急対応が必要",
            Self::Warning => "改善が必要",
            Self::NearlyThere => "部分的改善",
            Self::Exemplary => "良好",
        }
    }
}

/// Qualitative rating of one category row in the score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRating {
    NeedsImprovement,
    Caution,
    Good,
}

impl CategoryRating {
    pub fn for_score(score: u8) -> Self {
        match score {
            4.. => Self::NeedsImprovement,
            2.. => Self::Caution,
            _ => Self::Good,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "要改善",
            Self::Caution => "注意",
            Self::Good => "良好",
        }
    }

    pub const fn detail(self) -> &'static str {
        match self {
            Self::NeedsImprovement => "緊急の対応が必要です",
            Self::Caution => "改善の余地があります",
            Self::Good => "良好な状態です",
        }
    }
}
