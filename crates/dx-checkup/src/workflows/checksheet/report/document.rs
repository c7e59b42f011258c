use crate::workflows::checksheet::commentary::Comment;
use crate::workflows::checksheet::domain::{
    CategoryRating, ScoreReport, QUESTIONS_PER_CATEGORY, QUESTION_COUNT,
};

use super::chart::ChartImage;
use super::markdown::{classify, CommentLine, Run};

pub const REPORT_TITLE: &str = "会社のIT健康診断！\nデジタル化推進度チェックシート";
pub const REPORT_SUBTITLE: &str = "パーソナル診断レポート";
pub const COMMENT_SECTION_TITLE: &str = "ITコンサルタントによるAI分析コメント";
pub const NEXT_STEPS_TITLE: &str = "次のステップのご案内";

const NEXT_STEPS_BODY: [&str; 6] = [
    "診断で明らかになった課題を解決するため、専門家があなたの会社に合わせた最適な解決策をご提案します。",
    "【Step1：情報収集から始めたい方へ】",
    "「明日からできる！情報セキュリティ対策 最初の10のステップ」の資料をご用意しています。ご希望の場合はお問い合わせください。",
    "【Step2：具体的に相談したい方へ】",
    "「IT課題の壁打ち 30分無料オンライン相談会」を毎月3社様限定で実施中です。以下の連絡先までお気軽にご連絡ください。",
    "連絡先: xxx-xxxx-xxxx / email: info@example.com",
];

/// One row of the category score table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub category_label: &'static str,
    pub score: u8,
    pub rating: CategoryRating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title(String),
    Subtitle(String),
    HorizontalRule,
    SectionTitle(String),
    Heading { level: u8, text: String },
    Paragraph(Vec<Run>),
    BulletItem(Vec<Run>),
    NumberedItem { number: u32, runs: Vec<Run> },
    ScoreTable(Vec<ScoreRow>),
    Image(ChartImage),
    BlankLine,
    PageBreak,
}

/// Result of asking the chart service for a radar image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// No chart endpoint configured.
    Disabled,
    Rendered(ChartImage),
    /// The chart could not be fetched; a text listing stands in for it.
    Unavailable,
}

/// Ordered, typed blocks that make up a diagnosis report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn paragraph(&mut self, text: impl Into<String>) {
        self.push(Block::Paragraph(vec![Run::plain(text)]));
    }
}

pub fn build_report_document(
    report: &ScoreReport,
    comment: &Comment,
    chart: ChartOutcome,
) -> ReportDocument {
    let mut document = ReportDocument { blocks: Vec::new() };
    let tier = report.tier();

    document.push(Block::Title(REPORT_TITLE.to_string()));
    document.push(Block::Subtitle(REPORT_SUBTITLE.to_string()));
    document.push(Block::HorizontalRule);

    document.push(Block::SectionTitle("総合診断結果".to_string()));
    document.paragraph(format!(
        "貴社の総合スコアは {} / {} 点です。",
        report.total(),
        QUESTION_COUNT
    ));
    document.paragraph(format!("診断タイプ： {}", tier.label()));
    document.push(Block::BlankLine);

    document.push(Block::SectionTitle("カテゴリ別スコア".to_string()));
    document.push(Block::ScoreTable(
        report
            .categories()
            .map(|entry| ScoreRow {
                category_label: entry.category.label(),
                score: entry.score,
                rating: CategoryRating::for_score(entry.score),
            })
            .collect(),
    ));
    match chart {
        ChartOutcome::Disabled => {}
        ChartOutcome::Rendered(image) => document.push(Block::Image(image)),
        ChartOutcome::Unavailable => {
            for entry in report.categories() {
                document.push(Block::BulletItem(vec![Run::plain(format!(
                    "{}: {} / {}",
                    entry.category.label(),
                    entry.score,
                    QUESTIONS_PER_CATEGORY
                ))]));
            }
        }
    }
    document.push(Block::BlankLine);

    document.push(Block::SectionTitle("総合評価".to_string()));
    document.paragraph(format!(
        "総合スコア {}/{}点: {}",
        report.total(),
        QUESTION_COUNT,
        tier.verdict()
    ));
    document.push(Block::BlankLine);

    document.push(Block::SectionTitle(COMMENT_SECTION_TITLE.to_string()));
    append_comment(&mut document, &comment.text);

    document.push(Block::PageBreak);
    document.push(Block::SectionTitle(NEXT_STEPS_TITLE.to_string()));
    for line in NEXT_STEPS_BODY {
        if line.starts_with('【') {
            document.push(Block::BlankLine);
        }
        document.paragraph(line);
    }

    document
}

fn append_comment(document: &mut ReportDocument, text: &str) {
    let mut seen_section = false;

    for line in text.lines() {
        match classify(line) {
            CommentLine::Heading { level, text } => {
                if level == 2 {
                    if seen_section {
                        document.push(Block::PageBreak);
                    }
                    seen_section = true;
                }
                document.push(Block::Heading { level, text });
            }
            CommentLine::Bullet(runs) => document.push(Block::BulletItem(runs)),
            CommentLine::Numbered { number, runs } => {
                document.push(Block::NumberedItem { number, runs })
            }
            CommentLine::Blank => document.push(Block::BlankLine),
            CommentLine::Paragraph(runs) => document.push(Block::Paragraph(runs)),
        }
    }
}
