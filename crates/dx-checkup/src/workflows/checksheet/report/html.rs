//! HTML export of a [`ReportDocument`], shaped for Google Docs import.

use super::document::{Block, ReportDocument, ScoreRow};
use super::markdown::Run;

const STYLE: &str = "body{font-family:sans-serif;font-size:11pt;line-height:1.6;}\
h1.title{text-align:center;font-size:24pt;}\
p.subtitle{text-align:center;font-size:14pt;color:#555555;}\
h2.section{font-size:14pt;font-weight:bold;color:#0B57D0;}\
table.scores{border-collapse:collapse;width:100%;}\
table.scores th,table.scores td{border:1px solid #999999;padding:4pt 8pt;}\
table.scores th{font-size:12pt;font-weight:bold;}";

const PAGE_BREAK: &str = "<div style=\"page-break-before:always\"></div>";

#[derive(Clone, Copy, PartialEq, Eq)]
enum OpenList {
    None,
    Bullets,
    Numbers,
}

pub fn render_html(document: &ReportDocument) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"ja\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>デジタル化推進度チェックシート 診断レポート</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>\n");

    let mut open = OpenList::None;
    for block in document.blocks() {
        let wanted = match block {
            Block::BulletItem(_) => OpenList::Bullets,
            Block::NumberedItem { .. } => OpenList::Numbers,
            _ => OpenList::None,
        };
        if wanted != open {
            close_list(&mut html, open);
            match wanted {
                OpenList::Bullets => html.push_str("<ul>\n"),
                OpenList::Numbers => html.push_str("<ol>\n"),
                OpenList::None => {}
            }
            open = wanted;
        }
        render_block(&mut html, block);
    }
    close_list(&mut html, open);

    html.push_str("</body></html>\n");
    html
}

fn close_list(html: &mut String, open: OpenList) {
    match open {
        OpenList::Bullets => html.push_str("</ul>\n"),
        OpenList::Numbers => html.push_str("</ol>\n"),
        OpenList::None => {}
    }
}

fn render_block(html: &mut String, block: &Block) {
    match block {
        Block::Title(text) => {
            let lines: Vec<String> = text.lines().map(escape_html).collect();
            html.push_str(&format!("<h1 class=\"title\">{}</h1>\n", lines.join("<br>")));
        }
        Block::Subtitle(text) => {
            html.push_str(&format!("<p class=\"subtitle\">{}</p>\n", escape_html(text)));
        }
        Block::HorizontalRule => html.push_str("<hr>\n"),
        Block::SectionTitle(text) => {
            html.push_str(&format!("<h2 class=\"section\">{}</h2>\n", escape_html(text)));
        }
        Block::Heading { level, text } => {
            let level = (*level).clamp(1, 3);
            html.push_str(&format!("<h{level}>{}</h{level}>\n", escape_html(text)));
        }
        Block::Paragraph(runs) => html.push_str(&format!("<p>{}</p>\n", render_runs(runs))),
        Block::BulletItem(runs) => html.push_str(&format!("<li>{}</li>\n", render_runs(runs))),
        Block::NumberedItem { number, runs } => {
            html.push_str(&format!(
                "<li value=\"{number}\">{}</li>\n",
                render_runs(runs)
            ));
        }
        Block::ScoreTable(rows) => render_table(html, rows),
        Block::Image(image) => {
            html.push_str(&format!(
                "<p><img src=\"{}\" alt=\"{}\" width=\"500\"></p>\n",
                image.data_uri(),
                escape_html(&image.alt)
            ));
        }
        Block::BlankLine => html.push_str("<p>&nbsp;</p>\n"),
        Block::PageBreak => {
            html.push_str(PAGE_BREAK);
            html.push('\n');
        }
    }
}

fn render_table(html: &mut String, rows: &[ScoreRow]) {
    html.push_str(
        "<table class=\"scores\"><tr><th>カテゴリ</th><th>スコア</th><th>評価</th><th>詳細</th></tr>\n",
    );
    for row in rows {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{} / 5</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(row.category_label),
            row.score,
            row.rating.label(),
            row.rating.detail()
        ));
    }
    html.push_str("</table>\n");
}

fn render_runs(runs: &[Run]) -> String {
    runs.iter()
        .map(|run| {
            if run.bold {
                format!("<strong>{}</strong>", escape_html(&run.text))
            } else {
                escape_html(&run.text)
            }
        })
        .collect()
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::checksheet::commentary::{Comment, CommentSource};
    use crate::workflows::checksheet::domain::ScoreReport;
    use crate::workflows::checksheet::report::document::{build_report_document, ChartOutcome};

    fn render(text: &str) -> String {
        let report = ScoreReport::from_scores([5, 0, 2, 3]).expect("valid scores");
        let comment = Comment {
            text: text.to_string(),
            source: CommentSource::Generated,
        };
        render_html(&build_report_document(
            &report,
            &comment,
            ChartOutcome::Disabled,
        ))
    }

    #[test]
    fn escapes_comment_text() {
        let html = render("<script>alert('x')</script> & **<b>**");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; "));
        assert!(html.contains("<strong>&lt;b&gt;</strong>"));
    }

    #[test]
    fn groups_consecutive_list_items() {
        let html = render("* a\n* b\n\n1. one\n2. two");
        assert!(html.contains("<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n"));
        assert!(html.contains("<ol>\n<li value=\"1\">one</li>\n<li value=\"2\">two</li>\n</ol>\n"));
    }

    #[test]
    fn renders_score_table_with_ratings() {
        let html = render("");
        assert!(html.contains(
            "<tr><td>コミュニケーション・情報共有</td><td>5 / 5</td><td>要改善</td><td>緊急の対応が必要です</td></tr>"
        ));
        assert!(html.contains(
            "<tr><td>業務プロセス・効率化</td><td>0 / 5</td><td>良好</td><td>良好な状態です</td></tr>"
        ));
        assert!(html.contains("<h1 class=\"title\">会社のIT健康診断！<br>デジタル化推進度チェックシート</h1>"));
    }

    #[test]
    fn page_breaks_are_emitted_before_later_sections() {
        let html = render("## 一\n## 二");
        let breaks = html.matches(PAGE_BREAK).count();
        // one before the second section and one before the call to action
        assert_eq!(breaks, 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render("## 同じ\n本文"), render("## 同じ\n本文"));
    }
}
