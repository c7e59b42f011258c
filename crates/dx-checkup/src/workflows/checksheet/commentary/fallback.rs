use async_trait::async_trait;

use super::analysis::analysis;
use super::{Comment, CommentGenerator, CommentSource, CommentaryError};
use crate::workflows::checksheet::domain::{ScoreReport, QUESTIONS_PER_CATEGORY};
use crate::workflows::checksheet::prompt::CommentPrompt;

/// Deterministic comment built from static templates. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCommentary;

#[async_trait]
impl CommentGenerator for DefaultCommentary {
    async fn generate(
        &self,
        report: &ScoreReport,
        _prompt: &CommentPrompt,
    ) -> Result<Comment, CommentaryError> {
        Ok(Comment {
            text: default_comment(report),
            source: CommentSource::Fallback,
        })
    }
}

/// Render the fallback comment in the same Markdown subset the generator uses.
pub fn default_comment(report: &ScoreReport) -> String {
    let tier = report.tier();
    let mut comment = String::from("診断結果の詳細分析\n\n## 総合診断結果について\n\n");

    comment.push_str(&format!(
        "あなたの会社は「{}」に該当します。総合スコアは{}/20点で、{}\n\n",
        tier.label(),
        report.total(),
        tier.overall_evaluation()
    ));
    comment.push_str(
        "この診断では、デジタル化推進における4つの重要な領域を評価しています。\
         各領域のスコアが高いほど、その領域で改善が必要な課題が多いことを示しています。\n\n",
    );

    let top = report.top_issue();
    comment.push_str("## 最優先で取り組むべき課題\n\n");
    if top.score == 0 {
        comment.push_str(
            "現時点で緊急に対応すべき課題は見当たりません。\
             現在の取り組みを継続し、定期的な見直しを行ってください。\n\n",
        );
    } else {
        let entry = analysis(top.category, top.score);
        comment.push_str(&format!(
            "最も改善が必要な領域は **{}**（{}/{}点）です。{}\n\n",
            top.category.label(),
            top.score,
            QUESTIONS_PER_CATEGORY,
            entry.evaluation
        ));
        if let Some(first) = entry.advice.first() {
            comment.push_str(&format!(
                "* **まず取り組むこと**: {}\n\n",
                first.description
            ));
        }
    }

    for entry in report.categories() {
        let detail = analysis(entry.category, entry.score);
        comment.push_str(&format!(
            "## 【{}】スコア：{}/{}点\n### 現状評価\n{}\n\n### 主な問題点とその影響\n",
            entry.category.label(),
            entry.score,
            QUESTIONS_PER_CATEGORY,
            detail.evaluation
        ));
        for problem in detail.problems {
            comment.push_str(&format!("* **{}**: {}\n", problem.title, problem.description));
        }

        comment.push_str("\n### 改善のための具体的アドバイス\n");
        for advice in detail.advice {
            comment.push_str(&format!("* **{}**: {}\n", advice.title, advice.description));
        }
        comment.push('\n');
    }

    comment.push_str(
        "## 次のステップについて\n\n\
         診断で明らかになった課題を解決するため、段階的な改善計画を立てることをお勧めします。\
         特にスコアの高い領域から優先的に取り組むことで、効果的なデジタル化推進が期待できます。\n\n\
         詳細な改善提案については、専門家にご相談ください。",
    );

    comment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::checksheet::domain::{Category, ResultTier};

    fn report(scores: [u8; 4]) -> ScoreReport {
        ScoreReport::from_scores(scores).expect("valid scores")
    }

    #[test]
    fn contains_tier_label_for_every_total() {
        for total in 0..=20u8 {
            let mut scores = [0u8; 4];
            let mut remaining = total;
            for slot in scores.iter_mut() {
                let take = remaining.min(5);
                *slot = take;
                remaining -= take;
            }
            let report = report(scores);
            let comment = default_comment(&report);
            assert!(!comment.is_empty());
            assert!(comment.contains(ResultTier::for_total(total).label()));
        }
    }

    #[test]
    fn names_security_as_top_issue_when_only_security_fails() {
        let comment = default_comment(&report([0, 0, 5, 0]));
        assert!(comment.contains("最も改善が必要な領域は **セキュリティ・情報管理**（5/5点）"));
    }

    #[test]
    fn tie_on_top_score_prefers_management_over_process() {
        let comment = default_comment(&report([1, 4, 2, 4]));
        assert!(comment.contains("最も改善が必要な領域は **経営・データ活用**"));
    }

    #[test]
    fn reports_no_urgent_issue_when_all_zero() {
        let comment = default_comment(&report([0, 0, 0, 0]));
        assert!(comment.contains("緊急に対応すべき課題は見当たりません"));
        assert!(!comment.contains("最も改善が必要な領域"));
    }

    #[test]
    fn breakdown_follows_canonical_order() {
        let comment = default_comment(&report([2, 3, 5, 1]));
        let offsets: Vec<usize> = Category::CANONICAL
            .iter()
            .map(|category| {
                comment
                    .find(&format!("## 【{}】", category.label()))
                    .expect("category section present")
            })
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(comment.contains("## 【業務プロセス・効率化】スコア：3/5点"));
    }

    #[test]
    fn output_is_deterministic() {
        let report = report([3, 1, 4, 2]);
        assert_eq!(default_comment(&report), default_comment(&report));
    }

    #[tokio::test]
    async fn generator_reports_fallback_source() {
        let report = report([5, 5, 5, 5]);
        let prompt = crate::workflows::checksheet::prompt::build_prompt(&report);
        let comment = DefaultCommentary
            .generate(&report, &prompt)
            .await
            .expect("default commentary never fails");
        assert_eq!(comment.source, CommentSource::Fallback);
        assert_eq!(comment.text, default_comment(&report));
    }
}
