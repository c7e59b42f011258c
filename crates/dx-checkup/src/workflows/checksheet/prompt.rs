use super::domain::{Category, ResultTier, ScoreReport, QUESTIONS_PER_CATEGORY};

/// Instruction text for the generator together with the tier it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPrompt {
    pub tier: ResultTier,
    pub text: String,
}

const PREAMBLE: &str = "\
あなたは優秀な中小企業向けのITコンサルタントです。以下の診断結果データに基づき、具体的で示唆に富むアドバイスを生成してください。

【重要】絶対に守ってください：
- 個人への呼びかけ（「◯◯社長」「○○様」「社長様」「〜様」など）は一切使用しないでください
- 挨拶や感謝の言葉は一切不要です
- いきなり診断結果の解説から始めてください
- 一般的なアドバイスとして記述してください

【スコアの意味】：
- 点数が高い（4-5点）= 問題が多い = 改善が必要
- 点数が低い（0-1点）= 問題が少ない = 良好な状態
";

const INSTRUCTIONS: &str = "\
# 指示
1. まず、総合診断タイプと総合スコアについて、その意味合いを詳しく解説してください。

2. 次に「## 最優先で取り組むべき課題」という見出しで、最もスコアが高いカテゴリを1つだけ取り上げてください。同点のカテゴリがある場合は【カテゴリの重要度順位】の上位を選んでください。

3. その後、すべてのカテゴリについて、回答順序で詳細に分析してください：
   - 各カテゴリの現状評価（点数が高いほど問題が多い）
   - そのカテゴリで起きている可能性が高い具体的な問題点を3〜5個
   - 各問題点について、なぜそれが問題なのかの理由
   - 改善のための具体的で実践的なアドバイスを2〜3個
   - 各アドバイスについて、どのような効果が期待できるかの説明

4. 各カテゴリは以下の形式で出力してください：
   ## 【カテゴリ名】スコア：X/5点
   ### 現状評価
   （点数に応じた詳細な評価コメント）

   ### 主な問題点とその影響
   * **問題点1**: 具体的な問題の説明と、なぜそれが問題なのかの理由
   * **問題点2**: 具体的な問題の説明と、なぜそれが問題なのかの理由
   * **問題点3**: 具体的な問題の説明と、なぜそれが問題なのかの理由

   ### 改善のための具体的アドバイス
   * **アドバイス1**: 具体的な改善方法と期待される効果
   * **アドバイス2**: 具体的な改善方法と期待される効果
   * **アドバイス3**: 具体的な改善方法と期待される効果

5. 全体を通して、専門用語は避け、中小企業の経営者に寄り添うような、丁寧かつ力強いトーンで記述してください。

6. 出力はMarkdown形式で、見出しや箇条書きを効果的に使用してください。文字数は1500〜2000字程度にまとめてください。

7. 冒頭の挨拶は一切不要です。いきなり診断結果の解説から始めてください。

8. 各問題点やアドバイスは、中小企業が実際に取り組める具体的な内容にしてください。

9. 可能な限り、数値や期間、具体的なツール名や手法名を含めて、実践的な内容にしてください。";

/// Assemble the generator instruction for a score report.
pub fn build_prompt(report: &ScoreReport) -> CommentPrompt {
    let tier = report.tier();
    let mut text = String::from(PREAMBLE);

    text.push_str("\n【カテゴリの重要度順位】（同点時の優先度）：\n");
    for (rank, category) in Category::PRIORITY.iter().enumerate() {
        let note = if rank == 0 { "（最重要）" } else { "" };
        text.push_str(&format!("{}. {}{}\n", rank + 1, category.label(), note));
    }

    text.push_str("\n# 診断結果データ\n");
    text.push_str(&format!("- 総合診断タイプ: {}\n", tier.label()));
    text.push_str(&format!("- 総合スコア: {} / 20点\n", report.total()));
    text.push_str("- カテゴリ別スコア:\n");
    for entry in report.categories() {
        text.push_str(&format!(
            "  - {}: {} / {}点\n",
            entry.category.label(),
            entry.score,
            QUESTIONS_PER_CATEGORY
        ));
    }

    text.push_str("\n【カテゴリの並び順】（回答順序、この順序を変えないでください）：\n");
    for category in Category::CANONICAL {
        text.push_str(&format!("- {}\n", category.label()));
    }

    text.push('\n');
    text.push_str(INSTRUCTIONS);

    CommentPrompt { tier, text }
}
