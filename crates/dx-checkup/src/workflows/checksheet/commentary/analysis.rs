//! Static evaluation, problem, and advice text per category and score.

use super::super::domain::{Category, QUESTIONS_PER_CATEGORY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAnalysis {
    pub evaluation: &'static str,
    pub problems: &'static [Insight],
    pub advice: &'static [Insight],
}

const fn insight(title: &'static str, description: &'static str) -> Insight {
    Insight { title, description }
}

/// Analysis entry for a category at a given score; scores are clamped to 0..=5.
pub fn analysis(category: Category, score: u8) -> &'static CategoryAnalysis {
    let bucket = usize::from(score).min(QUESTIONS_PER_CATEGORY);
    let table = match category {
        Category::Communication => &COMMUNICATION,
        Category::Process => &PROCESS,
        Category::Security => &SECURITY,
        Category::Management => &MANAGEMENT,
    };
    &table[bucket]
}

const SECURITY: [CategoryAnalysis; 6] = [
    CategoryAnalysis {
        evaluation: "優秀な状態です。セキュリティ対策が適切に実施されています。",
        problems: &[insight(
            "維持・向上の継続",
            "現状のセキュリティレベルを維持し、さらなる向上を図る必要があります。",
        )],
        advice: &[insight(
            "ベストプラクティスの共有",
            "他の部門や他社との情報交換により、さらなる改善の機会を探してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "非常に良好な状態です。基本的なセキュリティ対策が適切に実施されています。",
        problems: &[insight(
            "継続的な改善の必要性",
            "現状は良好ですが、セキュリティ脅威は日々進化しているため、継続的な改善が必要です。",
        )],
        advice: &[insight(
            "継続的なセキュリティ強化",
            "最新のセキュリティ脅威に対応するため、定期的な対策の見直しと強化を継続してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "良好な状態ですが、さらなる改善の余地があります。",
        problems: &[insight(
            "高度なセキュリティ対策の不足",
            "基本的なセキュリティ対策は整っているものの、より高度な対策の導入により、さらなる安全性の向上が期待できます。",
        )],
        advice: &[insight(
            "高度なセキュリティ対策の検討",
            "多要素認証、暗号化、侵入検知システムなど、より高度なセキュリティ対策の導入を検討してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "部分的に改善が必要な状態です。基本的なセキュリティ対策はある程度整っていますが、さらなる強化が推奨されます。",
        problems: &[
            insight(
                "セキュリティ対策の不統一",
                "一部のセキュリティ対策は実施されているものの、全社的に統一された対策が不足している状況です。",
            ),
            insight(
                "継続的な監視の不足",
                "セキュリティ状況の継続的な監視や評価が不十分で、新たな脅威への対応が遅れる可能性があります。",
            ),
        ],
        advice: &[
            insight(
                "セキュリティポリシーの策定",
                "全社的なセキュリティポリシーを策定し、従業員への周知徹底を図ってください。",
            ),
            insight(
                "定期的なセキュリティ監査",
                "定期的なセキュリティ監査を実施し、対策の効果を評価・改善してください。",
            ),
        ],
    },
    CategoryAnalysis {
        evaluation: "改善が必要な状態です。セキュリティリスクが高く、早急な対策が求められます。",
        problems: &[
            insight(
                "セキュリティ対策の不備",
                "基本的なセキュリティ対策が不十分で、情報漏洩やサイバー攻撃のリスクが高い状態です。",
            ),
            insight(
                "データ管理の課題",
                "重要なデータの管理方法が不適切で、データ損失や不正アクセスのリスクがあります。",
            ),
            insight(
                "アクセス制御の不備",
                "情報へのアクセス権限の管理が不十分で、内部不正のリスクが存在します。",
            ),
        ],
        advice: &[
            insight(
                "セキュリティ対策の強化",
                "ウイルス対策ソフトの導入、ファイアウォールの設定、定期的なセキュリティ更新の実施など、基本的なセキュリティ対策を強化してください。",
            ),
            insight(
                "データバックアップの確立",
                "重要なデータの定期的なバックアップを確立し、復旧手順を明確化してください。",
            ),
        ],
    },
    CategoryAnalysis {
        evaluation: "緊急の対応が必要な状態です。情報セキュリティリスクが非常に高い状況にあります。",
        problems: &[
            insight(
                "情報漏洩リスクの高さ",
                "適切なセキュリティ対策が講じられておらず、顧客情報や機密情報の漏洩リスクが極めて高い状態です。これにより、法的責任や信用失墜のリスクが発生します。",
            ),
            insight(
                "サイバー攻撃への脆弱性",
                "基本的なセキュリティ対策が不十分で、マルウェア感染や不正アクセスの被害を受ける可能性が高い状態です。",
            ),
            insight(
                "データバックアップの不備",
                "重要なデータのバックアップが適切に行われておらず、システム障害時にデータ損失のリスクがあります。",
            ),
            insight(
                "アクセス権限管理の不備",
                "誰がどの情報にアクセスできるかの管理が不適切で、内部不正のリスクが高い状態です。",
            ),
            insight(
                "セキュリティ教育の不足",
                "従業員のセキュリティ意識が低く、人的要因によるセキュリティインシデントのリスクが高い状態です。",
            ),
        ],
        advice: &[
            insight(
                "セキュリティ専門家への相談",
                "情報セキュリティの専門家に相談し、包括的なセキュリティ対策の策定と実装を進めることをお勧めします。初期費用はかかりますが、インシデント発生時の損失を大幅に軽減できます。",
            ),
            insight(
                "段階的なセキュリティ強化",
                "まずは基本的な対策（ウイルス対策ソフト、ファイアウォール、パスワード管理）から始め、徐々に高度な対策を導入する段階的アプローチを採用してください。",
            ),
            insight(
                "従業員教育の実施",
                "定期的なセキュリティ教育を実施し、フィッシングメールの見分け方や安全なパスワードの設定方法などを教育してください。",
            ),
        ],
    },
];

const MANAGEMENT: [CategoryAnalysis; 6] = [
    CategoryAnalysis {
        evaluation: "優秀な状態です。データ活用による経営判断が適切に実施されています。",
        problems: &[insight(
            "維持・向上の継続",
            "現状のデータ活用レベルを維持し、さらなる向上を図る必要があります。",
        )],
        advice: &[insight(
            "ベストプラクティスの共有",
            "他の企業との情報交換により、さらなる改善の機会を探してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "非常に良好な状態です。データ活用による経営判断が適切に実施されています。",
        problems: &[insight(
            "継続的な改善の必要性",
            "現状は良好ですが、データ活用の手法は日々進化しているため、継続的な改善が必要です。",
        )],
        advice: &[insight(
            "継続的なデータ活用強化",
            "最新のデータ分析手法を継続的に学習し、経営判断の精度向上を図ってください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "良好な状態ですが、さらなる改善の余地があります。",
        problems: &[insight(
            "高度なデータ活用の不足",
            "基本的なデータ活用は行われているものの、より高度な活用により、さらなる経営効率化が期待できます。",
        )],
        advice: &[insight(
            "高度なデータ分析の導入",
            "予測分析や機械学習を活用した、より高度なデータ分析の導入を検討してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "部分的に改善が必要な状態です。基本的なデータ活用は行われていますが、さらなる強化が推奨されます。",
        problems: &[insight(
            "データ活用の限界",
            "基本的なデータ活用は行われているものの、より高度な分析や予測に活用できていません。",
        )],
        advice: &[insight(
            "高度な分析手法の導入",
            "統計分析や機械学習を活用した、より高度なデータ分析手法の導入を検討してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "改善が必要な状態です。データ活用による経営判断の基盤が不十分です。",
        problems: &[
            insight(
                "データ活用の不足",
                "収集されたデータが経営判断に十分活用されておらず、データの価値が発揮されていません。",
            ),
            insight(
                "分析体制の不備",
                "データを分析し、経営に活用する体制が不十分で、効果的な意思決定ができていません。",
            ),
        ],
        advice: &[
            insight(
                "データ分析ツールの導入",
                "Excel以外の分析ツールを導入し、より高度なデータ分析を実施してください。",
            ),
            insight(
                "定期的な経営会議の実施",
                "データに基づく定期的な経営会議を実施し、データドリブンな意思決定を習慣化してください。",
            ),
        ],
    },
    CategoryAnalysis {
        evaluation: "緊急の改善が必要な状態です。データ活用による経営判断の基盤が不十分です。",
        problems: &[
            insight(
                "データドリブン経営の欠如",
                "経営判断に必要なデータが適切に収集・分析されておらず、感覚的な経営判断に依存している状態です。これにより、機会損失や非効率な意思決定が発生します。",
            ),
            insight(
                "KPI管理の不備",
                "重要な業績指標（KPI）が明確に定義されておらず、経営状況の把握が困難な状態です。",
            ),
            insight(
                "データ分析体制の不足",
                "データを分析し、経営に活用する体制やスキルが不足しており、データの価値を十分に引き出せていません。",
            ),
            insight(
                "競合分析の不備",
                "市場動向や競合他社の分析が不十分で、戦略的な経営判断ができていない状態です。",
            ),
            insight(
                "予算管理の非効率",
                "予算の策定や管理が非効率的で、リソースの最適配分ができていない状態です。",
            ),
        ],
        advice: &[
            insight(
                "データ分析基盤の構築",
                "BIツール（Tableau、Power BI等）の導入により、データの可視化と分析基盤を構築してください。初期投資は必要ですが、長期的な経営効率化に大きく貢献します。",
            ),
            insight(
                "KPI管理システムの導入",
                "重要な業績指標を明確に定義し、定期的なモニタリング体制を構築してください。",
            ),
            insight(
                "データ分析人材の育成",
                "社内にデータ分析スキルを持つ人材を育成するか、外部専門家の活用を検討してください。",
            ),
        ],
    },
];

const PROCESS: [CategoryAnalysis; 6] = [
    CategoryAnalysis {
        evaluation: "優秀な状態です。業務プロセスの効率化が適切に実施されています。",
        problems: &[insight(
            "維持・向上の継続",
            "現状の効率化レベルを維持し、さらなる向上を図る必要があります。",
        )],
        advice: &[insight(
            "ベストプラクティスの共有",
            "他の企業との情報交換により、さらなる改善の機会を探してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "非常に良好な状態です。業務プロセスの効率化が適切に実施されています。",
        problems: &[insight(
            "継続的な改善の必要性",
            "現状は良好ですが、業務効率化の手法は日々進化しているため、継続的な改善が必要です。",
        )],
        advice: &[insight(
            "継続的な効率化",
            "最新の効率化手法を継続的に学習し、さらなる改善を図ってください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "良好な状態ですが、さらなる改善の余地があります。",
        problems: &[insight(
            "高度な効率化の余地",
            "基本的な効率化は行われているものの、より高度な効率化により、さらなる生産性向上が期待できます。",
        )],
        advice: &[insight(
            "高度な効率化の検討",
            "最新の効率化手法を調査し、適用可能なものを導入してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "部分的に改善が必要な状態です。基本的な効率化は行われていますが、さらなる改善が推奨されます。",
        problems: &[insight(
            "高度な効率化の不足",
            "基本的な効率化は行われているものの、より高度な効率化により、さらなる生産性向上が期待できます。",
        )],
        advice: &[insight(
            "高度な効率化手法の導入",
            "AIや機械学習を活用した、より高度な業務効率化手法の導入を検討してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "改善が必要な状態です。業務プロセスの非効率性が存在します。",
        problems: &[
            insight(
                "手作業の多さ",
                "多くの業務が手作業に依存しており、効率化の余地が大きい状態です。",
            ),
            insight(
                "プロセス標準化の不足",
                "業務プロセスが標準化されておらず、効率性にばらつきがあります。",
            ),
        ],
        advice: &[
            insight(
                "業務プロセスの標準化",
                "主要な業務プロセスを標準化し、効率性と品質の向上を図ってください。",
            ),
            insight(
                "デジタルツールの活用",
                "適切なデジタルツールを導入し、業務効率化を図ってください。",
            ),
        ],
    },
    CategoryAnalysis {
        evaluation: "緊急の改善が必要な状態です。業務プロセスの非効率性が深刻です。",
        problems: &[
            insight(
                "手作業による非効率性",
                "多くの業務が手作業に依存しており、人的ミスや作業時間の増大が発生しています。これにより、コスト増加と生産性の低下が深刻化しています。",
            ),
            insight(
                "プロセス標準化の不足",
                "業務プロセスが標準化されておらず、担当者によって作業方法が異なり、品質のばらつきが発生しています。",
            ),
            insight(
                "情報共有の非効率",
                "部門間での情報共有が非効率的で、重複作業や情報の遅延が頻発しています。",
            ),
            insight(
                "在庫管理の非効率",
                "在庫管理が非効率的で、過剰在庫や欠品が発生し、資金効率が悪化しています。",
            ),
            insight(
                "顧客対応の非効率",
                "顧客対応プロセスが非効率的で、顧客満足度の低下や対応時間の増大が発生しています。",
            ),
        ],
        advice: &[
            insight(
                "業務プロセスの見直し",
                "全社的な業務プロセスの見直しを実施し、標準化と効率化を図ってください。RPAツールの導入により、定型業務の自動化を検討してください。",
            ),
            insight(
                "デジタルツールの導入",
                "ERPシステムや業務管理システムの導入により、業務プロセスの統合と効率化を図ってください。",
            ),
            insight(
                "段階的な改善計画",
                "優先度の高い業務から段階的に改善を進め、継続的な効率化を図ってください。",
            ),
        ],
    },
];

const COMMUNICATION: [CategoryAnalysis; 6] = [
    CategoryAnalysis {
        evaluation: "優秀な状態です。コミュニケーション・情報共有が適切に実施されています。",
        problems: &[insight(
            "維持・向上の継続",
            "現状のコミュニケーション・情報共有レベルを維持し、さらなる向上を図る必要があります。",
        )],
        advice: &[insight(
            "ベストプラクティスの共有",
            "他の企業との情報交換により、さらなる改善の機会を探してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "非常に良好な状態です。コミュニケーション・情報共有が適切に実施されています。",
        problems: &[insight(
            "継続的な改善の必要性",
            "現状は良好ですが、コミュニケーション手法は日々進化しているため、継続的な改善が必要です。",
        )],
        advice: &[insight(
            "継続的なコミュニケーション改善",
            "最新のコミュニケーション手法を継続的に学習し、さらなる改善を図ってください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "良好な状態ですが、さらなる改善の余地があります。",
        problems: &[insight(
            "高度なコミュニケーションの余地",
            "基本的なコミュニケーションは行われているものの、より高度な手法により、さらなる効率化が期待できます。",
        )],
        advice: &[insight(
            "高度なコミュニケーションの検討",
            "最新のコミュニケーションツールを調査し、適用可能なものを導入してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "部分的に改善が必要な状態です。基本的なコミュニケーションは行われていますが、さらなる改善が推奨されます。",
        problems: &[insight(
            "高度なコミュニケーション手法の不足",
            "基本的なコミュニケーションは行われているものの、より高度な手法により、さらなる効率化が期待できます。",
        )],
        advice: &[insight(
            "高度なコミュニケーション手法の導入",
            "ビデオ会議、チャット、プロジェクト管理ツールなどを活用した、より高度なコミュニケーション手法の導入を検討してください。",
        )],
    },
    CategoryAnalysis {
        evaluation: "改善が必要な状態です。コミュニケーション・情報共有の非効率性が存在します。",
        problems: &[
            insight(
                "情報共有の不足",
                "重要な情報が適切に共有されておらず、意思決定に支障をきたしています。",
            ),
            insight(
                "コミュニケーションツールの不備",
                "効果的なコミュニケーションツールが不足しており、情報伝達が非効率的です。",
            ),
        ],
        advice: &[
            insight(
                "コミュニケーションツールの導入",
                "適切なコミュニケーションツールを導入し、情報共有の効率化を図ってください。",
            ),
            insight(
                "情報共有ルールの策定",
                "情報共有のルールを策定し、全社的な情報共有体制を構築してください。",
            ),
        ],
    },
    CategoryAnalysis {
        evaluation: "緊急の改善が必要な状態です。コミュニケーション・情報共有の非効率性が深刻です。",
        problems: &[
            insight(
                "情報共有の非効率性",
                "重要な情報が適切に共有されておらず、情報の遅延や重複が頻発しています。これにより、意思決定の遅れや機会損失が発生しています。",
            ),
            insight(
                "コミュニケーションツールの不足",
                "効果的なコミュニケーションツールが導入されておらず、情報伝達が非効率的です。",
            ),
            insight(
                "会議の非効率性",
                "会議が非効率的で、時間の浪費と意思決定の遅延が発生しています。",
            ),
            insight(
                "文書管理の不備",
                "重要な文書の管理が不適切で、必要な情報にアクセスできない状況が発生しています。",
            ),
            insight(
                "リモートワーク対応の不足",
                "リモートワーク環境でのコミュニケーション体制が不十分で、生産性の低下が発生しています。",
            ),
        ],
        advice: &[
            insight(
                "コミュニケーションツールの導入",
                "Slack、Microsoft Teams、Zoomなどのコミュニケーションツールを導入し、効率的な情報共有体制を構築してください。",
            ),
            insight(
                "会議効率化の実施",
                "会議の目的とアジェンダを明確化し、時間管理と意思決定の効率化を図ってください。",
            ),
            insight(
                "文書管理システムの構築",
                "Google WorkspaceやMicrosoft 365などの文書管理システムを導入し、情報の一元管理を図ってください。",
            ),
        ],
    },
];
