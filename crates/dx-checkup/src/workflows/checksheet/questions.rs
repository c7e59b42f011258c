use serde::Serialize;

use super::domain::{Category, QUESTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub number: usize,
    pub category: Category,
    pub category_label: &'static str,
    pub text: &'static str,
}

const QUESTION_TEXT: [&str; QUESTION_COUNT] = [
    "社外や自宅からだと、社内にあるはずの必要なファイルにアクセスできない。",
    "社内の主要な連絡手段がメールや電話で、急ぎの要件が伝わりにくいことがある。",
    "会議のたびに大量の紙資料を印刷しており、ペーパーレス化が進んでいない。",
    "「あの件、どうなった？」と担当者に聞かないと、仕事の進捗がわからない。",
    "拠点間や部署間の情報共有がうまくいかず、何度も同じ説明をしている。",
    "見積書や稟議書など、いまだに「紙とハンコ」でのやり取りが必須となっている。",
    "Excelへのデータ入力や、システム間の情報転記といった単純作業に時間を取られている。",
    "顧客情報や過去の取引履歴が、個々の営業担当者のExcelや手帳で管理されている。",
    "過去の資料やデータを探し出すのに、いつも5分以上かかっている。",
    "会社の売上や経費の状況を、複数の資料をかき集めないと把握できない。",
    "社員の私物のパソコンやスマホを、業務で使うことを黙認してしまっている。",
    "退職した社員のメールアドレスやアカウントが、そのまま放置されている可能性がある。",
    "ウイルス対策ソフトは入れているが、それ以外のセキュリティ対策は特にしていない。",
    "重要なデータのバックアップを誰がいつ取っているか、明確なルールがない。",
    "社員がカフェの無料Wi-Fiなどを使い、重要なファイルをやり取りしている。",
    "重要な経営判断を、社長や役員の「経験と勘」に頼ることがほとんどだ。",
    "Webサイトからの問い合わせや顧客データを、有効に活用できているとは言えない。",
    "ITの導入を「コスト（費用）」と捉えており、「投資」とは考えにくい。",
    "社内にITに詳しい人材がおらず、パソコンのトラブルが起きると業務が止まる。",
    "新しいツールを導入しようとすると、社員から「面倒だ」という反対の声が上がる。",
];

/// The questionnaire in answer order.
pub fn catalog() -> Vec<Question> {
    QUESTION_TEXT
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            Category::for_question(index).map(|category| Question {
                number: index + 1,
                category,
                category_label: category.label(),
                text,
            })
        })
        .collect()
}

/// Look up a question by its 1-based number.
pub fn question(number: usize) -> Option<Question> {
    catalog().into_iter().find(|question| question.number == number)
}
