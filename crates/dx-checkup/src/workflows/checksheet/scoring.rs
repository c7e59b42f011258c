use super::domain::{
    Answer, AnswerSet, AnswerSetError, Category, ScoreReport, QUESTIONS_PER_CATEGORY,
};

/// Score a validated answer set by contiguous category blocks.
pub fn score(answers: &AnswerSet) -> ScoreReport {
    let mut scores = [0u8; 4];
    for (index, answer) in answers.answers().iter().enumerate() {
        scores[index / QUESTIONS_PER_CATEGORY] += answer.points();
    }

    ScoreReport::from_block_scores(scores)
}

/// Validate raw literals and score them in one step.
pub fn score_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<ScoreReport, AnswerSetError> {
    AnswerSet::from_tokens(tokens).map(|answers| score(&answers))
}

/// Indices of problem answers within a category, 1-based question numbers.
pub fn flagged_questions(answers: &AnswerSet, category: Category) -> Vec<usize> {
    category
        .question_range()
        .filter(|index| answers.answers()[*index] == Answer::PROBLEM)
        .map(|index| index + 1)
        .collect()
}
