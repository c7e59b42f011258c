use clap::Args;
use dx_checkup::error::AppError;
use dx_checkup::workflows::checksheet::report::{build_report_document, render_html, ChartOutcome};
use dx_checkup::workflows::checksheet::{
    catalog, default_comment, flagged_questions, score, AnswerSet, Comment, CommentSource,
    ScoreReport, QUESTIONS_PER_CATEGORY,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answers in question order, comma separated (yes/no)
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) answers: Vec<String>,
    /// Also write the rendered report HTML to this path
    #[arg(long)]
    pub(crate) html: Option<PathBuf>,
    /// Print the score report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let answers = AnswerSet::from_tokens(&args.answers)?;
    let report = score(&answers);
    let comment = Comment {
        text: default_comment(&report),
        source: CommentSource::Fallback,
    };

    if args.json {
        println!("{}", score_json(&report)?);
    } else {
        print!("{}", score_summary(&answers, &report));
        println!("\nAdvisor comment\n{}", comment.text);
    }

    if let Some(path) = args.html {
        let html = render_html(&build_report_document(
            &report,
            &comment,
            ChartOutcome::Disabled,
        ));
        std::fs::write(&path, html)?;
        println!("\nReport HTML written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_questions() {
    for question in catalog() {
        println!(
            "Q{:02} [{}] {}",
            question.number, question.category_label, question.text
        );
    }
}

pub(crate) fn score_json(report: &ScoreReport) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(&report.view()).map_err(std::io::Error::from)?;
    Ok(json)
}

pub(crate) fn score_summary(answers: &AnswerSet, report: &ScoreReport) -> String {
    let view = report.view();
    let mut lines = vec![
        "DX check sheet diagnosis".to_string(),
        format!("Total score: {} / 20", view.total),
        format!("Tier: {}", view.tier_label),
        format!(
            "Top issue: {} ({} / {QUESTIONS_PER_CATEGORY})",
            view.top_issue.category.label(),
            view.top_issue.score
        ),
        String::new(),
        "Category scores".to_string(),
    ];

    for entry in &view.categories {
        let flagged = flagged_questions(answers, entry.category);
        let mut line = format!(
            "- {}: {} / {QUESTIONS_PER_CATEGORY}",
            entry.category.label(),
            entry.score
        );
        if !flagged.is_empty() {
            let numbers: Vec<String> = flagged.iter().map(|number| format!("Q{number}")).collect();
            line.push_str(&format!(" (flagged: {})", numbers.join(", ")));
        }
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
