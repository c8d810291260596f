use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{CategoryView, Question, Report, TaskView, ViewModel};

pub const SAMPLE_SIZE: usize = 4;
pub const FALLBACK_CITATION_YEAR: &str = "2026";

/// Merge a report and a question set into the display model for `release_id`.
///
/// - Categories and their tasks sort by score, highest first; ties keep report order and
///   missing scores sort last.
/// - The sample is the first [`SAMPLE_SIZE`] questions released on `release_id`, or the
///   first of the whole set when none match.
/// - Licenses and attributions are deduplicated and sorted.
pub fn build_view_model(report: &Report, questions: &[Question], release_id: &str) -> ViewModel {
    let mut categories: Vec<CategoryView> = report
        .categories
        .iter()
        .map(|(name, category)| {
            let mut tasks: Vec<TaskView> = category
                .tasks
                .iter()
                .map(|(task, detail)| TaskView {
                    name: task.clone(),
                    score: detail.score,
                    n_questions: detail.n_questions,
                })
                .collect();
            tasks.sort_by(|a, b| by_score_desc(a.score, b.score));

            CategoryView {
                name: name.clone(),
                score: category.score,
                n_tasks: category.n_tasks,
                tasks,
            }
        })
        .collect();
    categories.sort_by(|a, b| by_score_desc(a.score, b.score));

    let mut sample_questions: Vec<Question> = questions
        .iter()
        .filter(|q| q.release_date == release_id)
        .take(SAMPLE_SIZE)
        .cloned()
        .collect();
    if sample_questions.is_empty() {
        sample_questions = questions.iter().take(SAMPLE_SIZE).cloned().collect();
    }

    let licenses: BTreeSet<&str> = questions.iter().map(|q| q.license.as_str()).collect();
    let attributions: BTreeSet<&str> = questions.iter().map(|q| q.attribution.as_str()).collect();

    ViewModel {
        release_id: release_id.to_string(),
        overall: report.overall,
        n_questions: report.n_questions,
        n_missing: report.n_missing,
        categories,
        sample_questions,
        licenses: licenses.into_iter().map(String::from).collect(),
        attributions: attributions.into_iter().map(String::from).collect(),
        bibtex: format_bibtex(citation_year(questions), release_id),
    }
}

/// Descending by score; `None` after every present score
fn by_score_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Year prefix of the first question's release date, if it is four digits
fn citation_year(questions: &[Question]) -> &str {
    questions
        .first()
        .and_then(|q| q.release_date.get(..4))
        .filter(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(FALLBACK_CITATION_YEAR)
}

pub fn format_bibtex(year: &str, release_id: &str) -> String {
    format!(
        "@misc{{halachabench{year},\n  \
         title = {{HalachaBench: A Benchmark for Halachic Reasoning}},\n  \
         author = {{HalachaBench Contributors}},\n  \
         year = {{{year}}},\n  \
         note = {{Release {release_id}. Deterministic scoring over closed-format answers (mcq, boolean, enum, numeric, json).}}\n\
         }}"
    )
}
