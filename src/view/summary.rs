use crate::models::{Report, ViewModel};
use crate::parsers::parse_prompt;
use crate::utils::sanitize_for_terminal;

/// Three-decimal score, or `-` for a missing score
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.3}", score),
        None => "-".to_string(),
    }
}

/// Harness-style text summary: categories and tasks in alphabetical order
pub fn format_summary(report: &Report) -> String {
    let mut lines = vec![format!(
        "Overall: {} (questions: {}, missing: {})",
        format_score(report.overall),
        report.n_questions,
        report.n_missing
    )];

    let mut categories: Vec<_> = report.categories.iter().collect();
    categories.sort_by(|a, b| a.0.cmp(b.0));
    for (name, category) in categories {
        lines.push(format!("{}: {} (tasks: {})", name, format_score(category.score), category.n_tasks));

        let mut tasks: Vec<_> = category.tasks.iter().collect();
        tasks.sort_by(|a, b| a.0.cmp(b.0));
        for (task, detail) in tasks {
            lines.push(format!(
                "  {}: {} (n: {})",
                task,
                format_score(detail.score),
                detail.n_questions
            ));
        }
    }

    lines.join("\n")
}

/// Full text rendering of a view model for the `summary` command
pub fn format_view_model(view: &ViewModel) -> String {
    let mut lines = vec![
        format!("HalachaBench release {}", view.release_id),
        "================================".to_string(),
        format!("Overall score: {}", format_score(view.overall)),
        format!("Questions: {} ({} missing predictions)", view.n_questions, view.n_missing),
        String::new(),
        "Categories:".to_string(),
    ];

    for category in &view.categories {
        lines.push(format!(
            "  {} {} ({} tasks)",
            format_score(category.score),
            category.name,
            category.n_tasks
        ));
        for task in &category.tasks {
            lines.push(format!(
                "      {} {} (n: {})",
                format_score(task.score),
                task.name,
                task.n_questions
            ));
        }
    }

    lines.push(String::new());
    lines.push("Sample questions:".to_string());
    for question in &view.sample_questions {
        let title = parse_prompt(question.prompt()).title;
        lines.push(format!(
            "  [{}] {} / {}: {}",
            question.answer_type.as_str(),
            question.category,
            question.task,
            sanitize_for_terminal(&title)
        ));
    }

    lines.push(String::new());
    lines.push(format!("Licenses: {}", view.licenses.join(", ")));
    lines.push(format!("Attributions: {}", view.attributions.join("; ")));
    lines.push(String::new());
    lines.push(view.bibtex.clone());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_report;
    use crate::view::build_view_model;

    const REPORT: &str = r#"{
        "overall": 0.75,
        "categories": {
            "Hashkafa": {"score": 0.5, "tasks": {"lens": {"score": 0.5, "n_questions": 2}}, "n_tasks": 1},
            "Daily Halacha Core": {
                "score": 1.0,
                "tasks": {
                    "shabbos": {"score": 1.0, "n_questions": 1},
                    "brachos": {"score": null, "n_questions": 3}
                },
                "n_tasks": 2
            }
        },
        "n_questions": 6,
        "n_missing": 1
    }"#;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(0.5)), "0.500");
        assert_eq!(format_score(Some(1.0)), "1.000");
        assert_eq!(format_score(None), "-");
    }

    #[test]
    fn test_format_summary_is_alphabetical() {
        let summary = format_summary(&parse_report(REPORT).unwrap());
        let expected = "Overall: 0.750 (questions: 6, missing: 1)\n\
                        Daily Halacha Core: 1.000 (tasks: 2)\n  \
                        brachos: - (n: 3)\n  \
                        shabbos: 1.000 (n: 1)\n\
                        Hashkafa: 0.500 (tasks: 1)\n  \
                        lens: 0.500 (n: 2)";
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_format_view_model_orders_by_score() {
        let view = build_view_model(&parse_report(REPORT).unwrap(), &[], "2026-02-05");
        let text = format_view_model(&view);

        assert!(text.contains("HalachaBench release 2026-02-05"));
        assert!(text.contains("Overall score: 0.750"));
        let daily = text.find("Daily Halacha Core").unwrap();
        let hashkafa = text.find("Hashkafa").unwrap();
        assert!(daily < hashkafa);
        assert!(text.contains("@misc{halachabench2026,"));
    }
}
