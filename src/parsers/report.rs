use std::path::Path;

use anyhow::{Context, Result};

use super::questions::read_text;
use crate::models::Report;

/// Parse a score report document
pub fn parse_report(text: &str) -> Result<Report> {
    serde_json::from_str(text).context("Invalid score report")
}

/// Read and parse a report.json file
pub fn parse_report_file(path: &Path) -> Result<Report> {
    let text = read_text(path)?;
    parse_report(&text).with_context(|| format!("Failed to parse report: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "overall": 0.75,
        "categories": {
            "Daily Halacha Core": {
                "score": 1.0,
                "tasks": {"brachos": {"score": 1.0, "n_questions": 2}},
                "n_tasks": 1
            },
            "Hashkafa": {
                "score": 0.5,
                "tasks": {"lens": {"score": 0.5, "n_questions": 2}},
                "n_tasks": 1
            }
        },
        "tasks": {
            "Daily Halacha Core::brachos": {"category": "Daily Halacha Core", "task": "brachos", "score": 1.0, "n_questions": 2},
            "Hashkafa::lens": {"category": "Hashkafa", "task": "lens", "score": 0.5, "n_questions": 2}
        },
        "n_questions": 4,
        "n_missing": 1,
        "per_question": [
            {"question_id": "q1", "score": 0.0, "max_score": 1.0, "is_correct": false, "error": "missing_prediction"}
        ]
    }"#;

    #[test]
    fn test_parse_report() {
        let report = parse_report(REPORT).unwrap();
        assert_eq!(report.overall, Some(0.75));
        assert_eq!(report.categories.len(), 2);
        assert_eq!(report.tasks.len(), 2);
        assert_eq!(report.tasks.get_index(1).unwrap().1.task, "lens");
        assert_eq!(report.n_questions, 4);
        assert_eq!(report.n_missing, 1);

        let per_question = report.per_question.unwrap();
        assert_eq!(per_question[0].error.as_deref(), Some("missing_prediction"));
    }

    #[test]
    fn test_parse_report_invalid() {
        assert!(parse_report("{\"overall\": \"high\"}").is_err());
        assert!(parse_report("not json").is_err());
    }
}
