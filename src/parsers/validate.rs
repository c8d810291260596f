use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

const ALLOWED_ROLES: [&str; 3] = ["user", "assistant", "system"];
const ALLOWED_ANSWER_TYPES: [&str; 5] = ["mcq", "boolean", "enum", "numeric", "json"];
const REQUIRED_FIELDS: [&str; 9] = [
    "question_id",
    "category",
    "task",
    "turns",
    "answer_type",
    "ground_truth",
    "release_date",
    "license",
    "attribution",
];

/// Advisory schema problem found in a question set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub question_id: Option<String>,
    pub line: usize,
    pub message: String,
}

/// Check every record of a questions.jsonl body against the harness schema.
///
/// Works on raw JSON so the id check hashes exactly what was published.
/// Lines that are not JSON objects fail the whole call, matching [`super::parse_questions`].
pub fn validate_questions(text: &str) -> Result<Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        let Value::Object(record) = value else {
            anyhow::bail!("Line {} is not a JSON object", line_num + 1);
        };

        let question_id = record.get("question_id").and_then(Value::as_str).map(str::to_string);
        for message in validate_record(&record) {
            issues.push(ValidationIssue {
                question_id: question_id.clone(),
                line: line_num + 1,
                message,
            });
        }
    }

    Ok(issues)
}

fn validate_record(record: &Map<String, Value>) -> Vec<String> {
    let mut problems: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !record.contains_key(**field))
        .map(|field| format!("missing required field: {}", field))
        .collect();

    let answer_type = record.get("answer_type").and_then(Value::as_str);
    if let Some(answer_type) = answer_type
        && !answer_type.is_empty()
        && !ALLOWED_ANSWER_TYPES.contains(&answer_type)
    {
        problems.push(format!("invalid answer_type: {}", answer_type));
    }

    match record.get("turns").and_then(Value::as_array) {
        Some(turns) if !turns.is_empty() => {
            for (idx, turn) in turns.iter().enumerate() {
                let Some(turn) = turn.as_object() else {
                    problems.push(format!("turns[{}] must be an object", idx));
                    continue;
                };
                let role = turn.get("role").and_then(Value::as_str).unwrap_or("");
                if !ALLOWED_ROLES.contains(&role) {
                    problems.push(format!("turns[{}].role invalid: {}", idx, role));
                }
                let content = turn.get("content").and_then(Value::as_str).unwrap_or("");
                if content.trim().is_empty() {
                    problems.push(format!("turns[{}].content must be a non-empty string", idx));
                }
            }
        }
        _ => problems.push("turns must be a non-empty list".to_string()),
    }

    if let Some(release_date) = record.get("release_date").and_then(Value::as_str)
        && !release_date.is_empty()
        && NaiveDate::parse_from_str(release_date, "%Y-%m-%d").is_err()
    {
        problems.push("release_date must be YYYY-MM-DD".to_string());
    }

    if answer_type == Some("mcq") {
        let has_choices =
            record.get("choices").and_then(Value::as_array).is_some_and(|c| !c.is_empty());
        if !has_choices {
            problems.push("mcq requires non-empty choices list".to_string());
        }
    }

    if answer_type == Some("numeric")
        && let Some(tolerance) = record.get("tolerance")
        && !tolerance.is_null()
        && !tolerance.is_number()
    {
        problems.push("tolerance must be numeric if provided".to_string());
    }

    if let Some(id) = record.get("question_id").and_then(Value::as_str)
        && id != compute_question_id(record)
    {
        problems.push("question_id does not match canonical hash".to_string());
    }

    problems
}

/// SHA-256 hex digest of the record without its `question_id`, serialized with
/// sorted keys and compact separators
pub fn compute_question_id(record: &Map<String, Value>) -> String {
    let mut body = record.clone();
    body.remove("question_id");
    let canonical = canonicalize(Value::Object(body)).to_string();
    format!("{:x}", Sha256::digest(canonical.as_bytes()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(key, value)| (key, canonicalize(value))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
