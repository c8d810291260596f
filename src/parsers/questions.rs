use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Question;
use crate::utils::validate_file_size;

/// Parse a questions.jsonl body: one question per non-blank line.
/// The first malformed line fails the whole parse.
pub fn parse_questions(text: &str) -> Result<Vec<Question>> {
    let mut questions = Vec::new();

    for (line_num, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let question = serde_json::from_str::<Question>(line)
            .with_context(|| format!("Invalid question on line {}", line_num + 1))?;
        questions.push(question);
    }

    Ok(questions)
}

/// Read and parse a questions.jsonl file
pub fn parse_questions_file(path: &Path) -> Result<Vec<Question>> {
    let text = read_text(path)?;
    parse_questions(&text)
        .with_context(|| format!("Failed to parse question file: {}", path.display()))
}

pub(crate) fn read_text(path: &Path) -> Result<String> {
    // Validate size on the open handle to avoid a TOCTOU race
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut text = String::new();
    file.read_to_string(&mut text)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text)
}
