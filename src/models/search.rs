use serde::{Deserialize, Serialize};

/// A lettered multiple-choice option extracted from a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqOption {
    pub letter: char,
    pub text: String,
}

/// Structured preview of a free-text prompt
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptPreview {
    pub title: String,
    pub options: Vec<McqOption>,
    pub instruction: Option<String>,
    pub details: Vec<String>,
}

/// Searchable record derived from one question. Rebuilt wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub question_id: String,
    pub category: String,
    pub task: String,
    pub answer_type: String,
    pub title: String,
    pub options: Vec<McqOption>,
    pub instruction: Option<String>,
    pub details: Vec<String>,
    pub holiday_dates: Vec<String>,
    pub prompt: String,
    pub haystack: String,
}

/// One ranked hit: position in the index plus its tier score (lower is better)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedMatch {
    pub index: usize,
    pub score: f64,
}
