use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-task breakdown nested under a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskScore {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub n_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_as_empty")]
    pub tasks: IndexMap<String, TaskScore>,
    #[serde(default)]
    pub n_tasks: usize,
}

/// Entry of the flat `category::task` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskReport {
    pub category: String,
    pub task: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub n_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionScore {
    pub question_id: String,
    pub score: f64,
    pub max_score: f64,
    pub is_correct: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Aggregate score report as written by the scoring harness.
///
/// Map-shaped fields keep their document order so that ties sort stably.
/// A `None` score is the "missing" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub overall: Option<f64>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_as_empty")]
    pub categories: IndexMap<String, CategoryReport>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_null_as_empty")]
    pub tasks: IndexMap<String, TaskReport>,
    #[serde(default)]
    pub n_questions: usize,
    #[serde(default)]
    pub n_missing: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_question: Option<Vec<QuestionScore>>,
}

impl Report {
    pub fn category(&self, name: &str) -> Option<&CategoryReport> {
        self.categories.get(name)
    }
}
