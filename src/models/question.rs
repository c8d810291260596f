use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of answer formats a question can be scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    Mcq,
    Boolean,
    Enum,
    Numeric,
    Json,
}

impl AnswerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerType::Mcq => "mcq",
            AnswerType::Boolean => "boolean",
            AnswerType::Enum => "enum",
            AnswerType::Numeric => "numeric",
            AnswerType::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub category: String,
    pub task: String,
    pub turns: Vec<Turn>,
    pub answer_type: AnswerType,
    pub ground_truth: Value,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_release_date")]
    pub release_date: String,
    pub license: String,
    pub attribution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acceptable_answers: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance_type: Option<String>,
}

impl Question {
    /// Canonical prompt: the first user turn, or empty when there is none
    pub fn prompt(&self) -> &str {
        self.turns
            .iter()
            .find(|turn| turn.role == "user")
            .map(|turn| turn.content.as_str())
            .unwrap_or("")
    }
}
