use serde::Serialize;

use super::question::Question;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskView {
    pub name: String,
    pub score: Option<f64>,
    pub n_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub name: String,
    pub score: Option<f64>,
    pub n_tasks: usize,
    pub tasks: Vec<TaskView>,
}

/// Display-ready summary of one release. Always rebuilt as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub release_id: String,
    pub overall: Option<f64>,
    pub n_questions: usize,
    pub n_missing: usize,
    pub categories: Vec<CategoryView>,
    pub sample_questions: Vec<Question>,
    pub licenses: Vec<String>,
    pub attributions: Vec<String>,
    pub bibtex: String,
}
