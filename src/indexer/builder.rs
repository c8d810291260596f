//! Index builder for benchmark questions.

use tracing::debug;

use crate::calendar::HolidayTable;
use crate::calendar::holidays::holidays_mentioned;
use crate::models::{Question, SearchRecord};
use crate::parsers::parse_prompt;

/// Immutable set of search records for one question set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
}

impl SearchIndex {
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&SearchRecord> {
        self.records.get(index)
    }

    pub fn find(&self, question_id: &str) -> Option<&SearchRecord> {
        self.records.iter().find(|record| record.question_id == question_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build one search record per question, in question order
///
/// Each record carries the parsed prompt preview, the display strings of observances the
/// prompt or task mentions, and a lowercase whitespace-collapsed haystack of
/// id, category, task, answer type and prompt.
///
/// # Examples
///
/// ```
/// use halachabench_dashboard::calendar::HolidayTable;
/// use halachabench_dashboard::indexer::build_index;
///
/// let index = build_index(&[], &HolidayTable::new());
/// assert!(index.is_empty());
/// ```
pub fn build_index(questions: &[Question], holidays: &HolidayTable) -> SearchIndex {
    let records: Vec<SearchRecord> = questions
        .iter()
        .map(|question| {
            let prompt = question.prompt();
            let preview = parse_prompt(prompt);
            let holiday_dates =
                holidays_mentioned(holidays, &format!("{}\n{}", question.task, prompt));

            SearchRecord {
                question_id: question.question_id.clone(),
                category: question.category.clone(),
                task: question.task.clone(),
                answer_type: question.answer_type.as_str().to_string(),
                title: preview.title,
                options: preview.options,
                instruction: preview.instruction,
                details: preview.details,
                holiday_dates,
                prompt: prompt.to_string(),
                haystack: build_haystack(question),
            }
        })
        .collect();

    debug!("Indexed {} questions", records.len());
    SearchIndex { records }
}

pub fn build_haystack(question: &Question) -> String {
    let fields = [
        question.question_id.as_str(),
        question.category.as_str(),
        question.task.as_str(),
        question.answer_type.as_str(),
        question.prompt(),
    ];

    // Pre-allocate: field lengths plus one separator each
    let capacity = fields.iter().map(|f| f.len() + 1).sum();
    let mut haystack = String::with_capacity(capacity);
    for word in fields.iter().flat_map(|field| field.split_whitespace()) {
        if !haystack.is_empty() {
            haystack.push(' ');
        }
        haystack.push_str(&word.to_lowercase());
    }
    haystack
}
