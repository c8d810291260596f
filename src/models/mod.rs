//! Data models for benchmark releases and the views derived from them.
//!
//! - [`Question`] - One benchmark question from a release's questions.jsonl
//! - [`Report`] - Aggregate score report produced by the scoring harness
//! - [`SearchRecord`] - Precomputed searchable form of a question
//! - [`ViewModel`] - Sorted, deduplicated summary of a report and release
//!
//! Custom deserializers for ordered maps and release dates live in
//! `parsers::deserializers`.

pub mod question;
pub mod report;
pub mod search;
pub mod view;

pub use question::{AnswerType, Question, Turn};
pub use report::{CategoryReport, QuestionScore, Report, TaskReport, TaskScore};
pub use search::{McqOption, PromptPreview, RankedMatch, SearchRecord};
pub use view::{CategoryView, TaskView, ViewModel};
