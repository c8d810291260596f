//! Parsers for release data and question prompts
//!
//! # Error Handling Strategy
//!
//! Release data is small and produced by a deterministic harness, so parsing is strict:
//!
//! - **Question sets**: Any malformed line in a `questions.jsonl` aborts the whole parse
//!   with the offending line number. There is no skip-and-continue; a partially loaded
//!   release would silently skew the dashboard.
//!
//! - **Reports**: The report is a single JSON document and either parses or doesn't.
//!
//! - **Validation**: Schema checks beyond what deserialization enforces are advisory. They
//!   produce a list of issues for logging and the `validate` command, never an error.
//!
//! - **Prompts**: Prompt parsing is infallible; odd input degrades to an untitled preview.

pub mod deserializers;
pub mod prompt;
pub mod questions;
pub mod report;
pub mod validate;

pub use prompt::parse_prompt;
pub use questions::{parse_questions, parse_questions_file};
pub use report::{parse_report, parse_report_file};
pub use validate::{ValidationIssue, validate_questions};
