//! HalachaBench Dashboard - browse benchmark releases, scores and questions
//!
//! This library loads the artifacts published by the HalachaBench harness (a score
//! report plus one question set per release) and turns them into:
//!
//! - A ranked type-ahead index over the release's questions
//! - A view model of categories and tasks sorted by score
//! - Holiday annotations resolved on the Hebrew calendar
//! - Structured previews of each prompt (title, options, instruction, details)
//!
//! # Example
//!
//! ```no_run
//! use halachabench_dashboard::{build_index, parse_questions_file};
//! use halachabench_dashboard::calendar::HolidayTable;
//! use std::path::PathBuf;
//!
//! let path = PathBuf::from("data/releases/2026-02-06/questions.jsonl");
//! let questions = parse_questions_file(&path)?;
//! let index = build_index(&questions, &HolidayTable::new());
//! for hit in index.search("purim") {
//!     println!("{}", index.records()[hit.index].title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod calendar;
pub mod cli;
pub mod dashboard;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod search_box;
pub mod telemetry;
pub mod tui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use dashboard::{Dashboard, DataSource, FsDataSource, ReleaseCatalog};
pub use indexer::{SearchIndex, build_index};
pub use models::{Question, Report, SearchRecord, ViewModel};
pub use parsers::{parse_prompt, parse_questions, parse_questions_file, parse_report};
pub use search_box::{SearchBox, SearchEvent};
pub use utils::{expand_tilde, sanitize_for_terminal};
pub use view::build_view_model;
