//! Search index over a release's questions
//!
//! - **Building**: [`build_index`] derives one [`SearchRecord`](crate::models::SearchRecord)
//!   per question (prompt preview, holiday annotations, normalized haystack). The index is
//!   always rebuilt in full when the active question set changes.
//!
//! - **Ranking**: [`SearchIndex::search`] answers type-ahead queries: conjunctive literal
//!   term matching against the haystack, then a tiered score (id, task, category, title)
//!   with match position as the within-tier tie-break.

pub mod builder;
pub mod ranker;

pub use builder::{SearchIndex, build_index, build_haystack};
pub use ranker::{MAX_SUGGESTIONS, MIN_QUERY_LEN, score_record};
