//! Report presentation: the sorted view model and plain-text renderings of it.

pub mod builder;
pub mod summary;

pub use builder::{FALLBACK_CITATION_YEAR, SAMPLE_SIZE, build_view_model, format_bibtex};
pub use summary::{format_score, format_summary, format_view_model};
