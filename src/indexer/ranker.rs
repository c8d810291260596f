use super::builder::SearchIndex;
use crate::models::{RankedMatch, SearchRecord};

/// Queries shorter than this (after trimming) never produce suggestions
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 8;

/// Match positions past this point all tie, so a fractional term never reaches the next tier
const POSITION_SCALE: usize = 1000;

/// Score for records that matched only through the haystack
const HAYSTACK_ONLY: f64 = 10.0;

impl SearchIndex {
    /// Ranked suggestions for a type-ahead query, best first, at most [`MAX_SUGGESTIONS`]
    pub fn search(&self, query: &str) -> Vec<RankedMatch> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }

        let terms: Vec<&str> = query.split_whitespace().collect();
        let needle = terms.join(" ");

        let mut matches: Vec<RankedMatch> = self
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| terms.iter().all(|term| record.haystack.contains(term)))
            .map(|(index, record)| RankedMatch { index, score: score_record(record, &needle) })
            .collect();

        // Stable: equal scores keep index order
        matches.sort_by(|a, b| a.score.total_cmp(&b.score));
        matches.truncate(MAX_SUGGESTIONS);
        matches
    }
}

/// Tiered score of `record` for a normalized (lowercase, whitespace-collapsed) query.
/// Lower is better.
///
/// | tier | condition            | score                 |
/// |------|----------------------|-----------------------|
/// | 0    | id starts with query | 0                     |
/// | 1    | id contains query    | 1 + position/1000     |
/// | 2    | task starts with     | 2                     |
/// | 3    | task contains        | 3 + position/1000     |
/// | 4    | category contains    | 4 + position/1000     |
/// | 5    | title contains       | 5 + position/1000     |
/// | -    | haystack only        | 10                    |
pub fn score_record(record: &SearchRecord, query: &str) -> f64 {
    let id = record.question_id.to_lowercase();
    if id.starts_with(query) {
        return 0.0;
    }
    if let Some(pos) = id.find(query) {
        return 1.0 + position_fraction(pos);
    }

    let task = record.task.to_lowercase();
    if task.starts_with(query) {
        return 2.0;
    }
    if let Some(pos) = task.find(query) {
        return 3.0 + position_fraction(pos);
    }

    if let Some(pos) = record.category.to_lowercase().find(query) {
        return 4.0 + position_fraction(pos);
    }
    if let Some(pos) = record.title.to_lowercase().find(query) {
        return 5.0 + position_fraction(pos);
    }

    HAYSTACK_ONLY
}

fn position_fraction(pos: usize) -> f64 {
    pos.min(POSITION_SCALE - 1) as f64 / POSITION_SCALE as f64
}
