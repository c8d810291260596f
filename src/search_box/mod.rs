//! Type-ahead search box state machine.
//!
//! The box is a single state value (`query`, `is_open`, `active_index`, `suggestions`)
//! that moves atomically on each [`SearchEvent`]. Phases:
//!
//! - **Closed** - no dropdown
//! - **Open-Empty** - focused, query below the two-character threshold
//! - **Open-Listing** - focused with ranked suggestions
//!
//! Blur does not close immediately: it arms a [`CloseTimer`] so a click on a suggestion
//! that lands just before the blur is still honored. Focus, select, clear and escape
//! cancel the pending close.

mod timer;

use std::time::{Duration, Instant};

pub use timer::CloseTimer;

use crate::indexer::SearchIndex;
use crate::models::{RankedMatch, SearchRecord};

/// Delay between blur and the dropdown closing
pub const BLUR_CLOSE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Focus,
    Input(String),
    Blur,
    KeyDown(Key),
    Clear,
    /// Commit the suggestion at this position in the current list
    Select(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    OpenEmpty,
    OpenListing,
}

#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
    is_open: bool,
    active_index: Option<usize>,
    suggestions: Vec<RankedMatch>,
    close_timer: CloseTimer,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// `None` when no suggestion is highlighted
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn suggestions(&self) -> &[RankedMatch] {
        &self.suggestions
    }

    pub fn phase(&self) -> Phase {
        match (self.is_open, self.suggestions.is_empty()) {
            (false, _) => Phase::Closed,
            (true, true) => Phase::OpenEmpty,
            (true, false) => Phase::OpenListing,
        }
    }

    pub fn close_pending(&self) -> bool {
        self.close_timer.is_armed()
    }

    /// Records behind the current suggestions, in rank order
    pub fn suggested_records<'a>(&self, index: &'a SearchIndex) -> Vec<&'a SearchRecord> {
        self.suggestions.iter().filter_map(|m| index.get(m.index)).collect()
    }

    /// Apply one event. Returns the question id when the event commits a suggestion.
    pub fn handle(&mut self, event: SearchEvent, index: &SearchIndex, now: Instant) -> Option<String> {
        match event {
            SearchEvent::Focus => {
                self.close_timer.cancel();
                self.recompute(index);
                self.is_open = true;
                None
            }
            SearchEvent::Input(text) => {
                self.query = text;
                self.recompute(index);
                if !self.query.is_empty() {
                    self.is_open = true;
                }
                None
            }
            SearchEvent::Blur => {
                self.close_timer.arm(now + BLUR_CLOSE_DELAY);
                None
            }
            SearchEvent::KeyDown(key) => self.handle_key(key, index),
            SearchEvent::Clear => {
                self.close_timer.cancel();
                self.query.clear();
                self.close();
                None
            }
            SearchEvent::Select(position) => self.commit(position, index),
        }
    }

    /// Fire the pending blur close if its deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.close_timer.fire(now) {
            self.close();
        }
    }

    /// Re-run the current query against a rebuilt index
    pub fn refresh(&mut self, index: &SearchIndex) {
        let active = self.active_index;
        self.recompute(index);
        if let Some(active) = active
            && !self.suggestions.is_empty()
        {
            self.active_index = Some(active.min(self.suggestions.len() - 1));
        }
    }

    fn handle_key(&mut self, key: Key, index: &SearchIndex) -> Option<String> {
        match key {
            Key::ArrowDown | Key::ArrowUp => {
                if !self.is_open || self.suggestions.is_empty() {
                    return None;
                }
                let last = self.suggestions.len() - 1;
                self.active_index = Some(match (key, self.active_index) {
                    (_, None) => 0,
                    (Key::ArrowDown, Some(i)) => (i + 1).min(last),
                    (_, Some(i)) => i.saturating_sub(1).min(last),
                });
                None
            }
            Key::Enter => match self.active_index {
                Some(position) if self.is_open && position < self.suggestions.len() => {
                    self.commit(position, index)
                }
                _ => None,
            },
            Key::Escape => {
                self.close_timer.cancel();
                self.is_open = false;
                self.active_index = None;
                None
            }
        }
    }

    fn commit(&mut self, position: usize, index: &SearchIndex) -> Option<String> {
        let record = self.suggestions.get(position).and_then(|m| index.get(m.index))?;
        let question_id = record.question_id.clone();

        self.close_timer.cancel();
        self.query = question_id.clone();
        self.close();
        Some(question_id)
    }

    fn recompute(&mut self, index: &SearchIndex) {
        self.suggestions = index.search(&self.query);
        self.active_index = None;
    }

    fn close(&mut self) {
        self.is_open = false;
        self.active_index = None;
        self.suggestions.clear();
    }
}
