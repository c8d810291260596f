//! TUI application state and event handling.
//!
//! The `App` owns the [`Dashboard`] (data sources and derived state) and the
//! [`SearchBox`] state machine. Keyboard actions are translated into search events or
//! dashboard operations:
//!
//! - **Search focus**: typing feeds `Input`, arrows move the highlight, Enter commits
//! - **Categories focus**: arrows move through the score table
//! - **Tab**: toggles focus; leaving the search box is a blur, so the dropdown closes
//!   after the blur delay rather than immediately
//! - **Left/Right**: move the release slider; the index is rebuilt and the open
//!   dropdown re-runs its query against it

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, StatusMessage, render_ui};
use crate::dashboard::{Dashboard, DataSource};
use crate::search_box::{Key, SearchBox, SearchEvent};

/// Maximum query length accepted from the keyboard
const MAX_QUERY_LEN: usize = 256;
/// How long release-change feedback stays in the status bar
const STATUS_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Categories,
}

pub struct App<S> {
    dashboard: Dashboard<S>,
    search: SearchBox,
    focus: Focus,
    selected_question: Option<String>,
    category_idx: usize,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<S: DataSource> App<S> {
    pub fn new(dashboard: Dashboard<S>) -> Self {
        let mut search = SearchBox::new();
        search.handle(SearchEvent::Focus, dashboard.index(), Instant::now());

        Self {
            dashboard,
            search,
            focus: Focus::Search,
            selected_question: None,
            category_idx: 0,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn dashboard(&self) -> &Dashboard<S> {
        &self.dashboard
    }

    /// Question id committed from the search box
    pub fn selected_question(&self) -> Option<&str> {
        self.selected_question.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.tick(now);

            // Redraw when dirty, or every 100ms to pick up terminal resizes
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(50))?;
            self.handle_action(action, Instant::now());
        }

        Ok(())
    }

    /// Fire time-based transitions: the blur close and status expiry
    fn tick(&mut self, now: Instant) {
        let was_open = self.search.is_open();
        self.search.tick(now);
        if was_open != self.search.is_open() {
            self.needs_redraw = true;
        }

        if self.status_message.as_ref().is_some_and(|msg| now >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::None {
            self.needs_redraw = true;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                if self.focus == Focus::Search && self.search.is_open() {
                    self.send(SearchEvent::KeyDown(Key::Escape), now);
                } else if !self.search.query().is_empty() {
                    self.send(SearchEvent::Clear, now);
                    self.selected_question = None;
                } else {
                    self.should_quit = true;
                }
            }
            Action::ClearSearch => {
                self.send(SearchEvent::Clear, now);
                self.selected_question = None;
            }
            Action::MoveUp => match self.focus {
                Focus::Search => self.send(SearchEvent::KeyDown(Key::ArrowUp), now),
                Focus::Categories => self.category_idx = self.category_idx.saturating_sub(1),
            },
            Action::MoveDown => match self.focus {
                Focus::Search => self.send(SearchEvent::KeyDown(Key::ArrowDown), now),
                Focus::Categories => {
                    let count = self.dashboard.view_model().map_or(0, |v| v.categories.len());
                    self.category_idx = (self.category_idx + 1).min(count.saturating_sub(1));
                }
            },
            Action::Select => {
                if self.focus == Focus::Search {
                    self.send(SearchEvent::KeyDown(Key::Enter), now);
                }
            }
            Action::ToggleFocus => match self.focus {
                Focus::Search => {
                    self.send(SearchEvent::Blur, now);
                    self.focus = Focus::Categories;
                }
                Focus::Categories => {
                    self.send(SearchEvent::Focus, now);
                    self.focus = Focus::Search;
                }
            },
            Action::PreviousRelease => {
                let current = self.dashboard.selected_index();
                if current > 0 {
                    self.change_release(current - 1, now);
                }
            }
            Action::NextRelease => {
                let current = self.dashboard.selected_index();
                self.change_release(current + 1, now);
            }
            Action::InsertChar(c) => {
                if self.focus == Focus::Search && self.search.query().len() < MAX_QUERY_LEN {
                    let mut query = self.search.query().to_string();
                    query.push(c);
                    self.send(SearchEvent::Input(query), now);
                }
            }
            Action::DeleteChar => {
                if self.focus == Focus::Search {
                    let mut query = self.search.query().to_string();
                    if query.pop().is_some() {
                        self.send(SearchEvent::Input(query), now);
                    }
                }
            }
            Action::None => {}
        }
    }

    fn send(&mut self, event: SearchEvent, now: Instant) {
        if let Some(question_id) = self.search.handle(event, self.dashboard.index(), now) {
            self.selected_question = Some(question_id);
        }
    }

    fn change_release(&mut self, index: usize, now: Instant) {
        if !self.dashboard.select_release(index) {
            return;
        }

        self.search.refresh(self.dashboard.index());
        let count = self.dashboard.view_model().map_or(0, |v| v.categories.len());
        self.category_idx = self.category_idx.min(count.saturating_sub(1));

        let text = match (self.dashboard.selected_release(), self.dashboard.questions().error()) {
            (Some(release), None) => format!("Release {}", release),
            (Some(release), Some(_)) => format!("Release {}: questions unavailable", release),
            (None, _) => "No release selected".to_string(),
        };
        self.status_message = Some(StatusMessage { text, expires_at: now + STATUS_DURATION });
    }

    fn render_state(&self) -> RenderState<'_> {
        let index = self.dashboard.index();
        let catalog = self.dashboard.catalog();
        let selected = self.dashboard.selected_index();

        RenderState {
            query: self.search.query(),
            focus: self.focus,
            dropdown_open: self.search.is_open(),
            suggestions: self.search.suggested_records(index),
            active_index: self.search.active_index(),
            view: self.dashboard.view_model(),
            unavailable: self
                .dashboard
                .report()
                .error()
                .or_else(|| self.dashboard.questions().error()),
            category_idx: self.category_idx,
            preview: self.selected_question.as_deref().and_then(|id| index.find(id)),
            selected_question: self.selected_question.as_deref(),
            release: self.dashboard.selected_release(),
            release_position: (selected + 1, catalog.len()),
            slider_percent: catalog.slider_percent(selected),
            status_message: self.status_message.as_ref(),
        }
    }
}
