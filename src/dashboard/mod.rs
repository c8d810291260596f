//! Live dashboard state: three data sources feeding two derived values.
//!
//! Sources:
//! - **report** - fetched once per dashboard, independent of the release
//! - **questions** - fetched for the selected release; refetched on every release change
//! - **release** - the selected position in the [`ReleaseCatalog`]
//!
//! Derived:
//! - **view model** - recomputed by [`combine`] whenever any source changes; `None`
//!   while any input is unavailable
//! - **search index** - rebuilt from the question source alone; empty when it failed
//!
//! Fetch and parse failures are caught here, logged, and stored in the slot. They never
//! propagate to callers.

pub mod releases;
pub mod source;

use std::rc::Rc;

use anyhow::{Result, bail};
use tracing::{info, warn};

pub use releases::ReleaseCatalog;
pub use source::{DataSource, FsDataSource};

use crate::calendar::HolidayTable;
use crate::indexer::{SearchIndex, build_index};
use crate::models::{Question, Report, ViewModel};
use crate::parsers::{parse_questions, parse_report, validate_questions};
use crate::view::build_view_model;

/// Cached result of one source; replayed to every reader until invalidated
#[derive(Debug, Clone)]
pub enum Slot<T> {
    Pending,
    Ready(Rc<T>),
    Failed(String),
}

impl<T> Slot<T> {
    fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => Slot::Ready(Rc::new(value)),
            Err(e) => Slot::Failed(format!("{:#}", e)),
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Slot::Failed(message) => Some(message),
            _ => None,
        }
    }
}

pub struct Dashboard<S> {
    source: S,
    catalog: ReleaseCatalog,
    selected: usize,
    holidays: HolidayTable,
    report: Slot<Report>,
    questions: Slot<Vec<Question>>,
    index: SearchIndex,
    view_model: Option<ViewModel>,
}

impl<S: DataSource> Dashboard<S> {
    /// Load the report and the newest release, then derive the index and view model
    pub fn new(source: S, catalog: ReleaseCatalog, holidays: HolidayTable) -> Self {
        let selected = catalog.latest_index();
        let mut dashboard = Self {
            source,
            catalog,
            selected,
            holidays,
            report: Slot::Pending,
            questions: Slot::Pending,
            index: SearchIndex::default(),
            view_model: None,
        };

        dashboard.load_report();
        dashboard.load_questions();
        dashboard.rebuild_index();
        dashboard.recompute();
        dashboard
    }

    /// Move the release slider. Only the question source is refetched.
    /// Returns `false` when the position doesn't change the selection.
    pub fn select_release(&mut self, index: usize) -> bool {
        let index = index.min(self.catalog.latest_index());
        if index == self.selected {
            return false;
        }

        self.selected = index;
        self.questions = Slot::Pending;
        self.load_questions();
        self.rebuild_index();
        self.recompute();
        true
    }

    pub fn select_release_id(&mut self, release: &str) -> Result<()> {
        let Some(index) = self.catalog.position(release) else {
            bail!("Unknown release: {} (available: {})", release, self.catalog.releases().join(", "));
        };
        self.select_release(index);
        Ok(())
    }

    pub fn catalog(&self) -> &ReleaseCatalog {
        &self.catalog
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_release(&self) -> Option<&str> {
        self.catalog.release_at(self.selected)
    }

    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    pub fn report(&self) -> &Slot<Report> {
        &self.report
    }

    pub fn questions(&self) -> &Slot<Vec<Question>> {
        &self.questions
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn view_model(&self) -> Option<&ViewModel> {
        self.view_model.as_ref()
    }

    fn load_report(&mut self) {
        let result = self.source.fetch_report().and_then(|text| parse_report(&text));
        if let Err(e) = &result {
            warn!("Failed to load score report: {:#}", e);
        }
        self.report = Slot::from_result(result);
    }

    fn load_questions(&mut self) {
        let Some(release) = self.catalog.release_at(self.selected).map(str::to_string) else {
            warn!("No releases available");
            self.questions = Slot::Failed("no releases available".to_string());
            return;
        };

        let result = self.source.fetch_questions(&release).and_then(|text| {
            let questions = parse_questions(&text)?;
            match validate_questions(&text) {
                Ok(issues) if !issues.is_empty() => {
                    warn!("Release {} has {} validation issues", release, issues.len());
                }
                Ok(_) => {}
                Err(e) => warn!("Release {} could not be validated: {:#}", release, e),
            }
            Ok(questions)
        });

        match &result {
            Ok(questions) => info!("Loaded {} questions for release {}", questions.len(), release),
            Err(e) => warn!("Failed to load questions for release {}: {:#}", release, e),
        }
        self.questions = Slot::from_result(result);
    }

    fn rebuild_index(&mut self) {
        self.index = match self.questions.value() {
            Some(questions) => build_index(questions, &self.holidays),
            None => SearchIndex::default(),
        };
    }

    fn recompute(&mut self) {
        self.view_model = combine(&self.report, &self.questions, self.selected_release());
    }
}

/// Pure combination of the three sources; `None` unless all are available
pub fn combine(
    report: &Slot<Report>,
    questions: &Slot<Vec<Question>>,
    release: Option<&str>,
) -> Option<ViewModel> {
    Some(build_view_model(report.value()?, questions.value()?, release?))
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use anyhow::anyhow;

    use super::*;

    const REPORT: &str = r#"{"overall": 0.5, "categories": {"Cat": {"score": 0.5, "tasks": {}, "n_tasks": 0}}, "tasks": {}, "n_questions": 2, "n_missing": 0}"#;

    fn question_line(id: &str, release: &str) -> String {
        format!(
            r#"{{"question_id":"{}","category":"Cat","task":"pesach_prep","turns":[{{"role":"user","content":"Before Pesach?"}}],"answer_type":"boolean","ground_truth":true,"release_date":"{}","license":"CC-BY 4.0","attribution":"HalachaBench"}}"#,
            id, release
        )
    }

    #[derive(Default)]
    struct MockSource {
        report: Option<String>,
        questions: HashMap<String, String>,
        report_fetches: Cell<usize>,
        question_fetches: RefCell<Vec<String>>,
    }

    impl DataSource for MockSource {
        fn fetch_report(&self) -> Result<String> {
            self.report_fetches.set(self.report_fetches.get() + 1);
            self.report.clone().ok_or_else(|| anyhow!("report unreachable"))
        }

        fn fetch_questions(&self, release: &str) -> Result<String> {
            self.question_fetches.borrow_mut().push(release.to_string());
            self.questions.get(release).cloned().ok_or_else(|| anyhow!("questions unreachable"))
        }
    }

    fn source() -> MockSource {
        let mut questions = HashMap::new();
        questions.insert("2026-02-05".to_string(), question_line("old-1", "2026-02-05"));
        questions.insert(
            "2026-02-06".to_string(),
            format!("{}\n{}", question_line("new-1", "2026-02-06"), question_line("new-2", "2026-02-06")),
        );
        MockSource { report: Some(REPORT.to_string()), questions, ..Default::default() }
    }

    fn catalog() -> ReleaseCatalog {
        ReleaseCatalog::new(["2026-02-05".to_string(), "2026-02-06".to_string()])
    }

    #[test]
    fn test_new_selects_latest_release() {
        let dashboard = Dashboard::new(source(), catalog(), HolidayTable::new());

        assert_eq!(dashboard.selected_release(), Some("2026-02-06"));
        assert_eq!(dashboard.index().len(), 2);
        let view = dashboard.view_model().unwrap();
        assert_eq!(view.release_id, "2026-02-06");
        assert_eq!(view.overall, Some(0.5));
    }

    #[test]
    fn test_report_fetched_once_across_release_changes() {
        let mut dashboard = Dashboard::new(source(), catalog(), HolidayTable::new());

        assert!(dashboard.select_release(0));
        assert!(dashboard.select_release(1));
        assert!(!dashboard.select_release(1));

        assert_eq!(dashboard.source.report_fetches.get(), 1);
        assert_eq!(
            *dashboard.source.question_fetches.borrow(),
            vec!["2026-02-06", "2026-02-05", "2026-02-06"]
        );
    }

    #[test]
    fn test_release_change_rebuilds_index_and_view() {
        let mut dashboard = Dashboard::new(source(), catalog(), HolidayTable::new());
        dashboard.select_release(0);

        assert_eq!(dashboard.index().len(), 1);
        assert_eq!(dashboard.index().get(0).unwrap().question_id, "old-1");
        assert_eq!(dashboard.view_model().unwrap().release_id, "2026-02-05");
    }

    #[test]
    fn test_report_failure_means_no_view_model() {
        let source = MockSource { report: None, ..source() };
        let dashboard = Dashboard::new(source, catalog(), HolidayTable::new());

        assert!(dashboard.view_model().is_none());
        assert_eq!(dashboard.report().error(), Some("report unreachable"));
        // The search index only depends on questions
        assert_eq!(dashboard.index().len(), 2);
    }

    #[test]
    fn test_question_failure_degrades_to_empty_index() {
        let mut source = source();
        source.questions.insert("2026-02-06".to_string(), "{broken".to_string());
        let dashboard = Dashboard::new(source, catalog(), HolidayTable::new());

        assert!(dashboard.index().is_empty());
        assert!(dashboard.view_model().is_none());
        assert!(dashboard.questions().error().unwrap().contains("line 1"));
        assert!(dashboard.report().value().is_some());
    }

    #[test]
    fn test_no_releases() {
        let dashboard = Dashboard::new(source(), ReleaseCatalog::default(), HolidayTable::new());
        assert!(dashboard.view_model().is_none());
        assert!(dashboard.index().is_empty());
        assert_eq!(dashboard.source.question_fetches.borrow().len(), 0);
    }

    #[test]
    fn test_select_release_id() {
        let mut dashboard = Dashboard::new(source(), catalog(), HolidayTable::new());
        assert!(dashboard.select_release_id("2026-02-05").is_ok());
        assert_eq!(dashboard.selected_index(), 0);
        assert!(dashboard.select_release_id("1999-01-01").is_err());
    }

    #[test]
    fn test_combine_requires_all_inputs() {
        let report = Slot::Ready(Rc::new(parse_report(REPORT).unwrap()));
        let questions: Slot<Vec<Question>> = Slot::Ready(Rc::new(Vec::new()));

        assert!(combine(&report, &questions, Some("2026-02-05")).is_some());
        assert!(combine(&report, &questions, None).is_none());
        assert!(combine(&Slot::Pending, &questions, Some("2026-02-05")).is_none());
        assert!(combine(&report, &Slot::Failed("x".to_string()), Some("2026-02-05")).is_none());
    }
}
