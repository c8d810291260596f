//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use halachabench_dashboard::parsers::validate::compute_question_id;
use serde_json::{Value, json};
use tempfile::TempDir;

pub const DEFAULT_REPORT: &str = r#"{
    "overall": 0.625,
    "categories": {
        "Daily Halacha Core": {
            "score": 0.75,
            "tasks": {
                "shabbos": {"score": 1.0, "n_questions": 2},
                "purim": {"score": 0.5, "n_questions": 2}
            },
            "n_tasks": 2
        },
        "Hashkafa": {
            "score": 0.5,
            "tasks": {"lens": {"score": 0.5, "n_questions": 2}},
            "n_tasks": 1
        }
    },
    "tasks": {},
    "n_questions": 6,
    "n_missing": 1
}"#;

/// Builder for test data directory structures
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write report.json with the given content
    pub fn with_report(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("report.json"), content)
            .expect("Failed to write report.json");
        self
    }

    pub fn with_default_report(self) -> Self {
        self.with_report(DEFAULT_REPORT)
    }

    /// Write releases/<release>/questions.jsonl with the given raw content
    pub fn with_raw_release(self, release: &str, content: &str) -> Self {
        let release_dir = self.temp_dir.path().join("releases").join(release);
        fs::create_dir_all(&release_dir).expect("Failed to create release dir");
        fs::write(release_dir.join("questions.jsonl"), content)
            .expect("Failed to write questions.jsonl");
        self
    }

    /// Add a release built from question builders
    pub fn with_release(self, release: &str, questions: &[QuestionBuilder]) -> Self {
        let content = questions
            .iter()
            .map(|q| q.to_json_for(release))
            .collect::<Vec<_>>()
            .join("\n");
        self.with_raw_release(release, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for questions.jsonl records. Ids are the canonical hash unless overridden.
pub struct QuestionBuilder {
    question_id: Option<String>,
    category: String,
    task: String,
    prompt: String,
    answer_type: String,
    ground_truth: Value,
    choices: Option<Vec<String>>,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self {
            question_id: None,
            category: "Daily Halacha Core".to_string(),
            task: "shabbos".to_string(),
            prompt: "Is cooking permitted on Shabbos?\nAnswer true or false.".to_string(),
            answer_type: "boolean".to_string(),
            ground_truth: json!(false),
            choices: None,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.question_id = Some(id.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn task(mut self, task: &str) -> Self {
        self.task = task.to_string();
        self
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    /// Multiple choice with the given options; ground truth is "A"
    pub fn mcq(mut self, choices: &[&str]) -> Self {
        self.answer_type = "mcq".to_string();
        self.ground_truth = json!("A");
        self.choices = Some(choices.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn to_json_for(&self, release: &str) -> String {
        let mut record = json!({
            "category": self.category,
            "task": self.task,
            "turns": [{"role": "user", "content": self.prompt}],
            "answer_type": self.answer_type,
            "ground_truth": self.ground_truth,
            "release_date": release,
            "license": "CC-BY 4.0",
            "attribution": "HalachaBench contributors",
        });
        let Value::Object(map) = &mut record else {
            unreachable!("record is built as an object");
        };
        if let Some(choices) = &self.choices {
            map.insert("choices".to_string(), json!(choices));
        }

        let id = match &self.question_id {
            Some(id) => id.clone(),
            None => compute_question_id(map),
        };
        map.insert("question_id".to_string(), json!(id));
        record.to_string()
    }
}

impl Default for QuestionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Two releases: an older one with two questions, the newest with four
pub fn standard_data_dir() -> TempDir {
    DataDirBuilder::new()
        .with_default_report()
        .with_release(
            "2026-01-15",
            &[
                QuestionBuilder::new().id("old-shabbos"),
                QuestionBuilder::new().id("old-lens").category("Hashkafa").task("lens"),
            ],
        )
        .with_release(
            "2026-02-06",
            &[
                QuestionBuilder::new(),
                QuestionBuilder::new()
                    .task("purim")
                    .prompt("When is the Purim seuda eaten?\nA. Morning\nB. Afternoon\nAnswer with a letter.")
                    .mcq(&["Morning", "Afternoon"]),
                QuestionBuilder::new()
                    .category("Hashkafa")
                    .task("lens")
                    .prompt("Lens definitions: x\n\nWhich lens fits bitachon?"),
                QuestionBuilder::new().task("pesach").prompt("May chametz be sold before Pesach?"),
            ],
        )
        .build()
}
