/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary against temporary data directories
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{DataDirBuilder, QuestionBuilder, standard_data_dir};
use predicates::prelude::*;

fn dashboard_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_halachabench-dashboard"));
    cmd.env_remove("HALACHABENCH_DATA_DIR").env_remove("LOG_LEVEL").env_remove("LOG_FORMAT");
    cmd
}

#[test]
fn test_cli_no_command_shows_help_message() {
    dashboard_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    dashboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse HalachaBench releases"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_cli_version_flag() {
    dashboard_cmd().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_summary() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("HalachaBench release 2026-02-06"))
        .stdout(predicate::str::contains("Overall score: 0.625"))
        .stdout(predicate::str::contains("Questions: 6 (1 missing predictions)"))
        .stdout(predicate::str::contains("  0.750 Daily Halacha Core (2 tasks)"))
        .stdout(predicate::str::contains("      1.000 shabbos (n: 2)"))
        .stdout(predicate::str::contains("Which lens fits bitachon?"))
        .stdout(predicate::str::contains("Licenses: CC-BY 4.0"))
        .stdout(predicate::str::contains("@misc{halachabench2026,"));
}

#[test]
fn test_cli_summary_orders_categories_by_score() {
    let data_dir = standard_data_dir();

    let output = dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("summary")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let core = stdout.find("Daily Halacha Core").unwrap();
    let hashkafa = stdout.find("0.500 Hashkafa").unwrap();
    assert!(core < hashkafa);
}

#[test]
fn test_cli_summary_selected_release() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(["summary", "--release", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HalachaBench release 2026-01-15"))
        .stdout(predicate::str::contains("Release 2026-01-15."));
}

#[test]
fn test_cli_data_dir_from_env() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .env("HALACHABENCH_DATA_DIR", data_dir.path())
        .arg("releases")
        .assert()
        .success()
        .stdout("  2026-01-15   0.0%\n* 2026-02-06 100.0%\n");
}

#[test]
fn test_cli_report() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Overall: 0.625 (questions: 6, missing: 1)\n"))
        .stdout(predicate::str::contains("Daily Halacha Core: 0.750 (tasks: 2)\n  purim: 0.500 (n: 2)\n  shabbos: 1.000 (n: 2)"));
}

#[test]
fn test_cli_search() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(["search", "purim", "seuda"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[mcq] Daily Halacha Core / purim"))
        .stdout(predicate::str::contains("When is the Purim seuda eaten?"))
        .stdout(predicate::str::contains("Purim: "));
}

#[test]
fn test_cli_search_no_matches() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(["search", "tefillin"])
        .assert()
        .success()
        .stdout("No matches\n");
}

#[test]
fn test_cli_search_requires_query() {
    dashboard_cmd().arg("search").assert().failure();
}

#[test]
fn test_cli_holidays() {
    dashboard_cmd()
        .arg("holidays")
        .assert()
        .success()
        .stdout(predicate::str::contains("Purim: "))
        .stdout(predicate::str::contains("Pesach: "))
        .stdout(predicate::str::contains("Rosh Chodesh "));
}

#[test]
fn test_cli_validate_clean_release() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout("Release 2026-02-06: no validation issues\n");
}

#[test]
fn test_cli_validate_reports_issues() {
    let data_dir = standard_data_dir();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(["validate", "--release", "2026-01-15"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Release 2026-01-15: 2 validation issues"))
        .stdout(predicate::str::contains("line 1 [old-shabbos]: question_id does not match"));
}

#[test]
fn test_cli_missing_data_dir() {
    let temp = tempfile::TempDir::new().unwrap();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(temp.path().join("nope"))
        .arg("summary")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Failed to read releases directory"));
}

#[test]
fn test_cli_summary_without_report() {
    let data_dir = DataDirBuilder::new().with_release("2026-02-06", &[QuestionBuilder::new()]).build();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("summary")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Score report unavailable"));
}

#[test]
fn test_cli_json_logs_stay_on_stderr() {
    let data_dir = DataDirBuilder::new().with_release("2026-02-06", &[QuestionBuilder::new()]).build();

    dashboard_cmd()
        .env("LOG_FORMAT", "json")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("summary")
        .assert()
        .stdout("")
        .stderr(predicate::str::contains(r#""level":"WARN""#));
}

#[test]
fn test_cli_sanitizes_upstream_text() {
    let data_dir = DataDirBuilder::new()
        .with_default_report()
        .with_release(
            "2026-02-06",
            &[QuestionBuilder::new().prompt("Shabbos \u{1b}[31mcandles\u{1b}[0m lighting time?")],
        )
        .build();

    dashboard_cmd()
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(["search", "shabbos"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shabbos candles lighting time?"))
        .stdout(predicate::str::contains("\u{1b}").not());
}
