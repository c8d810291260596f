use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::calendar::resolver::anchor_date;
use crate::calendar::{DateResolver, HebrewCalendar, HolidayTable, build_holidays};
use crate::dashboard::{Dashboard, DataSource, FsDataSource, ReleaseCatalog};
use crate::parsers::{parse_report, validate_questions};
use crate::utils::{get_data_dir, sanitize_for_terminal};
use crate::view::{format_summary, format_view_model};

#[derive(Parser)]
#[command(name = "halachabench-dashboard")]
#[command(version = "0.1.0")]
#[command(about = "Browse HalachaBench releases, scores and questions", long_about = None)]
pub struct Cli {
    /// Data directory holding report.json and releases/ [env: HALACHABENCH_DATA_DIR]
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the release dashboard: scores by category, sample questions, citation
    Summary {
        /// Release date (YYYY-MM-DD); defaults to the newest release
        #[arg(long)]
        release: Option<String>,
    },
    /// Print the score report in the harness's summary format
    Report,
    /// Search a release's questions
    Search {
        #[arg(required = true)]
        query: Vec<String>,
        #[arg(long)]
        release: Option<String>,
    },
    /// Show the upcoming observance dates
    Holidays,
    /// List available releases
    Releases,
    /// Check a release's questions against the harness schema
    Validate {
        #[arg(long)]
        release: Option<String>,
    },
    /// Interactive dashboard
    Browse {
        #[arg(long)]
        release: Option<String>,
    },
}

/// Parse arguments and run. Returns the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    execute(cli, &mut stdout.lock())
}

pub fn execute(cli: Cli, out: &mut impl Write) -> Result<i32> {
    let data_dir = get_data_dir(cli.data_dir.as_deref());
    debug!("Using data directory {}", data_dir.display());

    match cli.command {
        Some(Commands::Summary { release }) => show_summary(&data_dir, release.as_deref(), out),
        Some(Commands::Report) => show_report(&data_dir, out),
        Some(Commands::Search { query, release }) => {
            show_search(&data_dir, &query.join(" "), release.as_deref(), out)
        }
        Some(Commands::Holidays) => show_holidays(out),
        Some(Commands::Releases) => show_releases(&data_dir, out),
        Some(Commands::Validate { release }) => validate_release(&data_dir, release.as_deref(), out),
        Some(Commands::Browse { release }) => {
            let dashboard = open_dashboard(&data_dir, release.as_deref())?;
            crate::tui::run_dashboard(dashboard)?;
            Ok(0)
        }
        None => {
            writeln!(out, "Use --help for usage information")?;
            Ok(0)
        }
    }
}

/// Holiday table anchored on today's local date
pub fn current_holidays() -> HolidayTable {
    let resolver = DateResolver::new(HebrewCalendar::new);
    build_holidays(&resolver, anchor_date(&Local::now()))
}

pub fn open_dashboard(data_dir: &Path, release: Option<&str>) -> Result<Dashboard<FsDataSource>> {
    let catalog = ReleaseCatalog::discover(data_dir)?;
    if catalog.is_empty() {
        bail!("No releases found under {}", data_dir.join("releases").display());
    }

    let mut dashboard = Dashboard::new(FsDataSource::new(data_dir), catalog, current_holidays());
    if let Some(release) = release {
        dashboard.select_release_id(release)?;
    }
    Ok(dashboard)
}

fn show_summary(data_dir: &Path, release: Option<&str>, out: &mut impl Write) -> Result<i32> {
    let dashboard = open_dashboard(data_dir, release)?;

    let Some(view) = dashboard.view_model() else {
        bail!("{}", unavailable_reason(&dashboard));
    };
    writeln!(out, "{}", sanitize_for_terminal(&format_view_model(view)))?;
    Ok(0)
}

fn show_report(data_dir: &Path, out: &mut impl Write) -> Result<i32> {
    let source = FsDataSource::new(data_dir);
    let report = parse_report(&source.fetch_report()?)?;

    writeln!(out, "{}", sanitize_for_terminal(&format_summary(&report)))?;
    Ok(0)
}

fn show_search(
    data_dir: &Path,
    query: &str,
    release: Option<&str>,
    out: &mut impl Write,
) -> Result<i32> {
    let dashboard = open_dashboard(data_dir, release)?;
    if let Some(error) = dashboard.questions().error() {
        bail!("Questions unavailable: {}", error);
    }

    let index = dashboard.index();
    let matches = index.search(query);
    if matches.is_empty() {
        writeln!(out, "No matches")?;
        return Ok(0);
    }

    for (rank, hit) in matches.iter().enumerate() {
        let Some(record) = index.get(hit.index) else {
            continue;
        };
        writeln!(
            out,
            "{}. {} [{}] {} / {}",
            rank + 1,
            sanitize_for_terminal(&record.question_id),
            record.answer_type,
            sanitize_for_terminal(&record.category),
            sanitize_for_terminal(&record.task)
        )?;
        writeln!(out, "   {}", sanitize_for_terminal(&record.title))?;
        for date in &record.holiday_dates {
            writeln!(out, "   {}", date)?;
        }
    }
    Ok(0)
}

fn show_holidays(out: &mut impl Write) -> Result<i32> {
    let table = current_holidays();
    if table.is_empty() {
        writeln!(out, "Observance dates unavailable")?;
        return Ok(0);
    }

    for display in table.values() {
        writeln!(out, "{}", display)?;
    }
    Ok(0)
}

fn show_releases(data_dir: &Path, out: &mut impl Write) -> Result<i32> {
    let catalog = ReleaseCatalog::discover(data_dir)?;
    if catalog.is_empty() {
        writeln!(out, "No releases found under {}", data_dir.join("releases").display())?;
        return Ok(0);
    }

    let latest = catalog.latest_index();
    for (idx, release) in catalog.releases().iter().enumerate() {
        let marker = if idx == latest { "*" } else { " " };
        writeln!(out, "{} {} {:>5.1}%", marker, release, catalog.slider_percent(idx))?;
    }
    Ok(0)
}

fn validate_release(data_dir: &Path, release: Option<&str>, out: &mut impl Write) -> Result<i32> {
    let catalog = ReleaseCatalog::discover(data_dir)?;
    let release = match release {
        Some(release) => {
            if catalog.position(release).is_none() {
                bail!("Unknown release: {}", release);
            }
            release
        }
        None => catalog.release_at(catalog.latest_index()).context("No releases found")?,
    };

    let text = FsDataSource::new(data_dir).fetch_questions(release)?;
    let issues = validate_questions(&text)?;
    if issues.is_empty() {
        writeln!(out, "Release {}: no validation issues", release)?;
        return Ok(0);
    }

    writeln!(out, "Release {}: {} validation issues", release, issues.len())?;
    for issue in &issues {
        let id = issue.question_id.as_deref().unwrap_or("<no id>");
        writeln!(
            out,
            "  line {} [{}]: {}",
            issue.line,
            sanitize_for_terminal(id),
            sanitize_for_terminal(&issue.message)
        )?;
    }
    Ok(1)
}

fn unavailable_reason<S: DataSource>(dashboard: &Dashboard<S>) -> String {
    if let Some(error) = dashboard.report().error() {
        format!("Score report unavailable: {}", error)
    } else if let Some(error) = dashboard.questions().error() {
        format!("Questions unavailable: {}", error)
    } else {
        "Dashboard data unavailable".to_string()
    }
}
