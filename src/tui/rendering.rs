use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use super::app::Focus;
use super::layout::AppLayout;
use crate::models::{SearchRecord, ViewModel};
use crate::utils::sanitize_for_terminal;
use crate::view::format_score;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const BAR: Color = Color::Rgb(24, 24, 27);

const SLIDER_WIDTH: usize = 12;

/// Transient status bar message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
}

/// Everything one frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub query: &'a str,
    pub focus: Focus,
    pub dropdown_open: bool,
    pub suggestions: Vec<&'a SearchRecord>,
    pub active_index: Option<usize>,
    pub view: Option<&'a ViewModel>,
    pub unavailable: Option<&'a str>,
    pub category_idx: usize,
    pub preview: Option<&'a SearchRecord>,
    pub selected_question: Option<&'a str>,
    pub release: Option<&'a str>,
    pub release_position: (usize, usize),
    pub slider_percent: f64,
    pub status_message: Option<&'a StatusMessage>,
}

pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_search_input(frame, layout.search_area, state);
    render_categories(frame, layout.categories_area, state);
    render_preview(frame, layout.preview_area, state);
    render_status_bar(frame, layout.status_area, state);

    // Drawn last so it overlays the panels
    if state.dropdown_open {
        render_dropdown(frame, layout.dropdown_area(state.suggestions.len()), state);
    }
}

fn border_style(focused: bool) -> Style {
    if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
}

fn render_search_input(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::Search;
    let text = if state.query.is_empty() && !focused {
        Line::from(Span::styled("Search questions (Tab to focus)", Style::default().fg(MUTED)))
    } else {
        Line::from(sanitize_for_terminal(state.query))
    };

    let paragraph = Paragraph::new(text).block(
        Block::default().borders(Borders::ALL).border_style(border_style(focused)).title(" Search "),
    );
    frame.render_widget(paragraph, area);
}

fn render_dropdown(frame: &mut Frame, area: Rect, state: &RenderState) {
    let items: Vec<ListItem> = if state.suggestions.is_empty() {
        vec![ListItem::new("Type at least two characters").style(Style::default().fg(MUTED))]
    } else {
        state
            .suggestions
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let content = format!(
                    "{} | {} | {}",
                    sanitize_for_terminal(&record.task),
                    record.answer_type,
                    sanitize_for_terminal(&record.title)
                );
                let style = if state.active_index == Some(idx) {
                    Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(BRIGHT)
                };
                ListItem::new(content).style(style)
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default().borders(Borders::ALL).border_style(border_style(true)).title(" Suggestions "),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn render_categories(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::Categories;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(" Categories ");

    let Some(view) = state.view else {
        let message = match state.unavailable {
            Some(error) => format!("Data unavailable: {}", sanitize_for_terminal(error)),
            None => "Loading...".to_string(),
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(MUTED))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Overall ", Style::default().fg(MUTED)),
            Span::styled(format_score(view.overall), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} questions, {} missing", view.n_questions, view.n_missing),
                Style::default().fg(MUTED),
            ),
        ]),
        Line::from(""),
    ];

    for (idx, category) in view.categories.iter().enumerate() {
        let selected = idx == state.category_idx;
        let style = if selected && focused {
            Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BRIGHT)
        };
        lines.push(Line::styled(
            format!(
                "{} {} ({} tasks)",
                format_score(category.score),
                sanitize_for_terminal(&category.name),
                category.n_tasks
            ),
            style,
        ));

        // Only the selected category is expanded
        if selected {
            for task in &category.tasks {
                lines.push(Line::styled(
                    format!(
                        "    {} {} (n: {})",
                        format_score(task.score),
                        sanitize_for_terminal(&task.name),
                        task.n_questions
                    ),
                    Style::default().fg(MUTED),
                ));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_preview(frame: &mut Frame, area: Rect, state: &RenderState) {
    let label = |text: &'static str| Span::styled(text, Style::default().fg(MUTED));

    let content = match (state.preview, state.selected_question) {
        (Some(record), _) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    sanitize_for_terminal(&record.title),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    label("Category: "),
                    Span::raw(sanitize_for_terminal(&record.category)),
                ]),
                Line::from(vec![label("Task: "), Span::raw(sanitize_for_terminal(&record.task))]),
                Line::from(vec![label("Answer type: "), Span::raw(record.answer_type.clone())]),
                Line::from(vec![
                    label("Question: "),
                    Span::raw(sanitize_for_terminal(&record.question_id)),
                ]),
                Line::from(""),
            ];

            for option in &record.options {
                lines.push(Line::from(format!(
                    "  {}. {}",
                    option.letter,
                    sanitize_for_terminal(&option.text)
                )));
            }
            for detail in &record.details {
                lines.push(Line::from(sanitize_for_terminal(detail)));
            }
            if let Some(instruction) = &record.instruction {
                lines.push(Line::from(""));
                lines.push(Line::styled(sanitize_for_terminal(instruction), Style::default().fg(ACCENT)));
            }
            if !record.holiday_dates.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(label("Upcoming dates:")));
                for date in &record.holiday_dates {
                    lines.push(Line::from(format!("  {}", date)));
                }
            }

            Text::from(lines)
        }
        (None, Some(id)) => Text::from(format!(
            "Question {} is not part of this release",
            sanitize_for_terminal(id)
        )),
        (None, None) => Text::from(vec![
            Line::from("No question selected"),
            Line::from(""),
            Line::from(label("Type to search, Up/Down to highlight, Enter to open")),
        ]),
    };

    let paragraph = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).border_style(border_style(false)).title(" Question "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut parts = vec![];

    match state.release {
        Some(release) => {
            let (position, total) = state.release_position;
            parts.push(format!(
                "Release {} {} {}/{}",
                release,
                slider_bar(state.slider_percent, SLIDER_WIDTH),
                position,
                total
            ));
        }
        None => parts.push("No releases".to_string()),
    }

    if let Some(message) = state.status_message {
        parts.push(message.text.clone());
    }
    parts.push("Left/Right: release".to_string());
    parts.push("Tab: focus".to_string());
    parts.push("Esc: close".to_string());
    parts.push("Ctrl+C: quit".to_string());

    let paragraph = Paragraph::new(format!(" {} ", parts.join(" | ")))
        .style(Style::default().fg(BRIGHT).bg(BAR));
    frame.render_widget(paragraph, area);
}

/// `[-----o------]` with the knob placed at `percent` of the track
pub fn slider_bar(percent: f64, width: usize) -> String {
    if width == 0 {
        return "[]".to_string();
    }
    let knob = ((percent.clamp(0.0, 100.0) / 100.0) * (width - 1) as f64).round() as usize;

    let track: String = (0..width).map(|i| if i == knob { 'o' } else { '-' }).collect();
    format!("[{}]", track)
}
