use crate::models::{McqOption, PromptPreview};

const UNTITLED: &str = "Untitled question";
const MAX_DETAILS: usize = 4;
const BOILERPLATE_PREFIXES: [&str; 2] = ["global assumptions", "lens definitions"];

/// Break a free-text prompt into title, lettered options, instruction and detail lines.
///
/// A leading "Global assumptions" / "Lens definitions" paragraph is shared boilerplate
/// and is dropped up to the first blank line after it.
pub fn parse_prompt(prompt: &str) -> PromptPreview {
    let lines: Vec<&str> = prompt.lines().map(str::trim).collect();
    let body = strip_boilerplate(&lines);

    let mut content = body.iter().copied().filter(|line| !line.is_empty());
    let title = content.next().unwrap_or(UNTITLED).to_string();

    let mut preview = PromptPreview { title, ..Default::default() };
    for line in content {
        if let Some(option) = parse_option(line) {
            preview.options.push(option);
            continue;
        }

        let lower = line.to_lowercase();
        if lower.starts_with("answer") || lower.starts_with("return") {
            preview.instruction = Some(line.to_string());
        } else if preview.details.len() < MAX_DETAILS {
            preview.details.push(line.to_string());
        }
    }

    preview
}

fn strip_boilerplate<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
        return &[];
    };

    let lower = lines[first].to_lowercase();
    if !BOILERPLATE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return &lines[first..];
    }

    match lines[first..].iter().position(|line| line.is_empty()) {
        Some(blank) => &lines[first + blank + 1..],
        None => &[],
    }
}

/// `A. text` through `D. text`
fn parse_option(line: &str) -> Option<McqOption> {
    let mut chars = line.chars();
    let letter = chars.next().filter(|c| matches!(c, 'A'..='D'))?;
    if chars.next() != Some('.') {
        return None;
    }

    let rest = chars.as_str();
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some(McqOption { letter, text: rest.trim_start().to_string() })
}
