//! Sanitizing upstream text before it reaches the terminal.
//!
//! Question prompts come from release files we don't control. Escape sequences embedded in
//! them could move the cursor or recolor the screen, so everything printed by the CLI and
//! drawn by the TUI goes through [`sanitize_for_terminal`].

/// Remove ANSI CSI sequences and control characters other than tab and newline
///
/// # Examples
///
/// ```
/// use halachabench_dashboard::utils::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mPurim\x1b[0m"), "Purim");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // ESC [ params final-byte
            if chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' {
            continue;
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(sanitize_for_terminal("Which bracha?\nA. Hamotzi"), "Which bracha?\nA. Hamotzi");
    }

    #[test]
    fn test_strips_csi_sequences() {
        assert_eq!(sanitize_for_terminal("\x1b[2J\x1b[1;1HShavuos"), "Shavuos");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize_for_terminal("bell\x07 back\x08space\r"), "bell backspace");
    }

    #[test]
    fn test_lone_escape_dropped() {
        assert_eq!(sanitize_for_terminal("a\x1bb"), "ab");
    }

    #[test]
    fn test_keeps_non_ascii() {
        assert_eq!(sanitize_for_terminal("שבת"), "שבת");
    }
}
