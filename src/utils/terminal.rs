//! Sanitizing user-supplied text before it reaches the terminal
//!
//! Activity strings from a pool override file are shown verbatim by the CLI
//! and TUI. Escape sequences in them would drive the terminal instead of being
//! displayed, so they are removed on load.

/// Reduce `text` to a single displayable line
///
/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters.
/// Tabs and line breaks become spaces so multi-line input stays on one line.
///
/// # Examples
///
/// ```
/// use activity_suggester::utils::terminal::sanitize_line;
///
/// assert_eq!(sanitize_line("\x1b[31mFly\x1b[0m a\nkite"), "Fly a kite");
/// ```
pub fn sanitize_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequences end at the first letter
            for next_ch in chars.by_ref() {
                if next_ch.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        match ch {
            '\t' | '\n' | '\r' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_color_codes() {
        assert_eq!(sanitize_line("\x1b[31mBake\x1b[0m bread"), "Bake bread");
    }

    #[test]
    fn test_strips_cursor_movement() {
        assert_eq!(sanitize_line("\x1b[2J\x1b[HNap"), "Nap");
    }

    #[test]
    fn test_line_breaks_become_spaces() {
        assert_eq!(sanitize_line("Line 1\nLine 2\r\tEnd"), "Line 1 Line 2  End");
    }

    #[test]
    fn test_drops_bell_and_backspace() {
        assert_eq!(sanitize_line("Sing\x07\x08"), "Sing");
    }

    #[test]
    fn test_keeps_unicode() {
        assert_eq!(sanitize_line("Crêpes 🥞 \x1b[1mnow\x1b[0m"), "Crêpes 🥞 now");
    }

    #[test]
    fn test_lone_escape_is_dropped() {
        assert_eq!(sanitize_line("a\x1bb"), "ab");
    }

    #[test]
    fn test_only_escape_sequences() {
        assert_eq!(sanitize_line("\x1b[31m\x1b[0m"), "");
    }
}
