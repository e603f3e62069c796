/// Terminal presentation of tool status lines.
use crossterm::style::{Color, Stylize};

use crate::labels::{FILE_EDIT_TOOL, FILE_MANAGER_TOOL};

// ── Tool glyphs ───────────────────────────────────────────────────────────────

pub fn tool_glyph(tool_name: &str) -> &'static str {
    match tool_name {
        FILE_EDIT_TOOL    => "◈",
        FILE_MANAGER_TOOL => "≡",
        _                 => "⚙",
    }
}

fn tool_color(tool_name: &str) -> Color {
    match tool_name {
        FILE_EDIT_TOOL    => Color::Green,
        FILE_MANAGER_TOOL => Color::Blue,
        _                 => Color::White,
    }
}

/// `◈ Creating file...`
pub fn status_line(tool_name: &str, label: &str) -> String {
    format!("{} {label}", tool_glyph(tool_name))
}

/// Status line coloured per tool, for interactive terminals.
pub fn styled_status_line(tool_name: &str, label: &str) -> String {
    let glyph = tool_glyph(tool_name).with(tool_color(tool_name));
    format!("{glyph} {}", label.with(tool_color(tool_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs() {
        assert_eq!(tool_glyph("str_replace_editor"), "◈");
        assert_eq!(tool_glyph("file_manager"), "≡");
        assert_eq!(tool_glyph("bash"), "⚙");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line("str_replace_editor", "Creating file..."), "◈ Creating file...");
        assert_eq!(status_line("web_search", "web_search"), "⚙ web_search");
    }

    #[test]
    fn test_styled_status_line_keeps_text() {
        let line = styled_status_line("file_manager", "Managing files...");
        assert!(line.contains("≡"));
        assert!(line.contains("Managing files..."));
    }
}
