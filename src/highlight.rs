//! Terminal highlighting
//!
//! Colored output is queued as ANSI sequences on the same writer that
//! receives plain text, so ordering between the two is preserved.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::fmt::Display;
use std::io::{self, Write};

/// Color used for characters above the reader's grade
pub const DISALLOWED_COLOR: Color = Color::Cyan;

/// Color used for page banners
pub const PAGE_COLOR: Color = Color::Blue;

/// Color used for the tool's title banner
pub const TITLE_COLOR: Color = Color::Green;

/// Width of the horizontal rules in page banners
pub const RULE_WIDTH: usize = 56;

/// Width of the horizontal rules in the title banner
pub const TITLE_RULE_WIDTH: usize = 50;

/// Write `text` in `color`, then reset the terminal color
pub fn paint<W, T>(w: &mut W, color: Color, text: T) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    queue!(w, SetForegroundColor(color), Print(text), ResetColor)
}

/// Text of a page banner: a blank line, a rule, the right-aligned page
/// name and another rule, each terminated by a newline
pub fn page_banner(name: &str) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!("\n{rule}\n{name:>5}\n{rule}\n")
}

/// Text of the title banner printed when the tool starts
pub fn title_banner(title: &str) -> String {
    let rule = "=".repeat(TITLE_RULE_WIDTH);
    format!("{rule}\n    {title}\n{rule}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_text_in_color() {
        let mut out = Vec::new();
        paint(&mut out, DISALLOWED_COLOR, '確').unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("\x1b["));
        assert!(s.contains('確'));
        assert!(s.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_page_banner_layout() {
        let banner = page_banner("p1");
        let lines: Vec<&str> = banner.split('\n').collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1].len(), RULE_WIDTH);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "   p1");
        assert_eq!(lines[3], lines[1]);
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_page_banner_long_name_not_truncated() {
        let banner = page_banner("page12");
        assert!(banner.contains("\npage12\n"));
    }

    #[test]
    fn test_title_banner() {
        let banner = title_banner("kids-kanji-checker");
        assert_eq!(banner.lines().count(), 3);
        assert_eq!(banner.lines().nth(1), Some("    kids-kanji-checker"));
        assert_eq!(banner.lines().next().map(str::len), Some(TITLE_RULE_WIDTH));
    }
}
