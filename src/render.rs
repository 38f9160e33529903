//! Classifying and rendering logical lines
//!
//! Every Han character outside the reader's allowed set is marked, either
//! with terminal color or with underscores around it. Everything else is
//! written unchanged, and each line ends with exactly one newline.

use crate::charclass::is_han;
use crate::grades::GradeTable;
use crate::highlight::{self, DISALLOWED_COLOR, PAGE_COLOR};
use std::collections::HashSet;
use std::io::{self, Write};

/// How a disallowed character is surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Terminal color, no literal markup
    #[default]
    ColorHighlight,
    /// Plain text, `_x_` around each disallowed character
    BracketMarker,
}

/// Renders lines against a fixed allowed set
#[derive(Debug, Clone)]
pub struct LineRenderer {
    allowed: HashSet<char>,
    mode: RenderMode,
}

impl LineRenderer {
    /// Renderer allowing the kanji of grades `1..=max_year` of `table`
    pub fn new(table: &GradeTable, mode: RenderMode, max_year: i32) -> Self {
        LineRenderer {
            allowed: table.allowed_up_to(max_year),
            mode,
        }
    }

    /// Whether `ch` would be written unchanged
    pub fn is_allowed(&self, ch: char) -> bool {
        !is_han(ch) || self.allowed.contains(&ch)
    }

    /// Write one logical line followed by a newline
    pub fn render<W: Write>(&self, w: &mut W, line: &str) -> io::Result<()> {
        let mut plain_start = 0;

        for (i, ch) in line.char_indices() {
            if self.is_allowed(ch) {
                continue;
            }
            w.write_all(line[plain_start..i].as_bytes())?;
            match self.mode {
                RenderMode::BracketMarker => write!(w, "_{ch}_")?,
                RenderMode::ColorHighlight => highlight::paint(w, DISALLOWED_COLOR, ch)?,
            }
            plain_start = i + ch.len_utf8();
        }

        w.write_all(line[plain_start..].as_bytes())?;
        w.write_all(b"\n")
    }

    /// Write a page banner, colored unless rendering plain text
    pub fn page_banner<W: Write>(&self, w: &mut W, name: &str) -> io::Result<()> {
        let banner = highlight::page_banner(name);
        match self.mode {
            RenderMode::BracketMarker => w.write_all(banner.as_bytes()),
            RenderMode::ColorHighlight => {
                // Blank line first, uncolored
                let (blank, rest) = banner.split_at(1);
                w.write_all(blank.as_bytes())?;
                highlight::paint(w, PAGE_COLOR, rest)
            }
        }
    }
}

/// Render one line against the built-in grade table
pub fn render<W: Write>(
    w: &mut W,
    line: &str,
    mode: RenderMode,
    max_year: i32,
) -> io::Result<()> {
    LineRenderer::new(GradeTable::builtin(), mode, max_year).render(w, line)
}
