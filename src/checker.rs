//! Document check entry points
//!
//! A check reads one document, splits it into logical lines and renders each
//! line against the reader's allowed kanji. Plain text goes straight to the
//! renderer; word-processor and presentation XML is parsed and walked first.

use crate::assemble::{PresentationAssembler, WordAssembler};
use crate::container::extract_entry;
use crate::error::CheckError;
use crate::format::DocumentFormat;
use crate::grades::GradeTable;
use crate::render::{LineRenderer, RenderMode};
use crate::tree::parse_document;
use crate::walker::walk;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Grade the reader has reached when nothing else is given
pub const DEFAULT_MAX_YEAR: i32 = 3;

/// Options shared by every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Last grade whose kanji count as known
    pub max_year: i32,
    pub mode: RenderMode,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            max_year: DEFAULT_MAX_YEAR,
            mode: RenderMode::ColorHighlight,
        }
    }
}

/// Render every line of a plain text stream
///
/// Lines end at `\n`, with an optional `\r` before it. Bytes that are not
/// UTF-8 (a Shift_JIS file, say) become U+FFFD instead of stopping the check.
pub fn check_text<R, W>(
    mut reader: R,
    out: &mut W,
    renderer: &LineRenderer,
) -> Result<(), CheckError>
where
    R: BufRead,
    W: Write,
{
    debug!("scanning text input");
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut warned = false;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let mut bytes = buf.as_slice();
        if let Some(rest) = bytes.strip_suffix(b"\n") {
            bytes = rest.strip_suffix(b"\r").unwrap_or(rest);
        }
        let line = String::from_utf8_lossy(bytes);
        if !warned && matches!(line, Cow::Owned(_)) {
            warn!(line = line_no, "input is not valid UTF-8, undecodable bytes replaced");
            warned = true;
        }
        renderer.render(out, &line)?;
    }
    Ok(())
}

/// Render the paragraphs of a word-processor body
pub fn check_docx<W: Write>(
    xml: &str,
    out: &mut W,
    renderer: &LineRenderer,
) -> Result<(), CheckError> {
    debug!("reading docx content");
    let root = parse_document(xml).map_err(|e| CheckError::parse(e, xml))?;
    let mut assembler = WordAssembler::new(out, renderer);
    walk(std::slice::from_ref(&root), &mut assembler);
    if !assembler.pending().is_empty() {
        debug!(
            dropped = assembler.pending(),
            "text after the last paragraph start is not printed"
        );
    }
    assembler.finish()?;
    Ok(())
}

/// Render the pages and spans of a presentation body
pub fn check_odp<W: Write>(
    xml: &str,
    out: &mut W,
    renderer: &LineRenderer,
) -> Result<(), CheckError> {
    debug!("reading odp content");
    let root = parse_document(xml).map_err(|e| CheckError::parse(e, xml))?;
    let mut assembler = PresentationAssembler::new(out, renderer);
    walk(std::slice::from_ref(&root), &mut assembler);
    assembler.finish()?;
    Ok(())
}

/// Check a file on disk in the given format
pub fn check_path<W: Write>(
    path: &Path,
    format: DocumentFormat,
    out: &mut W,
    renderer: &LineRenderer,
) -> Result<(), CheckError> {
    debug!(path = %path.display(), %format, "checking file");

    let Some(entry) = format.content_entry() else {
        let file = File::open(path)?;
        return check_text(BufReader::new(file), out, renderer);
    };

    let extracted = extract_entry(path, entry)?;
    debug!(content_path = %extracted.path().display(), "content extracted");
    let xml = extracted.read_to_string()?;

    match format {
        DocumentFormat::Docx => check_docx(&xml, out, renderer),
        DocumentFormat::Odp => check_odp(&xml, out, renderer),
        DocumentFormat::Text => check_text(xml.as_bytes(), out, renderer),
    }
}

/// A grade table and options, ready to check documents
#[derive(Debug, Clone)]
pub struct Checker {
    options: CheckOptions,
    renderer: LineRenderer,
}

impl Checker {
    /// Checker using the built-in grade table
    pub fn new(options: CheckOptions) -> Self {
        Self::with_table(GradeTable::builtin(), options)
    }

    /// Checker using a custom grade table
    pub fn with_table(table: &GradeTable, options: CheckOptions) -> Self {
        Checker {
            options,
            renderer: LineRenderer::new(table, options.mode, options.max_year),
        }
    }

    pub fn options(&self) -> CheckOptions {
        self.options
    }

    pub fn check_text<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: &mut W,
    ) -> Result<(), CheckError> {
        check_text(reader, out, &self.renderer)
    }

    pub fn check_docx<W: Write>(&self, xml: &str, out: &mut W) -> Result<(), CheckError> {
        check_docx(xml, out, &self.renderer)
    }

    pub fn check_odp<W: Write>(&self, xml: &str, out: &mut W) -> Result<(), CheckError> {
        check_odp(xml, out, &self.renderer)
    }

    /// Check a file, detecting its format from the extension unless given
    pub fn check_path<W: Write>(
        &self,
        path: &Path,
        format: Option<DocumentFormat>,
        out: &mut W,
    ) -> Result<(), CheckError> {
        let format = match format {
            Some(format) => format,
            None => DocumentFormat::from_path(path)?,
        };
        check_path(path, format, out, &self.renderer)
    }
}
