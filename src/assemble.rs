//! Logical line assembly
//!
//! Word-processor documents split text into many small runs, so
//! [`WordAssembler`] accumulates run text and flushes it at each paragraph
//! start. Presentation spans are already complete lines and
//! [`PresentationAssembler`] renders them as they are visited, printing a
//! banner for every page.
//!
//! Both are [`NodeVisitor`]s that always descend. Write errors stop further
//! output; the first one is returned from `finish`.

use crate::render::LineRenderer;
use crate::tree::TreeNode;
use crate::walker::NodeVisitor;
use std::io::{self, Write};

/// Paragraph element of a word-processor document
const PARAGRAPH_TAG: &str = "p";
/// Text run element of a word-processor document
const TEXT_TAG: &str = "t";
/// Page element of a presentation
const PAGE_TAG: &str = "page";
/// Text span element of a presentation
const SPAN_TAG: &str = "span";

/// Assembles paragraphs out of text runs
///
/// The pending paragraph is flushed when the next paragraph starts, so the
/// first paragraph produces an empty line. Text after the last paragraph
/// start is never flushed.
pub struct WordAssembler<'a, W: Write> {
    out: &'a mut W,
    renderer: &'a LineRenderer,
    paragraph: String,
    error: Option<io::Error>,
}

impl<'a, W: Write> WordAssembler<'a, W> {
    pub fn new(out: &'a mut W, renderer: &'a LineRenderer) -> Self {
        WordAssembler {
            out,
            renderer,
            paragraph: String::new(),
            error: None,
        }
    }

    /// Text accumulated since the last paragraph start
    pub fn pending(&self) -> &str {
        &self.paragraph
    }

    /// Return the first write error, if any
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> NodeVisitor for WordAssembler<'_, W> {
    fn visit(&mut self, node: &TreeNode) -> bool {
        if self.error.is_some() {
            return false;
        }

        match node.tag.as_str() {
            PARAGRAPH_TAG => {
                if let Err(e) = self.renderer.render(self.out, &self.paragraph) {
                    self.error = Some(e);
                    return false;
                }
                self.paragraph.clear();
            }
            TEXT_TAG => self.paragraph.push_str(&node.content),
            _ => {}
        }
        true
    }
}

/// Renders presentation spans and page banners
pub struct PresentationAssembler<'a, W: Write> {
    out: &'a mut W,
    renderer: &'a LineRenderer,
    error: Option<io::Error>,
}

impl<'a, W: Write> PresentationAssembler<'a, W> {
    pub fn new(out: &'a mut W, renderer: &'a LineRenderer) -> Self {
        PresentationAssembler {
            out,
            renderer,
            error: None,
        }
    }

    /// Return the first write error, if any
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> NodeVisitor for PresentationAssembler<'_, W> {
    fn visit(&mut self, node: &TreeNode) -> bool {
        if self.error.is_some() {
            return false;
        }

        let result = match node.tag.as_str() {
            PAGE_TAG => self
                .renderer
                .page_banner(self.out, node.name.as_deref().unwrap_or_default()),
            SPAN_TAG => self.renderer.render(self.out, &node.content),
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.error = Some(e);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::GradeTable;
    use crate::highlight::page_banner;
    use crate::render::RenderMode;
    use crate::tree::parse_document;
    use crate::walker::walk;

    fn renderer(max_year: i32) -> LineRenderer {
        LineRenderer::new(GradeTable::builtin(), RenderMode::BracketMarker, max_year)
    }

    fn run(tree: &TreeNode) -> String {
        let renderer = renderer(3);
        let mut out = Vec::new();
        let mut assembler = WordAssembler::new(&mut out, &renderer);
        walk(std::slice::from_ref(tree), &mut assembler);
        assembler.finish().unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run_presentation(tree: &TreeNode) -> String {
        let renderer = renderer(3);
        let mut out = Vec::new();
        let mut assembler = PresentationAssembler::new(&mut out, &renderer);
        walk(std::slice::from_ref(tree), &mut assembler);
        assembler.finish().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_runs_joined_into_one_paragraph() {
        let tree = TreeNode::new("body")
            .with_child(
                TreeNode::new("p")
                    .with_child(TreeNode::new("r").with_child(TreeNode::new("t").with_content("あ")))
                    .with_child(TreeNode::new("r").with_child(TreeNode::new("t").with_content("い"))),
            )
            .with_child(TreeNode::new("p"));
        assert_eq!(run(&tree), "\nあい\n");
    }

    #[test]
    fn test_trailing_paragraph_not_flushed() {
        let tree = TreeNode::new("body").with_child(
            TreeNode::new("p").with_child(TreeNode::new("t").with_content("うえ")),
        );
        let renderer = renderer(3);
        let mut out = Vec::new();
        let mut assembler = WordAssembler::new(&mut out, &renderer);
        walk(std::slice::from_ref(&tree), &mut assembler);
        assert_eq!(assembler.pending(), "うえ");
        assembler.finish().unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_docx_markup_marks_kanji() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>あい</w:t></w:r><w:r><w:t>解格</w:t></w:r></w:p><w:p><w:r><w:t>雪</w:t></w:r></w:p><w:sectPr/></w:body></w:document>"#;
        let tree = parse_document(xml).unwrap();
        assert_eq!(run(&tree), "\nあい_解__格_\n");
    }

    #[test]
    fn test_page_banner_then_spans() {
        let tree = TreeNode::new("presentation").with_child(
            TreeNode::new("page")
                .with_name("p1")
                .with_child(TreeNode::new("frame").with_child(TreeNode::new("span").with_content("あい")))
                .with_child(TreeNode::new("span").with_content("うえ")),
        );
        assert_eq!(
            run_presentation(&tree),
            format!("{}あい\nうえ\n", page_banner("p1"))
        );
    }

    #[test]
    fn test_odp_markup() {
        let xml = r#"<office:document-content xmlns:office="o" xmlns:draw="d" xmlns:text="t"><office:body><office:presentation><draw:page draw:name="page1"><draw:frame><draw:text-box><text:p><text:span>胸と側</text:span></text:p></draw:text-box></draw:frame></draw:page><draw:page draw:name="page2"/></office:presentation></office:body></office:document-content>"#;
        let tree = parse_document(xml).unwrap();
        assert_eq!(
            run_presentation(&tree),
            format!(
                "{}_胸_と_側_\n{}",
                page_banner("page1"),
                page_banner("page2")
            )
        );
    }

    #[test]
    fn test_unnamed_page() {
        let tree = TreeNode::new("page");
        assert_eq!(run_presentation(&tree), page_banner(""));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_stops_walk() {
        let tree = TreeNode::new("body")
            .with_child(TreeNode::new("p"))
            .with_child(TreeNode::new("p"));
        let renderer = renderer(3);
        let mut out = FailingWriter;
        let mut assembler = WordAssembler::new(&mut out, &renderer);
        walk(std::slice::from_ref(&tree), &mut assembler);
        let err = assembler.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
