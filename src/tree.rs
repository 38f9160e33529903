//! Document tree representation
//!
//! This module defines the labelled tree built from a document's XML and the
//! parser that produces it. Only what the line assemblers need is kept: the
//! local tag name, the `name` attribute, the raw inner markup and the
//! children in document order.

use crate::error::ParseError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// One element of a parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Local tag name, without namespace prefix (`p` for `<w:p>`)
    pub tag: String,
    /// Value of the attribute whose local name is `name`, if any
    pub name: Option<String>,
    /// Raw text between the start and end tag, nested markup included
    pub content: String,
    /// Child elements in document order
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with a tag and nothing else
    pub fn new(tag: impl Into<String>) -> Self {
        TreeNode {
            tag: tag.into(),
            ..TreeNode::default()
        }
    }

    /// Set the raw content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the `name` attribute
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Build a node (without content or children) from a start tag
    fn from_start(start: &BytesStart<'_>, position: usize) -> Result<Self, ParseError> {
        let tag = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        let mut name = None;
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ParseError::Syntax {
                position,
                message: e.to_string(),
            })?;
            if attr.key.local_name().as_ref() == b"name" {
                let value = attr.unescape_value().map_err(|e| ParseError::Syntax {
                    position,
                    message: e.to_string(),
                })?;
                name = Some(value.into_owned());
            }
        }

        Ok(TreeNode {
            tag,
            name,
            content: String::new(),
            children: Vec::new(),
        })
    }
}

/// An element whose end tag has not been seen yet
struct OpenElement {
    node: TreeNode,
    /// Byte offset just past the start tag
    content_start: usize,
    /// Byte offset of the start tag, for error reporting
    position: usize,
}

/// Parse the first root element of an XML document into a tree
///
/// Declarations, comments, processing instructions and text before the root
/// are skipped, and anything after the root's end tag is ignored.
pub fn parse_document(input: &str) -> Result<TreeNode, ParseError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<OpenElement> = Vec::new();

    loop {
        let before = reader.buffer_position() as usize;
        let event = reader.read_event().map_err(|e| ParseError::Syntax {
            position: reader.error_position() as usize,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                let node = TreeNode::from_start(&start, before)?;
                stack.push(OpenElement {
                    node,
                    content_start: reader.buffer_position() as usize,
                    position: before,
                });
            }
            Event::Empty(start) => {
                let node = TreeNode::from_start(&start, before)?;
                match stack.last_mut() {
                    Some(parent) => parent.node.children.push(node),
                    None => return Ok(node),
                }
            }
            Event::End(end) => {
                let Some(open) = stack.pop() else {
                    return Err(ParseError::UnexpectedEndTag {
                        tag: String::from_utf8_lossy(end.local_name().as_ref()).into_owned(),
                        position: before,
                    });
                };
                let mut node = open.node;
                node.content = input
                    .get(open.content_start..before)
                    .unwrap_or_default()
                    .to_string();
                match stack.last_mut() {
                    Some(parent) => parent.node.children.push(node),
                    None => return Ok(node),
                }
            }
            Event::Eof => {
                return Err(match stack.pop() {
                    Some(open) => ParseError::UnclosedElement {
                        tag: open.node.tag,
                        position: open.position,
                    },
                    None => ParseError::NoRootElement,
                });
            }
            // Text, CDATA, comments, declarations: only reachable through the
            // raw content of their enclosing element
            _ => {}
        }
    }
}
