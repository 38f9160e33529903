//! kids-kanji-checker - Kanji grade checker
//!
//! Finds the kanji in a document that a child at a given school grade has
//! not learned yet. Plain text, word-processor (`.docx`) and presentation
//! (`.odp`) documents are supported.
//!
//! # Quick Start
//!
//! ```rust
//! use kids_kanji_checker::{CheckOptions, Checker, RenderMode};
//!
//! let checker = Checker::new(CheckOptions {
//!     max_year: 3,
//!     mode: RenderMode::BracketMarker,
//! });
//!
//! let mut out = Vec::new();
//! checker.check_text("あいうえお確刊かきく".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "あいうえお_確__刊_かきく\n");
//! ```
//!
//! # Features
//!
//! - Built-in table of the jōyō kanji by school grade, or a custom JSON table
//! - Terminal color or plain `_x_` markers
//! - Paragraph assembly for `.docx`, page banners for `.odp`

pub mod assemble;
pub mod charclass;
pub mod checker;
pub mod container;
pub mod error;
pub mod format;
pub mod grades;
pub mod highlight;
pub mod render;
pub mod tree;
pub mod walker;

// Re-export main API
pub use checker::{check_docx, check_odp, check_path, check_text, CheckOptions, Checker};
pub use error::{CheckError, ExtractionError, GradeTableError, ParseError};
pub use format::DocumentFormat;
pub use grades::GradeTable;
pub use render::{render, LineRenderer, RenderMode};
pub use tree::{parse_document, TreeNode};
pub use walker::{walk, NodeVisitor};
