//! Grade-year tables
//!
//! A [`GradeTable`] is an ordered list of character sets, one per school
//! grade. Grade `n` (1-based) holds the kanji introduced in that grade, so
//! the characters a reader in grade `n` is expected to know are the union of
//! the first `n` sets.

mod data;

use crate::error::GradeTableError;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Ordered per-grade character sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeTable {
    grades: Vec<HashSet<char>>,
}

/// On-disk form of a custom table
#[derive(Debug, Deserialize)]
struct GradeTableFile {
    grades: Vec<Vec<String>>,
}

impl GradeTable {
    /// Build a table from per-grade character lists
    pub fn from_grades<I, G>(grades: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = char>,
    {
        GradeTable {
            grades: grades
                .into_iter()
                .map(|g| g.into_iter().collect())
                .collect(),
        }
    }

    /// The built-in table of jōyō kanji by grade
    pub fn builtin() -> &'static GradeTable {
        static BUILTIN: OnceLock<GradeTable> = OnceLock::new();
        BUILTIN.get_or_init(|| GradeTable::from_grades(data::GRADES.iter().map(|g| g.chars())))
    }

    /// Load a table from JSON of the form `{"grades": [["一", "右"], ...]}`
    ///
    /// Entries that are not exactly one character are skipped with a warning.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, GradeTableError> {
        let file: GradeTableFile = serde_json::from_reader(reader)?;
        if file.grades.is_empty() {
            return Err(GradeTableError::Empty);
        }

        let mut grades = Vec::with_capacity(file.grades.len());
        for (i, entries) in file.grades.into_iter().enumerate() {
            let mut set = HashSet::with_capacity(entries.len());
            for entry in entries {
                let mut chars = entry.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => {
                        set.insert(ch);
                    }
                    _ => warn!(grade = i + 1, entry = %entry, "skipping grade table entry that is not a single character"),
                }
            }
            grades.push(set);
        }

        debug!(grades = grades.len(), "loaded custom grade table");
        Ok(GradeTable { grades })
    }

    /// Load a table from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, GradeTableError> {
        let file = File::open(path).map_err(|source| GradeTableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Number of grades defined
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Check if the table defines no grades
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    /// Characters introduced in one grade (1-based)
    pub fn grade(&self, year: usize) -> Option<&HashSet<char>> {
        year.checked_sub(1).and_then(|i| self.grades.get(i))
    }

    /// Union of the first `max_year` grades
    ///
    /// Values above the table length behave like the last grade; zero or
    /// negative values give the empty set.
    pub fn allowed_up_to(&self, max_year: i32) -> HashSet<char> {
        let take = usize::try_from(max_year).unwrap_or(0).min(self.grades.len());
        self.grades[..take].iter().flatten().copied().collect()
    }

    /// Grade (1-based) in which a character is introduced
    pub fn grade_of(&self, ch: char) -> Option<usize> {
        self.grades
            .iter()
            .position(|g| g.contains(&ch))
            .map(|i| i + 1)
    }
}
