//! Character class handling for the Han script
//!
//! A character is Han when it lies in one of the Han blocks below and is an
//! assigned code point. The resulting set is computed once and cached.

use std::sync::OnceLock;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Blocks and isolated code points belonging to the Han script
const HAN_BLOCKS: &[(u32, u32)] = &[
    (0x2E80, 0x2E99),   // CJK Radicals Supplement
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),   // Kangxi Radicals
    (0x3005, 0x3005),   // 々
    (0x3007, 0x3007),   // 〇
    (0x3021, 0x3029),   // Hangzhou numerals
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),   // Extension A
    (0x4E00, 0x9FFF),   // Unified Ideographs
    (0xF900, 0xFA6D),   // Compatibility Ideographs
    (0xFA70, 0xFAD9),
    (0x16FE2, 0x16FE3),
    (0x16FF0, 0x16FF1),
    (0x20000, 0x2A6DF), // Extension B
    (0x2A700, 0x2B739), // Extension C
    (0x2B740, 0x2B81D), // Extension D
    (0x2B820, 0x2CEA1), // Extension E
    (0x2CEB0, 0x2EBE0), // Extension F
    (0x2EBF0, 0x2EE5D), // Extension I
    (0x2F800, 0x2FA1D), // Compatibility Supplement
    (0x30000, 0x3134A), // Extension G
    (0x31350, 0x323AF), // Extension H
];

/// Sorted, disjoint, inclusive character ranges
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<(char, char)>,
}

impl RangeSet {
    /// Build a set from ranges in any order
    ///
    /// Reversed ranges are dropped; overlapping or touching ranges merge.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut sorted: Vec<(char, char)> =
            ranges.into_iter().filter(|(start, end)| start <= end).collect();
        sorted.sort_unstable_by_key(|r| r.0);

        let mut merged: Vec<(char, char)> = Vec::with_capacity(sorted.len());
        for (start, end) in sorted {
            match merged.last_mut() {
                Some(last) if start as u32 <= last.1 as u32 + 1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        RangeSet { ranges: merged }
    }

    /// Check if the set contains a character
    pub fn contains(&self, ch: char) -> bool {
        // Candidate is the last range starting at or before `ch`
        let idx = self.ranges.partition_point(|&(start, _)| start <= ch);
        idx > 0 && ch <= self.ranges[idx - 1].1
    }
}

/// Runs of assigned code points within `start..=end`
fn assigned_runs(start: u32, end: u32) -> Vec<(char, char)> {
    let mut runs = Vec::new();
    let mut current: Option<(char, char)> = None;

    for ch in (start..=end).filter_map(char::from_u32) {
        if get_general_category(ch) == GeneralCategory::Unassigned {
            runs.extend(current.take());
            continue;
        }
        current = match current {
            Some((first, _)) => Some((first, ch)),
            None => Some((ch, ch)),
        };
    }

    runs.extend(current);
    runs
}

/// The set of Han characters, computed on first use
pub fn han_ranges() -> &'static RangeSet {
    static HAN: OnceLock<RangeSet> = OnceLock::new();

    HAN.get_or_init(|| {
        RangeSet::from_ranges(
            HAN_BLOCKS
                .iter()
                .flat_map(|&(start, end)| assigned_runs(start, end)),
        )
    })
}

/// Check whether a character belongs to the Han script
pub fn is_han(ch: char) -> bool {
    han_ranges().contains(ch)
}
