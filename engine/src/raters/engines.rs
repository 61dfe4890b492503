//! Engine shorthand notation
//!
//! Ship designs describe their drive section as a compact string like
//! `"4S 2M 1L"`: four small, two medium, one large engine. This module
//! parses that shorthand into typed entries and sums the engine term of
//! each cost currency.
//!
//! Parsing never fails. A string with no recognizable groups (empty,
//! `"0"`, `"abc"`, `"3X"`) degrades to a single sentinel entry whose
//! count is NaN; every summation skips the sentinel, so "no engines
//! configured" contributes exactly zero.

use serde::{Deserialize, Serialize};

/// Engine size class recognized by the shorthand notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineSize {
    /// `S` groups
    Small,
    /// `M` groups (also the fallback class for the sentinel entry)
    Medium,
    /// `L` groups
    Large,
}

impl EngineSize {
    /// Shorthand letter for this size class
    pub fn letter(&self) -> char {
        match self {
            EngineSize::Small => 'S',
            EngineSize::Medium => 'M',
            EngineSize::Large => 'L',
        }
    }

    /// Size class for a shorthand letter, case-sensitively
    pub fn from_letter(letter: char) -> Option<EngineSize> {
        match letter {
            'S' => Some(EngineSize::Small),
            'M' => Some(EngineSize::Medium),
            'L' => Some(EngineSize::Large),
            _ => None,
        }
    }
}

/// One parsed engine group: a count of engines of a single size class
///
/// A `count` of NaN is the "no engines configured" sentinel. It is kept
/// as NaN rather than an `Option` because the cost sums filter on it;
/// use [`EngineEntry::is_unset`] instead of comparing counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineEntry {
    /// Number of engines in this group
    pub count: f64,
    /// Size class of every engine in this group
    pub size: EngineSize,
}

impl EngineEntry {
    /// Entry for `count` engines of the given size
    pub fn new(count: f64, size: EngineSize) -> Self {
        Self { count, size }
    }

    /// The "no engines configured" sentinel
    pub fn unset(fallback: EngineSize) -> Self {
        Self {
            count: f64::NAN,
            size: fallback,
        }
    }

    /// Whether this entry is the sentinel (contributes nothing to sums)
    pub fn is_unset(&self) -> bool {
        self.count.is_nan()
    }
}

/// Parse an engine shorthand string into ordered size groups
///
/// Scans left to right for a maximal run of ASCII digits immediately
/// followed by one of `S`, `M`, `L` (case-sensitive). Whitespace and any
/// other characters between groups are skipped without error. Zero
/// matches yield the single sentinel entry with the fallback size class.
///
/// # Example
/// ```
/// use vehicle_rater_core_rs::{parse_engine_spec, EngineSize};
///
/// let groups = parse_engine_spec("4S 2M 1L", EngineSize::Medium);
/// assert_eq!(groups.len(), 3);
/// assert_eq!(groups[0].count, 4.0);
/// assert_eq!(groups[0].size, EngineSize::Small);
///
/// let none = parse_engine_spec("0", EngineSize::Medium);
/// assert!(none[0].is_unset());
/// ```
pub fn parse_engine_spec(input: &str, fallback: EngineSize) -> Vec<EngineEntry> {
    let bytes = input.as_bytes();
    let mut entries = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        // A digit run only counts when the very next byte is a size letter;
        // otherwise the scan resumes after the run.
        if i < bytes.len() {
            if let Some(size) = EngineSize::from_letter(bytes[i] as char) {
                entries.push(EngineEntry::new(parse_count(&input[start..i]), size));
                i += 1;
            }
        }
    }

    if entries.is_empty() {
        vec![EngineEntry::unset(fallback)]
    } else {
        entries
    }
}

/// Base-10 count of a digit-only run
///
/// Parsed into f64 so the sentinel and huge counts share one
/// representation; a digit run always parses, the fallback is
/// unreachable in practice.
fn parse_count(digits: &str) -> f64 {
    digits.parse().unwrap_or(f64::NAN)
}

/// Engine term of one cost currency
///
/// Each group contributes `count * rate` for its size class; sentinel
/// entries contribute nothing.
pub(crate) fn engine_term(entries: &[EngineEntry], rate_for: fn(EngineSize) -> f64) -> f64 {
    entries
        .iter()
        .filter(|entry| !entry.is_unset())
        .map(|entry| entry.count * rate_for(entry.size))
        .sum()
}
