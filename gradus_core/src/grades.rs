//! Grade Tracker Module
//!
//! Records achievement standards for a single student and answers the
//! aggregate questions the summary screen needs: total credits (optionally
//! for one level) and credits partitioned by grade.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================
// GRADE
// ============================================================

/// Final grade awarded for a standard.
///
/// Declaration order (E, M, A, N) is the reporting order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Excellence
    E,
    /// Merit
    M,
    /// Achieved
    A,
    /// Not Achieved
    N,
    /// Grade text outside E/M/A/N, stored upper-cased as entered.
    /// Counts toward total credits but never toward a grade bucket.
    Other(String),
}

impl Grade {
    /// The four recognised grades in reporting order.
    pub const KNOWN: [Grade; 4] = [Grade::E, Grade::M, Grade::A, Grade::N];

    /// Upper-case raw text and map it to a grade, keeping unknown text as `Other`.
    pub fn from_raw(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        match upper.as_str() {
            "E" => Grade::E,
            "M" => Grade::M,
            "A" => Grade::A,
            "N" => Grade::N,
            _ => Grade::Other(upper),
        }
    }

    /// Strict parse: only E, M, A or N (any case, surrounding whitespace ignored).
    pub fn parse_known(raw: &str) -> Option<Self> {
        match Self::from_raw(raw.trim()) {
            Grade::Other(_) => None,
            grade => Some(grade),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Grade::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Grade::E => "E",
            Grade::M => "M",
            Grade::A => "A",
            Grade::N => "N",
            Grade::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::E => "Excellence",
            Grade::M => "Merit",
            Grade::A => "Achieved",
            Grade::N => "Not Achieved",
            Grade::Other(_) => "Unrecognised",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// STANDARD RECORD
// ============================================================

/// A single achievement standard. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRecord {
    title: String,
    level: u8,
    credits: u32,
    grade: Grade,
}

impl StandardRecord {
    /// Build a record from raw grade text. No range checks happen here.
    pub fn new(title: &str, level: u8, credits: u32, grade: &str) -> Self {
        Self::with_grade(title, level, credits, Grade::from_raw(grade))
    }

    pub fn with_grade(title: &str, level: u8, credits: u32, grade: Grade) -> Self {
        Self {
            title: title.to_string(),
            level,
            credits,
            grade,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn grade(&self) -> &Grade {
        &self.grade
    }
}

// ============================================================
// GRADE TRACKER
// ============================================================

/// Credits keyed by grade. Always holds exactly E, M, A and N.
pub type CreditsByGrade = BTreeMap<Grade, u32>;

/// Append-only list of standards for one student.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradeTracker {
    standards: Vec<StandardRecord>,
}

impl GradeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a standard. The grade is upper-cased; nothing else is checked.
    pub fn add_standard(&mut self, title: &str, level: u8, credits: u32, grade: &str) {
        self.add_record(StandardRecord::new(title, level, credits, grade));
    }

    /// Append a record that was already built (and usually validated) by the caller.
    pub fn add_record(&mut self, record: StandardRecord) {
        debug!(
            "Adding standard '{}' (level {}, {} credits, grade {})",
            record.title, record.level, record.credits, record.grade
        );
        self.standards.push(record);
    }

    /// Sum of credits, restricted to `level` when given.
    pub fn total_credits(&self, level: Option<u8>) -> u32 {
        self.standards
            .iter()
            .filter(|s| level.map_or(true, |l| s.level == l))
            .map(|s| s.credits)
            .sum()
    }

    pub fn credits_by_grade(&self) -> CreditsByGrade {
        let mut result: CreditsByGrade = Grade::KNOWN.iter().cloned().map(|g| (g, 0)).collect();
        for standard in &self.standards {
            if let Some(bucket) = result.get_mut(&standard.grade) {
                *bucket += standard.credits;
            }
        }
        result
    }

    /// All records in insertion order.
    pub fn get_summary(&self) -> &[StandardRecord] {
        &self.standards
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}
