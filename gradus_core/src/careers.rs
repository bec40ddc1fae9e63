//! Career Planner Module
//!
//! Keeps a student's interest tags and derives career suggestions from a
//! fixed, ordered rule table. Rules are tested against the set of tags
//! (exact membership), so "mathematics" does not trigger the "math" rule.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Returned on its own when no rule matches.
pub const FALLBACK_SUGGESTION: &str = "Explore more interests to unlock career suggestions";

/// A single suggestion rule: any trigger present yields the career.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerRule {
    pub triggers: &'static [&'static str],
    pub career: &'static str,
}

impl CareerRule {
    fn matches(&self, interests: &HashSet<&str>) -> bool {
        self.triggers.iter().any(|t| interests.contains(t))
    }
}

/// Evaluated in order; output order follows this table.
pub const CAREER_RULES: &[CareerRule] = &[
    CareerRule {
        triggers: &["math", "physics"],
        career: "Engineer",
    },
    CareerRule {
        triggers: &["biology", "chemistry"],
        career: "Doctor or Health Sciences",
    },
    CareerRule {
        triggers: &["english", "history"],
        career: "Lawyer or Writer",
    },
];

/// Interest profile plus the last computed recommendation list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerPlanner {
    interests: Vec<String>,
    careers: Vec<String>,
}

impl CareerPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interest, lower-cased. Duplicates are kept.
    pub fn add_interest(&mut self, interest: &str) {
        let tag = interest.to_lowercase();
        debug!("Adding interest '{}'", tag);
        self.interests.push(tag);
    }

    /// Recompute suggestions from scratch, replacing the cached list.
    pub fn recommend_careers(&mut self) -> Vec<String> {
        let interests: HashSet<&str> = self.interests.iter().map(String::as_str).collect();

        let mut careers: Vec<String> = CAREER_RULES
            .iter()
            .filter(|rule| rule.matches(&interests))
            .map(|rule| rule.career.to_string())
            .collect();

        if careers.is_empty() {
            careers.push(FALLBACK_SUGGESTION.to_string());
        }

        self.careers = careers;
        self.careers.clone()
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Result of the most recent `recommend_careers` call; empty before the first.
    pub fn last_recommendations(&self) -> &[String] {
        &self.careers
    }
}
