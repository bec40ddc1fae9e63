//! Summary report for one account.

use crate::account::Account;
use crate::grades::{CreditsByGrade, StandardRecord};
use crate::validation::LEVEL_RANGE;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub username: String,
    pub standards: Vec<StandardRecord>,
    pub total_credits: u32,
    /// Totals for every level 1-3, including empty ones.
    pub credits_by_level: BTreeMap<u8, u32>,
    pub credits_by_grade: CreditsByGrade,
    pub interests: Vec<String>,
    pub careers: Vec<String>,
}

impl Summary {
    /// Recomputes career suggestions as part of building the report.
    pub fn from_account(account: &mut Account) -> Self {
        let careers = account.planner_mut().recommend_careers();
        let tracker = account.tracker();

        Self {
            username: account.username().to_string(),
            standards: tracker.get_summary().to_vec(),
            total_credits: tracker.total_credits(None),
            credits_by_level: LEVEL_RANGE
                .map(|level| (level, tracker.total_credits(Some(level))))
                .collect(),
            credits_by_grade: tracker.credits_by_grade(),
            interests: account.planner().interests().to_vec(),
            careers,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
