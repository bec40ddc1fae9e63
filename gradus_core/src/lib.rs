//! Gradus Core
//!
//! Everything behind the Gradus console:
//! - Grade tracker: standards, credits by level and by grade
//! - Career planner: interest tags and rule-based career suggestions
//! - Frost: keyword-matched career advice
//! - Session: account registry and the logged-in account

pub mod account;
pub mod activity;
pub mod careers;
pub mod config;
pub mod error;
pub mod frost;
pub mod grades;
pub mod session;
pub mod summary;
pub mod validation;

pub use account::Account;
pub use activity::{ActivityEvent, ActivityKind, ActivityLog};
pub use careers::CareerPlanner;
pub use config::{ConfigError, GradusConfig};
pub use error::{GradusError, GradusResult};
pub use frost::{Frost, KnowledgeBase, KnowledgeEntry};
pub use grades::{CreditsByGrade, Grade, GradeTracker, StandardRecord};
pub use session::Session;
pub use summary::Summary;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert_eq!(get_version(), "0.1.0");
    }
}
