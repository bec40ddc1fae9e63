//! Accounts and password digests.
//!
//! Passwords are stored as an unsalted hex SHA-256 digest. This keeps
//! casual snooping out of a single-process session and nothing more.

use crate::activity::{ActivityKind, ActivityLog};
use crate::careers::CareerPlanner;
use crate::grades::GradeTracker;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of the raw password (64 characters).
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}

/// A registered student. Owns exactly one tracker, planner and timeline.
#[derive(Debug, Clone)]
pub struct Account {
    username: String,
    password_hash: String,
    tracker: GradeTracker,
    planner: CareerPlanner,
    activity: ActivityLog,
}

impl Account {
    pub fn new(username: &str, password: &str) -> Self {
        let mut activity = ActivityLog::new();
        activity.record(
            ActivityKind::AccountCreated,
            &format!("Account '{}' created", username),
        );
        Self {
            username: username.to_string(),
            password_hash: hash_password(password),
            tracker: GradeTracker::new(),
            planner: CareerPlanner::new(),
            activity,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn verify(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash)
    }

    pub fn tracker(&self) -> &GradeTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut GradeTracker {
        &mut self.tracker
    }

    pub fn planner(&self) -> &CareerPlanner {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut CareerPlanner {
        &mut self.planner
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn record(&mut self, kind: ActivityKind, description: &str) {
        self.activity.record(kind, description);
    }
}
