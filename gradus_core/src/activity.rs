//! Activity Timeline Module
//!
//! Every successful account action (login, standard added, question asked,
//! ...) appends to the account's timeline. The timeline lives in memory
//! and is discarded when the process exits.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================
// ACTIVITY KINDS
// ============================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    AccountCreated,
    LoggedIn,
    LoggedOut,
    StandardAdded,
    InterestAdded,
    CareersRecommended,
    QuestionAsked,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::AccountCreated => "account_created",
            ActivityKind::LoggedIn => "logged_in",
            ActivityKind::LoggedOut => "logged_out",
            ActivityKind::StandardAdded => "standard_added",
            ActivityKind::InterestAdded => "interest_added",
            ActivityKind::CareersRecommended => "careers_recommended",
            ActivityKind::QuestionAsked => "question_asked",
        }
    }
}

// ============================================================
// ACTIVITY EVENT
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: ActivityKind,
    pub description: String,
}

impl ActivityEvent {
    pub fn new(kind: ActivityKind, description: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            kind,
            description: description.to_string(),
        }
    }
}

// ============================================================
// ACTIVITY LOG
// ============================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    events: Vec<ActivityEvent>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: ActivityKind, description: &str) {
        self.events.push(ActivityEvent::new(kind, description));
    }

    pub fn events(&self) -> &[ActivityEvent] {
        &self.events
    }

    pub fn events_of_kind(&self, kind: ActivityKind) -> Vec<&ActivityEvent> {
        self.events.iter().filter(|e| e.kind == kind).collect()
    }

    /// Events no older than `window`.
    pub fn events_since(&self, window: Duration) -> Vec<&ActivityEvent> {
        let cutoff = Utc::now() - window;
        self.events.iter().filter(|e| e.timestamp >= cutoff).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
