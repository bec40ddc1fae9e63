//! Session Controller
//!
//! Owns the account registry, tracks which account (if any) is logged in,
//! and routes every menu action to that account's tracker, planner or to
//! Frost. One `Session` is created at startup and passed to the menu loop;
//! all state is dropped when it is.

use crate::account::Account;
use crate::activity::ActivityKind;
use crate::config::GradusConfig;
use crate::error::{GradusError, GradusResult};
use crate::frost::Frost;
use crate::grades::StandardRecord;
use crate::summary::Summary;
use crate::validation;
use log::{debug, info, warn};
use std::collections::HashMap;

pub struct Session {
    accounts: HashMap<String, Account>,
    current: Option<String>,
    frost: Frost,
    min_password_length: usize,
}

impl Session {
    pub fn new(frost: Frost, min_password_length: usize) -> Self {
        Self {
            accounts: HashMap::new(),
            current: None,
            frost,
            min_password_length,
        }
    }

    pub fn from_config(config: &GradusConfig) -> Self {
        Self::new(config.build_frost(), config.min_password_length)
    }

    // ============================================================
    // ACCOUNT LIFECYCLE
    // ============================================================

    /// Create an account. Does not log it in.
    pub fn register(&mut self, username: &str, password: &str) -> GradusResult<()> {
        let username = validation::validate_username(username)?;
        if self.accounts.contains_key(username) {
            warn!("Registration rejected: '{}' already exists", username);
            return Err(GradusError::DuplicateUsername(username.to_string()));
        }
        validation::validate_password(password, self.min_password_length)?;

        self.accounts
            .insert(username.to_string(), Account::new(username, password));
        info!("Registered account '{}'", username);
        Ok(())
    }

    pub fn login(&mut self, username: &str, password: &str) -> GradusResult<&Account> {
        if let Some(current) = &self.current {
            return Err(GradusError::AlreadyLoggedIn(current.clone()));
        }

        let username = username.trim();
        let account = match self.accounts.get_mut(username) {
            Some(account) if account.verify(password) => account,
            _ => {
                warn!("Failed login attempt for '{}'", username);
                return Err(GradusError::InvalidCredentials);
            }
        };

        account.record(ActivityKind::LoggedIn, "Logged in");
        info!("'{}' logged in", username);
        self.current = Some(username.to_string());
        Ok(account)
    }

    /// Returns the username that was logged out.
    pub fn logout(&mut self) -> GradusResult<String> {
        let username = self.current.take().ok_or(GradusError::NotLoggedIn)?;
        if let Some(account) = self.accounts.get_mut(&username) {
            account.record(ActivityKind::LoggedOut, "Logged out");
        }
        info!("'{}' logged out", username);
        Ok(username)
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Account> {
        self.current
            .as_deref()
            .and_then(|username| self.accounts.get(username))
    }

    pub fn account(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn frost(&self) -> &Frost {
        &self.frost
    }

    // ============================================================
    // LOGGED-IN ACTIONS
    // ============================================================

    /// Validate raw menu input and append the standard to the current account.
    /// Nothing is stored unless every field is valid.
    pub fn add_standard(
        &mut self,
        title: &str,
        level: &str,
        credits: &str,
        grade: &str,
    ) -> GradusResult<StandardRecord> {
        let account = self.current_account_mut()?;

        let title = validation::validate_title(title)?;
        let level = validation::parse_level(level)?;
        let credits = validation::parse_credits(credits)?;
        let grade = validation::parse_grade(grade)?;

        let record = StandardRecord::with_grade(title, level, credits, grade);
        account.tracker_mut().add_record(record.clone());
        account.record(
            ActivityKind::StandardAdded,
            &format!("Added standard '{}'", record.title()),
        );
        Ok(record)
    }

    pub fn add_interest(&mut self, interest: &str) -> GradusResult<()> {
        let account = self.current_account_mut()?;
        let interest = validation::validate_interest(interest)?;

        account.planner_mut().add_interest(interest);
        account.record(
            ActivityKind::InterestAdded,
            &format!("Added interest '{}'", interest.to_lowercase()),
        );
        Ok(())
    }

    pub fn recommend_careers(&mut self) -> GradusResult<Vec<String>> {
        let account = self.current_account_mut()?;
        let careers = account.planner_mut().recommend_careers();
        account.record(
            ActivityKind::CareersRecommended,
            &format!("{} career suggestion(s)", careers.len()),
        );
        Ok(careers)
    }

    pub fn summary(&mut self) -> GradusResult<Summary> {
        let account = self.current_account_mut()?;
        let summary = Summary::from_account(account);
        account.record(
            ActivityKind::CareersRecommended,
            &format!("{} career suggestion(s)", summary.careers.len()),
        );
        Ok(summary)
    }

    pub fn ask_frost(&mut self, question: &str) -> GradusResult<String> {
        let username = self.current.as_deref().ok_or(GradusError::NotLoggedIn)?;
        let account = self
            .accounts
            .get_mut(username)
            .ok_or(GradusError::NotLoggedIn)?;

        let answer = self.frost.answer(question);
        debug!("Frost answered '{}'", question);
        account.record(ActivityKind::QuestionAsked, question.trim());
        Ok(answer.to_string())
    }

    fn current_account_mut(&mut self) -> GradusResult<&mut Account> {
        let username = self.current.as_deref().ok_or(GradusError::NotLoggedIn)?;
        self.accounts
            .get_mut(username)
            .ok_or(GradusError::NotLoggedIn)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&GradusConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::Grade;

    fn logged_in(username: &str) -> Session {
        let mut session = Session::default();
        session.register(username, "pass1234").unwrap();
        session.login(username, "pass1234").unwrap();
        session
    }

    #[test]
    fn test_register_does_not_log_in() {
        let mut session = Session::default();
        session.register("tama", "kumara").unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(session.account_count(), 1);
    }

    #[test]
    fn test_short_password_rejected() {
        let mut session = Session::default();
        let err = session.register("tama", "abc").unwrap_err();
        assert!(matches!(err, GradusError::Validation(_)));
        assert_eq!(session.account_count(), 0);
    }

    #[test]
    fn test_min_password_length_is_configurable() {
        let mut session = Session::new(Frost::new(), 8);
        assert!(session.register("tama", "abcdefg").is_err());
        assert!(session.register("tama", "abcdefgh").is_ok());
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let mut session = Session::default();
        session.register("Tama", "kumara").unwrap();
        session.register("tama", "kumara").unwrap();
        assert_eq!(session.account_count(), 2);
    }

    #[test]
    fn test_login_failures() {
        let mut session = Session::default();
        session.register("tama", "kumara").unwrap();

        assert_eq!(
            session.login("nobody", "kumara").unwrap_err(),
            GradusError::InvalidCredentials
        );
        assert_eq!(
            session.login("tama", "wrong").unwrap_err(),
            GradusError::InvalidCredentials
        );
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_double_login_rejected() {
        let mut session = logged_in("tama");
        session.register("hemi", "pass1234").unwrap();
        assert_eq!(
            session.login("hemi", "pass1234").unwrap_err(),
            GradusError::AlreadyLoggedIn("tama".to_string())
        );
    }

    #[test]
    fn test_actions_require_login() {
        let mut session = Session::default();
        assert_eq!(
            session.add_standard("Math", "1", "4", "A").unwrap_err(),
            GradusError::NotLoggedIn
        );
        assert_eq!(session.add_interest("math").unwrap_err(), GradusError::NotLoggedIn);
        assert_eq!(session.summary().unwrap_err(), GradusError::NotLoggedIn);
        assert_eq!(session.ask_frost("law?").unwrap_err(), GradusError::NotLoggedIn);
        assert_eq!(session.logout().unwrap_err(), GradusError::NotLoggedIn);
    }

    #[test]
    fn test_invalid_standard_leaves_tracker_untouched() {
        let mut session = logged_in("tama");
        assert!(session.add_standard("Math 1.1", "4", "4", "A").is_err());
        assert!(session.add_standard("Math 1.1", "1", "25", "A").is_err());
        assert!(session.add_standard("Math 1.1", "1", "4", "B").is_err());
        assert!(session.add_standard("  ", "1", "4", "A").is_err());

        let account = session.current().unwrap();
        assert!(account.tracker().is_empty());
        assert!(account
            .activity()
            .events_of_kind(ActivityKind::StandardAdded)
            .is_empty());
    }

    #[test]
    fn test_valid_standard_is_stored() {
        let mut session = logged_in("tama");
        let record = session.add_standard(" Math 1.1 ", "1", "4", "m").unwrap();
        assert_eq!(record.title(), "Math 1.1");
        assert_eq!(record.grade(), &Grade::M);
        assert_eq!(session.current().unwrap().tracker().total_credits(Some(1)), 4);
    }

    #[test]
    fn test_data_is_scoped_per_account() {
        let mut session = logged_in("tama");
        session.add_standard("Math 1.1", "1", "4", "A").unwrap();
        session.add_interest("math").unwrap();
        session.logout().unwrap();

        session.register("hemi", "pass1234").unwrap();
        session.login("hemi", "pass1234").unwrap();
        let summary = session.summary().unwrap();
        assert_eq!(summary.total_credits, 0);
        assert!(summary.interests.is_empty());

        let tama = session.account("tama").unwrap();
        assert_eq!(tama.tracker().total_credits(None), 4);
    }

    #[test]
    fn test_logout_returns_username_and_records_activity() {
        let mut session = logged_in("tama");
        assert_eq!(session.logout().unwrap(), "tama");
        assert!(session.current().is_none());

        let account = session.account("tama").unwrap();
        let kinds: Vec<ActivityKind> = account.activity().events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ActivityKind::AccountCreated,
                ActivityKind::LoggedIn,
                ActivityKind::LoggedOut
            ]
        );
    }

    #[test]
    fn test_ask_frost_records_question() {
        let mut session = logged_in("tama");
        let answer = session.ask_frost("Tell me about architecture").unwrap();
        assert!(answer.starts_with("Architecture combines"));
        let account = session.current().unwrap();
        let asked = account.activity().events_of_kind(ActivityKind::QuestionAsked);
        assert_eq!(asked.len(), 1);
        assert_eq!(asked[0].description, "Tell me about architecture");
    }
}
