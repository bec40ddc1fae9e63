//! Scripted walkthrough of a sample student, for `gradus demo`.

use gradus_core::{GradusResult, Session, Summary};
use serde::Serialize;

pub const DEMO_USERNAME: &str = "demo";
const DEMO_PASSWORD: &str = "demo-pass";

pub const DEMO_STANDARDS: &[(&str, &str, &str, &str)] = &[
    ("Physics 2.4 - Mechanics", "2", "6", "E"),
    ("English 2.1 - Writing", "2", "4", "M"),
    ("Math 2.3 - Algebra", "2", "5", "A"),
];

pub const DEMO_INTERESTS: &[&str] = &["math", "physics"];

pub const DEMO_QUESTION: &str = "What do I need to study engineering?";

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub summary: Summary,
    pub question: String,
    pub answer: String,
}

/// Register and log in the demo student, fill in the sample data and ask
/// Frost one question. The session is left logged in.
pub fn run_demo(session: &mut Session) -> GradusResult<DemoReport> {
    session.register(DEMO_USERNAME, DEMO_PASSWORD)?;
    session.login(DEMO_USERNAME, DEMO_PASSWORD)?;

    for (title, level, credits, grade) in DEMO_STANDARDS {
        session.add_standard(title, level, credits, grade)?;
    }
    for interest in DEMO_INTERESTS {
        session.add_interest(interest)?;
    }

    let summary = session.summary()?;
    let answer = session.ask_frost(DEMO_QUESTION)?;

    Ok(DemoReport {
        summary,
        question: DEMO_QUESTION.to_string(),
        answer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_matches_sample_numbers() {
        let mut session = Session::default();
        let report = run_demo(&mut session).unwrap();

        assert_eq!(report.summary.total_credits, 15);
        assert_eq!(report.summary.careers, vec!["Engineer".to_string()]);
        assert!(report.answer.starts_with("Engineering requires"));
        assert!(session.is_logged_in());
    }

    #[test]
    fn test_demo_twice_in_one_session_fails_cleanly() {
        let mut session = Session::default();
        run_demo(&mut session).unwrap();
        session.logout().unwrap();
        assert!(run_demo(&mut session).is_err());
        assert_eq!(session.account_count(), 1);
    }
}
