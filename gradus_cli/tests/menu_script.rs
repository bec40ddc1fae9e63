/// Scripted sessions through the console menu

use gradus_cli::menu::run_menu;
use gradus_core::{GradusConfig, Session};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn run_script(session: &mut Session, lines: &[&str]) -> String {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut output: Vec<u8> = Vec::new();
    run_menu(session, Cursor::new(script), &mut output, false).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_student_session() {
    let mut session = Session::default();
    let text = run_script(
        &mut session,
        &[
            "2", "hana", "koru1", // register
            "1", "hana", "koru1", // login
            "1", "Physics 2.4", "2", "6", "E",
            "1", "English 2.1", "2", "4", "m",
            "1", "Math 2.3", "2", "5", "A",
            "2", "math",
            "2", "Physics",
            "3", // summary
            "4", "What do I need for ENGINEERING?",
            "5", // logout
            "3", // exit
        ],
    );

    assert!(text.contains("Account created. You can now log in."));
    assert!(text.contains("Welcome back, hana!"));
    assert!(text.contains("Logged in as hana"));
    assert!(text.contains("Added 'English 2.1' (4 credits at Level 2, grade M)."));
    assert!(text.contains("Total credits: 15"));
    assert!(text.contains("Credits by grade: E 6 | M 4 | A 5 | N 0"));
    assert!(text.contains("Interests: math, physics"));
    assert!(text.contains("  - Engineer"));
    assert!(text.contains("Frost says: Engineering requires strong performance"));
    assert!(text.contains("Logged out hana."));
    assert!(text.trim_end().ends_with("Goodbye!"));
    assert!(!session.is_logged_in());

    let account = session.account("hana").unwrap();
    assert_eq!(account.tracker().total_credits(None), 15);
}

#[test]
fn test_bad_input_changes_nothing() {
    let mut session = Session::default();
    let text = run_script(
        &mut session,
        &[
            "2", "hana", "abc", // password too short
            "2", "hana", "koru1",
            "2", "hana", "other", // duplicate
            "1", "hana", "wrong",
            "1", "hana", "koru1",
            "1", "Math 1.1", "4", "4", "A", // bad level
            "1", "Math 1.1", "1", "0", "A", // bad credits
            "1", "Math 1.1", "1", "4", "Z", // bad grade
            "2", "   ", // empty interest
            "7", // unknown option
        ],
    );

    assert!(text.contains("Password must be at least 4 characters"));
    assert!(text.contains("Username 'hana' is already taken"));
    assert!(text.contains("Invalid username or password"));
    assert!(text.contains("Level must be a whole number from 1 to 3"));
    assert!(text.contains("Credits must be a whole number from 1 to 24"));
    assert!(text.contains("Grade must be one of E, M, A or N"));
    assert!(text.contains("Interest cannot be empty"));
    assert!(text.contains("Invalid choice, please try again."));

    // Input ran out while logged in; the loop still ends cleanly.
    assert!(text.trim_end().ends_with("Goodbye!"));

    let account = session.current().unwrap();
    assert!(account.tracker().is_empty());
    assert!(account.planner().interests().is_empty());
    assert!(account.verify("koru1"));
}

#[test]
fn test_unknown_question_gets_fallback() {
    let mut session = Session::default();
    let text = run_script(
        &mut session,
        &["2", "hana", "koru1", "1", "hana", "koru1", "4", "I like pottery", "5", "3"],
    );
    assert!(text.contains(
        "Frost says: Frost doesn't know the answer to that yet. Try rephrasing your question!"
    ));
}

#[test]
fn test_config_file_drives_session() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "min_password_length: 6\nknowledge_base:\n  - topic: nursing\n    advice: Take Level 3 Biology.\n"
    )
    .unwrap();
    let config = GradusConfig::load(file.path()).unwrap();
    let mut session = Session::from_config(&config);

    let text = run_script(
        &mut session,
        &[
            "2", "hana", "koru1", // too short for this config
            "2", "hana", "koru123",
            "1", "hana", "koru123",
            "4", "Tell me about nursing",
            "4", "Tell me about engineering",
        ],
    );

    assert!(text.contains("Password must be at least 6 characters"));
    assert!(text.contains("Frost says: Take Level 3 Biology."));
    assert!(text.contains("Frost says: Frost doesn't know the answer"));
}
