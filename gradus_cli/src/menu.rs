//! Line-oriented menu loop.
//!
//! Reads one answer per line from any `BufRead` and writes prompts and
//! results to any `Write`, so the whole conversation can be scripted in
//! tests. End of input is treated like choosing Exit.

use crate::commands::{GuestCommand, StudentCommand};
use crate::report::render_summary;
use gradus_core::Session;
use log::debug;
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "Welcome to Gradus - Your NCEA Career Companion";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Prompt/response pair over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Show `label`, read one line. `None` means the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(trimmed.to_string()))
    }

    fn show_menu(&mut self, title: &str, options: &[(String, &'static str)]) -> io::Result<()> {
        self.say("")?;
        self.say(title)?;
        for (key, label) in options {
            self.say(&format!("  {}. {}", key, label))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Run menus until Exit or end of input.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: W,
    show_banner: bool,
) -> io::Result<()> {
    let mut console = Console::new(input, output);

    if show_banner {
        console.say(BANNER)?;
        console.say("Frost is ready to help with career questions!")?;
    }

    loop {
        let flow = if session.is_logged_in() {
            student_menu(session, &mut console)?
        } else {
            guest_menu(session, &mut console)?
        };
        if flow == Flow::Exit {
            break;
        }
    }

    console.say("Goodbye!")
}

// ============================================================
// GUEST MENU
// ============================================================

fn guest_menu<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.show_menu("Main menu", &GuestCommand::help_text())?;
    let Some(choice) = console.prompt("Choose an option")? else {
        return Ok(Flow::Exit);
    };

    let Some(command) = GuestCommand::parse(&choice) else {
        console.say("Invalid choice, please try again.")?;
        return Ok(Flow::Continue);
    };
    debug!("Guest command: {:?}", command);

    match command {
        GuestCommand::Login => {
            let Some(username) = console.prompt("Username")? else {
                return Ok(Flow::Exit);
            };
            let Some(password) = console.prompt("Password")? else {
                return Ok(Flow::Exit);
            };
            match session.login(&username, &password) {
                Ok(account) => {
                    let message = format!("Welcome back, {}!", account.username());
                    console.say(&message)?;
                }
                Err(e) => console.say(&e.to_string())?,
            }
        }
        GuestCommand::Register => {
            let Some(username) = console.prompt("Choose a username")? else {
                return Ok(Flow::Exit);
            };
            let Some(password) = console.prompt("Choose a password")? else {
                return Ok(Flow::Exit);
            };
            match session.register(&username, &password) {
                Ok(()) => console.say("Account created. You can now log in.")?,
                Err(e) => console.say(&e.to_string())?,
            }
        }
        GuestCommand::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

// ============================================================
// STUDENT MENU
// ============================================================

fn student_menu<R: BufRead, W: Write>(
    session: &mut Session,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let title = match session.current() {
        Some(account) => format!("Logged in as {}", account.username()),
        None => "Student menu".to_string(),
    };
    console.show_menu(&title, &StudentCommand::help_text())?;
    let Some(choice) = console.prompt("Choose an option")? else {
        return Ok(Flow::Exit);
    };

    let Some(command) = StudentCommand::parse(&choice) else {
        console.say("Invalid choice, please try again.")?;
        return Ok(Flow::Continue);
    };
    debug!("Student command: {:?}", command);

    match command {
        StudentCommand::AddStandard => {
            let mut answers = Vec::with_capacity(4);
            for label in ["Standard title", "Level (1-3)", "Credits (1-24)", "Grade (E/M/A/N)"] {
                match console.prompt(label)? {
                    Some(answer) => answers.push(answer),
                    None => return Ok(Flow::Exit),
                }
            }
            match session.add_standard(&answers[0], &answers[1], &answers[2], &answers[3]) {
                Ok(record) => console.say(&format!(
                    "Added '{}' ({} credits at Level {}, grade {}).",
                    record.title(),
                    record.credits(),
                    record.level(),
                    record.grade()
                ))?,
                Err(e) => console.say(&e.to_string())?,
            }
        }
        StudentCommand::AddInterest => {
            let Some(interest) = console.prompt("Interest (e.g. math, biology, history)")? else {
                return Ok(Flow::Exit);
            };
            match session.add_interest(&interest) {
                Ok(()) => console.say("Interest added.")?,
                Err(e) => console.say(&e.to_string())?,
            }
        }
        StudentCommand::ViewSummary => match session.summary() {
            Ok(summary) => console.say(&render_summary(&summary))?,
            Err(e) => console.say(&e.to_string())?,
        },
        StudentCommand::AskFrost => {
            let Some(question) = console.prompt("Ask Frost a question")? else {
                return Ok(Flow::Exit);
            };
            match session.ask_frost(&question) {
                Ok(answer) => console.say(&format!("Frost says: {}", answer))?,
                Err(e) => console.say(&e.to_string())?,
            }
        }
        StudentCommand::Logout => match session.logout() {
            Ok(username) => console.say(&format!("Logged out {}.", username))?,
            Err(e) => console.say(&e.to_string())?,
        },
    }

    Ok(Flow::Continue)
}
