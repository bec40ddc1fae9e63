/// Menu choices and their help text for the Gradus console.
///
/// Each choice can be picked by number or by name ("2", "register").

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestCommand {
    Login,
    Register,
    Exit,
}

impl GuestCommand {
    pub const ALL: [GuestCommand; 3] = [GuestCommand::Login, GuestCommand::Register, GuestCommand::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            GuestCommand::Login => "Login",
            GuestCommand::Register => "Register",
            GuestCommand::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "login" => Some(GuestCommand::Login),
            "2" | "register" => Some(GuestCommand::Register),
            "3" | "exit" | "quit" | "q" => Some(GuestCommand::Exit),
            _ => None,
        }
    }

    /// (key, label) pairs in display order
    pub fn help_text() -> Vec<(String, &'static str)> {
        numbered(Self::ALL.iter().map(|c| c.label()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentCommand {
    AddStandard,
    AddInterest,
    ViewSummary,
    AskFrost,
    Logout,
}

impl StudentCommand {
    pub const ALL: [StudentCommand; 5] = [
        StudentCommand::AddStandard,
        StudentCommand::AddInterest,
        StudentCommand::ViewSummary,
        StudentCommand::AskFrost,
        StudentCommand::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudentCommand::AddStandard => "Add a standard",
            StudentCommand::AddInterest => "Add an interest",
            StudentCommand::ViewSummary => "View summary",
            StudentCommand::AskFrost => "Ask Frost",
            StudentCommand::Logout => "Logout",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "add-standard" | "standard" => Some(StudentCommand::AddStandard),
            "2" | "add-interest" | "interest" => Some(StudentCommand::AddInterest),
            "3" | "view-summary" | "summary" => Some(StudentCommand::ViewSummary),
            "4" | "ask-frost" | "frost" | "ask" => Some(StudentCommand::AskFrost),
            "5" | "logout" => Some(StudentCommand::Logout),
            _ => None,
        }
    }

    pub fn help_text() -> Vec<(String, &'static str)> {
        numbered(Self::ALL.iter().map(|c| c.label()))
    }
}

fn numbered<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, &'a str)> {
    labels
        .enumerate()
        .map(|(i, label)| ((i + 1).to_string(), label))
        .collect()
}
