/// Errors surfaced to the person at the keyboard. None of them are fatal;
/// the menu prints the message and returns to where it was.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GradusError {
    #[error("{0}")]
    Validation(String),

    #[error("Username '{0}' is already taken")]
    DuplicateUsername(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("You need to log in first")]
    NotLoggedIn,

    #[error("'{0}' is already logged in. Log out first")]
    AlreadyLoggedIn(String),
}

pub type GradusResult<T> = Result<T, GradusError>;
