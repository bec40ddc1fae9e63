//! Input boundary checks.
//!
//! Everything typed at the menu passes through here before it reaches the
//! tracker or planner, which trust their inputs.

use crate::error::{GradusError, GradusResult};
use crate::grades::Grade;
use std::ops::RangeInclusive;

pub const LEVEL_RANGE: RangeInclusive<u8> = 1..=3;
pub const CREDIT_RANGE: RangeInclusive<u32> = 1..=24;

pub fn parse_level(input: &str) -> GradusResult<u8> {
    let message = || {
        GradusError::Validation(format!(
            "Level must be a whole number from {} to {}",
            LEVEL_RANGE.start(),
            LEVEL_RANGE.end()
        ))
    };
    let level: u8 = input.trim().parse().map_err(|_| message())?;
    if !LEVEL_RANGE.contains(&level) {
        return Err(message());
    }
    Ok(level)
}

pub fn parse_credits(input: &str) -> GradusResult<u32> {
    let message = || {
        GradusError::Validation(format!(
            "Credits must be a whole number from {} to {}",
            CREDIT_RANGE.start(),
            CREDIT_RANGE.end()
        ))
    };
    let credits: u32 = input.trim().parse().map_err(|_| message())?;
    if !CREDIT_RANGE.contains(&credits) {
        return Err(message());
    }
    Ok(credits)
}

/// Strict: E, M, A or N only. Unrecognised grades never enter through the menu.
pub fn parse_grade(input: &str) -> GradusResult<Grade> {
    Grade::parse_known(input)
        .ok_or_else(|| GradusError::Validation("Grade must be one of E, M, A or N".to_string()))
}

pub fn validate_title(input: &str) -> GradusResult<&str> {
    non_empty(input, "Standard title cannot be empty")
}

pub fn validate_interest(input: &str) -> GradusResult<&str> {
    non_empty(input, "Interest cannot be empty")
}

pub fn validate_username(input: &str) -> GradusResult<&str> {
    non_empty(input, "Username cannot be empty")
}

pub fn validate_password(password: &str, min_length: usize) -> GradusResult<()> {
    if password.chars().count() < min_length {
        return Err(GradusError::Validation(format!(
            "Password must be at least {} characters",
            min_length
        )));
    }
    Ok(())
}

fn non_empty<'a>(input: &'a str, message: &str) -> GradusResult<&'a str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GradusError::Validation(message.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert_eq!(parse_level("1"), Ok(1));
        assert_eq!(parse_level(" 3 "), Ok(3));
        assert!(parse_level("0").is_err());
        assert!(parse_level("4").is_err());
        assert!(parse_level("two").is_err());
        assert!(parse_level("-1").is_err());
    }

    #[test]
    fn test_credit_bounds() {
        assert_eq!(parse_credits("1"), Ok(1));
        assert_eq!(parse_credits("24"), Ok(24));
        assert!(parse_credits("0").is_err());
        assert!(parse_credits("25").is_err());
        assert!(parse_credits("4.5").is_err());
    }

    #[test]
    fn test_grade_is_strict() {
        assert_eq!(parse_grade("e"), Ok(Grade::E));
        assert_eq!(parse_grade("N"), Ok(Grade::N));
        match parse_grade("B") {
            Err(GradusError::Validation(msg)) => assert!(msg.contains("E, M, A or N")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_text_fields() {
        assert_eq!(validate_interest("  Math "), Ok("Math"));
        assert!(validate_interest("   ").is_err());
        assert!(validate_username("").is_err());
        assert!(validate_title("\t").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("abcd", 4).is_ok());
        assert!(validate_password("abc", 4).is_err());
        assert!(validate_password("ab", 2).is_ok());
    }
}
