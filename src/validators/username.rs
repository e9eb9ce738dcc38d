// src/validators/username.rs
use crate::models::{CharClass, CharacterCounts, Rejection, ValidationResult};

pub const MIN_USERNAME_LENGTH: usize = 5;
pub const MAX_USERNAME_LENGTH: usize = 15;

/// Checks usernames against the fixed rule set.
///
/// Rules run in order and the first failure wins:
/// - length between 5 and 15 UTF-16 code units inclusive
/// - starts with an ASCII letter
/// - only ASCII letters, digits and underscores
///
/// A username passing all three gets its characters counted per class.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsernameValidator;

impl UsernameValidator {
    pub fn new() -> Self {
        UsernameValidator
    }

    pub fn validate(&self, username: &str) -> ValidationResult {
        // UTF-16 code units, so a character outside the BMP counts twice
        let length = username.encode_utf16().count();
        if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
            return ValidationResult::invalid(Rejection::Length);
        }

        if !username.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return ValidationResult::invalid(Rejection::LeadingCharacter);
        }

        let mut counts = CharacterCounts::default();
        for c in username.chars() {
            match classify(c) {
                Some(class) => counts.increment(class),
                None => return ValidationResult::invalid(Rejection::Charset),
            }
        }

        ValidationResult::valid(counts)
    }

    pub fn is_valid(&self, username: &str) -> bool {
        self.validate(username).is_valid
    }
}

fn classify(c: char) -> Option<CharClass> {
    match c {
        'A'..='Z' => Some(CharClass::Uppercase),
        'a'..='z' => Some(CharClass::Lowercase),
        '0'..='9' => Some(CharClass::Digits),
        '_' => Some(CharClass::Underscores),
        _ => None,
    }
}
