// src/generators/strength.rs
use crate::models::StrengthLabel;

use super::password::SYMBOLS;

/// Rates a password with a five point checklist: length of at least 12,
/// and at least one uppercase, lowercase, digit and `!@#$%^&*` symbol.
#[derive(Debug, Default, Clone, Copy)]
pub struct StrengthScorer;

impl StrengthScorer {
    pub fn new() -> Self {
        StrengthScorer
    }

    pub fn points(&self, password: &str) -> u8 {
        let checks = [
            password.chars().count() >= 12,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.bytes().any(|b| SYMBOLS.contains(&b)),
        ];
        checks.iter().filter(|&&passed| passed).count() as u8
    }

    pub fn score(&self, password: &str) -> StrengthLabel {
        match self.points(password) {
            4.. => StrengthLabel::Strong,
            3 => StrengthLabel::Medium,
            _ => StrengthLabel::Weak,
        }
    }
}
