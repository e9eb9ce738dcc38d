// src/models.rs
use std::fmt;
use serde::{Serialize, Serializer};

/// Character classes a valid username is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Underscores,
}

// Per-class character counts, all zero unless the username is valid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CharacterCounts {
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub underscores: usize,
}

impl CharacterCounts {
    pub fn increment(&mut self, class: CharClass) {
        match class {
            CharClass::Uppercase => self.uppercase += 1,
            CharClass::Lowercase => self.lowercase += 1,
            CharClass::Digits => self.digits += 1,
            CharClass::Underscores => self.underscores += 1,
        }
    }

    /// Uppercase and lowercase combined.
    pub fn letters(&self) -> usize {
        self.uppercase + self.lowercase
    }

    pub fn total(&self) -> usize {
        self.letters() + self.digits + self.underscores
    }
}

/// Why a username was rejected. The display text is the reason shown in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Length,
    LeadingCharacter,
    Charset,
}

impl Rejection {
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::Length => "Username length must be between 5 and 15.",
            Rejection::LeadingCharacter => "Username must start with a letter.",
            Rejection::Charset => "Username can only contain letters, numbers, and underscores.",
        }
    }
}

// Serialized as the reason text so JSON output matches the report
impl Serialize for Rejection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub rejection: Option<Rejection>,
    pub counts: CharacterCounts,
}

impl ValidationResult {
    pub fn valid(counts: CharacterCounts) -> Self {
        Self {
            is_valid: true,
            rejection: None,
            counts,
        }
    }

    pub fn invalid(rejection: Rejection) -> Self {
        Self {
            is_valid: false,
            rejection: Some(rejection),
            counts: CharacterCounts::default(),
        }
    }

    /// "Valid" or the rejection message.
    pub fn reason(&self) -> &'static str {
        self.rejection.map_or("Valid", |r| r.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

// One username's line in a batch report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ReportEntry {
    Valid {
        username: String,
        counts: CharacterCounts,
        password: String,
        strength: StrengthLabel,
    },
    Invalid {
        username: String,
        reason: Rejection,
    },
}

impl ReportEntry {
    pub fn username(&self) -> &str {
        match self {
            ReportEntry::Valid { username, .. } | ReportEntry::Invalid { username, .. } => username,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ReportEntry::Valid { .. })
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Valid { username, counts, password, strength } => {
                writeln!(f, "{} - Valid", username)?;
                writeln!(
                    f,
                    "  Letters: {} (Uppercase: {}, Lowercase: {}), Digits: {}, Underscores: {}",
                    counts.letters(),
                    counts.uppercase,
                    counts.lowercase,
                    counts.digits,
                    counts.underscores
                )?;
                writeln!(f, "  Generated Password: {} (Strength: {})", password, strength)?;
                writeln!(f)
            }
            ReportEntry::Invalid { username, reason } => {
                writeln!(f, "{} - Invalid ({})", username, reason)?;
                writeln!(f)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub invalid_names: Vec<String>,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "- Total Usernames: {}", self.total)?;
        writeln!(f, "- Valid Usernames: {}", self.valid_count)?;
        writeln!(f, "- Invalid Usernames: {}", self.invalid_count)?;
        writeln!(f)?;
        if !self.invalid_names.is_empty() {
            writeln!(f, "Invalid Usernames: {}", self.invalid_names.join(", "))?;
        }
        Ok(())
    }
}

/// Result of one pass over a list of usernames. `Display` renders the report text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub entries: Vec<ReportEntry>,
    pub summary: BatchSummary,
}

impl BatchReport {
    pub fn valid_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_valid())
            .map(ReportEntry::username)
            .collect()
    }

    pub fn invalid_names(&self) -> &[String] {
        &self.summary.invalid_names
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        write!(f, "{}", self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_letters_and_total() {
        let counts = CharacterCounts { uppercase: 2, lowercase: 5, digits: 3, underscores: 1 };
        assert_eq!(counts.letters(), 7);
        assert_eq!(counts.total(), 11);
    }

    #[test]
    fn test_invalid_entry_serializes_reason_text() {
        let entry = ReportEntry::Invalid {
            username: "ab".to_string(),
            reason: Rejection::Length,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["reason"], "Username length must be between 5 and 15.");
        assert_eq!(
            serde_json::to_value(ValidationResult::invalid(Rejection::Charset)).unwrap()["rejection"],
            "Username can only contain letters, numbers, and underscores."
        );
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(ValidationResult::valid(CharacterCounts::default()).reason(), "Valid");
        assert_eq!(
            ValidationResult::invalid(Rejection::Length).reason(),
            "Username length must be between 5 and 15."
        );
    }

    #[test]
    fn test_valid_entry_format() {
        let entry = ReportEntry::Valid {
            username: "validUser1".to_string(),
            counts: CharacterCounts { uppercase: 1, lowercase: 8, digits: 1, underscores: 0 },
            password: "Ab3!Ab3!Ab3!".to_string(),
            strength: StrengthLabel::Strong,
        };
        assert_eq!(
            entry.to_string(),
            "validUser1 - Valid\n  Letters: 9 (Uppercase: 1, Lowercase: 8), Digits: 1, Underscores: 0\n  Generated Password: Ab3!Ab3!Ab3! (Strength: Strong)\n\n"
        );
    }

    #[test]
    fn test_summary_omits_empty_invalid_list() {
        let summary = BatchSummary { total: 1, valid_count: 1, invalid_count: 0, invalid_names: vec![] };
        assert_eq!(
            summary.to_string(),
            "Summary:\n- Total Usernames: 1\n- Valid Usernames: 1\n- Invalid Usernames: 0\n\n"
        );
    }

    #[test]
    fn test_summary_lists_invalid_names() {
        let summary = BatchSummary {
            total: 2,
            valid_count: 0,
            invalid_count: 2,
            invalid_names: vec!["ab".to_string(), "x".to_string()],
        };
        assert!(summary.to_string().ends_with("\nInvalid Usernames: ab, x\n"));
    }
}
