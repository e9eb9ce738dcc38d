// src/batch/mod.rs
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::core::ports::Confirmation;
use crate::generators::{PasswordGenerator, StrengthScorer};
use crate::models::{BatchReport, BatchSummary, ReportEntry};
use crate::validators::UsernameValidator;

pub const RETRY_PROMPT: &str = "Do you want to retry invalid usernames?";
pub const RETRY_TITLE: &str = "Retry Option";

/// Runs validation, password generation and scoring over a list of usernames.
pub struct BatchProcessor<R = ThreadRng> {
    validator: UsernameValidator,
    generator: PasswordGenerator<R>,
    scorer: StrengthScorer,
}

impl BatchProcessor<ThreadRng> {
    pub fn new() -> Self {
        Self::with_generator(PasswordGenerator::new())
    }
}

impl Default for BatchProcessor<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BatchProcessor<R> {
    pub fn with_generator(generator: PasswordGenerator<R>) -> Self {
        Self {
            validator: UsernameValidator::new(),
            generator,
            scorer: StrengthScorer::new(),
        }
    }

    /// Process usernames in input order. Names are expected to be trimmed already.
    pub fn process<S: AsRef<str>>(&mut self, usernames: &[S]) -> BatchReport {
        let mut entries = Vec::with_capacity(usernames.len());
        let mut summary = BatchSummary {
            total: usernames.len(),
            ..BatchSummary::default()
        };

        for username in usernames {
            let username = username.as_ref();
            let result = self.validator.validate(username);

            let entry = match result.rejection {
                None => {
                    let password = self.generator.generate();
                    let strength = self.scorer.score(&password);
                    debug!("{} is valid, generated password rated {}", username, strength);
                    summary.valid_count += 1;
                    ReportEntry::Valid {
                        username: username.to_string(),
                        counts: result.counts,
                        password,
                        strength,
                    }
                }
                Some(reason) => {
                    debug!("{} is invalid: {}", username, reason);
                    summary.invalid_count += 1;
                    summary.invalid_names.push(username.to_string());
                    ReportEntry::Invalid {
                        username: username.to_string(),
                        reason,
                    }
                }
            };
            entries.push(entry);
        }

        info!(
            "Processed {} usernames: {} valid, {} invalid",
            summary.total, summary.valid_count, summary.invalid_count
        );

        BatchReport { entries, summary }
    }

    /// Offer a single retry round over the names in `original` that fail validation.
    ///
    /// The failing subset is recomputed rather than taken from an earlier report.
    /// Returns `None` when nothing failed or the retry was declined; the
    /// confirmation is not asked at all in the first case.
    pub fn retry<S, C>(&mut self, original: &[S], confirmation: &mut C) -> Option<BatchReport>
    where
        S: AsRef<str>,
        C: Confirmation + ?Sized,
    {
        let invalid: Vec<&str> = original
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| !self.validator.is_valid(name))
            .collect();

        if invalid.is_empty() {
            debug!("No invalid usernames, skipping retry");
            return None;
        }

        if !confirmation.confirm(RETRY_PROMPT, RETRY_TITLE) {
            info!("Retry of {} invalid usernames declined", invalid.len());
            return None;
        }

        info!("Retrying {} invalid usernames", invalid.len());
        Some(self.process(&invalid))
    }
}
