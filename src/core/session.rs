// src/core/session.rs
use std::path::PathBuf;

use log::info;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::batch::BatchProcessor;
use crate::core::ports::{Confirmation, ReportSink};
use crate::export::ExportError;
use crate::models::BatchReport;

/// Split a comma separated list and trim every entry.
///
/// Empty entries are kept so they show up as invalid in the report.
pub fn parse_usernames(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.trim().to_string()).collect()
}

/// One submission: first pass, optional retry round, and the combined transcript.
pub struct Session<R = ThreadRng> {
    processor: BatchProcessor<R>,
    usernames: Vec<String>,
    first_pass: Option<BatchReport>,
    retry_pass: Option<BatchReport>,
    transcript: String,
}

impl Session<ThreadRng> {
    pub fn new() -> Self {
        Self::with_processor(BatchProcessor::new())
    }
}

impl Default for Session<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    pub fn with_processor(processor: BatchProcessor<R>) -> Self {
        Self {
            processor,
            usernames: Vec::new(),
            first_pass: None,
            retry_pass: None,
            transcript: String::new(),
        }
    }

    /// Start over with a new raw input and run the first pass.
    pub fn submit(&mut self, raw: &str) -> &BatchReport {
        self.usernames = parse_usernames(raw);
        self.retry_pass = None;
        self.transcript.clear();

        let report = self.processor.process(&self.usernames);
        self.transcript.push_str(&report.to_string());
        self.first_pass.insert(report)
    }

    /// Ask once whether to retry the names that failed. Does nothing before `submit`.
    pub fn offer_retry<C>(&mut self, confirmation: &mut C) -> Option<&BatchReport>
    where
        C: Confirmation + ?Sized,
    {
        if self.first_pass.is_none() || self.retry_pass.is_some() {
            return None;
        }

        let report = self.processor.retry(&self.usernames, confirmation)?;
        self.transcript.push_str(&report.to_string());
        Some(self.retry_pass.insert(report))
    }

    pub fn usernames(&self) -> &[String] {
        &self.usernames
    }

    pub fn first_pass(&self) -> Option<&BatchReport> {
        self.first_pass.as_ref()
    }

    pub fn retry_pass(&self) -> Option<&BatchReport> {
        self.retry_pass.as_ref()
    }

    /// Everything displayed so far, first pass then retry pass.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn save<S>(&self, sink: &mut S) -> Result<Option<PathBuf>, ExportError>
    where
        S: ReportSink + ?Sized,
    {
        let saved = sink.save(&self.transcript)?;
        match &saved {
            Some(path) => info!("Results saved to {}", path.display()),
            None => info!("Save cancelled, nothing written"),
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{DiscardSink, FixedPathSink};
    use crate::generators::PasswordGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;

    #[derive(Default)]
    struct MemorySink {
        saved: Vec<String>,
    }

    impl ReportSink for MemorySink {
        fn save(&mut self, report: &str) -> Result<Option<PathBuf>, ExportError> {
            self.saved.push(report.to_string());
            Ok(Some(PathBuf::from("memory")))
        }
    }

    struct CountingConfirmation {
        answer: bool,
        calls: usize,
    }

    impl Confirmation for CountingConfirmation {
        fn confirm(&mut self, _message: &str, _title: &str) -> bool {
            self.calls += 1;
            self.answer
        }
    }

    fn session() -> Session<StdRng> {
        let generator = PasswordGenerator::with_rng(StdRng::seed_from_u64(11));
        Session::with_processor(BatchProcessor::with_generator(generator))
    }

    #[test]
    fn test_parse_usernames_trims() {
        assert_eq!(
            parse_usernames(" ab , validUser1,Another_One ,x"),
            ["ab", "validUser1", "Another_One", "x"]
        );
        assert_eq!(parse_usernames(""), [""]);
        assert_eq!(parse_usernames("a,,b"), ["a", "", "b"]);
    }

    #[test]
    fn test_declined_retry_keeps_first_pass_only() {
        let mut session = session();
        let first = session.submit("ab,validUser1,Another_One,x").to_string();

        let mut confirmation = CountingConfirmation { answer: false, calls: 0 };
        assert!(session.offer_retry(&mut confirmation).is_none());
        assert_eq!(confirmation.calls, 1);
        assert_eq!(session.transcript(), first);
    }

    #[test]
    fn test_accepted_retry_appends_second_report() {
        let mut session = session();
        let first = session.submit("ab,validUser1,Another_One,x").to_string();

        let mut confirmation = CountingConfirmation { answer: true, calls: 0 };
        let second = session
            .offer_retry(&mut confirmation)
            .expect("retry accepted")
            .to_string();

        assert_eq!(session.transcript(), format!("{first}{second}"));
        assert!(second.starts_with("ab - Invalid"));
        assert!(second.ends_with("- Total Usernames: 2\n- Valid Usernames: 0\n- Invalid Usernames: 2\n\nInvalid Usernames: ab, x\n"));

        // Only one retry round per submission
        assert!(session.offer_retry(&mut confirmation).is_none());
        assert_eq!(confirmation.calls, 1);
    }

    #[test]
    fn test_retry_before_submit_is_noop() {
        let mut session = session();
        let mut confirmation = CountingConfirmation { answer: true, calls: 0 };
        assert!(session.offer_retry(&mut confirmation).is_none());
        assert_eq!(confirmation.calls, 0);
    }

    #[test]
    fn test_resubmit_clears_transcript() {
        let mut session = session();
        session.submit("ab");
        session.offer_retry(&mut true);
        let second = session.submit("validUser1").to_string();
        assert_eq!(session.transcript(), second);
        assert!(session.retry_pass().is_none());
        assert_eq!(session.usernames(), ["validUser1"]);
    }

    #[test]
    fn test_save_hands_over_transcript() {
        let mut session = session();
        session.submit("ab,validUser1");
        session.offer_retry(&mut true);

        let mut sink = MemorySink::default();
        assert!(session.save(&mut sink).unwrap().is_some());
        assert_eq!(sink.saved, [session.transcript().to_string()]);
    }

    #[test]
    fn test_saved_file_matches_display() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("UserDetails.txt");

        let mut session = session();
        session.submit("ab,validUser1,Another_One,x");
        session.offer_retry(&mut true);
        let displayed = session.transcript().to_string();

        let saved = session.save(&mut FixedPathSink::new(&path)).unwrap();
        assert_eq!(saved, Some(path.clone()));
        assert_eq!(fs::read_to_string(&path).unwrap(), displayed);
    }

    #[test]
    fn test_cancelled_save_is_not_an_error() {
        let mut session = session();
        session.submit("validUser1");
        assert_eq!(session.save(&mut DiscardSink).unwrap(), None);
    }
}
