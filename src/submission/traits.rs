//! Trait abstraction for submission handling to enable mocking in tests

use super::Registration;
use anyhow::Result;

/// Receives every registration that passed validation.
///
/// Submission is purely local: implementations must not block the UI thread.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Record an accepted registration
    fn record(&mut self, registration: &Registration) -> Result<()>;
}
