//! Submission sink that writes accepted registrations to the log

use super::{Registration, SubmissionSink};
use anyhow::Result;

/// Logs each registration as a JSON event and keeps a running count
#[derive(Debug, Default)]
pub struct LogSink {
    recorded: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> usize {
        self.recorded
    }
}

impl SubmissionSink for LogSink {
    fn record(&mut self, registration: &Registration) -> Result<()> {
        let payload = serde_json::to_string(registration)?;
        tracing::info!(id = %registration.id, %payload, "Form submitted");
        self.recorded += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldValues;

    #[test]
    fn test_record_counts_registrations() {
        let mut sink = LogSink::new();
        let reg = Registration::from_values(&FieldValues::default());
        sink.record(&reg).unwrap();
        sink.record(&reg).unwrap();
        assert_eq!(sink.recorded(), 2);
    }
}
