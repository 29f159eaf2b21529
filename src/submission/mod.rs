//! Submission module: the record handed off after a successful submit

mod log_sink;
mod record;
mod traits;

pub use log_sink::LogSink;
pub use record::Registration;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
