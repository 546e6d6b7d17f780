//! Control signals and failure values raised from case bodies.

use maybe_unwind::Unwind;
use std::{error, fmt};

/// A control signal propagated out of a case body through its `Result`.
#[derive(Debug)]
pub enum Signal {
    /// Terminates only the currently executing case; the suite continues
    /// with the next case.
    CaseAbort,
    /// A framework-usage error; terminates the entire run after the current
    /// case, preserving the results collected so far.
    FatalAbort(UsageError),
}

/// Misuse of the framework API, such as querying the run context while no
/// suite is executing.
#[derive(Debug)]
pub struct UsageError {
    message: String,
}

impl UsageError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl error::Error for UsageError {}

/// The value a case body returns when it does not complete normally.
#[derive(Debug)]
pub enum Failure {
    /// An explicit control signal from the assertion pipeline.
    Signal(Signal),
    /// Any other error value raised by the case body.
    Error(anyhow::Error),
}

/// Return type of every case body.
pub type CaseResult = Result<(), Failure>;

impl From<Signal> for Failure {
    fn from(signal: Signal) -> Self {
        Failure::Signal(signal)
    }
}

impl From<UsageError> for Failure {
    fn from(err: UsageError) -> Self {
        Failure::Signal(Signal::FatalAbort(err))
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Failure::Error(err)
    }
}

/// Extract the message to report for a panic that unwound out of test code.
///
/// The payload is inspected directly so that a string panic is always
/// reported verbatim; only genuinely non-string payloads fall back to the
/// catch-all wording.
pub(crate) fn unwind_message(unwind: &Unwind) -> String {
    let payload = unwind.payload();
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("Unhandled exception")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_becomes_fatal() {
        let failure = Failure::from(UsageError::new("no suite is running"));
        match failure {
            Failure::Signal(Signal::FatalAbort(err)) => {
                assert_eq!(err.to_string(), "no suite is running");
            }
            other => panic!("unexpected failure: {:?}", other),
        }
    }

    #[test]
    fn anyhow_error_is_not_a_signal() {
        let failure = Failure::from(anyhow::anyhow!("bad input"));
        assert!(matches!(failure, Failure::Error(..)));
    }
}
