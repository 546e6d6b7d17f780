//! The result model: one `Record` per collected outcome.

use std::{
    fmt,
    thread::{self, ThreadId},
};

/// Classification of a recorded outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The case completed without raising.
    Success,
    /// A non-fatal or case-fatal assertion was false.
    Fail,
    /// A framework-usage error was raised during case execution.
    Error,
    /// The case body returned an error value or panicked.
    Exception,
    /// Advisory only; never affects the exit status.
    Warning,
}

impl Severity {
    /// The text used when rendering a report line.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "OK",
            Severity::Fail => "FAIL",
            Severity::Error => "ERROR",
            Severity::Exception => "EXCEPTION",
            Severity::Warning => "WARNING",
        }
    }

    /// Whether a record of this severity fails the run.
    pub fn is_failure(self) -> bool {
        matches!(self, Severity::Fail | Severity::Error | Severity::Exception)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source position attached to a declaration or an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, line {}", self.file, self.line)
    }
}

/// The outcome of one executed case, or of one assertion within it.
///
/// Immutable once constructed. The identifier of the constructing thread is
/// captured so that failures reported from worker threads spawned by a test
/// body can be attributed after the fact.
#[derive(Debug, Clone)]
pub struct Record {
    severity: Severity,
    location: Location,
    suite: &'static str,
    case: &'static str,
    function: Option<String>,
    message: Option<String>,
    thread: ThreadId,
}

impl Record {
    /// Create a record attributed to `suite::case`, captured on the calling thread.
    pub fn new(
        severity: Severity,
        suite: &'static str,
        case: &'static str,
        location: Location,
    ) -> Self {
        Self {
            severity,
            location,
            suite,
            case,
            function: None,
            message: None,
            thread: thread::current().id(),
        }
    }

    /// Specify the name of the function that produced the record.
    pub fn function(self, function: impl Into<String>) -> Self {
        Self {
            function: Some(function.into()),
            ..self
        }
    }

    /// Specify the message carried by the record.
    pub fn message(self, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..self
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn suite(&self) -> &'static str {
        self.suite
    }

    pub fn case(&self) -> &'static str {
        self.case
    }

    pub fn function_name(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn thread(&self) -> ThreadId {
        self.thread
    }

    /// Everything after the severity column of the report line.
    pub fn details(&self) -> impl fmt::Display + '_ {
        Details(self)
    }
}

struct Details<'a>(&'a Record);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.0.suite, self.0.case)?;
        if let Some(ref function) = self.0.function {
            write!(f, ", {}()", function)?;
        }
        write!(f, " at {}", self.0.location)?;
        if let Some(ref message) = self.0.message {
            write!(f, " - {}", message)?;
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity, self.details())
    }
}

/// Per-severity tallies over the collected records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub success: usize,
    pub fail: usize,
    pub error: usize,
    pub exception: usize,
    pub warning: usize,
}

impl Summary {
    pub fn append(&mut self, record: &Record) {
        match record.severity() {
            Severity::Success => self.success += 1,
            Severity::Fail => self.fail += 1,
            Severity::Error => self.error += 1,
            Severity::Exception => self.exception += 1,
            Severity::Warning => self.warning += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.fail + self.error + self.exception + self.warning
    }

    pub fn is_passed(&self) -> bool {
        self.fail == 0 && self.error == 0 && self.exception == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATION: Location = Location {
        file: "tests/arith.rs",
        line: 42,
    };

    #[test]
    fn severity_text() {
        assert_eq!(Severity::Success.as_str(), "OK");
        assert_eq!(Severity::Fail.as_str(), "FAIL");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert_eq!(Severity::Exception.as_str(), "EXCEPTION");
        assert_eq!(Severity::Warning.as_str(), "WARNING");
    }

    #[test]
    fn severity_failure_policy() {
        assert!(!Severity::Success.is_failure());
        assert!(Severity::Fail.is_failure());
        assert!(Severity::Error.is_failure());
        assert!(Severity::Exception.is_failure());
        assert!(!Severity::Warning.is_failure());
    }

    #[test]
    fn report_line_minimal() {
        let record = Record::new(Severity::Success, "arith", "add", LOCATION);
        assert_eq!(record.to_string(), "OK arith::add at tests/arith.rs, line 42");
    }

    #[test]
    fn report_line_full() {
        let record = Record::new(Severity::Fail, "arith", "add", LOCATION)
            .function("add")
            .message("check failed: 1 + 1 == 3");
        assert_eq!(
            record.to_string(),
            "FAIL arith::add, add() at tests/arith.rs, line 42 - check failed: 1 + 1 == 3"
        );
    }

    #[test]
    fn summary_counts_and_exit_policy() {
        let mut summary = Summary::default();
        summary.append(&Record::new(Severity::Success, "s", "a", LOCATION));
        summary.append(&Record::new(Severity::Warning, "s", "b", LOCATION));
        assert_eq!(summary.total(), 2);
        assert!(summary.is_passed());

        summary.append(&Record::new(Severity::Fail, "s", "c", LOCATION));
        assert!(!summary.is_passed());
    }

    #[test]
    fn captures_constructing_thread() {
        let record = Record::new(Severity::Success, "s", "a", LOCATION);
        assert_eq!(record.thread(), std::thread::current().id());

        let other = std::thread::spawn(|| Record::new(Severity::Fail, "s", "a", LOCATION))
            .join()
            .unwrap();
        assert_ne!(other.thread(), std::thread::current().id());
    }
}
