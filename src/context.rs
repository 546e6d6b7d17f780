//! Context values threaded through a running test case.

use crate::{
    manager::Shared,
    record::{Location, Record, Severity},
    registry::CaseDesc,
    signal::UsageError,
};
use std::sync::Arc;

/// Read-only process-wide data exposed to suites, carrying the raw arguments
/// left over by the argument-parsing collaborator.
#[derive(Debug, Default)]
pub struct GlobalContext {
    arguments: Vec<String>,
}

impl GlobalContext {
    pub fn new(arguments: Vec<String>) -> Self {
        Self { arguments }
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

/// Context handle passed to a case body while it runs.
///
/// The assertion macros record failures through this handle, so a live run
/// context is guaranteed by construction on the main execution path.
pub struct Context<'a> {
    shared: &'a Arc<Shared>,
    global: &'a GlobalContext,
    suite: &'static str,
    case: &'static CaseDesc,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        shared: &'a Arc<Shared>,
        global: &'a GlobalContext,
        suite: &'static str,
        case: &'static CaseDesc,
    ) -> Self {
        Self {
            shared,
            global,
            suite,
            case,
        }
    }

    /// Name of the suite that owns the running case.
    pub fn suite(&self) -> &'static str {
        self.suite
    }

    /// Name of the running case.
    pub fn case(&self) -> &'static str {
        self.case.name
    }

    pub fn global(&self) -> &GlobalContext {
        self.global
    }

    /// A cloneable, sendable handle for recording results from worker
    /// threads spawned by the case body.
    pub fn recorder(&self) -> Recorder {
        Recorder {
            shared: Arc::clone(self.shared),
            suite: self.suite,
            case: self.case,
        }
    }

    #[doc(hidden)] // called by the assertion macros
    pub fn record_at(
        &mut self,
        severity: Severity,
        location: Location,
        function: &str,
        message: &str,
    ) {
        let function = function.rsplit("::").next().unwrap_or(function);
        let record = Record::new(severity, self.suite, self.case.name, location)
            .function(function)
            .message(message);
        self.shared.append(record);
    }
}

/// Records results on behalf of a case from any thread.
///
/// Appends are serialized by the aggregator; each record captures the
/// identifier of the thread that produced it. Recording after the run has
/// ended is a framework-usage error.
#[derive(Clone)]
pub struct Recorder {
    shared: Arc<Shared>,
    suite: &'static str,
    case: &'static CaseDesc,
}

impl Recorder {
    /// Append one record attributed to the owning case's declaration site.
    pub fn record(&self, severity: Severity, message: impl Into<String>) -> Result<(), UsageError> {
        let record = Record::new(severity, self.suite, self.case.name, self.case.location)
            .message(message);
        self.shared.add_result(record)
    }

    /// Record a `Fail` result when `condition` is false.
    pub fn check(&self, condition: bool, message: &str) -> Result<(), UsageError> {
        if condition {
            Ok(())
        } else {
            self.record(Severity::Fail, message)
        }
    }
}
