//! The result aggregator: suite registration, the run driver and reporting.

use crate::{
    cli::ExitStatus,
    context::GlobalContext,
    record::{Record, Severity, Summary},
    registry::{CaseDesc, SuiteDesc},
    reporter::Reporter,
    signal::unwind_message,
    suite::Suite,
};
use maybe_unwind::maybe_unwind;
use std::{
    panic::AssertUnwindSafe,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State shared between the manager, the per-case contexts and any recorder
/// handles handed to worker threads.
pub(crate) struct Shared {
    results: Mutex<Vec<Record>>,
    current: Mutex<Current>,
}

#[derive(Default)]
struct Current {
    suite: Option<&'static str>,
    case: Option<&'static CaseDesc>,
}

impl Shared {
    pub(crate) fn new() -> Self {
        Self {
            results: Mutex::new(Vec::new()),
            current: Mutex::new(Current::default()),
        }
    }

    /// Unchecked append used by the execution engine itself.
    pub(crate) fn append(&self, record: Record) {
        lock(&self.results).push(record);
    }

    /// Checked append for results arriving from outside the engine, such as
    /// recorder handles on worker threads.
    pub(crate) fn add_result(&self, record: Record) -> Result<(), crate::UsageError> {
        if lock(&self.current).suite.is_none() {
            return Err(crate::UsageError::new(
                "results may only be recorded while a suite is running",
            ));
        }
        self.append(record);
        Ok(())
    }

    pub(crate) fn set_current_suite(&self, suite: &'static str) {
        lock(&self.current).suite = Some(suite);
    }

    pub(crate) fn clear_current_suite(&self) {
        let mut current = lock(&self.current);
        current.suite = None;
        current.case = None;
    }

    pub(crate) fn set_current_case(&self, case: &'static CaseDesc) {
        lock(&self.current).case = Some(case);
    }

    pub(crate) fn clear_current_case(&self) {
        lock(&self.current).case = None;
    }

    pub(crate) fn current_suite(&self) -> Result<&'static str, crate::UsageError> {
        lock(&self.current)
            .suite
            .ok_or_else(|| crate::UsageError::new("no suite is currently running"))
    }

    pub(crate) fn current_case(&self) -> Result<&'static CaseDesc, crate::UsageError> {
        lock(&self.current)
            .case
            .ok_or_else(|| crate::UsageError::new("no case is currently running"))
    }
}

/// Owns the registered suites, drives their sequential execution and
/// collects every result record produced along the way.
///
/// One manager exists per run; the singleton-per-process contract of the
/// original design is kept by constructing it once in [`run_tests`].
///
/// [`run_tests`]: crate::run_tests
pub struct Manager {
    suites: Vec<Suite>,
    shared: Arc<Shared>,
    global: GlobalContext,
}

impl Manager {
    pub fn new(global: GlobalContext) -> Self {
        Self {
            suites: Vec::new(),
            shared: Arc::new(Shared::new()),
            global,
        }
    }

    /// Append a suite. Registration order is execution order.
    pub fn add_suite(&mut self, desc: &'static SuiteDesc) {
        self.suites.push(Suite::new(desc));
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    pub fn global(&self) -> &GlobalContext {
        &self.global
    }

    /// Thread-safe append to the result list; errors when no suite is
    /// currently running.
    pub fn add_result(&self, record: Record) -> Result<(), crate::UsageError> {
        self.shared.add_result(record)
    }

    /// The suite currently executing, if a run is in progress.
    pub fn current_suite(&self) -> Result<&'static str, crate::UsageError> {
        self.shared.current_suite()
    }

    /// The case currently executing, if one is.
    pub fn current_case(&self) -> Result<&'static str, crate::UsageError> {
        self.shared.current_case().map(|case| case.name)
    }

    /// Run every registered suite in order, then render the report.
    ///
    /// A fatal signal propagating out of a suite stops the iteration; the
    /// results collected up to that point are still reported. A panic that
    /// escapes a suite's hooks is recorded as one synthetic exception and
    /// also stops the run.
    pub fn run(&mut self, reporter: &dyn Reporter) -> ExitStatus {
        reporter.run_starting(&self.suites);

        for suite in &self.suites {
            self.shared.set_current_suite(suite.name());
            let result = maybe_unwind(AssertUnwindSafe(|| suite.run(&self.shared, &self.global)));
            self.shared.clear_current_suite();
            match result {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    log::error!("aborting run: {}", err);
                    break;
                }
                Err(unwind) => {
                    self.shared.append(
                        Record::new(
                            Severity::Exception,
                            suite.name(),
                            "(suite)",
                            suite.desc().location,
                        )
                        .message(unwind_message(&unwind)),
                    );
                    break;
                }
            }
        }

        self.report(reporter)
    }

    /// Render every collected record, in collection order, and derive the
    /// exit status from the summary.
    pub fn report(&self, reporter: &dyn Reporter) -> ExitStatus {
        let results = lock(&self.shared.results);
        let mut summary = Summary::default();
        for record in results.iter() {
            reporter.record(record);
            summary.append(record);
        }
        reporter.run_ended(&summary);

        if summary.is_passed() {
            ExitStatus::OK
        } else {
            ExitStatus::FAILED
        }
    }
}
