/*!
A lightweight unit testing framework with self-registering test suites.

Suites and their cases are declared with [`test_suite!`] and discovered
automatically at link time; no registration list has to be maintained.
Suites run sequentially, cases run in declaration order, and every outcome
is collected as an immutable [`Record`] that the final report renders one
line at a time.

Failures come in two tiers: [`check!`] records a failure and lets the case
continue, while [`require!`] records it and aborts only the offending case.
Result recording is thread-safe, so a case body is free to spawn its own
worker threads and report through a [`Recorder`] handle.
*/

#![forbid(clippy::unimplemented, clippy::todo)]

mod cli;
mod context;
mod macros;
mod manager;
mod record;
mod registry;
mod reporter;
mod runner;
mod signal;
mod suite;

#[cfg(feature = "harness")]
mod harness;

pub use crate::{
    cli::ExitStatus,
    context::{Context, GlobalContext, Recorder},
    manager::Manager,
    record::{Location, Record, Severity, Summary},
    registry::{CaseDesc, CaseFn, CaseRegistry, HookFn, SuiteDesc},
    reporter::{ConsoleReporter, LogReporter, Reporter},
    runner::run_tests,
    signal::{CaseResult, Failure, Signal, UsageError},
    suite::Suite,
};

#[cfg(feature = "harness")]
#[doc(hidden)]
pub mod _harness_reexports {
    pub use crate::harness::{main, SUITES};
    pub use linkme::{self, distributed_slice};
}
