//! Suite execution: setup/teardown bracketing and per-case fault isolation.

use crate::{
    context::{Context, GlobalContext},
    manager::Shared,
    record::{Record, Severity},
    registry::{CaseDesc, CaseRegistry, HookFn, SuiteDesc},
    signal::{unwind_message, CaseResult, Failure, Signal, UsageError},
};
use maybe_unwind::{maybe_unwind, Unwind};
use std::{panic::AssertUnwindSafe, sync::Arc};

/// A registered suite together with its deduplicated case registry.
pub struct Suite {
    desc: &'static SuiteDesc,
    registry: CaseRegistry,
}

impl Suite {
    pub(crate) fn new(desc: &'static SuiteDesc) -> Self {
        let mut registry = CaseRegistry::default();
        for case in desc.cases {
            registry.register(case);
        }
        Self { desc, registry }
    }

    pub fn name(&self) -> &'static str {
        self.desc.name
    }

    pub(crate) fn desc(&self) -> &'static SuiteDesc {
        self.desc
    }

    /// The cases this suite will execute, in registration order.
    pub fn cases(&self) -> &[&'static CaseDesc] {
        self.registry.all()
    }

    /// Execute every registered case, bracketed by the optional setup and
    /// teardown hooks.
    ///
    /// Teardown runs exactly once after the last attempted case, even when a
    /// case aborts or a fatal signal cuts the suite short; only a panic in
    /// the setup hook itself skips it.
    pub(crate) fn run(
        &self,
        shared: &Arc<Shared>,
        global: &GlobalContext,
    ) -> Result<(), UsageError> {
        log::debug!("running suite {}", self.desc.name);

        if let Some(setup) = self.desc.setup {
            setup();
        }
        let _teardown = TeardownGuard {
            hook: self.desc.teardown,
        };

        for &case in self.registry.all() {
            log::trace!("running case {}::{}", self.desc.name, case.name);
            shared.set_current_case(case);
            let result = {
                let mut ctx = Context::new(shared, global, self.desc.name, case);
                maybe_unwind(AssertUnwindSafe(|| (case.body)(&mut ctx)))
            };
            let settled = self.settle(shared, case, result);
            shared.clear_current_case();
            settled?;
        }

        Ok(())
    }

    /// Translate the raw outcome of one case body into result records,
    /// propagating only fatal signals to the caller.
    fn settle(
        &self,
        shared: &Shared,
        case: &'static CaseDesc,
        result: Result<CaseResult, Unwind>,
    ) -> Result<(), UsageError> {
        let suite = self.desc.name;
        match result {
            Ok(Ok(())) => {
                shared.append(Record::new(Severity::Success, suite, case.name, case.location));
                Ok(())
            }
            // The assertion that raised the abort has already been recorded.
            Ok(Err(Failure::Signal(Signal::CaseAbort))) => Ok(()),
            Ok(Err(Failure::Signal(Signal::FatalAbort(err)))) => {
                shared.append(
                    Record::new(Severity::Error, suite, case.name, case.location)
                        .message(err.to_string()),
                );
                Err(err)
            }
            Ok(Err(Failure::Error(err))) => {
                shared.append(
                    Record::new(Severity::Exception, suite, case.name, case.location)
                        .message(format!("{:#}", err)),
                );
                Ok(())
            }
            Err(unwind) => {
                shared.append(
                    Record::new(Severity::Exception, suite, case.name, case.location)
                        .message(unwind_message(&unwind)),
                );
                Ok(())
            }
        }
    }
}

struct TeardownGuard {
    hook: Option<HookFn>,
}

impl Drop for TeardownGuard {
    fn drop(&mut self) {
        if let Some(teardown) = self.hook {
            teardown();
        }
    }
}
