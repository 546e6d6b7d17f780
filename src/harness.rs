//! Self-registration of suites via link-time collection.
//!
//! Every `test_suite!` invocation contributes one [`SuiteDesc`] to a
//! distributed slice, so a binary picks up all suites linked into it without
//! an explicit registration list. The slice order is fixed at link time,
//! which keeps registration order stable across runs of the same binary.

use crate::registry::SuiteDesc;
use linkme::distributed_slice;

#[doc(hidden)]
#[distributed_slice]
pub static SUITES: [SuiteDesc] = [..];

#[doc(hidden)]
pub fn main() {
    let suites: Vec<&'static SuiteDesc> = SUITES.iter().collect();
    crate::runner::run_tests(&suites, std::env::args()).exit();
}

/// Generate the main function of a test binary.
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_harness_reexports::main()
        }
    };
}

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __hook {
    () => {
        ::core::option::Option::None
    };
    ($hook:path) => {
        ::core::option::Option::Some($hook as $crate::HookFn)
    };
}

/// Declare a suite and register it for execution.
///
/// The suite's cases are free functions with the [`CaseFn`](crate::CaseFn)
/// signature; `setup` and `teardown` lines are optional and, when present,
/// must appear in that order before the first case.
///
/// ```ignore
/// fn add(ctx: &mut spelt::Context<'_>) -> spelt::CaseResult {
///     spelt::check!(ctx, 1 + 1 == 2);
///     Ok(())
/// }
///
/// spelt::test_suite! {
///     suite arithmetic {
///         case add;
///     }
/// }
/// ```
#[macro_export]
macro_rules! test_suite {
    (
        suite $name:ident {
            $( setup: $setup:path; )?
            $( teardown: $teardown:path; )?
            $( case $case:ident; )+
        }
    ) => {
        // The registered static stays out of the declaring namespace.
        const _: () = {
            #[allow(non_upper_case_globals)]
            #[$crate::_harness_reexports::distributed_slice($crate::_harness_reexports::SUITES)]
            #[linkme(crate = $crate::_harness_reexports::linkme)]
            static $name: $crate::SuiteDesc = $crate::SuiteDesc {
                name: stringify!($name),
                location: $crate::__location!(),
                setup: $crate::__hook!($( $setup )?),
                teardown: $crate::__hook!($( $teardown )?),
                cases: &[
                    $(
                        $crate::CaseDesc {
                            name: stringify!($case),
                            location: $crate::__location!(),
                            body: $case,
                        },
                    )+
                ],
            };
        };
    };
}
