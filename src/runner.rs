//! The run entry point shared by generated and hand-written main functions.

use crate::{
    cli::{ExitStatus, Parser},
    context::GlobalContext,
    manager::Manager,
    registry::SuiteDesc,
    reporter::ConsoleReporter,
};
use maybe_unwind::capture_panic_info;
use std::{panic, sync::Once};

pub(crate) fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !capture_panic_info(info) {
                prev_hook(info);
            }
        }));
    });
}

/// Run the given suites, in order, and return the exit status of the run.
///
/// `args` are the raw process arguments (the first entry is taken to be the
/// program name); unrecognized arguments end up in the global context.
pub fn run_tests(
    suites: &[&'static SuiteDesc],
    args: impl IntoIterator<Item = String>,
) -> ExitStatus {
    let parser = Parser::new(args);
    let args = match parser.parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            return ExitStatus::FAILED;
        }
    };

    if args.show_help {
        parser.print_usage();
        return ExitStatus::OK;
    }

    install_panic_hook();

    let mut manager = Manager::new(GlobalContext::new(args.arguments));
    for &suite in suites {
        manager.add_suite(suite);
    }

    if args.list {
        let mut num_cases = 0;
        for suite in manager.suites() {
            for case in suite.cases() {
                println!("{}::{}: test", suite.name(), case.name);
                num_cases += 1;
            }
        }

        fn plural_suffix(n: usize) -> &'static str {
            match n {
                1 => "",
                _ => "s",
            }
        }

        if num_cases != 0 {
            println!();
        }
        println!("{} test{}", num_cases, plural_suffix(num_cases));

        return ExitStatus::OK;
    }

    let reporter = ConsoleReporter::new(args.color.into());
    manager.run(&reporter)
}
