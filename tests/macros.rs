use spelt::{
    check, test_suite, CaseResult, Context, GlobalContext, Manager, Record, Reporter, Severity,
    Suite, Summary,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

fn adds(ctx: &mut Context<'_>) -> CaseResult {
    check!(ctx, 1 + 1 == 2);
    Ok(())
}

fn multiplies(ctx: &mut Context<'_>) -> CaseResult {
    check!(ctx, 3 * 4 == 12);
    Ok(())
}

test_suite! {
    suite arithmetic {
        case adds;
        case multiplies;
    }
}

static TIDY_EVENTS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

fn tidy_setup() {
    TIDY_EVENTS.lock().unwrap().push("setup");
}

fn tidy_teardown() {
    TIDY_EVENTS.lock().unwrap().push("teardown");
}

fn tidy_case(_: &mut Context<'_>) -> CaseResult {
    TIDY_EVENTS.lock().unwrap().push("case");
    Ok(())
}

test_suite! {
    suite tidy {
        setup: tidy_setup;
        teardown: tidy_teardown;
        case tidy_case;
    }
}

fn registered(name: &str) -> &'static spelt::SuiteDesc {
    spelt::_harness_reexports::SUITES
        .iter()
        .find(|suite| suite.name == name)
        .unwrap_or_else(|| panic!("suite {} was not registered", name))
}

#[derive(Default)]
struct Collecting {
    lines: Mutex<Vec<String>>,
}

impl Reporter for Collecting {
    fn run_starting(&self, _: &[Suite]) {}

    fn record(&self, record: &Record) {
        self.lines.lock().unwrap().push(record.to_string());
    }

    fn run_ended(&self, _: &Summary) {}
}

#[test]
fn declared_suites_self_register() {
    let arithmetic = registered("arithmetic");
    let names: Vec<_> = arithmetic.cases.iter().map(|case| case.name).collect();
    assert_eq!(names, vec!["adds", "multiplies"]);
    assert!(arithmetic.setup.is_none());
    assert!(arithmetic.teardown.is_none());

    let tidy = registered("tidy");
    assert!(tidy.setup.is_some());
    assert!(tidy.teardown.is_some());
}

#[test]
fn declaration_sites_are_captured() {
    let arithmetic = registered("arithmetic");
    assert_eq!(arithmetic.location.file, file!());
    for case in arithmetic.cases {
        assert_eq!(case.location.file, file!());
    }
}

#[test]
fn declared_suite_runs_green() {
    let mut manager = Manager::new(GlobalContext::default());
    manager.add_suite(registered("arithmetic"));

    let reporter = Collecting::default();
    let status = manager.run(&reporter);
    assert_eq!(status.code(), 0);

    let lines = reporter.lines.lock().unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("OK arithmetic::adds at tests/macros.rs, line "));
    assert!(lines[1].starts_with("OK arithmetic::multiplies at tests/macros.rs, line "));
}

#[test]
fn hooks_bracket_the_declared_cases() {
    let mut manager = Manager::new(GlobalContext::default());
    manager.add_suite(registered("tidy"));

    let reporter = Collecting::default();
    let status = manager.run(&reporter);
    assert_eq!(status.code(), 0);

    let events = TIDY_EVENTS.lock().unwrap().clone();
    assert_eq!(events, vec!["setup", "case", "teardown"]);
}

static LISTED_RAN: AtomicBool = AtomicBool::new(false);

fn listed_case(_: &mut Context<'_>) -> CaseResult {
    LISTED_RAN.store(true, Ordering::SeqCst);
    Ok(())
}

test_suite! {
    suite listed {
        case listed_case;
    }
}

#[test]
fn list_mode_enumerates_without_running() {
    let status = spelt::run_tests(
        &[registered("listed")],
        vec!["test-bin".to_owned(), "--list".to_owned()],
    );
    assert_eq!(status.code(), 0);
    assert!(
        !LISTED_RAN.load(Ordering::SeqCst),
        "--list must not execute any case",
    );
}

#[test]
fn severity_text_matches_report_format() {
    // Spot check the fixed severity vocabulary used by the report.
    assert_eq!(Severity::Success.as_str(), "OK");
    assert_eq!(Severity::Exception.as_str(), "EXCEPTION");
}
