//! End-to-end run through the generated entry point: self-registered suites,
//! setup/teardown hooks and cross-thread recording, finishing with exit
//! status OK.

use spelt::{check, require, test_suite, warning, CaseResult, Context};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

static SETUP_RAN: AtomicBool = AtomicBool::new(false);
static TEARDOWN_RAN: AtomicBool = AtomicBool::new(false);

fn mark_setup() {
    SETUP_RAN.store(true, Ordering::SeqCst);
}

fn mark_teardown() {
    TEARDOWN_RAN.store(true, Ordering::SeqCst);
}

fn arithmetic(ctx: &mut Context<'_>) -> CaseResult {
    check!(ctx, 2 + 2 == 4);
    require!(ctx, 10 / 5 == 2);
    Ok(())
}

fn sees_setup(ctx: &mut Context<'_>) -> CaseResult {
    check!(ctx, SETUP_RAN.load(Ordering::SeqCst), "setup did not run first");
    Ok(())
}

fn worker_reports(ctx: &mut Context<'_>) -> CaseResult {
    let recorder = ctx.recorder();
    let worker = thread::spawn(move || {
        recorder.check(1 + 1 == 2, "worker arithmetic broke")?;
        recorder.record(
            spelt::Severity::Warning,
            "worker finished with nothing to report",
        )
    });
    worker.join().expect("worker panicked")?;
    Ok(())
}

fn warns_but_passes(ctx: &mut Context<'_>) -> CaseResult {
    warning!(ctx, "fixture data is stubbed");
    Ok(())
}

test_suite! {
    suite smoke {
        setup: mark_setup;
        teardown: mark_teardown;
        case arithmetic;
        case sees_setup;
        case worker_reports;
        case warns_but_passes;
    }
}

fn main() {
    let suites: Vec<_> = spelt::_harness_reexports::SUITES.iter().collect();
    let status = spelt::run_tests(&suites, std::env::args());

    assert!(TEARDOWN_RAN.load(Ordering::SeqCst), "teardown never ran");
    assert_eq!(status.code(), 0, "a passing run must exit with status 0");
}
