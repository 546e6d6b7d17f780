use crate::{
    record::{Record, Severity, Summary},
    reporter::Reporter,
    suite::Suite,
};

/// Emits the report through the `log` facade instead of standard output.
#[derive(Debug, Clone)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn run_starting(&self, suites: &[Suite]) {
        let suffix = match suites.len() {
            1 => "",
            _ => "s",
        };
        log::info!("running {} suite{}", suites.len(), suffix);
    }

    fn record(&self, record: &Record) {
        let severity = record.severity();
        if severity.is_failure() {
            log::error!("{}", record);
        } else if severity == Severity::Warning {
            log::warn!("{}", record);
        } else {
            log::info!("{}", record);
        }
    }

    fn run_ended(&self, summary: &Summary) {
        if summary.is_passed() {
            log::info!("test status: ok");
        } else {
            log::error!("test status: FAILED");
        }
    }
}
