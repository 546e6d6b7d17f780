//! Output collaborators receiving the collected results.

mod console;
mod log;

pub use self::{console::ConsoleReporter, log::LogReporter};

use crate::{
    record::{Record, Summary},
    suite::Suite,
};

/// The sink the aggregator renders a run into.
pub trait Reporter {
    fn run_starting(&self, suites: &[Suite]);

    /// Called once per collected record, in collection order.
    fn record(&self, record: &Record);

    fn run_ended(&self, summary: &Summary);
}

macro_rules! impl_reporter_body {
    () => {
        fn run_starting(&self, suites: &[Suite]) {
            (**self).run_starting(suites)
        }

        fn record(&self, record: &Record) {
            (**self).record(record)
        }

        fn run_ended(&self, summary: &Summary) {
            (**self).run_ended(summary)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::rc::Rc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}
