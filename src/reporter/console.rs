use crate::{
    record::{Record, Severity, Summary},
    reporter::Reporter,
    suite::Suite,
};
use std::{
    fmt,
    io::{self, Write as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Fail | Severity::Error | Severity::Exception => Color::Red,
        Severity::Warning => Color::Yellow,
    }
}

/// Renders one line per record to standard output.
pub struct ConsoleReporter {
    stream: StandardStream,
}

impl ConsoleReporter {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stdout(choice),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn run_starting(&self, suites: &[Suite]) {
        let suffix = match suites.len() {
            1 => "",
            _ => "s",
        };
        let mut w = self.stream.lock();
        let _ = writeln!(w, "running {} suite{}", suites.len(), suffix);
    }

    fn record(&self, record: &Record) {
        let mut w = self.stream.lock();
        let severity = record.severity();
        let _ = colored(severity).fg(severity_color(severity)).fmt_colored(&mut w);
        let _ = writeln!(w, " {}", record.details());
    }

    fn run_ended(&self, summary: &Summary) {
        let mut w = self.stream.lock();
        let status = if summary.is_passed() {
            colored("ok").fg(Color::Green)
        } else {
            colored("FAILED").fg(Color::Red)
        };
        let _ = writeln!(w);
        let _ = write!(w, "test result: ");
        let _ = status.fmt_colored(&mut w);
        let _ = writeln!(
            w,
            ". {ok} ok; {failed} failed; {errors} errors; {exceptions} exceptions; {warnings} warnings",
            ok = summary.success,
            failed = summary.fail,
            errors = summary.error,
            exceptions = summary.exception,
            warnings = summary.warning,
        );
    }
}
