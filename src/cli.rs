//! Argument-parsing collaborator and the process exit status.
//!
//! The engine itself never inspects the command line; this module turns the
//! raw arguments into a configuration the run entry point consumes, leaving
//! everything it does not recognize in the global context.

use getopts::Options;
use std::{path::Path, str::FromStr};
use termcolor::ColorChoice;

#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) show_help: bool,
    pub(crate) list: bool,
    pub(crate) color: ColorConfig,
    pub(crate) arguments: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum ColorConfig {
    Auto,
    Always,
    Never,
}

impl FromStr for ColorConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => Err(anyhow::anyhow!(
                "argument for --color must be auto, always, or never (was {})",
                v
            )),
        }
    }
}

impl From<ColorConfig> for ColorChoice {
    fn from(config: ColorConfig) -> Self {
        match config {
            ColorConfig::Auto => ColorChoice::Auto,
            ColorConfig::Always => ColorChoice::Always,
            ColorConfig::Never => ColorChoice::Never,
        }
    }
}

pub(crate) struct Parser {
    args: Vec<String>,
    opts: Options,
}

impl Parser {
    pub(crate) fn new(args: impl IntoIterator<Item = String>) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag("", "list", "List all registered suites and cases");
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );

        Self {
            args: args.into_iter().collect(),
            opts,
        }
    }

    pub(crate) fn print_usage(&self) {
        let binary = self.args.get(0).map(String::as_str).unwrap_or("test");
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS] [ARGUMENTS]", progname);
        eprintln!(
            r#"{usage}
Arguments that are not recognized here are passed through verbatim to the
test suites via the global context."#,
            usage = self.opts.usage(&message)
        );
    }

    pub(crate) fn parse(&self) -> anyhow::Result<Args> {
        let args = &self.args[..];
        let matches = self.opts.parse(args.get(1..).unwrap_or(args))?;

        let show_help = matches.opt_present("help");
        let list = matches.opt_present("list");
        let color = matches.opt_get("color")?.unwrap_or(ColorConfig::Auto);
        let arguments = matches.free.clone();

        Ok(Args {
            show_help,
            list,
            color,
            arguments,
        })
    }
}

/// Exit status code used as a result of the test process.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub const OK: Self = Self(0);
    pub const FAILED: Self = Self(101);

    /// Return the raw exit code.
    #[inline]
    pub fn code(self) -> i32 {
        self.0
    }

    /// Whether the run passed.
    #[inline]
    pub fn success(self) -> bool {
        self.0 == 0
    }

    /// Terminate the test process with the exit code.
    #[inline]
    pub fn exit(self) -> ! {
        std::process::exit(self.code());
    }
}
