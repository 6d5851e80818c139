//! Module implementing logging for the application.
//!
//! Log records from the `log` crate macros are forwarded to an slog logger
//! which prints them to standard error.

use std::env;
use std::io::{self, Write};
use std::sync::Mutex;

use ansi_term::{Colour, Style};
use log::SetLoggerError;
use slog::{o, Drain, FilterLevel, Level, Logger, OwnedKVList, Record};
use slog_envlogger::LogBuilder as EnvLogBuilder;


// Default logging level defined using the two enums used by slog.
// Both values must correspond to the same level. (This is checked by a test).
const DEFAULT_LEVEL: Level = Level::Info;
const DEFAULT_FILTER_LEVEL: FilterLevel = FilterLevel::Info;

/// Environment variable with additional logging directives.
const LOG_DIRECTIVES_VAR: &str = "RUST_LOG";


/// Initialize logging with given verbosity.
/// The verbosity value has to be between `-3` and `+2`, inclusive
/// (values outside the range are clamped).
pub fn init(verbosity: isize) -> Result<(), SetLoggerError> {
    let level = level_for_verbosity(verbosity);
    let drain = {
        let mut builder = EnvLogBuilder::new(Stderr::new(isatty::stderr_isatty()))
            .filter(None, filter_level(level));
        if let Ok(directives) = env::var(LOG_DIRECTIVES_VAR) {
            builder = builder.parse(&directives);
        }
        Mutex::new(builder.build()).ignore_res()
    };
    let logger = Logger::root(drain, o!());

    // Keep the slog logger around globally for the rest of the program
    // and route the `log` crate macros into it.
    slog_scope::set_global_logger(logger).cancel_reset();
    slog_stdlog::init_with_level(log::Level::Trace)?;

    if verbosity != level_verbosity(level) {
        warn!("Verbosity {} is out of range, using {:?}", verbosity, level);
    }
    Ok(())
}

/// Map the number of -v/-q flags onto a logging level.
fn level_for_verbosity(verbosity: isize) -> Level {
    let level = DEFAULT_LEVEL.as_usize() as isize + verbosity;
    let level = level.max(Level::Critical.as_usize() as isize)
        .min(Level::Trace.as_usize() as isize);
    Level::from_usize(level as usize).unwrap_or(DEFAULT_LEVEL)
}

#[inline]
fn filter_level(level: Level) -> FilterLevel {
    FilterLevel::from_usize(level.as_usize()).unwrap_or(DEFAULT_FILTER_LEVEL)
}

/// Inverse of `level_for_verbosity`.
fn level_verbosity(level: Level) -> isize {
    level.as_usize() as isize - DEFAULT_LEVEL.as_usize() as isize
}


/// Drain that prints the log records to standard error.
struct Stderr {
    colored: bool,
}

impl Stderr {
    #[inline]
    fn new(colored: bool) -> Self {
        Stderr{colored}
    }

    fn level_style(&self, level: Level) -> Style {
        if !self.colored {
            return Style::new();
        }
        match level {
            Level::Critical => Colour::Purple.bold(),
            Level::Error => Colour::Red.bold(),
            Level::Warning => Colour::Yellow.bold(),
            Level::Info => Colour::Green.normal(),
            Level::Debug => Colour::Cyan.normal(),
            Level::Trace => Colour::Blue.normal(),
        }
    }
}

impl Drain for Stderr {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record, _: &OwnedKVList) -> io::Result<()> {
        let level = record.level();
        let level_str = format!("{:<5}", level.as_short_str());
        let module = if self.colored {
            Colour::Fixed(8).paint(record.module()).to_string()
        } else {
            record.module().to_owned()
        };

        let line = format!("{} {}: {}\n",
            self.level_style(level).paint(level_str), module, record.msg());
        io::stderr().write_all(line.as_bytes())
    }
}


#[cfg(test)]
mod tests {
    use slog::{FilterLevel, Level};
    use super::{DEFAULT_LEVEL, DEFAULT_FILTER_LEVEL,
                filter_level, level_for_verbosity, level_verbosity};

    #[test]
    fn default_level() {
        assert_eq!(DEFAULT_LEVEL.as_usize(), DEFAULT_FILTER_LEVEL.as_usize());
        assert_eq!(DEFAULT_LEVEL, level_for_verbosity(0));
    }

    #[test]
    fn filter_levels_match() {
        assert_eq!(FilterLevel::Critical, filter_level(Level::Critical));
        assert_eq!(FilterLevel::Warning, filter_level(Level::Warning));
        assert_eq!(FilterLevel::Trace, filter_level(Level::Trace));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(Level::Debug, level_for_verbosity(1));
        assert_eq!(Level::Trace, level_for_verbosity(2));
        assert_eq!(Level::Warning, level_for_verbosity(-1));
        assert_eq!(Level::Error, level_for_verbosity(-2));
        assert_eq!(Level::Critical, level_for_verbosity(-3));
    }

    #[test]
    fn verbosity_is_clamped() {
        assert_eq!(Level::Trace, level_for_verbosity(10));
        assert_eq!(Level::Critical, level_for_verbosity(-10));
        assert_eq!(2, level_verbosity(level_for_verbosity(10)));
    }
}
