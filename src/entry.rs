//! Public entry points behind `d!` and `d_line!`.
//!
//! Also holds the process-wide color toggle. It is read once per
//! invocation and handed to the pipeline as part of an explicit `Config`.

use crate::application::{Inspector, OutputLine};
use crate::config::Config;
use crate::infrastructure::{CalleeSet, CallerLocation};
use crate::domain::value::Value;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};

const UNSET: u8 = 0;
const OFF: u8 = 1;
const ON: u8 = 2;

static COLORIZE: AtomicU8 = AtomicU8::new(UNSET);

/// Turn colorized output on or off for the whole process.
pub fn set_colorize(enabled: bool) {
    COLORIZE.store(if enabled { ON } else { OFF }, Ordering::Relaxed);
}

/// Current color setting; seeded from the environment until
/// [`set_colorize`] is called.
pub fn colorize_enabled() -> bool {
    match COLORIZE.load(Ordering::Relaxed) {
        ON => true,
        OFF => false,
        _ => Config::from_env().colorize,
    }
}

/// Configuration for one invocation.
pub fn current_config() -> Config {
    Config::from_env().with_colorize(colorize_enabled())
}

/// Print one line to stderr. Called by `d!`.
#[doc(hidden)]
#[track_caller]
pub fn emit(function: &'static str, values: &[Value]) {
    let locator = CallerLocation::here(function);
    let line = Inspector::new(current_config())
        .callees(CalleeSet::for_macro("d"))
        .line_for_values(&locator, values);

    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{}", line);
}

/// Build one line without printing it. Called by `d_line!`.
#[doc(hidden)]
#[track_caller]
pub fn line(function: &'static str, values: &[Value]) -> OutputLine {
    let locator = CallerLocation::here(function);
    Inspector::new(current_config())
        .callees(CalleeSet::for_macro("d_line"))
        .line_for_values(&locator, values)
}
