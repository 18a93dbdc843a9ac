//! Pipeline configuration.
//!
//! Threaded explicitly into the formatter and composer; the pipeline never
//! reads process state on its own.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable forcing color on or off.
pub const COLOR_ENV: &str = "DPROBE_COLOR";
/// Environment variable toggling the `file:line` part of the header.
pub const LOCATION_ENV: &str = "DPROBE_LOCATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit ANSI color sequences around names and values.
    pub colorize: bool,
    /// Append `file:line` to the function name in the header.
    pub show_location: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colorize: true,
            show_location: true,
        }
    }
}

impl Config {
    /// Plain output: no escape sequences anywhere.
    pub fn plain() -> Self {
        Self {
            colorize: false,
            ..Self::default()
        }
    }

    /// Build a config from `NO_COLOR`, `DPROBE_COLOR` and `DPROBE_LOCATION`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.colorize = false;
        }
        if let Some(flag) = lookup(COLOR_ENV).as_deref().and_then(parse_flag) {
            config.colorize = flag;
        }
        if let Some(flag) = lookup(LOCATION_ENV).as_deref().and_then(parse_flag) {
            config.show_location = flag;
        }

        config
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn with_location(mut self, show_location: bool) -> Self {
        self.show_location = show_location;
        self
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" | "always" => Some(true),
        "0" | "false" | "off" | "no" | "never" => Some(false),
        _ => None,
    }
}
