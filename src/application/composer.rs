//! Line Composer
//!
//! Pairs recovered names with formatted values (`name=value`, or the bare
//! value for unnamed arguments) behind a call-site header.

use crate::application::style::{colorize, Style};
use crate::config::Config;
use crate::domain::callsite::CallSite;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Header used when the caller could not be located.
pub const UNKNOWN_CALLER: &str = "<unknown>";

/// One composed line of debug output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub header: String,
    pub segments: Vec<String>,
}

impl OutputLine {
    /// Segments only, single-space separated.
    pub fn body(&self) -> String {
        self.segments.join(" ")
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)?;
        for segment in &self.segments {
            f.write_str(" ")?;
            f.write_str(segment)?;
        }
        Ok(())
    }
}

pub struct LineComposer {
    config: Config,
}

impl LineComposer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn compose(&self, site: Option<&CallSite>, names: &[String], values: Vec<String>) -> OutputLine {
        OutputLine {
            header: self.header(site),
            segments: self.segments(names, values),
        }
    }

    /// `name=value` per named position, bare `value` otherwise.
    ///
    /// Missing names count as empty; names beyond the last value are ignored.
    pub fn segments(&self, names: &[String], values: Vec<String>) -> Vec<String> {
        values
            .into_iter()
            .enumerate()
            .map(|(i, value)| match names.get(i).filter(|n| !n.is_empty()) {
                Some(name) => format!("{}={}", colorize(name, Style::Name, self.config.colorize), value),
                None => value,
            })
            .collect()
    }

    fn header(&self, site: Option<&CallSite>) -> String {
        match site {
            Some(site) if self.config.show_location => site.to_string(),
            Some(site) => site.function.clone(),
            None => UNKNOWN_CALLER.to_string(),
        }
    }
}

fn escape_sequence() -> &'static Regex {
    static ESCAPE: OnceLock<Regex> = OnceLock::new();
    ESCAPE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").expect("escape pattern is valid"))
}

/// Terminal cells `s` occupies: ANSI color sequences and the control
/// characters `\n \t \r \f \v` count as zero.
pub fn display_width(s: &str) -> usize {
    escape_sequence()
        .replace_all(s, "")
        .chars()
        .filter(|c| !matches!(c, '\n' | '\t' | '\r' | '\x0c' | '\x0b'))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_segments_pair_names_with_values() {
        let composer = LineComposer::new(Config::plain());
        let segments = composer.segments(&strings(&["x", "y+1", ""]), strings(&["5", "3", "\"literal\""]));
        assert_eq!(segments, strings(&["x=5", "y+1=3", "\"literal\""]));
    }

    #[test]
    fn test_plain_line_has_single_spaces_and_no_escapes() {
        let composer = LineComposer::new(Config::plain());
        let site = CallSite::new("app::main", "/src/app/main.rs", 7);
        let line = composer.compose(Some(&site), &strings(&["a", "b"]), strings(&["1", "2"]));

        let text = line.to_string();
        assert_eq!(text, "app::main main.rs:7 a=1 b=2");
        assert!(!text.contains('\x1b'));
        assert!(!text.contains("  "));
        assert_eq!(line.body(), "a=1 b=2");
    }

    #[test]
    fn test_header_without_location() {
        let composer = LineComposer::new(Config::plain().with_location(false));
        let site = CallSite::new("app::main", "main.rs", 7);
        let line = composer.compose(Some(&site), &[], strings(&["1"]));
        assert_eq!(line.to_string(), "app::main 1");

        let line = composer.compose(None, &[], strings(&["1"]));
        assert_eq!(line.to_string(), "<unknown> 1");
    }

    #[test]
    fn test_count_mismatch_is_tolerated() {
        let composer = LineComposer::new(Config::plain());
        // Fewer names than values: pad.
        assert_eq!(composer.segments(&strings(&["a"]), strings(&["1", "2"])), strings(&["a=1", "2"]));
        // More names than values: ignore the rest.
        assert_eq!(composer.segments(&strings(&["a", "b"]), strings(&["1"])), strings(&["a=1"]));
        assert!(composer.segments(&[], Vec::new()).is_empty());
    }

    #[test]
    fn test_colored_name_brackets_only_the_name() {
        let composer = LineComposer::new(Config::default());
        let segments = composer.segments(&strings(&["port"]), strings(&["443"]));
        assert_eq!(segments, strings(&["\x1b[1mport\x1b[0m=443"]));
    }

    #[test]
    fn test_display_width_ignores_escapes_and_controls() {
        assert_eq!(display_width("\x1b[1mport\x1b[0m"), display_width("port"));
        assert_eq!(display_width("\x1b[1mport\x1b[0m"), 4);
        assert_eq!(display_width("\x1b[36m443\x1b[0m"), 3);
        assert_eq!(display_width("a\tb\nc\r\x0c\x0b"), 3);
        assert_eq!(display_width("héllo"), 5);
        assert_eq!(display_width(""), 0);
    }
}
