//! Value Formatter
//!
//! Pretty-prints runtime values. Small values stay on one line; composites
//! that would exceed [`MAX_INLINE_WIDTH`] break one entry per line.

use crate::application::style::{colorize, Style};
use crate::config::Config;
use crate::domain::value::Value;
use crate::ports::Render;

/// Widest flat rendering kept on a single line, including indentation.
pub const MAX_INLINE_WIDTH: usize = 60;

const INDENT: &str = "    ";

pub struct ValueFormatter {
    config: Config,
}

impl ValueFormatter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// One colorized string per value, in order.
    pub fn format(&self, values: &[&dyn Render]) -> Vec<String> {
        values.iter().map(|v| self.format_value(&v.render())).collect()
    }

    pub fn format_value(&self, value: &Value) -> String {
        colorize(&pretty(value), Style::Value, self.config.colorize)
    }
}

/// Layout without color.
pub fn pretty(value: &Value) -> String {
    let mut out = String::new();
    write_pretty(&mut out, value, 0);
    out
}

fn write_pretty(out: &mut String, value: &Value, depth: usize) {
    let flat = value.to_string();
    if !value.is_composite() || depth * INDENT.len() + flat.chars().count() <= MAX_INLINE_WIDTH {
        out.push_str(&flat);
        return;
    }

    match value {
        Value::TupleStruct { name, fields } => {
            out.push_str(name);
            write_block(out, "(", ")", depth, fields, |out, v, d| write_pretty(out, v, d));
        }
        Value::Struct { name, fields } => {
            out.push_str(name);
            out.push(' ');
            write_block(out, "{", "}", depth, fields, |out, (key, v), d| {
                out.push_str(key);
                out.push_str(": ");
                write_pretty(out, v, d);
            });
        }
        Value::Seq(items) => write_block(out, "[", "]", depth, items, |out, v, d| write_pretty(out, v, d)),
        Value::Tuple(items) => write_block(out, "(", ")", depth, items, |out, v, d| write_pretty(out, v, d)),
        Value::Map(entries) => write_block(out, "{", "}", depth, entries, |out, (key, v), d| {
            out.push_str(&key.to_string());
            out.push_str(": ");
            write_pretty(out, v, d);
        }),
        _ => out.push_str(&flat),
    }
}

fn write_block<T>(
    out: &mut String,
    open: &str,
    close: &str,
    depth: usize,
    items: &[T],
    mut write_item: impl FnMut(&mut String, &T, usize),
) {
    out.push_str(open);
    out.push('\n');
    for item in items {
        push_indent(out, depth + 1);
        write_item(out, item, depth + 1);
        out.push_str(",\n");
    }
    push_indent(out, depth);
    out.push_str(close);
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Server {
        name: &'static str,
        addresses: Vec<&'static str>,
        port: u16,
    }

    #[test]
    fn test_scalars_and_short_composites_stay_flat() {
        let f = ValueFormatter::new(Config::plain());
        let values: [&dyn Render; 4] = [&5, &"literal", &vec![1, 2, 3], &Some(2.5)];
        assert_eq!(f.format(&values), vec!["5", "\"literal\"", "[1, 2, 3]", "Some(2.5)"]);
    }

    #[test]
    fn test_long_struct_breaks_across_lines() {
        let server = Server {
            name: "primary-database",
            addresses: vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"],
            port: 5432,
        };
        let expected = "Server {\n    name: \"primary-database\",\n    addresses: [\"10.0.0.1\", \"10.0.0.2\", \"10.0.0.3\"],\n    port: 5432,\n}";
        assert_eq!(pretty(&server.render()), expected);
    }

    #[test]
    fn test_nested_breaks_indent_further() {
        let rows: Vec<Vec<String>> = (0..2)
            .map(|r| (0..6).map(|c| format!("cell-{}-{}", r, c)).collect())
            .collect();
        let out = pretty(&rows.render());
        assert!(out.starts_with("[\n    [\n        \"cell-0-0\",\n"), "{}", out);
        assert!(out.ends_with("    ],\n]"), "{}", out);
    }

    #[test]
    fn test_colorize_toggle() {
        let plain = ValueFormatter::new(Config::plain());
        assert_eq!(plain.format_value(&Value::Int(1)), "1");

        let colored = ValueFormatter::new(Config::default());
        assert_eq!(colored.format_value(&Value::Int(1)), "\x1b[36m1\x1b[0m");
    }
}
