//! Source Parser
//!
//! Parses a caller's source file with `syn`. Span locations are enabled on
//! `proc-macro2`, so every node knows its line and column.

use crate::error::{Error, Result};
use crate::ports::SourceParser;
use proc_macro2::LineColumn;
use std::fs;
use std::path::{Path, PathBuf};

/// Spaces substituted for each tab in recovered source text.
pub const TAB_WIDTH: usize = 4;

/// One parsed source file.
pub struct SyntaxTree {
    pub path: PathBuf,
    source: String,
    file: syn::File,
}

impl SyntaxTree {
    /// Parse in-memory source text. `path` is only used for diagnostics.
    pub fn from_source(path: impl Into<PathBuf>, source: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let source = source.into();
        let file = syn::parse_file(&source).map_err(|e| Error::parse(&path, e))?;
        Ok(Self { path, source, file })
    }

    pub fn file(&self) -> &syn::File {
        &self.file
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text between two span positions (lines 1-based, columns in
    /// chars), normalized for terminal display.
    ///
    /// Tabs become [`TAB_WIDTH`] spaces. Continuation lines lose the
    /// indentation of the line the text starts on, so a multi-line argument
    /// prints flush instead of carrying the caller's nesting depth.
    pub fn text_between(&self, start: LineColumn, end: LineColumn) -> Option<String> {
        if start.line == 0 || end.line < start.line {
            return None;
        }
        let lines: Vec<&str> = self
            .source
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let first = *lines.get(start.line - 1)?;

        if start.line == end.line {
            let text: String = first
                .chars()
                .skip(start.column)
                .take(end.column.saturating_sub(start.column))
                .collect();
            return Some(expand_tabs(&text));
        }

        let base_indent = expand_tabs(first)
            .chars()
            .take_while(|c| *c == ' ')
            .count();

        let mut out = expand_tabs(&first.chars().skip(start.column).collect::<String>());
        for line_no in start.line + 1..=end.line {
            let line = *lines.get(line_no - 1)?;
            let line = if line_no == end.line {
                line.chars().take(end.column).collect::<String>()
            } else {
                line.to_string()
            };
            out.push('\n');
            out.push_str(&dedent(&expand_tabs(&line), base_indent));
        }
        Some(out)
    }
}

fn expand_tabs(s: &str) -> String {
    s.replace('\t', &" ".repeat(TAB_WIDTH))
}

fn dedent(line: &str, width: usize) -> &str {
    let leading = line.chars().take(width).take_while(|c| *c == ' ').count();
    &line[leading..]
}

/// Reads and parses files from disk.
pub struct SynSourceParser;

impl SourceParser for SynSourceParser {
    fn parse(&self, file: &Path) -> Result<SyntaxTree> {
        let source = fs::read_to_string(file).map_err(|e| Error::parse(file, e))?;
        SyntaxTree::from_source(file, source)
    }
}
