//! Call Site
//!
//! Where an instrumented invocation lives in the caller's source.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which edge of a call expression a reported line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAnchor {
    /// The line holding the callee and opening delimiter.
    Opening,
    /// The line holding the closing delimiter.
    #[default]
    Closing,
}

/// The caller of an instrumented invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Fully qualified name of the calling function, e.g. `app::server::run`.
    pub function: String,
    /// Absolute path of the caller's source file when it could be resolved.
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, or 0 when unknown.
    pub column: usize,
    /// Which edge of the call expression `line` refers to.
    pub anchor: LineAnchor,
}

impl CallSite {
    pub fn new(function: impl Into<String>, file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
            column: 0,
            anchor: LineAnchor::default(),
        }
    }

    pub fn with_anchor(mut self, anchor: LineAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// The file name without its directories, for display.
    pub fn file_name(&self) -> String {
        self.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.file
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.function, self.file_name(), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_file_name() {
        let site = CallSite::new("app::main", "/work/app/src/main.rs", 12);
        assert_eq!(site.to_string(), "app::main main.rs:12");
        assert_eq!(site.anchor, LineAnchor::Closing);
    }

    #[test]
    fn test_builders() {
        let site = CallSite::new("f", "lib.rs", 3)
            .with_anchor(LineAnchor::Opening)
            .with_column(9);
        assert_eq!(site.anchor, LineAnchor::Opening);
        assert_eq!(site.column, 9);
        assert_eq!(site.path(), Path::new("lib.rs"));
    }
}
