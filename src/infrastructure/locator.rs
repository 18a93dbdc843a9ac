//! Call-Site Locator
//!
//! Resolves the caller of an instrumented invocation through
//! `#[track_caller]`. Every function between the user's code and
//! [`CallerLocation::here`] must carry `#[track_caller]`; with the public
//! entry points that chain is exactly two frames deep (entry, then `here`),
//! and the reported location is the user's macro invocation.

use crate::domain::callsite::{CallSite, LineAnchor};
use crate::error::{Error, Result};
use crate::ports::Locate;
use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// Name of the marker item the `d!` macros declare to learn their
/// enclosing function.
pub const MARKER_FN: &str = "__dprobe_here";

/// The caller's location as reported by the compiler.
#[derive(Debug, Clone, Copy)]
pub struct CallerLocation {
    location: &'static Location<'static>,
    function: &'static str,
}

impl CallerLocation {
    #[track_caller]
    pub fn here(function: &'static str) -> Self {
        Self {
            location: Location::caller(),
            function,
        }
    }
}

impl Locate for CallerLocation {
    fn locate(&self) -> Result<CallSite> {
        let file = self.location.file();
        if file.is_empty() || self.location.line() == 0 {
            return Err(Error::stack_unavailable(format!(
                "no source position recorded for {:?}",
                self.function
            )));
        }
        if self.function.is_empty() {
            return Err(Error::stack_unavailable(format!(
                "no enclosing function for {}:{}",
                file,
                self.location.line()
            )));
        }

        // Macro invocations report where they start.
        Ok(CallSite {
            function: self.function.to_string(),
            file: resolve_source_path(Path::new(file)),
            line: self.location.line() as usize,
            column: self.location.column() as usize,
            anchor: LineAnchor::Opening,
        })
    }
}

/// Find the reported source file on disk.
///
/// Compiler-reported paths are usually relative to the workspace root the
/// crate was built from. Tried in order: the path itself if absolute, then
/// the current directory and its ancestors, then `CARGO_MANIFEST_DIR` and
/// its ancestors. Falls back to the path as reported.
pub fn resolve_source_path(reported: &Path) -> PathBuf {
    if reported.is_absolute() {
        return reported.to_path_buf();
    }

    let roots = env::current_dir()
        .ok()
        .into_iter()
        .chain(env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from));

    for root in roots {
        for dir in root.ancestors() {
            let candidate = dir.join(reported);
            if candidate.is_file() {
                return candidate;
            }
        }
    }

    tracing::debug!(path = %reported.display(), "source file not found, keeping reported path");
    reported.to_path_buf()
}

/// Type name of a value; used on the marker fn item.
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

/// `app::run::{{closure}}::__dprobe_here` -> `app::run`.
pub fn enclosing_function(marker_type_name: &'static str) -> &'static str {
    let mut name = marker_type_name
        .strip_suffix(MARKER_FN)
        .map(|n| n.trim_end_matches("::"))
        .unwrap_or(marker_type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
