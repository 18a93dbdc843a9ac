//! dprobe: debug printing that knows what you passed it.
//!
//! ```
//! let port = 443;
//! let line = dprobe::d_line!(port, port + 1, "literal");
//! assert!(line.to_string().contains("443"));
//! ```
//!
//! `d!(port, "literal")` writes `app::main main.rs:12 port=443 "literal"` to
//! stderr. The names are recovered at run time by re-reading the caller's
//! source file and finding the invocation on the reported line. When that
//! fails (file missing, edited, unparsable) the values print without names.
//!
//! Values are rendered through serde when they implement `Serialize`, and
//! through their `Debug` text otherwise. [`opaque`] forces the `Debug` form.
//!
//! If two instrumented calls share a line, the first one in source order
//! supplies the names for both. That tie-break is fixed, not smart.
//!
//! A `d!` written inside another macro's arguments (`format!("{}",
//! d_line!(x))`) keeps its own line and is found. A `d!` that another
//! macro *generates* from its own tokens is reported at that macro's
//! invocation line, where no matching call exists, so its values print
//! without names.

pub mod application;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{display_width, Inspector, OutputLine};
pub use config::Config;
pub use domain::callsite::{CallSite, LineAnchor};
pub use entry::{colorize_enabled, set_colorize};
pub use error::{Error, ParseFailure, Result};
pub use infrastructure::value_serializer::{opaque, Opaque};
pub use ports::{Locate, Render, SourceParser};

/// Print each argument with the expression that produced it.
#[macro_export]
macro_rules! d {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::ports::{RenderDebug as _, RenderStructured as _};
        $crate::entry::emit(
            $crate::__function!(),
            &[$((&$crate::ports::Arg(&$arg)).to_render_value()),*],
        )
    }};
}

/// Like [`d!`], but returns the [`OutputLine`] instead of printing it.
#[macro_export]
macro_rules! d_line {
    ($($arg:expr),* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::ports::{RenderDebug as _, RenderStructured as _};
        $crate::entry::line(
            $crate::__function!(),
            &[$((&$crate::ports::Arg(&$arg)).to_render_value()),*],
        )
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function {
    () => {{
        fn __dprobe_here() {}
        $crate::infrastructure::locator::enclosing_function(
            $crate::infrastructure::locator::type_name_of(__dprobe_here),
        )
    }};
}
