// Application layer: the per-invocation pipeline and its output stages.

pub mod composer;
pub mod formatter;
pub mod inspector;
pub mod style;

pub use composer::{display_width, LineComposer, OutputLine};
pub use formatter::ValueFormatter;
pub use inspector::Inspector;
