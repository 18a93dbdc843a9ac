// Infrastructure implementations for dprobe: locating the caller, parsing
// its source with syn, matching the call and naming its arguments.

pub mod call_matcher;
pub mod locator;
pub mod namer;
pub mod source_parser;
pub mod value_serializer;

pub use call_matcher::{find_call, find_calls, CalleeSet};
pub use locator::CallerLocation;
pub use namer::name_arguments;
pub use source_parser::{SynSourceParser, SyntaxTree};
