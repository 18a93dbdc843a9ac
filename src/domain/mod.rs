// Domain types for dprobe.
// Plain request-scoped data: nothing here outlives a single invocation.

pub mod call;
pub mod callsite;
pub mod value;
