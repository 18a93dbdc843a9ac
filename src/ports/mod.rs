// Seams between the introspection pipeline and its collaborators.

use crate::domain::callsite::CallSite;
use crate::domain::value::Value;
use crate::error::Result;
use crate::infrastructure::source_parser::SyntaxTree;
use crate::infrastructure::value_serializer;
use std::fmt;
use std::path::Path;

/// Produces the call site of the current invocation.
pub trait Locate {
    fn locate(&self) -> Result<CallSite>;
}

/// A fixed call site locates to itself.
impl Locate for CallSite {
    fn locate(&self) -> Result<CallSite> {
        Ok(self.clone())
    }
}

/// Parses one source file into a queryable tree.
///
/// Lookups run on a worker thread, hence `Sync`.
pub trait SourceParser: Sync {
    fn parse(&self, file: &Path) -> Result<SyntaxTree>;
}

/// Values that can be structurally rendered.
///
/// Every `serde::Serialize` type is renderable. Types without a `Serialize`
/// impl can be wrapped in [`crate::Opaque`] to render their `Debug` text;
/// the `d!` macros do that automatically through [`Arg`].
pub trait Render {
    fn render(&self) -> Value;
}

impl<T: serde::Serialize + ?Sized> Render for T {
    fn render(&self) -> Value {
        value_serializer::to_value(self)
    }
}

/// Borrowed macro argument. Method lookup on `&Arg` prefers
/// [`RenderStructured`] and falls back to [`RenderDebug`] through one more
/// auto-reference, so `Serialize` types render as trees and any other
/// `Debug` type as its debug text.
#[doc(hidden)]
pub struct Arg<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait RenderStructured {
    fn to_render_value(&self) -> Value;
}

impl<T: serde::Serialize + ?Sized> RenderStructured for Arg<'_, T> {
    fn to_render_value(&self) -> Value {
        value_serializer::to_value(self.0)
    }
}

#[doc(hidden)]
pub trait RenderDebug {
    fn to_render_value(&self) -> Value;
}

impl<T: fmt::Debug + ?Sized> RenderDebug for &Arg<'_, T> {
    fn to_render_value(&self) -> Value {
        Value::Opaque(format!("{:?}", self.0))
    }
}
