//! Call Matcher
//!
//! Finds the instrumented invocation on a given line of a parsed file.
//! Both function calls (`d(x)`) and macro invocations (`d!(x)`) count as
//! call expressions; macro bodies that read as comma-separated expressions
//! are parsed and searched as well.

use crate::domain::call::CallExpression;
use crate::domain::callsite::LineAnchor;
use crate::infrastructure::source_parser::SyntaxTree;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::visit::{self, Visit};
use syn::{Expr, ExprCall, Macro, MacroDelimiter, Path, Token};

/// Public name of this crate, used for qualified callees (`dprobe::d`).
pub const NAMESPACE: &str = "dprobe";

/// Callee spellings accepted as the instrumented invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalleeSet {
    names: Vec<String>,
}

impl CalleeSet {
    /// The bare name plus its `namespace::name` qualified form.
    pub fn new(bare: &str, namespace: &str) -> Self {
        Self {
            names: vec![bare.to_string(), format!("{}::{}", namespace, bare)],
        }
    }

    /// `name` and `dprobe::name`.
    pub fn for_macro(name: &str) -> Self {
        Self::new(name, NAMESPACE)
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn contains(&self, callee: &str) -> bool {
        self.names.iter().any(|n| n == callee)
    }
}

impl Default for CalleeSet {
    fn default() -> Self {
        Self::for_macro("d")
    }
}

/// First matching call in pre-order traversal, or `None`.
///
/// With [`LineAnchor::Closing`] a multi-line call matches on the line of its
/// closing delimiter. When several calls qualify, the first one visited wins;
/// that is a fixed tie-break, not a disambiguation.
pub fn find_call(
    tree: &SyntaxTree,
    target_line: usize,
    anchor: LineAnchor,
    callees: &CalleeSet,
) -> Option<CallExpression> {
    find_calls(tree, target_line, anchor, callees).into_iter().next()
}

/// Every matching call, in pre-order traversal order.
pub fn find_calls(
    tree: &SyntaxTree,
    target_line: usize,
    anchor: LineAnchor,
    callees: &CalleeSet,
) -> Vec<CallExpression> {
    let mut finder = CallFinder {
        target_line,
        anchor,
        callees,
        matches: Vec::new(),
    };
    finder.visit_file(tree.file());
    finder.matches
}

struct CallFinder<'a> {
    target_line: usize,
    anchor: LineAnchor,
    callees: &'a CalleeSet,
    matches: Vec<CallExpression>,
}

impl CallFinder<'_> {
    fn consider(&mut self, callee: String, args: Vec<Expr>, open_line: usize, close_line: usize) {
        let line = match self.anchor {
            LineAnchor::Opening => open_line,
            LineAnchor::Closing => close_line,
        };
        if line != self.target_line || !self.callees.contains(&callee) {
            return;
        }
        tracing::trace!(callee = %callee, open_line, close_line, "matched call");
        self.matches.push(CallExpression {
            callee,
            args,
            open_line,
            close_line,
        });
    }
}

impl<'ast> Visit<'ast> for CallFinder<'_> {
    fn visit_expr_call(&mut self, node: &'ast ExprCall) {
        if let Expr::Path(func) = &*node.func {
            if func.qself.is_none() {
                self.consider(
                    path_text(&func.path),
                    node.args.iter().cloned().collect(),
                    node.func.span().start().line,
                    node.paren_token.span.close().start().line,
                );
            }
        }
        visit::visit_expr_call(self, node);
    }

    fn visit_macro(&mut self, mac: &'ast Macro) {
        let Ok(args) = mac.parse_body_with(Punctuated::<Expr, Token![,]>::parse_terminated) else {
            // Not an expression list (`macro_rules!`, `vec![x; n]`, DSLs).
            return;
        };
        let close = match &mac.delimiter {
            MacroDelimiter::Paren(p) => p.span.close(),
            MacroDelimiter::Brace(b) => b.span.close(),
            MacroDelimiter::Bracket(b) => b.span.close(),
        };
        self.consider(
            path_text(&mac.path),
            args.iter().cloned().collect(),
            mac.path.span().start().line,
            close.start().line,
        );
        // The parsed arguments are local to this call, so they are walked
        // under their own lifetime.
        for arg in &args {
            Visit::visit_expr(self, arg);
        }
    }
}

/// `a::b::c` with any leading `::` and generic arguments dropped.
fn path_text(path: &Path) -> String {
    path.segments
        .iter()
        .map(|seg| seg.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}
