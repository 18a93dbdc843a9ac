// Call expressions recovered from a syntax tree.

use syn::Expr;

/// One function or macro invocation found in a source file.
///
/// Holds parser spans, so it must be consumed within the lookup that
/// produced it.
#[derive(Clone)]
pub struct CallExpression {
    /// Callee path as written, segments joined by `::` (e.g. `dprobe::d`).
    pub callee: String,
    /// Argument expressions in declaration order.
    pub args: Vec<Expr>,
    /// Line of the callee / opening delimiter.
    pub open_line: usize,
    /// Line of the closing delimiter.
    pub close_line: usize,
}

impl CallExpression {
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    pub fn spans_lines(&self) -> bool {
        self.open_line != self.close_line
    }
}

impl std::fmt::Debug for CallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallExpression")
            .field("callee", &self.callee)
            .field("args", &self.args.len())
            .field("open_line", &self.open_line)
            .field("close_line", &self.close_line)
            .finish()
    }
}
