//! Argument Namer
//!
//! Decides which arguments of a matched call deserve a `name=` prefix and
//! recovers their source text.

use crate::domain::call::CallExpression;
use crate::infrastructure::source_parser::SyntaxTree;
use syn::spanned::Spanned;
use syn::{Expr, Path};

/// One name per argument, index-aligned with `call.args`. Literals and
/// other unnameable expressions get `""`.
pub fn name_arguments(tree: &SyntaxTree, call: &CallExpression) -> Vec<String> {
    call.args.iter().map(|arg| argument_name(tree, arg)).collect()
}

/// Name of a single argument expression.
pub fn argument_name(tree: &SyntaxTree, arg: &Expr) -> String {
    match arg {
        Expr::Group(group) => argument_name(tree, &group.expr),
        Expr::Path(p) if p.qself.is_none() => {
            if names_binding(&p.path) {
                source_text(tree, arg)
            } else {
                String::new()
            }
        }
        Expr::Binary(_)
        | Expr::Call(_)
        | Expr::MethodCall(_)
        | Expr::Index(_)
        | Expr::Assign(_)
        | Expr::Paren(_)
        | Expr::Field(_)
        | Expr::Cast(_)
        | Expr::Unary(_)
        | Expr::Reference(_)
        | Expr::Try(_)
        | Expr::Macro(_) => source_text(tree, arg),
        _ => String::new(),
    }
}

/// Whether a path refers to a variable or named constant rather than a
/// value constructor such as `None` or `Color::Red`.
///
/// Decided by case alone, so lowercase function items are named too.
fn names_binding(path: &Path) -> bool {
    let Some(last) = path.segments.last() else {
        return false;
    };
    if !last.arguments.is_empty() {
        return false;
    }
    let ident = last.ident.to_string();
    let ident = ident.strip_prefix("r#").unwrap_or(&ident);
    !is_camel_case(ident)
}

/// `Some`, `Red`, `Unit` - but not `MAX`, `X`, `port` or `_tmp`.
fn is_camel_case(ident: &str) -> bool {
    let mut chars = ident.chars();
    let starts_upper = chars.next().is_some_and(|c| c.is_uppercase());
    starts_upper && chars.any(|c| c.is_lowercase())
}

fn source_text(tree: &SyntaxTree, arg: &Expr) -> String {
    let span = arg.span();
    tree.text_between(span.start(), span.end()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::callsite::LineAnchor;
    use crate::infrastructure::call_matcher::{find_call, CalleeSet};

    fn names_on_line(src: &str, line: usize) -> Vec<String> {
        let tree = SyntaxTree::from_source("fixture.rs", src).unwrap();
        let call = find_call(&tree, line, LineAnchor::Closing, &CalleeSet::default()).unwrap();
        name_arguments(&tree, &call)
    }

    fn names_of(args: &str) -> Vec<String> {
        names_on_line(&format!("fn main() {{\n    d!({});\n}}\n", args), 2)
    }

    #[test]
    fn test_literals_are_unnamed() {
        assert_eq!(
            names_of(r#"5, -0.5e3, "s", 'c', true, b"raw", [1, 2], (1, 2), Point { x: 1 }"#)
                .iter()
                .filter(|n| !n.is_empty())
                .collect::<Vec<_>>(),
            // A negated literal is a unary expression.
            vec!["-0.5e3"]
        );
        assert_eq!(names_of(r#"5, "s", true"#), vec!["", "", ""]);
    }

    #[test]
    fn test_identifiers_are_verbatim() {
        assert_eq!(names_of("port, MAX_CONN, _tmp, r#type"), vec!["port", "MAX_CONN", "_tmp", "r#type"]);
    }

    #[test]
    fn test_value_constructors_are_unnamed() {
        assert_eq!(names_of("None, Color::Red, Ordering::Less"), vec!["", "", ""]);
        assert_eq!(names_of("std::f64::consts::PI, Self::LIMIT"), vec!["std::f64::consts::PI", "Self::LIMIT"]);
    }

    #[test]
    fn test_lowercase_items_are_named_like_variables() {
        // No name resolution: a function item or module-level static reads
        // the same as a local binding.
        assert_eq!(names_of("parse_port, std::process::id"), vec!["parse_port", "std::process::id"]);
    }

    #[test]
    fn test_compound_expressions_keep_source_text() {
        assert_eq!(
            names_of("y+1, cfg.port, items[0], f(x), v.len(), (a), n as u64, !ok, &buf, key = 3, res?, vec![1]"),
            vec![
                "y+1", "cfg.port", "items[0]", "f(x)", "v.len()", "(a)", "n as u64", "!ok", "&buf",
                "key = 3", "res?", "vec![1]",
            ]
        );
    }

    #[test]
    fn test_other_expression_kinds_are_unnamed() {
        assert_eq!(names_of("|x| x, { 1 }, 0..3, if a { 1 } else { 2 }"), vec!["", "", "", ""]);
    }

    #[test]
    fn test_multi_line_argument_is_normalized() {
        let src = "fn main() {\n\tif true {\n\t\td!(total(\n\t\t\ta,\n\t\t\tb,\n\t\t), x);\n\t}\n}\n";
        assert_eq!(names_on_line(src, 6), vec!["total(\n    a,\n    b,\n)", "x"]);
    }

    #[test]
    fn test_count_matches_arguments() {
        assert_eq!(names_of("").len(), 0);
        assert_eq!(names_of("a, 1, b, 2,").len(), 4);
    }
}
