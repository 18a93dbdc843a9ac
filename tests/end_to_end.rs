//! End-to-end scenarios against fixture source files.

use dprobe::{CallSite, Config, Inspector, LineAnchor, Render};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(src: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.rs");
    fs::write(&path, src).unwrap();
    (dir, path)
}

#[test]
fn variables_expressions_and_literals() -> anyhow::Result<()> {
    let (_dir, path) = fixture(
        "fn main() {\n    let x = 5;\n    let y = 2;\n    d!(x, y+1, \"literal\");\n}\n",
    );
    let inspector = Inspector::new(Config::plain());
    let site = CallSite::new("fixture::main", &path, 4);

    assert_eq!(inspector.try_argument_names(&site)?, Some(vec!["x".into(), "y+1".into(), String::new()]));

    let (x, y) = (5, 2);
    let line = inspector.line(&site, &[&x, &(y + 1), &"literal"]);
    assert_eq!(line.body(), "x=5 y+1=3 \"literal\"");
    assert_eq!(line.to_string(), "fixture::main fixture.rs:4 x=5 y+1=3 \"literal\"");
    Ok(())
}

#[test]
fn qualified_callee_is_recognized() {
    #[derive(serde::Serialize)]
    struct Cfg {
        port: u16,
    }

    let (_dir, path) = fixture("fn serve(cfg: Cfg) {\n    dprobe::d!(cfg.port);\n}\n");
    let cfg = Cfg { port: 8080 };
    let line = Inspector::new(Config::plain()).line(&CallSite::new("fixture::serve", &path, 2), &[&cfg.port]);
    assert_eq!(line.body(), "cfg.port=8080");
}

#[test]
fn malformed_source_prints_bare_values() {
    let (_dir, path) = fixture("fn main() {\n    d!(x, y\n");
    let inspector = Inspector::new(Config::plain());
    let site = CallSite::new("fixture::main", &path, 2);

    assert!(inspector.try_argument_names(&site).unwrap_err().is_parse());

    let line = inspector.line(&site, &[&5, &"x"]);
    assert_eq!(line.body(), "5 \"x\"");
    assert!(!line.body().contains('='));
}

#[test]
fn missing_source_prints_bare_values() {
    let site = CallSite::new("gone::main", "/nonexistent/dprobe/fixture.rs", 1);
    let line = Inspector::new(Config::plain()).line(&site, &[&1]);
    assert_eq!(line.body(), "1");
}

#[test]
fn same_line_calls_use_the_first_in_traversal_order() {
    let (_dir, path) = fixture("fn main() {\n    let t = (d!(a), d!(b, c));\n}\n");
    let inspector = Inspector::new(Config::plain());
    let site = CallSite::new("fixture::main", &path, 2);

    assert_eq!(inspector.argument_names(&site), vec!["a"]);

    // The second call on the line still gets the first call's names.
    let line = inspector.line(&site, &[&2, &3]);
    assert_eq!(line.body(), "a=2 3");
}

#[test]
fn multi_line_call_matches_on_closing_line() {
    let src = "fn main() {\n    d!(\n        total,\n        count * 2,\n    );\n}\n";
    let (_dir, path) = fixture(src);
    let inspector = Inspector::new(Config::plain());

    let closing = CallSite::new("fixture::main", &path, 5);
    assert_eq!(inspector.argument_names(&closing), vec!["total", "count * 2"]);

    let opening_line_as_closing = CallSite::new("fixture::main", &path, 2);
    assert!(inspector.argument_names(&opening_line_as_closing).is_empty());

    let opening = CallSite::new("fixture::main", &path, 2).with_anchor(LineAnchor::Opening);
    assert_eq!(inspector.argument_names(&opening), vec!["total", "count * 2"]);
}

#[test]
fn colored_line_has_same_visual_width_as_plain() {
    let (_dir, path) = fixture("fn main() {\n    d!(port, 1);\n}\n");
    let site = CallSite::new("fixture::main", &path, 2);
    let values: [&dyn Render; 2] = [&443, &1];

    let plain = Inspector::new(Config::plain()).line(&site, &values);
    let colored = Inspector::new(Config::default()).line(&site, &values);

    assert!(colored.body().contains('\x1b'));
    assert!(!plain.body().contains('\x1b'));
    assert_eq!(dprobe::display_width(&colored.body()), dprobe::display_width(&plain.body()));
    assert_eq!(colored.segments[0], "\x1b[1mport\x1b[0m=\x1b[36m443\x1b[0m");
}
