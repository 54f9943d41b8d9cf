//! End-to-end resolution tests against builtin and custom contexts

use tangram::frontend::resolver::builtin::builtin_context;
use tangram::frontend::resolver::{declarations_of, resolve, DeclKind, Declaration, Package};
use tangram::frontend::parse;

#[test]
fn test_resolve_against_builtin_context() {
    let source = "import $std;\nmodel Event { at: $std.Time, payload: $Model }";
    let parsed = parse(source, "event.tgm").unwrap();
    let usage = resolve(&parsed, builtin_context()).unwrap();

    assert_eq!(usage.dependencies.len(), 1);
    assert!(usage.used_packages["$std"].contains("Time"));
    assert!(usage.used_components.contains("$Model"));
}

#[test]
fn test_usage_sets_are_deduplicated() {
    let source = "model A { x: int, y: int, z: int }";
    let parsed = parse(source, "dup.tgm").unwrap();

    let context = Package::new().with_component(Declaration::new("A", DeclKind::Model));
    let usage = resolve(&parsed, &context).unwrap();

    assert_eq!(usage.used_types.len(), 1);
    assert!(usage.used_types.contains("int"));
}

#[test]
fn test_declarations_of_skips_behavior_members() {
    let source = "model M {}\nconst V = 1;\ninit();\nfunction f(): void;";
    let parsed = parse(source, "d.tgm").unwrap();

    let declarations = declarations_of(&parsed.module);
    let names: Vec<_> = declarations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["M", "V"]);
}

#[test]
fn test_two_files_share_one_context() {
    // The context is read-only to the core; per-file usage must not leak
    let context = builtin_context();

    let first = parse("import $std;\nmodel A { t: $std.Time }", "a.tgm").unwrap();
    let second = parse("model B { n: int }", "b.tgm").unwrap();

    let usage_a = resolve(&first, context).unwrap();
    let usage_b = resolve(&second, context).unwrap();

    assert!(usage_a.dependencies.contains_key("$std"));
    assert!(usage_b.dependencies.is_empty());
    assert!(usage_b.used_types.contains("int"));
}

#[test]
fn test_resolution_fault_renders_caret() {
    let parsed = parse("model M { owner: Account }", "m.tgm").unwrap();
    let err = resolve(&parsed, builtin_context()).unwrap_err();
    let rendered = err.to_string();

    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines[0], "type 'Account' is undefined");
    assert_eq!(lines[1], "m.tgm:1:18");
    assert_eq!(lines[2], "model M { owner: Account }");
    assert_eq!(lines[3], format!("{}^", " ".repeat(17)));
}
