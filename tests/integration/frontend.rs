//! End-to-end frontend tests over a realistic contract file

use tangram::frontend::parser::ast::Member;
use tangram::frontend::{parse, FrontendConfig};

const CONTRACT: &str = r#"
import $std;

/** Service version */
const VERSION = "3.2";

typedef Cursor;

model Account {
    id: long,
    email: string (maxLength=128),
    nickname?: string,
    roles: [Role],
    settings: map[string]{ value: string, locked: bool },
    created: $std.Time,
}

enum Role : int {
    ADMIN(value=0),
    MEMBER(value=1)
}

api getAccount(id: long): Account {
    method = "GET",
    path = "/accounts",
} returns {
    wrap = true,
}

rpc revoke(id: long): bool {
    service = "auth",
}

function normalize(email: string): string {
    var trimmed = email.trim();
    return trimmed;
}
"#;

#[test]
fn test_contract_parses_completely() {
    let parsed = parse(CONTRACT, "account.tgm").unwrap();
    let module = &parsed.module;

    assert_eq!(module.imports.len(), 1);
    assert_eq!(module.members.len(), 7);

    let names: Vec<_> = module.members.iter().filter_map(Member::name).collect();
    assert_eq!(
        names,
        [
            "VERSION",
            "Cursor",
            "Account",
            "Role",
            "getAccount",
            "revoke",
            "normalize"
        ]
    );
}

#[test]
fn test_annotation_is_queryable() {
    let parsed = parse(CONTRACT, "account.tgm").unwrap();
    let first = parsed.module.members[0].range().first;
    let found = parsed.comments.front(first);
    assert_eq!(found.len(), 1);
}

#[test]
fn test_syntax_fault_diagnostic_block() {
    let source = "model Account {\n    id; long,\n}";
    let err = parse(source, "broken.tgm").unwrap_err();
    let rendered = err.to_string();

    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "broken.tgm:2:7");
    assert_eq!(lines[2], "    id; long,");
    assert_eq!(lines[3], format!("{}^", " ".repeat(6)));
    assert!(lines[0].contains("expect ':' after the field name"));
}

#[test]
fn test_check_with_builtin_context() {
    let source = "import $std;\nmodel Ping { at: $std.Time, from: $Model }";
    let parsed = tangram::check(source, "ping.tgm", &FrontendConfig::new()).unwrap();
    assert_eq!(parsed.module.members.len(), 1);
}

#[test]
fn test_check_resolves_own_declarations() {
    let source = "model Inner { v: int }\nmodel Outer { inner: Inner }";
    tangram::check(source, "own.tgm", &FrontendConfig::new()).unwrap();
}

#[test]
fn test_check_without_builtins_rejects_import() {
    let source = "import $std;";
    let err = tangram::check(
        source,
        "no-builtins.tgm",
        &FrontendConfig::new().without_builtins(),
    )
    .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("package '$std' is not defined in manifest"));
}

#[test]
fn test_ast_serializes_for_downstream_tooling() {
    let parsed = parse(CONTRACT, "account.tgm").unwrap();
    let value = serde_json::to_value(&parsed.module).unwrap();

    assert_eq!(value["file"], "account.tgm");
    assert_eq!(value["imports"][0]["alias"], "$std");
    let members = value["members"].as_array().unwrap();
    assert_eq!(members.len(), 7);
}
