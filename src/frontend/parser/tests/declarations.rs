//! Module-level grammar tests

use super::{module, parse_err};
use crate::frontend::lexer::tokens::{Number, Primitive};
use crate::frontend::parser::ast::{Expr, FieldValue, Member, TypeNode};

#[test]
fn test_empty_module() {
    let m = module("");
    assert!(m.imports.is_empty());
    assert!(m.extends.is_none());
    assert!(m.members.is_empty());
}

#[test]
fn test_imports_in_order() {
    let m = module("import $std;\nimport $web\nimport $auth;");
    let aliases: Vec<_> = m.imports.iter().map(|i| i.alias.as_str()).collect();
    assert_eq!(aliases, ["$std", "$web", "$auth"]);
}

#[test]
fn test_extends_plain() {
    let m = module("extends Base");
    let extends = m.extends.unwrap();
    assert_eq!(extends.base, "Base");
    assert_eq!(extends.component, None);
}

#[test]
fn test_extends_qualified() {
    let m = module("import $core;\nextends $core.Service");
    let extends = m.extends.unwrap();
    assert_eq!(extends.base, "$core");
    assert_eq!(extends.component.as_deref(), Some("Service"));
}

#[test]
fn test_const_string() {
    let m = module("const VERSION = \"1.0\";");
    let Member::Const(decl) = &m.members[0] else {
        panic!("expected const");
    };
    assert_eq!(decl.name, "VERSION");
    assert!(matches!(&decl.value, Expr::Str { value, .. } if value == "1.0"));
}

#[test]
fn test_const_number_and_bool() {
    let m = module("const LIMIT = 100; const DEBUG = false;");
    let Member::Const(limit) = &m.members[0] else {
        panic!("expected const");
    };
    assert!(matches!(
        limit.value,
        Expr::Num { value: Number::Integer(100), .. }
    ));
    let Member::Const(debug) = &m.members[1] else {
        panic!("expected const");
    };
    assert!(matches!(debug.value, Expr::Bool { value: false, .. }));
}

#[test]
fn test_const_requires_literal() {
    let err = parse_err("const X = [1];");
    assert!(err.contains("expect a string, number or bool value"), "{err}");
}

#[test]
fn test_typedef() {
    let m = module("typedef Json;\ntypedef Binary");
    assert!(matches!(&m.members[0], Member::Typedef(d) if d.name == "Json"));
    assert!(matches!(&m.members[1], Member::Typedef(d) if d.name == "Binary"));
}

#[test]
fn test_model_with_fields() {
    let m = module("model User { id: long, name?: string (maxLength=64) }");
    let Member::Model(decl) = &m.members[0] else {
        panic!("expected model");
    };
    assert_eq!(decl.name, "User");
    assert_eq!(decl.body.fields.len(), 2);

    let id = &decl.body.fields[0];
    assert_eq!(id.name, "id");
    assert!(!id.optional);
    assert!(matches!(
        &id.value,
        FieldValue::Plain(TypeNode::Primitive { kind: Primitive::Long, .. })
    ));

    let name = &decl.body.fields[1];
    assert!(name.optional);
    assert_eq!(name.attrs.len(), 1);
    assert_eq!(name.attrs[0].name, "maxLength");
}

#[test]
fn test_model_equals_sign_and_semicolon_optional() {
    let m = module("model A = { x: int };\nmodel B { y: int }");
    assert!(matches!(&m.members[0], Member::Model(d) if d.name == "A"));
    assert!(matches!(&m.members[1], Member::Model(d) if d.name == "B"));
}

#[test]
fn test_model_zero_field_body() {
    let m = module("model Empty {}");
    let Member::Model(decl) = &m.members[0] else {
        panic!("expected model");
    };
    assert!(decl.body.fields.is_empty());
}

#[test]
fn test_model_trailing_comma() {
    let m = module("model T { a: int, b: int, }");
    let Member::Model(decl) = &m.members[0] else {
        panic!("expected model");
    };
    assert_eq!(decl.body.fields.len(), 2);
}

#[test]
fn test_model_nested_bodies_unbounded() {
    // Multi-dimensional array of anonymous submodels
    let m = module("model Grid { cells: [[{ x: int, y: int }]] }");
    let Member::Model(decl) = &m.members[0] else {
        panic!("expected model");
    };
    let FieldValue::Array { item, .. } = &decl.body.fields[0].value else {
        panic!("expected outer array");
    };
    let FieldValue::Array { item, .. } = item.as_ref() else {
        panic!("expected inner array");
    };
    let FieldValue::Body(body) = item.as_ref() else {
        panic!("expected submodel body");
    };
    assert_eq!(body.fields.len(), 2);
}

#[test]
fn test_model_map_field() {
    let m = module("model Env { vars: map[string]{ value: string, secret: bool } }");
    let Member::Model(decl) = &m.members[0] else {
        panic!("expected model");
    };
    let FieldValue::Map { key, value, .. } = &decl.body.fields[0].value else {
        panic!("expected map");
    };
    assert!(matches!(
        key,
        TypeNode::Primitive { kind: Primitive::String, .. }
    ));
    assert!(matches!(value.as_ref(), FieldValue::Body(_)));
}

#[test]
fn test_enum_with_attributes() {
    let m = module("enum Color : int { RED(value=0), GREEN(value=1), BLUE(value=2) }");
    let Member::Enum(decl) = &m.members[0] else {
        panic!("expected enum");
    };
    assert_eq!(decl.name, "Color");
    assert!(matches!(
        decl.base,
        TypeNode::Primitive { kind: Primitive::Int, .. }
    ));
    assert_eq!(decl.body.fields.len(), 3);
    assert_eq!(decl.body.fields[1].name, "GREEN");
    assert_eq!(decl.body.fields[1].attrs[0].name, "value");
}

#[test]
fn test_enum_field_without_attrs_faults() {
    let err = parse_err("enum E : int { RED }");
    assert!(
        err.contains("expect '(' to open the enum field attributes"),
        "{err}"
    );
}

#[test]
fn test_api_full_form() {
    let source = "api getUser(id: long): User { method = \"GET\" } \
                  returns { wrap = true } runtime { timeout = 30 }";
    let m = module(source);
    let Member::Api(decl) = &m.members[0] else {
        panic!("expected api");
    };
    assert_eq!(decl.name, "getUser");
    assert_eq!(decl.params.items.len(), 1);
    assert!(matches!(decl.return_type, TypeNode::Local { .. }));
    assert_eq!(decl.config.entries.len(), 1);
    assert!(decl.returns.is_some());
    assert!(decl.runtime.is_some());
}

#[test]
fn test_api_minimal_form() {
    let m = module("api ping(): void { path = \"/ping\" }");
    let Member::Api(decl) = &m.members[0] else {
        panic!("expected api");
    };
    assert!(decl.returns.is_none());
    assert!(decl.runtime.is_none());
}

#[test]
fn test_rpc() {
    let m = module("rpc resize(w: int, h: int): bool { service = \"image\" }");
    let Member::Rpc(decl) = &m.members[0] else {
        panic!("expected rpc");
    };
    assert_eq!(decl.name, "resize");
    assert_eq!(decl.params.items.len(), 2);
    assert_eq!(decl.config.entries.len(), 1);
}

#[test]
fn test_type_alias() {
    let m = module("type @Handle = long;");
    let Member::TypeAlias(decl) = &m.members[0] else {
        panic!("expected type alias");
    };
    assert_eq!(decl.name, "Handle");
    assert!(matches!(
        decl.target,
        TypeNode::Primitive { kind: Primitive::Long, .. }
    ));
}

#[test]
fn test_type_alias_requires_virtual_id() {
    let err = parse_err("type Handle = long;");
    assert!(err.contains("expect a virtual identifier after 'type'"), "{err}");
}

#[test]
fn test_init_with_body_and_without() {
    let m = module("init(name: string) { @name = name; }\ninit();");
    let Member::Init(with_body) = &m.members[0] else {
        panic!("expected init");
    };
    assert!(with_body.body.is_some());
    let Member::Init(without) = &m.members[1] else {
        panic!("expected init");
    };
    assert!(without.body.is_none());
}

#[test]
fn test_function_modifiers() {
    let m = module("static async function fetch(url: string) throws: $std.Url;");
    let Member::Function(decl) = &m.members[0] else {
        panic!("expected function");
    };
    assert!(decl.is_static);
    assert!(decl.is_async);
    assert!(decl.throws);
    assert!(decl.body.is_none());
    assert!(matches!(
        &decl.return_type,
        TypeNode::External { package, component, .. }
            if package == "$std" && component == "Url"
    ));
}

#[test]
fn test_function_plain() {
    let m = module("function add(a: int, b: int): int { return a; }");
    let Member::Function(decl) = &m.members[0] else {
        panic!("expected function");
    };
    assert!(!decl.is_static);
    assert!(!decl.is_async);
    assert!(!decl.throws);
    assert_eq!(decl.body.as_ref().unwrap().stmts.len(), 1);
}

#[test]
fn test_untyped_parameter() {
    let m = module("init(ctx) {}");
    let Member::Init(decl) = &m.members[0] else {
        panic!("expected init");
    };
    assert_eq!(decl.params.items[0].name, "ctx");
    assert!(decl.params.items[0].ty.is_none());
}

#[test]
fn test_unknown_member_keyword_faults() {
    let err = parse_err("banana x");
    assert!(
        err.contains(
            "expect 'const', 'typedef', 'model', 'enum', 'api', 'rpc', 'type', 'init' or 'function'"
        ),
        "{err}"
    );
    assert!(err.contains("identifier 'banana'"), "{err}");
}

#[test]
fn test_local_dotted_type_path() {
    let m = module("model Outer { part: Outer.Inner }");
    let Member::Model(decl) = &m.members[0] else {
        panic!("expected model");
    };
    let FieldValue::Plain(TypeNode::Local { path, .. }) = &decl.body.fields[0].value else {
        panic!("expected local path");
    };
    assert_eq!(path, &["Outer", "Inner"]);
}
