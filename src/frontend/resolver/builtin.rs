//! Builtin declarations bootstrap
//!
//! A fixed set of built-in components (`$Model`, `$Request`, `$Response`,
//! `$Error`) and the `$std` standard-library package, constructed by
//! re-entrantly running the same lexer/parser over bundled source text.

use super::context::Package;
use super::declarations_of;
use crate::frontend::parser::parse;
use once_cell::sync::Lazy;

/// Bundled source of the built-in core components
const CORE_SOURCE: &str = r#"
model $Model {}

model $Request {
    headers?: map[string]string,
    body?: any,
}

model $Response {
    status: int,
    headers?: map[string]string,
    body?: any,
}

model $Error {
    code: int,
    message: string,
    detail?: any,
}
"#;

/// Bundled source of the `$std` standard-library package
const STD_SOURCE: &str = r#"
typedef Json;

model Time {
    seconds: long,
    nanos: int,
}

model Url {
    scheme: string,
    host: string,
    path: string,
    query?: map[string]string,
}
"#;

/// The shared builtin context: core components + the `$std` library
static BUILTINS: Lazy<Package> = Lazy::new(|| {
    let std = package_from_source(STD_SOURCE, "<builtin:$std>");
    let mut context = package_from_source(CORE_SOURCE, "<builtin>");
    context.libraries.insert("$std".to_string(), std);
    context
});

/// The builtin package context
pub fn builtin_context() -> &'static Package {
    &BUILTINS
}

/// Build a package by parsing bundled source and registering its members
fn package_from_source(source: &str, file: &str) -> Package {
    let parsed = parse(source, file).expect("bundled builtin source must parse");
    let mut package = Package::new();
    for declaration in declarations_of(&parsed.module) {
        package = package.with_component(declaration);
    }
    package
}
