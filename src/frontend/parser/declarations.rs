//! Module-level grammar
//!
//! A module is zero-or-more imports, an optional `extends` clause, then a
//! body of members chosen by leading keyword. Annotations ahead of any
//! member are routed into the comment index by `bump()` and re-associated
//! later through `front`/`back` queries.

use super::ast::{
    ApiDecl, Attr, ConstDecl, EnumBody, EnumDecl, EnumField, Expr, Extends, FieldValue,
    FunctionDecl, Import, InitDecl, Member, ModelBody, ModelDecl, Module, Param, Params, RpcDecl,
    TypeAlias, TypedefDecl,
};
use super::expressions::parse_object;
use super::state::ParserState;
use super::statements::parse_block;
use super::types::parse_type;
use crate::frontend::error::CompileResult;
use crate::frontend::lexer::tokens::TokenKind;

pub(crate) fn parse_module(p: &mut ParserState<'_>, file: &str) -> CompileResult<Module> {
    let (first, start) = p.open();

    let mut imports = Vec::new();
    while p.at(&TokenKind::KwImport) {
        imports.push(parse_import(p)?);
    }

    let extends = if p.at(&TokenKind::KwExtends) {
        Some(parse_extends(p)?)
    } else {
        None
    };

    let mut members = Vec::new();
    while !p.at_end() {
        members.push(parse_member(p)?);
    }

    let (range, span) = p.close(first, start);
    Ok(Module {
        file: file.to_string(),
        imports,
        extends,
        members,
        range,
        span,
    })
}

fn parse_import(p: &mut ParserState<'_>) -> CompileResult<Import> {
    let (first, start) = p.open();
    p.bump()?;
    let alias = p.expect_identifier("a package alias after 'import'")?;
    p.eat(&TokenKind::Semicolon)?;
    let (range, span) = p.close(first, start);
    Ok(Import { alias, range, span })
}

fn parse_extends(p: &mut ParserState<'_>) -> CompileResult<Extends> {
    let (first, start) = p.open();
    p.bump()?;
    let base = p.expect_identifier("a module name after 'extends'")?;
    let component = if p.eat(&TokenKind::Dot)? {
        Some(p.expect_identifier("a component name after '.'")?)
    } else {
        None
    };
    p.eat(&TokenKind::Semicolon)?;
    let (range, span) = p.close(first, start);
    Ok(Extends {
        base,
        component,
        range,
        span,
    })
}

pub(crate) fn parse_member(p: &mut ParserState<'_>) -> CompileResult<Member> {
    match p.look().kind {
        TokenKind::KwConst => parse_const(p).map(Member::Const),
        TokenKind::KwTypedef => parse_typedef(p).map(Member::Typedef),
        TokenKind::KwModel => parse_model(p).map(Member::Model),
        TokenKind::KwEnum => parse_enum(p).map(Member::Enum),
        TokenKind::KwApi => parse_api(p).map(Member::Api),
        TokenKind::KwRpc => parse_rpc(p).map(Member::Rpc),
        TokenKind::KwType => parse_type_alias(p).map(Member::TypeAlias),
        TokenKind::KwInit => parse_init(p).map(Member::Init),
        TokenKind::KwStatic | TokenKind::KwAsync | TokenKind::KwFunction => {
            parse_function(p).map(Member::Function)
        }
        _ => Err(p.fault(
            "'const', 'typedef', 'model', 'enum', 'api', 'rpc', 'type', 'init' or 'function'",
        )),
    }
}

fn parse_const(p: &mut ParserState<'_>) -> CompileResult<ConstDecl> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("a constant name after 'const'")?;
    p.expect(&TokenKind::Eq, "'=' after the constant name")?;
    let value = parse_literal(p)?;
    p.expect(&TokenKind::Semicolon, "';' after the constant")?;
    let (range, span) = p.close(first, start);
    Ok(ConstDecl {
        name,
        value,
        range,
        span,
    })
}

fn parse_typedef(p: &mut ParserState<'_>) -> CompileResult<TypedefDecl> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("a type name after 'typedef'")?;
    p.eat(&TokenKind::Semicolon)?;
    let (range, span) = p.close(first, start);
    Ok(TypedefDecl { name, range, span })
}

fn parse_model(p: &mut ParserState<'_>) -> CompileResult<ModelDecl> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("a model name after 'model'")?;
    p.eat(&TokenKind::Eq)?;
    let body = parse_model_body(p)?;
    p.eat(&TokenKind::Semicolon)?;
    let (range, span) = p.close(first, start);
    Ok(ModelDecl {
        name,
        body,
        range,
        span,
    })
}

pub(crate) fn parse_model_body(p: &mut ParserState<'_>) -> CompileResult<ModelBody> {
    let (first, start) = p.open();
    p.expect(&TokenKind::LBrace, "'{' to open the model body")?;

    let mut fields = Vec::new();
    if !p.at(&TokenKind::RBrace) {
        loop {
            fields.push(parse_model_field(p)?);
            if p.eat(&TokenKind::Comma)? {
                if p.at(&TokenKind::RBrace) {
                    break;
                }
                continue;
            }
            break;
        }
    }

    p.expect(&TokenKind::RBrace, "'}' to close the model body")?;
    let (range, span) = p.close(first, start);
    Ok(ModelBody {
        fields,
        range,
        span,
    })
}

fn parse_model_field(p: &mut ParserState<'_>) -> CompileResult<super::ast::ModelField> {
    let (first, start) = p.open();
    let name = p.expect_identifier("a field name")?;
    let optional = p.eat(&TokenKind::Question)?;
    p.expect(&TokenKind::Colon, "':' after the field name")?;
    let value = parse_field_value(p)?;
    let attrs = parse_attrs(p)?;
    let (range, span) = p.close(first, start);
    Ok(super::ast::ModelField {
        name,
        optional,
        value,
        attrs,
        range,
        span,
    })
}

/// A field's right-hand side: nested model body, array, map, or plain type
fn parse_field_value(p: &mut ParserState<'_>) -> CompileResult<FieldValue> {
    match p.look().kind {
        TokenKind::LBrace => Ok(FieldValue::Body(parse_model_body(p)?)),
        TokenKind::LBracket => {
            let (first, start) = p.open();
            p.bump()?;
            let item = parse_field_value(p)?;
            p.expect(&TokenKind::RBracket, "']' to close the array")?;
            let (range, span) = p.close(first, start);
            Ok(FieldValue::Array {
                item: Box::new(item),
                range,
                span,
            })
        }
        TokenKind::KwMap => {
            let (first, start) = p.open();
            p.bump()?;
            p.expect(&TokenKind::LBracket, "'[' after 'map'")?;
            let key = parse_type(p)?;
            p.expect(&TokenKind::RBracket, "']' to close the map key type")?;
            let value = parse_field_value(p)?;
            let (range, span) = p.close(first, start);
            Ok(FieldValue::Map {
                key,
                value: Box::new(value),
                range,
                span,
            })
        }
        _ => Ok(FieldValue::Plain(parse_type(p)?)),
    }
}

/// Optional parenthesized `name=literal` attribute list
fn parse_attrs(p: &mut ParserState<'_>) -> CompileResult<Vec<Attr>> {
    if !p.at(&TokenKind::LParen) {
        return Ok(Vec::new());
    }
    parse_attr_pairs(p)
}

/// `( name=literal {, name=literal} )`
fn parse_attr_pairs(p: &mut ParserState<'_>) -> CompileResult<Vec<Attr>> {
    p.expect(&TokenKind::LParen, "'(' to open the attribute list")?;

    let mut attrs = Vec::new();
    if !p.at(&TokenKind::RParen) {
        loop {
            let (first, start) = p.open();
            let name = p.expect_identifier("an attribute name")?;
            p.expect(&TokenKind::Eq, "'=' after the attribute name")?;
            let value = parse_literal(p)?;
            let (range, span) = p.close(first, start);
            attrs.push(Attr {
                name,
                value,
                range,
                span,
            });
            if !p.eat(&TokenKind::Comma)? {
                break;
            }
        }
    }

    p.expect(&TokenKind::RParen, "')' to close the attribute list")?;
    Ok(attrs)
}

fn parse_enum(p: &mut ParserState<'_>) -> CompileResult<EnumDecl> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("an enum name after 'enum'")?;
    p.expect(&TokenKind::Colon, "':' before the enum base type")?;
    let base = parse_type(p)?;
    let body = parse_enum_body(p)?;
    p.eat(&TokenKind::Semicolon)?;
    let (range, span) = p.close(first, start);
    Ok(EnumDecl {
        name,
        base,
        body,
        range,
        span,
    })
}

fn parse_enum_body(p: &mut ParserState<'_>) -> CompileResult<EnumBody> {
    let (first, start) = p.open();
    p.expect(&TokenKind::LBrace, "'{' to open the enum body")?;

    let mut fields = Vec::new();
    if !p.at(&TokenKind::RBrace) {
        loop {
            let (field_first, field_start) = p.open();
            let name = p.expect_identifier("an enum field name")?;
            if !p.at(&TokenKind::LParen) {
                return Err(p.fault("'(' to open the enum field attributes"));
            }
            let attrs = parse_attr_pairs(p)?;
            let (range, span) = p.close(field_first, field_start);
            fields.push(EnumField {
                name,
                attrs,
                range,
                span,
            });
            if !p.eat(&TokenKind::Comma)? {
                break;
            }
        }
    }

    p.expect(&TokenKind::RBrace, "'}' to close the enum body")?;
    let (range, span) = p.close(first, start);
    Ok(EnumBody {
        fields,
        range,
        span,
    })
}

fn parse_api(p: &mut ParserState<'_>) -> CompileResult<ApiDecl> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("an api name after 'api'")?;
    let params = parse_params(p)?;
    p.expect(&TokenKind::Colon, "':' before the api return type")?;
    let return_type = parse_type(p)?;
    let config = parse_object(p)?;

    let returns = if p.eat(&TokenKind::KwReturns)? {
        Some(parse_object(p)?)
    } else {
        None
    };
    let runtime = if p.eat(&TokenKind::KwRuntime)? {
        Some(parse_object(p)?)
    } else {
        None
    };

    let (range, span) = p.close(first, start);
    Ok(ApiDecl {
        name,
        params,
        return_type,
        config,
        returns,
        runtime,
        range,
        span,
    })
}

fn parse_rpc(p: &mut ParserState<'_>) -> CompileResult<RpcDecl> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("an rpc name after 'rpc'")?;
    let params = parse_params(p)?;
    p.expect(&TokenKind::Colon, "':' before the rpc return type")?;
    let return_type = parse_type(p)?;
    let config = parse_object(p)?;
    let (range, span) = p.close(first, start);
    Ok(RpcDecl {
        name,
        params,
        return_type,
        config,
        range,
        span,
    })
}

fn parse_type_alias(p: &mut ParserState<'_>) -> CompileResult<TypeAlias> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_virtual_id("a virtual identifier after 'type'")?;
    p.expect(&TokenKind::Eq, "'=' after the alias name")?;
    let target = parse_type(p)?;
    p.eat(&TokenKind::Semicolon)?;
    let (range, span) = p.close(first, start);
    Ok(TypeAlias {
        name,
        target,
        range,
        span,
    })
}

fn parse_init(p: &mut ParserState<'_>) -> CompileResult<InitDecl> {
    let (first, start) = p.open();
    p.bump()?;
    let params = parse_params(p)?;
    let body = if p.eat(&TokenKind::Semicolon)? {
        None
    } else {
        Some(parse_block(p)?)
    };
    let (range, span) = p.close(first, start);
    Ok(InitDecl {
        params,
        body,
        range,
        span,
    })
}

fn parse_function(p: &mut ParserState<'_>) -> CompileResult<FunctionDecl> {
    let (first, start) = p.open();
    let is_static = p.eat(&TokenKind::KwStatic)?;
    let is_async = p.eat(&TokenKind::KwAsync)?;
    p.expect(&TokenKind::KwFunction, "'function' after the modifiers")?;
    let name = p.expect_identifier("a function name after 'function'")?;
    let params = parse_params(p)?;
    let throws = p.eat(&TokenKind::KwThrows)?;
    p.expect(&TokenKind::Colon, "':' before the return type")?;
    let return_type = parse_type(p)?;
    let body = if p.eat(&TokenKind::Semicolon)? {
        None
    } else {
        Some(parse_block(p)?)
    };
    let (range, span) = p.close(first, start);
    Ok(FunctionDecl {
        name,
        is_static,
        is_async,
        params,
        throws,
        return_type,
        body,
        range,
        span,
    })
}

fn parse_params(p: &mut ParserState<'_>) -> CompileResult<Params> {
    let (first, start) = p.open();
    p.expect(&TokenKind::LParen, "'(' to open the parameter list")?;

    let mut items = Vec::new();
    if !p.at(&TokenKind::RParen) {
        loop {
            let (param_first, param_start) = p.open();
            let name = p.expect_identifier("a parameter name")?;
            let ty = if p.eat(&TokenKind::Colon)? {
                Some(parse_type(p)?)
            } else {
                None
            };
            let (range, span) = p.close(param_first, param_start);
            items.push(Param {
                name,
                ty,
                range,
                span,
            });
            if !p.eat(&TokenKind::Comma)? {
                break;
            }
        }
    }

    p.expect(&TokenKind::RParen, "')' to close the parameter list")?;
    let (range, span) = p.close(first, start);
    Ok(Params { items, range, span })
}

/// `string | number | bool` literal for const values and attributes
fn parse_literal(p: &mut ParserState<'_>) -> CompileResult<Expr> {
    let (first, start) = p.open();
    match p.look().kind.clone() {
        TokenKind::StringLiteral(value) => {
            p.bump()?;
            let (range, span) = p.close(first, start);
            Ok(Expr::Str { value, range, span })
        }
        TokenKind::Number(value) => {
            p.bump()?;
            let (range, span) = p.close(first, start);
            Ok(Expr::Num { value, range, span })
        }
        TokenKind::BoolLiteral(value) => {
            p.bump()?;
            let (range, span) = p.close(first, start);
            Ok(Expr::Bool { value, range, span })
        }
        _ => Err(p.fault("a string, number or bool value")),
    }
}
