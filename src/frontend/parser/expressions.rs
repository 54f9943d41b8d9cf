//! Expression grammar
//!
//! Literals, `new` constructs, identifier-led suffix chains with terminal
//! assignment, object/map and array literals, `!expr`, `super(args)`, and
//! logical `&&`/`||`. The logical operators call back into the top-level
//! expression parser for their right operand, so mixed chains nest
//! right-to-left rather than climbing precedence.

use super::ast::{ChainBase, ChainLink, Expr, LogicalOp, ObjectEntry, ObjectLit, TemplatePart};
use super::state::ParserState;
use crate::frontend::error::CompileResult;
use crate::frontend::lexer::tokens::TokenKind;

pub(crate) fn parse_expr(p: &mut ParserState<'_>) -> CompileResult<Expr> {
    let (first, start) = p.open();
    let lhs = parse_unary(p)?;

    let op = match p.look().kind {
        TokenKind::AndAnd => Some(LogicalOp::And),
        TokenKind::OrOr => Some(LogicalOp::Or),
        _ => None,
    };
    let Some(op) = op else {
        return Ok(lhs);
    };
    p.bump()?;
    let rhs = parse_expr(p)?;
    let (range, span) = p.close(first, start);
    Ok(Expr::Logical {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        range,
        span,
    })
}

fn parse_unary(p: &mut ParserState<'_>) -> CompileResult<Expr> {
    if p.at(&TokenKind::Not) {
        let (first, start) = p.open();
        p.bump()?;
        let expr = parse_unary(p)?;
        let (range, span) = p.close(first, start);
        return Ok(Expr::Not {
            expr: Box::new(expr),
            range,
            span,
        });
    }
    parse_primary(p)
}

fn parse_primary(p: &mut ParserState<'_>) -> CompileResult<Expr> {
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
        TokenKind::NullLiteral => {
            p.bump()?;
            let (range, span) = p.close(first, start);
            Ok(Expr::Null { range, span })
        }
        TokenKind::TemplateString { .. } => parse_template(p),
        TokenKind::KwNew => parse_new(p),
        TokenKind::Identifier(_) | TokenKind::VirtualId(_) => parse_chain(p),
        TokenKind::LBrace => Ok(Expr::Object(parse_object(p)?)),
        TokenKind::LBracket => parse_array(p),
        TokenKind::KwSuper => {
            p.bump()?;
            let args = parse_args(p)?;
            let (range, span) = p.close(first, start);
            Ok(Expr::Super { args, range, span })
        }
        _ => Err(p.fault("an expression")),
    }
}

/// Backtick template: the lexer already split it into literal segments and
/// interpolation boundaries, and resumes the literal itself after each
/// closing `}`, so the parser only ever alternates segment/expression.
fn parse_template(p: &mut ParserState<'_>) -> CompileResult<Expr> {
    let (first, start) = p.open();
    let mut parts = Vec::new();

    loop {
        match p.look().kind.clone() {
            TokenKind::TemplateString { text, tail } => {
                p.bump()?;
                parts.push(TemplatePart::Text { value: text, tail });
                if tail {
                    break;
                }
                let expr = parse_expr(p)?;
                parts.push(TemplatePart::Expr(expr));
            }
            _ => return Err(p.fault("'}' to close the template interpolation")),
        }
    }

    let (range, span) = p.close(first, start);
    Ok(Expr::Template { parts, range, span })
}

/// `new ID(args)` builds a module instance; `new ID[.ID...][{fields}]`
/// builds a (possibly externally-qualified) model literal.
fn parse_new(p: &mut ParserState<'_>) -> CompileResult<Expr> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("a module or model name after 'new'")?;

    if p.at(&TokenKind::LParen) {
        let args = parse_args(p)?;
        let (range, span) = p.close(first, start);
        return Ok(Expr::NewModule {
            name,
            args,
            range,
            span,
        });
    }

    let mut path = vec![name];
    while p.at(&TokenKind::Dot) {
        p.bump()?;
        path.push(p.expect_identifier("a name after '.'")?);
    }
    let body = if p.at(&TokenKind::LBrace) {
        Some(parse_object(p)?)
    } else {
        None
    };
    let (range, span) = p.close(first, start);
    Ok(Expr::NewModel {
        path,
        body,
        range,
        span,
    })
}

/// Identifier- or virtual-identifier-led chain of `.ID`, `[expr]` and
/// `(args)` suffixes in any order, with an optional terminal `= expr`.
fn parse_chain(p: &mut ParserState<'_>) -> CompileResult<Expr> {
    let (first, start) = p.open();

    let base = match p.look().kind.clone() {
        TokenKind::Identifier(name) => {
            p.bump()?;
            ChainBase::Id(name)
        }
        TokenKind::VirtualId(name) => {
            p.bump()?;
            ChainBase::VirtualId(name)
        }
        _ => return Err(p.fault("an identifier")),
    };

    let mut links = Vec::new();
    loop {
        match p.look().kind {
            TokenKind::Dot => {
                p.bump()?;
                let name = p.expect_identifier("a property name after '.'")?;
                links.push(ChainLink::Member { name });
            }
            TokenKind::LBracket => {
                p.bump()?;
                let index = parse_expr(p)?;
                p.expect(&TokenKind::RBracket, "']' to close the index")?;
                links.push(ChainLink::Index { index });
            }
            TokenKind::LParen => {
                let args = parse_args(p)?;
                links.push(ChainLink::Call { args });
            }
            _ => break,
        }
    }

    let assign = if p.at(&TokenKind::Eq) {
        p.bump()?;
        Some(Box::new(parse_expr(p)?))
    } else {
        None
    };

    let (range, span) = p.close(first, start);
    Ok(Expr::Chain {
        base,
        links,
        assign,
        range,
        span,
    })
}

/// `{ (key=expr | ...expr) , ... }` with an optional trailing comma
pub(crate) fn parse_object(p: &mut ParserState<'_>) -> CompileResult<ObjectLit> {
    let (first, start) = p.open();
    p.expect(&TokenKind::LBrace, "'{' to open the object")?;

    let mut entries = Vec::new();
    if !p.at(&TokenKind::RBrace) {
        loop {
            if p.at(&TokenKind::Dot) {
                p.bump()?;
                p.expect(&TokenKind::Dot, "'...' for a spread entry")?;
                p.expect(&TokenKind::Dot, "'...' for a spread entry")?;
                let value = parse_expr(p)?;
                entries.push(ObjectEntry::Spread { value });
            } else {
                let key = p.expect_identifier("a key name")?;
                p.expect(&TokenKind::Eq, "'=' after the key")?;
                let value = parse_expr(p)?;
                entries.push(ObjectEntry::Pair { key, value });
            }
            if p.eat(&TokenKind::Comma)? {
                if p.at(&TokenKind::RBrace) {
                    break;
                }
                continue;
            }
            break;
        }
    }

    p.expect(&TokenKind::RBrace, "'}' to close the object")?;
    let (range, span) = p.close(first, start);
    Ok(ObjectLit {
        entries,
        range,
        span,
    })
}

fn parse_array(p: &mut ParserState<'_>) -> CompileResult<Expr> {
    let (first, start) = p.open();
    p.bump()?;

    let mut items = Vec::new();
    if !p.at(&TokenKind::RBracket) {
        loop {
            items.push(parse_expr(p)?);
            if !p.eat(&TokenKind::Comma)? {
                break;
            }
        }
    }

    p.expect(&TokenKind::RBracket, "']' to close the array")?;
    let (range, span) = p.close(first, start);
    Ok(Expr::Array { items, range, span })
}

/// Parenthesized comma-separated argument list
pub(crate) fn parse_args(p: &mut ParserState<'_>) -> CompileResult<Vec<Expr>> {
    p.expect(&TokenKind::LParen, "'(' to open the argument list")?;

    let mut args = Vec::new();
    if !p.at(&TokenKind::RParen) {
        loop {
            args.push(parse_expr(p)?);
            if !p.eat(&TokenKind::Comma)? {
                break;
            }
        }
    }

    p.expect(&TokenKind::RParen, "')' to close the argument list")?;
    Ok(args)
}
