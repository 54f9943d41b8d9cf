//! Statement grammar

use super::ast::{Block, ForStmt, IfStmt, Stmt, TryStmt, VarStmt, WhileStmt};
use super::expressions::{parse_expr, parse_object};
use super::state::ParserState;
use super::types::parse_type;
use crate::frontend::error::CompileResult;
use crate::frontend::lexer::tokens::TokenKind;

pub(crate) fn parse_block(p: &mut ParserState<'_>) -> CompileResult<Block> {
    let (first, start) = p.open();
    p.expect(&TokenKind::LBrace, "'{' to open the block")?;

    let mut stmts = Vec::new();
    while !p.at(&TokenKind::RBrace) && !p.at_end() {
        stmts.push(parse_stmt(p)?);
    }

    p.expect(&TokenKind::RBrace, "'}' to close the block")?;
    let (range, span) = p.close(first, start);
    Ok(Block { stmts, range, span })
}

pub(crate) fn parse_stmt(p: &mut ParserState<'_>) -> CompileResult<Stmt> {
    match p.look().kind {
        TokenKind::KwIf => parse_if(p),
        TokenKind::KwWhile => parse_while(p),
        TokenKind::KwFor => parse_for(p),
        TokenKind::KwTry => parse_try(p),
        TokenKind::KwBreak => {
            let (first, start) = p.open();
            p.bump()?;
            p.expect(&TokenKind::Semicolon, "';' after 'break'")?;
            let (range, span) = p.close(first, start);
            Ok(Stmt::Break { range, span })
        }
        TokenKind::KwRetry => {
            let (first, start) = p.open();
            p.bump()?;
            p.expect(&TokenKind::Semicolon, "';' after 'retry'")?;
            let (range, span) = p.close(first, start);
            Ok(Stmt::Retry { range, span })
        }
        TokenKind::KwReturn => {
            let (first, start) = p.open();
            p.bump()?;
            let value = if p.at(&TokenKind::Semicolon) {
                None
            } else {
                Some(parse_expr(p)?)
            };
            p.expect(&TokenKind::Semicolon, "';' after 'return'")?;
            let (range, span) = p.close(first, start);
            Ok(Stmt::Return { value, range, span })
        }
        TokenKind::KwThrow => {
            let (first, start) = p.open();
            p.bump()?;
            let value = parse_object(p)?;
            p.expect(&TokenKind::Semicolon, "';' after 'throw'")?;
            let (range, span) = p.close(first, start);
            Ok(Stmt::Throw { value, range, span })
        }
        TokenKind::KwVar => parse_var(p),
        _ => {
            let (first, start) = p.open();
            let expr = parse_expr(p)?;
            p.expect(&TokenKind::Semicolon, "';' after the expression")?;
            let (range, span) = p.close(first, start);
            Ok(Stmt::Expr { expr, range, span })
        }
    }
}

fn parse_if(p: &mut ParserState<'_>) -> CompileResult<Stmt> {
    let (first, start) = p.open();
    p.bump()?;

    let mut arms = Vec::new();
    p.expect(&TokenKind::LParen, "'(' after 'if'")?;
    let cond = parse_expr(p)?;
    p.expect(&TokenKind::RParen, "')' to close the condition")?;
    arms.push((cond, parse_block(p)?));

    let mut else_block = None;
    while p.at(&TokenKind::KwElse) {
        p.bump()?;
        if p.at(&TokenKind::KwIf) {
            p.bump()?;
            p.expect(&TokenKind::LParen, "'(' after 'if'")?;
            let cond = parse_expr(p)?;
            p.expect(&TokenKind::RParen, "')' to close the condition")?;
            arms.push((cond, parse_block(p)?));
        } else {
            else_block = Some(parse_block(p)?);
            break;
        }
    }

    let (range, span) = p.close(first, start);
    Ok(Stmt::If(IfStmt {
        arms,
        else_block,
        range,
        span,
    }))
}

fn parse_while(p: &mut ParserState<'_>) -> CompileResult<Stmt> {
    let (first, start) = p.open();
    p.bump()?;
    p.expect(&TokenKind::LParen, "'(' after 'while'")?;
    let cond = parse_expr(p)?;
    p.expect(&TokenKind::RParen, "')' to close the condition")?;
    let body = parse_block(p)?;
    let (range, span) = p.close(first, start);
    Ok(Stmt::While(WhileStmt {
        cond,
        body,
        range,
        span,
    }))
}

fn parse_for(p: &mut ParserState<'_>) -> CompileResult<Stmt> {
    let (first, start) = p.open();
    p.bump()?;
    p.expect(&TokenKind::LParen, "'(' after 'for'")?;
    p.expect(&TokenKind::KwVar, "'var' to declare the loop variable")?;
    let var = p.expect_identifier("a loop variable name")?;
    p.expect(&TokenKind::Colon, "':' before the iterated expression")?;
    let iter = parse_expr(p)?;
    p.expect(&TokenKind::RParen, "')' to close the loop header")?;
    let body = parse_block(p)?;
    let (range, span) = p.close(first, start);
    Ok(Stmt::For(ForStmt {
        var,
        iter,
        body,
        range,
        span,
    }))
}

fn parse_try(p: &mut ParserState<'_>) -> CompileResult<Stmt> {
    let (first, start) = p.open();
    p.bump()?;
    let body = parse_block(p)?;

    let catch = if p.at(&TokenKind::KwCatch) {
        p.bump()?;
        p.expect(&TokenKind::LParen, "'(' after 'catch'")?;
        let name = p.expect_identifier("a catch variable name")?;
        p.expect(&TokenKind::RParen, "')' after the catch variable")?;
        Some((name, parse_block(p)?))
    } else {
        None
    };

    let finally = if p.at(&TokenKind::KwFinally) {
        p.bump()?;
        Some(parse_block(p)?)
    } else {
        None
    };

    if catch.is_none() && finally.is_none() {
        return Err(p.fault_message("try expects catch or finally"));
    }

    let (range, span) = p.close(first, start);
    Ok(Stmt::Try(TryStmt {
        body,
        catch,
        finally,
        range,
        span,
    }))
}

fn parse_var(p: &mut ParserState<'_>) -> CompileResult<Stmt> {
    let (first, start) = p.open();
    p.bump()?;
    let name = p.expect_identifier("a variable name after 'var'")?;
    let ty = if p.eat(&TokenKind::Colon)? {
        Some(parse_type(p)?)
    } else {
        None
    };
    p.expect(&TokenKind::Eq, "'=' to initialize the variable")?;
    let value = parse_expr(p)?;
    p.expect(&TokenKind::Semicolon, "';' after the declaration")?;
    let (range, span) = p.close(first, start);
    Ok(Stmt::Var(VarStmt {
        name,
        ty,
        value,
        range,
        span,
    }))
}
