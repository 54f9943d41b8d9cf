//! Type grammar
//!
//! `[ type ]` array · `map[ type ] type` map · `ID(.ID)*` local reference ·
//! bare primitive keyword · `PACKAGE_ID.ID` externally-qualified component.
//! Package aliases are `$`-named, so a `$`-identifier followed by `.`
//! parses as an external qualification; every other dotted path is local.

use super::ast::TypeNode;
use super::state::ParserState;
use crate::frontend::error::CompileResult;
use crate::frontend::lexer::tokens::TokenKind;

pub(crate) fn parse_type(p: &mut ParserState<'_>) -> CompileResult<TypeNode> {
    let (first, start) = p.open();

    match p.look().kind.clone() {
        TokenKind::LBracket => {
            p.bump()?;
            let item = parse_type(p)?;
            p.expect(&TokenKind::RBracket, "']' to close the array type")?;
            let (range, span) = p.close(first, start);
            Ok(TypeNode::Array {
                item: Box::new(item),
                range,
                span,
            })
        }
        TokenKind::KwMap => {
            p.bump()?;
            p.expect(&TokenKind::LBracket, "'[' after 'map'")?;
            let key = parse_type(p)?;
            p.expect(&TokenKind::RBracket, "']' to close the map key type")?;
            let value = parse_type(p)?;
            let (range, span) = p.close(first, start);
            Ok(TypeNode::Map {
                key: Box::new(key),
                value: Box::new(value),
                range,
                span,
            })
        }
        TokenKind::Type(kind) => {
            p.bump()?;
            let (range, span) = p.close(first, start);
            Ok(TypeNode::Primitive { kind, range, span })
        }
        TokenKind::Identifier(name) => {
            p.bump()?;
            if name.starts_with('$') && p.at(&TokenKind::Dot) {
                p.bump()?;
                let component = p.expect_identifier("a component name after '.'")?;
                let (range, span) = p.close(first, start);
                Ok(TypeNode::External {
                    package: name,
                    component,
                    range,
                    span,
                })
            } else {
                let mut path = vec![name];
                while p.at(&TokenKind::Dot) {
                    p.bump()?;
                    path.push(p.expect_identifier("a name after '.'")?);
                }
                let (range, span) = p.close(first, start);
                Ok(TypeNode::Local { path, range, span })
            }
        }
        _ => Err(p.fault("a type")),
    }
}
