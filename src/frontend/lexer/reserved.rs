//! Reserved-word table
//!
//! Built once at lexer construction from a static list; registering the
//! same spelling twice is a construction-time fault, not user input.

use super::tokens::{Primitive, TokenKind};
use crate::frontend::error::{CompileError, CompileResult};
use std::collections::HashMap;

/// The standard reserved words of the language
pub static RESERVED: &[(&str, TokenKind)] = &[
    // Module-level keywords
    ("import", TokenKind::KwImport),
    ("extends", TokenKind::KwExtends),
    ("const", TokenKind::KwConst),
    ("typedef", TokenKind::KwTypedef),
    ("model", TokenKind::KwModel),
    ("enum", TokenKind::KwEnum),
    ("api", TokenKind::KwApi),
    ("rpc", TokenKind::KwRpc),
    ("function", TokenKind::KwFunction),
    ("init", TokenKind::KwInit),
    ("static", TokenKind::KwStatic),
    ("async", TokenKind::KwAsync),
    ("throws", TokenKind::KwThrows),
    ("returns", TokenKind::KwReturns),
    ("runtime", TokenKind::KwRuntime),
    ("type", TokenKind::KwType),
    ("map", TokenKind::KwMap),
    // Statement and expression keywords
    ("new", TokenKind::KwNew),
    ("var", TokenKind::KwVar),
    ("if", TokenKind::KwIf),
    ("else", TokenKind::KwElse),
    ("while", TokenKind::KwWhile),
    ("for", TokenKind::KwFor),
    ("try", TokenKind::KwTry),
    ("catch", TokenKind::KwCatch),
    ("finally", TokenKind::KwFinally),
    ("break", TokenKind::KwBreak),
    ("retry", TokenKind::KwRetry),
    ("return", TokenKind::KwReturn),
    ("throw", TokenKind::KwThrow),
    ("super", TokenKind::KwSuper),
    // Literals
    ("true", TokenKind::BoolLiteral(true)),
    ("false", TokenKind::BoolLiteral(false)),
    ("null", TokenKind::NullLiteral),
    // Primitive types
    ("any", TokenKind::Type(Primitive::Any)),
    ("bool", TokenKind::Type(Primitive::Bool)),
    ("bytes", TokenKind::Type(Primitive::Bytes)),
    ("int", TokenKind::Type(Primitive::Int)),
    ("long", TokenKind::Type(Primitive::Long)),
    ("float", TokenKind::Type(Primitive::Float)),
    ("double", TokenKind::Type(Primitive::Double)),
    ("string", TokenKind::Type(Primitive::String)),
    ("void", TokenKind::Type(Primitive::Void)),
];

/// Immutable spelling → tag mapping
#[derive(Debug, Clone)]
pub struct ReservedWords {
    table: HashMap<&'static str, TokenKind>,
}

impl ReservedWords {
    /// Build a table from an entry list, faulting on duplicate spellings
    pub fn from_entries(entries: &[(&'static str, TokenKind)]) -> CompileResult<Self> {
        let mut table = HashMap::with_capacity(entries.len());
        for (word, kind) in entries {
            if table.insert(*word, kind.clone()).is_some() {
                return Err(CompileError::Configuration((*word).to_string()));
            }
        }
        Ok(Self { table })
    }

    /// Build the standard table
    pub fn standard() -> CompileResult<Self> {
        Self::from_entries(RESERVED)
    }

    /// Look up an identifier spelling
    pub fn lookup(&self, spelling: &str) -> Option<&TokenKind> {
        self.table.get(spelling)
    }
}
