//! Lexer module
//!
//! Character stream → token stream. One token per `scan()` call, no internal
//! buffering of output; comments and annotations are tokens, not whitespace.

pub mod reserved;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export types
pub use reserved::{ReservedWords, RESERVED};
pub use tokenizer::Lexer;
pub use tokens::{Number, Primitive, Token, TokenKind};

use crate::frontend::error::CompileResult;
use crate::util::span::SourceFile;

/// Tokenize source text into the full token vector (terminal token included)
///
/// Convenience for tests, benches and downstream tooling; the parser pulls
/// tokens one at a time instead.
pub fn tokenize(source: &str) -> CompileResult<Vec<Token>> {
    tracing::debug!("lexing {} bytes", source.len());

    let file = SourceFile::new("<tokenize>", source);
    let mut lexer = Lexer::new(&file)?;
    let mut tokens = Vec::new();

    loop {
        let token = lexer.scan()?;
        let done = matches!(token.kind, TokenKind::Eof);
        tokens.push(token);
        if done {
            break;
        }
    }

    tracing::debug!("lexing complete, {} tokens", tokens.len());
    Ok(tokens)
}
