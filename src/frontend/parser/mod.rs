//! Parser module
//!
//! Recursive descent over the lexer's token stream with one-token lookahead.
//! Every node carries the exact token-index range and source span it
//! consumed; comments skipped along the way land in the comment index,
//! which is returned alongside the AST.

pub mod ast;
pub mod comments;
pub mod declarations;
pub mod expressions;
pub mod state;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;

pub use ast::Module;
pub use comments::CommentIndex;
pub use state::ParserState;

use crate::frontend::error::CompileResult;
use crate::util::span::SourceFile;

/// Result of parsing one file
#[derive(Debug, Clone)]
pub struct ParseOutput {
    /// The source the module was parsed from (kept for diagnostics)
    pub source: SourceFile,
    pub module: Module,
    pub comments: CommentIndex,
}

/// Parse source text into a position-tracked module AST
pub fn parse(source: &str, file: &str) -> CompileResult<ParseOutput> {
    tracing::debug!("parsing {file}");

    let source = SourceFile::new(file, source);
    let mut state = ParserState::new(&source)?;
    let module = declarations::parse_module(&mut state, file)?;
    let comments = state.into_comments();

    tracing::debug!(
        "parsing complete: {} imports, {} members, {} comments",
        module.imports.len(),
        module.members.len(),
        comments.len()
    );
    Ok(ParseOutput {
        source,
        module,
        comments,
    })
}
