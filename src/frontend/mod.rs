//! Tangram compiler frontend
//!
//! Lexer → parser → resolver, strictly downward: the lexer feeds the
//! parser; the parser's AST plus its comment index feed the resolver and
//! any external semantic pass. Processing one file is one uninterrupted
//! synchronous call chain.

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod resolver;

pub use config::FrontendConfig;
pub use error::{CompileError, CompileResult};
pub use parser::{parse, CommentIndex, Module, ParseOutput};
pub use resolver::{resolve, Package, PackageContext, Usage};

use tracing::debug;

/// Parse and resolve one file in a single call
///
/// The file's own declarations are registered into the context first, so a
/// single self-contained contract checks without a manifest loader.
/// Resolves against the builtin package context unless the configuration
/// disables it.
pub fn check(source: &str, file: &str, config: &FrontendConfig) -> crate::Result<ParseOutput> {
    if config.verbose {
        debug!("checking {file}");
    }

    let parsed = parse(source, file)?;
    let mut context = if config.builtin_modules {
        resolver::builtin::builtin_context().clone()
    } else {
        PackageContext::new()
    };
    for declaration in resolver::declarations_of(&parsed.module) {
        context = context.with_component(declaration);
    }
    resolve(&parsed, &context)?;

    if config.verbose {
        debug!("check complete for {file}");
    }
    Ok(parsed)
}
