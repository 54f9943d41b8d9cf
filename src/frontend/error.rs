//! Fault taxonomy for the frontend
//!
//! The first fault aborts the current file and propagates to the caller;
//! there is no recovery or multi-error batching. All user-facing faults
//! carry the caret diagnostic block; `Configuration` is a caller defect
//! and carries none.

use crate::util::diagnostic::Diagnostic;

/// A fault raised while lexing, parsing or resolving one file
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    /// Malformed character-level input
    #[error("{0}")]
    Lexical(Diagnostic),
    /// Token stream does not match any grammar alternative
    #[error("{0}")]
    Syntax(Diagnostic),
    /// Import or type reference cannot be satisfied against the package context
    #[error("{0}")]
    Resolution(Diagnostic),
    /// Duplicate reserved-word registration (a defect in the caller, not user input)
    #[error("reserved word '{0}' registered twice")]
    Configuration(String),
}

impl CompileError {
    /// The diagnostic block, if this fault kind carries one
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            CompileError::Lexical(d)
            | CompileError::Syntax(d)
            | CompileError::Resolution(d) => Some(d),
            CompileError::Configuration(_) => None,
        }
    }

    /// The fault message without the location block
    pub fn message(&self) -> String {
        match self {
            CompileError::Lexical(d)
            | CompileError::Syntax(d)
            | CompileError::Resolution(d) => d.message.clone(),
            CompileError::Configuration(word) => {
                format!("reserved word '{word}' registered twice")
            }
        }
    }
}

/// Frontend result alias
pub type CompileResult<T> = Result<T, CompileError>;
