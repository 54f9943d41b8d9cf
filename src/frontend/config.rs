//! Frontend configuration
//!
//! Options for the `check` convenience entry. Serializable so build tooling
//! can keep them in a project file.

use serde::{Deserialize, Serialize};

/// Diagnostic verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum DiagLevel {
    /// No diagnostics
    None,
    /// Errors only
    #[default]
    Errors,
    /// Everything, including debug traces
    All,
}

/// Frontend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Diagnostic verbosity
    #[serde(default)]
    pub diagnostic_level: DiagLevel,

    /// Whether `check` resolves against the builtin package context
    #[serde(default = "default_true")]
    pub builtin_modules: bool,

    /// Emit per-phase debug logging
    #[serde(default)]
    pub verbose: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            diagnostic_level: DiagLevel::default(),
            builtin_modules: true,
            verbose: false,
        }
    }
}

impl FrontendConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable the builtin package context
    #[inline]
    pub fn without_builtins(mut self) -> Self {
        self.builtin_modules = false;
        self
    }

    /// Enable per-phase debug logging
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Whether diagnostics should be shown at all
    #[inline]
    pub fn should_show_diagnostics(&self) -> bool {
        self.diagnostic_level >= DiagLevel::Errors
    }
}
