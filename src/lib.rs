//! Tangram Interface Definition Language
//!
//! The compiler frontend for Tangram, a statically-typed interface
//! definition language for service contracts: models, enums, apis, rpc
//! declarations, modules with single inheritance, and imported external
//! packages. The frontend turns raw source text into a fully
//! position-tracked AST and validates imports and type references against
//! a package context; downstream tooling turns the AST into client code.
//!
//! # Example
//!
//! ```tangram
//! import $std;
//!
//! model Greeting {
//!     text: string,
//!     at: $std.Time,
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/tangram-idl")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

pub use frontend::{check, parse, resolve, CompileError, FrontendConfig};

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Tangram";
