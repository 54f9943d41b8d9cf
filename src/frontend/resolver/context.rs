//! Package context
//!
//! The externally owned registry the resolver consults: importable packages
//! keyed by alias plus the locally declared components of the current
//! package. A package recursively exposes the same two mappings, which is
//! what makes one-level-deep qualified lookups (`alias.Component`) work.
//! The core only reads this; all mutation stays in the per-file `Usage`.

use indexmap::IndexMap;

/// Kind of a registered declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Model,
    Enum,
    Typedef,
    Const,
    Api,
    Rpc,
}

/// A component registered in a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
}

impl Declaration {
    pub fn new(name: impl Into<String>, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// An importable package: libraries by alias, components by name
#[derive(Debug, Clone, Default)]
pub struct Package {
    pub libraries: IndexMap<String, Package>,
    pub components: IndexMap<String, Declaration>,
}

/// The registry a single file is resolved against; same shape as a package
pub type PackageContext = Package;

impl Package {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component declaration
    pub fn with_component(mut self, declaration: Declaration) -> Self {
        self.components
            .insert(declaration.name.clone(), declaration);
        self
    }

    /// Register an importable library under its alias
    pub fn with_library(mut self, alias: impl Into<String>, package: Package) -> Self {
        self.libraries.insert(alias.into(), package);
        self
    }
}
