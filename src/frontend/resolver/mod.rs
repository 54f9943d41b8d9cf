//! Import / type resolver
//!
//! A second pass over the parsed module validating imports and type
//! references against a caller-supplied package context. One `Usage`
//! accumulator lives for exactly one `resolve` call and is handed back to
//! the caller; nothing outlives the file being resolved.

pub mod builtin;
pub mod context;

pub use context::{DeclKind, Declaration, Package, PackageContext};

use crate::frontend::error::{CompileError, CompileResult};
use crate::frontend::parser::ast::{
    Block, FieldValue, Import, Member, ModelBody, Module, Params, Stmt, TypeNode,
};
use crate::frontend::parser::ParseOutput;
use crate::util::diagnostic::Diagnostic;
use crate::util::span::{Position, SourceFile};
use indexmap::{IndexMap, IndexSet};

/// Per-file accumulators; write-once-per-key, discarded after the call
#[derive(Debug, Clone, Default)]
pub struct Usage<'ctx> {
    /// Resolved imports, alias → package, each alias inserted at most once
    pub dependencies: IndexMap<String, &'ctx Package>,
    /// Primitive type keywords referenced by the file
    pub used_types: IndexSet<String>,
    /// Local components referenced by the file
    pub used_components: IndexSet<String>,
    /// Externally-qualified components referenced per imported alias
    pub used_packages: IndexMap<String, IndexSet<String>>,
}

/// Resolve a parsed file against a package context
pub fn resolve<'ctx>(
    parsed: &ParseOutput,
    context: &'ctx PackageContext,
) -> CompileResult<Usage<'ctx>> {
    Resolver::new(context, &parsed.source).run(&parsed.module)
}

/// The component declarations a module contributes to its package
///
/// This is what the manifest loader registers into `components` for each
/// file of a package; `check` uses it to make single files self-contained.
pub fn declarations_of(module: &Module) -> Vec<Declaration> {
    module
        .members
        .iter()
        .filter_map(|member| {
            let kind = match member {
                Member::Model(_) => DeclKind::Model,
                Member::Enum(_) => DeclKind::Enum,
                Member::Typedef(_) => DeclKind::Typedef,
                Member::Const(_) => DeclKind::Const,
                Member::Api(_) => DeclKind::Api,
                Member::Rpc(_) => DeclKind::Rpc,
                Member::TypeAlias(_) | Member::Init(_) | Member::Function(_) => return None,
            };
            member.name().map(|name| Declaration::new(name, kind))
        })
        .collect()
}

/// One file's resolution pass
pub struct Resolver<'a, 'ctx> {
    context: &'ctx PackageContext,
    source: &'a SourceFile,
    usage: Usage<'ctx>,
}

impl<'a, 'ctx> Resolver<'a, 'ctx> {
    pub fn new(context: &'ctx PackageContext, source: &'a SourceFile) -> Self {
        Self {
            context,
            source,
            usage: Usage::default(),
        }
    }

    /// Run the full pass: imports first, then every type position
    pub fn run(mut self, module: &Module) -> CompileResult<Usage<'ctx>> {
        tracing::debug!("resolving {}", module.file);
        self.resolve_imports(&module.imports)?;
        for member in &module.members {
            self.resolve_member(member)?;
        }
        tracing::debug!(
            "resolution complete: {} dependencies, {} components",
            self.usage.dependencies.len(),
            self.usage.used_components.len()
        );
        Ok(self.usage)
    }

    fn fault(&self, message: String, position: Position) -> CompileError {
        CompileError::Resolution(Diagnostic::at(message, self.source, position))
    }

    /// Validate imports in source order and register them as dependencies
    pub fn resolve_imports(&mut self, imports: &[Import]) -> CompileResult<()> {
        for import in imports {
            let alias = &import.alias;
            let Some(package) = self.context.libraries.get(alias) else {
                return Err(self.fault(
                    format!("package '{alias}' is not defined in manifest"),
                    import.span.start,
                ));
            };
            if self.usage.dependencies.contains_key(alias) {
                return Err(self.fault(
                    format!("package id '{alias}' has been imported"),
                    import.span.start,
                ));
            }
            self.usage.dependencies.insert(alias.clone(), package);
            self.usage
                .used_packages
                .insert(alias.clone(), IndexSet::new());
        }
        Ok(())
    }

    /// Validate one type-position node, recording what it references
    pub fn resolve_type(&mut self, ty: &TypeNode) -> CompileResult<()> {
        match ty {
            TypeNode::Primitive { kind, .. } => {
                self.usage.used_types.insert(kind.as_str().to_string());
                Ok(())
            }
            TypeNode::Local { path, span, .. } => {
                let name = &path[0];
                if !self.context.components.contains_key(name) {
                    return Err(
                        self.fault(format!("type '{name}' is undefined"), span.start)
                    );
                }
                self.usage.used_components.insert(name.clone());
                Ok(())
            }
            TypeNode::Array { item, .. } => self.resolve_type(item),
            TypeNode::Map { key, value, .. } => {
                self.resolve_type(key)?;
                self.resolve_type(value)
            }
            TypeNode::External {
                package,
                component,
                span,
                ..
            } => {
                let Some(dependency) = self.usage.dependencies.get(package) else {
                    return Err(self.fault(
                        format!("the package '{package}' is un-imported"),
                        span.start,
                    ));
                };
                if !dependency.components.contains_key(component) {
                    return Err(self.fault(
                        format!("'{component}' is undefined in '{package}'"),
                        span.start,
                    ));
                }
                self.usage
                    .used_packages
                    .entry(package.clone())
                    .or_default()
                    .insert(component.clone());
                Ok(())
            }
        }
    }

    fn resolve_member(&mut self, member: &Member) -> CompileResult<()> {
        match member {
            Member::Const(_) | Member::Typedef(_) => Ok(()),
            Member::Model(decl) => self.resolve_model_body(&decl.body),
            Member::Enum(decl) => self.resolve_type(&decl.base),
            Member::Api(decl) => {
                self.resolve_params(&decl.params)?;
                self.resolve_type(&decl.return_type)
            }
            Member::Rpc(decl) => {
                self.resolve_params(&decl.params)?;
                self.resolve_type(&decl.return_type)
            }
            Member::TypeAlias(decl) => self.resolve_type(&decl.target),
            Member::Init(decl) => {
                self.resolve_params(&decl.params)?;
                match &decl.body {
                    Some(body) => self.resolve_block(body),
                    None => Ok(()),
                }
            }
            Member::Function(decl) => {
                self.resolve_params(&decl.params)?;
                self.resolve_type(&decl.return_type)?;
                match &decl.body {
                    Some(body) => self.resolve_block(body),
                    None => Ok(()),
                }
            }
        }
    }

    fn resolve_model_body(&mut self, body: &ModelBody) -> CompileResult<()> {
        for field in &body.fields {
            self.resolve_field_value(&field.value)?;
        }
        Ok(())
    }

    fn resolve_field_value(&mut self, value: &FieldValue) -> CompileResult<()> {
        match value {
            FieldValue::Body(body) => self.resolve_model_body(body),
            FieldValue::Array { item, .. } => self.resolve_field_value(item),
            FieldValue::Map { key, value, .. } => {
                self.resolve_type(key)?;
                self.resolve_field_value(value)
            }
            FieldValue::Plain(ty) => self.resolve_type(ty),
        }
    }

    fn resolve_params(&mut self, params: &Params) -> CompileResult<()> {
        for param in &params.items {
            if let Some(ty) = &param.ty {
                self.resolve_type(ty)?;
            }
        }
        Ok(())
    }

    /// Walk a body for `var` annotations; they are the only type positions
    /// statements can carry
    fn resolve_block(&mut self, block: &Block) -> CompileResult<()> {
        for stmt in &block.stmts {
            match stmt {
                Stmt::Var(decl) => {
                    if let Some(ty) = &decl.ty {
                        self.resolve_type(ty)?;
                    }
                }
                Stmt::If(s) => {
                    for (_, body) in &s.arms {
                        self.resolve_block(body)?;
                    }
                    if let Some(body) = &s.else_block {
                        self.resolve_block(body)?;
                    }
                }
                Stmt::While(s) => self.resolve_block(&s.body)?,
                Stmt::For(s) => self.resolve_block(&s.body)?,
                Stmt::Try(s) => {
                    self.resolve_block(&s.body)?;
                    if let Some((_, body)) = &s.catch {
                        self.resolve_block(body)?;
                    }
                    if let Some(body) = &s.finally {
                        self.resolve_block(body)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}
