//! Abstract Syntax Tree types
//!
//! Every non-terminal node owns the inclusive `[first, last]` token-index
//! range it consumed plus a source span. Sibling ranges are disjoint and
//! ascending; a parent's range contains every child's range.

pub use crate::frontend::lexer::tokens::{Number, Primitive};
use crate::util::span::Span;
use serde::Serialize;

/// Inclusive token-index range spanned by a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TokenRange {
    /// Index of the first token the node consumed
    pub first: usize,
    /// Index of the last token the node consumed
    pub last: usize,
}

impl TokenRange {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Whether this range fully contains `other`
    pub fn contains(&self, other: &TokenRange) -> bool {
        self.first <= other.first && other.last <= self.last
    }

    /// Whether this range ends before `other` starts
    pub fn precedes(&self, other: &TokenRange) -> bool {
        self.last < other.first
    }
}

/// A parsed source file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    /// File name the module was parsed from
    pub file: String,
    pub imports: Vec<Import>,
    pub extends: Option<Extends>,
    pub members: Vec<Member>,
    pub range: TokenRange,
    pub span: Span,
}

/// `import ALIAS [;]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    pub alias: String,
    pub range: TokenRange,
    pub span: Span,
}

/// `extends ALIAS` or `extends ALIAS.ID`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extends {
    pub base: String,
    /// Component of a qualified base, for `extends ALIAS.ID`
    pub component: Option<String>,
    pub range: TokenRange,
    pub span: Span,
}

/// A module member, chosen by leading keyword
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Member {
    Const(ConstDecl),
    Typedef(TypedefDecl),
    Model(ModelDecl),
    Enum(EnumDecl),
    Api(ApiDecl),
    Rpc(RpcDecl),
    TypeAlias(TypeAlias),
    Init(InitDecl),
    Function(FunctionDecl),
}

impl Member {
    pub fn range(&self) -> TokenRange {
        match self {
            Member::Const(m) => m.range,
            Member::Typedef(m) => m.range,
            Member::Model(m) => m.range,
            Member::Enum(m) => m.range,
            Member::Api(m) => m.range,
            Member::Rpc(m) => m.range,
            Member::TypeAlias(m) => m.range,
            Member::Init(m) => m.range,
            Member::Function(m) => m.range,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Member::Const(m) => m.span,
            Member::Typedef(m) => m.span,
            Member::Model(m) => m.span,
            Member::Enum(m) => m.span,
            Member::Api(m) => m.span,
            Member::Rpc(m) => m.span,
            Member::TypeAlias(m) => m.span,
            Member::Init(m) => m.span,
            Member::Function(m) => m.span,
        }
    }

    /// Declared name, where the member has one
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Const(m) => Some(&m.name),
            Member::Typedef(m) => Some(&m.name),
            Member::Model(m) => Some(&m.name),
            Member::Enum(m) => Some(&m.name),
            Member::Api(m) => Some(&m.name),
            Member::Rpc(m) => Some(&m.name),
            Member::TypeAlias(m) => Some(&m.name),
            Member::Init(_) => None,
            Member::Function(m) => Some(&m.name),
        }
    }
}

/// `const NAME = (string|number|bool) ;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstDecl {
    pub name: String,
    pub value: Expr,
    pub range: TokenRange,
    pub span: Span,
}

/// `typedef NAME [;]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedefDecl {
    pub name: String,
    pub range: TokenRange,
    pub span: Span,
}

/// `model NAME [=] modelBody [;]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDecl {
    pub name: String,
    pub body: ModelBody,
    pub range: TokenRange,
    pub span: Span,
}

/// `{` comma-separated fields `}` with optional trailing comma
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelBody {
    pub fields: Vec<ModelField>,
    pub range: TokenRange,
    pub span: Span,
}

/// `name ['?'] : fieldValue attrs`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelField {
    pub name: String,
    /// `?` marks the field optional; omitting it means required
    pub optional: bool,
    pub value: FieldValue,
    pub attrs: Vec<Attr>,
    pub range: TokenRange,
    pub span: Span,
}

/// The right-hand side of a model field; nests without bound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    /// Anonymous submodel
    Body(ModelBody),
    Array {
        item: Box<FieldValue>,
        range: TokenRange,
        span: Span,
    },
    Map {
        key: TypeNode,
        value: Box<FieldValue>,
        range: TokenRange,
        span: Span,
    },
    Plain(TypeNode),
}

impl FieldValue {
    pub fn range(&self) -> TokenRange {
        match self {
            FieldValue::Body(b) => b.range,
            FieldValue::Array { range, .. } => *range,
            FieldValue::Map { range, .. } => *range,
            FieldValue::Plain(t) => t.range(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            FieldValue::Body(b) => b.span,
            FieldValue::Array { span, .. } => *span,
            FieldValue::Map { span, .. } => *span,
            FieldValue::Plain(t) => t.span(),
        }
    }
}

/// `name=literal` attribute pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attr {
    pub name: String,
    pub value: Expr,
    pub range: TokenRange,
    pub span: Span,
}

/// `enum NAME : TYPE enumBody [;]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDecl {
    pub name: String,
    pub base: TypeNode,
    pub body: EnumBody,
    pub range: TokenRange,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumBody {
    pub fields: Vec<EnumField>,
    pub range: TokenRange,
    pub span: Span,
}

/// `name(enumAttr {, enumAttr})`; the attribute list is mandatory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumField {
    pub name: String,
    pub attrs: Vec<Attr>,
    pub range: TokenRange,
    pub span: Span,
}

/// `api NAME(params): type object [returns object] [runtime object]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiDecl {
    pub name: String,
    pub params: Params,
    pub return_type: TypeNode,
    pub config: ObjectLit,
    pub returns: Option<ObjectLit>,
    pub runtime: Option<ObjectLit>,
    pub range: TokenRange,
    pub span: Span,
}

/// `rpc NAME(params): type object`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcDecl {
    pub name: String,
    pub params: Params,
    pub return_type: TypeNode,
    pub config: ObjectLit,
    pub range: TokenRange,
    pub span: Span,
}

/// `type VID = type [;]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeAlias {
    /// Virtual-identifier name, without the `@`
    pub name: String,
    pub target: TypeNode,
    pub range: TokenRange,
    pub span: Span,
}

/// `init(params) (block|;)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitDecl {
    pub params: Params,
    pub body: Option<Block>,
    pub range: TokenRange,
    pub span: Span,
}

/// `[static][async] function NAME(params)[throws]: type (block|;)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub name: String,
    pub is_static: bool,
    pub is_async: bool,
    pub params: Params,
    pub throws: bool,
    pub return_type: TypeNode,
    pub body: Option<Block>,
    pub range: TokenRange,
    pub span: Span,
}

/// Parenthesized parameter list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Params {
    pub items: Vec<Param>,
    pub range: TokenRange,
    pub span: Span,
}

/// `name [: type]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: Option<TypeNode>,
    pub range: TokenRange,
    pub span: Span,
}

/// A type-position node; each shape is a distinct tagged result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeNode {
    /// `[ type ]`
    Array {
        item: Box<TypeNode>,
        range: TokenRange,
        span: Span,
    },
    /// `map[ type ] type`
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
        range: TokenRange,
        span: Span,
    },
    /// `ID(.ID)*` local (sub)model/module reference with its dotted path
    Local {
        path: Vec<String>,
        range: TokenRange,
        span: Span,
    },
    /// Bare primitive type keyword
    Primitive {
        kind: Primitive,
        range: TokenRange,
        span: Span,
    },
    /// `PACKAGE_ID.ID` externally-qualified component
    External {
        package: String,
        component: String,
        range: TokenRange,
        span: Span,
    },
}

impl TypeNode {
    pub fn range(&self) -> TokenRange {
        match self {
            TypeNode::Array { range, .. }
            | TypeNode::Map { range, .. }
            | TypeNode::Local { range, .. }
            | TypeNode::Primitive { range, .. }
            | TypeNode::External { range, .. } => *range,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TypeNode::Array { span, .. }
            | TypeNode::Map { span, .. }
            | TypeNode::Local { span, .. }
            | TypeNode::Primitive { span, .. }
            | TypeNode::External { span, .. } => *span,
        }
    }
}

/// `{ statements }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub range: TokenRange,
    pub span: Span,
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Try(TryStmt),
    Break { range: TokenRange, span: Span },
    Retry { range: TokenRange, span: Span },
    Return {
        value: Option<Expr>,
        range: TokenRange,
        span: Span,
    },
    Throw {
        value: ObjectLit,
        range: TokenRange,
        span: Span,
    },
    Var(VarStmt),
    Expr {
        expr: Expr,
        range: TokenRange,
        span: Span,
    },
}

impl Stmt {
    pub fn range(&self) -> TokenRange {
        match self {
            Stmt::If(s) => s.range,
            Stmt::While(s) => s.range,
            Stmt::For(s) => s.range,
            Stmt::Try(s) => s.range,
            Stmt::Break { range, .. }
            | Stmt::Retry { range, .. }
            | Stmt::Return { range, .. }
            | Stmt::Throw { range, .. }
            | Stmt::Expr { range, .. } => *range,
            Stmt::Var(s) => s.range,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Try(s) => s.span,
            Stmt::Break { span, .. }
            | Stmt::Retry { span, .. }
            | Stmt::Return { span, .. }
            | Stmt::Throw { span, .. }
            | Stmt::Expr { span, .. } => *span,
            Stmt::Var(s) => s.span,
        }
    }
}

/// `if(expr) block {else if(expr) block}* [else block]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    /// Condition/body arms in source order; the first is the `if`, the rest
    /// are `else if`
    pub arms: Vec<(Expr, Block)>,
    pub else_block: Option<Block>,
    pub range: TokenRange,
    pub span: Span,
}

/// `while(expr) block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
    pub range: TokenRange,
    pub span: Span,
}

/// `for(var ID : expr) block`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStmt {
    pub var: String,
    pub iter: Expr,
    pub body: Block,
    pub range: TokenRange,
    pub span: Span,
}

/// `try block (catch(ID) block)? (finally block)?`; omitting both faults
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TryStmt {
    pub body: Block,
    pub catch: Option<(String, Block)>,
    pub finally: Option<Block>,
    pub range: TokenRange,
    pub span: Span,
}

/// `var ID [: type] = expr;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarStmt {
    pub name: String,
    pub ty: Option<TypeNode>,
    pub value: Expr,
    pub range: TokenRange,
    pub span: Span,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Str {
        value: String,
        range: TokenRange,
        span: Span,
    },
    Num {
        value: Number,
        range: TokenRange,
        span: Span,
    },
    Bool {
        value: bool,
        range: TokenRange,
        span: Span,
    },
    Null { range: TokenRange, span: Span },
    Template {
        parts: Vec<TemplatePart>,
        range: TokenRange,
        span: Span,
    },
    /// `new ID(args)` module instance
    NewModule {
        name: String,
        args: Vec<Expr>,
        range: TokenRange,
        span: Span,
    },
    /// `new ID[.ID...][{fields}]` (possibly externally-qualified) model literal
    NewModel {
        path: Vec<String>,
        body: Option<ObjectLit>,
        range: TokenRange,
        span: Span,
    },
    /// Identifier- or virtual-identifier-led suffix chain with optional
    /// terminal assignment
    Chain {
        base: ChainBase,
        links: Vec<ChainLink>,
        assign: Option<Box<Expr>>,
        range: TokenRange,
        span: Span,
    },
    Object(ObjectLit),
    Array {
        items: Vec<Expr>,
        range: TokenRange,
        span: Span,
    },
    Not {
        expr: Box<Expr>,
        range: TokenRange,
        span: Span,
    },
    Super {
        args: Vec<Expr>,
        range: TokenRange,
        span: Span,
    },
    /// `&&`/`||`; the right operand re-enters the top-level expression
    /// parser, so mixed chains nest right-to-left
    Logical {
        op: LogicalOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        range: TokenRange,
        span: Span,
    },
}

impl Expr {
    pub fn range(&self) -> TokenRange {
        match self {
            Expr::Str { range, .. }
            | Expr::Num { range, .. }
            | Expr::Bool { range, .. }
            | Expr::Null { range, .. }
            | Expr::Template { range, .. }
            | Expr::NewModule { range, .. }
            | Expr::NewModel { range, .. }
            | Expr::Chain { range, .. }
            | Expr::Array { range, .. }
            | Expr::Not { range, .. }
            | Expr::Super { range, .. }
            | Expr::Logical { range, .. } => *range,
            Expr::Object(o) => o.range,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Expr::Str { span, .. }
            | Expr::Num { span, .. }
            | Expr::Bool { span, .. }
            | Expr::Null { span, .. }
            | Expr::Template { span, .. }
            | Expr::NewModule { span, .. }
            | Expr::NewModel { span, .. }
            | Expr::Chain { span, .. }
            | Expr::Array { span, .. }
            | Expr::Not { span, .. }
            | Expr::Super { span, .. }
            | Expr::Logical { span, .. } => *span,
            Expr::Object(o) => o.span,
        }
    }
}

/// One part of a backtick template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TemplatePart {
    Text {
        value: String,
        /// Whether this is the final literal segment
        tail: bool,
    },
    Expr(Expr),
}

/// Head of a suffix chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChainBase {
    Id(String),
    VirtualId(String),
}

/// One suffix of a chain, in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChainLink {
    /// `.ID` property access
    Member { name: String },
    /// `[expr]` map/index access
    Index { index: Expr },
    /// `(args)` call
    Call { args: Vec<Expr> },
}

/// `{ (key=expr | ...expr) , ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectLit {
    pub entries: Vec<ObjectEntry>,
    pub range: TokenRange,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ObjectEntry {
    Pair { key: String, value: Expr },
    Spread { value: Expr },
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOp {
    And,
    Or,
}
