//! eapc-par - AST node definitions
//!
//! One closed sum type per syntactic layer (declarations, statements,
//! expressions), matching exhaustively in the evaluator rather than relying
//! on a class hierarchy with downcasts.

use eapc_util::{Span, Symbol};

/// A whole source file: one `ALGORITHM ... BEGIN ... END`.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: Symbol,
    pub constants: Vec<ConstantDecl>,
    pub variables: Vec<VariableDecl>,
    pub subroutines: Vec<Subroutine>,
    pub body: Block,
    pub span: Span,
}

pub type Block = Vec<Stmt>;

#[derive(Debug, Clone)]
pub struct ConstantDecl {
    pub name: Symbol,
    pub init: Expr,
    pub span: Span,
}

/// Scalar type tags (§3 "VariableDeclaration").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Integer,
    Real,
    Character,
    StringType,
    Boolean,
}

/// A declared variable's type: a scalar tag, or an array of one.
#[derive(Debug, Clone)]
pub enum VarType {
    Scalar(ScalarType),
    Array(ArrayType),
}

/// `ARRAY [e1..e2, e3..e4, ...] OF <scalar>`. Array-of-array is rejected by
/// the parser, so the element type is always scalar (§4.2 "Types").
#[derive(Debug, Clone)]
pub struct ArrayType {
    pub element: ScalarType,
    pub dimensions: Vec<(Expr, Expr)>,
}

#[derive(Debug, Clone)]
pub struct VariableDecl {
    pub name: Symbol,
    pub ty: VarType,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    ByValue,
    ByReference,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: Symbol,
    pub ty: VarType,
    pub mode: ParamMode,
}

#[derive(Debug, Clone)]
pub enum Subroutine {
    Function(FunctionDecl),
    Procedure(ProcedureDecl),
}

impl Subroutine {
    pub fn name(&self) -> Symbol {
        match self {
            Subroutine::Function(f) => f.name,
            Subroutine::Procedure(p) => p.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: Symbol,
    pub return_type: ScalarType,
    pub params: Vec<Parameter>,
    pub locals: Vec<VariableDecl>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ProcedureDecl {
    pub name: Symbol,
    pub params: Vec<Parameter>,
    pub locals: Vec<VariableDecl>,
    pub body: Block,
    pub span: Span,
}

/// An assignable location: a bare name, or a name with index expressions.
#[derive(Debug, Clone)]
pub enum LValue {
    Ident(Symbol, Span),
    Index(Symbol, Vec<Expr>, Span),
}

impl LValue {
    pub fn name(&self) -> Symbol {
        match self {
            LValue::Ident(name, _) | LValue::Index(name, _, _) => *name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LValue::Ident(_, span) | LValue::Index(_, _, span) => *span,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Assign {
        target: LValue,
        value: Expr,
    },
    Print {
        args: Vec<Expr>,
        span: Span,
    },
    Read {
        targets: Vec<LValue>,
        span: Span,
    },
    If {
        cond: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },
    For {
        var: Symbol,
        start: Expr,
        end: Expr,
        step: Expr,
        body: Block,
        span: Span,
    },
    While {
        cond: Expr,
        body: Block,
    },
    /// Desugared REPEAT ... UNTIL: a distinct node (not a textual body
    /// duplication) so the body is evaluated unconditionally once, then
    /// while `cond` is false (§4.2, §9 "REPEAT-UNTIL desugaring").
    RepeatUntil {
        body: Block,
        cond: Expr,
    },
    /// `CALCULATE name(args...)` or a bare `name(args...)` used as a
    /// statement — both are procedure calls (§4.2 "Statements").
    Call {
        callee: Symbol,
        args: Vec<Expr>,
        span: Span,
    },
}

#[derive(Debug, Clone)]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Str(Symbol),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    IDiv,
    Mod,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    And,
    Or,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Literal, Span),
    Identifier(Symbol, Span),
    ArrayAccess {
        name: Symbol,
        indices: Vec<Expr>,
        span: Span,
    },
    Call {
        callee: Symbol,
        args: Vec<Expr>,
        span: Span,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
        span: Span,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(_, span)
            | Expr::Identifier(_, span)
            | Expr::ArrayAccess { span, .. }
            | Expr::Call { span, .. }
            | Expr::Unary { span, .. }
            | Expr::Binary { span, .. } => *span,
        }
    }
}
