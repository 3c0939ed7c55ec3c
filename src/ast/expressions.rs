use crate::symtab::symtab::{SymIndex, REAL_TYPE, VOID_TYPE};
use crate::Span;

use super::ast::{BinaryOp, Expr, RelationOp, UnaryOp};

/// Integer Literal Expression
/// Represents an integer literal in the AST. Its type is always integer.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

impl IntegerExpr {
    pub fn new(span: Span, value: i64) -> Self {
        IntegerExpr { value, span }
    }
}

/// Real Literal Expression
/// Represents a real literal in the AST. Its type is always real.
#[derive(Debug, Clone)]
pub struct RealExpr {
    pub value: f64,
    pub span: Span,
}

impl RealExpr {
    pub fn new(span: Span, value: f64) -> Self {
        RealExpr { value, span }
    }
}

/// Identifier Expression
/// Represents a use of a declared symbol. `sym` is the slot the parser
/// resolved the name to; it is a lookup key, not an owning link.
#[derive(Debug, Clone)]
pub struct IdExpr {
    pub sym: SymIndex,
    pub ty: SymIndex,
    pub span: Span,
}

impl IdExpr {
    pub fn new(span: Span, sym: SymIndex) -> Self {
        IdExpr {
            sym,
            ty: VOID_TYPE,
            span,
        }
    }
}

/// Indexed Expression
/// Represents one element of an array variable: `a[i]`.
#[derive(Debug, Clone)]
pub struct IndexedExpr {
    pub id: IdExpr,
    pub index: Box<Expr>,
    pub ty: SymIndex,
    pub span: Span,
}

impl IndexedExpr {
    pub fn new(span: Span, id: IdExpr, index: Box<Expr>) -> Self {
        IndexedExpr {
            id,
            index,
            ty: VOID_TYPE,
            span,
        }
    }
}

/// Binary Operation Expression
/// Represents the arithmetic and logical operators. The child links are
/// owned slots: the checker may wrap a child in a cast and the optimizer
/// may swap a child for a folded literal.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub ty: SymIndex,
    pub span: Span,
}

impl BinaryExpr {
    pub fn new(span: Span, op: BinaryOp, left: Box<Expr>, right: Box<Expr>) -> Self {
        BinaryExpr {
            op,
            left,
            right,
            ty: VOID_TYPE,
            span,
        }
    }
}

/// Relation Expression
/// Represents the comparison operators. Checks to integer (1 = true,
/// 0 = false) and is never folded itself, though its children may be.
#[derive(Debug, Clone)]
pub struct RelationExpr {
    pub op: RelationOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub ty: SymIndex,
    pub span: Span,
}

impl RelationExpr {
    pub fn new(span: Span, op: RelationOp, left: Box<Expr>, right: Box<Expr>) -> Self {
        RelationExpr {
            op,
            left,
            right,
            ty: VOID_TYPE,
            span,
        }
    }
}

/// Unary Operation Expression
/// Represents negation and logical NOT.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub ty: SymIndex,
    pub span: Span,
}

impl UnaryExpr {
    pub fn new(span: Span, op: UnaryOp, operand: Box<Expr>) -> Self {
        UnaryExpr {
            op,
            operand,
            ty: VOID_TYPE,
            span,
        }
    }
}

/// Cast Expression
/// Wraps a subexpression whose value must be converted from integer to
/// real at evaluation time. The checker synthesizes these; the parser
/// never produces one.
#[derive(Debug, Clone)]
pub struct CastExpr {
    pub operand: Box<Expr>,
    /// Target type of the conversion.
    pub ty: SymIndex,
    pub span: Span,
}

impl CastExpr {
    pub fn new(span: Span, operand: Box<Expr>) -> Self {
        CastExpr {
            operand,
            ty: REAL_TYPE,
            span,
        }
    }
}

/// Call Expression
/// Represents a function call in expression position. Procedure calls are
/// statements (`CallStmt`); this variant synthesizes the callee's declared
/// return type.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub id: IdExpr,
    pub args: Option<ExprList>,
    pub ty: SymIndex,
    pub span: Span,
}

impl CallExpr {
    pub fn new(span: Span, id: IdExpr, args: Option<ExprList>) -> Self {
        CallExpr {
            id,
            args,
            ty: VOID_TYPE,
            span,
        }
    }
}

/// Expression List
/// Actual-parameter lists, linked back to front: `preceding` holds every
/// earlier argument, `last` the final one. A call with no arguments has no
/// list at all.
#[derive(Debug, Clone)]
pub struct ExprList {
    pub preceding: Option<Box<ExprList>>,
    pub last: Box<Expr>,
    pub span: Span,
}

impl ExprList {
    pub fn new(span: Span, last: Expr) -> Self {
        ExprList {
            preceding: None,
            last: Box::new(last),
            span,
        }
    }

    /// Appends an expression, turning the existing list into the new
    /// node's `preceding` chain.
    pub fn cons(self, span: Span, last: Expr) -> Self {
        ExprList {
            preceding: Some(Box::new(self)),
            last: Box::new(last),
            span,
        }
    }
}
