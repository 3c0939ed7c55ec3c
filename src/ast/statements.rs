use crate::symtab::symtab::SymIndex;
use crate::Span;

use super::ast::{Expr, Lvalue, Stmt};
use super::expressions::{ExprList, IdExpr};

/// Procedure Call Statement
/// Represents a call in statement position. The callee must be a
/// procedure; value-returning calls live in expression position instead.
#[derive(Debug, Clone)]
pub struct CallStmt {
    pub id: IdExpr,
    pub args: Option<ExprList>,
    pub span: Span,
}

/// Assignment Statement
/// Represents `target := expression`.
#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub lhs: Lvalue,
    pub rhs: Expr,
    pub span: Span,
}

/// While Statement
/// The predicate must check to integer; the body may be empty.
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Option<StmtList>,
    pub span: Span,
}

/// If Statement
/// Condition plus then-body, an optional elsif chain and an optional
/// else-body.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub body: Option<StmtList>,
    pub elsif_list: Option<ElsifList>,
    pub else_body: Option<StmtList>,
    pub span: Span,
}

/// Return Statement
/// A bare `return` inside a procedure, or `return expr` inside a function.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// Procedure Head
/// Declaration marker for later phases; carries the procedure's symbol.
/// Not checkable, not optimizable.
#[derive(Debug, Clone)]
pub struct ProcedureHeadStmt {
    pub sym: SymIndex,
    pub span: Span,
}

/// Function Head
/// Declaration marker for later phases; carries the function's symbol.
/// Not checkable, not optimizable.
#[derive(Debug, Clone)]
pub struct FunctionHeadStmt {
    pub sym: SymIndex,
    pub span: Span,
}

/// Statement List
/// A block body, linked back to front: `preceding` holds every earlier
/// statement, `last` the final one. An empty body is the absence of a
/// list, not an empty list.
#[derive(Debug, Clone)]
pub struct StmtList {
    pub preceding: Option<Box<StmtList>>,
    pub last: Box<Stmt>,
    pub span: Span,
}

impl StmtList {
    pub fn new(span: Span, last: Stmt) -> Self {
        StmtList {
            preceding: None,
            last: Box::new(last),
            span,
        }
    }

    /// Appends a statement, turning the existing list into the new node's
    /// `preceding` chain.
    pub fn cons(self, span: Span, last: Stmt) -> Self {
        StmtList {
            preceding: Some(Box::new(self)),
            last: Box::new(last),
            span,
        }
    }
}

/// Elsif Clause
/// One `elsif condition then body` arm of an if statement.
#[derive(Debug, Clone)]
pub struct Elsif {
    pub condition: Expr,
    pub body: Option<StmtList>,
    pub span: Span,
}

/// Elsif List
/// The elsif arms of an if statement, linked back to front.
#[derive(Debug, Clone)]
pub struct ElsifList {
    pub preceding: Option<Box<ElsifList>>,
    pub last: Elsif,
    pub span: Span,
}

impl ElsifList {
    pub fn new(span: Span, last: Elsif) -> Self {
        ElsifList {
            preceding: None,
            last,
            span,
        }
    }

    pub fn cons(self, span: Span, last: Elsif) -> Self {
        ElsifList {
            preceding: Some(Box::new(self)),
            last,
            span,
        }
    }
}
