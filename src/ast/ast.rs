use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

use crate::symtab::symtab::{SymIndex, INTEGER_TYPE, REAL_TYPE};
use crate::Span;

use super::expressions::{
    BinaryExpr, CallExpr, CastExpr, IdExpr, IndexedExpr, IntegerExpr, RealExpr, RelationExpr,
    UnaryExpr,
};
use super::statements::{
    AssignStmt, CallStmt, FunctionHeadStmt, IfStmt, ProcedureHeadStmt, ReturnStmt, WhileStmt,
};

/// Binary arithmetic and logical operators. These are the foldable
/// operations: when both operands are compile-time constants the optimizer
/// replaces the whole node with a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mult,
    /// Real division. Always produces a real, so the checker casts integer
    /// operands up before this node is evaluated or folded.
    Divide,
    And,
    Or,
    /// Integer division (`DIV`). Integer operands only.
    IntDiv,
    /// Remainder (`MOD`). Integer operands only.
    Mod,
}

lazy_static! {
    /// Source spellings of the binary operators, used when a diagnostic
    /// names the operator.
    pub static ref OPERATOR_NAMES: HashMap<BinaryOp, &'static str> = {
        let mut map = HashMap::new();
        map.insert(BinaryOp::Add, "+");
        map.insert(BinaryOp::Sub, "-");
        map.insert(BinaryOp::Mult, "*");
        map.insert(BinaryOp::Divide, "/");
        map.insert(BinaryOp::And, "AND");
        map.insert(BinaryOp::Or, "OR");
        map.insert(BinaryOp::IntDiv, "DIV");
        map.insert(BinaryOp::Mod, "MOD");
        map
    };
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OPERATOR_NAMES[self])
    }
}

/// Binary relations. Relations produce the boolean-as-integer convention:
/// 1 for true, 0 for false, so their result type is always integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationOp {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Minus,
    Not,
}

/// Expression node. Every variant owns its children exclusively; the only
/// outbound reference is `IdExpr::sym`, a non-owning symbol table key.
#[derive(Debug, Clone)]
pub enum Expr {
    Integer(IntegerExpr),
    Real(RealExpr),
    Id(IdExpr),
    Indexed(IndexedExpr),
    Binary(BinaryExpr),
    Relation(RelationExpr),
    Unary(UnaryExpr),
    Cast(CastExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn span(&self) -> &Span {
        match self {
            Expr::Integer(expr) => &expr.span,
            Expr::Real(expr) => &expr.span,
            Expr::Id(expr) => &expr.span,
            Expr::Indexed(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Relation(expr) => &expr.span,
            Expr::Unary(expr) => &expr.span,
            Expr::Cast(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }

    /// The resolved type attribute. Literals and casts carry a fixed type;
    /// every other variant starts out as void and is filled in by the type
    /// checker, so this is only meaningful on checked trees.
    pub fn ty(&self) -> SymIndex {
        match self {
            Expr::Integer(_) => INTEGER_TYPE,
            Expr::Real(_) => REAL_TYPE,
            Expr::Id(expr) => expr.ty,
            Expr::Indexed(expr) => expr.ty,
            Expr::Binary(expr) => expr.ty,
            Expr::Relation(expr) => expr.ty,
            Expr::Unary(expr) => expr.ty,
            Expr::Cast(expr) => expr.ty,
            Expr::Call(expr) => expr.ty,
        }
    }
}

/// Assignment target: a plain identifier or one element of an array
/// variable.
#[derive(Debug, Clone)]
pub enum Lvalue {
    Id(IdExpr),
    Indexed(IndexedExpr),
}

/// Statement node.
///
/// The two head variants describe procedure and function declarations for
/// later phases; they carry no checkable or optimizable content, and
/// handing one to either pass is a caller bug that panics.
#[derive(Debug, Clone)]
pub enum Stmt {
    Call(CallStmt),
    Assign(AssignStmt),
    While(WhileStmt),
    If(IfStmt),
    Return(ReturnStmt),
    ProcedureHead(ProcedureHeadStmt),
    FunctionHead(FunctionHeadStmt),
}

impl Stmt {
    pub fn span(&self) -> &Span {
        match self {
            Stmt::Call(stmt) => &stmt.span,
            Stmt::Assign(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::ProcedureHead(stmt) => &stmt.span,
            Stmt::FunctionHead(stmt) => &stmt.span,
        }
    }
}
