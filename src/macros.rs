//! Utility macros for building AST nodes.
//!
//! This module defines helper macros used by drivers and tests to build
//! expression trees the same way the parser would:
//!
//! - `MK_INT!` - Creates an integer literal expression
//! - `MK_REAL!` - Creates a real literal expression
//! - `MK_ID!` - Creates an identifier expression
//! - `MK_BINOP!` - Creates a binary operation expression
//! - `MK_BINREL!` - Creates a binary relation expression
//!
//! These macros reduce boilerplate when constructing trees by hand.

/// Creates an integer literal expression.
///
/// # Arguments
///
/// * `$value` - The literal's value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let three = MK_INT!(3, span);
/// ```
#[macro_export]
macro_rules! MK_INT {
    ($value:expr, $span:expr) => {
        $crate::ast::ast::Expr::Integer($crate::ast::expressions::IntegerExpr::new($span, $value))
    };
}

/// Creates a real literal expression.
///
/// # Arguments
///
/// * `$value` - The literal's value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let pi = MK_REAL!(3.14159, span);
/// ```
#[macro_export]
macro_rules! MK_REAL {
    ($value:expr, $span:expr) => {
        $crate::ast::ast::Expr::Real($crate::ast::expressions::RealExpr::new($span, $value))
    };
}

/// Creates an identifier expression referring to a symbol table slot. The
/// type attribute starts out unresolved and is filled in by the checker.
///
/// # Arguments
///
/// * `$sym` - The symbol's slot index
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let x = MK_ID!(x_slot, span);
/// ```
#[macro_export]
macro_rules! MK_ID {
    ($sym:expr, $span:expr) => {
        $crate::ast::ast::Expr::Id($crate::ast::expressions::IdExpr::new($span, $sym))
    };
}

/// Creates a binary operation expression.
///
/// # Arguments
///
/// * `$op` - The `BinaryOp` kind
/// * `$left` - The left operand expression
/// * `$right` - The right operand expression
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let sum = MK_BINOP!(BinaryOp::Add, MK_INT!(3, span.clone()), MK_INT!(4, span.clone()), span);
/// ```
#[macro_export]
macro_rules! MK_BINOP {
    ($op:expr, $left:expr, $right:expr, $span:expr) => {
        $crate::ast::ast::Expr::Binary($crate::ast::expressions::BinaryExpr::new(
            $span,
            $op,
            Box::new($left),
            Box::new($right),
        ))
    };
}

/// Creates a binary relation expression.
///
/// # Arguments
///
/// * `$op` - The `RelationOp` kind
/// * `$left` - The left operand expression
/// * `$right` - The right operand expression
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let cmp = MK_BINREL!(RelationOp::LessThan, lhs, rhs, span);
/// ```
#[macro_export]
macro_rules! MK_BINREL {
    ($op:expr, $left:expr, $right:expr, $span:expr) => {
        $crate::ast::ast::Expr::Relation($crate::ast::expressions::RelationExpr::new(
            $span,
            $op,
            Box::new($left),
            Box::new($right),
        ))
    };
}
