use crate::ast::ast::{BinaryOp, Expr, Stmt};
use crate::ast::expressions::{BinaryExpr, CastExpr, ExprList, IntegerExpr, RealExpr};
use crate::ast::statements::{Elsif, ElsifList, StmtList};
use crate::symtab::symtab::{ConstValue, SymbolTable, SymbolTag, INTEGER_TYPE, REAL_TYPE};

/// The constant folding pass.
///
/// Runs over checked trees, one block body at a time through `do_optimize`.
/// Folding replaces whole binary operations (and casts of integer
/// constants) with literals carrying the same type the subtree already
/// had; operands that are named constants are resolved through the symbol
/// table but never rewritten themselves.
#[derive(Debug)]
pub struct Optimizer<'a> {
    sym_tab: &'a SymbolTable,
}

impl<'a> Optimizer<'a> {
    pub fn new(sym_tab: &'a SymbolTable) -> Self {
        Optimizer { sym_tab }
    }

    /// Folds one block body. A missing body is a no-op.
    pub fn do_optimize(&self, body: Option<&mut StmtList>) {
        if let Some(list) = body {
            self.optimize_stmt_list(list);
        }
    }

    fn optimize_stmt_list(&self, list: &mut StmtList) {
        if let Some(preceding) = list.preceding.as_deref_mut() {
            self.optimize_stmt_list(preceding);
        }
        self.optimize_stmt(&mut list.last);
    }

    pub fn optimize_stmt(&self, stmt: &mut Stmt) {
        match stmt {
            Stmt::Call(call) => {
                if let Some(args) = call.args.as_mut() {
                    self.optimize_expr_list(args);
                }
            }
            Stmt::Assign(assign) => self.fold_constants(&mut assign.rhs),
            Stmt::While(while_stmt) => {
                self.fold_constants(&mut while_stmt.condition);
                if let Some(body) = while_stmt.body.as_mut() {
                    self.optimize_stmt_list(body);
                }
            }
            Stmt::If(if_stmt) => {
                self.fold_constants(&mut if_stmt.condition);
                if let Some(body) = if_stmt.body.as_mut() {
                    self.optimize_stmt_list(body);
                }
                if let Some(list) = if_stmt.elsif_list.as_mut() {
                    self.optimize_elsif_list(list);
                }
                if let Some(body) = if_stmt.else_body.as_mut() {
                    self.optimize_stmt_list(body);
                }
            }
            Stmt::Return(ret) => {
                if let Some(value) = ret.value.as_mut() {
                    self.fold_constants(value);
                }
            }
            Stmt::ProcedureHead(_) => panic!("trying to optimize a procedure head"),
            Stmt::FunctionHead(_) => panic!("trying to optimize a function head"),
        }
    }

    fn optimize_elsif_list(&self, list: &mut ElsifList) {
        if let Some(preceding) = list.preceding.as_deref_mut() {
            self.optimize_elsif_list(preceding);
        }
        self.optimize_elsif(&mut list.last);
    }

    fn optimize_elsif(&self, elsif: &mut Elsif) {
        self.fold_constants(&mut elsif.condition);
        if let Some(body) = elsif.body.as_mut() {
            self.optimize_stmt_list(body);
        }
    }

    fn optimize_expr_list(&self, list: &mut ExprList) {
        if let Some(preceding) = list.preceding.as_deref_mut() {
            self.optimize_expr_list(preceding);
        }
        self.fold_constants(&mut list.last);
    }

    /// Folds an expression in place: children first, then the expression
    /// itself if it is a binary operation over constants or a cast of an
    /// integer constant. Anything unfoldable keeps its node, with whatever
    /// children did fold already swapped in.
    pub fn fold_constants(&self, expr: &mut Expr) {
        self.optimize_expr(expr);
        let replacement = match expr {
            Expr::Binary(binary) => self.fold_binary(binary),
            Expr::Cast(cast) => self.fold_cast(cast),
            _ => None,
        };
        if let Some(folded) = replacement {
            *expr = folded;
        }
    }

    fn optimize_expr(&self, expr: &mut Expr) {
        match expr {
            // Literal values are already as folded as they get, and a
            // constant identifier is resolved where it is used as an
            // operand, never rewritten in place.
            Expr::Integer(_) | Expr::Real(_) | Expr::Id(_) => {}
            Expr::Indexed(indexed) => self.fold_constants(&mut indexed.index),
            Expr::Binary(binary) => {
                self.fold_constants(&mut binary.left);
                self.fold_constants(&mut binary.right);
            }
            Expr::Relation(relation) => {
                self.fold_constants(&mut relation.left);
                self.fold_constants(&mut relation.right);
            }
            Expr::Unary(unary) => self.fold_constants(&mut unary.operand),
            Expr::Cast(cast) => self.fold_constants(&mut cast.operand),
            Expr::Call(call) => {
                if let Some(args) = call.args.as_mut() {
                    self.optimize_expr_list(args);
                }
            }
        }
    }

    fn fold_binary(&self, binary: &mut BinaryExpr) -> Option<Expr> {
        // Idempotent on children the recursive walk already folded.
        self.fold_constants(&mut binary.left);
        self.fold_constants(&mut binary.right);
        if !self.is_const(&binary.left) || !self.is_const(&binary.right) {
            return None;
        }
        let span = binary.span.clone();
        if binary.left.ty() == INTEGER_TYPE && binary.right.ty() == INTEGER_TYPE {
            let left = self.integer_value(&binary.left);
            let right = self.integer_value(&binary.right);
            let value = match binary.op {
                BinaryOp::Add => left.wrapping_add(right),
                BinaryOp::Sub => left.wrapping_sub(right),
                BinaryOp::Mult => left.wrapping_mul(right),
                BinaryOp::And => (left != 0 && right != 0) as i64,
                BinaryOp::Or => (left != 0 || right != 0) as i64,
                // Folding must not introduce an abort the program itself
                // would only hit at run time.
                BinaryOp::IntDiv => {
                    if right == 0 {
                        return None;
                    }
                    left.wrapping_div(right)
                }
                BinaryOp::Mod => {
                    if right == 0 {
                        return None;
                    }
                    left.wrapping_rem(right)
                }
                // Divide operands get cast to real by the checker, so an
                // all-integer divide never reaches the folder.
                BinaryOp::Divide => return None,
            };
            return Some(Expr::Integer(IntegerExpr::new(span, value)));
        }
        if binary.left.ty() == REAL_TYPE && binary.right.ty() == REAL_TYPE {
            let left = self.real_value(&binary.left);
            let right = self.real_value(&binary.right);
            let value = match binary.op {
                BinaryOp::Add => left + right,
                BinaryOp::Sub => left - right,
                BinaryOp::Mult => left * right,
                BinaryOp::Divide => left / right,
                BinaryOp::And => {
                    if left != 0.0 && right != 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                }
                BinaryOp::Or => {
                    if left != 0.0 || right != 0.0 {
                        1.0
                    } else {
                        0.0
                    }
                }
                BinaryOp::IntDiv | BinaryOp::Mod => return None,
            };
            return Some(Expr::Real(RealExpr::new(span, value)));
        }
        None
    }

    /// A cast wrapping an integer constant evaluates to a real literal at
    /// compile time.
    fn fold_cast(&self, cast: &CastExpr) -> Option<Expr> {
        if !self.is_const(&cast.operand) || cast.operand.ty() != INTEGER_TYPE {
            return None;
        }
        let value = self.integer_value(&cast.operand) as f64;
        Some(Expr::Real(RealExpr::new(cast.span.clone(), value)))
    }

    /// Whether an expression has a value known at compile time: a literal,
    /// or an identifier bound to a constant symbol.
    pub fn is_const(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Integer(_) | Expr::Real(_) => true,
            Expr::Id(id) => self.sym_tab.get_symbol_tag(id.sym) == SymbolTag::Constant,
            _ => false,
        }
    }

    /// Integer value of a constant operand. The caller must have
    /// established that `expr` is a constant of integer type.
    fn integer_value(&self, expr: &Expr) -> i64 {
        match expr {
            Expr::Integer(int) => int.value,
            Expr::Id(id) => match self.sym_tab.get_constant_value(id.sym) {
                ConstValue::Int(value) => value,
                ConstValue::Real(_) => panic!("constant operand does not hold an integer"),
            },
            _ => panic!("expression is not an integer constant"),
        }
    }

    /// Real value of a constant operand. The caller must have established
    /// that `expr` is a constant of real type.
    fn real_value(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Real(real) => real.value,
            Expr::Id(id) => match self.sym_tab.get_constant_value(id.sym) {
                ConstValue::Real(value) => value,
                ConstValue::Int(_) => panic!("constant operand does not hold a real"),
            },
            _ => panic!("expression is not a real constant"),
        }
    }
}
