use crate::ast::ast::{BinaryOp, Expr, Lvalue, Stmt, UnaryOp};
use crate::ast::expressions::{
    BinaryExpr, CastExpr, ExprList, IdExpr, IndexedExpr, IntegerExpr, RelationExpr,
};
use crate::ast::statements::{AssignStmt, Elsif, ElsifList, IfStmt, ReturnStmt, StmtList};
use crate::errors::errors::{Diagnostic, OperandSide, SemanticError};
use crate::symtab::symtab::{SymIndex, SymbolKind, SymbolTable, SymbolTag, INTEGER_TYPE, REAL_TYPE};
use crate::{Position, Span};

/// The type checking pass.
///
/// One checker is constructed per compilation against the finished symbol
/// table and fed one block body at a time through `do_typecheck`, innermost
/// blocks first, with the block's scope open in the table. The checker
/// annotates every expression with its synthesized type, wraps operands in
/// cast nodes wherever integer values flow into real contexts, and collects
/// diagnostics instead of stopping at the first error.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    sym_tab: &'a SymbolTable,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> TypeChecker<'a> {
    pub fn new(sym_tab: &'a SymbolTable) -> Self {
        TypeChecker {
            sym_tab,
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn type_error(&mut self, error: SemanticError, position: Option<Position>) {
        self.diagnostics.push(Diagnostic::new(error, position));
    }

    /// Checks one block body. `env` is the function or procedure owning the
    /// block; for functions, a body that can fall through without hitting a
    /// return on some path gets a missing-return diagnostic (positionless
    /// when the body is empty).
    pub fn do_typecheck(&mut self, env: SymIndex, body: Option<&mut StmtList>) {
        let sym_tab = self.sym_tab;
        let (returns, body_position) = match body {
            Some(list) => {
                let position = list.span.start.clone();
                (self.check_stmt_list(list), Some(position))
            }
            None => (false, None),
        };
        if sym_tab.get_symbol(env).tag() == SymbolTag::Function && !returns {
            self.type_error(SemanticError::MissingReturn, body_position);
        }
    }

    /// Checks every statement in the list, front to back. Returns true if
    /// the list guarantees a return on every path (any member guaranteeing
    /// suffices; what follows a returning statement is unreachable).
    pub fn check_stmt_list(&mut self, list: &mut StmtList) -> bool {
        let preceding_returns = match list.preceding.as_deref_mut() {
            Some(preceding) => self.check_stmt_list(preceding),
            None => false,
        };
        let last_returns = self.check_stmt(&mut list.last);
        preceding_returns || last_returns
    }

    /// Checks one statement. Returns true if every control path through it
    /// ends in a return statement.
    pub fn check_stmt(&mut self, stmt: &mut Stmt) -> bool {
        match stmt {
            Stmt::Call(call) => {
                self.check_parameters(&call.id, call.args.as_mut());
                false
            }
            Stmt::Assign(assign) => {
                self.check_assign(assign);
                false
            }
            Stmt::While(while_stmt) => {
                if self.check_expr(&mut while_stmt.condition) != INTEGER_TYPE {
                    let position = while_stmt.condition.span().start.clone();
                    self.type_error(SemanticError::WhileConditionNotInteger, Some(position));
                }
                if let Some(body) = while_stmt.body.as_mut() {
                    self.check_stmt_list(body);
                }
                // The body may run zero times, so a while never guarantees
                // a return.
                false
            }
            Stmt::If(if_stmt) => self.check_if(if_stmt),
            Stmt::Return(ret) => {
                self.check_return(ret);
                true
            }
            Stmt::ProcedureHead(_) => panic!("trying to type check a procedure head"),
            Stmt::FunctionHead(_) => panic!("trying to type check a function head"),
        }
    }

    fn check_if(&mut self, if_stmt: &mut IfStmt) -> bool {
        if self.check_expr(&mut if_stmt.condition) != INTEGER_TYPE {
            let position = if_stmt.span.start.clone();
            self.type_error(SemanticError::IfConditionNotInteger, Some(position));
        }
        let body_returns = match if_stmt.body.as_mut() {
            Some(body) => self.check_stmt_list(body),
            None => false,
        };
        let elsifs_return = match if_stmt.elsif_list.as_mut() {
            Some(list) => self.check_elsif_list(list),
            None => true,
        };
        let else_returns = match if_stmt.else_body.as_mut() {
            Some(body) => self.check_stmt_list(body),
            None => false,
        };
        // Without an else the fallthrough path returns nothing, whatever
        // the branches do.
        body_returns && elsifs_return && else_returns
    }

    fn check_elsif_list(&mut self, list: &mut ElsifList) -> bool {
        let preceding_return = match list.preceding.as_deref_mut() {
            Some(preceding) => self.check_elsif_list(preceding),
            None => true,
        };
        let last_returns = self.check_elsif(&mut list.last);
        preceding_return && last_returns
    }

    fn check_elsif(&mut self, elsif: &mut Elsif) -> bool {
        if self.check_expr(&mut elsif.condition) != INTEGER_TYPE {
            let position = elsif.condition.span().start.clone();
            self.type_error(SemanticError::ElsifConditionNotInteger, Some(position));
        }
        match elsif.body.as_mut() {
            Some(body) => self.check_stmt_list(body),
            None => false,
        }
    }

    fn check_return(&mut self, ret: &mut ReturnStmt) {
        let sym_tab = self.sym_tab;
        let env = sym_tab.get_symbol(sym_tab.current_environment());
        match ret.value.as_mut() {
            None => {
                if env.tag() != SymbolTag::Procedure {
                    let position = ret.span.start.clone();
                    self.type_error(SemanticError::MissingReturnValue, Some(position));
                }
            }
            Some(value) => {
                let value_ty = self.check_expr(value);
                if env.tag() != SymbolTag::Function {
                    let position = ret.span.start.clone();
                    self.type_error(SemanticError::ProcedureReturnsValue, Some(position));
                } else if env.ty != value_ty {
                    let position = value.span().start.clone();
                    self.type_error(SemanticError::BadReturnType, Some(position));
                }
            }
        }
    }

    fn check_assign(&mut self, assign: &mut AssignStmt) {
        let lhs_ty = self.check_lvalue(&mut assign.lhs);
        let rhs_ty = self.check_expr(&mut assign.rhs);
        if lhs_ty == INTEGER_TYPE && rhs_ty == REAL_TYPE {
            // No narrowing coercion exists.
            let position = assign.rhs.span().start.clone();
            self.type_error(SemanticError::AssignRealToInteger, Some(position));
        }
        if lhs_ty == REAL_TYPE && rhs_ty == INTEGER_TYPE {
            cast_to_real(&mut assign.rhs);
        }
    }

    fn check_lvalue(&mut self, lvalue: &mut Lvalue) -> SymIndex {
        match lvalue {
            Lvalue::Id(id) => self.check_id(id),
            Lvalue::Indexed(indexed) => self.check_indexed(indexed),
        }
    }

    /// Checks one expression and returns its synthesized type.
    pub fn check_expr(&mut self, expr: &mut Expr) -> SymIndex {
        match expr {
            Expr::Integer(_) => INTEGER_TYPE,
            Expr::Real(_) => REAL_TYPE,
            Expr::Id(id) => self.check_id(id),
            Expr::Indexed(indexed) => self.check_indexed(indexed),
            Expr::Binary(binary) => {
                let ty = match binary.op {
                    BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mult => {
                        self.check_arith_binop(binary)
                    }
                    BinaryOp::Divide => self.check_divide(binary),
                    BinaryOp::And | BinaryOp::Or | BinaryOp::IntDiv | BinaryOp::Mod => {
                        self.check_integer_binop(binary)
                    }
                };
                binary.ty = ty;
                ty
            }
            Expr::Relation(relation) => {
                let ty = self.check_relation(relation);
                relation.ty = ty;
                ty
            }
            Expr::Unary(unary) => {
                match unary.op {
                    UnaryOp::Minus => {
                        unary.ty = self.check_expr(&mut unary.operand);
                    }
                    UnaryOp::Not => {
                        if self.check_expr(&mut unary.operand) != INTEGER_TYPE {
                            let position = unary.operand.span().start.clone();
                            self.type_error(SemanticError::NotOperandNotInteger, Some(position));
                        }
                        unary.ty = INTEGER_TYPE;
                    }
                }
                unary.ty
            }
            Expr::Cast(cast) => {
                self.check_expr(&mut cast.operand);
                cast.ty
            }
            Expr::Call(call) => {
                let sym_tab = self.sym_tab;
                self.check_parameters(&call.id, call.args.as_mut());
                call.ty = sym_tab.get_symbol(call.id.sym).ty;
                call.ty
            }
        }
    }

    fn check_id(&mut self, id: &mut IdExpr) -> SymIndex {
        let symbol = self.sym_tab.get_symbol(id.sym);
        // A name-type is its own type token, so aliases compare by slot
        // identity.
        id.ty = if symbol.tag() == SymbolTag::NameType {
            id.sym
        } else {
            symbol.ty
        };
        id.ty
    }

    fn check_indexed(&mut self, indexed: &mut IndexedExpr) -> SymIndex {
        if self.check_expr(&mut indexed.index) != INTEGER_TYPE {
            let position = indexed.span.start.clone();
            self.type_error(SemanticError::IndexNotInteger, Some(position));
        }
        indexed.ty = self.check_id(&mut indexed.id);
        indexed.ty
    }

    /// Add, sub and mult: mixed integer/real operands promote both sides to
    /// real; matching operands keep their shared type.
    fn check_arith_binop(&mut self, binary: &mut BinaryExpr) -> SymIndex {
        let left_ty = self.check_expr(&mut binary.left);
        let right_ty = self.check_expr(&mut binary.right);
        if left_ty != right_ty {
            if left_ty != REAL_TYPE {
                cast_to_real(&mut binary.left);
            }
            if right_ty != REAL_TYPE {
                cast_to_real(&mut binary.right);
            }
            return REAL_TYPE;
        }
        left_ty
    }

    /// Divide always produces a real; each integer operand is cast up
    /// independently of the other side.
    fn check_divide(&mut self, binary: &mut BinaryExpr) -> SymIndex {
        let left_ty = self.check_expr(&mut binary.left);
        let right_ty = self.check_expr(&mut binary.right);
        if right_ty == INTEGER_TYPE {
            cast_to_real(&mut binary.right);
        }
        if left_ty == INTEGER_TYPE {
            cast_to_real(&mut binary.left);
        }
        REAL_TYPE
    }

    /// AND, OR, DIV and MOD take integer operands only. There is no valid
    /// coercion, so violations are reported per side and the result stays
    /// integer.
    fn check_integer_binop(&mut self, binary: &mut BinaryExpr) -> SymIndex {
        let left_ty = self.check_expr(&mut binary.left);
        let right_ty = self.check_expr(&mut binary.right);
        if right_ty != INTEGER_TYPE {
            let position = binary.span.start.clone();
            self.type_error(
                SemanticError::NonIntegerOperand {
                    operator: binary.op.to_string(),
                    side: OperandSide::Right,
                },
                Some(position),
            );
        }
        if left_ty != INTEGER_TYPE {
            let position = binary.span.start.clone();
            self.type_error(
                SemanticError::NonIntegerOperand {
                    operator: binary.op.to_string(),
                    side: OperandSide::Left,
                },
                Some(position),
            );
        }
        INTEGER_TYPE
    }

    /// Relations promote mixed operands to real like the arithmetic ops but
    /// always produce an integer truth value.
    fn check_relation(&mut self, relation: &mut RelationExpr) -> SymIndex {
        let left_ty = self.check_expr(&mut relation.left);
        let right_ty = self.check_expr(&mut relation.right);
        if left_ty != right_ty {
            if left_ty != REAL_TYPE {
                cast_to_real(&mut relation.left);
            }
            if right_ty != REAL_TYPE {
                cast_to_real(&mut relation.right);
            }
        }
        INTEGER_TYPE
    }

    /// Checks a call's actual parameters against the callee's formals. The
    /// callee must be a function or procedure; anything else means the tree
    /// and the table disagree.
    pub fn check_parameters(&mut self, call_id: &IdExpr, mut actuals: Option<&mut ExprList>) {
        if let Some(list) = actuals.as_deref_mut() {
            self.check_expr_list(list);
        }
        let sym_tab = self.sym_tab;
        let symbol = sym_tab.get_symbol(call_id.sym);
        let formals: &[SymIndex] = match &symbol.kind {
            SymbolKind::Function { params } => params,
            SymbolKind::Procedure { params } => params,
            _ => panic!("call through a symbol that is not a function or procedure"),
        };
        self.match_parameters(call_id, formals, actuals);
    }

    fn check_expr_list(&mut self, list: &mut ExprList) {
        if let Some(preceding) = list.preceding.as_deref_mut() {
            self.check_expr_list(preceding);
        }
        self.check_expr(&mut list.last);
    }

    /// Pairs actuals with formals from the last parameter towards the
    /// first. Both lists running out together is success; one running out
    /// early is an arity error. A mismatched actual is cast when the formal
    /// is real, reported otherwise; either way the first failing pair ends
    /// the walk, so a bad call yields one diagnostic.
    fn match_parameters(
        &mut self,
        call_id: &IdExpr,
        formals: &[SymIndex],
        actuals: Option<&mut ExprList>,
    ) -> bool {
        match (formals.split_last(), actuals) {
            (None, None) => true,
            (Some(_), None) | (None, Some(_)) => {
                let name = self.sym_tab.get_symbol(call_id.sym).name.clone();
                let position = call_id.span.start.clone();
                self.type_error(
                    SemanticError::ParameterCountMismatch { name },
                    Some(position),
                );
                false
            }
            (Some((last_formal, rest)), Some(list)) => {
                if !self.match_parameters(call_id, rest, list.preceding.as_deref_mut()) {
                    return false;
                }
                if list.last.ty() != *last_formal {
                    if *last_formal == REAL_TYPE {
                        cast_to_real(&mut list.last);
                    } else {
                        let name = self.sym_tab.get_symbol(call_id.sym).name.clone();
                        let position = list.last.span().start.clone();
                        self.type_error(
                            SemanticError::ParameterTypeMismatch { name },
                            Some(position),
                        );
                        return false;
                    }
                }
                true
            }
        }
    }
}

/// Wraps an expression in a cast node recording an integer-to-real
/// conversion, reusing the expression's span.
fn cast_to_real(expr: &mut Expr) {
    let span = expr.span().clone();
    // Swap a placeholder in so the operand can be taken by value.
    let operand = std::mem::replace(expr, Expr::Integer(IntegerExpr::new(Span::null(), 0)));
    *expr = Expr::Cast(CastExpr::new(span, Box::new(operand)));
}
