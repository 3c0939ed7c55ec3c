use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A single semantic diagnostic: what went wrong and, when the offending
/// node came from source text, where. Diagnostics never abort the passes;
/// the checker collects them and the caller decides what to do.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    error: SemanticError,
    position: Option<Position>,
}

impl Diagnostic {
    pub fn new(error: SemanticError, position: Option<Position>) -> Self {
        Diagnostic { error, position }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.error {
            SemanticError::IndexNotInteger => "IndexNotInteger",
            SemanticError::NonIntegerOperand { .. } => "NonIntegerOperand",
            SemanticError::NotOperandNotInteger => "NotOperandNotInteger",
            SemanticError::AssignRealToInteger => "AssignRealToInteger",
            SemanticError::WhileConditionNotInteger => "WhileConditionNotInteger",
            SemanticError::IfConditionNotInteger => "IfConditionNotInteger",
            SemanticError::ElsifConditionNotInteger => "ElsifConditionNotInteger",
            SemanticError::MissingReturnValue => "MissingReturnValue",
            SemanticError::ProcedureReturnsValue => "ProcedureReturnsValue",
            SemanticError::BadReturnType => "BadReturnType",
            SemanticError::MissingReturn => "MissingReturn",
            SemanticError::ParameterCountMismatch { .. } => "ParameterCountMismatch",
            SemanticError::ParameterTypeMismatch { .. } => "ParameterTypeMismatch",
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Which operand of a binary operation a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    Left,
    Right,
}

impl Display for OperandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperandSide::Left => write!(f, "left"),
            OperandSide::Right => write!(f, "right"),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum SemanticError {
    #[error("index of an array must be an integer")]
    IndexNotInteger,
    #[error("{side} operand of {operator} must be an integer")]
    NonIntegerOperand {
        operator: String,
        side: OperandSide,
    },
    #[error("operand of NOT must be an integer")]
    NotOperandNotInteger,
    #[error("variable of type integer cannot be assigned a real value")]
    AssignRealToInteger,
    #[error("while predicate must be of integer type")]
    WhileConditionNotInteger,
    #[error("if condition must be of integer type")]
    IfConditionNotInteger,
    #[error("elsif condition must be of integer type")]
    ElsifConditionNotInteger,
    #[error("must return a value from a function")]
    MissingReturnValue,
    #[error("procedures may not return a value")]
    ProcedureReturnsValue,
    #[error("bad return type from function")]
    BadReturnType,
    #[error("a function must return a value")]
    MissingReturn,
    #[error("wrong number of parameters in call to {name:?}")]
    ParameterCountMismatch { name: String },
    #[error("parameter type does not match in call to {name:?}")]
    ParameterTypeMismatch { name: String },
}
