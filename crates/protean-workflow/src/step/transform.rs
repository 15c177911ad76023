//! Transformation types applied between a step's source and destination.

use serde::{Deserialize, Serialize};

/// Transformation applied to each record between source and destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    /// Pass records through unchanged.
    #[default]
    None,
    /// Compute a numeric field from two operands.
    Arithmetic {
        /// Field the result is written to.
        target: String,
        /// Left operand.
        left: Operand,
        /// Right operand.
        right: Operand,
        /// Operation applied to the operands.
        op: ArithmeticOp,
    },
    /// Concatenate two string operands into a field.
    Concat {
        /// Field the result is written to.
        target: String,
        /// Left operand.
        left: StringOperand,
        /// Right operand.
        right: StringOperand,
        /// Separator placed between the operands.
        #[serde(default)]
        separator: String,
    },
}

impl Transform {
    /// Returns the target field written by this transform, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Arithmetic { target, .. } | Self::Concat { target, .. } => Some(target),
        }
    }
}

/// A numeric operand of an arithmetic transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operand {
    /// Read the value from a record field.
    Field {
        /// Field the value is read from.
        name: String,
    },
    /// Use a constant value.
    Const {
        /// The constant.
        value: f64,
    },
}

/// A string operand of a concat transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StringOperand {
    /// Read the value from a record field.
    Field {
        /// Field the value is read from.
        name: String,
    },
    /// Use a constant string.
    ConstString {
        /// The constant.
        value: String,
    },
}

/// Operation applied by an arithmetic transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
}
