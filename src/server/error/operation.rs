//! Failures of the calculate and list-results operations.

use std::fmt;

use thiserror::Error;

use crate::server::error::{code::ErrorCode, store::StoreError};

/// A single rejected input field.
///
/// Rendered as `Field: <name> -> Error: <message>`, which is the form returned to
/// API clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field: {} -> Error: {}", self.field, self.message)
    }
}

/// Domain errors of the max-k calculation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Modulus x must be at least 1")]
    ZeroModulus,

    #[error("Inputs must be non-negative: x={x}, y={y}, n={n}")]
    NegativeInput { x: i64, y: i64, n: i64 },

    /// No k in `[0, n]` is congruent to `y` modulo `x`.
    #[error("No k in [0, {n}] satisfies k mod {x} = {y}")]
    NoSolution { x: i64, y: i64, n: i64 },

    #[error("Arithmetic overflow computing k for x={x}, y={y}, n={n}")]
    Overflow { x: i64, y: i64, n: i64 },
}

/// Store call that failed, used to pick the persistence error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    Save,
    FindAll,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Save => f.write_str("save"),
            Self::FindAll => f.write_str("list"),
        }
    }
}

/// Classified outcome of a failed operation.
///
/// Every variant maps to one stable `ErrorCode`. None of them carry a partial result.
#[derive(Error, Debug)]
pub enum OperationError {
    /// Input was missing, negative or out of range. Nothing was computed or stored.
    #[error("Invalid operation input: {}", join_violations(.0))]
    ValidationFailed(Vec<FieldViolation>),

    #[error("Calculation failed: {0}")]
    CalculationFailed(#[from] CalculationError),

    /// The store failed; any computed result was discarded.
    #[error("Failed to {action} operations: {source}")]
    PersistenceFailed {
        action: StoreAction,
        #[source]
        source: StoreError,
    },
}

impl OperationError {
    pub fn persistence(action: StoreAction, source: StoreError) -> Self {
        Self::PersistenceFailed { action, source }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ValidationFailed(_) => ErrorCode::InvalidParams,
            Self::CalculationFailed(_) => ErrorCode::OperationCalculate,
            Self::PersistenceFailed {
                action: StoreAction::Save,
                ..
            } => ErrorCode::OperationSave,
            Self::PersistenceFailed {
                action: StoreAction::FindAll,
                ..
            } => ErrorCode::OperationFind,
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
