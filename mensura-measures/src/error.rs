use thiserror::Error;

use crate::{engine::Operation, quantity::QuantityKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("unit `{unit}` measures {owner}, not {expected}")]
    UnitMismatch { unit: String, owner: QuantityKind, expected: QuantityKind },

    #[error(
        "cannot {operation} {lhs} [{}] and {rhs} [{}] into {result} [{}]",
        .lhs.dimension,
        .rhs.dimension,
        .result.dimension
    )]
    DimensionMismatch {
        operation: Operation,
        lhs: QuantityKind,
        rhs: QuantityKind,
        result: QuantityKind,
    },

    #[error("{quantity} has no unit `{symbol}`")]
    MissingUnit { quantity: QuantityKind, symbol: String },

    #[error("cannot divide {numerator} by a zero {denominator}")]
    DivideByZero { numerator: QuantityKind, denominator: QuantityKind },

    #[error("cannot {operation} {lhs} and {rhs}: the result does not fit the amount type")]
    Overflow { operation: Operation, lhs: QuantityKind, rhs: QuantityKind },

    #[error("expected a measure of {expected}, got {actual}")]
    QuantityMismatch { expected: QuantityKind, actual: QuantityKind },

    #[error("reference unit `{0}` must convert with the identity")]
    InvalidReferenceUnit(String),

    #[error("{quantity} declares unit `{symbol}` more than once")]
    DuplicateUnit { quantity: QuantityKind, symbol: String },

    #[error("unknown quantity `{0}`")]
    UnknownQuantity(String),

    #[error("quantity `{0}` is already registered")]
    DuplicateQuantity(QuantityKind),
}
