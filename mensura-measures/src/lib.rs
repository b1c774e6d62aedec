#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

#[macro_use]
mod macros;

mod amount;
mod array;
mod dimension;
pub mod engine;
mod error;
mod measure;
mod prefix;
pub mod quantities;
mod quantity;
mod registry;
mod unit;

pub use self::{
    amount::{Amount, IntoAmount, Scalar},
    array::{IntoMeasures, MeasureArray},
    dimension::Dimension,
    engine::{MeasureLike, Operation},
    error::{Error, Result},
    measure::{DynMeasure, ExpressedMeasure, Measure},
    prefix::Prefix,
    quantities::*,
    quantity::{Quantity, QuantityDescriptor, QuantityKind},
    registry::Registry,
    unit::{Conversion, Unit},
};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
