use std::fmt::{Debug, Display, Formatter};

use super::{Measure, write_symbol};
use crate::{
    amount::{Amount, Scalar},
    engine::MeasureLike,
    error::{Error, Result},
    quantity::{Quantity, QuantityDescriptor, QuantityKind},
    unit::Unit,
};

/// Measure whose quantity is only known at runtime, through its descriptor.
///
/// Produced by the untyped factory on [`QuantityDescriptor`] and by the registry lookups.
#[derive(Clone, Copy)]
#[must_use]
pub struct DynMeasure<'d> {
    descriptor: &'d QuantityDescriptor,
    amount: Amount,
}

impl<'d> DynMeasure<'d> {
    /// Measure of `amount` reference units of the described quantity.
    pub const fn new(descriptor: &'d QuantityDescriptor, amount: Amount) -> Self {
        Self { descriptor, amount }
    }

    #[must_use]
    pub const fn descriptor(self) -> &'d QuantityDescriptor {
        self.descriptor
    }

    pub const fn kind(self) -> QuantityKind {
        self.descriptor.kind()
    }

    #[must_use]
    pub const fn reference_amount(self) -> Amount {
        self.amount
    }

    pub fn amount_in(self, unit: &Unit) -> Result<Amount> {
        unit.checked_from_reference(self.kind(), self.amount)
    }

    /// Recover the statically typed measure.
    pub fn try_into_measure<Q: Quantity>(self) -> Result<Measure<Q>> {
        if self.kind() == Q::KIND {
            Ok(Measure::from_reference(self.amount))
        } else {
            Err(Error::QuantityMismatch { expected: Q::KIND, actual: self.kind() })
        }
    }
}

impl<Q: Quantity> From<Measure<Q>> for DynMeasure<'static> {
    fn from(measure: Measure<Q>) -> Self {
        Self::new(Q::descriptor(), measure.reference_amount())
    }
}

impl MeasureLike for DynMeasure<'_> {
    fn quantity(&self) -> QuantityKind {
        self.kind()
    }

    fn reference_amount(&self) -> Amount {
        self.amount
    }
}

impl PartialEq for DynMeasure<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.amount.compare(&other.amount).is_eq()
    }
}

impl Display for DynMeasure<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.amount, f)?;
        write_symbol(f, self.descriptor.reference_unit())
    }
}

impl Debug for DynMeasure<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(self.descriptor.name()).field(&self.amount).finish()
    }
}
