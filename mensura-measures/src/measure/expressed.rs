use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Neg, Sub},
};

use super::{Measure, write_symbol};
use crate::{
    amount::{Amount, IntoAmount},
    engine::MeasureLike,
    error::Result,
    quantity::{Quantity, QuantityKind},
    unit::Unit,
};

/// [`Measure`] that remembers the unit it should be reported in.
///
/// The amount is still held in reference units, so comparisons ignore the chosen unit.
#[must_use]
pub struct ExpressedMeasure<'u, Q> {
    measure: Measure<Q>,
    unit: &'u Unit,
}

impl<'u, Q: Quantity> ExpressedMeasure<'u, Q> {
    pub fn try_new(amount: impl IntoAmount, unit: &'u Unit) -> Result<Self> {
        Ok(Self { measure: Measure::try_new_in(amount, unit)?, unit })
    }

    /// Caller has already checked that `unit` belongs to `Q`.
    pub(super) const fn new_unchecked(measure: Measure<Q>, unit: &'u Unit) -> Self {
        Self { measure, unit }
    }

    pub const fn measure(self) -> Measure<Q> {
        self.measure
    }

    pub const fn unit(self) -> &'u Unit {
        self.unit
    }

    /// Amount in the display unit.
    #[must_use]
    pub fn amount(self) -> Amount {
        self.unit.convert_from_reference(self.measure.reference_amount())
    }

    #[must_use]
    pub const fn reference_amount(self) -> Amount {
        self.measure.reference_amount()
    }

    pub fn express_in<'v>(self, unit: &'v Unit) -> Result<ExpressedMeasure<'v, Q>> {
        self.measure.express_in(unit)
    }
}

impl<Q: Quantity> From<ExpressedMeasure<'_, Q>> for Measure<Q> {
    fn from(expressed: ExpressedMeasure<'_, Q>) -> Self {
        expressed.measure
    }
}

impl<Q: Quantity> MeasureLike for ExpressedMeasure<'_, Q> {
    fn quantity(&self) -> QuantityKind {
        Q::KIND
    }

    fn reference_amount(&self) -> Amount {
        self.measure.reference_amount()
    }
}

impl<Q> Clone for ExpressedMeasure<'_, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for ExpressedMeasure<'_, Q> {}

impl<Q: Quantity> PartialEq for ExpressedMeasure<'_, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.measure == other.measure
    }
}

impl<Q: Quantity> Eq for ExpressedMeasure<'_, Q> {}

impl<Q: Quantity> PartialOrd for ExpressedMeasure<'_, Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Q: Quantity> Ord for ExpressedMeasure<'_, Q> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.measure.cmp(&other.measure)
    }
}

impl<Q: Quantity> Hash for ExpressedMeasure<'_, Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.measure.hash(state);
    }
}

impl<Q: Quantity> Display for ExpressedMeasure<'_, Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.amount(), f)?;
        write_symbol(f, self.unit)
    }
}

impl<Q: Quantity> Debug for ExpressedMeasure<'_, Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?} {})", Q::KIND.name, self.amount(), self.unit)
    }
}

/// The sum is reported in the unit of the left operand.
impl<Q: Quantity> Add<Measure<Q>> for ExpressedMeasure<'_, Q> {
    type Output = Self;

    fn add(self, rhs: Measure<Q>) -> Self::Output {
        Self::new_unchecked(self.measure + rhs, self.unit)
    }
}

impl<Q: Quantity> Add for ExpressedMeasure<'_, Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self + rhs.measure
    }
}

impl<Q: Quantity> Sub<Measure<Q>> for ExpressedMeasure<'_, Q> {
    type Output = Self;

    fn sub(self, rhs: Measure<Q>) -> Self::Output {
        Self::new_unchecked(self.measure - rhs, self.unit)
    }
}

impl<Q: Quantity> Sub for ExpressedMeasure<'_, Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self - rhs.measure
    }
}

impl<Q: Quantity> Neg for ExpressedMeasure<'_, Q> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new_unchecked(-self.measure, self.unit)
    }
}

impl<Q: Quantity> Mul<Amount> for ExpressedMeasure<'_, Q> {
    type Output = Self;

    fn mul(self, rhs: Amount) -> Self::Output {
        Self::new_unchecked(self.measure * rhs, self.unit)
    }
}

impl<Q: Quantity> Div<Amount> for ExpressedMeasure<'_, Q> {
    type Output = Self;

    /// # Panics
    ///
    /// When `rhs` is zero.
    fn div(self, rhs: Amount) -> Self::Output {
        Self::new_unchecked(self.measure / rhs, self.unit)
    }
}
