mod dynamic;
mod expressed;

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    iter::Sum,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

pub use self::{dynamic::DynMeasure, expressed::ExpressedMeasure};
use crate::{
    amount::{Amount, IntoAmount, Scalar},
    engine::{self, MeasureLike},
    error::{Error, Result},
    quantities::Number,
    quantity::{Quantity, QuantityKind},
    unit::Unit,
};

/// Amount of quantity `Q`, always stored in the reference unit of `Q`.
///
/// Equality, ordering and hashing compare the reference amounts. Serializes as the bare amount.
#[derive(Deserialize, Serialize)]
#[serde(transparent, bound = "")]
#[must_use]
pub struct Measure<Q> {
    amount: Amount,

    #[serde(skip)]
    quantity: PhantomData<Q>,
}

impl<Q: Quantity> Measure<Q> {
    pub const ZERO: Self = Self::from_reference(<Amount as Scalar>::ZERO);

    /// Measure of `amount` reference units.
    pub fn new(amount: impl IntoAmount) -> Self {
        Self::from_reference(amount.into_amount())
    }

    pub const fn from_reference(amount: Amount) -> Self {
        Self { amount, quantity: PhantomData }
    }

    /// Measure of `amount` expressed in `unit`, which must belong to `Q`.
    pub fn try_new_in(amount: impl IntoAmount, unit: &Unit) -> Result<Self> {
        Ok(Self::from_reference(unit.checked_to_reference(Q::KIND, amount.into_amount())?))
    }

    pub fn unit() -> &'static Unit {
        Q::reference_unit()
    }

    #[must_use]
    pub const fn reference_amount(self) -> Amount {
        self.amount
    }

    /// The amount as read in `unit`.
    pub fn amount_in(self, unit: &Unit) -> Result<Amount> {
        unit.checked_from_reference(Q::KIND, self.amount)
    }

    /// The same measure, reported in `unit` from now on.
    pub fn express_in(self, unit: &Unit) -> Result<ExpressedMeasure<'_, Q>> {
        unit.ensure_quantity(Q::KIND)?;
        Ok(ExpressedMeasure::new_unchecked(self, unit))
    }

    pub fn abs(self) -> Self {
        Self::from_reference(self.amount.abs())
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        Zero::is_zero(&self.amount)
    }

    /// Whether the two measures are at most `tolerance` apart.
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: Self) -> bool {
        (self.amount - other.amount).abs() <= tolerance.amount
    }

    /// Ratio of two measures, failing on a zero denominator instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Measure<Number>> {
        if Zero::is_zero(&rhs.amount) {
            return Err(Error::DivideByZero { numerator: Q::KIND, denominator: Q::KIND });
        }
        Ok(Measure::from_reference(self.amount / rhs.amount))
    }

    /// Dimension-checked product of two measures of any quantities.
    pub fn times(lhs: &impl MeasureLike, rhs: &impl MeasureLike) -> Result<Self> {
        engine::times(lhs, rhs)
    }

    /// Dimension-checked quotient of two measures of any quantities.
    pub fn divide(numerator: &impl MeasureLike, denominator: &impl MeasureLike) -> Result<Self> {
        engine::divide(numerator, denominator)
    }
}

impl Measure<Number> {
    #[must_use]
    pub const fn value(self) -> Amount {
        self.amount
    }
}

impl<A: IntoAmount> From<A> for Measure<Number> {
    fn from(amount: A) -> Self {
        Self::new(amount)
    }
}

impl<Q: Quantity> MeasureLike for Measure<Q> {
    fn quantity(&self) -> QuantityKind {
        Q::KIND
    }

    fn reference_amount(&self) -> Amount {
        self.amount
    }
}

impl<Q> Clone for Measure<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Measure<Q> {}

impl<Q: Quantity> Default for Measure<Q> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<Q: Quantity> PartialEq for Measure<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.amount.compare(&other.amount).is_eq()
    }
}

impl<Q: Quantity> Eq for Measure<Q> {}

impl<Q: Quantity> PartialOrd for Measure<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Q: Quantity> Ord for Measure<Q> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount.compare(&other.amount)
    }
}

impl<Q: Quantity> Hash for Measure<Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.amount.hash_amount(state);
    }
}

impl<Q: Quantity> Display for Measure<Q> {
    /// Formats the amount, honouring width and precision, followed by the reference symbol.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.amount, f)?;
        write_symbol(f, Q::reference_unit())
    }
}

impl<Q: Quantity> Debug for Measure<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(Q::KIND.name).field(&self.amount).finish()
    }
}

impl<Q: Quantity> Add for Measure<Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_reference(self.amount + rhs.amount)
    }
}

impl<Q: Quantity> AddAssign for Measure<Q> {
    fn add_assign(&mut self, rhs: Self) {
        self.amount = self.amount + rhs.amount;
    }
}

impl<Q: Quantity> Sub for Measure<Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_reference(self.amount - rhs.amount)
    }
}

impl<Q: Quantity> SubAssign for Measure<Q> {
    fn sub_assign(&mut self, rhs: Self) {
        self.amount = self.amount - rhs.amount;
    }
}

impl<Q: Quantity> Neg for Measure<Q> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_reference(-self.amount)
    }
}

impl<Q: Quantity> Sum for Measure<Q> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, Q: Quantity> Sum<&'a Self> for Measure<Q> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<Q: Quantity> Mul<Amount> for Measure<Q> {
    type Output = Self;

    fn mul(self, rhs: Amount) -> Self::Output {
        Self::from_reference(self.amount * rhs)
    }
}

impl<Q: Quantity> Mul<Measure<Q>> for Amount {
    type Output = Measure<Q>;

    fn mul(self, rhs: Measure<Q>) -> Self::Output {
        Measure::from_reference(self * rhs.amount)
    }
}

impl<Q: Quantity> MulAssign<Amount> for Measure<Q> {
    fn mul_assign(&mut self, rhs: Amount) {
        self.amount = self.amount * rhs;
    }
}

impl<Q: Quantity> Div<Amount> for Measure<Q> {
    type Output = Self;

    /// # Panics
    ///
    /// When `rhs` is zero.
    fn div(self, rhs: Amount) -> Self::Output {
        Self::from_reference(self.amount / nonzero(rhs))
    }
}

impl<Q: Quantity> DivAssign<Amount> for Measure<Q> {
    fn div_assign(&mut self, rhs: Amount) {
        self.amount = self.amount / nonzero(rhs);
    }
}

impl<Q: Quantity> Div for Measure<Q> {
    type Output = Measure<Number>;

    /// # Panics
    ///
    /// When `rhs` is zero, see [`Measure::checked_div`] for the fallible variant.
    fn div(self, rhs: Self) -> Self::Output {
        Measure::from_reference(self.amount / nonzero(rhs.amount))
    }
}

fn nonzero(denominator: Amount) -> Amount {
    assert!(!Zero::is_zero(&denominator), "attempt to divide a measure by zero");
    denominator
}

/// Appends ` symbol`, or nothing for symbol-less units such as the one of [`Number`].
fn write_symbol(f: &mut Formatter<'_>, unit: &Unit) -> std::fmt::Result {
    if unit.symbol().is_empty() { Ok(()) } else { write!(f, " {unit}") }
}
