//! Numeric representation of measured amounts.
//!
//! The representation is chosen once per build: `f64` by default, `f32` with the `f32` feature,
//! or [`Decimal`] with the `decimal` feature (which wins over `f32`). Everything else in the crate
//! goes through [`Scalar`], so it never depends on the concrete choice.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    iter::Sum,
};

use num_traits::{FromPrimitive, Signed, ToPrimitive};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;

#[cfg(feature = "decimal")]
pub type Amount = Decimal;

#[cfg(all(feature = "f32", not(feature = "decimal")))]
pub type Amount = f32;

#[cfg(not(any(feature = "f32", feature = "decimal")))]
pub type Amount = f64;

/// Numeric capability required from an amount representation.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + Default
    + PartialOrd
    + Signed
    + Sum
    + FromPrimitive
    + ToPrimitive
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Distance between `1` and the next representable value.
    const EPSILON: Self;

    /// `10^exponent`, exact whenever the representation allows it.
    ///
    /// Exponents out of reach saturate: floats go to infinity or zero, decimals stop at `10^±28`.
    fn power_of_ten(exponent: i32) -> Self;

    fn from_float(value: f64) -> Self;

    /// Exact for every integer the representation can hold.
    fn from_int(value: i64) -> Self;

    fn from_decimal(value: Decimal) -> Self;

    fn to_float(self) -> f64;

    /// Total order: NaN equals NaN and sorts above everything else.
    fn compare(&self, other: &Self) -> Ordering;

    /// Hash consistent with [`Scalar::compare`].
    fn hash_amount<H: Hasher>(&self, state: &mut H);

    /// `None` when the product does not fit the representation.
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `None` when the quotient does not fit the representation or `rhs` is zero.
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const EPSILON: Self = f64::EPSILON;

    fn power_of_ten(exponent: i32) -> Self {
        10.0_f64.powi(exponent)
    }

    fn from_float(value: f64) -> Self {
        value
    }

    #[expect(clippy::cast_precision_loss)]
    fn from_int(value: i64) -> Self {
        value as Self
    }

    fn from_decimal(value: Decimal) -> Self {
        value.to_f64().unwrap_or(Self::NAN)
    }

    fn to_float(self) -> f64 {
        self
    }

    fn compare(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }

    fn hash_amount<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(*self).hash(state);
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs == 0.0 { None } else { Some(self / rhs) }
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const EPSILON: Self = f32::EPSILON;

    fn power_of_ten(exponent: i32) -> Self {
        10.0_f32.powi(exponent)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_float(value: f64) -> Self {
        value as Self
    }

    #[expect(clippy::cast_precision_loss)]
    fn from_int(value: i64) -> Self {
        value as Self
    }

    fn from_decimal(value: Decimal) -> Self {
        value.to_f32().unwrap_or(Self::NAN)
    }

    fn to_float(self) -> f64 {
        f64::from(self)
    }

    fn compare(&self, other: &Self) -> Ordering {
        OrderedFloat(*self).cmp(&OrderedFloat(*other))
    }

    fn hash_amount<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(*self).hash(state);
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs == 0.0 { None } else { Some(self / rhs) }
    }
}

/// Largest power of ten a decimal holds exactly, in either direction.
const DECIMAL_MAX_EXPONENT: u32 = 28;

impl Scalar for Decimal {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;
    const EPSILON: Self = Self::from_parts(1, 0, 0, false, 28);

    fn power_of_ten(exponent: i32) -> Self {
        let magnitude = exponent.unsigned_abs().min(DECIMAL_MAX_EXPONENT);
        if exponent < 0 {
            Self::new(1, magnitude)
        } else {
            Self::from_i128_with_scale(10_i128.pow(magnitude), 0)
        }
    }

    /// Non-finite floats have no decimal counterpart.
    fn from_float(value: f64) -> Self {
        assert!(value.is_finite(), "{value} cannot be represented as a decimal amount");
        Self::from_f64(value).unwrap_or(if value.is_sign_negative() { Self::MIN } else { Self::MAX })
    }

    fn from_int(value: i64) -> Self {
        Self::from(value)
    }

    fn from_decimal(value: Decimal) -> Self {
        value
    }

    fn to_float(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn hash_amount<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Self::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        Self::checked_div(self, rhs)
    }
}

/// Raw numbers accepted by the measure factories.
pub trait IntoAmount {
    fn into_amount(self) -> Amount;
}

impl IntoAmount for f64 {
    fn into_amount(self) -> Amount {
        Amount::from_float(self)
    }
}

impl IntoAmount for f32 {
    fn into_amount(self) -> Amount {
        Amount::from_float(f64::from(self))
    }
}

impl IntoAmount for i32 {
    fn into_amount(self) -> Amount {
        Amount::from_int(i64::from(self))
    }
}

impl IntoAmount for u32 {
    fn into_amount(self) -> Amount {
        Amount::from_int(i64::from(self))
    }
}

impl IntoAmount for Decimal {
    fn into_amount(self) -> Amount {
        Amount::from_decimal(self)
    }
}
