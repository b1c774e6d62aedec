//! Cross-quantity products and quotients.
//!
//! Multiplying or dividing measures of two quantities yields a measure of a third one, as long as
//! the dimensions agree: `lhs + rhs == result` for a product and `lhs - rhs == result` for a
//! quotient. Only the dimension exponents take part in the check. Amounts are combined in
//! reference units.

use num_traits::Zero;
use tracing::trace;

use crate::{
    amount::{Amount, Scalar},
    dimension::Dimension,
    error::{Error, Result},
    measure::Measure,
    quantity::{Quantity, QuantityKind},
};

/// Anything that can take part in a product or a quotient.
///
/// Implemented by the typed, expressed and dynamic measures, and open for outside types that
/// carry a quantity and a reference amount.
pub trait MeasureLike {
    fn quantity(&self) -> QuantityKind;

    fn reference_amount(&self) -> Amount;
}

impl<T: MeasureLike + ?Sized> MeasureLike for &T {
    fn quantity(&self) -> QuantityKind {
        (**self).quantity()
    }

    fn reference_amount(&self) -> Amount {
        (**self).reference_amount()
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Operation {
    #[display("multiply")]
    Times,

    #[display("divide")]
    Divide,
}

impl Operation {
    /// Dimension of the operation's outcome.
    pub fn combine(self, lhs: Dimension, rhs: Dimension) -> Dimension {
        match self {
            Self::Times => lhs + rhs,
            Self::Divide => lhs - rhs,
        }
    }

    /// Whether `lhs` and `rhs` combine into `result`.
    #[must_use]
    pub fn is_compatible(self, lhs: QuantityKind, rhs: QuantityKind, result: QuantityKind) -> bool {
        self.combine(lhs.dimension, rhs.dimension) == result.dimension
    }

    fn ensure_compatible(
        self,
        lhs: QuantityKind,
        rhs: QuantityKind,
        result: QuantityKind,
    ) -> Result<()> {
        if self.is_compatible(lhs, rhs, result) {
            Ok(())
        } else {
            trace!(operation = %self, %lhs, %rhs, %result, "dimensions do not match");
            Err(Error::DimensionMismatch { operation: self, lhs, rhs, result })
        }
    }

    fn overflow(self, lhs: QuantityKind, rhs: QuantityKind) -> Error {
        trace!(operation = %self, %lhs, %rhs, "amount overflow");
        Error::Overflow { operation: self, lhs, rhs }
    }
}

/// Product of two measures as a measure of `R`.
pub fn times<R: Quantity>(lhs: &impl MeasureLike, rhs: &impl MeasureLike) -> Result<Measure<R>> {
    multiply(R::KIND, lhs, rhs).map(Measure::from_reference)
}

/// Quotient of two measures as a measure of `R`.
pub fn divide<R: Quantity>(
    numerator: &impl MeasureLike,
    denominator: &impl MeasureLike,
) -> Result<Measure<R>> {
    quotient(R::KIND, numerator, denominator).map(Measure::from_reference)
}

/// Reference amount of the product, after checking the dimensions against `result`.
pub(crate) fn multiply(
    result: QuantityKind,
    lhs: &impl MeasureLike,
    rhs: &impl MeasureLike,
) -> Result<Amount> {
    Operation::Times.ensure_compatible(lhs.quantity(), rhs.quantity(), result)?;
    Scalar::checked_mul(lhs.reference_amount(), rhs.reference_amount())
        .ok_or_else(|| Operation::Times.overflow(lhs.quantity(), rhs.quantity()))
}

/// Reference amount of the quotient, after checking the dimensions against `result`.
pub(crate) fn quotient(
    result: QuantityKind,
    numerator: &impl MeasureLike,
    denominator: &impl MeasureLike,
) -> Result<Amount> {
    Operation::Divide.ensure_compatible(numerator.quantity(), denominator.quantity(), result)?;
    let divisor = denominator.reference_amount();
    if Zero::is_zero(&divisor) {
        trace!(numerator = %numerator.quantity(), denominator = %denominator.quantity(), "zero divisor");
        return Err(Error::DivideByZero {
            numerator: numerator.quantity(),
            denominator: denominator.quantity(),
        });
    }
    Scalar::checked_div(numerator.reference_amount(), divisor)
        .ok_or_else(|| Operation::Divide.overflow(numerator.quantity(), denominator.quantity()))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::quantities::{
        Area,
        Energy,
        HeatCapacity,
        KILOMETER,
        Length,
        Number,
        Power,
        Temperature,
        Time,
        Velocity,
    };

    #[test]
    fn test_times_same_dimension() {
        let capacity: Measure<HeatCapacity> =
            times(&HeatCapacity::create(2), &Measure::<Number>::from(3.0)).unwrap();
        assert_relative_eq!(capacity.reference_amount().to_float(), 6.0);
    }

    #[test]
    fn test_times_mixed_units() {
        let side = Length::create_in(2, &KILOMETER).unwrap();
        let area: Measure<Area> = times(&side, &Length::create(3)).unwrap();
        assert_relative_eq!(area.reference_amount().to_float(), 6000.0);
    }

    #[test]
    fn test_times_mismatch() {
        let result = times::<Area>(&Length::create(2), &Time::create(3));
        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                operation: Operation::Times,
                lhs: Length::KIND,
                rhs: Time::KIND,
                result: Area::KIND,
            }),
        );
    }

    #[test]
    fn test_divide() {
        let speed: Measure<Velocity> = divide(&Length::create(100), &Time::create(8)).unwrap();
        assert_relative_eq!(speed.reference_amount().to_float(), 12.5);
        let power: Measure<Power> = divide(&Energy::create(60), &Time::create(2)).unwrap();
        assert_relative_eq!(power.reference_amount().to_float(), 30.0);
    }

    #[test]
    fn test_divide_mismatch_precedes_zero_check() {
        let result = divide::<Velocity>(&Length::create(1), &Temperature::create(0));
        assert!(matches!(result, Err(Error::DimensionMismatch { operation: Operation::Divide, .. })));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            divide::<Velocity>(&Length::create(1), &Time::zero()),
            Err(Error::DivideByZero { numerator: Length::KIND, denominator: Time::KIND }),
        );
    }

    #[test]
    fn test_error_message() {
        let error = times::<Area>(&Length::create(2), &Time::create(3)).unwrap_err();
        assert_eq!(error.to_string(), "cannot multiply Length [L] and Time [T] into Area [L²]");
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_times_overflow() {
        let side = Length::create(rust_decimal::Decimal::MAX);
        assert_eq!(
            times::<Area>(&side, &side),
            Err(Error::Overflow { operation: Operation::Times, lhs: Length::KIND, rhs: Length::KIND }),
        );
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn test_divide_overflow() {
        let distance = Length::create(rust_decimal::Decimal::MAX);
        let instant = Time::create(rust_decimal::Decimal::new(1, 28));
        assert_eq!(
            divide::<Velocity>(&distance, &instant),
            Err(Error::Overflow { operation: Operation::Divide, lhs: Length::KIND, rhs: Time::KIND }),
        );
    }

    #[test]
    fn test_repeated_squaring_never_panics() {
        let mut side = Length::create(u32::MAX);
        for _ in 0..8 {
            match times::<Area>(&side, &side) {
                Ok(area) => side = Length::create(area.reference_amount()),
                Err(error) => {
                    assert!(matches!(error, Error::Overflow { operation: Operation::Times, .. }));
                    return;
                }
            }
        }
    }

    #[test]
    fn test_overflow_message() {
        let error = Operation::Times.overflow(Length::KIND, Length::KIND);
        assert_eq!(
            error.to_string(),
            "cannot multiply Length and Length: the result does not fit the amount type",
        );
    }

    #[test]
    fn test_references_are_measures() {
        let length = Length::create(4);
        let area: Measure<Area> = times(&&length, &length).unwrap();
        assert_relative_eq!(area.reference_amount().to_float(), 16.0);
    }
}
