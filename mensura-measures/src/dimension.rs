use std::fmt::{Display, Formatter};

/// Exponents of the seven SI base dimensions.
///
/// Two quantities have the same physical dimension iff all seven exponents match. Multiplying
/// quantities adds their dimensions, dividing subtracts them.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
)]
#[must_use]
pub struct Dimension {
    pub length: i32,
    pub mass: i32,
    pub time: i32,
    pub electric_current: i32,
    pub temperature: i32,
    pub luminous_intensity: i32,
    pub substance_amount: i32,
}

impl Dimension {
    pub const NONE: Self = Self::new(0, 0, 0, 0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    pub const ELECTRIC_CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    pub const LUMINOUS_INTENSITY: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    pub const SUBSTANCE_AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    /// Symbols used by [`Display`], in exponent order.
    const SYMBOLS: [&'static str; 7] = ["L", "M", "T", "I", "Θ", "J", "N"];

    #[expect(clippy::too_many_arguments)]
    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        electric_current: i32,
        temperature: i32,
        luminous_intensity: i32,
        substance_amount: i32,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            electric_current,
            temperature,
            luminous_intensity,
            substance_amount,
        }
    }

    pub const fn from_exponents(exponents: [i32; 7]) -> Self {
        let [length, mass, time, electric_current, temperature, luminous_intensity, substance_amount] =
            exponents;
        Self::new(
            length,
            mass,
            time,
            electric_current,
            temperature,
            luminous_intensity,
            substance_amount,
        )
    }

    #[must_use]
    pub const fn exponents(self) -> [i32; 7] {
        [
            self.length,
            self.mass,
            self.time,
            self.electric_current,
            self.temperature,
            self.luminous_intensity,
            self.substance_amount,
        ]
    }

    /// Dimension of a quantity raised to an integer power.
    ///
    /// # Panics
    ///
    /// When an exponent overflows `i32`, see [`Dimension::checked_pow`].
    pub const fn pow(self, exponent: i32) -> Self {
        match self.checked_pow(exponent) {
            Some(dimension) => dimension,
            None => panic!("dimension exponent overflow"),
        }
    }

    /// [`Dimension::pow`], or `None` when an exponent overflows.
    #[must_use]
    pub const fn checked_pow(self, exponent: i32) -> Option<Self> {
        let mut exponents = self.exponents();
        let mut index = 0;
        while index < exponents.len() {
            let Some(product) = exponents[index].checked_mul(exponent) else {
                return None;
            };
            exponents[index] = product;
            index += 1;
        }
        Some(Self::from_exponents(exponents))
    }

    #[must_use]
    pub fn is_dimensionless(self) -> bool {
        self == Self::NONE
    }

    /// Whether a quantity of this dimension may hold the product of `lhs` and `rhs`.
    #[must_use]
    pub fn is_product_of(self, lhs: Self, rhs: Self) -> bool {
        self == lhs + rhs
    }

    /// Whether a quantity of this dimension may hold the quotient of `numerator` and `denominator`.
    #[must_use]
    pub fn is_quotient_of(self, numerator: Self, denominator: Self) -> bool {
        self == numerator - denominator
    }
}

impl From<[i32; 7]> for Dimension {
    fn from(exponents: [i32; 7]) -> Self {
        Self::from_exponents(exponents)
    }
}

impl Display for Dimension {
    /// Formats as `L² M T⁻² Θ⁻¹`, or `1` when dimensionless.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut is_first = true;
        for (symbol, exponent) in Self::SYMBOLS.into_iter().zip(self.exponents()) {
            if exponent == 0 {
                continue;
            }
            if !is_first {
                f.write_str(" ")?;
            }
            is_first = false;
            f.write_str(symbol)?;
            if exponent != 1 {
                write_superscript(f, exponent)?;
            }
        }
        Ok(())
    }
}

fn write_superscript(f: &mut Formatter<'_>, exponent: i32) -> std::fmt::Result {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    if exponent < 0 {
        f.write_str("⁻")?;
    }
    for digit in exponent.unsigned_abs().to_string().bytes() {
        write!(f, "{}", DIGITS[usize::from(digit - b'0')])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAT_CAPACITY: Dimension = Dimension::new(2, 1, -2, 0, -1, 0, 0);

    #[test]
    fn test_add() {
        assert_eq!(Dimension::LENGTH + Dimension::TIME, Dimension::new(1, 0, 1, 0, 0, 0, 0));
        assert_eq!(HEAT_CAPACITY + Dimension::NONE, HEAT_CAPACITY);
    }

    #[test]
    fn test_sub() {
        assert_eq!(Dimension::LENGTH - Dimension::TIME, Dimension::new(1, 0, -1, 0, 0, 0, 0));
        assert_eq!(HEAT_CAPACITY - HEAT_CAPACITY, Dimension::NONE);
    }

    #[test]
    fn test_neg_and_pow() {
        assert_eq!(-Dimension::TIME, Dimension::new(0, 0, -1, 0, 0, 0, 0));
        assert_eq!(Dimension::LENGTH.pow(3), Dimension::new(3, 0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn test_checked_pow() {
        assert_eq!(HEAT_CAPACITY.checked_pow(2), Some(Dimension::new(4, 2, -4, 0, -2, 0, 0)));
        assert_eq!(Dimension::NONE.checked_pow(i32::MAX), Some(Dimension::NONE));
        assert_eq!(HEAT_CAPACITY.checked_pow(i32::MAX), None);
    }

    #[test]
    #[should_panic(expected = "dimension exponent overflow")]
    fn test_pow_overflow_panics() {
        let _ = Dimension::LENGTH.pow(2).pow(i32::MAX);
    }

    #[test]
    fn test_product_and_quotient() {
        let velocity = Dimension::new(1, 0, -1, 0, 0, 0, 0);
        assert!(Dimension::LENGTH.is_product_of(velocity, Dimension::TIME));
        assert!(velocity.is_quotient_of(Dimension::LENGTH, Dimension::TIME));
        assert!(!velocity.is_product_of(Dimension::LENGTH, Dimension::TIME));
    }

    #[test]
    fn test_exponents_round_trip() {
        assert_eq!(Dimension::from(HEAT_CAPACITY.exponents()), HEAT_CAPACITY);
    }

    #[test]
    fn test_display() {
        assert_eq!(HEAT_CAPACITY.to_string(), "L² M T⁻² Θ⁻¹");
        assert_eq!(Dimension::NONE.to_string(), "1");
        assert_eq!(Dimension::LENGTH.pow(12).to_string(), "L¹²");
    }
}
