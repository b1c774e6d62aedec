use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
};

use crate::{
    amount::{Amount, IntoAmount, Scalar},
    error::{Error, Result},
    prefix::Prefix,
    quantity::QuantityKind,
};

/// Conversion law between a unit and the reference unit of its quantity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Conversion {
    /// `reference = amount * scale`
    Linear { scale: Amount },

    /// `reference = amount * scale + offset`, with the offset in reference units.
    Affine { scale: Amount, offset: Amount },
}

impl Conversion {
    pub const IDENTITY: Self = Self::Linear { scale: <Amount as Scalar>::ONE };

    pub fn linear(scale: impl IntoAmount) -> Self {
        Self::Linear { scale: scale.into_amount() }
    }

    pub fn affine(scale: impl IntoAmount, offset: impl IntoAmount) -> Self {
        Self::Affine { scale: scale.into_amount(), offset: offset.into_amount() }
    }

    #[must_use]
    pub const fn scale(self) -> Amount {
        match self {
            Self::Linear { scale } | Self::Affine { scale, .. } => scale,
        }
    }

    #[must_use]
    pub const fn offset(self) -> Amount {
        match self {
            Self::Linear { .. } => <Amount as Scalar>::ZERO,
            Self::Affine { offset, .. } => offset,
        }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self.scale() == <Amount as Scalar>::ONE && self.offset() == <Amount as Scalar>::ZERO
    }

    #[must_use]
    pub fn to_reference(self, amount: Amount) -> Amount {
        match self {
            Self::Linear { scale } => amount * scale,
            Self::Affine { scale, offset } => amount * scale + offset,
        }
    }

    #[must_use]
    pub fn from_reference(self, amount: Amount) -> Amount {
        match self {
            Self::Linear { scale } => amount / scale,
            Self::Affine { scale, offset } => (amount - offset) / scale,
        }
    }

    /// Same law with the scale multiplied by `factor`; the offset is kept.
    #[must_use]
    pub fn scaled(self, factor: Amount) -> Self {
        match self {
            Self::Linear { scale } => Self::Linear { scale: scale * factor },
            Self::Affine { scale, offset } => Self::Affine { scale: scale * factor, offset },
        }
    }
}

/// Named conversion rule owned by exactly one quantity.
///
/// The owner is recorded by value as a [`QuantityKind`], which is all the lookups and
/// validations need. Comparing owners never looks at the conversion law: two quantities with
/// identical scales still reject each other's units.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Unit {
    symbol: Cow<'static, str>,
    quantity: QuantityKind,
    conversion: Conversion,
}

impl Unit {
    pub fn new(
        quantity: QuantityKind,
        symbol: impl Into<Cow<'static, str>>,
        conversion: Conversion,
    ) -> Self {
        Self { symbol: symbol.into(), quantity, conversion }
    }

    /// Reference unit of `quantity`: converts with the identity.
    pub fn reference(quantity: QuantityKind, symbol: impl Into<Cow<'static, str>>) -> Self {
        Self::new(quantity, symbol, Conversion::IDENTITY)
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn quantity(&self) -> QuantityKind {
        self.quantity
    }

    #[must_use]
    pub const fn conversion(&self) -> Conversion {
        self.conversion
    }

    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.conversion.is_identity()
    }

    #[must_use]
    pub fn is_affine(&self) -> bool {
        matches!(self.conversion, Conversion::Affine { .. })
    }

    #[must_use]
    pub fn convert_to_reference(&self, amount: Amount) -> Amount {
        self.conversion.to_reference(amount)
    }

    #[must_use]
    pub fn convert_from_reference(&self, amount: Amount) -> Amount {
        self.conversion.from_reference(amount)
    }

    /// Derive the prefixed unit, for example kilometre from metre.
    pub fn with_prefix(&self, prefix: Prefix) -> Self {
        Self {
            symbol: Cow::Owned(format!("{prefix}{}", self.symbol)),
            quantity: self.quantity,
            conversion: self.conversion.scaled(prefix.factor()),
        }
    }

    /// Derive a unit worth `factor` of this one, for example an hour from a minute.
    pub fn scaled(&self, symbol: impl Into<Cow<'static, str>>, factor: impl IntoAmount) -> Self {
        Self {
            symbol: symbol.into(),
            quantity: self.quantity,
            conversion: self.conversion.scaled(factor.into_amount()),
        }
    }

    /// Fail unless the unit belongs to `expected`.
    pub fn ensure_quantity(&self, expected: QuantityKind) -> Result<&Self> {
        if self.quantity == expected {
            Ok(self)
        } else {
            Err(Error::UnitMismatch {
                unit: self.symbol.to_string(),
                owner: self.quantity,
                expected,
            })
        }
    }

    /// [`Unit::convert_to_reference`] on behalf of `expected`.
    pub fn checked_to_reference(&self, expected: QuantityKind, amount: Amount) -> Result<Amount> {
        Ok(self.ensure_quantity(expected)?.convert_to_reference(amount))
    }

    /// [`Unit::convert_from_reference`] on behalf of `expected`.
    pub fn checked_from_reference(&self, expected: QuantityKind, amount: Amount) -> Result<Amount> {
        Ok(self.ensure_quantity(expected)?.convert_from_reference(amount))
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{amount::testing::TOLERANCE, dimension::Dimension};

    const LENGTH: QuantityKind = QuantityKind::new("Length", Dimension::LENGTH);
    const MASS: QuantityKind = QuantityKind::new("Mass", Dimension::MASS);
    const TEMPERATURE: QuantityKind = QuantityKind::new("Temperature", Dimension::TEMPERATURE);

    #[test]
    fn test_prefix_composition() {
        let meter = Unit::reference(LENGTH, "m");
        let kilometer = meter.with_prefix(Prefix::Kilo);
        assert_eq!(kilometer.symbol(), "km");
        assert_eq!(kilometer.quantity(), LENGTH);
        assert_relative_eq!(
            kilometer.convert_to_reference(1_i32.into_amount()).to_float(),
            meter.convert_to_reference(1000_i32.into_amount()).to_float(),
        );
    }

    #[test]
    fn test_prefix_keeps_offset() {
        let celsius = Unit::new(TEMPERATURE, "°C", Conversion::affine(1.0, 273.15));
        let millicelsius = celsius.with_prefix(Prefix::Milli);
        assert_eq!(millicelsius.conversion().offset(), celsius.conversion().offset());
        assert_relative_eq!(
            millicelsius.conversion().scale().to_float(),
            0.001,
            max_relative = TOLERANCE,
        );
    }

    #[test]
    fn test_affine_round_trip() {
        let fahrenheit =
            Unit::new(TEMPERATURE, "°F", Conversion::affine(5.0 / 9.0, 459.67 * 5.0 / 9.0));
        let kelvin = fahrenheit.convert_to_reference(32_i32.into_amount());
        assert_relative_eq!(kelvin.to_float(), 273.15, max_relative = TOLERANCE);
        assert_relative_eq!(
            fahrenheit.convert_from_reference(kelvin).to_float(),
            32.0,
            max_relative = TOLERANCE,
        );
    }

    #[test]
    fn test_scaled() {
        let second = Unit::reference(QuantityKind::new("Time", Dimension::TIME), "s");
        let minute = second.scaled("min", 60);
        let hour = minute.scaled("h", 60);
        assert_relative_eq!(hour.convert_to_reference(1_i32.into_amount()).to_float(), 3600.0);
    }

    #[test]
    fn test_ensure_quantity() {
        let gram = Unit::new(MASS, "g", Conversion::linear(0.001));
        assert!(gram.ensure_quantity(MASS).is_ok());
        assert_eq!(
            gram.checked_to_reference(LENGTH, 1_i32.into_amount()),
            Err(Error::UnitMismatch { unit: "g".to_string(), owner: MASS, expected: LENGTH }),
        );
    }

    #[test]
    fn test_same_scale_is_not_same_quantity() {
        let meter = Unit::reference(LENGTH, "m");
        let kilogram = Unit::reference(MASS, "kg");
        assert_eq!(meter.conversion(), kilogram.conversion());
        assert!(meter.ensure_quantity(MASS).is_err());
    }
}
