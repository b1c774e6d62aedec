use crate::amount::{Amount, Scalar};

/// Decimal metric prefix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, derive_more::Display)]
pub enum Prefix {
    #[display("p")]
    Pico,

    #[display("n")]
    Nano,

    #[display("µ")]
    Micro,

    #[display("m")]
    Milli,

    #[display("c")]
    Centi,

    #[display("d")]
    Deci,

    #[display("da")]
    Deka,

    #[display("h")]
    Hecto,

    #[display("k")]
    Kilo,

    #[display("M")]
    Mega,

    #[display("G")]
    Giga,

    #[display("T")]
    Tera,
}

impl Prefix {
    pub const ALL: [Self; 12] = [
        Self::Pico,
        Self::Nano,
        Self::Micro,
        Self::Milli,
        Self::Centi,
        Self::Deci,
        Self::Deka,
        Self::Hecto,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
    ];

    /// Power of ten the prefix stands for.
    #[must_use]
    pub const fn exponent(self) -> i32 {
        match self {
            Self::Pico => -12,
            Self::Nano => -9,
            Self::Micro => -6,
            Self::Milli => -3,
            Self::Centi => -2,
            Self::Deci => -1,
            Self::Deka => 1,
            Self::Hecto => 2,
            Self::Kilo => 3,
            Self::Mega => 6,
            Self::Giga => 9,
            Self::Tera => 12,
        }
    }

    #[must_use]
    pub fn factor(self) -> Amount {
        <Amount as Scalar>::power_of_ten(self.exponent())
    }
}
