use std::{
    borrow::Cow,
    fmt::{Debug, Display, Formatter},
};

use bon::bon;
use tracing::debug;

use crate::{
    amount::{Amount, IntoAmount, Scalar},
    dimension::Dimension,
    engine::{self, MeasureLike},
    error::{Error, Result},
    measure::{DynMeasure, ExpressedMeasure, Measure},
    unit::Unit,
};

/// Identity of a quantity: its display name and its dimension.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub struct QuantityKind {
    pub name: &'static str,
    pub dimension: Dimension,
}

impl QuantityKind {
    pub const fn new(name: &'static str, dimension: Dimension) -> Self {
        Self { name, dimension }
    }
}

impl Display for QuantityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Capability implemented by every quantity marker type.
///
/// A quantity is a zero-sized type that statically commits a [`Measure`] to one physical kind.
/// Implementations are normally generated by [`quantity!`](crate::quantity!), which also declares
/// the quantity's units and its lazily built [`QuantityDescriptor`].
///
/// The provided methods form the quantity's measure factory.
pub trait Quantity: Copy + Debug + Send + Sync + 'static {
    const KIND: QuantityKind;

    /// The process-wide descriptor, built on first use.
    fn descriptor() -> &'static QuantityDescriptor;

    fn reference_unit() -> &'static Unit {
        Self::descriptor().reference_unit()
    }

    #[must_use]
    fn is_quantity_of(unit: &Unit) -> bool {
        unit.quantity() == Self::KIND
    }

    /// Measure of `amount` reference units.
    fn create(amount: impl IntoAmount) -> Measure<Self> {
        Measure::new(amount)
    }

    /// Measure of `amount` expressed in `unit`.
    fn create_in(amount: impl IntoAmount, unit: &Unit) -> Result<Measure<Self>> {
        Measure::try_new_in(amount, unit)
    }

    /// Like [`Quantity::create_in`], but the measure keeps reporting in `unit`.
    fn create_expressed(amount: impl IntoAmount, unit: &Unit) -> Result<ExpressedMeasure<'_, Self>> {
        ExpressedMeasure::try_new(amount, unit)
    }

    fn zero() -> Measure<Self> {
        Measure::ZERO
    }

    fn epsilon() -> Measure<Self> {
        Measure::from_reference(<Amount as Scalar>::EPSILON)
    }
}

/// Per-quantity metadata: kind, reference unit and unit catalogue.
///
/// The reference unit always comes first in the catalogue. A descriptor is immutable once built
/// and shared by reference.
#[derive(Debug)]
pub struct QuantityDescriptor {
    kind: QuantityKind,
    units: Vec<Unit>,
}

#[bon]
impl QuantityDescriptor {
    #[builder]
    pub fn new(kind: QuantityKind, reference: Unit, #[builder(default)] units: Vec<Unit>) -> Result<Self> {
        reference.ensure_quantity(kind)?;
        if !reference.is_reference() {
            return Err(Error::InvalidReferenceUnit(reference.symbol().to_string()));
        }
        let mut catalogue = Vec::with_capacity(units.len() + 1);
        catalogue.push(reference);
        for unit in units {
            unit.ensure_quantity(kind)?;
            if catalogue.iter().any(|known| known.symbol() == unit.symbol()) {
                return Err(Error::DuplicateUnit { quantity: kind, symbol: unit.symbol().to_string() });
            }
            catalogue.push(unit);
        }
        debug!(
            quantity = kind.name,
            dimension = %kind.dimension,
            n_units = catalogue.len(),
            "built the quantity descriptor",
        );
        Ok(Self { kind, units: catalogue })
    }
}

impl QuantityDescriptor {
    /// Descriptor with nothing but its reference unit.
    pub fn reference_only(kind: QuantityKind, symbol: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, units: vec![Unit::reference(kind, symbol)] }
    }

    pub const fn kind(&self) -> QuantityKind {
        self.kind
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name
    }

    pub const fn dimension(&self) -> Dimension {
        self.kind.dimension
    }

    pub fn reference_unit(&self) -> &Unit {
        &self.units[0]
    }

    #[must_use]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[must_use]
    pub fn find_unit(&self, symbol: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.symbol() == symbol)
    }

    /// Catalogue unit with exactly this symbol.
    pub fn unit(&self, symbol: &str) -> Result<&Unit> {
        self.find_unit(symbol)
            .ok_or_else(|| Error::MissingUnit { quantity: self.kind, symbol: symbol.to_string() })
    }

    #[must_use]
    pub fn is_quantity_of(&self, unit: &Unit) -> bool {
        unit.quantity() == self.kind
    }

    pub fn create(&self, amount: impl IntoAmount) -> DynMeasure<'_> {
        DynMeasure::new(self, amount.into_amount())
    }

    pub fn create_in(&self, amount: impl IntoAmount, unit: &Unit) -> Result<DynMeasure<'_>> {
        let amount = unit.checked_to_reference(self.kind, amount.into_amount())?;
        Ok(DynMeasure::new(self, amount))
    }

    pub fn zero(&self) -> DynMeasure<'_> {
        DynMeasure::new(self, <Amount as Scalar>::ZERO)
    }

    pub fn epsilon(&self) -> DynMeasure<'_> {
        DynMeasure::new(self, <Amount as Scalar>::EPSILON)
    }

    /// Re-express `amount` from one unit of this quantity into another.
    pub fn convert(&self, amount: Amount, from: &Unit, to: &Unit) -> Result<Amount> {
        let reference = from.checked_to_reference(self.kind, amount)?;
        to.checked_from_reference(self.kind, reference)
    }

    /// Product of two measures as a measure of this quantity.
    pub fn times(&self, lhs: &impl MeasureLike, rhs: &impl MeasureLike) -> Result<DynMeasure<'_>> {
        Ok(DynMeasure::new(self, engine::multiply(self.kind, lhs, rhs)?))
    }

    /// Quotient of two measures as a measure of this quantity.
    pub fn divide(
        &self,
        numerator: &impl MeasureLike,
        denominator: &impl MeasureLike,
    ) -> Result<DynMeasure<'_>> {
        Ok(DynMeasure::new(self, engine::quotient(self.kind, numerator, denominator)?))
    }
}
