use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{
    dimension::Dimension,
    error::{Error, Result},
    quantities::{
        Acceleration,
        AmountOfSubstance,
        Area,
        ElectricCurrent,
        Energy,
        Force,
        Frequency,
        HeatCapacity,
        Length,
        LuminousIntensity,
        Mass,
        Number,
        Power,
        Pressure,
        SpecificHeatCapacity,
        Temperature,
        Time,
        Velocity,
        Volume,
    },
    quantity::{Quantity, QuantityDescriptor},
};

/// Table of quantity descriptors, looked up by name.
///
/// Names match case-insensitively and ignore whitespace, so `heat capacity` finds `HeatCapacity`.
#[derive(Debug, Default)]
pub struct Registry<'d> {
    descriptors: BTreeMap<String, &'d QuantityDescriptor>,
}

static STANDARD: Lazy<Registry<'static>> = Lazy::new(|| {
    let mut registry = Registry::new();
    for descriptor in [
        Number::descriptor(),
        Length::descriptor(),
        Mass::descriptor(),
        Time::descriptor(),
        ElectricCurrent::descriptor(),
        Temperature::descriptor(),
        LuminousIntensity::descriptor(),
        AmountOfSubstance::descriptor(),
        Area::descriptor(),
        Volume::descriptor(),
        Velocity::descriptor(),
        Acceleration::descriptor(),
        Force::descriptor(),
        Pressure::descriptor(),
        Energy::descriptor(),
        Power::descriptor(),
        Frequency::descriptor(),
        HeatCapacity::descriptor(),
        SpecificHeatCapacity::descriptor(),
    ] {
        registry
            .register_descriptor(descriptor)
            .expect("the standard catalogue has unique quantity names");
    }
    registry
});

impl<'d> Registry<'d> {
    #[must_use]
    pub const fn new() -> Self {
        Self { descriptors: BTreeMap::new() }
    }

    /// Every quantity shipped with the crate.
    #[must_use]
    pub fn standard() -> &'static Registry<'static> {
        &STANDARD
    }

    pub fn register<Q: Quantity>(&mut self) -> Result<&mut Self> {
        self.register_descriptor(Q::descriptor())
    }

    pub fn register_descriptor(&mut self, descriptor: &'d QuantityDescriptor) -> Result<&mut Self> {
        let key = normalize(descriptor.name());
        if self.descriptors.contains_key(&key) {
            return Err(Error::DuplicateQuantity(descriptor.kind()));
        }
        debug!(quantity = descriptor.name(), n_units = descriptor.units().len(), "registered");
        self.descriptors.insert(key, descriptor);
        Ok(self)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'d QuantityDescriptor> {
        self.descriptors.get(&normalize(name)).copied()
    }

    pub fn get(&self, name: &str) -> Result<&'d QuantityDescriptor> {
        self.find(name).ok_or_else(|| Error::UnknownQuantity(name.to_string()))
    }

    /// Descriptors ordered by normalized name.
    pub fn iter(&self) -> impl Iterator<Item = &'d QuantityDescriptor> + '_ {
        self.descriptors.values().copied()
    }

    /// Quantities sharing `dimension`, such as energy and torque.
    pub fn by_dimension(
        &self,
        dimension: Dimension,
    ) -> impl Iterator<Item = &'d QuantityDescriptor> + '_ {
        self.iter().filter(move |descriptor| descriptor.dimension() == dimension)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect()
}
