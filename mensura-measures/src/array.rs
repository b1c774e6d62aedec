use std::{
    fmt::{Debug, Formatter},
    iter::{Copied, Map},
    marker::PhantomData,
    slice,
};

use serde::{Deserialize, Serialize};

use crate::{
    amount::{Amount, IntoAmount, Scalar},
    error::Result,
    measure::Measure,
    quantity::Quantity,
    unit::Unit,
};

/// Homogeneous batch of measures of one quantity, stored as reference amounts.
///
/// Serializes as a plain sequence of reference amounts.
#[derive(Deserialize, Serialize)]
#[serde(transparent, bound = "")]
#[must_use]
pub struct MeasureArray<Q> {
    amounts: Vec<Amount>,

    #[serde(skip)]
    quantity: PhantomData<Q>,
}

impl<Q: Quantity> MeasureArray<Q> {
    /// Array of raw amounts in the reference unit.
    pub fn new<A: IntoAmount>(amounts: impl IntoIterator<Item = A>) -> Self {
        Self::from_reference(amounts.into_iter().map(IntoAmount::into_amount).collect())
    }

    pub const fn from_reference(amounts: Vec<Amount>) -> Self {
        Self { amounts, quantity: PhantomData }
    }

    /// Array of raw amounts expressed in `unit`, which must belong to `Q`.
    pub fn try_new_in<A: IntoAmount>(
        amounts: impl IntoIterator<Item = A>,
        unit: &Unit,
    ) -> Result<Self> {
        Ok(amounts.into_iter().try_into_measures_in::<Q>(unit)?.collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Measure<Q>> {
        self.amounts.get(index).copied().map(Measure::from_reference)
    }

    pub fn push(&mut self, measure: Measure<Q>) {
        self.amounts.push(measure.reference_amount());
    }

    #[must_use]
    pub fn amounts(&self) -> &[Amount] {
        &self.amounts
    }

    /// Every amount as read in `unit`.
    pub fn amounts_in(&self, unit: &Unit) -> Result<Vec<Amount>> {
        unit.ensure_quantity(Q::KIND)?;
        Ok(self.amounts.iter().map(|amount| unit.convert_from_reference(*amount)).collect())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Measure<Q>> + ExactSizeIterator + '_ {
        self.amounts.iter().copied().map(Measure::<Q>::from_reference)
    }

    pub fn sum(&self) -> Measure<Q> {
        self.iter().sum()
    }

    #[must_use]
    pub fn min(&self) -> Option<Measure<Q>> {
        self.iter().min()
    }

    #[must_use]
    pub fn max(&self) -> Option<Measure<Q>> {
        self.iter().max()
    }
}

impl<Q> Clone for MeasureArray<Q> {
    fn clone(&self) -> Self {
        Self { amounts: self.amounts.clone(), quantity: PhantomData }
    }
}

impl<Q> Default for MeasureArray<Q> {
    fn default() -> Self {
        Self { amounts: Vec::new(), quantity: PhantomData }
    }
}

impl<Q: Quantity> PartialEq for MeasureArray<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.amounts.len() == other.amounts.len()
            && self.amounts.iter().zip(&other.amounts).all(|(lhs, rhs)| lhs.compare(rhs).is_eq())
    }
}

impl<Q: Quantity> Eq for MeasureArray<Q> {}

impl<Q: Quantity> Debug for MeasureArray<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(Q::KIND.name).field(&self.amounts).finish()
    }
}

impl<Q: Quantity> FromIterator<Measure<Q>> for MeasureArray<Q> {
    fn from_iter<I: IntoIterator<Item = Measure<Q>>>(iter: I) -> Self {
        Self::from_reference(iter.into_iter().map(Measure::reference_amount).collect())
    }
}

impl<Q: Quantity> Extend<Measure<Q>> for MeasureArray<Q> {
    fn extend<I: IntoIterator<Item = Measure<Q>>>(&mut self, iter: I) {
        self.amounts.extend(iter.into_iter().map(Measure::reference_amount));
    }
}

impl<Q: Quantity> From<Vec<Measure<Q>>> for MeasureArray<Q> {
    fn from(measures: Vec<Measure<Q>>) -> Self {
        measures.into_iter().collect()
    }
}

impl<'a, Q: Quantity> IntoIterator for &'a MeasureArray<Q> {
    type Item = Measure<Q>;
    type IntoIter = Map<Copied<slice::Iter<'a, Amount>>, fn(Amount) -> Measure<Q>>;

    fn into_iter(self) -> Self::IntoIter {
        self.amounts.iter().copied().map(Measure::from_reference as fn(Amount) -> Measure<Q>)
    }
}

impl<T> IntoMeasures for T where T: ?Sized {}

/// Turns iterators of raw amounts into iterators of measures.
pub trait IntoMeasures {
    /// Treat every amount as given in the reference unit of `Q`.
    fn into_measures<Q>(self) -> impl Iterator<Item = Measure<Q>>
    where
        Self: Iterator + Sized,
        Self::Item: IntoAmount,
        Q: Quantity,
    {
        self.map(Measure::<Q>::new)
    }

    /// Treat every amount as given in `unit`, checked once up front.
    fn try_into_measures_in<Q>(self, unit: &Unit) -> Result<impl Iterator<Item = Measure<Q>>>
    where
        Self: Iterator + Sized,
        Self::Item: IntoAmount,
        Q: Quantity,
    {
        unit.ensure_quantity(Q::KIND)?;
        Ok(self.map(move |amount| {
            Measure::<Q>::from_reference(unit.convert_to_reference(amount.into_amount()))
        }))
    }
}
