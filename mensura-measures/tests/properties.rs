use approx::relative_eq;
use mensura_measures::{
    Amount,
    Dimension,
    Error,
    Length,
    Measure,
    Prefix,
    Quantity,
    QuantityDescriptor,
    QuantityKind,
    Registry,
    Scalar,
};
use proptest::prelude::*;

fn arb_dimension() -> impl Strategy<Value = Dimension> {
    prop::array::uniform7(-3..=3_i32).prop_map(Dimension::from)
}

fn arb_amount() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6_f64
}

fn descriptor(name: &'static str, dimension: Dimension) -> QuantityDescriptor {
    QuantityDescriptor::reference_only(QuantityKind::new(name, dimension), "u")
}

/// Relative error the build's amount representation keeps below.
const TOLERANCE: f64 =
    if cfg!(all(feature = "f32", not(feature = "decimal"))) { 1e-5 } else { 1e-9 };

fn close(lhs: Amount, rhs: f64) -> bool {
    relative_eq!(lhs.to_float(), rhs, epsilon = TOLERANCE * 1e3, max_relative = TOLERANCE)
}

proptest! {
    #[test]
    fn times_succeeds_iff_dimensions_add_up(
        lhs in arb_dimension(),
        rhs in arb_dimension(),
        result in arb_dimension(),
    ) {
        let (lhs, rhs) = (descriptor("Lhs", lhs), descriptor("Rhs", rhs));
        let result = descriptor("Result", result);
        let outcome = result.times(&lhs.create(2), &rhs.create(3));
        if result.dimension() == lhs.dimension() + rhs.dimension() {
            prop_assert!(close(outcome.unwrap().reference_amount(), 6.0));
        } else {
            let is_dimension_mismatch = matches!(outcome, Err(Error::DimensionMismatch { .. }));
            prop_assert!(is_dimension_mismatch);
        }
    }

    #[test]
    fn matching_products_and_quotients_succeed(lhs in arb_dimension(), rhs in arb_dimension()) {
        let (lhs, rhs) = (descriptor("Lhs", lhs), descriptor("Rhs", rhs));
        let product = descriptor("Product", lhs.dimension() + rhs.dimension());
        let quotient = descriptor("Quotient", lhs.dimension() - rhs.dimension());
        prop_assert!(product.times(&lhs.create(4), &rhs.create(2)).is_ok());
        let ratio = quotient.divide(&lhs.create(4), &rhs.create(2)).unwrap();
        prop_assert!(close(ratio.reference_amount(), 2.0));
    }

    #[test]
    fn every_unit_round_trips(amount in arb_amount()) {
        for descriptor in Registry::standard().iter() {
            for unit in descriptor.units() {
                let reference = unit.convert_to_reference(Amount::from_float(amount));
                prop_assert!(
                    close(unit.convert_from_reference(reference), amount),
                    "{} does not round-trip {amount}",
                    unit,
                );
            }
        }
    }

    #[test]
    fn amount_in_creation_unit_is_preserved(amount in arb_amount()) {
        for descriptor in Registry::standard().iter() {
            for unit in descriptor.units() {
                let measure = descriptor.create_in(Amount::from_float(amount), unit).unwrap();
                prop_assert!(close(measure.amount_in(unit).unwrap(), amount));
            }
        }
    }

    #[test]
    fn kilo_prefix_scales_by_a_thousand(amount in arb_amount()) {
        for descriptor in Registry::standard().iter() {
            for unit in descriptor.units() {
                let kilo = unit.with_prefix(Prefix::Kilo);
                let expected = unit.convert_to_reference(Amount::from_float(amount * 1000.0));
                prop_assert!(close(
                    kilo.convert_to_reference(Amount::from_float(amount)),
                    expected.to_float(),
                ));
            }
        }
    }

    #[test]
    fn ordering_follows_reference_amounts(lhs in arb_amount(), rhs in arb_amount()) {
        let (lhs_measure, rhs_measure) = (Length::create(lhs), Length::create(rhs));
        let (lhs, rhs) = (Amount::from_float(lhs), Amount::from_float(rhs));
        prop_assert_eq!(lhs_measure < rhs_measure, lhs < rhs);
        prop_assert_eq!(lhs_measure == rhs_measure, lhs == rhs);
        prop_assert_eq!(lhs_measure.cmp(&rhs_measure), rhs_measure.cmp(&lhs_measure).reverse());
        prop_assert_eq!(lhs_measure, lhs_measure);
    }

    #[test]
    fn sum_matches_reference_amounts(amounts in prop::collection::vec(-1_000..1_000_i32, 0..32)) {
        let total: Measure<Length> = amounts.iter().copied().map(Length::create).sum();
        prop_assert_eq!(total, Length::create(amounts.iter().sum::<i32>()));
    }
}
