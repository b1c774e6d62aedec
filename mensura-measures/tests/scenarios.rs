use approx::assert_relative_eq;
use mensura_measures::{
    Amount,
    CELSIUS,
    CENTIMETER,
    DynMeasure,
    Energy,
    Error,
    FAHRENHEIT,
    GRAM,
    HeatCapacity,
    IntoAmount,
    JOULE_PER_KELVIN,
    KILOJOULE_PER_KILOGRAM_KELVIN,
    KILOJOULE_PER_KELVIN,
    KILOMETER,
    Length,
    Mass,
    Measure,
    MeasureLike,
    METER,
    Number,
    Operation,
    Quantity,
    QuantityKind,
    Registry,
    Scalar,
    SpecificHeatCapacity,
    Temperature,
    Time,
    Velocity,
    engine,
    quantity,
};

/// Relative error the build's amount representation keeps below.
const TOLERANCE: f64 =
    if cfg!(all(feature = "f32", not(feature = "decimal"))) { 1e-5 } else { 1e-12 };

quantity! {
    /// Length times time, only here to accept the product of the two.
    Absement = "Absement" [1, 0, 1, 0, 0, 0, 0] {
        reference: METER_SECOND = "m·s";
        prefixed: [KILOMETER_SECOND = Kilo];
        named: [METER_HOUR = "m·h" (3600)];
    }
}

#[test]
fn test_kilometers_through_meters_to_centimeters() {
    let distance = Length::create_in(5, &KILOMETER).unwrap();
    assert_relative_eq!(distance.reference_amount().to_float(), 5000.0);
    assert_relative_eq!(distance.amount_in(&METER).unwrap().to_float(), 5000.0);
    assert_relative_eq!(
        distance.amount_in(&CENTIMETER).unwrap().to_float(),
        500_000.0,
        max_relative = TOLERANCE,
    );
}

#[test]
fn test_heat_capacity_times_number() {
    let capacity = HeatCapacity::create_in(2, &KILOJOULE_PER_KELVIN).unwrap();
    let doubled =
        Measure::<HeatCapacity>::times(&capacity, &Measure::<Number>::from(2.0)).unwrap();
    assert_relative_eq!(doubled.amount_in(&KILOJOULE_PER_KELVIN).unwrap().to_float(), 4.0);
}

#[test]
fn test_length_times_time_needs_matching_dimension() {
    let length = Length::create(3);
    let time = Time::create(4);
    assert_eq!(
        engine::times::<Velocity>(&length, &time),
        Err(Error::DimensionMismatch {
            operation: Operation::Times,
            lhs: Length::KIND,
            rhs: Time::KIND,
            result: Velocity::KIND,
        }),
    );
    let absement = engine::times::<Absement>(&length, &time).unwrap();
    assert_relative_eq!(
        absement.amount_in(&METER_HOUR).unwrap().to_float(),
        12.0 / 3600.0,
        max_relative = TOLERANCE,
    );
}

#[test]
fn test_custom_quantity_catalogue() {
    let descriptor = Absement::descriptor();
    assert_eq!(descriptor.name(), "Absement");
    assert_eq!(descriptor.units().len(), 3);
    assert_eq!(descriptor.reference_unit().symbol(), "m·s");
    assert_eq!(KILOMETER_SECOND.symbol(), "km·s");
}

#[test]
fn test_specific_heat_capacity_chain() {
    let energy = Energy::create(8360);
    let step = Temperature::create_in(20, &CELSIUS).unwrap()
        - Temperature::create_in(0, &CELSIUS).unwrap();
    let capacity: Measure<HeatCapacity> = engine::divide(&energy, &step).unwrap();
    assert_relative_eq!(
        capacity.amount_in(&JOULE_PER_KELVIN).unwrap().to_float(),
        418.0,
        max_relative = TOLERANCE * 1e3,
    );

    let water = Mass::create_in(100, &GRAM).unwrap();
    let specific = Measure::<SpecificHeatCapacity>::divide(&capacity, &water).unwrap();
    assert_relative_eq!(
        specific.amount_in(&KILOJOULE_PER_KILOGRAM_KELVIN).unwrap().to_float(),
        4.18,
        max_relative = TOLERANCE * 1e3,
    );
}

#[test]
fn test_divide_by_zero_duration() {
    assert_eq!(
        engine::divide::<Velocity>(&Length::create(1), &Time::zero()),
        Err(Error::DivideByZero { numerator: Length::KIND, denominator: Time::KIND }),
    );
}

#[test]
fn test_runtime_conversion_through_registry() {
    let temperature = Registry::standard().get("temperature").unwrap();
    let boiling = temperature
        .convert(100_i32.into_amount(), temperature.unit("°C").unwrap(), temperature.unit("°F").unwrap())
        .unwrap();
    assert_relative_eq!(boiling.to_float(), 212.0, max_relative = TOLERANCE);
    assert_eq!(
        temperature.unit("°X").unwrap_err(),
        Error::MissingUnit { quantity: Temperature::KIND, symbol: "°X".to_string() },
    );
}

#[test]
fn test_untyped_product() {
    let registry = Registry::standard();
    let area = registry.get("Area").unwrap();
    let product = area.times(&Length::create(2), &Length::create(3)).unwrap();
    assert_relative_eq!(product.reference_amount().to_float(), 6.0);
    assert!(matches!(
        area.times(&Length::create(2), &Mass::create(3)),
        Err(Error::DimensionMismatch { .. }),
    ));
    assert!(matches!(product.try_into_measure::<Length>(), Err(Error::QuantityMismatch { .. })));
}

/// Operand living outside the crate.
struct Sensor {
    reading: f64,
}

impl MeasureLike for Sensor {
    fn quantity(&self) -> QuantityKind {
        Length::KIND
    }

    fn reference_amount(&self) -> Amount {
        Amount::from_float(self.reading)
    }
}

#[test]
fn test_foreign_operand() {
    let velocity: Measure<Velocity> =
        engine::divide(&Sensor { reading: 42.0 }, &Time::create(2)).unwrap();
    assert_relative_eq!(velocity.reference_amount().to_float(), 21.0);
}

#[test]
fn test_temperature_display() {
    let boiling = Temperature::create_expressed(100, &CELSIUS).unwrap();
    assert_eq!(format!("{boiling:.2}"), "100.00 °C");
    assert_eq!(format!("{:.2}", boiling.express_in(&FAHRENHEIT).unwrap()), "212.00 °F");
    assert_eq!(format!("{:.2}", boiling.measure()), "373.15 K");
    assert_eq!(format!("{:.0}", DynMeasure::from(boiling.measure())), "373 K");
}

#[test]
fn test_error_messages() {
    let error = Length::create_in(1, &CELSIUS).unwrap_err();
    assert_eq!(error.to_string(), "unit `°C` measures Temperature, not Length");
    let error = engine::times::<Velocity>(&Length::create(1), &Time::create(1)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "cannot multiply Length [L] and Time [T] into Velocity [L T⁻¹]",
    );
}
