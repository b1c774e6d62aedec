/// Declare a quantity marker type together with its units.
///
/// ```
/// use mensura_measures::{Quantity, quantity};
///
/// quantity! {
///     /// Distance travelled per litre of fuel.
///     FuelEconomy = "FuelEconomy" [-2, 0, 0, 0, 0, 0, 0] {
///         reference: METER_PER_CUBIC_METER = "m/m³";
///         prefixed: [KILOMETER_PER_CUBIC_METER = Kilo];
///         named: [KILOMETER_PER_LITER = "km/L" (1e6)];
///     }
/// }
///
/// let economy = FuelEconomy::create_in(15, &KILOMETER_PER_LITER).unwrap();
/// assert_eq!(economy, FuelEconomy::create(15_000_000));
/// ```
///
/// Every unit becomes a lazily built `static`. Prefixed units derive from the reference unit, or
/// from the named unit given after the prefix (`MILLIGRAM = Milli GRAM`). Named units take the
/// scale and an optional offset in reference units: `CELSIUS = "°C" (1.0, 273.15)`.
#[macro_export]
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $name:ident = $display:literal [$($exponent:literal),* $(,)?] {
            reference: $reference:ident = $symbol:literal;
            $(prefixed: [$($prefixed:ident = $prefix:ident $($base:ident)?),* $(,)?];)?
            $(named: [$($named:ident = $named_symbol:literal ($scale:expr $(, $offset:expr)?)),* $(,)?];)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::std::clone::Clone,
            ::std::marker::Copy,
            ::std::fmt::Debug,
            ::std::default::Default,
            ::std::cmp::Eq,
            ::std::hash::Hash,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
        )]
        pub struct $name;

        impl $crate::Quantity for $name {
            const KIND: $crate::QuantityKind = $crate::QuantityKind::new(
                $display,
                $crate::Dimension::from_exponents([$($exponent),*]),
            );

            fn descriptor() -> &'static $crate::QuantityDescriptor {
                static DESCRIPTOR: $crate::__private::Lazy<$crate::QuantityDescriptor> =
                    $crate::__private::Lazy::new(|| {
                        $crate::QuantityDescriptor::builder()
                            .kind(<$name as $crate::Quantity>::KIND)
                            .reference(::std::clone::Clone::clone(&*$reference))
                            .units(::std::vec![
                                $($(::std::clone::Clone::clone(&*$prefixed),)*)?
                                $($(::std::clone::Clone::clone(&*$named),)*)?
                            ])
                            .build()
                            .expect(concat!("invalid unit catalogue for ", stringify!($name)))
                    });
                &DESCRIPTOR
            }
        }

        #[doc = concat!("Reference unit of [`", stringify!($name), "`].")]
        pub static $reference: $crate::__private::Lazy<$crate::Unit> =
            $crate::__private::Lazy::new(|| {
                $crate::Unit::reference(<$name as $crate::Quantity>::KIND, $symbol)
            });

        $($(
            #[doc = concat!("`", $named_symbol, "`")]
            pub static $named: $crate::__private::Lazy<$crate::Unit> =
                $crate::__private::Lazy::new(|| {
                    $crate::Unit::new(
                        <$name as $crate::Quantity>::KIND,
                        $named_symbol,
                        $crate::__conversion!($scale $(, $offset)?),
                    )
                });
        )*)?

        $($(
            pub static $prefixed: $crate::__private::Lazy<$crate::Unit> =
                $crate::__private::Lazy::new(|| {
                    $crate::__prefix_base!($reference $(, $base)?)
                        .with_prefix($crate::Prefix::$prefix)
                });
        )*)?
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __conversion {
    ($scale:expr) => {
        $crate::Conversion::linear($scale)
    };
    ($scale:expr, $offset:expr) => {
        $crate::Conversion::affine($scale, $offset)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __prefix_base {
    ($reference:ident) => {
        $reference
    };
    ($reference:ident, $base:ident) => {
        $base
    };
}
