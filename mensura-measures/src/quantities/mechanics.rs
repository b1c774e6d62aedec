quantity! {
    Area = "Area" [2, 0, 0, 0, 0, 0, 0] {
        reference: SQUARE_METER = "m²";
        named: [
            SQUARE_MILLIMETER = "mm²" (1e-6),
            SQUARE_CENTIMETER = "cm²" (1e-4),
            SQUARE_KILOMETER = "km²" (1e6),
            ARE = "a" (100),
            HECTARE = "ha" (10_000),
            SQUARE_FOOT = "ft²" (0.092_903_04),
            ACRE = "ac" (4_046.856_422_4),
        ];
    }
}

quantity! {
    Volume = "Volume" [3, 0, 0, 0, 0, 0, 0] {
        reference: CUBIC_METER = "m³";
        prefixed: [
            MICROLITER = Micro LITER,
            MILLILITER = Milli LITER,
            CENTILITER = Centi LITER,
            DECILITER = Deci LITER,
            HECTOLITER = Hecto LITER,
        ];
        named: [
            CUBIC_CENTIMETER = "cm³" (1e-6),
            LITER = "L" (1e-3),
            GALLON = "gal" (0.003_785_411_784),
        ];
    }
}

quantity! {
    Velocity = "Velocity" [1, 0, -1, 0, 0, 0, 0] {
        reference: METER_PER_SECOND = "m/s";
        prefixed: [
            MILLIMETER_PER_SECOND = Milli,
            KILOMETER_PER_SECOND = Kilo,
        ];
        named: [
            KILOMETER_PER_HOUR = "km/h" (1000.0 / 3600.0),
            MILE_PER_HOUR = "mph" (1609.344 / 3600.0),
            KNOT = "kn" (1852.0 / 3600.0),
        ];
    }
}

quantity! {
    Acceleration = "Acceleration" [1, 0, -2, 0, 0, 0, 0] {
        reference: METER_PER_SECOND_SQUARED = "m/s²";
        named: [
            GAL = "Gal" (0.01),
            STANDARD_GRAVITY = "g₀" (9.806_65),
        ];
    }
}

quantity! {
    Force = "Force" [1, 1, -2, 0, 0, 0, 0] {
        reference: NEWTON = "N";
        prefixed: [
            MICRONEWTON = Micro,
            MILLINEWTON = Milli,
            KILONEWTON = Kilo,
            MEGANEWTON = Mega,
        ];
        named: [
            DYNE = "dyn" (1e-5),
            POUND_FORCE = "lbf" (4.448_221_615_260_5),
        ];
    }
}

quantity! {
    Pressure = "Pressure" [-1, 1, -2, 0, 0, 0, 0] {
        reference: PASCAL = "Pa";
        prefixed: [
            HECTOPASCAL = Hecto,
            KILOPASCAL = Kilo,
            MEGAPASCAL = Mega,
            GIGAPASCAL = Giga,
            MILLIBAR = Milli BAR,
        ];
        named: [
            BAR = "bar" (100_000),
            ATMOSPHERE = "atm" (101_325),
            MILLIMETER_OF_MERCURY = "mmHg" (133.322_387_415),
            POUND_PER_SQUARE_INCH = "psi" (6_894.757_293_168),
        ];
    }
}

quantity! {
    Energy = "Energy" [2, 1, -2, 0, 0, 0, 0] {
        reference: JOULE = "J";
        prefixed: [
            NANOJOULE = Nano,
            MICROJOULE = Micro,
            MILLIJOULE = Milli,
            KILOJOULE = Kilo,
            MEGAJOULE = Mega,
            GIGAJOULE = Giga,
            KILOCALORIE = Kilo CALORIE,
            KILOWATT_HOUR = Kilo WATT_HOUR,
            MEGAWATT_HOUR = Mega WATT_HOUR,
        ];
        named: [
            ELECTRONVOLT = "eV" (1.602_176_634e-19),
            CALORIE = "cal" (4.184),
            WATT_HOUR = "Wh" (3600),
        ];
    }
}

quantity! {
    Power = "Power" [2, 1, -3, 0, 0, 0, 0] {
        reference: WATT = "W";
        prefixed: [
            NANOWATT = Nano,
            MICROWATT = Micro,
            MILLIWATT = Milli,
            KILOWATT = Kilo,
            MEGAWATT = Mega,
            GIGAWATT = Giga,
        ];
        named: [
            HORSEPOWER = "hp" (745.699_872),
        ];
    }
}

quantity! {
    Frequency = "Frequency" [0, 0, -1, 0, 0, 0, 0] {
        reference: HERTZ = "Hz";
        prefixed: [
            KILOHERTZ = Kilo,
            MEGAHERTZ = Mega,
            GIGAHERTZ = Giga,
        ];
        named: [
            PER_MINUTE = "min⁻¹" (1.0 / 60.0),
        ];
    }
}
