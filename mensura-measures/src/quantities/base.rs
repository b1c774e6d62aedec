quantity! {
    /// Dimensionless ratio.
    Number = "Number" [0, 0, 0, 0, 0, 0, 0] {
        reference: UNITY = "";
        named: [
            PERCENT = "%" (0.01),
            PER_MILLE = "‰" (0.001),
            PARTS_PER_MILLION = "ppm" (1e-6),
        ];
    }
}

quantity! {
    Length = "Length" [1, 0, 0, 0, 0, 0, 0] {
        reference: METER = "m";
        prefixed: [
            PICOMETER = Pico,
            NANOMETER = Nano,
            MICROMETER = Micro,
            MILLIMETER = Milli,
            CENTIMETER = Centi,
            DECIMETER = Deci,
            KILOMETER = Kilo,
        ];
        named: [
            ANGSTROM = "Å" (1e-10),
            INCH = "in" (0.0254),
            FOOT = "ft" (0.3048),
            YARD = "yd" (0.9144),
            MILE = "mi" (1609.344),
            NAUTICAL_MILE = "nmi" (1852),
        ];
    }
}

quantity! {
    /// The reference unit is the kilogram, prefixes apply to the gram.
    Mass = "Mass" [0, 1, 0, 0, 0, 0, 0] {
        reference: KILOGRAM = "kg";
        prefixed: [
            NANOGRAM = Nano GRAM,
            MICROGRAM = Micro GRAM,
            MILLIGRAM = Milli GRAM,
        ];
        named: [
            GRAM = "g" (0.001),
            TONNE = "t" (1000),
            POUND = "lb" (0.453_592_37),
            OUNCE = "oz" (0.028_349_523_125),
        ];
    }
}

quantity! {
    Time = "Time" [0, 0, 1, 0, 0, 0, 0] {
        reference: SECOND = "s";
        prefixed: [
            PICOSECOND = Pico,
            NANOSECOND = Nano,
            MICROSECOND = Micro,
            MILLISECOND = Milli,
        ];
        named: [
            MINUTE = "min" (60),
            HOUR = "h" (3600),
            DAY = "d" (86_400),
            WEEK = "wk" (604_800),
        ];
    }
}

quantity! {
    ElectricCurrent = "ElectricCurrent" [0, 0, 0, 1, 0, 0, 0] {
        reference: AMPERE = "A";
        prefixed: [
            NANOAMPERE = Nano,
            MICROAMPERE = Micro,
            MILLIAMPERE = Milli,
            KILOAMPERE = Kilo,
        ];
    }
}

quantity! {
    /// Thermodynamic temperature, Celsius and Fahrenheit convert affinely.
    Temperature = "Temperature" [0, 0, 0, 0, 1, 0, 0] {
        reference: KELVIN = "K";
        prefixed: [
            NANOKELVIN = Nano,
            MICROKELVIN = Micro,
            MILLIKELVIN = Milli,
        ];
        named: [
            CELSIUS = "°C" (1, 273.15),
            FAHRENHEIT = "°F" (5.0 / 9.0, 459.67 * 5.0 / 9.0),
            RANKINE = "°R" (5.0 / 9.0),
        ];
    }
}

quantity! {
    LuminousIntensity = "LuminousIntensity" [0, 0, 0, 0, 0, 1, 0] {
        reference: CANDELA = "cd";
        prefixed: [
            MICROCANDELA = Micro,
            MILLICANDELA = Milli,
            KILOCANDELA = Kilo,
        ];
    }
}

quantity! {
    AmountOfSubstance = "AmountOfSubstance" [0, 0, 0, 0, 0, 0, 1] {
        reference: MOLE = "mol";
        prefixed: [
            PICOMOLE = Pico,
            NANOMOLE = Nano,
            MICROMOLE = Micro,
            MILLIMOLE = Milli,
            KILOMOLE = Kilo,
        ];
    }
}
