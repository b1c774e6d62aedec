quantity! {
    /// Energy per temperature step, in joules per kelvin.
    HeatCapacity = "HeatCapacity" [2, 1, -2, 0, -1, 0, 0] {
        reference: JOULE_PER_KELVIN = "J/K";
        prefixed: [
            NANOJOULE_PER_KELVIN = Nano,
            MICROJOULE_PER_KELVIN = Micro,
            MILLIJOULE_PER_KELVIN = Milli,
            KILOJOULE_PER_KELVIN = Kilo,
            MEGAJOULE_PER_KELVIN = Mega,
            GIGAJOULE_PER_KELVIN = Giga,
        ];
    }
}

quantity! {
    SpecificHeatCapacity = "SpecificHeatCapacity" [2, 0, -2, 0, -1, 0, 0] {
        reference: JOULE_PER_KILOGRAM_KELVIN = "J/(kg·K)";
        prefixed: [
            KILOJOULE_PER_KILOGRAM_KELVIN = Kilo,
        ];
        named: [
            CALORIE_PER_GRAM_KELVIN = "cal/(g·K)" (4184),
        ];
    }
}
