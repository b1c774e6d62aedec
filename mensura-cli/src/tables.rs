use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;
use mensura_measures::{Amount, QuantityDescriptor, Scalar, Unit};

pub fn build_quantities_table<'d>(
    descriptors: impl IntoIterator<Item = &'d QuantityDescriptor>,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Quantity", "Dimension", "Exponents", "Reference", "Units"]);
    for descriptor in descriptors {
        let exponents = descriptor.dimension().exponents();
        table.add_row(vec![
            Cell::new(descriptor.name()).add_attribute(Attribute::Bold),
            Cell::new(descriptor.dimension()),
            Cell::new(exponents.iter().join(" ")).add_attribute(Attribute::Dim),
            Cell::new(descriptor.reference_unit()),
            Cell::new(descriptor.units().len()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_units_table(descriptor: &QuantityDescriptor) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Symbol", "Scale", "Offset", "Conversion"]);
    for unit in descriptor.units() {
        let conversion = unit.conversion();
        let offset = conversion.offset();
        table.add_row(vec![
            Cell::new(unit).add_attribute(Attribute::Bold),
            Cell::new(conversion.scale()).set_alignment(CellAlignment::Right),
            Cell::new(offset).set_alignment(CellAlignment::Right).add_attribute(
                if offset == <Amount as Scalar>::ZERO { Attribute::Dim } else { Attribute::NormalIntensity },
            ),
            Cell::new(conversion_kind(unit)).fg(conversion_color(unit)),
        ]);
    }
    table
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn conversion_kind(unit: &Unit) -> &'static str {
    if unit.is_reference() {
        "reference"
    } else if unit.is_affine() {
        "affine"
    } else {
        "linear"
    }
}

fn conversion_color(unit: &Unit) -> Color {
    if unit.is_reference() {
        Color::Green
    } else if unit.is_affine() {
        Color::DarkYellow
    } else {
        Color::Reset
    }
}
