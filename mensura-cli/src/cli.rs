mod convert;
mod quantities;
mod units;

use clap::{Parser, Subcommand};

use crate::cli::{convert::ConvertArgs, quantities::QuantitiesArgs, units::UnitsArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the known quantities.
    #[clap(name = "quantities")]
    Quantities(QuantitiesArgs),

    /// List the units of one quantity.
    #[clap(name = "units")]
    Units(UnitsArgs),

    /// Convert an amount between two units of the same quantity.
    #[clap(name = "convert")]
    Convert(ConvertArgs),
}
