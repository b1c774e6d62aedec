use clap::Parser;
use mensura_measures::Registry;

use crate::{prelude::*, tables::build_units_table};

#[derive(Parser)]
pub struct UnitsArgs {
    /// Quantity name, case-insensitive, for example `Length` or `heat capacity`.
    quantity: String,
}

impl UnitsArgs {
    #[instrument(skip_all, fields(quantity = %self.quantity))]
    pub fn run(self) -> Result {
        let descriptor = Registry::standard().get(&self.quantity)?;
        debug!(dimension = %descriptor.dimension(), n_units = descriptor.units().len(), "found");
        println!("{}", build_units_table(descriptor));
        Ok(())
    }
}
