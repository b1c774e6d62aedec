use clap::Parser;
use mensura_measures::{Amount, Registry};

use crate::prelude::*;

#[derive(Parser)]
pub struct ConvertArgs {
    /// Quantity name, case-insensitive.
    quantity: String,

    /// Amount expressed in the source unit.
    #[clap(allow_negative_numbers = true)]
    amount: Amount,

    /// Source unit symbol, for example `km`.
    from: String,

    /// Target unit symbol, for example `mi`.
    to: String,

    /// Number of fraction digits to print, all significant ones by default.
    #[clap(long, env = "MENSURA_PRECISION")]
    precision: Option<usize>,
}

impl ConvertArgs {
    #[instrument(skip_all, fields(quantity = %self.quantity, from = %self.from, to = %self.to))]
    pub fn run(self) -> Result {
        println!("{}", self.convert()?);
        Ok(())
    }

    fn convert(&self) -> Result<String> {
        let descriptor = Registry::standard().get(&self.quantity)?;
        let from = descriptor.unit(&self.from).context("unknown source unit")?;
        let to = descriptor.unit(&self.to).context("unknown target unit")?;
        let converted = descriptor.convert(self.amount, from, to)?;
        debug!(%converted, "converted");
        let rendered = match self.precision {
            Some(precision) => format!("{converted:.precision$} {to}"),
            None => format!("{converted} {to}"),
        };
        Ok(rendered.trim_end().to_string())
    }
}
