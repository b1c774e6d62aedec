use clap::Parser;
use mensura_measures::{Dimension, Registry};

use crate::{prelude::*, tables::build_quantities_table};

#[derive(Parser)]
pub struct QuantitiesArgs {
    /// Only list quantities of this dimension, as seven comma-separated exponents
    /// (length, mass, time, current, temperature, luminous intensity, substance amount).
    #[clap(long, value_parser = parse_dimension, allow_hyphen_values = true)]
    dimension: Option<Dimension>,
}

impl QuantitiesArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let registry = Registry::standard();
        let table = match self.dimension {
            Some(dimension) => {
                let descriptors: Vec<_> = registry.by_dimension(dimension).collect();
                if descriptors.is_empty() {
                    warn!(%dimension, "no quantity has this dimension");
                }
                build_quantities_table(descriptors)
            }
            None => build_quantities_table(registry.iter()),
        };
        println!("{table}");
        Ok(())
    }
}

fn parse_dimension(text: &str) -> Result<Dimension> {
    let exponents = text
        .split(',')
        .map(|part| {
            part.trim().parse::<i32>().with_context(|| format!("invalid exponent `{part}`"))
        })
        .collect::<Result<Vec<_>>>()?;
    ensure!(exponents.len() == 7, "expected 7 exponents, got {}", exponents.len());
    let mut vector = [0; 7];
    vector.copy_from_slice(&exponents);
    Ok(Dimension::from(vector))
}
