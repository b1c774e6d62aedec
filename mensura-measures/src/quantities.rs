//! Shipped quantity catalogue.

mod base;
mod mechanics;
mod thermal;

pub use self::{base::*, mechanics::*, thermal::*};
