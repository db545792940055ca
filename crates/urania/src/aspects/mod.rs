pub mod calculator;
pub mod types;

pub use calculator::{separation, AspectCalculator};
pub use types::{Aspect, AspectDef, OrbProfile, ASPECT_TABLE};
