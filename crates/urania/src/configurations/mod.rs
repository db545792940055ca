pub mod detector;
pub mod types;

pub use detector::detect_configurations;
pub use types::{ChartConfiguration, ConfigurationKind, PatternOrbs};
