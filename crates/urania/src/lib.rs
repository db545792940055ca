pub mod aspects;
pub mod chart;
pub mod config;
pub mod configurations;
pub mod ephemeris;
pub mod zodiac;

pub use chart::{BirthEvent, ChartAssembler, ChartError, CityRecord, NatalChart};
pub use config::{load_engine_settings, EngineSettings};
