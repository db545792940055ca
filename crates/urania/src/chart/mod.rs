pub mod assembler;
pub mod types;

pub use assembler::{event_to_julian_day, south_node_from, ChartAssembler, ChartError};
pub use types::{
    AnglePlacement, BirthEvent, BodyPlacement, CityRecord, HouseCusp, NatalChart, NODE_IDS,
    PLANET_ORDER,
};
