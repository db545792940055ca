pub mod adapter;
pub mod types;

pub use adapter::{
    datetime_to_julian_day, julian_day_to_datetime, normalize_degrees, EphemerisError,
    SwissEphemerisAdapter,
};
pub use types::{BodyPosition, HouseFrame};
