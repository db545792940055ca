use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position data for a single body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
    /// Distance from Earth in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day, negative while retrograde)
    pub speed_lon: f64,
    /// Whether the body is retrograde
    pub retrograde: bool,
}

/// House cusps and angular points for one moment and place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseFrame {
    /// House system name
    pub system: String,
    /// Cusps for houses 1..=12, in house order
    pub cusps: [f64; 12],
    /// Angles: "asc", "mc", "ic", "dc" -> degrees
    pub angles: HashMap<String, f64>,
}
