use crate::aspects::types::Aspect;
use crate::configurations::types::ChartConfiguration;
use crate::zodiac::signs::SignPlacement;
use serde::{Deserialize, Serialize};

/// The ten classical planets, in traditional order
pub const PLANET_ORDER: &[&str] = &[
    "sun", "moon", "mercury", "venus", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto",
];

/// The two derived lunar-node points
pub const NODE_IDS: &[&str] = &["north_node", "south_node"];

/// A city record supplied by the caller. The offset is one fixed civil
/// offset for the city, not a timezone database lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub utc_offset_hours: Option<f64>,
}

/// A birth event: civil date and time at a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthEvent {
    pub date: chrono::NaiveDate,
    pub time: chrono::NaiveTime,
    pub city: CityRecord,
}

/// One house cusp with its sign placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house: u8,
    pub lon: f64,
    pub sign: SignPlacement,
}

/// An angular point (ascendant, midheaven) with its sign placement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnglePlacement {
    pub lon: f64,
    pub sign: SignPlacement,
}

/// A chart body: position, sign, house, and the houses it rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub id: String,
    /// Longitude in degrees (0-360)
    pub lon: f64,
    pub lat: f64,
    /// Distance from Earth in AU
    pub distance: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
    pub retrograde: bool,
    /// Lunar nodes are derived points, excluded from rulership and patterns
    pub is_node: bool,
    pub sign: SignPlacement,
    pub house: u8,
    /// Houses whose cusp sign this body rules; empty for nodes
    pub ruled_houses: Vec<u8>,
}

/// A complete natal chart. Immutable once assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NatalChart {
    /// The ten planets, in `PLANET_ORDER`
    pub planets: Vec<BodyPlacement>,
    /// North and south lunar nodes
    pub nodes: Vec<BodyPlacement>,
    pub ascendant: AnglePlacement,
    pub midheaven: AnglePlacement,
    /// The 12 house cusps, in house order
    pub cusps: Vec<HouseCusp>,
    /// All aspects over planets and nodes, sorted ascending by orb
    pub aspects: Vec<Aspect>,
    pub configurations: Vec<ChartConfiguration>,
}

impl NatalChart {
    /// Serialize the chart as the opaque record handed to persistence
    pub fn to_record(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// All aspect-bearing bodies: planets then nodes
    pub fn bodies(&self) -> Vec<BodyPlacement> {
        let mut all = self.planets.clone();
        all.extend(self.nodes.iter().cloned());
        all
    }
}
