use crate::aspects::calculator::AspectCalculator;
use crate::aspects::types::{Aspect, OrbProfile};
use crate::chart::types::{
    AnglePlacement, BirthEvent, BodyPlacement, CityRecord, HouseCusp, NatalChart, PLANET_ORDER,
};
use crate::config::EngineSettings;
use crate::configurations::detector::detect_configurations;
use crate::configurations::types::PatternOrbs;
use crate::ephemeris::adapter::{datetime_to_julian_day, normalize_degrees};
use crate::ephemeris::types::BodyPosition;
use crate::ephemeris::{EphemerisError, SwissEphemerisAdapter};
use crate::zodiac::houses::house_of;
use crate::zodiac::rulers::rulerships;
use crate::zodiac::signs::resolve_sign;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can fail a chart build
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Oracle(#[from] EphemerisError),
    #[error("City {city} has no UTC offset configured")]
    MissingUtcOffset { city: String },
    #[error("Unknown city: {name}")]
    UnknownCity { name: String },
    #[error("Ephemeris initialization failed: {message}")]
    Init { message: String },
}

/// Builds natal charts for birth events.
///
/// Each assembler owns its ephemeris adapter; independent builds use
/// independent assemblers and need no locking. Initialization is the only
/// suspending step; once ready, every calculation is synchronous.
pub struct ChartAssembler {
    adapter: SwissEphemerisAdapter,
    calculator: AspectCalculator,
    house_system: String,
    cities: Vec<CityRecord>,
    natal_orbs: OrbProfile,
    transit_orbs: OrbProfile,
    pattern_orbs: PatternOrbs,
}

impl ChartAssembler {
    /// Initialize the assembler. Ephemeris setup touches the filesystem and
    /// runs on a blocking task.
    pub async fn new(settings: EngineSettings) -> Result<Self, ChartError> {
        let path = settings.ephemeris_path.clone();
        let adapter = tokio::task::spawn_blocking(move || SwissEphemerisAdapter::new(path))
            .await
            .map_err(|e| ChartError::Init {
                message: e.to_string(),
            })??;

        Ok(Self {
            adapter,
            calculator: AspectCalculator::new(),
            house_system: settings.house_system,
            cities: settings.cities,
            natal_orbs: settings.natal_orbs,
            transit_orbs: settings.transit_orbs,
            pattern_orbs: settings.pattern_orbs,
        })
    }

    /// Build the chart for a birth event. Fails whole; no partial chart is
    /// ever returned.
    pub fn build(&self, event: &BirthEvent) -> Result<NatalChart, ChartError> {
        let jd = event_to_julian_day(event)?;

        // Houses first; everything downstream needs the cusps
        let frame =
            self.adapter
                .calc_houses(jd, event.city.lat, event.city.lon, &self.house_system)?;

        let cusps: Vec<HouseCusp> = frame
            .cusps
            .iter()
            .enumerate()
            .map(|(i, &lon)| HouseCusp {
                house: (i + 1) as u8,
                lon,
                sign: resolve_sign(lon),
            })
            .collect();
        let ruler_map = rulerships(&cusps);

        let mut planets = Vec::with_capacity(PLANET_ORDER.len());
        for id in PLANET_ORDER {
            let position = self.adapter.calc_body(id, jd)?;
            planets.push(place_body(id, &position, false, &frame.cusps, &ruler_map));
        }

        let north = self.adapter.calc_body("north_node", jd)?;
        let south = south_node_from(&north);
        let nodes = vec![
            place_body("north_node", &north, true, &frame.cusps, &ruler_map),
            place_body("south_node", &south, true, &frame.cusps, &ruler_map),
        ];

        let mut all_bodies = planets.clone();
        all_bodies.extend(nodes.iter().cloned());
        let aspects = self.calculator.detect_aspects(&all_bodies, &self.natal_orbs);
        let configurations = detect_configurations(&all_bodies, &self.pattern_orbs);

        let asc = frame.angles.get("asc").copied().unwrap_or(0.0);
        let mc = frame.angles.get("mc").copied().unwrap_or(0.0);

        log::debug!(
            "natal chart built: {} aspects, {} configurations",
            aspects.len(),
            configurations.len()
        );

        Ok(NatalChart {
            planets,
            nodes,
            ascendant: AnglePlacement {
                lon: asc,
                sign: resolve_sign(asc),
            },
            midheaven: AnglePlacement {
                lon: mc,
                sign: resolve_sign(mc),
            },
            cusps,
            aspects,
            configurations,
        })
    }

    /// Build a chart for a configured city by name
    pub fn build_for_city(
        &self,
        city_name: &str,
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
    ) -> Result<NatalChart, ChartError> {
        let city = self
            .cities
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(city_name))
            .ok_or_else(|| ChartError::UnknownCity {
                name: city_name.to_string(),
            })?
            .clone();
        self.build(&BirthEvent { date, time, city })
    }

    /// Aspects between current positions and a natal chart, under the
    /// narrow transit profile. Transiting planets are placed against the
    /// natal house cusps.
    pub fn transits(
        &self,
        natal: &NatalChart,
        at: DateTime<Utc>,
    ) -> Result<Vec<Aspect>, ChartError> {
        let jd = datetime_to_julian_day(at);

        let mut cusp_lons = [0.0; 12];
        for cusp in &natal.cusps {
            cusp_lons[(cusp.house - 1) as usize] = cusp.lon;
        }

        let empty = HashMap::new();
        let mut moving = Vec::with_capacity(PLANET_ORDER.len());
        for id in PLANET_ORDER {
            let position = self.adapter.calc_body(id, jd)?;
            moving.push(place_body(id, &position, false, &cusp_lons, &empty));
        }

        Ok(self
            .calculator
            .detect_cross_aspects(&natal.bodies(), &moving, &self.transit_orbs))
    }
}

/// Resolve a birth event to a Julian Day (UT). The city's fixed UTC offset
/// is applied directly; rejected before any oracle call if missing.
pub fn event_to_julian_day(event: &BirthEvent) -> Result<f64, ChartError> {
    let offset_hours = event
        .city
        .utc_offset_hours
        .ok_or_else(|| ChartError::MissingUtcOffset {
            city: event.city.name.clone(),
        })?;

    let naive_local = event.date.and_time(event.time);
    let offset_secs = (offset_hours * 3600.0).round() as i64;
    let utc = Utc.from_utc_datetime(&(naive_local - chrono::Duration::seconds(offset_secs)));
    Ok(datetime_to_julian_day(utc))
}

/// Derive the south node from the north node.
///
/// Invariant: south longitude is the antipode of north, and south speed is
/// the negation of north speed. The nodes are a symmetric mathematical
/// construct, not independently orbiting bodies.
pub fn south_node_from(north: &BodyPosition) -> BodyPosition {
    let speed = -north.speed_lon;
    BodyPosition {
        lon: normalize_degrees(north.lon + 180.0),
        lat: 0.0,
        distance: north.distance,
        speed_lon: speed,
        retrograde: speed < 0.0,
    }
}

fn place_body(
    id: &str,
    position: &BodyPosition,
    is_node: bool,
    cusps: &[f64; 12],
    ruler_map: &HashMap<String, Vec<u8>>,
) -> BodyPlacement {
    let ruled_houses = if is_node {
        Vec::new()
    } else {
        ruler_map.get(id).cloned().unwrap_or_default()
    };
    BodyPlacement {
        id: id.to_string(),
        lon: position.lon,
        lat: position.lat,
        distance: position.distance,
        speed_lon: position.speed_lon,
        retrograde: position.retrograde,
        is_node,
        sign: resolve_sign(position.lon),
        house: house_of(position.lon, cusps),
        ruled_houses,
    }
}
