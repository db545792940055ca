use crate::ephemeris::types::{BodyPosition, HouseFrame};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use swisseph::swe::{calc_ut, houses_ex, julday, revjul};
use swisseph::{AscMc, Cusp};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body_id} at JD {jd}: {message}")]
    CalculationFailed {
        body_id: String,
        jd: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

// Swiss Ephemeris body IDs. SUN=0, MOON=1, ... PLUTO=9, TRUE_NODE=11.
const BODY_IDS: &[(&str, i32)] = &[
    ("sun", 0),
    ("moon", 1),
    ("mercury", 2),
    ("venus", 3),
    ("mars", 4),
    ("jupiter", 5),
    ("saturn", 6),
    ("uranus", 7),
    ("neptune", 8),
    ("pluto", 9),
    ("north_node", 11), // TRUE_NODE
];

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, u8)] = &[
    ("placidus", b'P'),
    ("whole_sign", b'W'),
    ("koch", b'K'),
    ("equal", b'E'),
    ("regiomontanus", b'R'),
    ("campanus", b'C'),
    ("alcabitius", b'A'),
    ("morinus", b'M'),
];

// FLG_SWIEPH = 2 (use Swiss Ephemeris files); tropical zodiac only.
const EPHE_FLAGS: i32 = 2;

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let mut normalized = value % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Swiss Ephemeris adapter. One instance per chart build; instances own no
/// shared state and may be used concurrently with each other.
pub struct SwissEphemerisAdapter {
    _ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        Ok(Self {
            _ephemeris_path: path,
        })
    }

    /// Calculate the position of a single body at a Julian Day (UT)
    pub fn calc_body(&self, body_id: &str, jd: f64) -> Result<BodyPosition, EphemerisError> {
        let body_code = BODY_IDS
            .iter()
            .find(|(id, _)| *id == body_id)
            .map(|(_, code)| *code)
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body_id: body_id.to_string(),
                jd,
                message: format!("Unknown body ID: {}", body_id),
            })?;

        let result = calc_ut(jd, body_code as u32, EPHE_FLAGS as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body_id: body_id.to_string(),
                jd,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        let longitude = normalize_degrees(out[0]);
        let latitude = out[1];
        let distance = out[2];
        let speed_longitude = out[3];

        Ok(BodyPosition {
            lon: longitude,
            lat: latitude,
            distance,
            speed_lon: speed_longitude,
            retrograde: speed_longitude < 0.0,
        })
    }

    /// Calculate house cusps and angles for a moment and geographic position
    pub fn calc_houses(
        &self,
        jd: f64,
        lat: f64,
        lon: f64,
        house_system: &str,
    ) -> Result<HouseFrame, EphemerisError> {
        let system_byte = get_house_system_byte(house_system)?;
        let (c, a) = houses_ex(jd, EPHE_FLAGS, lat, lon, system_byte as i32);

        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusp_values = [
            cusps.first,
            cusps.second,
            cusps.third,
            cusps.fourth,
            cusps.fifth,
            cusps.sixth,
            cusps.seventh,
            cusps.eighth,
            cusps.ninth,
            cusps.tenth,
            cusps.eleventh,
            cusps.twelfth,
        ];

        // The house routine reports failure (e.g. Placidus near the poles)
        // through degenerate output rather than an error value.
        if cusp_values.iter().any(|v| !v.is_finite())
            || cusp_values.iter().all(|v| *v == cusp_values[0])
        {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} cusps degenerate at lat {:.4}, lon {:.4}",
                    house_system, lat, lon
                ),
            });
        }

        let mut frame_cusps = [0.0; 12];
        for (i, &cusp) in cusp_values.iter().enumerate() {
            frame_cusps[i] = normalize_degrees(cusp);
        }

        let asc = normalize_degrees(ascmc.ascendant);
        let mc = normalize_degrees(ascmc.mc);
        let ic = normalize_degrees(mc + 180.0);
        let dc = normalize_degrees(asc + 180.0);

        Ok(HouseFrame {
            system: house_system.to_string(),
            cusps: frame_cusps,
            angles: HashMap::from([
                ("asc".to_string(), asc),
                ("mc".to_string(), mc),
                ("ic".to_string(), ic),
                ("dc".to_string(), dc),
            ]),
        })
    }
}

/// Convert UTC datetime to Julian Day
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let year = dt.year();
    let month = dt.month();
    let day = dt.day();
    let hour = dt.hour() as f64;
    let minute = dt.minute() as f64;
    let second = dt.second() as f64;
    let hour_decimal = hour + minute / 60.0 + second / 3600.0;

    // GREG_CAL = 1
    julday(year, month as i32, day as i32, hour_decimal, 1)
}

/// Convert Julian Day to UTC datetime
pub fn julian_day_to_datetime(jd: f64) -> DateTime<Utc> {
    // GREG_CAL = 1
    let (year, month, day, hour_decimal) = revjul(jd, 1);
    let hour = hour_decimal as u32;
    let minute = ((hour_decimal - hour as f64) * 60.0) as u32;
    let second = (((hour_decimal - hour as f64) * 60.0 - minute as f64) * 60.0) as u32;
    chrono::Utc
        .with_ymd_and_hms(year, month as u32, day as u32, hour, minute, second)
        .single()
        .unwrap_or_else(chrono::Utc::now)
}

/// Convert house system string to the Swiss Ephemeris system code
fn get_house_system_byte(house_system: &str) -> Result<u8, EphemerisError> {
    HOUSE_SYSTEMS
        .iter()
        .find(|(name, _)| *name == house_system.to_lowercase())
        .map(|(_, byte)| *byte)
        .ok_or_else(|| EphemerisError::InvalidHouseSystem {
            system: house_system.to_string(),
            valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(360.0001) - 0.0001).abs() < 1e-9);
        assert!((normalize_degrees(-0.0005) - 359.9995).abs() < 1e-9);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-9);
        assert_eq!(normalize_degrees(0.0), 0.0);
    }

    #[test]
    fn test_house_system_byte() {
        assert_eq!(get_house_system_byte("placidus").unwrap(), b'P');
        assert_eq!(get_house_system_byte("Placidus").unwrap(), b'P');
        assert!(get_house_system_byte("porphyry").is_err());
    }
}
