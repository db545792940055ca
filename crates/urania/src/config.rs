//! Engine configuration loading.
//!
//! Settings come from `configs/urania.toml`: ephemeris data path, house
//! system, the city records callers pick from, and optional orb overrides.

use crate::aspects::types::OrbProfile;
use crate::chart::types::CityRecord;
use crate::configurations::types::PatternOrbs;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Resolved engine settings
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub ephemeris_path: Option<PathBuf>,
    pub house_system: String,
    pub cities: Vec<CityRecord>,
    pub natal_orbs: OrbProfile,
    pub transit_orbs: OrbProfile,
    pub pattern_orbs: PatternOrbs,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            house_system: "placidus".to_string(),
            cities: Vec::new(),
            natal_orbs: OrbProfile::natal(),
            transit_orbs: OrbProfile::transit(),
            pattern_orbs: PatternOrbs::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EngineToml {
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default = "default_house_system")]
    house_system: String,
    #[serde(default)]
    cities: Vec<CityToml>,
    #[serde(default)]
    orbs: Option<OrbsToml>,
}

fn default_house_system() -> String {
    "placidus".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct CityToml {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    utc_offset_hours: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct OrbsToml {
    #[serde(default)]
    natal: HashMap<String, f64>,
    #[serde(default)]
    transit: HashMap<String, f64>,
    #[serde(default)]
    patterns: Option<PatternOrbsToml>,
}

#[derive(Debug, Clone, Deserialize)]
struct PatternOrbsToml {
    trine: Option<f64>,
    opposition: Option<f64>,
    square: Option<f64>,
}

/// Try common relative paths for `configs/urania.toml`.
pub fn read_engine_toml_text() -> anyhow::Result<String> {
    let paths = ["configs/urania.toml", "../../configs/urania.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", paths);
}

/// Load engine settings from the config file, over stock defaults.
pub fn load_engine_settings() -> anyhow::Result<EngineSettings> {
    let text = read_engine_toml_text()?;
    parse_engine_settings(&text)
}

/// Parse engine settings from TOML text
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let parsed: EngineToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;

    let mut settings = EngineSettings {
        ephemeris_path: parsed.ephemeris_path,
        house_system: parsed.house_system,
        cities: parsed
            .cities
            .into_iter()
            .map(|c| CityRecord {
                name: c.name,
                lat: c.lat,
                lon: c.lon,
                utc_offset_hours: c.utc_offset_hours,
            })
            .collect(),
        ..EngineSettings::default()
    };

    if let Some(orbs) = parsed.orbs {
        for (aspect, orb) in orbs.natal {
            settings.natal_orbs.orbs.insert(aspect, orb);
        }
        for (aspect, orb) in orbs.transit {
            settings.transit_orbs.orbs.insert(aspect, orb);
        }
        if let Some(patterns) = orbs.patterns {
            if let Some(trine) = patterns.trine {
                settings.pattern_orbs.trine = trine;
            }
            if let Some(opposition) = patterns.opposition {
                settings.pattern_orbs.opposition = opposition;
            }
            if let Some(square) = patterns.square {
                settings.pattern_orbs.square = square;
            }
        }
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let settings = parse_engine_settings("").unwrap();
        assert_eq!(settings.house_system, "placidus");
        assert!(settings.cities.is_empty());
        assert_eq!(settings.natal_orbs.orb_for("conjunction"), 8.0);
    }

    #[test]
    fn test_parse_cities_and_orbs() {
        let text = r#"
house_system = "placidus"

[[cities]]
name = "London"
lat = 51.5074
lon = -0.1278
utc_offset_hours = 0.0

[[cities]]
name = "Delhi"
lat = 28.6139
lon = 77.209

[orbs.natal]
trine = 6.5

[orbs.patterns]
square = 4.0
"#;
        let settings = parse_engine_settings(text).unwrap();
        assert_eq!(settings.cities.len(), 2);
        assert_eq!(settings.cities[0].utc_offset_hours, Some(0.0));
        assert_eq!(settings.cities[1].utc_offset_hours, None);
        assert_eq!(settings.natal_orbs.orb_for("trine"), 6.5);
        // Untouched orbs keep stock values
        assert_eq!(settings.natal_orbs.orb_for("conjunction"), 8.0);
        assert_eq!(settings.pattern_orbs.square, 4.0);
        assert_eq!(settings.pattern_orbs.trine, 6.0);
    }
}
