use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static aspect definition
#[derive(Debug, Clone, Copy)]
pub struct AspectDef {
    pub name: &'static str,
    pub angle: f64,
    pub symbol: &'static str,
}

/// The five major aspects, in order of frequency (most common first)
pub const ASPECT_TABLE: &[AspectDef] = &[
    AspectDef { name: "conjunction", angle: 0.0, symbol: "\u{260c}" },
    AspectDef { name: "opposition", angle: 180.0, symbol: "\u{260d}" },
    AspectDef { name: "trine", angle: 120.0, symbol: "\u{25b3}" },
    AspectDef { name: "square", angle: 90.0, symbol: "\u{25a1}" },
    AspectDef { name: "sextile", angle: 60.0, symbol: "\u{2736}" },
];

/// A classified angular relationship between two chart bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: String,
    pub body_b: String,
    /// Aspect type: "conjunction", "trine", etc.
    pub aspect_type: String,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub exact_angle: f64,
    pub symbol: String,
    /// Measured shortest-arc separation (0-180)
    pub angle: f64,
    /// Deviation from the exact angle; smaller is tighter
    pub orb: f64,
    /// Whether the aspect is applying (approaching exact)
    pub applying: bool,
    /// Whether the aspect is exact (within 0.1 degrees)
    pub exact: bool,
    /// Whether either body is retrograde
    pub retrograde: bool,
}

/// Orb tolerances per aspect type. Always passed explicitly into the
/// detector; different call sites use different profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbProfile {
    pub orbs: HashMap<String, f64>,
}

impl OrbProfile {
    /// Wide orbs for natal analysis
    pub fn natal() -> Self {
        Self {
            orbs: HashMap::from([
                ("conjunction".to_string(), 8.0),
                ("opposition".to_string(), 8.0),
                ("trine".to_string(), 7.0),
                ("square".to_string(), 6.0),
                ("sextile".to_string(), 5.0),
            ]),
        }
    }

    /// Uniform narrow orbs for daily transits
    pub fn transit() -> Self {
        Self {
            orbs: ASPECT_TABLE
                .iter()
                .map(|def| (def.name.to_string(), 2.0))
                .collect(),
        }
    }

    /// Tolerance for an aspect type; unconfigured aspects are not detected
    pub fn orb_for(&self, aspect_type: &str) -> f64 {
        self.orbs.get(aspect_type).copied().unwrap_or(0.0)
    }
}
