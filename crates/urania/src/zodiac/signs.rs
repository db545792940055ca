//! Zodiac sign resolution.
//!
//! Maps ecliptic longitudes onto the 12 fixed 30-degree signs.

use crate::ephemeris::normalize_degrees;
use serde::{Deserialize, Serialize};

pub const SIGN_SIZE: f64 = 30.0;

// (slug, display name)
pub const SIGN_ORDER: &[(&str, &str)] = &[
    ("aries", "Aries"),
    ("taurus", "Taurus"),
    ("gemini", "Gemini"),
    ("cancer", "Cancer"),
    ("leo", "Leo"),
    ("virgo", "Virgo"),
    ("libra", "Libra"),
    ("scorpio", "Scorpio"),
    ("sagittarius", "Sagittarius"),
    ("capricorn", "Capricorn"),
    ("aquarius", "Aquarius"),
    ("pisces", "Pisces"),
];

/// A longitude expressed as a sign and the degrees travelled into it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignPlacement {
    pub sign: String,
    pub sign_index: u8,
    /// Degrees within the sign, [0, 30)
    pub degrees: f64,
}

/// Resolve a longitude into its sign placement. Total over the real line;
/// out-of-range oracle output is normalized first.
pub fn resolve_sign(longitude: f64) -> SignPlacement {
    let normalized = normalize_degrees(longitude);
    let sign_index = ((normalized / SIGN_SIZE) as usize) % 12;
    SignPlacement {
        sign: SIGN_ORDER[sign_index].0.to_string(),
        sign_index: sign_index as u8,
        degrees: normalized - sign_index as f64 * SIGN_SIZE,
    }
}

/// Display name for a sign slug
pub fn sign_display_name(slug: &str) -> &'static str {
    SIGN_ORDER
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, name)| *name)
        .unwrap_or("")
}
