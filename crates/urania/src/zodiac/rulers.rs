//! Sign rulers.
//!
//! Maps each zodiac sign to its ruling bodies. Three signs carry two rulers
//! (classical plus modern); the rest carry one.

use crate::chart::types::HouseCusp;
use std::collections::HashMap;

// (sign slug, rulers)
pub const SIGN_RULERS: &[(&str, &[&str])] = &[
    ("aries", &["mars"]),
    ("taurus", &["venus"]),
    ("gemini", &["mercury"]),
    ("cancer", &["moon"]),
    ("leo", &["sun"]),
    ("virgo", &["mercury"]),
    ("libra", &["venus"]),
    ("scorpio", &["mars", "pluto"]),
    ("sagittarius", &["jupiter"]),
    ("capricorn", &["saturn"]),
    ("aquarius", &["saturn", "uranus"]),
    ("pisces", &["jupiter", "neptune"]),
];

lazy_static::lazy_static! {
    static ref RULERS_BY_SIGN: HashMap<&'static str, &'static [&'static str]> =
        SIGN_RULERS.iter().copied().collect();
}

/// Rulers of a sign by index (0-11)
pub fn rulers_of_sign(sign_index: u8) -> &'static [&'static str] {
    SIGN_RULERS[(sign_index % 12) as usize].1
}

/// Rulers of a sign by slug; unknown slugs rule nothing
pub fn rulers_of(sign: &str) -> &'static [&'static str] {
    RULERS_BY_SIGN.get(sign).copied().unwrap_or(&[])
}

/// Map each ruling body to the houses whose cusp sign it rules.
///
/// Bodies absent from the result rule no houses; lunar nodes never appear
/// in the ruler table and so never rule.
pub fn rulerships(cusps: &[HouseCusp]) -> HashMap<String, Vec<u8>> {
    let mut map: HashMap<String, Vec<u8>> = HashMap::new();
    for cusp in cusps {
        for ruler in rulers_of(&cusp.sign.sign) {
            map.entry((*ruler).to_string()).or_default().push(cusp.house);
        }
    }
    map
}
