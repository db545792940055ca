use crate::aspects::types::{Aspect, OrbProfile, ASPECT_TABLE};
use crate::chart::types::BodyPlacement;
use crate::ephemeris::normalize_degrees;

/// Shortest-arc angular separation between two longitudes, in [0, 180]
pub fn separation(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// Compute aspects between all unordered pairs in one body set.
    ///
    /// Every aspect type is checked for every pair, so a pair can yield more
    /// than one record under overlapping tolerances; callers wanting a single
    /// aspect per pair take the minimum-orb record. The result is sorted
    /// ascending by orb (tightest first), which callers rely on for top-N
    /// display.
    pub fn detect_aspects(&self, bodies: &[BodyPlacement], orbs: &OrbProfile) -> Vec<Aspect> {
        let mut found = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                self.classify_pair(&bodies[i], &bodies[j], orbs, &mut found);
            }
        }
        found.sort_by(|a, b| a.orb.total_cmp(&b.orb));
        found
    }

    /// Compute aspects between two distinct body sets (natal x transiting).
    /// `body_a` of each record names the first set, `body_b` the second.
    pub fn detect_cross_aspects(
        &self,
        reference: &[BodyPlacement],
        moving: &[BodyPlacement],
        orbs: &OrbProfile,
    ) -> Vec<Aspect> {
        let mut found = Vec::new();
        for a in reference {
            for b in moving {
                if a.id == b.id {
                    continue;
                }
                self.classify_pair(a, b, orbs, &mut found);
            }
        }
        found.sort_by(|a, b| a.orb.total_cmp(&b.orb));
        found
    }

    fn classify_pair(
        &self,
        a: &BodyPlacement,
        b: &BodyPlacement,
        orbs: &OrbProfile,
        found: &mut Vec<Aspect>,
    ) {
        let angle = separation(a.lon, b.lon);
        for def in ASPECT_TABLE {
            let tolerance = orbs.orb_for(def.name);
            let orb = (angle - def.angle).abs();
            if orb <= tolerance {
                let applying =
                    is_applying(a.lon, b.lon, a.speed_lon, b.speed_lon, def.angle, angle);
                found.push(Aspect {
                    body_a: a.id.clone(),
                    body_b: b.id.clone(),
                    aspect_type: def.name.to_string(),
                    exact_angle: def.angle,
                    symbol: def.symbol.to_string(),
                    angle,
                    orb,
                    applying,
                    exact: orb < 0.1,
                    retrograde: a.speed_lon < 0.0 || b.speed_lon < 0.0,
                });
            }
        }
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Determine if an aspect is applying (approaching exact) or separating
fn is_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    aspect_angle: f64,
    current_angle: f64,
) -> bool {
    let relative_speed = speed1 - speed2;

    // If speeds are equal or very close, we can't determine direction reliably
    if relative_speed.abs() < 0.01 {
        return current_angle < aspect_angle + 0.5;
    }

    let mut signed_diff = lon1 - lon2;
    if signed_diff > 180.0 {
        signed_diff -= 360.0;
    } else if signed_diff < -180.0 {
        signed_diff += 360.0;
    }

    let current_distance = (current_angle - aspect_angle).abs();

    // Project forward a small time step and compare distances from exact
    let time_step = 0.1; // days
    let mut future_signed_diff = signed_diff + relative_speed * time_step;
    if future_signed_diff > 180.0 {
        future_signed_diff -= 360.0;
    } else if future_signed_diff < -180.0 {
        future_signed_diff += 360.0;
    }

    let future_distance = (future_signed_diff.abs() - aspect_angle).abs();
    future_distance < current_distance
}
