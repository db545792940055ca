//! House assignment.
//!
//! Places a longitude into one of 12 cusp-bounded house sectors. Houses are
//! half-open spans [cusp_i, cusp_i+1); the 12th span wraps past 0 degrees.

use crate::ephemeris::normalize_degrees;

/// Find the house (1-12) containing a longitude.
///
/// With well-formed monotonic cusps the 12 spans partition the circle and
/// exactly one matches. The house-1 fallback fires only on malformed cusp
/// data from upstream and is logged as an invariant breach.
pub fn house_of(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let cusp1 = normalize_degrees(cusps[i]);
        let cusp2 = normalize_degrees(cusps[(i + 1) % 12]);
        let inside = if cusp2 >= cusp1 {
            lon >= cusp1 && lon < cusp2
        } else {
            lon >= cusp1 || lon < cusp2
        };
        if inside {
            return (i + 1) as u8;
        }
    }

    debug_assert!(false, "longitude {} matched no house span", lon);
    log::warn!(
        "house_of: longitude {} matched no house span, defaulting to house 1",
        lon
    );
    1
}
