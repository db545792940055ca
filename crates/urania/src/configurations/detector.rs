//! Chart configuration detection.
//!
//! Configurations are multi-body geometric patterns layered on top of the
//! pairwise aspects: grand trines, T-squares, and house stelliums. Lunar
//! nodes are excluded from every pattern.

use crate::aspects::calculator::separation;
use crate::chart::types::BodyPlacement;
use crate::configurations::types::{ChartConfiguration, ConfigurationKind, PatternOrbs};
use std::collections::HashMap;

/// Detect configurations over a placement set.
///
/// Overlapping triples may produce overlapping patterns; the output is not
/// deduplicated and carries no ordering contract.
pub fn detect_configurations(
    placements: &[BodyPlacement],
    orbs: &PatternOrbs,
) -> Vec<ChartConfiguration> {
    let bodies: Vec<&BodyPlacement> = placements.iter().filter(|p| !p.is_node).collect();
    let mut found = Vec::new();
    find_grand_trines(&bodies, orbs, &mut found);
    find_t_squares(&bodies, orbs, &mut found);
    find_stelliums(&bodies, &mut found);
    found
}

fn within(lon1: f64, lon2: f64, target: f64, orb: f64) -> bool {
    (separation(lon1, lon2) - target).abs() <= orb
}

/// Three bodies in mutual 120-degree relationships
fn find_grand_trines(
    bodies: &[&BodyPlacement],
    orbs: &PatternOrbs,
    found: &mut Vec<ChartConfiguration>,
) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if !within(bodies[i].lon, bodies[j].lon, 120.0, orbs.trine) {
                continue;
            }
            for k in (j + 1)..bodies.len() {
                if within(bodies[j].lon, bodies[k].lon, 120.0, orbs.trine)
                    && within(bodies[i].lon, bodies[k].lon, 120.0, orbs.trine)
                {
                    found.push(ChartConfiguration {
                        kind: ConfigurationKind::GrandTrine,
                        bodies: vec![
                            bodies[i].id.clone(),
                            bodies[j].id.clone(),
                            bodies[k].id.clone(),
                        ],
                        description: format!(
                            "{}, {} and {} form a closed triangle of mutual trines",
                            display_name(&bodies[i].id),
                            display_name(&bodies[j].id),
                            display_name(&bodies[k].id)
                        ),
                    });
                }
            }
        }
    }
}

/// An opposed pair squared by a third body, the apex
fn find_t_squares(
    bodies: &[&BodyPlacement],
    orbs: &PatternOrbs,
    found: &mut Vec<ChartConfiguration>,
) {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if !within(bodies[i].lon, bodies[j].lon, 180.0, orbs.opposition) {
                continue;
            }
            for (k, apex) in bodies.iter().enumerate() {
                if k == i || k == j {
                    continue;
                }
                if within(apex.lon, bodies[i].lon, 90.0, orbs.square)
                    && within(apex.lon, bodies[j].lon, 90.0, orbs.square)
                {
                    found.push(ChartConfiguration {
                        kind: ConfigurationKind::TSquare,
                        bodies: vec![
                            bodies[i].id.clone(),
                            bodies[j].id.clone(),
                            apex.id.clone(),
                        ],
                        description: format!(
                            "{} squares the opposition between {} and {} as the apex of a T-square",
                            display_name(&apex.id),
                            display_name(&bodies[i].id),
                            display_name(&bodies[j].id)
                        ),
                    });
                }
            }
        }
    }
}

/// Three or more bodies sharing a house
fn find_stelliums(bodies: &[&BodyPlacement], found: &mut Vec<ChartConfiguration>) {
    let mut by_house: HashMap<u8, Vec<&BodyPlacement>> = HashMap::new();
    for body in bodies {
        by_house.entry(body.house).or_default().push(*body);
    }

    for house in 1..=12u8 {
        let Some(members) = by_house.get(&house) else {
            continue;
        };
        if members.len() < 3 {
            continue;
        }
        let names: Vec<String> = members.iter().map(|b| display_name(&b.id)).collect();
        found.push(ChartConfiguration {
            kind: ConfigurationKind::Stellium,
            bodies: members.iter().map(|b| b.id.clone()).collect(),
            description: format!(
                "Stellium of {} bodies in house {}: {}",
                members.len(),
                house,
                names.join(", ")
            ),
        });
    }
}

/// Capitalized display name for a body id
fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::signs::resolve_sign;

    fn body(id: &str, lon: f64, house: u8) -> BodyPlacement {
        BodyPlacement {
            id: id.to_string(),
            lon,
            lat: 0.0,
            distance: 1.0,
            speed_lon: 1.0,
            retrograde: false,
            is_node: false,
            sign: resolve_sign(lon),
            house,
            ruled_houses: vec![],
        }
    }

    #[test]
    fn test_grand_trine_detected() {
        let placements = vec![
            body("sun", 10.0, 1),
            body("moon", 130.0, 5),
            body("jupiter", 250.0, 9),
        ];
        let found = detect_configurations(&placements, &PatternOrbs::default());
        let trines: Vec<_> = found
            .iter()
            .filter(|c| c.kind == ConfigurationKind::GrandTrine)
            .collect();
        assert_eq!(trines.len(), 1);
        assert_eq!(trines[0].bodies, vec!["sun", "moon", "jupiter"]);
    }

    #[test]
    fn test_t_square_apex_is_last() {
        let placements = vec![
            body("sun", 0.0, 1),
            body("saturn", 180.0, 7),
            body("mars", 90.0, 4),
        ];
        let found = detect_configurations(&placements, &PatternOrbs::default());
        let squares: Vec<_> = found
            .iter()
            .filter(|c| c.kind == ConfigurationKind::TSquare)
            .collect();
        assert_eq!(squares.len(), 1);
        assert_eq!(squares[0].bodies, vec!["sun", "saturn", "mars"]);
    }

    #[test]
    fn test_nodes_never_participate() {
        let mut placements = vec![
            body("north_node", 10.0, 1),
            body("sun", 130.0, 5),
            body("moon", 250.0, 9),
        ];
        placements[0].is_node = true;
        let found = detect_configurations(&placements, &PatternOrbs::default());
        assert!(found.is_empty());
    }
}
