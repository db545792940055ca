use std::collections::HashMap;
use urania::aspects::{AspectCalculator, OrbProfile};
use urania::chart::BodyPlacement;
use urania::zodiac::resolve_sign;

fn body(id: &str, lon: f64, speed: f64) -> BodyPlacement {
    BodyPlacement {
        id: id.to_string(),
        lon,
        lat: 0.0,
        distance: 1.0,
        speed_lon: speed,
        retrograde: speed < 0.0,
        is_node: false,
        sign: resolve_sign(lon),
        house: 1,
        ruled_houses: vec![],
    }
}

#[test]
fn test_detect_conjunction() {
    let calculator = AspectCalculator::new();
    let bodies = vec![body("sun", 100.0, 1.0), body("moon", 102.0, 13.0)];

    let aspects = calculator.detect_aspects(&bodies, &OrbProfile::natal());

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, "conjunction");
    assert!((aspects[0].orb - 2.0).abs() < 1e-9);
    assert!(!aspects[0].exact);
}

#[test]
fn test_detect_opposition_across_wrap() {
    let calculator = AspectCalculator::new();
    let bodies = vec![body("sun", 100.0, 1.0), body("saturn", 278.0, 0.1)];

    let aspects = calculator.detect_aspects(&bodies, &OrbProfile::natal());

    assert_eq!(aspects.len(), 1);
    assert_eq!(aspects[0].aspect_type, "opposition");
    assert!((aspects[0].angle - 178.0).abs() < 1e-9);
    assert!((aspects[0].orb - 2.0).abs() < 1e-9);
}

#[test]
fn test_pair_order_independence() {
    let calculator = AspectCalculator::new();
    let orbs = OrbProfile::natal();

    let forward =
        calculator.detect_aspects(&[body("sun", 5.0, 1.0), body("mars", 359.0, 0.5)], &orbs);
    let reversed =
        calculator.detect_aspects(&[body("mars", 359.0, 0.5), body("sun", 5.0, 1.0)], &orbs);

    assert_eq!(forward.len(), 1);
    assert_eq!(reversed.len(), 1);
    assert_eq!(forward[0].aspect_type, reversed[0].aspect_type);
    assert!((forward[0].angle - reversed[0].angle).abs() < 1e-9);
    assert!((forward[0].orb - reversed[0].orb).abs() < 1e-9);
}

#[test]
fn test_aspects_sorted_by_orb_ascending() {
    let calculator = AspectCalculator::new();
    let bodies = vec![
        body("sun", 0.0, 1.0),
        body("moon", 63.0, 13.0),
        body("mercury", 121.5, 1.5),
        body("venus", 178.0, 1.2),
        body("mars", 272.0, 0.5),
        body("jupiter", 336.0, 0.1),
    ];

    let aspects = calculator.detect_aspects(&bodies, &OrbProfile::natal());

    assert!(aspects.len() >= 3);
    for pair in aspects.windows(2) {
        assert!(pair[0].orb <= pair[1].orb);
    }
}

#[test]
fn test_orb_and_angle_bounds() {
    let calculator = AspectCalculator::new();
    let orbs = OrbProfile::natal();
    let bodies: Vec<BodyPlacement> = (0..12)
        .map(|i| body(&format!("body_{}", i), (i as f64 * 47.3) % 360.0, 1.0))
        .collect();

    for aspect in calculator.detect_aspects(&bodies, &orbs) {
        assert!(aspect.angle >= 0.0 && aspect.angle <= 180.0);
        assert!(aspect.orb >= 0.0);
        assert!(aspect.orb <= orbs.orb_for(&aspect.aspect_type));
    }
}

#[test]
fn test_natal_and_transit_profiles_are_independent() {
    let calculator = AspectCalculator::new();
    // 115 degrees: trine with orb 5, inside the natal tolerance (7) but
    // outside the transit tolerance (2)
    let bodies = vec![body("sun", 0.0, 1.0), body("jupiter", 115.0, 0.1)];

    let natal = calculator.detect_aspects(&bodies, &OrbProfile::natal());
    let transit = calculator.detect_aspects(&bodies, &OrbProfile::transit());

    assert_eq!(natal.len(), 1);
    assert_eq!(natal[0].aspect_type, "trine");
    assert!(transit.is_empty());
}

#[test]
fn test_overlapping_tolerances_emit_multiple_records() {
    let calculator = AspectCalculator::new();
    // Pathologically wide orbs: 30 degrees of separation is both a
    // conjunction (orb 30) and a sextile (orb 30)
    let orbs = OrbProfile {
        orbs: HashMap::from([
            ("conjunction".to_string(), 30.0),
            ("sextile".to_string(), 30.0),
        ]),
    };
    let bodies = vec![body("sun", 0.0, 1.0), body("moon", 30.0, 13.0)];

    let aspects = calculator.detect_aspects(&bodies, &orbs);

    assert_eq!(aspects.len(), 2);
    let types: Vec<&str> = aspects.iter().map(|a| a.aspect_type.as_str()).collect();
    assert!(types.contains(&"conjunction"));
    assert!(types.contains(&"sextile"));
}

#[test]
fn test_cross_aspects_skip_same_body() {
    let calculator = AspectCalculator::new();
    let natal = vec![body("sun", 100.0, 1.0), body("moon", 200.0, 13.0)];
    let moving = vec![body("sun", 101.0, 1.0), body("mars", 290.0, 0.5)];

    let aspects = calculator.detect_cross_aspects(&natal, &moving, &OrbProfile::transit());

    // natal sun x transiting sun is skipped; the only hit is the exact
    // square from natal moon to transiting mars
    for aspect in &aspects {
        assert_ne!(aspect.body_a, aspect.body_b);
    }
    assert!(aspects
        .iter()
        .any(|a| a.body_a == "moon" && a.body_b == "mars" && a.aspect_type == "square"));
}
