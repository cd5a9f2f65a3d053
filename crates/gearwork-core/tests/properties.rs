//! Property tests for the kinematic model and the tooth profile generator.

use gearwork_core::{
    GearError, Point, angles, equivalent_degrees, meshed_angle, normalize_degrees, tooth_profile,
};
use proptest::prelude::*;

/// Relative tolerance scaled to the magnitude of the values compared.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Wrapped comparison; tolerance grows with magnitude since the absolute
/// error of a large angle is what survives the wrap.
fn same_direction(a: f64, b: f64) -> bool {
    equivalent_degrees(a, b, 1e-9 * a.abs().max(b.abs()).max(1.0))
}

proptest! {
    #[test]
    fn hand_angles_match_rates(t in -1.0e7f64..1.0e7) {
        let a = angles(t);
        prop_assert!(close(a.seconds, t * 6.0));
        prop_assert!(close(a.minutes, t * 0.1));
        prop_assert!(close(a.hours, t / 120.0));
    }

    #[test]
    fn hand_ratios_hold_at_every_instant(t in -1.0e7f64..1.0e7) {
        prop_assume!(t.abs() > 1e-6);
        let a = angles(t);
        prop_assert!(close(a.seconds / a.minutes, 60.0));
        prop_assert!(close(a.minutes / a.hours, 12.0));
    }

    #[test]
    fn hands_are_periodic(t in -1.0e5f64..1.0e5) {
        prop_assert!(same_direction(angles(t + 60.0).seconds, angles(t).seconds));
        prop_assert!(same_direction(angles(t + 3600.0).minutes, angles(t).minutes));
        prop_assert!(same_direction(angles(t + 43_200.0).hours, angles(t).hours));
    }

    #[test]
    fn meshed_angle_is_inverse_ratio(a in -1.0e6f64..1.0e6, d in 1u32..500, o in 1u32..500) {
        let m = meshed_angle(a, d, o).unwrap();
        prop_assert!(close(m, -a * f64::from(d) / f64::from(o)));
    }

    #[test]
    fn reciprocal_mesh_round_trips(a in -1.0e6f64..1.0e6, d in 1u32..500, o in 1u32..500) {
        let back = meshed_angle(meshed_angle(a, d, o).unwrap(), o, d).unwrap();
        prop_assert!(close(back, a));
    }

    #[test]
    fn profile_has_four_vertices_per_tooth(teeth in 3u32..200, r in 0.01f64..1.0e4) {
        let profile = tooth_profile(teeth, r).unwrap();
        prop_assert_eq!(profile.points.len(), 4 * teeth as usize);
    }

    #[test]
    fn profile_radii_stay_in_band(teeth in 3u32..200, r in 0.01f64..1.0e4) {
        let profile = tooth_profile(teeth, r).unwrap();
        let slack = r * 1e-12;
        for p in &profile.points {
            let radius = p.radius();
            prop_assert!(radius >= r * 0.85 - slack && radius <= r + slack);
        }
    }

    #[test]
    fn profile_scales_linearly(teeth in 3u32..100, r in 0.01f64..1.0e3, k in 0.01f64..100.0) {
        let base = tooth_profile(teeth, r).unwrap();
        let scaled = tooth_profile(teeth, r * k).unwrap();
        for (p, q) in base.points.iter().zip(&scaled.points) {
            let expected: Point = p.scaled(k);
            let tol = 1e-9 * r * k;
            prop_assert!((expected.x - q.x).abs() <= tol);
            prop_assert!((expected.y - q.y).abs() <= tol);
        }
    }

    #[test]
    fn too_few_teeth_rejected(teeth in 0u32..3, r in 0.01f64..1.0e3) {
        prop_assert!(matches!(tooth_profile(teeth, r), Err(GearError::InvalidGearSpec(_))));
    }
}

#[test]
fn scenario_midnight_one_hour_half_past_twelve() {
    let midnight = angles(0.0);
    assert_eq!(
        (midnight.seconds, midnight.minutes, midnight.hours),
        (0.0, 0.0, 0.0)
    );

    let one_hour = angles(3600.0);
    assert_eq!(normalize_degrees(one_hour.seconds), 0.0);
    assert_eq!(normalize_degrees(one_hour.minutes), 0.0);
    assert_eq!(one_hour.hours, 30.0);

    let half_past = angles(45_000.0);
    assert_eq!(half_past.hours, 375.0);
    assert_eq!(normalize_degrees(half_past.hours), 15.0);
    assert_eq!(half_past.minutes, 4500.0);
    assert_eq!(normalize_degrees(half_past.minutes), 180.0);
}

#[test]
fn three_and_twenty_share_angular_structure() {
    let small = tooth_profile(3, 10.0).unwrap();
    let large = tooth_profile(3, 20.0).unwrap();
    for (a, b) in small.points.iter().zip(&large.points) {
        assert!((a.angle() - b.angle()).abs() < 1e-12);
        assert!((a.radius() * 2.0 - b.radius()).abs() < 1e-9);
    }
}
