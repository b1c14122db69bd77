//! Property tests for distance, direction and scoring invariants

use geosantos::spatial::{classify, haversine_m};
use geosantos::{calculate, evaluate, Direction, GeoPoint, ScoringConfig};
use proptest::prelude::*;

/// Points around greater Santos
fn santos_point() -> impl Strategy<Value = GeoPoint> {
    (-24.05f64..-23.85, -46.45f64..-46.25).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
}

fn any_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        -100.0f64..10_000.0,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(-0.0),
    ]
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in santos_point(), b in santos_point()) {
        prop_assert!((haversine_m(a, b) - haversine_m(b, a)).abs() < 1e-9);
    }

    #[test]
    fn distance_to_self_is_zero(p in santos_point()) {
        prop_assert_eq!(haversine_m(p, p), 0.0);
    }

    #[test]
    fn precision_decreases_with_distance(
        target in santos_point(),
        near in 0.0f64..0.0009,
        extra in 0.0f64..0.0009,
    ) {
        // Both offsets due north stay within ~200 m
        let close = GeoPoint::new(target.lat + near, target.lng);
        let far = GeoPoint::new(target.lat + near + extra, target.lng);
        let threshold = 250.0;
        let p_close = evaluate(close, target, threshold).unwrap().precision;
        let p_far = evaluate(far, target, threshold).unwrap().precision;
        prop_assert!(p_close >= p_far);
        prop_assert!((0.0..=1.0).contains(&p_close));
    }

    #[test]
    fn score_total_is_exact_sum(
        distance in any_number(),
        time_left in any_number(),
        streak in 0u32..100,
    ) {
        let s = calculate(distance, time_left, streak, &ScoringConfig::default());
        prop_assert_eq!(
            s.total,
            s.base_points + s.precision_bonus + s.time_bonus + s.consecutive_bonus
        );
    }

    #[test]
    fn any_hit_outscores_any_miss(
        hit_distance in 0.0f64..=100.0,
        miss_distance in 100.001f64..50_000.0,
        hit_time in 0.0f64..10.0,
        miss_time in 0.0f64..10.0,
    ) {
        let config = ScoringConfig::default().with_threshold(100.0);
        let hit = calculate(hit_distance, hit_time, 0, &config);
        let miss = calculate(miss_distance, miss_time, 0, &config);
        prop_assert!(hit.total > miss.total);
        prop_assert_eq!(miss.precision_bonus, 0);
        prop_assert_eq!(miss.consecutive_bonus, 0);
    }

    #[test]
    fn dominant_latitude_is_cardinal(d_lat in 0.001f64..1.0, ratio in 0.0f64..=0.5, east in any::<bool>()) {
        let d_lng = if east { d_lat * ratio } else { -d_lat * ratio };
        prop_assert_eq!(classify(d_lat, d_lng), Some(Direction::North));
        prop_assert_eq!(classify(-d_lat, d_lng), Some(Direction::South));
    }

    #[test]
    fn nonzero_offset_always_classified(d_lat in -1.0f64..1.0, d_lng in -1.0f64..1.0) {
        prop_assume!(d_lat != 0.0 || d_lng != 0.0);
        prop_assert!(classify(d_lat, d_lng).is_some());
    }
}
