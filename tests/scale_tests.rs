use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use svg_chart::scales::{BandScale, LinearScale, TimeScale};

#[test]
fn test_linear_scale_map_and_invert() {
    let scale = LinearScale::new((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);

    assert_eq!(scale.invert(0.0), 0.0);
    assert_eq!(scale.invert(250.0), 50.0);
    assert_eq!(scale.invert(500.0), 100.0);
}

#[test]
fn test_inverted_range() {
    let scale = LinearScale::new((0.0, 30.0), (270.0, 20.0));
    assert_eq!(scale.map(0.0), 270.0);
    assert_eq!(scale.map(30.0), 20.0);
    assert!(scale.map(20.0) < scale.map(10.0));
}

#[test]
fn test_zero_domain_maps_to_range_start() {
    let scale = LinearScale::new((0.0, 0.0), (160.0, 480.0));
    let mapped = scale.map(0.0);
    assert!(!mapped.is_nan());
    assert_eq!(mapped, 160.0);
}

#[test]
fn test_range_endpoints_match_margins() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let width: f64 = rng.random_range(100.0..1000.0);
        let left: f64 = rng.random_range(0.0..width / 2.0);
        let right: f64 = rng.random_range(0.0..width / 2.0 - 1.0);
        let max: f64 = rng.random_range(1.0..1000.0);

        let scale = LinearScale::new((0.0, max), (left, width - right));
        assert_eq!(scale.range, (left, width - right));
        assert!((scale.map(0.0) - left).abs() < 1e-9);
        assert!((scale.map(max) - (width - right)).abs() < 1e-6);
    }
}

#[test]
fn test_bands_are_ordered_and_inside_range() {
    let labels: Vec<String> = (0..12).map(|i| format!("item {i}")).collect();
    let band = BandScale::new(&labels, (20.0, 280.0), 0.3);

    let mut prev = f64::NEG_INFINITY;
    for label in &labels {
        let start = band.map(label).unwrap();
        assert!(start > prev);
        assert!(start >= 20.0 && start + band.bandwidth() <= 280.0 + 1e-9);
        prev = start;
    }
    assert!((band.bandwidth() - band.step() * 0.7).abs() < 1e-9);
}

#[test]
fn test_time_scale_day_ticks() {
    let start = Utc.with_ymd_and_hms(2024, 1, 30, 12, 0, 0).unwrap();
    let end = start + Duration::days(5);
    let scale = TimeScale::new((start, end), (0.0, 100.0));

    let days: Vec<String> = scale
        .day_ticks(2)
        .iter()
        .map(|t| t.format("%m-%d").to_string())
        .collect();
    // Midnight of Jan 30 is before the domain start; day counting restarts each month.
    assert_eq!(days, vec!["01-31", "02-01", "02-03"]);

    let mid = scale.invert(50.0).unwrap();
    assert_eq!(mid, start + Duration::hours(60));
}
