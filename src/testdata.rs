//! Synthetic datasets for demos and tests.

use crate::data_types::DataItem;
use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

const NAME_PREFIXES: &[&str] = &[
    "Acme", "Globex", "Initech", "Umbrella", "Stark", "Wayne", "Hooli", "Vandelay", "Soylent",
    "Cyberdyne", "Tyrell", "Wonka", "Aperture", "Gringotts", "Oscorp", "Massive",
];
const NAME_SUFFIXES: &[&str] = &[
    "Industries", "Group", "LLC", "and Sons", "Holdings", "Labs", "Partners", "Systems",
];

/// Largest magnitude produced by [`categorical`].
pub const MAX_CATEGORICAL_VALUE: u32 = 126;

/// `n` items with a magnitude in `0..=126` as `x` and a company-like name
/// as `y`.
pub fn categorical(rng: &mut impl Rng, n: usize) -> Vec<DataItem> {
    (0..n)
        .map(|_| {
            let prefix = NAME_PREFIXES.choose(rng).copied().unwrap_or("Acme");
            let suffix = NAME_SUFFIXES.choose(rng).copied().unwrap_or("Group");
            let value = rng.random_range(0..=MAX_CATEGORICAL_VALUE) as f64;
            DataItem::new(value, format!("{prefix} {suffix}"))
        })
        .collect()
}

/// `n` consecutive days from `start` with a non-negative random walk.
pub fn time_series(rng: &mut impl Rng, start: DateTime<Utc>, n: usize) -> Vec<DataItem> {
    let mut value: f64 = rng.random_range(20.0..80.0);
    (0..n)
        .map(|i| {
            let item = DataItem::new(start + Duration::days(i as i64), value.round());
            value = (value + rng.random_range(-10.0..10.0)).max(0.0);
            item
        })
        .collect()
}

/// `n` numeric/numeric pairs in `[0, 100)`.
pub fn scatter(rng: &mut impl Rng, n: usize) -> Vec<DataItem> {
    (0..n)
        .map(|_| DataItem::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn time_series_is_daily_and_non_negative() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let data = time_series(&mut rng, start, 30);
        assert_eq!(data.len(), 30);
        for (i, item) in data.iter().enumerate() {
            assert_eq!(item.x.as_date(), Some(start + Duration::days(i as i64)));
            assert!(item.y.as_number().unwrap() >= 0.0);
        }
    }

    #[test]
    fn categorical_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for item in categorical(&mut rng, 50) {
            let v = item.x.as_number().unwrap();
            assert!((0.0..=MAX_CATEGORICAL_VALUE as f64).contains(&v));
            assert!(item.y.as_category().is_some());
        }
    }
}
