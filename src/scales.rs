//! Scales mapping data domains to pixel ranges.
//!
//! All scales are plain values computed once from the data; `map` is pure.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain (min == max) maps everything to the range start.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return r0;
        }
        let res = r0 + (value - d0) / span * (r1 - r0);
        if res.is_nan() || res.is_infinite() {
            r0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span.abs() < f64::EPSILON {
            return d0;
        }
        d0 + (pixel - r0) / span * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Formats a tick with just enough decimals for the tick step.
    pub fn format_tick(&self, value: f64, count: usize) -> String {
        let step = tick_step(self.domain.0, self.domain.1, count).abs();
        let decimals = if step > 0.0 && step.is_finite() {
            (-step.log10().floor()).max(0.0) as usize
        } else {
            0
        };
        format!("{:.*}", decimals, value)
    }
}

/// Ordinal scale assigning each category an equal-width band.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    pub range: (f64, f64),
    pub padding: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds a scale with equal inner and outer `padding`, centered in the
    /// range. Repeated labels keep their first position.
    pub fn new<I, S>(labels: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let domain: Vec<String> = labels
            .into_iter()
            .filter(|l| seen.insert(l.as_ref().to_string()))
            .map(|l| l.as_ref().to_string())
            .collect();

        let padding = padding.clamp(0.0, 1.0);
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let step = (hi - lo) / (n - padding + padding * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Self {
            domain,
            range,
            padding,
            start,
            step,
            bandwidth,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Start of the band for `label`, or `None` for unknown labels.
    pub fn map(&self, label: &str) -> Option<f64> {
        let idx = self.domain.iter().position(|d| d == label)?;
        let idx = if self.range.1 < self.range.0 {
            self.domain.len() - 1 - idx
        } else {
            idx
        };
        Some(self.start + self.step * idx as f64)
    }

    pub fn center(&self, label: &str) -> Option<f64> {
        self.map(label).map(|y| y + self.bandwidth / 2.0)
    }
}

/// Linear scale over UTC instants, mapped through epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub domain: (DateTime<Utc>, DateTime<Utc>),
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        let inner = LinearScale::new(
            (
                domain.0.timestamp_millis() as f64,
                domain.1.timestamp_millis() as f64,
            ),
            range,
        );
        Self { domain, inner }
    }

    pub fn range(&self) -> (f64, f64) {
        self.inner.range
    }

    pub fn map(&self, t: &DateTime<Utc>) -> f64 {
        self.inner.map(t.timestamp_millis() as f64)
    }

    pub fn invert(&self, pixel: f64) -> Option<DateTime<Utc>> {
        let ms = self.inner.invert(pixel);
        match Utc.timestamp_millis_opt(ms.round() as i64) {
            chrono::LocalResult::Single(d) => Some(d),
            chrono::LocalResult::Ambiguous(d, _) => Some(d),
            chrono::LocalResult::None => None,
        }
    }

    /// UTC midnights inside the domain whose day of month minus one is a
    /// multiple of `every`.
    pub fn day_ticks(&self, every: u32) -> Vec<DateTime<Utc>> {
        let every = every.max(1);
        let (lo, hi) = if self.domain.1 < self.domain.0 {
            (self.domain.1, self.domain.0)
        } else {
            self.domain
        };

        let mut day = lo.date_naive();
        let mut out = Vec::new();
        while let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            let t = midnight.and_utc();
            if t > hi {
                break;
            }
            if t >= lo && (day.day() - 1) % every == 0 {
                out.push(t);
            }
            day = match day.checked_add_signed(Duration::days(1)) {
                Some(d) => d,
                None => break,
            };
        }
        out
    }
}

/// Returns `(i1, i2, inc)`; a negative `inc` means ticks are `i / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step == 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 += 1;
        }
        if (i2 as f64) / inc > stop {
            i2 -= 1;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some((i1, i2, inc))
}

/// Round-number ticks covering `[start, stop]`, about `count` of them.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (a, b) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(a, b, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    let mut out: Vec<f64> = (i1..=i2)
        .map(|i| {
            if inc < 0.0 {
                i as f64 / -inc
            } else {
                i as f64 * inc
            }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Distance between consecutive ticks produced by [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (a, b) = if stop < start { (stop, start) } else { (start, stop) };
    match tick_spec(a, b, count as f64) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_round_numbers() {
        assert_eq!(ticks(0.0, 20.0, 5), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.0, 126.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 120.0]);
    }

    #[test]
    fn ticks_handle_flat_and_reversed_domains() {
        assert_eq!(ticks(3.0, 3.0, 5), vec![3.0]);
        assert_eq!(ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
        assert!(ticks(f64::NAN, 1.0, 5).is_empty());
    }

    #[test]
    fn tick_format_follows_step() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        assert_eq!(s.format_tick(0.2, 5), "0.2");
        let s = LinearScale::new((0.0, 120.0), (0.0, 100.0));
        assert_eq!(s.format_tick(40.0, 5), "40");
    }

    #[test]
    fn band_scale_single_band_is_centered() {
        let b = BandScale::new(["only"], (0.0, 130.0), 0.3);
        let start = b.map("only").unwrap();
        assert!((b.step() - 100.0).abs() < 1e-9);
        assert!((b.bandwidth() - 70.0).abs() < 1e-9);
        assert!((start - 30.0).abs() < 1e-9);
        assert!((start + b.bandwidth() / 2.0 - 65.0).abs() < 1e-9);
    }

    #[test]
    fn band_scale_dedupes_labels() {
        let b = BandScale::new(["a", "b", "a"], (0.0, 100.0), 0.3);
        assert_eq!(b.domain(), &["a".to_string(), "b".to_string()]);
        assert!(b.map("c").is_none());
    }
}
