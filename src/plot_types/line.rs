use std::fmt::Write as _;

/// Radius of the circular point markers.
pub const MARKER_RADIUS: f64 = 4.0;

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Tangent at `p1` that keeps the curve monotone between neighbours.
fn interior_tangent(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    if h0 == 0.0 || h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.1 - p0.1) / h0;
    let s1 = (p2.1 - p1.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() {
        t
    } else {
        0.0
    }
}

/// Tangent at an end point, derived from the neighbouring tangent `t`.
fn end_tangent(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    } else {
        t
    }
}

/// SVG path data for a monotone-in-x cubic curve through `points`.
///
/// Consecutive duplicate points are dropped. Returns `None` when there is
/// nothing to draw.
pub fn monotone_x_path(points: &[(f64, f64)]) -> Option<String> {
    let mut pts: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for &p in points {
        if pts.last() != Some(&p) {
            pts.push(p);
        }
    }

    let (first, rest) = pts.split_first()?;
    let mut out = format!("M{},{}", first.0, first.1);
    match rest.len() {
        0 => {
            out.push('Z');
            return Some(out);
        }
        1 => {
            let _ = write!(out, "L{},{}", rest[0].0, rest[0].1);
            return Some(out);
        }
        _ => {}
    }

    let n = pts.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(pts[i - 1], pts[i], pts[i + 1]);
    }
    tangents[0] = end_tangent(pts[0], pts[1], tangents[1]);
    tangents[n - 1] = end_tangent(pts[n - 2], pts[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let (x0, y0) = pts[i];
        let (x1, y1) = pts[i + 1];
        let dx = (x1 - x0) / 3.0;
        let _ = write!(
            out,
            "C{},{},{},{},{},{}",
            x0 + dx,
            y0 + dx * tangents[i],
            x1 - dx,
            y1 - dx * tangents[i + 1],
            x1,
            y1
        );
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control_ys(path: &str) -> Vec<Vec<f64>> {
        path.split('C')
            .skip(1)
            .map(|seg| seg.split(',').map(|v| v.parse::<f64>().unwrap()).collect())
            .collect()
    }

    #[test]
    fn short_inputs() {
        assert_eq!(monotone_x_path(&[]), None);
        assert_eq!(monotone_x_path(&[(1.0, 2.0)]).as_deref(), Some("M1,2Z"));
        assert_eq!(
            monotone_x_path(&[(0.0, 0.0), (0.0, 0.0), (3.0, 3.0)]).as_deref(),
            Some("M0,0L3,3")
        );
    }

    #[test]
    fn collinear_points_stay_straight() {
        let path = monotone_x_path(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]).unwrap();
        assert_eq!(path, "M0,0C1,1,2,2,3,3C4,4,5,5,6,6");
    }

    #[test]
    fn monotone_data_does_not_overshoot() {
        let pts = [(0.0, 0.0), (1.0, 10.0), (2.0, 11.0), (3.0, 30.0), (4.0, 30.0)];
        let path = monotone_x_path(&pts).unwrap();
        for (i, seg) in control_ys(&path).iter().enumerate() {
            let (lo, hi) = (pts[i].1, pts[i + 1].1);
            for y in [seg[1], seg[3]] {
                assert!(y >= lo - 1e-9 && y <= hi + 1e-9, "segment {i}: {y} outside [{lo}, {hi}]");
            }
        }
    }
}
