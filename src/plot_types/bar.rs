use crate::scales::{BandScale, LinearScale};

/// Gap between a bar's end and its value label.
pub const BAR_LABEL_GAP: f64 = 5.0;

/// Pixel geometry of one horizontal bar and its value label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
    pub label_y: f64,
}

impl BarGeometry {
    /// Bars start one pixel past the axis at `origin` and never have a
    /// negative width. Returns `None` for labels outside the band domain.
    pub fn compute(
        value: f64,
        label: &str,
        x_scale: &LinearScale,
        y_scale: &BandScale,
        origin: f64,
    ) -> Option<Self> {
        let y = y_scale.map(label)?;
        let width = (x_scale.map(value) - origin).max(0.0);
        let height = y_scale.bandwidth();
        Some(Self {
            x: origin + 1.0,
            y,
            width,
            height,
            label_x: origin + width + BAR_LABEL_GAP,
            label_y: y + height / 2.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_value_has_zero_width() {
        let x = LinearScale::new((0.0, 20.0), (160.0, 480.0));
        let y = BandScale::new(["A", "B"], (20.0, 280.0), 0.3);
        let g = BarGeometry::compute(0.0, "A", &x, &y, 160.0).unwrap();
        assert_eq!(g.width, 0.0);
        assert_eq!(g.x, 161.0);

        let g = BarGeometry::compute(-5.0, "B", &x, &y, 160.0).unwrap();
        assert_eq!(g.width, 0.0);
    }
}
