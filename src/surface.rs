//! Responsive drawing surface shared by every chart type.

use crate::data_types::ChartMargin;
use crate::element::Element;
use crate::error::{ChartError, Result};

/// Checks that the canvas is drawable and the margins leave a plot area.
pub fn validate_frame(width: f64, height: f64, margin: &ChartMargin) -> Result<()> {
    if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
        return Err(ChartError::InvalidDimensions(format!(
            "canvas must be positive, got {width}x{height}"
        )));
    }
    let insets = [margin.left, margin.right, margin.top, margin.bottom];
    if insets.iter().any(|m| !m.is_finite() || *m < 0.0) {
        return Err(ChartError::InvalidDimensions(format!(
            "margins must be non-negative, got {margin:?}"
        )));
    }
    if margin.left + margin.right >= width {
        return Err(ChartError::InvalidDimensions(format!(
            "horizontal margins {} + {} leave no room in width {width}",
            margin.left, margin.right
        )));
    }
    if margin.top + margin.bottom >= height {
        return Err(ChartError::InvalidDimensions(format!(
            "vertical margins {} + {} leave no room in height {height}",
            margin.top, margin.bottom
        )));
    }
    Ok(())
}

/// An SVG canvas with a fixed logical coordinate space of `width x height`.
#[derive(Clone, Debug)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub svg: Element,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        let svg = Element::new("svg")
            .attr("preserveAspectRatio", "xMinYMin meet")
            .attr("viewBox", format!("0 0 {} {}", width, height))
            .style("display", "inline-block")
            .style("position", "absolute")
            .style("top", 0)
            .style("left", 0);
        Self { width, height, svg }
    }

    /// Wraps the canvas in a full-width container whose bottom padding keeps
    /// the aspect ratio while the page resizes.
    pub fn into_wrapper(self) -> Element {
        let ratio = self.height * 100.0 / self.width;
        Element::new("div")
            .class("chart-wrapper")
            .style("display", "inline-block")
            .style("position", "relative")
            .style("width", "100%")
            .style("padding-bottom", format!("{ratio}%"))
            .style("vertical-align", "top")
            .style("overflow", "hidden")
            .child(self.svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_keeps_aspect_ratio() {
        let wrapper = Surface::new(500.0, 300.0).into_wrapper();
        assert_eq!(wrapper.get_style("padding-bottom"), Some("60%"));
        let svg = wrapper.select("svg").unwrap();
        assert_eq!(svg.get_attr("viewBox"), Some("0 0 500 300"));
    }

    #[test]
    fn frame_rejects_oversized_margins() {
        let m = ChartMargin::new(20.0, 20.0, 20.0, 160.0);
        assert!(validate_frame(500.0, 300.0, &m).is_ok());
        assert!(validate_frame(180.0, 300.0, &m).is_err());
        assert!(validate_frame(500.0, 40.0, &m).is_err());
        assert!(validate_frame(0.0, 300.0, &m).is_err());
    }

    #[test]
    fn wrapper_ratio_is_not_rounded() {
        let wrapper = Surface::new(700.0, 300.0).into_wrapper();
        let expected = format!("{}%", 300.0 * 100.0 / 700.0);
        assert_eq!(wrapper.get_style("padding-bottom"), Some(expected.as_str()));
        assert_ne!(wrapper.get_style("padding-bottom"), Some("42.86%"));
    }
}
