use crate::element::Element;
use crate::theme::ChartTheme;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisEdge {
    Left,
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

impl AxisTick {
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

pub struct AxisRenderer;

impl AxisRenderer {
    /// Builds an axis group: a domain path spanning `range` plus one tick
    /// line and label per tick. `offset` is the group translation.
    pub fn render(
        edge: AxisEdge,
        ticks: &[AxisTick],
        range: (f64, f64),
        offset: (f64, f64),
        theme: &ChartTheme,
    ) -> Element {
        let (r0, r1) = range;
        let outer = TICK_SIZE;
        let (class, domain_path, anchor) = match edge {
            AxisEdge::Bottom => (
                "x-axis",
                format!("M{r0},{outer}V0H{r1}V{outer}"),
                "middle",
            ),
            AxisEdge::Left => ("y-axis", format!("M-{outer},{r0}H0V{r1}H-{outer}"), "end"),
        };

        let mut group = Element::new("g")
            .class("axis")
            .class(class)
            .attr("transform", format!("translate({},{})", offset.0, offset.1))
            .attr("fill", "none")
            .attr("font-size", theme.axis_label_size)
            .attr("font-family", "sans-serif")
            .attr("text-anchor", anchor);

        group.append(
            Element::new("path")
                .class("domain")
                .attr("stroke", &theme.axis)
                .attr("d", domain_path),
        );

        for tick in ticks {
            let (transform, line, text) = match edge {
                AxisEdge::Bottom => (
                    format!("translate({},0)", tick.position),
                    Element::new("line").attr("y2", TICK_SIZE),
                    Element::new("text")
                        .attr("y", TICK_SIZE + TICK_PADDING)
                        .attr("dy", "0.71em"),
                ),
                AxisEdge::Left => (
                    format!("translate(0,{})", tick.position),
                    Element::new("line").attr("x2", -TICK_SIZE),
                    Element::new("text")
                        .attr("x", -(TICK_SIZE + TICK_PADDING))
                        .attr("dy", "0.32em"),
                ),
            };

            group.append(
                Element::new("g")
                    .class("tick")
                    .attr("transform", transform)
                    .child(line.attr("stroke", &theme.axis))
                    .child(text.attr("fill", &theme.axis).text(tick.label.clone())),
            );
        }

        group
    }

    /// Vertical gridlines at each x position spanning `y_range`.
    pub fn vertical_gridlines(xs: &[f64], y_range: (f64, f64), theme: &ChartTheme) -> Element {
        let mut group = Element::new("g").class("grid");
        for x in xs {
            group.append(
                Element::new("line")
                    .class("grid-line")
                    .attr("x1", x)
                    .attr("x2", x)
                    .attr("y1", y_range.0)
                    .attr("y2", y_range.1)
                    .attr("stroke", &theme.grid_line)
                    .attr("stroke-width", 1),
            );
        }
        group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_colors_every_part_with_muted_tone() {
        let theme = ChartTheme::default();
        let ticks = vec![AxisTick::new(10.0, "0"), AxisTick::new(90.0, "10")];
        let axis =
            AxisRenderer::render(AxisEdge::Bottom, &ticks, (10.0, 90.0), (0.0, 280.0), &theme);

        assert_eq!(axis.get_attr("transform"), Some("translate(0,280)"));
        assert_eq!(axis.select_all(".tick").len(), 2);
        for line in axis.select_all("line") {
            assert_eq!(line.get_attr("stroke"), Some(theme.axis.as_str()));
        }
        for text in axis.select_all("text") {
            assert_eq!(text.get_attr("fill"), Some(theme.axis.as_str()));
        }
        assert_eq!(
            axis.select(".domain").and_then(|p| p.get_attr("stroke")),
            Some(theme.axis.as_str())
        );
    }
}
