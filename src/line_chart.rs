//! Time-series line chart
//!
//! Dates run along a time x-scale and values along an inverted linear
//! y-scale. The series is drawn as a monotone curve with a marker per point;
//! hovering a marker shows a floating tooltip next to the pointer.

use crate::axis_renderer::{AxisEdge, AxisRenderer, AxisTick};
use crate::data_types::{
    DataItem, DataValue, HorizontalSide, LineChartConfig, RenderStage, TooltipState,
    VerticalSide,
};
use crate::element::Element;
use crate::error::{ChartError, Result};
use crate::page::{Chart, Page};
use crate::plot_types::{monotone_x_path, MARKER_RADIUS};
use crate::scales::{LinearScale, TimeScale};
use crate::surface::{validate_frame, Surface};
use crate::utils::date_formatter::{format_date, DateFormat};
use crate::utils::format_number;
use chrono::{DateTime, Utc};

pub const DAY_TICK_INTERVAL: u32 = 2;
pub const Y_AXIS_TICKS: usize = 10;
pub const TOOLTIP_WIDTH: f64 = 120.0;
pub const TOOLTIP_HEIGHT: f64 = 36.0;
/// Distance between the pointer and the nearest tooltip edge.
pub const TOOLTIP_OFFSET: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarkerEvent {
    /// Pointer entered marker `index` at `pointer`, relative to the mount.
    Enter { index: usize, pointer: (f64, f64) },
    Leave(usize),
    Click(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePoint {
    pub time: DateTime<Utc>,
    pub value: f64,
}

impl LinePoint {
    pub fn from_item(index: usize, item: &DataItem) -> Result<Self> {
        let (DataValue::Date(time), DataValue::Number(value)) = (&item.x, &item.y) else {
            return Err(ChartError::MalformedDataItem {
                index,
                reason: format!(
                    "line chart needs a date x and a number y, got {} and {}",
                    item.x.kind(),
                    item.y.kind()
                ),
            });
        };
        if !value.is_finite() {
            return Err(ChartError::MalformedDataItem {
                index,
                reason: format!("value {value} is not finite"),
            });
        }
        Ok(Self {
            time: *time,
            value: *value,
        })
    }
}

/// Where the tooltip goes for the point at `index` of `len`.
///
/// Points past the middle of the series open the tooltip to the left of the
/// pointer; values above two thirds of `y_max` open it below.
pub fn tooltip_placement(
    index: usize,
    len: usize,
    value: f64,
    y_max: f64,
    pointer: (f64, f64),
) -> (HorizontalSide, VerticalSide, f64, f64) {
    let (px, py) = pointer;
    let horizontal = if index as f64 > len as f64 / 2.0 {
        HorizontalSide::Left
    } else {
        HorizontalSide::Right
    };
    let vertical = if value > y_max * 2.0 / 3.0 {
        VerticalSide::Below
    } else {
        VerticalSide::Above
    };

    let left = match horizontal {
        HorizontalSide::Right => px + TOOLTIP_OFFSET,
        HorizontalSide::Left => px - TOOLTIP_OFFSET - TOOLTIP_WIDTH,
    };
    let top = match vertical {
        VerticalSide::Above => py - TOOLTIP_OFFSET - TOOLTIP_HEIGHT,
        VerticalSide::Below => py + TOOLTIP_OFFSET,
    };
    (horizontal, vertical, left, top)
}

pub struct LineChart {
    config: LineChartConfig,
    points: Vec<LinePoint>,
    x_scale: TimeScale,
    y_scale: LinearScale,
    tooltip: TooltipState,
    stage: RenderStage,
    root: Element,
    tooltip_el: Element,
}

impl LineChart {
    pub fn new(page: &Page, config: LineChartConfig) -> Result<Self> {
        tracing::debug!(
            selector = %config.selector,
            items = config.data.len(),
            "building line chart"
        );
        page.ensure_mount(&config.selector)?;
        validate_frame(config.width, config.height, &config.margin)?;
        let points = config
            .data
            .iter()
            .enumerate()
            .map(|(i, item)| LinePoint::from_item(i, item))
            .collect::<Result<Vec<_>>>()?;
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            tracing::warn!(selector = %config.selector, "refusing to render empty line chart");
            return Err(ChartError::EmptyDataSet);
        };
        if points.windows(2).any(|w| w[1].time < w[0].time) {
            tracing::warn!(selector = %config.selector, "line chart dates are not ascending");
        }

        let mut stage = RenderStage::default();

        let mut surface = Surface::new(config.width, config.height);
        stage.advance(RenderStage::SurfaceReady);

        let m = &config.margin;
        let x_scale = TimeScale::new((first.time, last.time), (m.left, config.width - m.right));
        let y_max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
        let y_scale = LinearScale::new((0.0, y_max), (config.height - m.bottom, m.top));
        stage.advance(RenderStage::ScalesComputed);

        Self::draw_axes(&mut surface.svg, &config, &x_scale, &y_scale);
        stage.advance(RenderStage::Decorated);

        Self::draw_series(&mut surface.svg, &config, &points, &x_scale, &y_scale);
        stage.advance(RenderStage::SeriesRendered);

        let tooltip = TooltipState::default();
        let mut tooltip_el = Element::new("div")
            .class("tooltip")
            .style("position", "absolute")
            .style("pointer-events", "none")
            .style("min-width", format!("{}px", TOOLTIP_WIDTH))
            .style("padding", "4px 8px")
            .style("border-radius", "4px")
            .style("font-size", "12px")
            .style("font-family", "sans-serif")
            .style("background", &config.theme.tooltip_background)
            .style("color", &config.theme.tooltip_text)
            .style("transition", format!("opacity {}ms", config.theme.transition_ms));
        sync_tooltip(&mut tooltip_el, &tooltip);

        Ok(Self {
            root: surface.into_wrapper(),
            config,
            points,
            x_scale,
            y_scale,
            tooltip,
            stage,
            tooltip_el,
        })
    }

    fn draw_axes(svg: &mut Element, config: &LineChartConfig, x: &TimeScale, y: &LinearScale) {
        let m = &config.margin;
        let theme = &config.theme;

        let x_ticks: Vec<AxisTick> = x
            .day_ticks(DAY_TICK_INTERVAL)
            .iter()
            .map(|t| AxisTick::new(x.map(t), format_date(t, DateFormat::MonthDay)))
            .collect();
        svg.append(AxisRenderer::render(
            AxisEdge::Bottom,
            &x_ticks,
            x.range(),
            (0.0, config.height - m.bottom),
            theme,
        ));

        let y_ticks: Vec<AxisTick> = y
            .ticks(Y_AXIS_TICKS)
            .into_iter()
            .map(|t| AxisTick::new(y.map(t), y.format_tick(t, Y_AXIS_TICKS)))
            .collect();
        svg.append(AxisRenderer::render(
            AxisEdge::Left,
            &y_ticks,
            y.range,
            (m.left, 0.0),
            theme,
        ));
    }

    fn draw_series(
        svg: &mut Element,
        config: &LineChartConfig,
        points: &[LinePoint],
        x: &TimeScale,
        y: &LinearScale,
    ) {
        let theme = &config.theme;
        let projected: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (x.map(&p.time), y.map(p.value)))
            .collect();

        if let Some(d) = monotone_x_path(&projected) {
            svg.append(
                Element::new("path")
                    .class("line")
                    .attr("d", d)
                    .attr("fill", "none")
                    .attr("stroke", &theme.primary)
                    .attr("stroke-width", 2),
            );
        }

        let mut markers = Element::new("g").class("markers");
        for (i, (cx, cy)) in projected.iter().enumerate() {
            markers.append(
                Element::new("circle")
                    .class("marker")
                    .attr("data-index", i)
                    .attr("cx", cx)
                    .attr("cy", cy)
                    .attr("r", MARKER_RADIUS)
                    .attr("fill", &theme.primary)
                    .attr("stroke", &theme.marker_stroke)
                    .attr("stroke-width", 1.5)
                    .style("cursor", "pointer"),
            );
        }
        svg.append(markers);
    }

    pub fn handle_event(&mut self, event: MarkerEvent) {
        let index = match event {
            MarkerEvent::Enter { index, .. }
            | MarkerEvent::Leave(index)
            | MarkerEvent::Click(index) => index,
        };
        let Some(point) = self.points.get(index).copied() else {
            tracing::debug!(?event, points = self.points.len(), "event for unknown marker");
            return;
        };

        match event {
            MarkerEvent::Enter { pointer, .. } => {
                let (horizontal, vertical, left, top) = tooltip_placement(
                    index,
                    self.points.len(),
                    point.value,
                    self.y_scale.domain.1,
                    pointer,
                );
                self.tooltip = TooltipState {
                    visible: true,
                    content: format!(
                        "{}: {}",
                        format_date(&point.time, DateFormat::FullDate),
                        format_number(point.value)
                    ),
                    left,
                    top,
                    horizontal,
                    vertical,
                    opacity: 1.0,
                    z_index: 10,
                };
            }
            MarkerEvent::Leave(_) => {
                self.tooltip.visible = false;
                self.tooltip.opacity = 0.0;
                self.tooltip.z_index = -1;
            }
            MarkerEvent::Click(i) => {
                if let Some(on_click) = &self.config.on_click {
                    on_click(&self.config.data[i]);
                }
                return;
            }
        }
        sync_tooltip(&mut self.tooltip_el, &self.tooltip);
    }

    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    pub fn points(&self) -> &[LinePoint] {
        &self.points
    }

    pub fn x_scale(&self) -> &TimeScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn tooltip_element(&self) -> &Element {
        &self.tooltip_el
    }

    pub fn stage(&self) -> RenderStage {
        self.stage
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

fn sync_tooltip(el: &mut Element, state: &TooltipState) {
    el.set_style("left", format!("{}px", state.left));
    el.set_style("top", format!("{}px", state.top));
    el.set_style("opacity", state.opacity);
    el.set_style("z-index", state.z_index);
    el.set_text(state.content.clone());
}

impl Chart for LineChart {
    fn selector(&self) -> &str {
        &self.config.selector
    }

    fn nodes(&self) -> Vec<&Element> {
        vec![&self.root, &self.tooltip_el]
    }
}
