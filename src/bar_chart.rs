//! Horizontal bar chart
//!
//! Each item pairs a numeric magnitude with a category label. Bars grow
//! rightwards from the left axis, one band per category, with optional
//! median reference line. Hovering a bar dims the others and reveals its
//! value label; clicking forwards the item to the configured callback.

use crate::axis_renderer::{AxisEdge, AxisRenderer, AxisTick};
use crate::data_types::{BarChartConfig, DataItem, DataValue, RenderStage};
use crate::element::Element;
use crate::error::{ChartError, Result};
use crate::page::{Chart, Page};
use crate::plot_types::BarGeometry;
use crate::scales::{BandScale, LinearScale};
use crate::surface::{validate_frame, Surface};
use crate::utils::{format_number, median};

/// Padding between bands, as a fraction of the band step.
pub const BAND_PADDING: f64 = 0.3;
pub const GRID_TICKS: usize = 5;
pub const X_AXIS_TICKS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarEvent {
    Enter(usize),
    Leave(usize),
    Click(usize),
}

/// An item reduced to what the bar chart draws.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    /// Accepts `x` number / `y` label, or the swapped orientation.
    pub fn from_item(index: usize, item: &DataItem) -> Result<Self> {
        let (value, label) = match (&item.x, &item.y) {
            (DataValue::Number(v), DataValue::Category(l)) => (*v, l),
            (DataValue::Category(l), DataValue::Number(v)) => (*v, l),
            (x, y) => {
                return Err(ChartError::MalformedDataItem {
                    index,
                    reason: format!(
                        "bar chart needs one number and one category, got {} and {}",
                        x.kind(),
                        y.kind()
                    ),
                })
            }
        };
        if !value.is_finite() {
            return Err(ChartError::MalformedDataItem {
                index,
                reason: format!("magnitude {value} is not finite"),
            });
        }
        Ok(Self {
            label: label.clone(),
            value,
        })
    }
}

pub struct BarChart {
    config: BarChartConfig,
    bars: Vec<BarDatum>,
    x_scale: LinearScale,
    y_scale: BandScale,
    median: Option<f64>,
    stage: RenderStage,
    root: Element,
}

impl BarChart {
    /// Validates the configuration against `page`, then renders the whole
    /// chart. Nothing is built when validation fails.
    pub fn new(page: &Page, config: BarChartConfig) -> Result<Self> {
        tracing::debug!(
            selector = %config.selector,
            items = config.data.len(),
            "building bar chart"
        );
        page.ensure_mount(&config.selector)?;
        validate_frame(config.width, config.height, &config.margin)?;
        if config.data.is_empty() {
            tracing::warn!(selector = %config.selector, "refusing to render empty bar chart");
            return Err(ChartError::EmptyDataSet);
        }
        let bars = config
            .data
            .iter()
            .enumerate()
            .map(|(i, item)| BarDatum::from_item(i, item))
            .collect::<Result<Vec<_>>>()?;

        let mut stage = RenderStage::default();

        let mut surface = Surface::new(config.width, config.height);
        stage.advance(RenderStage::SurfaceReady);

        let (x_scale, y_scale) = Self::compute_scales(&config, &bars);
        stage.advance(RenderStage::ScalesComputed);

        Self::draw_decorations(&mut surface.svg, &config, &x_scale, &y_scale);
        stage.advance(RenderStage::Decorated);

        Self::draw_series(&mut surface.svg, &config, &bars, &x_scale, &y_scale);
        stage.advance(RenderStage::SeriesRendered);

        let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
        let median = median(&values);
        if config.show_mid_line {
            if let Some(m) = median {
                Self::draw_mid_line(&mut surface.svg, &config, &x_scale, m);
                stage.advance(RenderStage::ReferenceRendered);
            }
        }

        Ok(Self {
            root: surface.into_wrapper(),
            config,
            bars,
            x_scale,
            y_scale,
            median,
            stage,
        })
    }

    fn compute_scales(config: &BarChartConfig, bars: &[BarDatum]) -> (LinearScale, BandScale) {
        let m = &config.margin;
        let max = bars
            .iter()
            .map(|b| b.value)
            .fold(f64::NEG_INFINITY, f64::max)
            .max(0.0);
        let x = LinearScale::new((0.0, max), (m.left, config.width - m.right));
        let y = BandScale::new(
            bars.iter().map(|b| b.label.as_str()),
            (m.top, config.height - m.bottom),
            BAND_PADDING,
        );
        (x, y)
    }

    fn draw_decorations(
        svg: &mut Element,
        config: &BarChartConfig,
        x: &LinearScale,
        y: &BandScale,
    ) {
        let m = &config.margin;
        let theme = &config.theme;
        let plot_bottom = config.height - m.bottom;

        let grid_xs: Vec<f64> = x.ticks(GRID_TICKS).into_iter().map(|t| x.map(t)).collect();
        svg.append(AxisRenderer::vertical_gridlines(&grid_xs, (m.top, plot_bottom), theme));

        let x_ticks: Vec<AxisTick> = x
            .ticks(X_AXIS_TICKS)
            .into_iter()
            .map(|t| AxisTick::new(x.map(t), x.format_tick(t, X_AXIS_TICKS)))
            .collect();
        svg.append(AxisRenderer::render(
            AxisEdge::Bottom,
            &x_ticks,
            x.range,
            (0.0, plot_bottom),
            theme,
        ));

        let y_ticks: Vec<AxisTick> = y
            .domain()
            .iter()
            .filter_map(|label| y.center(label).map(|c| AxisTick::new(c, label.clone())))
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
        config: &BarChartConfig,
        bars: &[BarDatum],
        x: &LinearScale,
        y: &BandScale,
    ) {
        let theme = &config.theme;
        let transition = format!("fill {}ms", theme.transition_ms);
        let cursor = if config.on_click.is_some() {
            "pointer"
        } else {
            "default"
        };

        let mut rects = Element::new("g").class("bars");
        let mut labels = Element::new("g").class("bar-labels");
        for (i, bar) in bars.iter().enumerate() {
            let Some(g) = BarGeometry::compute(bar.value, &bar.label, x, y, config.margin.left)
            else {
                continue;
            };
            rects.append(
                Element::new("rect")
                    .class("bar")
                    .attr("data-index", i)
                    .attr("x", g.x)
                    .attr("y", g.y)
                    .attr("width", g.width)
                    .attr("height", g.height)
                    .attr("fill", &theme.primary)
                    .style("cursor", cursor)
                    .style("transition", &transition),
            );
            labels.append(
                Element::new("text")
                    .class("bar-label")
                    .attr("data-index", i)
                    .attr("x", g.label_x)
                    .attr("y", g.label_y)
                    .attr("dy", "0.32em")
                    .attr("font-size", theme.label_size)
                    .attr("font-family", "sans-serif")
                    .attr("fill", &theme.primary)
                    .style("opacity", 0)
                    .style("pointer-events", "none")
                    .text(format_number(bar.value)),
            );
        }
        svg.append(rects);
        svg.append(labels);
    }

    fn draw_mid_line(svg: &mut Element, config: &BarChartConfig, x: &LinearScale, median: f64) {
        let m = &config.margin;
        let theme = &config.theme;
        let mx = x.map(median);
        svg.append(
            Element::new("g")
                .class("mid")
                .child(
                    Element::new("line")
                        .class("mid-line")
                        .attr("x1", mx)
                        .attr("x2", mx)
                        .attr("y1", m.top)
                        .attr("y2", config.height - m.bottom)
                        .attr("stroke", &theme.accent)
                        .attr("stroke-width", 1.5),
                )
                .child(
                    Element::new("text")
                        .class("mid-label")
                        .attr("x", mx + 4.0)
                        .attr("y", m.top + 10.0)
                        .attr("font-size", theme.label_size)
                        .attr("font-family", "sans-serif")
                        .attr("fill", &theme.accent)
                        .text(format!("mid: {}", format_number(median))),
                ),
        );
    }

    pub fn handle_event(&mut self, event: BarEvent) {
        let index = match event {
            BarEvent::Enter(i) | BarEvent::Leave(i) | BarEvent::Click(i) => i,
        };
        if index >= self.bars.len() {
            tracing::debug!(?event, bars = self.bars.len(), "event for unknown bar");
            return;
        }
        match event {
            BarEvent::Enter(i) => self.highlight(Some(i)),
            BarEvent::Leave(_) => self.highlight(None),
            BarEvent::Click(i) => {
                if let Some(on_click) = &self.config.on_click {
                    on_click(&self.config.data[i]);
                }
            }
        }
    }

    /// `Some(i)`: bar `i` primary, others neutral, only label `i` shown.
    /// `None`: every bar primary, every label hidden.
    fn highlight(&mut self, hovered: Option<usize>) {
        let theme = &self.config.theme;
        let key = hovered.map(|i| i.to_string());
        let is_hovered =
            |el: &Element| key.is_some() && el.get_attr("data-index") == key.as_deref();

        self.root.for_each_mut(".bar", &mut |el| {
            let fill = if hovered.is_none() || is_hovered(&*el) {
                &theme.primary
            } else {
                &theme.neutral
            };
            el.set_attr("fill", fill);
        });
        self.root.for_each_mut(".bar-label", &mut |el| {
            el.set_style("opacity", if is_hovered(&*el) { 1 } else { 0 });
        });
    }

    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn bars(&self) -> &[BarDatum] {
        &self.bars
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &BandScale {
        &self.y_scale
    }

    pub fn median(&self) -> Option<f64> {
        self.median
    }

    pub fn stage(&self) -> RenderStage {
        self.stage
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Current fill of every bar, in data order.
    pub fn bar_fills(&self) -> Vec<String> {
        self.root
            .select_all(".bar")
            .into_iter()
            .filter_map(|el| el.get_attr("fill").map(str::to_string))
            .collect()
    }

    /// Indices of value labels currently shown.
    pub fn visible_labels(&self) -> Vec<usize> {
        self.root
            .select_all(".bar-label")
            .into_iter()
            .filter(|el| el.get_style("opacity") == Some("1"))
            .filter_map(|el| el.get_attr("data-index")?.parse().ok())
            .collect()
    }
}

impl Chart for BarChart {
    fn selector(&self) -> &str {
        &self.config.selector
    }

    fn nodes(&self) -> Vec<&Element> {
        vec![&self.root]
    }
}
