//! svg_chart crate: responsive SVG bar and time-series charts

pub mod axis_renderer;
pub mod bar_chart;
pub mod data_types;
pub mod element;
pub mod error;
pub mod line_chart;
pub mod page;
pub mod plot_types;
pub mod scales;
pub mod surface;
pub mod testdata;
pub mod theme;
pub mod utils;

pub use bar_chart::{BarChart, BarEvent};
pub use data_types::{
    BarChartConfig, BarChartOptions, ChartMargin, DataItem, DataValue, LineChartConfig,
    LineChartOptions, RenderStage, TooltipState,
};
pub use element::Element;
pub use error::{ChartError, Result};
pub use line_chart::{LineChart, MarkerEvent};
pub use page::{Chart, Page};
pub use theme::ChartTheme;
