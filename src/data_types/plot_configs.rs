use super::{ChartMargin, DataItem};
use crate::error::Result;
use crate::theme::ChartTheme;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Invoked with the data item of a clicked mark.
pub type ClickHandler = Arc<dyn Fn(&DataItem) + Send + Sync>;

pub const DEFAULT_WIDTH: f64 = 500.0;
pub const DEFAULT_HEIGHT: f64 = 300.0;

impl ChartMargin {
    pub fn bar_default() -> Self {
        Self::new(20.0, 20.0, 20.0, 160.0)
    }

    pub fn line_default() -> Self {
        Self::new(20.0, 20.0, 30.0, 40.0)
    }
}

#[derive(Clone)]
pub struct BarChartConfig {
    pub selector: String,
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub data: Vec<DataItem>,
    pub show_mid_line: bool,
    pub on_click: Option<ClickHandler>,
    pub theme: ChartTheme,
}

impl BarChartConfig {
    pub fn new(selector: impl Into<String>, data: Vec<DataItem>) -> Self {
        Self {
            selector: selector.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: ChartMargin::bar_default(),
            data,
            show_mid_line: true,
            on_click: None,
            theme: ChartTheme::default(),
        }
    }

    /// Overlays user options on the defaults. A supplied margin replaces
    /// the default margin as a whole.
    pub fn from_options(options: BarChartOptions) -> Self {
        let mut config = Self::new(options.selector, options.data);
        if let Some(w) = options.width {
            config.width = w;
        }
        if let Some(h) = options.height {
            config.height = h;
        }
        if let Some(m) = options.margin {
            config.margin = m;
        }
        if let Some(show) = options.show_mid_line {
            config.show_mid_line = show;
        }
        if let Some(theme) = options.theme {
            config.theme = theme;
        }
        config
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_mid_line(mut self, show: bool) -> Self {
        self.show_mid_line = show;
        self
    }

    pub fn on_click(mut self, f: impl Fn(&DataItem) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for BarChartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarChartConfig")
            .field("selector", &self.selector)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("items", &self.data.len())
            .field("show_mid_line", &self.show_mid_line)
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

#[derive(Clone)]
pub struct LineChartConfig {
    pub selector: String,
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub data: Vec<DataItem>,
    pub on_click: Option<ClickHandler>,
    pub theme: ChartTheme,
}

impl LineChartConfig {
    pub fn new(selector: impl Into<String>, data: Vec<DataItem>) -> Self {
        Self {
            selector: selector.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: ChartMargin::line_default(),
            data,
            on_click: None,
            theme: ChartTheme::default(),
        }
    }

    pub fn from_options(options: LineChartOptions) -> Self {
        let mut config = Self::new(options.selector, options.data);
        if let Some(w) = options.width {
            config.width = w;
        }
        if let Some(h) = options.height {
            config.height = h;
        }
        if let Some(m) = options.margin {
            config.margin = m;
        }
        if let Some(theme) = options.theme {
            config.theme = theme;
        }
        config
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    pub fn on_click(mut self, f: impl Fn(&DataItem) + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for LineChartConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineChartConfig")
            .field("selector", &self.selector)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("margin", &self.margin)
            .field("items", &self.data.len())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// User-facing bar chart options; omitted fields fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BarChartOptions {
    pub selector: String,
    #[serde(default)]
    pub data: Vec<DataItem>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<ChartMargin>,
    #[serde(rename = "showMidLine", alias = "show_mid_line")]
    pub show_mid_line: Option<bool>,
    pub theme: Option<ChartTheme>,
}

impl BarChartOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LineChartOptions {
    pub selector: String,
    #[serde(default)]
    pub data: Vec<DataItem>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<ChartMargin>,
    pub theme: Option<ChartTheme>,
}

impl LineChartOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
