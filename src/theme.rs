use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    /// Data marks: bars, line stroke, markers.
    pub primary: String,
    /// Bars that are not hovered while another bar is.
    pub neutral: String,
    /// Reference line and its label.
    pub accent: String,
    /// Axis lines, ticks and tick labels.
    pub axis: String,
    pub grid_line: String,
    pub marker_stroke: String,
    pub tooltip_background: String,
    pub tooltip_text: String,
    pub axis_label_size: f64,
    pub label_size: f64,
    /// Duration of cosmetic hover transitions.
    pub transition_ms: u32,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            primary: "#4682b4".into(),
            neutral: "#cccccc".into(),
            accent: "#ff7f0e".into(),
            axis: "#999999".into(),
            grid_line: "#eeeeee".into(),
            marker_stroke: "#ffffff".into(),
            tooltip_background: "rgba(0, 0, 0, 0.8)".into(),
            tooltip_text: "#ffffff".into(),
            axis_label_size: 10.0,
            label_size: 11.0,
            transition_ms: 200,
        }
    }
}
