// Mark geometry shared by the chart types

pub mod bar;
pub mod line;

pub use bar::{BarGeometry, BAR_LABEL_GAP};
pub use line::{monotone_x_path, MARKER_RADIUS};
