use thiserror::Error;

/// Errors raised while constructing a chart.
///
/// Every variant is detected before any element is built, so a failed
/// construction never leaves a partially rendered tree behind.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no mount point matches selector `{selector}`")]
    InvalidMountPoint { selector: String },

    #[error("chart data is empty")]
    EmptyDataSet,

    #[error("malformed data item at index {index}: {reason}")]
    MalformedDataItem { index: usize, reason: String },

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid chart options: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
