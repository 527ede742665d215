use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One coordinate of a [`DataItem`]. How it is read depends on the chart.
///
/// Deserialization is untagged: numbers become `Number`, RFC 3339 strings
/// become `Date`, any other string becomes `Category`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(f64),
    Date(DateTime<Utc>),
    Category(String),
}

impl DataValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            Self::Category(s) => Some(s),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Date(_) => "date",
            Self::Category(_) => "category",
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        Self::Number(v as f64)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        Self::Category(v.to_string())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        Self::Category(v)
    }
}

impl From<DateTime<Utc>> for DataValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Date(v)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub x: DataValue,
    pub y: DataValue,
}

impl DataItem {
    pub fn new(x: impl Into<DataValue>, y: impl Into<DataValue>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Insets of the plot area from the canvas edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartMargin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl ChartMargin {
    /// Arguments follow CSS order: top, right, bottom, left.
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}
