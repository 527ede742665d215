//! Host page holding the mount points charts attach to.

use crate::element::Element;
use crate::error::{ChartError, Result};

/// Anything rendered under a mount point.
pub trait Chart {
    /// Selector of the mount point this chart attached to.
    fn selector(&self) -> &str;

    /// Top-level nodes appended under the mount point, in order.
    fn nodes(&self) -> Vec<&Element>;
}

/// A host document. Charts resolve their selector against it but never own it.
#[derive(Clone, Debug)]
pub struct Page {
    body: Element,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    /// Adds an empty `div` mount point with the given id.
    pub fn with_mount(self, id: &str) -> Self {
        self.with_element(Element::new("div").attr("id", id))
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.body.append(element);
        self
    }

    pub fn resolve(&self, selector: &str) -> Option<&Element> {
        self.body.children().iter().find_map(|c| c.select(selector))
    }

    pub(crate) fn ensure_mount(&self, selector: &str) -> Result<()> {
        if self.resolve(selector).is_none() {
            tracing::warn!(selector, "mount point not found");
            return Err(ChartError::InvalidMountPoint {
                selector: selector.to_string(),
            });
        }
        Ok(())
    }

    /// Serializes the page with every chart's nodes appended under its mount.
    pub fn render(&self, charts: &[&dyn Chart]) -> String {
        let mut body = self.body.clone();
        for chart in charts {
            let mut attached = false;
            for child in body.children_mut() {
                if let Some(mount) = child.select_mut(chart.selector()) {
                    for node in chart.nodes() {
                        mount.append(node.clone());
                    }
                    attached = true;
                    break;
                }
            }
            if !attached {
                tracing::warn!(selector = chart.selector(), "chart mount vanished from page");
            }
        }

        let mut out = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\"/></head>");
        out.push_str(&body.to_markup());
        out.push_str("</html>");
        out
    }
}
