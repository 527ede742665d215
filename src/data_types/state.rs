use serde::{Deserialize, Serialize};

/// Construction stages. Every chart walks them forward exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RenderStage {
    #[default]
    Uninitialized,
    SurfaceReady,
    ScalesComputed,
    /// Axes and gridlines drawn.
    Decorated,
    SeriesRendered,
    ReferenceRendered,
}

impl RenderStage {
    /// Moves to `next`. Only strictly forward transitions are allowed.
    pub fn advance(&mut self, next: RenderStage) {
        debug_assert!(
            next > *self,
            "render stage went backwards: {:?} -> {:?}",
            self,
            next
        );
        if next <= *self {
            tracing::error!(
                from = ?self,
                to = ?next,
                "ignoring non-forward render stage transition"
            );
            return;
        }
        tracing::trace!(from = ?self, to = ?next, "render stage");
        *self = next;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalSide {
    Right,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalSide {
    Above,
    Below,
}

/// Snapshot of the line chart's floating tooltip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    pub left: f64,
    pub top: f64,
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
    pub opacity: f64,
    pub z_index: i32,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            content: String::new(),
            left: 0.0,
            top: 0.0,
            horizontal: HorizontalSide::Right,
            vertical: VerticalSide::Above,
            opacity: 0.0,
            z_index: -1,
        }
    }
}
