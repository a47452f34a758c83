// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels (10 units at 100 px/unit).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels (6 units at 100 px/unit).
pub const HEIGHT: i32 = 600;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Left/bottom leave room for tick labels plus the axis titles; top for the chart title.
    fn default() -> Self {
        Self::new(96, 32, 56, 72)
    }
}

/// Pixel rectangle of the plot area inside a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PlotRect {
    /// Plot rectangle for a `width` x `height` surface, or `None` when the insets leave no room.
    pub fn within(width: i32, height: i32, insets: &Insets) -> Option<Self> {
        let rect = Self {
            left: insets.left as i32,
            top: insets.top as i32,
            right: width - insets.right as i32,
            bottom: height - insets.bottom as i32,
        };
        (rect.width() > 0 && rect.height() > 0).then_some(rect)
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}
