// File: crates/chart-core/src/view.rs
// View state: visible data ranges derived from series extents.

use crate::series::Series;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Unit frame used when there is nothing to fit.
    pub const EMPTY: Self = Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };

    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        Self::from_series(&chart.series, margin)
    }

    /// Fit all finite points, padding each axis by `margin` times its span.
    pub fn from_series(series: &[Series], margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.data_xy {
                if !(x.is_finite() && y.is_finite()) { continue; }
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::EMPTY;
        }
        let (x_min, x_max) = pad(x_min, x_max, margin);
        let (y_min, y_max) = pad(y_min, y_max, margin);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}

// Degenerate ranges (a single distinct value) are widened around the value.
fn pad(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < 1e-9 {
        let half = if lo.abs() > 1e-9 { lo.abs() * margin.max(0.01) } else { 0.5 };
        return (lo - half, hi + half);
    }
    let m = span * margin.max(0.0);
    (lo - m, hi + m)
}
