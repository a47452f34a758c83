// File: crates/bench-plot/src/plot.rs
// Summary: Builds the benchmark line chart from loaded samples.

use chart_core::{Axis, Chart, RenderOptions, Series, Theme};

use crate::samples::Samples;

pub const TITLE: &str = "CRDT Benchmark: Average Time per Change vs Total Changes";
pub const X_LABEL: &str = "Total Changes";
pub const Y_LABEL: &str = "Average Time (Milliseconds)";
pub const TRACE_LABEL: &str = "Average Time per Change";

/// Fraction of each data span left as padding around the trace.
const AXIS_MARGIN: f64 = 0.05;

/// One labeled trace through the samples in file order, with grid and legend on.
/// Empty samples give an empty but fully labeled chart.
pub fn build_chart(samples: &Samples) -> Chart {
    let mut chart = Chart::new().with_title(TITLE);
    chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
    chart.y_axis = Axis::new(Y_LABEL, 0.0, 1.0);
    chart.show_grid = true;
    chart.show_legend = true;
    chart.add_series(Series::with_data(samples.points()).with_label(TRACE_LABEL));
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}

/// Default 10x6 canvas in the given theme.
pub fn render_options(theme: Theme) -> RenderOptions {
    RenderOptions { theme, ..RenderOptions::default() }
}
