// File: crates/chart-core/src/series.rs
// Summary: Line series model; points are drawn in stored order.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// Legend entry; unlabeled series are left out of the legend.
    pub label: Option<String>,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Vec<(f64, f64)>) -> Self {
        Self { label: None, data_xy: data }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}
