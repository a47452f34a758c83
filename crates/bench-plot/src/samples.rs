// File: crates/bench-plot/src/samples.rs
// Summary: Benchmark samples held as two parallel, file-ordered series.

/// One benchmark row: total change count and the average time per change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub change_count: i64,
    pub avg_time_ms: f64,
}

/// X-series (change counts) and Y-series (average ms) in file row order.
/// Contract: both series always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    changes: Vec<i64>,
    avg_time_ms: Vec<f64>,
}

impl Samples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.changes.push(sample.change_count);
        self.avg_time_ms.push(sample.avg_time_ms);
    }

    pub fn changes(&self) -> &[i64] {
        &self.changes
    }

    pub fn avg_time_ms(&self) -> &[f64] {
        &self.avg_time_ms
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.changes
            .iter()
            .zip(&self.avg_time_ms)
            .map(|(&change_count, &avg_time_ms)| Sample { change_count, avg_time_ms })
    }

    /// Chart coordinates, one `(x, y)` per row in file order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.iter().map(|s| (s.change_count as f64, s.avg_time_ms)).collect()
    }
}

impl FromIterator<Sample> for Samples {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let mut samples = Self::new();
        for s in iter {
            samples.push(s);
        }
        samples
    }
}
