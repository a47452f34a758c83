// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers.

/// Round `span / target` to a 1, 2 or 5 multiple of a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    if !(raw.is_finite() && raw > 0.0) {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.0 {
        2.0
    } else if norm < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions on a "nice" step that fall inside `[min, max]`.
/// Returns an empty list for empty or non-finite ranges.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let eps = step * 1e-9;
    let first = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0u32;
    loop {
        let v = first + step * f64::from(i);
        if v > max + eps {
            break;
        }
        // snap -0.0 and float dust near zero
        ticks.push(if v.abs() < eps { 0.0 } else { v });
        i += 1;
    }
    ticks
}

/// Format a tick value with just enough decimals to distinguish neighbours `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format!("{:.*}", decimals, value)
}
