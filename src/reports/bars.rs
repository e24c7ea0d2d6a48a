const BAR_WIDTH: usize = 30;

/// Horizontal bar for a value on a `[0, max]` axis. Values are clamped to the axis.
pub fn bar(value: f64, max: f64) -> String {
    if !value.is_finite() || max <= 0.0 {
        return String::new();
    }
    let frac = (value / max).clamp(0.0, 1.0);
    let filled = (frac * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

/// Axis ceiling for a set of values: 1.0 unless something exceeds it.
pub fn axis_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(1.0, f64::max)
}
