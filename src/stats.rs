//! Descriptive statistics over sparse columns. Missing values (`None`) are skipped,
//! and reductions over too few values return `None` rather than NaN.

#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (ddof = 1). Needs at least two values.
#[inline]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (n - 1) as f64;
    Some(var.sqrt())
}

pub fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().collect()
}

pub fn mean_skip_missing(values: &[Option<f64>]) -> Option<f64> {
    mean(&present(values))
}

pub fn std_skip_missing(values: &[Option<f64>]) -> Option<f64> {
    sample_std(&present(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_std_two_values() {
        let s = sample_std(&[0.5, 0.7]).unwrap();
        assert!((s - 0.141_421_356).abs() < 1e-6);
    }

    #[test]
    fn test_reductions_need_enough_values() {
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_std(&[0.4]), None);
        assert_eq!(mean_skip_missing(&[None, None]), None);
        assert_eq!(mean_skip_missing(&[None, Some(0.3)]), Some(0.3));
    }
}
