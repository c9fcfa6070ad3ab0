//! Small descriptive statistics shared by the analytics crates.

/// Arithmetic mean. `None` for empty input.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Population variance (divides by `n`, not `n - 1`). `None` for empty input.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let m = mean(values.iter().copied())?;
    mean(values.iter().map(|v| (v - m).powi(2)))
}

/// Population standard deviation. `None` for empty input.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

/// Mean of integer scores rounded to the nearest integer; 0 for empty input.
pub fn rounded_mean_score(scores: &[u8]) -> u32 {
    mean(scores.iter().map(|&s| f64::from(s)))
        .map(|m| m.round() as u32)
        .unwrap_or(0)
}

/// Round to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_of_two_extremes() {
        assert_eq!(population_variance(&[20.0, 80.0]), Some(900.0));
        assert_eq!(population_variance(&[0.0, 100.0]), Some(2500.0));
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(population_variance(&[]), None);
        assert_eq!(rounded_mean_score(&[]), 0);
    }

    #[test]
    fn round_to_two_decimals() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_to(12.25, 1), 12.3);
    }
}
