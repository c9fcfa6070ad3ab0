//! Shannon entropy over category counts.

/// Shannon entropy in bits: `H = -Σ p·log2(p)`.
///
/// Zero counts contribute nothing. Returns 0.0 when the counts sum to zero.
pub fn shannon_entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy divided by its maximum `log2(k)`, where `k` is the number of
/// non-empty categories. A single category is perfectly homogeneous: 0.0.
pub fn normalized_entropy(counts: &[usize]) -> f64 {
    let categories = counts.iter().filter(|&&c| c > 0).count();
    if categories < 2 {
        return 0.0;
    }
    (shannon_entropy(counts) / (categories as f64).log2()).clamp(0.0, 1.0)
}
