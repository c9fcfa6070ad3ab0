use agora_core::constants::{HISTOGRAM_BINS, HISTOGRAM_BIN_WIDTH};

/// Bin for a single score. Bin `i` covers `[10i, 10i + 10)`; 100 lands in bin 9.
pub fn bin_index(score: u8) -> usize {
    usize::from(score / HISTOGRAM_BIN_WIDTH).min(HISTOGRAM_BINS - 1)
}

/// Count scores into the fixed 10-bin histogram.
pub fn build_histogram<I>(scores: I) -> [usize; HISTOGRAM_BINS]
where
    I: IntoIterator<Item = u8>,
{
    let mut bins = [0usize; HISTOGRAM_BINS];
    for score in scores {
        bins[bin_index(score)] += 1;
    }
    bins
}
