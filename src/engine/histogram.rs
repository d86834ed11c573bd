//! Uniform-width binning of a sample over its observed range.

use std::ops::Range;

/// Bin counts over `bins` equal-width intervals of `range`.
///
/// Every bin is half-open except the last, which also holds `range.end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub range: Range<f64>,
    pub counts: Vec<u32>,
}

impl Histogram {
    /// Bin the finite values of `values` into `bins` bins spanning their min and max.
    ///
    /// A constant sample is centred in a range one unit wide; a sample with no
    /// finite values gets the range `0..1` and all-zero counts.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let range = observed_range(values);
        let width = span_over(&range, bins);

        let mut counts = vec![0u32; bins];
        for &value in values.iter().filter(|v| v.is_finite()) {
            // Divide before subtracting so ranges wider than f64::MAX stay finite.
            let offset = value / width - range.start / width;
            let index = if offset.is_finite() { offset as usize } else { 0 };
            counts[index.min(bins - 1)] += 1;
        }

        Self { range, counts }
    }

    pub fn bin_width(&self) -> f64 {
        span_over(&self.range, self.counts.len())
    }

    /// Left and right edge of every bin, in order.
    pub fn edges(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let bins = self.counts.len();
        (0..bins).map(move |i| (self.edge(i, bins), self.edge(i + 1, bins)))
    }

    /// Interpolated rather than `start + width * i`, which overflows on huge ranges.
    fn edge(&self, i: usize, bins: usize) -> f64 {
        if i == bins {
            return self.range.end;
        }
        let t = i as f64 / bins as f64;
        self.range.start * (1.0 - t) + self.range.end * t
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }
}

/// `range` split into `parts` equal pieces, finite even when `end - start` is not.
fn span_over(range: &Range<f64>, parts: usize) -> f64 {
    range.end / parts as f64 - range.start / parts as f64
}

/// Smallest and largest finite value, widened when the sample is degenerate.
pub fn observed_range(values: &[f64]) -> Range<f64> {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        0.0..1.0
    } else if min == max {
        (min - 0.5)..(max + 0.5)
    } else {
        min..max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirty_bins_cover_all_values() {
        let values: Vec<f64> = (0..300).map(|i| i as f64 / 10.0).collect();

        let histogram = Histogram::from_values(&values, 30);

        assert_eq!(histogram.counts.len(), 30);
        assert_eq!(histogram.range, 0.0..29.9);
        assert_eq!(histogram.total(), 300);
    }

    #[test]
    fn test_max_value_lands_in_last_bin() {
        let histogram = Histogram::from_values(&[0.0, 1.0, 2.0, 3.0], 3);

        assert_eq!(histogram.counts, vec![1, 1, 2]);
        assert_eq!(histogram.max_count(), 2);
    }

    #[test]
    fn test_constant_sample_is_centred() {
        let histogram = Histogram::from_values(&[2.0, 2.0, 2.0], 30);

        assert_eq!(histogram.range, 1.5..2.5);
        assert_eq!(histogram.total(), 3);
        assert_eq!(histogram.max_count(), 3);
    }

    #[test]
    fn test_empty_and_non_finite_samples() {
        let empty = Histogram::from_values(&[], 30);
        assert_eq!(empty.range, 0.0..1.0);
        assert_eq!(empty.total(), 0);

        let noisy = Histogram::from_values(&[f64::NAN, 1.0, f64::INFINITY, 3.0], 2);
        assert_eq!(noisy.range, 1.0..3.0);
        assert_eq!(noisy.counts, vec![1, 1]);
    }

    #[test]
    fn test_range_wider_than_f64_max() {
        let histogram = Histogram::from_values(&[-1e308, 0.0, 1e308], 30);

        assert_eq!(histogram.counts[0], 1);
        assert_eq!(histogram.counts[29], 1);
        assert_eq!(histogram.total(), 3);
        assert!(histogram.bin_width().is_finite());

        let edges: Vec<(f64, f64)> = histogram.edges().collect();
        assert_eq!(edges[0].0, -1e308);
        assert_eq!(edges[29].1, 1e308);
        assert!(edges.iter().all(|(l, r)| l.is_finite() && r.is_finite() && l < r));
    }

    #[test]
    fn test_edges_are_contiguous() {
        let histogram = Histogram::from_values(&[0.0, 10.0], 5);
        let edges: Vec<(f64, f64)> = histogram.edges().collect();

        assert_eq!(edges.len(), 5);
        assert_eq!(edges[0], (0.0, 2.0));
        assert_eq!(edges[4], (8.0, 10.0));
        for pair in edges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }
}
