use std::cmp::Ordering;

use crate::utils::LibData;

/// Descriptive statistics over one scalar trip feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureSummary<A: LibData> {
    pub min: A,
    pub max: A,
    pub mean: A,
    pub median: A,
}

impl<A: LibData> FeatureSummary<A> {
    pub fn from_values(values: &[A]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let sum: A = values.iter().copied().sum();
        let mean = sum / A::from_usize(values.len()).unwrap();

        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / A::from_f64(2.0).unwrap()
        } else {
            sorted[mid]
        };

        Some(Self {
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean,
            median,
        })
    }
}
