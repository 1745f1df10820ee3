
use log::debug;
use std::cmp::Ordering;

use crate::utils::LibData;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds<A: LibData> {
    pub lower: A,
    pub upper: A,
}

impl<A: LibData> Bounds<A> {
    pub fn contains(&self, value: A) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[derive(Clone, Debug)]
pub struct OutlierResult<A: LibData> {
    pub outliers: Vec<A>,
    pub bounds: Bounds<A>,
    pub total_count: usize,
}

impl<A: LibData> OutlierResult<A> {
    pub fn outlier_count(&self) -> usize {
        self.outliers.len()
    }

    pub fn outlier_percentage(&self) -> A {
        if self.total_count == 0 {
            return A::zero();
        }
        A::from_usize(self.outliers.len()).unwrap() / A::from_usize(self.total_count).unwrap()
            * A::from_f64(100.0).unwrap()
    }
}

/// Classifies values against the IQR fences `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
/// computed from a sorted copy of the input. The input itself is never mutated.
#[derive(Clone, Copy, Default)]
pub struct OutlierDetector;

impl OutlierDetector {
    pub fn detect<A: LibData>(&self, values: &[A]) -> OutlierResult<A> {
        if values.is_empty() {
            return OutlierResult {
                outliers: Vec::new(),
                bounds: Bounds {
                    lower: A::zero(),
                    upper: A::zero(),
                },
                total_count: 0,
            };
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let bounds = iqr_bounds(&sorted);
        debug!(
            "iqr fences [{}, {}] over {} values",
            bounds.lower,
            bounds.upper,
            values.len()
        );

        let outliers = values
            .iter()
            .copied()
            .filter(|value| *value < bounds.lower || *value > bounds.upper)
            .collect();

        OutlierResult {
            outliers,
            bounds,
            total_count: values.len(),
        }
    }
}

fn iqr_bounds<A: LibData>(sorted: &[A]) -> Bounds<A> {
    // nearest-rank quartiles: zero-based index truncation, not interpolation
    let n = sorted.len();
    let q1 = sorted[n / 4];
    let q3 = sorted[n * 3 / 4];

    let iqr = q3 - q1;
    let whisker = A::from_f64(1.5).unwrap() * iqr;

    Bounds {
        lower: q1 - whisker,
        upper: q3 + whisker,
    }
}
