use rand::rngs::StdRng;
use rand::Rng;
use std::collections::HashMap;

use crate::kmeans::Observation;
use crate::utils::LibData;

/// Farthest-point seeding: the first centroid is a random input feature, every
/// further one is the point maximizing its distance to the nearest chosen centroid.
pub(crate) fn seed_centroids<A: LibData>(features: &[A], k: usize, rng: &mut StdRng) -> Vec<A> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(features[rng.gen_range(0..features.len())]);

    while centroids.len() < k {
        let mut farthest = 0;
        let mut farthest_distance = A::neg_infinity();

        for (i, feature) in features.iter().enumerate() {
            let nearest = centroids
                .iter()
                .map(|centroid| (*feature - *centroid).abs())
                .fold(A::INFINITY, A::min);
            if nearest > farthest_distance {
                farthest_distance = nearest;
                farthest = i;
            }
        }

        centroids.push(features[farthest]);
    }

    centroids
}

pub(crate) fn closest_centroid<A: LibData>(feature: A, centroids: &[A]) -> usize {
    centroids
        .iter()
        .map(|centroid| (feature - *centroid).abs())
        .enumerate()
        .reduce(
            |(min_i, min), (i, distance)| {
                if distance < min {
                    (i, distance)
                } else {
                    (min_i, min)
                }
            },
        )
        .unwrap()
        .0
}

pub(crate) fn aggregate_metrics<A: LibData>(members: &[Observation<A>]) -> HashMap<String, A> {
    let mut sums: HashMap<String, (A, usize)> = HashMap::new();

    for observation in members {
        for (name, value) in &observation.metrics {
            let entry = sums.entry(name.clone()).or_insert((A::zero(), 0));
            entry.0 = entry.0 + *value;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(name, (sum, count))| (name, sum / A::from_usize(count).unwrap()))
        .collect()
}
