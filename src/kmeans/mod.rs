
mod helper_functions;
mod parameters;

pub use parameters::Parameters;

use anyhow::{ensure, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::kmeans::helper_functions::{aggregate_metrics, closest_centroid, seed_centroids};
use crate::utils::LibData;

/// A single trip record as seen by the clusterer: the scalar clustering feature
/// plus any auxiliary metrics that should be averaged per cluster.
#[derive(Clone, Debug)]
pub struct Observation<A: LibData> {
    pub id: i64,
    pub feature: A,
    pub metrics: HashMap<String, A>,
}

impl<A: LibData> Observation<A> {
    pub fn new(id: i64, feature: A) -> Self {
        Self {
            id,
            feature,
            metrics: HashMap::new(),
        }
    }

    pub fn with_metric(mut self, name: &str, value: A) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Cluster<A: LibData> {
    pub centroid: A,
    pub members: Vec<Observation<A>>,
    pub aggregates: HashMap<String, A>,
}

impl<A: LibData> Cluster<A> {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

#[derive(Clone)]
pub struct KMeans<A: LibData> {
    pub k: usize,
    pub max_iterations: usize,
    pub tolerance: A,
    pub seed: Option<u64>,
}

impl<A: LibData> Default for KMeans<A> {
    fn default() -> Self {
        Self::init(Parameters::default())
    }
}

impl<A: LibData> KMeans<A> {
    pub fn init(parameters: Parameters<A>) -> Self {
        Self {
            k: parameters.k,
            max_iterations: parameters.max_iterations,
            tolerance: parameters.tolerance,
            seed: parameters.seed,
        }
    }

    /// Partitions the observations into `k` clusters by their `feature` value and
    /// returns them sorted ascending by centroid. Degenerate inputs (fewer distinct
    /// features than `k`) yield duplicate or empty clusters rather than an error.
    pub fn cluster(&self, observations: Vec<Observation<A>>) -> Result<Vec<Cluster<A>>> {
        self.validate()?;

        if observations.is_empty() {
            return Ok(Vec::new());
        }

        let features: Vec<A> = observations.iter().map(|o| o.feature).collect();

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut centroids = seed_centroids(&features, self.k, &mut rng);
        let mut assignments: Vec<usize> = Vec::new();
        let mut converged_after = None;

        for iteration in 0..self.max_iterations {
            assignments = features
                .iter()
                .map(|feature| closest_centroid(*feature, &centroids))
                .collect();

            let new_centroids = self.update_centroids(&features, &assignments, &centroids);
            let converged = self.has_converged(&centroids, &new_centroids);
            centroids = new_centroids;

            if converged {
                converged_after = Some(iteration + 1);
                break;
            }
        }

        match converged_after {
            Some(iterations) => debug!("k-means converged after {} iterations", iterations),
            None => debug!(
                "k-means stopped at the iteration cap of {}",
                self.max_iterations
            ),
        }

        Ok(build_clusters(observations, &assignments, centroids))
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.k >= 1, "k must be at least 1, got {}", self.k);
        ensure!(
            self.max_iterations >= 1,
            "max_iterations must be at least 1, got {}",
            self.max_iterations
        );
        ensure!(
            self.tolerance.is_finite() && self.tolerance >= A::zero(),
            "tolerance must be finite and non-negative, got {}",
            self.tolerance
        );
        Ok(())
    }

    fn update_centroids(&self, features: &[A], assignments: &[usize], centroids: &[A]) -> Vec<A> {
        let mut sums = vec![A::zero(); centroids.len()];
        let mut counts = vec![0usize; centroids.len()];

        for (feature, cluster) in features.iter().zip(assignments) {
            sums[*cluster] = sums[*cluster] + *feature;
            counts[*cluster] += 1;
        }

        centroids
            .iter()
            .enumerate()
            .map(|(i, previous)| {
                if counts[i] == 0 {
                    // an empty cluster keeps its previous centroid
                    *previous
                } else {
                    sums[i] / A::from_usize(counts[i]).unwrap()
                }
            })
            .collect()
    }

    fn has_converged(&self, old: &[A], new: &[A]) -> bool {
        old.iter()
            .zip(new)
            .all(|(a, b)| (*a - *b).abs() <= self.tolerance)
    }
}

fn build_clusters<A: LibData>(
    observations: Vec<Observation<A>>,
    assignments: &[usize],
    centroids: Vec<A>,
) -> Vec<Cluster<A>> {
    let mut members: Vec<Vec<Observation<A>>> = centroids.iter().map(|_| Vec::new()).collect();
    for (observation, cluster) in observations.into_iter().zip(assignments.iter().copied()) {
        members[cluster].push(observation);
    }

    let mut clusters: Vec<Cluster<A>> = centroids
        .into_iter()
        .zip(members)
        .map(|(centroid, members)| Cluster {
            aggregates: aggregate_metrics(&members),
            centroid,
            members,
        })
        .collect();

    clusters.sort_by(|a, b| a.centroid.partial_cmp(&b.centroid).unwrap_or(Ordering::Equal));
    clusters
}
