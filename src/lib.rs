mod kmeans;
mod outlier;
mod statistics;
#[cfg(test)]
mod test_utils;
mod utils;

pub use kmeans::{Cluster, KMeans, Observation, Parameters};
pub use outlier::{Bounds, OutlierDetector, OutlierResult};
pub use statistics::FeatureSummary;
pub use utils::LibData;
