use crate::utils::LibData;

pub struct Parameters<A: LibData> {
    pub k: usize,
    pub max_iterations: usize,
    pub tolerance: A,
    pub seed: Option<u64>,
}

impl<A: LibData> Default for Parameters<A> {
    fn default() -> Self {
        Self {
            k: 3,
            max_iterations: 100,
            tolerance: A::from_f64(1e-3).unwrap(),
            seed: None,
        }
    }
}
