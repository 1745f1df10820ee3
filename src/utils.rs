use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::str::FromStr;

pub trait LibData:
    'static + Clone + Send + Default + Sync + Debug + Float + FromPrimitive + Sum + FromStr + Display
{
    const INFINITY: Self;
}

impl LibData for f32 {
    const INFINITY: Self = Self::INFINITY;
}

impl LibData for f64 {
    const INFINITY: Self = Self::INFINITY;
}
