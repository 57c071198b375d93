use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::ops::AddAssign;

// A Float trait that captures the requirements we need for the various places
// we need floats. These requirements are imposed by the spherical geometry
// math and by serde-backed configuration.
pub trait GeoFloat:
    num_traits::Float
    + Debug
    + Default
    + AddAssign
    + Serialize
    + for<'de> Deserialize<'de>
    + Copy
    + Sync
    + Send
    + FromPrimitive
{
}

impl GeoFloat for f32 {}
impl GeoFloat for f64 {}
