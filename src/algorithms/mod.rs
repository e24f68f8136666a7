//! Position estimation algorithms

pub mod centroid;
pub mod geodesy;
pub mod trilateration;

pub use centroid::{position_spread_m, sample_weight, weighted_centroid, CentroidEstimate};
pub use geodesy::haversine_distance_m;
pub use trilateration::trilaterate;
