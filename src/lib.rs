//! Position Fusion Engine
//!
//! Fuses independently-measured position estimates (GPS, network, Wi-Fi,
//! cellular, IP geolocation) with heterogeneous accuracy and trust
//! characteristics into one best estimate of current location, together with
//! a defensible confidence and accuracy figure. A separate per-track smoother
//! damps display streams over time.

pub mod algorithms;
pub mod core;
pub mod fusion;
pub mod processing;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    FusedPosition, FusionMethod, PositionSample, SmoothedPoint, SourceKind, ACCURACY_FLOOR_M,
    EARTH_RADIUS_M,
};
pub use crate::algorithms::geodesy::haversine_distance_m;
pub use crate::algorithms::trilateration::trilaterate;
pub use crate::fusion::confidence::score_confidence;
pub use crate::fusion::engine::{fuse, FusionEngine};
pub use crate::processing::history::smooth_with_history;
pub use crate::processing::kalman::{smooth_track, TrackSmoother};
pub use crate::utils::config::{ConfigError, EngineConfig};
pub use crate::validation::{filter_outliers, validate_samples};
