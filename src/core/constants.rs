//! Physical constants and engine parameters

/// Earth's mean radius (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default maximum sample age admitted into fusion (ms)
pub const DEFAULT_MAX_SAMPLE_AGE_MS: u64 = 300_000;

/// Floor on fused-path accuracy estimates (m)
pub const ACCURACY_FLOOR_M: f64 = 10.0;

/// Accuracy improvement claimed for multi-source fusion over the raw sensors
pub const FUSION_ACCURACY_GAIN: f64 = 0.8;

/// Accuracy reported when no position can be derived at all (m)
pub const FALLBACK_ACCURACY_M: f64 = 99_999.0;

/// Confidence assigned to the last-known-sample fallback tier
pub const FALLBACK_CONFIDENCE: f64 = 0.1;

/// Recency decay time constant for centroid weights (ms)
pub const RECENCY_DECAY_MS: f64 = 60_000.0;

/// Age decay time constant for confidence scoring, a two-minute half-life (ms)
pub const CONFIDENCE_AGE_DECAY_MS: f64 = 120_000.0;

/// Spread decay constant shared by the scorer and the orchestrator (m)
pub const AGREEMENT_DECAY_M: f64 = 1_000.0;

/// Determinant magnitude below which trilateration inputs count as collinear
pub const COLLINEARITY_EPSILON: f64 = 1e-6;
