//! Temporal position smoothing for display streams

use crate::core::SmoothedPoint;

/// Recursive per-track position smoother.
///
/// Runs a 1-D predict/update recursion on latitude and then longitude,
/// sharing one error-covariance scalar between the two axis updates. The
/// coupling keeps each update O(1); this is not a full multivariate filter,
/// and the exact recursion order is load-bearing for replay compatibility.
/// One instance per tracked entity, single writer; never share an instance
/// across tracks.
#[derive(Debug, Clone)]
pub struct TrackSmoother {
    /// Current latitude estimate
    x: f64,
    /// Current longitude estimate
    y: f64,
    /// Error covariance, shared sequentially by both axis updates
    p: f64,
    /// Process noise covariance
    q: f64,
    /// Measurement noise covariance
    r: f64,
}

impl TrackSmoother {
    /// Default process noise covariance
    pub const DEFAULT_PROCESS_NOISE: f64 = 1.0;
    /// Default measurement noise covariance
    pub const DEFAULT_MEASUREMENT_NOISE: f64 = 10.0;

    /// Seeds a smoother at the first observed point with default noise.
    pub fn new(initial: SmoothedPoint) -> Self {
        Self::with_noise(
            initial,
            Self::DEFAULT_PROCESS_NOISE,
            Self::DEFAULT_MEASUREMENT_NOISE,
        )
    }

    /// Seeds a smoother with deployment-tuned noise covariances.
    pub fn with_noise(initial: SmoothedPoint, process_noise: f64, measurement_noise: f64) -> Self {
        Self {
            x: initial.lat,
            y: initial.lon,
            p: 1.0,
            q: process_noise,
            r: measurement_noise,
        }
    }

    /// Folds one raw point into the track and returns the smoothed point.
    pub fn update(&mut self, lat: f64, lon: f64) -> SmoothedPoint {
        // Latitude
        self.p += self.q;
        let k = self.p / (self.p + self.r);
        self.x += k * (lat - self.x);
        self.p = (1.0 - k) * self.p;
        // Longitude, continuing from the post-latitude covariance
        self.p += self.q;
        let k = self.p / (self.p + self.r);
        self.y += k * (lon - self.y);
        self.p = (1.0 - k) * self.p;

        SmoothedPoint {
            lat: self.x,
            lon: self.y,
        }
    }

    /// Current smoothed estimate without folding a new measurement.
    pub fn estimate(&self) -> SmoothedPoint {
        SmoothedPoint {
            lat: self.x,
            lon: self.y,
        }
    }
}

/// Replays a recorded stream through a fresh smoother, one output per input.
///
/// The filter is seeded with the first point, so the first output equals the
/// first input. Points must be supplied in capture order; out-of-order replay
/// is the caller's to avoid.
pub fn smooth_track(points: &[SmoothedPoint]) -> Vec<SmoothedPoint> {
    let first = match points.first() {
        Some(p) => *p,
        None => return Vec::new(),
    };
    let mut smoother = TrackSmoother::new(first);
    points.iter().map(|p| smoother.update(p.lat, p.lon)).collect()
}
