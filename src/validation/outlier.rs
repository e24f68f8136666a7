//! Distance-based outlier rejection around the weighted centroid

use tracing::debug;

use crate::algorithms::centroid::weighted_centroid;
use crate::algorithms::geodesy::haversine_distance_m;
use crate::core::PositionSample;

/// Outlier gate width in standard deviations above the mean centroid distance.
const OUTLIER_STDDEV_GATE: f64 = 2.0;

/// Removes samples far from the batch's weighted centroid.
///
/// Fewer than three samples cannot be judged for agreement and pass through
/// unchanged. Otherwise the great-circle distance of each sample to the
/// centroid is compared against `mean + 2 * stddev` of the batch's distances,
/// a relative gate that adapts to the spread of the source mix. Order is
/// preserved.
pub fn filter_outliers(samples: &[PositionSample], now_ms: u64) -> Vec<PositionSample> {
    if samples.len() < 3 {
        return samples.to_vec();
    }

    let centroid = match weighted_centroid(samples, now_ms) {
        Some(c) => c,
        None => return samples.to_vec(),
    };

    let distances: Vec<f64> = samples
        .iter()
        .map(|s| haversine_distance_m(s.latitude, s.longitude, centroid.lat, centroid.lon))
        .collect();
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    let variance =
        distances.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / distances.len() as f64;
    let threshold = mean + OUTLIER_STDDEV_GATE * variance.sqrt();

    let kept: Vec<PositionSample> = samples
        .iter()
        .zip(&distances)
        .filter(|(_, d)| **d <= threshold)
        .map(|(s, _)| *s)
        .collect();

    if kept.len() < samples.len() {
        debug!(removed = samples.len() - kept.len(), "dropped centroid outliers");
    }
    kept
}
