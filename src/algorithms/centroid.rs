//! Accuracy/confidence/recency-weighted centroid estimation

use crate::algorithms::geodesy::haversine_distance_m;
use crate::core::{PositionSample, RECENCY_DECAY_MS};

/// Weighted centroid of a sample batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentroidEstimate {
    pub lat: f64,
    pub lon: f64,
    /// True when every weight collapsed to zero and the unweighted
    /// arithmetic mean was used instead.
    pub degenerate: bool,
}

/// Weight of one sample: inverse accuracy, scaled by the trust prior and an
/// exponential recency decay.
pub fn sample_weight(sample: &PositionSample, now_ms: u64) -> f64 {
    let accuracy_weight = 1.0 / sample.accuracy_m.max(1.0);
    let recency_weight = (-(sample.age_ms(now_ms) as f64) / RECENCY_DECAY_MS).exp();
    accuracy_weight * sample.confidence * recency_weight
}

/// Weight-normalized mean of latitude and longitude over `samples`.
///
/// A planar mean is sufficient at the spans this engine operates on, so no
/// geodesic correction is applied. Zero total weight degrades to the
/// unweighted arithmetic mean with the `degenerate` flag set; callers force
/// confidence to zero in that case.
pub fn weighted_centroid(samples: &[PositionSample], now_ms: u64) -> Option<CentroidEstimate> {
    if samples.is_empty() {
        return None;
    }

    let mut total_weight = 0.0;
    let mut lat = 0.0;
    let mut lon = 0.0;
    for sample in samples {
        let weight = sample_weight(sample, now_ms);
        lat += sample.latitude * weight;
        lon += sample.longitude * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        Some(CentroidEstimate {
            lat: lat / total_weight,
            lon: lon / total_weight,
            degenerate: false,
        })
    } else {
        let n = samples.len() as f64;
        Some(CentroidEstimate {
            lat: samples.iter().map(|s| s.latitude).sum::<f64>() / n,
            lon: samples.iter().map(|s| s.longitude).sum::<f64>() / n,
            degenerate: true,
        })
    }
}

/// Standard deviation (meters) of sample distances to the batch's weighted
/// centroid. Fewer than two samples have no spread.
pub fn position_spread_m(samples: &[PositionSample], now_ms: u64) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let centroid = match weighted_centroid(samples, now_ms) {
        Some(c) => c,
        None => return 0.0,
    };

    let distances: Vec<f64> = samples
        .iter()
        .map(|s| haversine_distance_m(s.latitude, s.longitude, centroid.lat, centroid.lon))
        .collect();
    let mean = distances.iter().sum::<f64>() / distances.len() as f64;
    let variance =
        distances.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / distances.len() as f64;

    variance.sqrt()
}
