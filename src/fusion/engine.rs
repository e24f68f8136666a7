//! Fusion orchestration over one batch of position samples

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::algorithms::centroid::{position_spread_m, weighted_centroid, CentroidEstimate};
use crate::algorithms::trilateration::trilaterate;
use crate::core::{
    FusedPosition, FusionMethod, PositionSample, ACCURACY_FLOOR_M, AGREEMENT_DECAY_M,
    FALLBACK_ACCURACY_M, FALLBACK_CONFIDENCE, FUSION_ACCURACY_GAIN,
};
use crate::utils::config::EngineConfig;
use crate::validation::{filter_outliers, validate_samples};

/// Stateless fusion pipeline over one batch of samples.
///
/// Safe to share across threads; per-track state lives only in the caller's
/// [`TrackSmoother`](crate::processing::TrackSmoother) instances.
#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    config: EngineConfig,
}

impl FusionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fuses one batch of samples into a single position estimate, relative
    /// to the reference instant `now_ms`.
    ///
    /// Always produces an answer: empty or fully rejected input resolves to
    /// an explicit low-confidence fallback tier rather than an error.
    pub fn fuse(&self, samples: &[PositionSample], now_ms: u64) -> FusedPosition {
        let valid = validate_samples(samples, now_ms, self.config.max_sample_age_ms);

        if valid.is_empty() {
            return fallback(samples);
        }

        if valid.len() == 1 {
            debug!("single valid sample, passing through verbatim");
            let sample = valid[0];
            return FusedPosition {
                latitude: sample.latitude,
                longitude: sample.longitude,
                accuracy_m: sample.accuracy_m,
                confidence: sample.confidence,
                sources: valid,
                method: FusionMethod::Single,
            };
        }

        let contributors = filter_outliers(&valid, now_ms);

        let mut method = FusionMethod::WeightedAverage;
        let mut solved = None;
        if contributors.len() >= 3 {
            solved = trilaterate(&contributors);
            if solved.is_some() {
                method = FusionMethod::Triangulation;
            }
        }

        let (latitude, longitude, zero_weight) = match solved {
            Some((lat, lon)) => (lat, lon, false),
            None => {
                let c = weighted_centroid(&contributors, now_ms).unwrap_or(CentroidEstimate {
                    lat: 0.0,
                    lon: 0.0,
                    degenerate: true,
                });
                (c.lat, c.lon, c.degenerate)
            }
        };

        let mean_accuracy =
            contributors.iter().map(|s| s.accuracy_m).sum::<f64>() / contributors.len() as f64;
        let accuracy_m = (mean_accuracy * FUSION_ACCURACY_GAIN).max(ACCURACY_FLOOR_M);

        let spread_m = position_spread_m(&contributors, now_ms);
        let max_confidence = contributors.iter().map(|s| s.confidence).fold(0.0, f64::max);
        let confidence = if zero_weight {
            0.0
        } else {
            (max_confidence * (-spread_m / AGREEMENT_DECAY_M).exp()).min(1.0)
        };

        debug!(
            ?method,
            contributors = contributors.len(),
            spread_m,
            "fused sample batch"
        );

        FusedPosition {
            latitude,
            longitude,
            accuracy_m,
            confidence,
            sources: contributors,
            method,
        }
    }

    /// [`fuse`](Self::fuse) against the system clock.
    pub fn fuse_now(&self, samples: &[PositionSample]) -> FusedPosition {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        self.fuse(samples, now_ms)
    }
}

/// Fuses one batch with the default configuration.
pub fn fuse(samples: &[PositionSample], now_ms: u64) -> FusedPosition {
    FusionEngine::new().fuse(samples, now_ms)
}

/// Resolves a batch with no usable samples.
///
/// A non-empty batch falls back to its most recent raw sample at a fixed
/// low confidence; an empty batch yields the degenerate zero position. Both
/// are deliberate answer tiers, not errors.
fn fallback(samples: &[PositionSample]) -> FusedPosition {
    match samples.last() {
        Some(last) => {
            debug!("all samples rejected, falling back to most recent raw sample");
            FusedPosition {
                latitude: last.latitude,
                longitude: last.longitude,
                accuracy_m: last.accuracy_m,
                confidence: FALLBACK_CONFIDENCE,
                sources: vec![*last],
                method: FusionMethod::Single,
            }
        }
        None => {
            debug!("no samples supplied, returning degenerate fallback");
            FusedPosition {
                latitude: 0.0,
                longitude: 0.0,
                accuracy_m: FALLBACK_ACCURACY_M,
                confidence: 0.0,
                sources: Vec::new(),
                method: FusionMethod::Single,
            }
        }
    }
}
