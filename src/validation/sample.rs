//! Sample admission checks ahead of fusion

use tracing::debug;

use crate::core::PositionSample;

/// Returns the sub-sequence of `samples` that is physically plausible and
/// fresh enough to fuse, relative to `now_ms`.
///
/// Order is preserved and nothing is mutated. An empty result is a normal
/// outcome the orchestrator resolves through its fallback tiers; the
/// validator itself never fails.
pub fn validate_samples(
    samples: &[PositionSample],
    now_ms: u64,
    max_age_ms: u64,
) -> Vec<PositionSample> {
    let valid: Vec<PositionSample> = samples
        .iter()
        .filter(|s| is_valid_sample(s, now_ms, max_age_ms))
        .copied()
        .collect();

    if valid.len() < samples.len() {
        debug!(
            rejected = samples.len() - valid.len(),
            admitted = valid.len(),
            "rejected implausible or stale samples"
        );
    }
    valid
}

fn is_valid_sample(sample: &PositionSample, now_ms: u64, max_age_ms: u64) -> bool {
    (-90.0..=90.0).contains(&sample.latitude)
        && (-180.0..=180.0).contains(&sample.longitude)
        && sample.accuracy_m > 0.0
        && sample.age_ms(now_ms) < max_age_ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SourceKind, DEFAULT_MAX_SAMPLE_AGE_MS};

    const NOW_MS: u64 = 1_700_000_000_000;

    fn sample(lat: f64, lon: f64) -> PositionSample {
        PositionSample {
            latitude: lat,
            longitude: lon,
            accuracy_m: 10.0,
            source: SourceKind::Gps,
            timestamp_ms: NOW_MS,
            confidence: 0.9,
        }
    }

    #[test]
    fn test_in_range_samples_pass() {
        let samples = vec![sample(0.0, 0.0), sample(-90.0, 180.0), sample(90.0, -180.0)];
        let valid = validate_samples(&samples, NOW_MS, DEFAULT_MAX_SAMPLE_AGE_MS);
        assert_eq!(valid.len(), 3);
    }

    #[test]
    fn test_out_of_range_coordinates_are_rejected() {
        let samples = vec![sample(91.0, 0.0), sample(0.0, -181.0), sample(1.0, 1.0)];
        let valid = validate_samples(&samples, NOW_MS, DEFAULT_MAX_SAMPLE_AGE_MS);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].latitude, 1.0);
    }

    #[test]
    fn test_nonpositive_accuracy_is_rejected() {
        let mut bad = sample(1.0, 1.0);
        bad.accuracy_m = 0.0;
        let mut negative = sample(2.0, 2.0);
        negative.accuracy_m = -5.0;
        let valid = validate_samples(&[bad, negative], NOW_MS, DEFAULT_MAX_SAMPLE_AGE_MS);
        assert!(valid.is_empty());
    }

    #[test]
    fn test_stale_samples_are_rejected() {
        let mut stale = sample(1.0, 1.0);
        stale.timestamp_ms = NOW_MS - DEFAULT_MAX_SAMPLE_AGE_MS;
        let mut fresh = sample(2.0, 2.0);
        fresh.timestamp_ms = NOW_MS - DEFAULT_MAX_SAMPLE_AGE_MS + 1;
        let valid = validate_samples(&[stale, fresh], NOW_MS, DEFAULT_MAX_SAMPLE_AGE_MS);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].latitude, 2.0);
    }

    #[test]
    fn test_future_timestamps_count_as_fresh() {
        let mut ahead = sample(1.0, 1.0);
        ahead.timestamp_ms = NOW_MS + 60_000;
        let valid = validate_samples(&[ahead], NOW_MS, DEFAULT_MAX_SAMPLE_AGE_MS);
        assert_eq!(valid.len(), 1);
    }

    #[test]
    fn test_order_is_preserved() {
        let samples = vec![sample(3.0, 3.0), sample(91.0, 0.0), sample(1.0, 1.0)];
        let valid = validate_samples(&samples, NOW_MS, DEFAULT_MAX_SAMPLE_AGE_MS);
        assert_eq!(valid[0].latitude, 3.0);
        assert_eq!(valid[1].latitude, 1.0);
    }
}
