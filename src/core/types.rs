//! Core data types for the position fusion engine

use serde::{Deserialize, Serialize};

/// Measurement system that produced a position sample.
///
/// Closed vocabulary; never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Gps,
    Network,
    Wifi,
    Cellular,
    Ip,
}

impl SourceKind {
    /// Base trust prior for readings from this source type.
    pub fn base_confidence(self) -> f64 {
        match self {
            SourceKind::Gps => 0.95,
            SourceKind::Network => 0.8,
            SourceKind::Wifi => 0.75,
            SourceKind::Cellular => 0.6,
            SourceKind::Ip => 0.3,
        }
    }
}

/// One independently-measured position reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// 1-sigma uncertainty radius (meters)
    pub accuracy_m: f64,
    /// Measurement system that produced the reading
    pub source: SourceKind,
    /// Wall-clock capture instant (milliseconds since epoch)
    pub timestamp_ms: u64,
    /// Trust prior in [0, 1], supplied by the caller or a prior scoring pass
    pub confidence: f64,
}

impl PositionSample {
    /// Sample age relative to `now_ms`, saturating at zero for readings
    /// timestamped ahead of the reference clock.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp_ms)
    }
}

/// Algorithmic path that produced a fused position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FusionMethod {
    Single,
    WeightedAverage,
    Triangulation,
}

/// Best position estimate for one fusion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedPosition {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Estimated uncertainty radius (meters)
    pub accuracy_m: f64,
    /// Engine trust score in [0, 1]
    pub confidence: f64,
    /// Samples that survived validation and filtering, in input order
    pub sources: Vec<PositionSample>,
    /// Path that produced this estimate
    pub method: FusionMethod,
}

/// One point of a smoothed display stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothedPoint {
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_wire_names() {
        assert_eq!(serde_json::to_string(&SourceKind::Gps).unwrap(), "\"gps\"");
        assert_eq!(serde_json::to_string(&SourceKind::Wifi).unwrap(), "\"wifi\"");
        let parsed: SourceKind = serde_json::from_str("\"cellular\"").unwrap();
        assert_eq!(parsed, SourceKind::Cellular);
    }

    #[test]
    fn test_fusion_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&FusionMethod::WeightedAverage).unwrap(),
            "\"weighted_average\""
        );
        assert_eq!(
            serde_json::to_string(&FusionMethod::Triangulation).unwrap(),
            "\"triangulation\""
        );
        assert_eq!(serde_json::to_string(&FusionMethod::Single).unwrap(), "\"single\"");
    }

    #[test]
    fn test_base_confidence_ordering() {
        assert!(SourceKind::Gps.base_confidence() > SourceKind::Network.base_confidence());
        assert!(SourceKind::Network.base_confidence() > SourceKind::Wifi.base_confidence());
        assert!(SourceKind::Wifi.base_confidence() > SourceKind::Cellular.base_confidence());
        assert!(SourceKind::Cellular.base_confidence() > SourceKind::Ip.base_confidence());
    }

    #[test]
    fn test_sample_age_saturates_for_future_timestamps() {
        let sample = PositionSample {
            latitude: 1.0,
            longitude: 1.0,
            accuracy_m: 10.0,
            source: SourceKind::Gps,
            timestamp_ms: 2_000,
            confidence: 0.9,
        };
        assert_eq!(sample.age_ms(5_000), 3_000);
        assert_eq!(sample.age_ms(1_000), 0);
    }
}
