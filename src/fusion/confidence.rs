//! Source confidence scoring

use crate::core::{SourceKind, AGREEMENT_DECAY_M, CONFIDENCE_AGE_DECAY_MS};

/// Base trust prior for readings of unknown provenance.
const UNKNOWN_BASE_CONFIDENCE: f64 = 0.5;

/// Derives a [0, 1] trust score for a position reading.
///
/// The per-source base prior is scaled by an accuracy factor
/// `0.5 + 0.5 * exp(-accuracy / 100)`, an optional age decay with a
/// two-minute half-life when the capture timestamp is supplied, and an
/// optional agreement factor when the spread across concurrent sources is
/// known. Pass `None` for `source` when provenance is unknown. Used both to
/// seed sample confidence at ingestion and to re-derive it independently of
/// caller-supplied priors.
pub fn score_confidence(
    source: Option<SourceKind>,
    accuracy_m: f64,
    timestamp_ms: Option<u64>,
    source_spread_m: Option<f64>,
    now_ms: u64,
) -> f64 {
    let base = source.map_or(UNKNOWN_BASE_CONFIDENCE, SourceKind::base_confidence);
    let accuracy_factor = 0.5 + 0.5 * (-accuracy_m / 100.0).exp();
    let age_factor = timestamp_ms
        .map(|ts| (-(now_ms.saturating_sub(ts) as f64) / CONFIDENCE_AGE_DECAY_MS).exp())
        .unwrap_or(1.0);
    let agreement_factor = source_spread_m
        .map(|spread| (-spread / AGREEMENT_DECAY_M).exp())
        .unwrap_or(1.0);

    (base * accuracy_factor * age_factor * agreement_factor).min(1.0)
}
