//! Rolling-window history smoothing

use crate::core::SmoothedPoint;

/// Arithmetic mean of the last `window` points of a track history.
///
/// A cheap alternative to [`TrackSmoother`](crate::processing::TrackSmoother)
/// for damping sudden display jumps. An empty history (or a zero window)
/// yields the origin, which callers treat as "no data yet".
pub fn smooth_with_history(history: &[SmoothedPoint], window: usize) -> SmoothedPoint {
    let recent = &history[history.len().saturating_sub(window)..];
    if recent.is_empty() {
        return SmoothedPoint { lat: 0.0, lon: 0.0 };
    }

    let n = recent.len() as f64;
    SmoothedPoint {
        lat: recent.iter().map(|p| p.lat).sum::<f64>() / n,
        lon: recent.iter().map(|p| p.lon).sum::<f64>() / n,
    }
}
