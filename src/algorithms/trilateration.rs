//! Closed-form trilateration over the three most reliable samples

use nalgebra::{Matrix2, Vector2};
use tracing::debug;

use crate::core::{PositionSample, COLLINEARITY_EPSILON, EARTH_RADIUS_M};

/// Geometric position solve from the three most reliable samples.
///
/// Samples are ranked by `accuracy * (1 - confidence)` ascending and the best
/// three are projected onto a local Cartesian plane. Subtracting their circle
/// equations pairwise eliminates the quadratic terms, leaving a 2x2 linear
/// system in (x, y); each sample's accuracy radius stands in for a measured
/// range, a best-effort approximation accepted for a closed-form O(1) answer.
/// Returns `None` for fewer than three samples or when the projected points
/// are collinear, signalling the caller to fall back to the weighted centroid.
pub fn trilaterate(samples: &[PositionSample]) -> Option<(f64, f64)> {
    if samples.len() < 3 {
        return None;
    }

    let mut ranked: Vec<&PositionSample> = samples.iter().collect();
    ranked.sort_by(|a, b| reliability_rank(a).total_cmp(&reliability_rank(b)));
    let (p1, p2, p3) = (ranked[0], ranked[1], ranked[2]);

    let (x1, y1) = project(p1);
    let (x2, y2) = project(p2);
    let (x3, y3) = project(p3);

    let coeffs = Matrix2::new(
        2.0 * (x2 - x1),
        2.0 * (y2 - y1),
        2.0 * (x3 - x2),
        2.0 * (y3 - y2),
    );
    let rhs = Vector2::new(
        p1.accuracy_m.powi(2) - p2.accuracy_m.powi(2) - x1.powi(2) + x2.powi(2) - y1.powi(2)
            + y2.powi(2),
        p2.accuracy_m.powi(2) - p3.accuracy_m.powi(2) - x2.powi(2) + x3.powi(2) - y2.powi(2)
            + y3.powi(2),
    );

    if coeffs.determinant().abs() < COLLINEARITY_EPSILON {
        debug!("trilateration inputs collinear, deferring to weighted centroid");
        return None;
    }

    let solution = coeffs.try_inverse()? * rhs;
    Some(unproject(solution.x, solution.y, p1.latitude))
}

/// Lower ranks sort first: small uncertainty and high confidence win. Ties
/// keep input order (the sort is stable), so clustered readings ahead of a
/// straggler stay ahead.
fn reliability_rank(sample: &PositionSample) -> f64 {
    sample.accuracy_m * (1.0 - sample.confidence)
}

fn project(sample: &PositionSample) -> (f64, f64) {
    let lat = sample.latitude.to_radians();
    let lon = sample.longitude.to_radians();
    (
        EARTH_RADIUS_M * lat.cos() * lon.cos(),
        EARTH_RADIUS_M * lat.cos() * lon.sin(),
    )
}

/// Recovers latitude/longitude from the planar solution. The projection
/// collapses both hemispheres onto one plane, so the latitude sign is taken
/// from the top-ranked input sample.
fn unproject(x: f64, y: f64, reference_lat: f64) -> (f64, f64) {
    let ratio = (x.hypot(y) / EARTH_RADIUS_M).min(1.0);
    let lat = ratio.acos().to_degrees().copysign(reference_lat);
    let lon = y.atan2(x).to_degrees();
    (lat, lon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceKind;

    const NOW_MS: u64 = 1_700_000_000_000;

    fn sample(lat: f64, lon: f64, accuracy_m: f64, confidence: f64) -> PositionSample {
        PositionSample {
            latitude: lat,
            longitude: lon,
            accuracy_m,
            source: SourceKind::Gps,
            timestamp_ms: NOW_MS,
            confidence,
        }
    }

    #[test]
    fn test_too_few_samples() {
        let samples = vec![sample(1.0, 1.0, 10.0, 0.9), sample(1.0, 2.0, 10.0, 0.9)];
        assert!(trilaterate(&samples).is_none());
    }

    #[test]
    fn test_collinear_samples_are_rejected() {
        // Same meridian projects onto a single line in the plane.
        let samples = vec![
            sample(0.0, 0.0, 10.0, 0.9),
            sample(1.0, 0.0, 10.0, 0.9),
            sample(2.0, 0.0, 10.0, 0.9),
        ];
        assert!(trilaterate(&samples).is_none());
    }

    #[test]
    fn test_symmetric_cluster_solves_to_circumcenter() {
        let samples = vec![
            sample(1.0, 1.0, 10.0, 0.9),
            sample(1.0, 2.0, 10.0, 0.9),
            sample(2.0, 1.0, 10.0, 0.9),
        ];
        let (lat, lon) = trilaterate(&samples).unwrap();
        assert!((lat - 1.5).abs() < 0.05, "got lat {lat}");
        assert!((lon - 1.5).abs() < 0.05, "got lon {lon}");
    }

    #[test]
    fn test_southern_hemisphere_keeps_sign() {
        let samples = vec![
            sample(-1.0, -1.0, 10.0, 0.9),
            sample(-1.0, -2.0, 10.0, 0.9),
            sample(-2.0, -1.0, 10.0, 0.9),
        ];
        let (lat, lon) = trilaterate(&samples).unwrap();
        assert!(lat < 0.0, "got lat {lat}");
        assert!(lon < 0.0, "got lon {lon}");
        assert!((lat + 1.5).abs() < 0.05, "got lat {lat}");
    }

    #[test]
    fn test_reliable_samples_are_preferred() {
        // The three trusted readings ring (1.5, 1.5); the wild cellular fix
        // ranks last and must not enter the solve.
        let samples = vec![
            sample(1.0, 1.0, 10.0, 0.9),
            sample(1.0, 2.0, 10.0, 0.9),
            sample(50.0, 50.0, 5_000.0, 0.2),
            sample(2.0, 1.0, 10.0, 0.9),
        ];
        let (lat, lon) = trilaterate(&samples).unwrap();
        assert!((lat - 1.5).abs() < 0.05, "got lat {lat}");
        assert!((lon - 1.5).abs() < 0.05, "got lon {lon}");
    }
}
