//! Geodesy helpers shared by the fusion pipeline

use crate::core::EARTH_RADIUS_M;

/// Great-circle distance between two coordinates via the haversine formula (m).
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        assert_eq!(haversine_distance_m(48.85, 2.35, 48.85, 2.35), 0.0);
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        // One degree of arc on the mean-radius sphere is ~111.19 km.
        let d = haversine_distance_m(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn test_symmetry() {
        let forward = haversine_distance_m(10.0, 20.0, 30.0, 40.0);
        let backward = haversine_distance_m(30.0, 40.0, 10.0, 20.0);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_longitude_spacing_shrinks_with_latitude() {
        let at_equator = haversine_distance_m(0.0, 0.0, 0.0, 1.0);
        let at_sixty = haversine_distance_m(60.0, 0.0, 60.0, 1.0);
        assert!(at_sixty < at_equator * 0.6);
    }
}
