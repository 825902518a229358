//! Geographic coordinates and geodesic distance
//!
//! Distance is computed on the WGS-84 ellipsoid with Vincenty's inverse
//! formula rather than a spherical approximation. At the 5 km discovery
//! radius the difference is small, but the ellipsoidal model stays accurate
//! for users near the poles and at large separations.

use serde::{Deserialize, Serialize};

/// WGS-84 semi-major axis in meters
const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS-84 semi-minor axis in meters
const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);

/// Convergence threshold for the Vincenty iteration (radians)
const CONVERGENCE: f64 = 1e-12;
/// Iteration cap; nearly antipodal pairs may not converge
const MAX_ITERATIONS: usize = 200;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create a new coordinate pair. Values are trusted as supplied;
    /// no range validation is performed.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Geodesic distance to another point in kilometers
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        vincenty_km(self, other).unwrap_or_else(|| haversine_km(self, other))
    }

    /// Whether another point lies within `radius_km` of this one
    pub fn within_km(&self, other: &Coordinates, radius_km: f64) -> bool {
        self.distance_km(other) <= radius_km
    }
}

/// Vincenty inverse solution on the WGS-84 ellipsoid.
///
/// Returns `None` when the iteration fails to converge (nearly antipodal
/// points); callers fall back to the spherical formula.
fn vincenty_km(from: &Coordinates, to: &Coordinates) -> Option<f64> {
    let u1 = ((1.0 - WGS84_F) * from.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * to.lat.to_radians().tan()).atan();
    let l = (to.lon - from.lon).to_radians();

    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();

        if sin_sigma == 0.0 {
            // coincident points
            return Some(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos2_alpha = 1.0 - sin_alpha * sin_alpha;

        // Equatorial line: cos2_alpha == 0
        let cos_2sigma_m = if cos2_alpha.abs() < f64::EPSILON {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
        };

        let c = WGS84_F / 16.0 * cos2_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos2_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - lambda_prev).abs() < CONVERGENCE {
            let u_sq = cos2_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
            let a = 1.0
                + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

            let delta_sigma = b
                * sin_sigma
                * (cos_2sigma_m
                    + b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            return Some(WGS84_B * a * (sigma - delta_sigma) / 1000.0);
        }
    }

    None
}

/// Spherical (haversine) distance, used only as a fallback when Vincenty
/// does not converge.
fn haversine_km(from: &Coordinates, to: &Coordinates) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_coincident_points() {
        let p = Coordinates::new(52.2296756, 21.0122287);
        assert_eq!(p.distance_km(&p), 0.0);
    }

    #[test]
    fn test_distance_one_degree_longitude_at_equator() {
        // One degree of longitude on the equator is about 111.32 km
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.0, 1.0);
        let d = a.distance_km(&b);
        assert!((111.0..111.6).contains(&d), "got {d}");
    }

    #[test]
    fn test_distance_meridional_minutes_of_arc() {
        // 0.03 degrees of latitude at 37N is about 3.33 km
        let a = Coordinates::new(37.0, -122.0);
        let b = Coordinates::new(37.03, -122.0);
        let d = a.distance_km(&b);
        assert!((3.2..3.45).contains(&d), "got {d}");
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Coordinates::new(48.8566, 2.3522);
        let b = Coordinates::new(51.5074, -0.1278);
        let d1 = a.distance_km(&b);
        let d2 = b.distance_km(&a);
        assert!((d1 - d2).abs() < 1e-6);
        // Paris - London is about 344 km
        assert!((340.0..350.0).contains(&d1), "got {d1}");
    }

    #[test]
    fn test_distance_near_antipodal_falls_back() {
        // Vincenty may fail to converge here; the haversine fallback must
        // still return a sane figure (half the circumference, roughly)
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.5, 179.7);
        let d = a.distance_km(&b);
        assert!(d > 19_000.0, "got {d}");
    }

    #[test]
    fn test_within_radius_boundary() {
        let origin = Coordinates::new(37.0, -122.0);
        let near = Coordinates::new(37.03, -122.0); // ~3.3 km
        let far = Coordinates::new(37.1, -122.0); // ~11 km

        assert!(origin.within_km(&near, 5.0));
        assert!(!origin.within_km(&far, 5.0));
    }
}
