use crate::constants::METERS_PER_DEGREE;

/// Returns the number of meters per degree of longitude.
///
/// The value is `((2π)/360) × 6371 km × 1000 × cos(longitude)`, with
/// `longitude` handed to [`f64::cos`] as-is. `cos` works in radians, so this
/// is not the textbook `cos(latitude°)` scaling. It is kept this way so that
/// results match existing State Plane data computed with the same expression.
/// Use [`meters_per_longitude_degree_at`] when the geodetically meaningful
/// value is wanted instead.
///
/// No range checks are made. `NaN` and infinities propagate.
///
/// # Usage
///
/// ```
/// use stateplane::degrees::meters_per_longitude_degree;
///
/// let meters = meters_per_longitude_degree(0.0);
/// assert!((meters - 111_194.926_644_558_73).abs() < 1e-6);
///
/// assert!(meters_per_longitude_degree(f64::NAN).is_nan());
/// ```
pub fn meters_per_longitude_degree(longitude: f64) -> f64 {
    METERS_PER_DEGREE * longitude.cos()
}

/// Returns the number of meters per degree of latitude.
///
/// On a sphere this does not depend on where you are, so `latitude` is
/// accepted only to mirror [`meters_per_longitude_degree`] and is ignored.
///
/// # Usage
///
/// ```
/// use stateplane::degrees::meters_per_latitude_degree;
///
/// assert_eq!(meters_per_latitude_degree(-90.0), meters_per_latitude_degree(45.0));
/// ```
pub fn meters_per_latitude_degree(_latitude: f64) -> f64 {
    METERS_PER_DEGREE
}

/// Returns the number of meters per degree of longitude at `latitude`
/// (decimal degrees) on the spherical Earth.
///
/// ```
/// use stateplane::degrees::meters_per_longitude_degree_at;
///
/// assert!(meters_per_longitude_degree_at(90.0).abs() < 1e-9);
/// ```
pub fn meters_per_longitude_degree_at(latitude: f64) -> f64 {
    METERS_PER_DEGREE * latitude.to_radians().cos()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::{EARTH_RADIUS_KILOMETERS, KILOMETERS_TO_METERS};

    fn inline_longitude(longitude: f64) -> f64 {
        ((2.0 * PI) / 360.0) * EARTH_RADIUS_KILOMETERS * KILOMETERS_TO_METERS * longitude.cos()
    }

    #[test]
    fn longitude_matches_inline_expression() {
        for longitude in [-180.0, -90.0, -60.0, -0.5, 0.0, 0.5, 1.0, 45.0, 60.0, 90.0, 179.99, 1e6] {
            assert_eq!(
                meters_per_longitude_degree(longitude).to_bits(),
                inline_longitude(longitude).to_bits(),
                "longitude {longitude}"
            );
        }
    }

    #[test]
    fn longitude_at_equator() {
        assert_relative_eq!(meters_per_longitude_degree(0.0), 111_194.926_644_558_73, max_relative = 1e-12);
    }

    #[test]
    fn longitude_uses_raw_cosine() {
        // cos(60 rad) is negative
        assert_relative_eq!(meters_per_longitude_degree(60.0), -105_903.491_492_588_86, max_relative = 1e-6);
        assert_relative_eq!(meters_per_longitude_degree(90.0), -49_823.512_876_845_24, max_relative = 1e-6);
    }

    #[test]
    fn longitude_is_symmetric() {
        assert_eq!(meters_per_longitude_degree(-73.5), meters_per_longitude_degree(73.5));
    }

    #[test]
    fn longitude_propagates_non_finite() {
        assert!(meters_per_longitude_degree(f64::NAN).is_nan());
        assert!(meters_per_longitude_degree(f64::INFINITY).is_nan());
    }

    #[test]
    fn latitude_ignores_input() {
        let expected = meters_per_latitude_degree(0.0);
        for latitude in [-90.0, 45.0, 90.0, -1234.5, f64::NAN, f64::INFINITY] {
            assert_eq!(meters_per_latitude_degree(latitude).to_bits(), expected.to_bits());
        }
        assert_relative_eq!(expected, 111_194.926_644_558_73, max_relative = 1e-12);
    }

    #[test]
    fn latitude_matches_longitude_at_zero() {
        assert_eq!(meters_per_latitude_degree(12.0), meters_per_longitude_degree(0.0));
    }

    #[test]
    fn longitude_at_latitude() {
        assert_relative_eq!(meters_per_longitude_degree_at(0.0), METERS_PER_DEGREE);
        assert_relative_eq!(meters_per_longitude_degree_at(60.0), 55_597.463_322_279_38, max_relative = 1e-9);
        assert_relative_eq!(meters_per_longitude_degree_at(-60.0), meters_per_longitude_degree_at(60.0));
    }
}
