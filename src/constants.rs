//! Unit conversion factors shared by every State Plane calculation.
//!
//! These values are fixed. Anything that converts between feet, meters and
//! kilometers in this crate goes through them, so results stay identical to
//! other systems built on the same factors.

use std::f64::consts::PI;

/// Kilometers to meters.
pub const KILOMETERS_TO_METERS: f64 = 1000.0;
/// Meters to kilometers.
pub const METERS_TO_KILOMETERS: f64 = 0.001;
/// Meters to (international) feet. Not the exact reciprocal of [`FEET_TO_METERS`].
pub const METERS_TO_FEET: f64 = 3.28084;
/// Feet to meters.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Approximate radius of the Earth in kilometers, treating it as a sphere.
pub const EARTH_RADIUS_KILOMETERS: f64 = 6371.0;

/// Tag for source values measured in feet.
pub const UNITS_FEET: &str = "feet";
/// Tag for source values measured in meters.
pub const UNITS_METERS: &str = "meters";

/// Length of one degree of arc on the sphere, in meters.
///
/// Evaluated left to right as `((2π)/360) × radius_km × 1000` so that
/// multiplying it by a cosine gives the same bits as writing the whole
/// expression inline.
pub const METERS_PER_DEGREE: f64 =
    ((2.0 * PI) / 360.0) * EARTH_RADIUS_KILOMETERS * KILOMETERS_TO_METERS;
