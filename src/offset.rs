use std::fmt::Display;

use log::trace;

use crate::{
    degrees::{meters_per_latitude_degree, meters_per_longitude_degree},
    units::Units,
};

/// Relative easting/northing within a State Plane zone.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarOffset {
    pub(crate) easting: f64,
    pub(crate) northing: f64,
    pub(crate) units: Units,
}

impl PlanarOffset {
    pub fn new(easting: f64, northing: f64, units: Units) -> PlanarOffset {
        Self {
            easting,
            northing,
            units,
        }
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn easting_meters(&self) -> f64 {
        self.units.to_meters(self.easting)
    }

    pub fn northing_meters(&self) -> f64 {
        self.units.to_meters(self.northing)
    }

    /// Re-expresses the offset in `units`. Going through meters, so
    /// feet → feet is exact but feet → meters → feet is not.
    ///
    /// # Usage
    ///
    /// ```
    /// use stateplane::{PlanarOffset, Units};
    ///
    /// let offset = PlanarOffset::new(1000.0, 2000.0, Units::Feet);
    /// let meters = offset.to_units(Units::Meters);
    ///
    /// assert_eq!(meters.easting(), 304.8);
    /// assert_eq!(meters.northing(), 609.6);
    /// ```
    pub fn to_units(&self, units: Units) -> PlanarOffset {
        if units == self.units {
            return *self;
        }

        PlanarOffset::new(
            units.from_meters(self.easting_meters()),
            units.from_meters(self.northing_meters()),
            units,
        )
    }

    /// Approximates how many degrees of latitude and longitude this offset
    /// spans, scaling by the meters-per-degree factors at `reference_longitude`.
    ///
    /// This is a flat-Earth delta estimate, not a projection. Where the
    /// longitude factor is zero or close to it the result is infinite or NaN.
    ///
    /// # Usage
    ///
    /// ```
    /// use stateplane::{PlanarOffset, Units};
    /// use stateplane::degrees::meters_per_latitude_degree;
    ///
    /// let offset = PlanarOffset::new(0.0, meters_per_latitude_degree(0.0), Units::Meters);
    /// let degrees = offset.to_degrees(0.0);
    ///
    /// assert_eq!(degrees.latitude(), 1.0);
    /// assert_eq!(degrees.longitude(), 0.0);
    /// ```
    pub fn to_degrees(&self, reference_longitude: f64) -> DegreeOffset {
        let latitude = self.northing_meters() / meters_per_latitude_degree(reference_longitude);
        let longitude = self.easting_meters() / meters_per_longitude_degree(reference_longitude);

        trace!("planar offset {self:?} at {reference_longitude} -> ({latitude}, {longitude})");

        DegreeOffset::new(latitude, longitude)
    }

    pub fn from_degrees(value: &DegreeOffset, reference_longitude: f64, units: Units) -> PlanarOffset {
        value.to_planar(reference_longitude, units)
    }
}

/// Approximate change in latitude/longitude, in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegreeOffset {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl DegreeOffset {
    pub fn new(latitude: f64, longitude: f64) -> DegreeOffset {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Inverse of [`PlanarOffset::to_degrees`]: scales the degree deltas back
    /// to an easting/northing in `units`.
    pub fn to_planar(&self, reference_longitude: f64, units: Units) -> PlanarOffset {
        let northing = self.latitude * meters_per_latitude_degree(reference_longitude);
        let easting = self.longitude * meters_per_longitude_degree(reference_longitude);

        trace!("degree offset {self:?} at {reference_longitude} -> ({easting} m, {northing} m)");

        PlanarOffset::new(units.from_meters(easting), units.from_meters(northing), units)
    }

    pub fn from_planar(value: &PlanarOffset, reference_longitude: f64) -> DegreeOffset {
        value.to_degrees(reference_longitude)
    }
}

impl Display for DegreeOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
