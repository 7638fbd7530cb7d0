use std::{fmt::Display, str::FromStr};

use log::debug;

use crate::{
    constants::{
        FEET_TO_METERS, KILOMETERS_TO_METERS, METERS_TO_FEET, METERS_TO_KILOMETERS, UNITS_FEET,
        UNITS_METERS,
    },
    Error, ParseUnits,
};

/// Unit system that State Plane easting/northing values are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Units {
    Feet,
    Meters,
}

impl Units {
    /// Returns the tag for this unit system, either [`UNITS_FEET`] or
    /// [`UNITS_METERS`].
    ///
    /// # Example
    ///
    /// ```
    /// use stateplane::Units;
    ///
    /// assert_eq!(Units::Feet.as_str(), "feet");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Feet => UNITS_FEET,
            Units::Meters => UNITS_METERS,
        }
    }

    /// Converts `value`, given in these units, to meters.
    ///
    /// # Usage
    ///
    /// ```
    /// use stateplane::Units;
    ///
    /// assert_eq!(Units::Feet.to_meters(1000.0), 304.8);
    /// assert_eq!(Units::Meters.to_meters(1000.0), 1000.0);
    /// ```
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            Units::Feet => value * FEET_TO_METERS,
            Units::Meters => value,
        }
    }

    /// Converts `value` in meters to these units.
    ///
    /// [`METERS_TO_FEET`](crate::constants::METERS_TO_FEET) is not the exact
    /// reciprocal of [`FEET_TO_METERS`](crate::constants::FEET_TO_METERS), so
    /// a round trip through meters is only close to the original.
    pub fn from_meters(&self, value: f64) -> f64 {
        match self {
            Units::Feet => value * METERS_TO_FEET,
            Units::Meters => value,
        }
    }

    pub fn to_kilometers(&self, value: f64) -> f64 {
        self.to_meters(value) * METERS_TO_KILOMETERS
    }

    pub fn from_kilometers(&self, value: f64) -> f64 {
        self.from_meters(value * KILOMETERS_TO_METERS)
    }
}

impl ParseUnits for Units {
    /// Parses a unit tag. Case is ignored and surrounding whitespace trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnits`] if the value is neither `feet` nor `meters`.
    fn parse_units(value: &str) -> Result<Self, Error> {
        let tag = value.trim();

        if tag.eq_ignore_ascii_case(UNITS_FEET) {
            Ok(Units::Feet)
        } else if tag.eq_ignore_ascii_case(UNITS_METERS) {
            Ok(Units::Meters)
        } else {
            debug!("rejecting unknown unit tag {value:?}");
            Err(Error::InvalidUnits(format!(
                "Expected \"{UNITS_FEET}\" or \"{UNITS_METERS}\", got \"{value}\"."
            )))
        }
    }
}

impl FromStr for Units {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Units::parse_units(s)
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
