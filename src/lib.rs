#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::wrong_self_convention
)]

use thiserror::Error;

pub mod constants;
pub mod degrees;
pub mod offset;
pub mod units;

pub use degrees::{meters_per_latitude_degree, meters_per_longitude_degree};
pub use offset::{DegreeOffset, PlanarOffset};
pub use units::Units;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unit system is not valid: {0}")]
    InvalidUnits(String),
}

pub trait ParseUnits {
    fn parse_units(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses a unit tag into any [`ParseUnits`] type.
///
/// # Errors
///
/// Returns [`Error::InvalidUnits`] if `value` is not a recognised tag.
///
/// # Usage
///
/// ```
/// use stateplane::Units;
///
/// let units: Units = stateplane::from_str("feet").unwrap();
/// assert_eq!(units, Units::Feet);
///
/// assert!(stateplane::from_str::<_, Units>("furlongs").is_err());
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseUnits
{
    T::parse_units(value.as_ref())
}
