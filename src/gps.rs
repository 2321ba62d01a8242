//! Various utilities for dealing with latitudes and longitudes.

use crate::error::{Error, Result};
use std::fmt;

/// Convert a coordinate magnitude from degrees/minutes/seconds to decimal degrees.
pub fn degrees_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60. + seconds / 3600.
}

/// One of the two axes of a geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Inclusive lower and upper bounds (in degrees) of a value along this axis.
    pub fn bounds(&self) -> (f64, f64) {
        match self {
            Axis::Latitude => (-90., 90.),
            Axis::Longitude => (-180., 180.),
        }
    }

    /// Check that `value` lies within the bounds of the axis. NaN is always rejected.
    pub fn validate(&self, value: f64) -> Result<f64> {
        let (min, max) = self.bounds();
        if value >= min && value <= max {
            Ok(value)
        } else {
            Err(Error::RangeError { axis: *self, value })
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

pub fn validate_latitude(value: f64) -> Result<f64> {
    Axis::Latitude.validate(value)
}

pub fn validate_longitude(value: f64) -> Result<f64> {
    Axis::Longitude.validate(value)
}
