use crate::{error::Result, gps};
use serde::Serialize;
use std::fmt;

/// A latitude/longitude pair in signed decimal degrees.
///
/// A `Coordinate` can only be created through [`Coordinate::new`], so the latitude is always
/// within [-90, 90] and the longitude within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let latitude = gps::validate_latitude(latitude)?;
        let longitude = gps::validate_longitude(longitude)?;
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.latitude, c.longitude)
    }
}

/// Formats the coordinate in D notation, e.g. `40.76, -73.984`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod test {
    use super::Coordinate;
    use crate::gps::Axis;

    #[test]
    fn test_new_coordinate() {
        let c = Coordinate::new(40.76, -73.984).unwrap();
        assert_eq!(c.latitude(), 40.76);
        assert_eq!(c.longitude(), -73.984);
        assert_eq!(<(f64, f64)>::from(c), (40.76, -73.984));

        // Bounds are inclusive
        assert!(Coordinate::new(90., 180.).is_ok());
        assert!(Coordinate::new(-90., -180.).is_ok());

        let check_range_error = |lat: f64, lng: f64, axis: Axis| match Coordinate::new(lat, lng) {
            Err(crate::Error::RangeError { axis: a, .. }) => assert_eq!(a, axis),
            r => panic!("Coordinate::new({}, {}) == {:?}", lat, lng, r),
        };
        check_range_error(142., 23.123, Axis::Latitude);
        check_range_error(42., -223.123, Axis::Longitude);
        check_range_error(f64::NAN, 0., Axis::Latitude);
        // Latitude is checked first
        check_range_error(-91., 181., Axis::Latitude);
    }

    #[test]
    fn test_display() {
        let c = Coordinate::new(42., 23.123).unwrap();
        assert_eq!(c.to_string(), "42, 23.123");
        let c = Coordinate::new(-0.5, 0.0000001).unwrap();
        assert_eq!(c.to_string(), "-0.5, 0.0000001");
    }
}
