#![forbid(unsafe_code)]

//! Parse human-entered latitude/longitude strings into signed decimal degrees.
//!
//! ```
//! use coordsparser::{parse_d, parse_hdms};
//!
//! let c = parse_d("42.0, 23.123").unwrap();
//! assert_eq!((c.latitude(), c.longitude()), (42.0, 23.123));
//!
//! let c = parse_hdms("N 40 45 36.0 W 73 59 02.4").unwrap();
//! assert_eq!((c.latitude(), c.longitude()), (40.76, -73.984));
//! ```

mod coordinate;
pub mod error;
pub mod gps;
pub mod hemisphere;
pub mod notation;
pub mod parse;
pub mod version;

pub use coordinate::Coordinate;
pub use error::{Error, Result};
pub use notation::{parse, parse_d, parse_hd, parse_hdm, parse_hdms, Notation};

#[cfg(target_arch = "wasm32")]
pub mod wasm;
