//! Hemisphere letters, which carry the sign of a coordinate in the HD, HDM and HDMS notations.

use crate::parse;
use derive_try_from_primitive::TryFromPrimitive;
use nom::{character::complete::one_of, combinator::map_res, error::context};
use std::{convert::TryFrom, fmt};

#[derive(Debug, Clone, Copy, TryFromPrimitive, PartialEq, Eq)]
#[repr(u8)]
pub enum Hemisphere {
    North = 0x4e, // 'N'
    South = 0x53, // 'S'
    East = 0x45,  // 'E'
    West = 0x57,  // 'W'
}

impl Hemisphere {
    /// Parse one of `N` or `S`, in either case.
    pub fn parse_latitude(i: parse::Input) -> parse::Result<Self> {
        context("latitude hemisphere", map_res(one_of("NnSs"), Self::from_letter))(i)
    }

    /// Parse one of `E` or `W`, in either case.
    pub fn parse_longitude(i: parse::Input) -> parse::Result<Self> {
        context("longitude hemisphere", map_res(one_of("EeWw"), Self::from_letter))(i)
    }

    fn from_letter(c: char) -> Result<Self, char> {
        u8::try_from(c)
            .ok()
            .and_then(|x| Self::try_from(x.to_ascii_uppercase()).ok())
            .ok_or(c)
    }

    /// The letter used to write this hemisphere.
    pub fn letter(&self) -> char {
        *self as u8 as char
    }

    /// Apply the sign of the hemisphere to a (non-negative) magnitude in degrees. Southern and
    /// western coordinates are negative.
    pub fn apply(&self, magnitude: f64) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => magnitude,
            Hemisphere::South | Hemisphere::West => -magnitude,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
