//! Grammars for the four supported coordinate notations.
//!
//! | Notation | Example                      |
//! |----------|------------------------------|
//! | D        | `40.76, -73.984`             |
//! | HD       | `N 40.76 W 73.984`           |
//! | HDM      | `N 40 45.600 W 73 59.040`    |
//! | HDMS     | `N 40 45 36.0 W 73 59 02.4`  |
//!
//! The latitude comes first and is separated from the longitude by whitespace, or by a `,`, `:`
//! or `;`. Leading and trailing whitespace is ignored, but anything else outside of the pattern
//! causes the parse to fail.

use crate::{
    error::{Error, Result},
    gps,
    hemisphere::Hemisphere,
    parse::{self},
    Coordinate,
};
use nom::{
    combinator::{all_consuming, verify},
    error::context,
    sequence::{preceded, separated_pair, tuple},
};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Plain signed decimal degrees.
    Decimal,
    /// Hemisphere letter followed by unsigned decimal degrees.
    HemisphereDecimal,
    /// Hemisphere letter, whole degrees and decimal minutes.
    HemisphereDegreesMinutes,
    /// Hemisphere letter, whole degrees, whole minutes and decimal seconds.
    HemisphereDegreesMinutesSeconds,
}

/// Latitude and longitude as read from the input, before any range checks.
type RawPair = (f64, f64);

impl Notation {
    /// Every notation, in the order in which [`Notation::detect`] tries them.
    pub const ALL: [Notation; 4] = [
        Notation::Decimal,
        Notation::HemisphereDecimal,
        Notation::HemisphereDegreesMinutes,
        Notation::HemisphereDegreesMinutesSeconds,
    ];

    /// Short name of the notation (`D`, `HD`, `HDM` or `HDMS`).
    pub fn name(&self) -> &'static str {
        match self {
            Notation::Decimal => "D",
            Notation::HemisphereDecimal => "HD",
            Notation::HemisphereDegreesMinutes => "HDM",
            Notation::HemisphereDegreesMinutesSeconds => "HDMS",
        }
    }

    fn grammar(&self) -> fn(parse::Input) -> parse::Result<RawPair> {
        match self {
            Notation::Decimal => decimal_pair,
            Notation::HemisphereDecimal => hemisphere_decimal_pair,
            Notation::HemisphereDegreesMinutes => hemisphere_degrees_minutes_pair,
            Notation::HemisphereDegreesMinutesSeconds => hemisphere_degrees_minutes_seconds_pair,
        }
    }

    /// Match the whole of `s` against the grammar of this notation, returning the latitude and
    /// longitude without checking their range.
    fn read(&self, s: &str) -> Result<RawPair> {
        let mut parser = context(self.name(), all_consuming(parse::padded(self.grammar())));
        match parser(s) {
            Ok((_, pair)) => Ok(pair),
            Err(e) => Err(Error::grammar_mismatch(
                self.name(),
                s,
                parse::pretty_error_message(s, e),
            )),
        }
    }

    /// Parse `s` as a coordinate written in this notation.
    pub fn parse(&self, s: &str) -> Result<Coordinate> {
        let (latitude, longitude) = self.read(s)?;
        Coordinate::new(latitude, longitude)
    }

    /// Find the notation whose grammar matches `s`, if any. The range of the latitude and
    /// longitude is not considered.
    pub fn detect(s: &str) -> Option<Notation> {
        Notation::ALL.iter().copied().find(|n| n.read(s).is_ok())
    }

    /// Detect the notation of `s` and parse it, returning both.
    pub fn parse_any(s: &str) -> Result<(Notation, Coordinate)> {
        match Notation::detect(s) {
            Some(notation) => {
                log::debug!("Detected {} notation for {:?}", notation, s);
                Ok((notation, notation.parse(s)?))
            }
            None => {
                log::debug!("No notation matches {:?}", s);
                Err(Error::grammar_mismatch(
                    "D, HD, HDM or HDMS",
                    s,
                    "no notation matches".to_string(),
                ))
            }
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Notation::ALL
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownNotation(s.to_string()))
    }
}

/// Match a latitude and a longitude around a separator.
fn pair<'a, F, G>(
    latitude: F,
    longitude: G,
) -> impl FnMut(parse::Input<'a>) -> parse::Result<'a, RawPair>
where
    F: FnMut(parse::Input<'a>) -> parse::Result<'a, f64>,
    G: FnMut(parse::Input<'a>) -> parse::Result<'a, f64>,
{
    separated_pair(
        context("latitude", latitude),
        parse::separator,
        context("longitude", longitude),
    )
}

/// Match a hemisphere letter followed by a magnitude, and apply the sign of the hemisphere to the
/// magnitude.
fn signed<'a, H, M>(
    mut hemisphere: H,
    mut magnitude: M,
) -> impl FnMut(parse::Input<'a>) -> parse::Result<'a, f64>
where
    H: FnMut(parse::Input<'a>) -> parse::Result<'a, Hemisphere>,
    M: FnMut(parse::Input<'a>) -> parse::Result<'a, f64>,
{
    move |i| {
        let (i, hemi) = hemisphere(i)?;
        let (i, _) = parse::whitespace0(i)?;
        let (i, x) = magnitude(i)?;
        Ok((i, hemi.apply(x)))
    }
}

/// Minutes and seconds are in [0, 60).
fn sexagesimal<'a, F>(
    name: &'static str,
    parser: F,
) -> impl FnMut(parse::Input<'a>) -> parse::Result<'a, f64>
where
    F: FnMut(parse::Input<'a>) -> parse::Result<'a, f64>,
{
    context(name, verify(parser, |&x: &f64| x < 60.))
}

fn degrees_minutes(i: parse::Input) -> parse::Result<f64> {
    let (i, (degrees, minutes)) = tuple((
        context("degrees", parse::integer),
        preceded(parse::whitespace1, sexagesimal("minutes", parse::unsigned_decimal)),
    ))(i)?;
    Ok((i, gps::degrees_to_decimal(degrees, minutes, 0.)))
}

fn degrees_minutes_seconds(i: parse::Input) -> parse::Result<f64> {
    let (i, (degrees, minutes, seconds)) = tuple((
        context("degrees", parse::integer),
        preceded(parse::whitespace1, sexagesimal("minutes", parse::integer)),
        preceded(parse::whitespace1, sexagesimal("seconds", parse::unsigned_decimal)),
    ))(i)?;
    Ok((i, gps::degrees_to_decimal(degrees, minutes, seconds)))
}

fn decimal_pair(i: parse::Input) -> parse::Result<RawPair> {
    pair(parse::decimal, parse::decimal)(i)
}

fn hemisphere_decimal_pair(i: parse::Input) -> parse::Result<RawPair> {
    pair(
        signed(Hemisphere::parse_latitude, parse::unsigned_decimal),
        signed(Hemisphere::parse_longitude, parse::unsigned_decimal),
    )(i)
}

fn hemisphere_degrees_minutes_pair(i: parse::Input) -> parse::Result<RawPair> {
    pair(
        signed(Hemisphere::parse_latitude, degrees_minutes),
        signed(Hemisphere::parse_longitude, degrees_minutes),
    )(i)
}

fn hemisphere_degrees_minutes_seconds_pair(i: parse::Input) -> parse::Result<RawPair> {
    pair(
        signed(Hemisphere::parse_latitude, degrees_minutes_seconds),
        signed(Hemisphere::parse_longitude, degrees_minutes_seconds),
    )(i)
}

/// Parse a coordinate in D notation, e.g. `42.0, 23.123`.
pub fn parse_d(s: &str) -> Result<Coordinate> {
    Notation::Decimal.parse(s)
}

/// Parse a coordinate in HD notation, e.g. `N 40.76 W 73.984`.
pub fn parse_hd(s: &str) -> Result<Coordinate> {
    Notation::HemisphereDecimal.parse(s)
}

/// Parse a coordinate in HDM notation, e.g. `N 40 45.600 W 73 59.040`.
pub fn parse_hdm(s: &str) -> Result<Coordinate> {
    Notation::HemisphereDegreesMinutes.parse(s)
}

/// Parse a coordinate in HDMS notation, e.g. `N 40 45 36.0 W 73 59 02.4`.
pub fn parse_hdms(s: &str) -> Result<Coordinate> {
    Notation::HemisphereDegreesMinutesSeconds.parse(s)
}

/// Parse a coordinate written in any of the supported notations.
pub fn parse(s: &str) -> Result<Coordinate> {
    Notation::parse_any(s).map(|(_, coord)| coord)
}
