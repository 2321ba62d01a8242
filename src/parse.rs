//! Token parsers shared by every coordinate notation.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map_res, opt, recognize, value},
    error::{context, VerboseError, VerboseErrorKind},
    sequence::{delimited, pair},
    Offset,
};

pub type Input<'a> = &'a str;
pub type Result<'a, O> = nom::IResult<Input<'a>, O, VerboseError<Input<'a>>>;

/// Match any amount of ASCII whitespace (space, tab, line feed, form feed or carriage return).
pub fn whitespace0(i: Input) -> Result<Input> {
    take_while(|c: char| c.is_ascii_whitespace())(i)
}

/// Match at least one ASCII whitespace character.
pub fn whitespace1(i: Input) -> Result<Input> {
    take_while1(|c: char| c.is_ascii_whitespace())(i)
}

/// Recognize the digits of an unsigned decimal number: either `12`, `12.`, `12.5` or `.5`.
fn decimal_digits(i: Input) -> Result<Input> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(i)
}

/// Parse a decimal number with an optional leading sign.
pub fn decimal(i: Input) -> Result<f64> {
    let parser = map_res(
        recognize(pair(opt(one_of("+-")), decimal_digits)),
        str::parse::<f64>,
    );
    context("decimal number", parser)(i)
}

/// Parse a decimal number that doesn't carry a sign.
pub fn unsigned_decimal(i: Input) -> Result<f64> {
    context(
        "unsigned decimal number",
        map_res(decimal_digits, str::parse::<f64>),
    )(i)
}

/// Parse a run of digits as a whole number. The value is returned as an `f64` since it is only
/// ever used to compose a decimal coordinate.
pub fn integer(i: Input) -> Result<f64> {
    context("integer", map_res(digit1, str::parse::<f64>))(i)
}

/// Match the separator between the latitude and the longitude part of a coordinate: a single
/// `,`, `:` or `;` with optional whitespace around it, or just whitespace.
pub fn separator(i: Input) -> Result<()> {
    let punctuation = value((), delimited(whitespace0, one_of(",:;"), whitespace0));
    let whitespace = value((), whitespace1);
    context("separator", alt((punctuation, whitespace)))(i)
}

/// Run `inner` with any amount of whitespace allowed on either side.
pub fn padded<'a, O, F>(inner: F) -> impl FnMut(Input<'a>) -> Result<'a, O>
where
    F: FnMut(Input<'a>) -> Result<'a, O>,
{
    delimited(whitespace0, inner, whitespace0)
}

/// Produce a one-line description of a parse failure, listing the innermost failure first and
/// walking out through the contexts that were active at the time, e.g.
///
/// ```text
/// separator at column 5 => Alt at column 5
/// ```
pub fn pretty_error_message(input: Input, e: nom::Err<VerboseError<Input>>) -> String {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => e
            .errors
            .iter()
            .rev()
            .map(|(rest, kind)| {
                let column = input.offset(rest) + 1;
                match kind {
                    VerboseErrorKind::Context(ctx) => format!("{} at column {}", ctx, column),
                    VerboseErrorKind::Char(c) => format!("expected {:?} at column {}", c, column),
                    VerboseErrorKind::Nom(kind) => format!("{:?} at column {}", kind, column),
                }
            })
            .collect::<Vec<_>>()
            .join(" => "),
        nom::Err::Incomplete(_) => "unexpected end of input".to_string(),
    }
}
