use crate::error::{Error, Result};
use crate::types::LatLng;
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit1, one_of, space0};
use nom::combinator::{all_consuming, map_res, opt, recognize, value};
use nom::sequence::{pair, tuple};

/// Parse a `DD:MM:SS[.f] N|S DDD:MM:SS[.f] E|W` coordinate string
///
/// The seconds separator may be a colon or a period and whitespace between
/// the parts is optional. Anything else fails with
/// [`Error::MalformedCoordinate`].
pub fn parse_coordinate(text: &str) -> Result<LatLng> {
    let (_, (lat, lng)) = all_consuming(coordinate)(text)
        .map_err(|_| Error::MalformedCoordinate(text.to_string()))?;

    LatLng::new(lat, lng)
}

fn coordinate(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, (_, lat, _, lat_sign, _, lng, _, lng_sign, _)) = tuple((
        space0,
        dms,
        space0,
        latitude_sign,
        space0,
        dms,
        space0,
        longitude_sign,
        space0,
    ))(input)?;

    Ok((input, (lat * lat_sign, lng * lng_sign)))
}

/// Degrees, minutes and seconds folded into decimal degrees
fn dms(input: &str) -> IResult<&str, f64> {
    let (input, (degrees, _, minutes, _, seconds)) =
        tuple((integer, char(':'), integer, one_of(":."), decimal))(input)?;

    Ok((input, degrees + minutes / 60.0 + seconds / 3600.0))
}

fn latitude_sign(input: &str) -> IResult<&str, f64> {
    hemisphere(input, 'N', 'S')
}

fn longitude_sign(input: &str) -> IResult<&str, f64> {
    hemisphere(input, 'E', 'W')
}

fn hemisphere(input: &str, positive: char, negative: char) -> IResult<&str, f64> {
    alt((value(1.0, char(positive)), value(-1.0, char(negative))))(input)
}

fn integer(input: &str) -> IResult<&str, f64> {
    map_res(digit1, str::parse::<f64>)(input)
}

/// Unsigned number with an optional fractional part
pub(super) fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        str::parse::<f64>,
    )(input)
}
