use super::coordinate::decimal;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::space0;
use nom::combinator::{all_consuming, map, opt, value};
use nom::sequence::{pair, preceded, tuple};

const FEET_PER_FLIGHT_LEVEL: f64 = 100.0;

/// Normalize an `AL`/`AH` altitude limit to feet
///
/// Accepted shapes:
/// - `SFC` or `GND`: 0 ft
/// - `FLnnn` (optionally `FL nnn`): `nnn × 100` ft
/// - a number with an optional `ft`/`ALT` unit and an optional datum word
///   (`MSL`, `AMSL`, `AGL`, `ASFC`), e.g. `3500ft`, `2000 ft AMSL`
///
/// Returns `None` for any other shape.
pub fn parse_altitude(text: &str) -> Option<f64> {
    all_consuming(altitude)(text.trim())
        .ok()
        .map(|(_, feet)| feet)
}

fn altitude(input: &str) -> IResult<&str, f64> {
    alt((surface, flight_level, feet))(input)
}

fn surface(input: &str) -> IResult<&str, f64> {
    value(0.0, alt((tag("SFC"), tag("GND"))))(input)
}

fn flight_level(input: &str) -> IResult<&str, f64> {
    map(preceded(pair(tag("FL"), space0), decimal), |level| {
        level * FEET_PER_FLIGHT_LEVEL
    })(input)
}

fn feet(input: &str) -> IResult<&str, f64> {
    let (input, (feet, _, _, _, _)) =
        tuple((decimal, space0, opt(unit), space0, opt(datum)))(input)?;

    Ok((input, feet))
}

fn unit(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("ft"), tag("ALT")))(input)
}

fn datum(input: &str) -> IResult<&str, &str> {
    alt((tag("AMSL"), tag("MSL"), tag("AGL"), tag("ASFC")))(input)
}
