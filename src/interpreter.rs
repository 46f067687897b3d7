//! Command interpretation and block accumulation
//!
//! An [`Interpreter`] owns the [`InterpreterContext`] that survives from one
//! block to the next (reference center and arc direction). Each block gets a
//! fresh [`BlockAccumulator`] that is consumed into an [`AirspacePolygon`]
//! once the block ends.

use crate::error::{Error, Result, Warning};
use crate::geo::{METERS_PER_NM, destination_point, great_circle_distance, initial_heading};
use crate::lexer::{Command, Line, parse_altitude, parse_coordinate};
use crate::types::{AirspacePolygon, LatLng};
use log::{debug, trace};

/// Angular step between two consecutive arc points, in degrees
pub const ARC_STEP_DEG: f64 = 1.0;

/// Number of boundary points emitted for a `DC` circle
pub const CIRCLE_POINTS: u16 = 360;

const MAX_ARC_STEPS: usize = 360;

/// How malformed coordinate strings in `DP`, `DB` and `V` are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinatePolicy {
    /// Drop the command, record a [`Warning`] and continue with the block
    #[default]
    Skip,
    /// Fail the current block with [`Error::InvalidCoordinate`]
    ///
    /// The rest of the block is still interpreted so that `V` assignments
    /// reach the following blocks.
    Fail,
}

/// Direction in which arcs are walked from their start to their end heading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArcDirection {
    /// Increasing headings (`V D=+`)
    #[default]
    Clockwise,
    /// Decreasing headings (any other `V D=` value)
    CounterClockwise,
}

impl ArcDirection {
    /// `+1.0` for clockwise, `-1.0` for counter-clockwise
    pub fn sign(self) -> f64 {
        match self {
            ArcDirection::Clockwise => 1.0,
            ArcDirection::CounterClockwise => -1.0,
        }
    }
}

/// Interpreter state that persists across blocks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterpreterContext {
    /// Last point assigned through a non-`D` variable
    pub center: Option<LatLng>,
    pub direction: ArcDirection,
}

/// State collected while interpreting a single block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockAccumulator {
    pub points: Vec<LatLng>,
    pub name: Option<String>,
    pub class: Option<String>,
    pub base_altitude_ft: Option<f64>,
    pub ceiling_altitude_ft: Option<f64>,
}

impl BlockAccumulator {
    /// Turn the accumulated block into a polygon
    ///
    /// Returns `None` if the block's class is one of `excluded_classes`.
    pub fn finish(self, excluded_classes: &[String]) -> Option<AirspacePolygon> {
        let excluded = self
            .class
            .as_deref()
            .is_some_and(|class| excluded_classes.iter().any(|excluded| excluded == class));

        if excluded {
            trace!("Excluding airspace {:?} of class {:?}", self.name, self.class);
            return None;
        }

        trace!("Finished airspace {:?} with {} points", self.name, self.points.len());

        Some(AirspacePolygon {
            coordinates: self.points,
            base_altitude_ft: self.base_altitude_ft.unwrap_or(0.0),
            ceiling_altitude_ft: self.ceiling_altitude_ft,
            name: self.name,
            airspace_class: self.class,
        })
    }
}

/// Dispatches tokenized lines against the persistent context
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    context: InterpreterContext,
    coordinate_policy: CoordinatePolicy,
}

impl Interpreter {
    pub fn new(coordinate_policy: CoordinatePolicy) -> Self {
        Self {
            context: InterpreterContext::default(),
            coordinate_policy,
        }
    }

    /// Get the context carried between blocks
    pub fn context(&self) -> &InterpreterContext {
        &self.context
    }

    /// Interpret one line of the current block
    ///
    /// Recoverable problems are pushed to `warnings`. An error is only
    /// returned for malformed coordinates under [`CoordinatePolicy::Fail`].
    pub fn apply(
        &mut self,
        block: &mut BlockAccumulator,
        line: &Line<'_>,
        warnings: &mut Vec<Warning>,
    ) -> Result<()> {
        match Command::parse(line.text) {
            Command::Name(name) => block.name = Some(name.to_string()),
            Command::Class(class) => {
                let class = class.split_whitespace().next().unwrap_or(class);
                block.class = Some(class.to_string());
            }
            Command::Type(_) | Command::Comment(_) => {}
            Command::Floor(text) => match parse_altitude(text) {
                Some(feet) => block.base_altitude_ft = Some(feet),
                None => skip(warnings, Warning::InvalidAltitude {
                    line: line.number,
                    text: text.to_string(),
                }),
            },
            Command::Ceiling(text) => match parse_altitude(text) {
                Some(feet) => block.ceiling_altitude_ft = Some(feet),
                None => skip(warnings, Warning::InvalidAltitude {
                    line: line.number,
                    text: text.to_string(),
                }),
            },
            Command::Circle(args) => self.circle(block, line, args, warnings),
            Command::Arc(args) => self.arc(block, line, args, warnings),
            Command::Point(args) => {
                if let Some(point) = self.coordinate(line, args, warnings)? {
                    block.points.push(point);
                }
            }
            Command::ArcBetween(args) => self.arc_between(block, line, args, warnings)?,
            Command::Variable(args) => self.variable(line, args, warnings)?,
            Command::Unrecognized(text) => skip(warnings, Warning::UnrecognizedLine {
                line: line.number,
                text: text.to_string(),
            }),
        }

        Ok(())
    }

    fn circle(
        &self,
        block: &mut BlockAccumulator,
        line: &Line<'_>,
        args: &str,
        warnings: &mut Vec<Warning>,
    ) {
        let Some(center) = self.center(line, warnings) else {
            return;
        };
        let Some(radius_nm) = parse_number(args) else {
            return skip(warnings, invalid_argument(line, args));
        };

        let radius = radius_nm * METERS_PER_NM;
        block.points.extend(
            (0..CIRCLE_POINTS).map(|heading| destination_point(center, radius, f64::from(heading))),
        );
    }

    fn arc(
        &self,
        block: &mut BlockAccumulator,
        line: &Line<'_>,
        args: &str,
        warnings: &mut Vec<Warning>,
    ) {
        let Some(center) = self.center(line, warnings) else {
            return;
        };

        let values: Option<Vec<f64>> = args.split(',').map(parse_number).collect();
        let Some([radius_nm, from_deg, to_deg]) = values.as_deref() else {
            return skip(warnings, invalid_argument(line, args));
        };

        block.points.extend(walk_arc(
            center,
            radius_nm * METERS_PER_NM,
            *from_deg,
            *to_deg,
            self.context.direction,
        ));
    }

    fn arc_between(
        &self,
        block: &mut BlockAccumulator,
        line: &Line<'_>,
        args: &str,
        warnings: &mut Vec<Warning>,
    ) -> Result<()> {
        let Some(center) = self.center(line, warnings) else {
            return Ok(());
        };
        let Some((first, second)) = args.split_once(',') else {
            skip(warnings, invalid_argument(line, args));
            return Ok(());
        };

        let Some(start) = self.coordinate(line, first, warnings)? else {
            return Ok(());
        };
        let Some(end) = self.coordinate(line, second, warnings)? else {
            return Ok(());
        };

        let from_deg = initial_heading(center, start).rem_euclid(360.0);
        let to_deg = initial_heading(center, end).rem_euclid(360.0);
        let radius = great_circle_distance(center, start);

        block.points.extend(walk_arc(
            center,
            radius,
            from_deg,
            to_deg,
            self.context.direction,
        ));
        Ok(())
    }

    fn variable(&mut self, line: &Line<'_>, args: &str, warnings: &mut Vec<Warning>) -> Result<()> {
        let Some((name, value)) = args.split_once('=') else {
            skip(warnings, invalid_argument(line, args));
            return Ok(());
        };

        if name.trim() == "D" {
            self.context.direction = match value.trim() {
                "+" => ArcDirection::Clockwise,
                _ => ArcDirection::CounterClockwise,
            };
        } else if let Some(center) = self.coordinate(line, value, warnings)? {
            self.context.center = Some(center);
        }

        Ok(())
    }

    fn center(&self, line: &Line<'_>, warnings: &mut Vec<Warning>) -> Option<LatLng> {
        if self.context.center.is_none() {
            skip(warnings, Warning::MissingCenter { line: line.number });
        }
        self.context.center
    }

    fn coordinate(
        &self,
        line: &Line<'_>,
        text: &str,
        warnings: &mut Vec<Warning>,
    ) -> Result<Option<LatLng>> {
        let text = text.trim();
        match parse_coordinate(text) {
            Ok(point) => Ok(Some(point)),
            Err(_) if self.coordinate_policy == CoordinatePolicy::Fail => {
                Err(Error::InvalidCoordinate {
                    line: line.number,
                    text: text.to_string(),
                })
            }
            Err(_) => {
                skip(warnings, Warning::InvalidCoordinate {
                    line: line.number,
                    text: text.to_string(),
                });
                Ok(None)
            }
        }
    }
}

/// Walk an arc around `center` from `from_deg` towards `to_deg`
///
/// Emits a point every [`ARC_STEP_DEG`] in the given direction, starting at
/// `from_deg`, and stops once the next heading has reached `to_deg` or passed
/// it by less than one step, measured along the walking direction in
/// `[0, 360)`. At least one point is always emitted and never more than 360.
pub fn walk_arc(
    center: LatLng,
    radius_m: f64,
    from_deg: f64,
    to_deg: f64,
    direction: ArcDirection,
) -> Vec<LatLng> {
    let sign = direction.sign();
    let mut points = Vec::new();
    let mut heading = from_deg;

    loop {
        points.push(destination_point(center, radius_m, heading));
        heading += sign * ARC_STEP_DEG;

        let overshoot = (sign * (heading - to_deg)).rem_euclid(360.0);
        if overshoot < ARC_STEP_DEG || points.len() >= MAX_ARC_STEPS {
            break;
        }
    }

    points
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn invalid_argument(line: &Line<'_>, args: &str) -> Warning {
    Warning::InvalidArgument {
        line: line.number,
        text: args.to_string(),
    }
}

fn skip(warnings: &mut Vec<Warning>, warning: Warning) {
    debug!("Skipping command: {warning:?}");
    warnings.push(warning);
}
