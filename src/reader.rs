//! High-level OpenAir reader with iterator-based API

use crate::error::{Result, Warning};
use crate::interpreter::{BlockAccumulator, CoordinatePolicy, Interpreter, InterpreterContext};
use crate::lexer::{Block, Blocks, blocks};
use crate::types::AirspacePolygon;
use crate::utils::decode_text;
use log::debug;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Airspace class excluded from the output unless configured otherwise
pub const DEFAULT_EXCLUDED_CLASS: &str = "G";

/// High-level OpenAir reader with iterator-based API
///
/// Interprets definition text into [`AirspacePolygon`]s:
/// - Blocks separated by `*` lines become one polygon each
/// - Circles and arcs are expanded into boundary points
/// - Altitudes are normalized to feet
///
/// # Example
///
/// ```
/// use openair_polygons::OpenAirReader;
///
/// let text = "AC R\nAN Test Zone\nV X=51:30:00 N 000:10:00 W\nDC 5\n";
/// let reader = OpenAirReader::new(text);
/// for result in reader.read_airspaces() {
///     let airspace = result?;
///     println!("{:?}: {} points", airspace.name, airspace.coordinates.len());
/// }
/// # Ok::<(), openair_polygons::Error>(())
/// ```
pub struct OpenAirReader<'a> {
    text: Cow<'a, str>,
    coordinate_policy: CoordinatePolicy,
    excluded_classes: Vec<String>,
}

impl OpenAirReader<'static> {
    /// Create a reader from a file path
    ///
    /// Reads the whole file immediately and decodes it with [`decode_text`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        let text = decode_text(&bytes).into_owned();
        Ok(Self::from_text(Cow::Owned(text)))
    }
}

impl<'a> OpenAirReader<'a> {
    /// Create a reader over definition text
    pub fn new(text: &'a str) -> Self {
        Self::from_text(Cow::Borrowed(text))
    }

    /// Create a reader over raw bytes
    ///
    /// UTF-8 is tried first, with a Windows-1252 fallback.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::from_text(decode_text(bytes))
    }

    fn from_text(text: Cow<'a, str>) -> Self {
        Self {
            text,
            coordinate_policy: CoordinatePolicy::default(),
            excluded_classes: vec![DEFAULT_EXCLUDED_CLASS.to_string()],
        }
    }

    /// Configure how malformed coordinate strings are handled
    ///
    /// Default is [`CoordinatePolicy::Skip`]. Returns `&mut self` to allow method chaining.
    pub fn with_coordinate_policy(&mut self, policy: CoordinatePolicy) -> &mut Self {
        self.coordinate_policy = policy;
        self
    }

    /// Replace the set of airspace classes dropped from the output
    ///
    /// Default is `["G"]`. Returns `&mut self` to allow method chaining.
    pub fn with_excluded_classes<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Get the decoded definition text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Create iterator over all airspaces in the text
    ///
    /// Every call starts from the beginning with a fresh interpreter context.
    /// Airspaces are only interpreted when `.next()` is called.
    pub fn read_airspaces(&self) -> AirspaceIterator<'_> {
        AirspaceIterator {
            blocks: blocks(&self.text),
            interpreter: Interpreter::new(self.coordinate_policy),
            excluded_classes: &self.excluded_classes,
            warnings: Vec::new(),
        }
    }
}

/// Iterator over airspaces in a definition text
///
/// Yields `Result<AirspacePolygon>` for each non-excluded block.
/// Created by calling `OpenAirReader::read_airspaces()`.
///
/// An `Err` only ever concerns a single block; iteration can continue with
/// the following blocks afterwards.
pub struct AirspaceIterator<'a> {
    blocks: Blocks<'a>,
    interpreter: Interpreter,
    excluded_classes: &'a [String],
    warnings: Vec<Warning>,
}

impl AirspaceIterator<'_> {
    /// Get warnings collected so far
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Get the interpreter context as left by the blocks read so far
    pub fn context(&self) -> &InterpreterContext {
        self.interpreter.context()
    }
}

impl Iterator for AirspaceIterator<'_> {
    type Item = Result<AirspacePolygon>;

    fn next(&mut self) -> Option<Self::Item> {
        for block in self.blocks.by_ref() {
            match read_block(
                &mut self.interpreter,
                &block,
                self.excluded_classes,
                &mut self.warnings,
            ) {
                Ok(Some(airspace)) => return Some(Ok(airspace)),
                Ok(None) => continue,
                Err(err) => return Some(Err(err)),
            }
        }

        None
    }
}

/// Interpret every line of a block and finalize it
///
/// A failing line does not stop the block: the remaining lines are still
/// applied so the interpreter context ends up the same as under
/// [`CoordinatePolicy::Skip`]. The first error is returned for the block.
fn read_block(
    interpreter: &mut Interpreter,
    block: &Block<'_>,
    excluded_classes: &[String],
    warnings: &mut Vec<Warning>,
) -> Result<Option<AirspacePolygon>> {
    let mut accumulator = BlockAccumulator::default();
    let mut first_error = None;
    for line in &block.lines {
        if let Err(err) = interpreter.apply(&mut accumulator, line, warnings) {
            debug!("Failed line {}: {err}", line.number);
            first_error.get_or_insert(err);
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(accumulator.finish(excluded_classes)),
    }
}

/// Interpret definition text into airspace polygons
///
/// Uses the default options: malformed coordinates are skipped and class `G`
/// airspaces are excluded. Polygons are returned in input order.
///
/// ```
/// let polygons = openair_polygons::parse("AC R\nAN Test Zone\nDP 51:30:00 N 000:10:00 W\n");
/// assert_eq!(polygons.len(), 1);
/// assert_eq!(polygons[0].name.as_deref(), Some("Test Zone"));
/// ```
pub fn parse(text: &str) -> Vec<AirspacePolygon> {
    OpenAirReader::new(text)
        .read_airspaces()
        .filter_map(|result| {
            result
                .inspect_err(|err| debug!("Dropping airspace: {err}"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::interpreter::ArcDirection;
    use claims::{assert_err, assert_matches, assert_none, assert_ok, assert_some};
    use insta::assert_compact_debug_snapshot;

    const TEST_ZONE: &str = "\
AC R
AN Test Zone
AL SFC
AH 3500ft
V X=51:30:00 N 000:10:00 W
DC 5
";

    #[test]
    fn circle_round_trip() {
        let polygons = parse(TEST_ZONE);
        assert_eq!(polygons.len(), 1);

        let polygon = &polygons[0];
        assert_eq!(polygon.airspace_class.as_deref(), Some("R"));
        assert_eq!(polygon.name.as_deref(), Some("Test Zone"));
        assert_eq!(polygon.base_altitude_ft, 0.0);
        assert_eq!(polygon.ceiling_altitude_ft, Some(3500.0));
        assert_eq!(polygon.coordinates.len(), 360);

        let center = crate::LatLng::new(51.5, -10.0 / 60.0).unwrap();
        for point in &polygon.coordinates {
            let distance = crate::geo::great_circle_distance(center, *point);
            assert!((distance - 9260.0).abs() < 0.01);
        }
    }

    #[test]
    fn class_g_is_excluded() {
        let text = TEST_ZONE.replace("AC R", "AC G");
        assert!(parse(&text).is_empty());
    }

    #[test]
    fn excluded_classes_are_configurable() {
        let text = format!("{}*\n{}", TEST_ZONE, TEST_ZONE.replace("AC R", "AC G"));

        let mut reader = OpenAirReader::new(&text);
        reader.with_excluded_classes(["R"]);
        let classes: Vec<_> = reader
            .read_airspaces()
            .map(|result| result.unwrap().airspace_class.unwrap())
            .collect();
        assert_eq!(classes, ["G"]);

        reader.with_excluded_classes(Vec::<String>::new());
        assert_eq!(reader.read_airspaces().count(), 2);
    }

    #[test]
    fn center_and_direction_persist_across_blocks() {
        let text = "\
AC R
AN First
V X=51:30:00 N 000:10:00 W
V D=-
DC 5
*
AC R
AN Second
DA 2,0,90
";
        let reader = OpenAirReader::new(text);
        let mut iter = reader.read_airspaces();

        let first = assert_ok!(assert_some!(iter.next()));
        assert_eq!(first.coordinates.len(), 360);

        let second = assert_ok!(assert_some!(iter.next()));
        assert_eq!(second.name.as_deref(), Some("Second"));
        assert_eq!(second.coordinates.len(), 270);

        assert_none!(iter.next());
        assert_eq!(iter.context().direction, ArcDirection::CounterClockwise);
        assert!(iter.warnings().is_empty());
    }

    #[test]
    fn each_read_starts_with_fresh_context() {
        let text = "V X=51:30:00 N 000:10:00 W\nAC R\n*\nAC R\nDC 1\n";
        let reader = OpenAirReader::new(text);

        let first: Vec<_> = reader.read_airspaces().map(Result::unwrap).collect();
        let second: Vec<_> = reader.read_airspaces().map(Result::unwrap).collect();
        assert_eq!(first, second);
        assert_eq!(second[1].coordinates.len(), 360);
    }

    #[test]
    fn block_without_geometry_is_still_emitted() {
        let polygons = parse("AC D\nAN Metadata Only\n");
        assert_eq!(polygons.len(), 1);
        assert!(polygons[0].coordinates.is_empty());
        assert_none!(polygons[0].ceiling_altitude_ft);
    }

    #[test]
    fn skip_policy_records_warnings() {
        let text = "AC R\nDP 51:30:00 N 000:10:00 W\nDP garbage\nDP 51:31:00 N 000:10:00 W\n";
        let reader = OpenAirReader::new(text);
        let mut iter = reader.read_airspaces();

        let polygon = assert_ok!(assert_some!(iter.next()));
        assert_eq!(polygon.coordinates.len(), 2);
        assert_compact_debug_snapshot!(iter.warnings(), @r#"[InvalidCoordinate { line: 3, text: "garbage" }]"#);
    }

    #[test]
    fn fail_policy_reports_block_and_continues() {
        let text = "\
AC R
AN Broken
DP garbage
*
AC D
AN Fine
DP 51:30:00 N 000:10:00 W
";
        let mut reader = OpenAirReader::new(text);
        reader.with_coordinate_policy(CoordinatePolicy::Fail);
        let mut iter = reader.read_airspaces();

        let err = assert_err!(assert_some!(iter.next()));
        assert_matches!(err, Error::InvalidCoordinate { line: 3, .. });

        let polygon = assert_ok!(assert_some!(iter.next()));
        assert_eq!(polygon.name.as_deref(), Some("Fine"));
        assert_none!(iter.next());
    }

    #[test]
    fn fail_policy_still_applies_rest_of_failed_block() {
        let text = "\
AC R
DP garbage
V X=51:30:00 N 000:10:00 W
V D=-
*
AC R
DA 2,0,90
";
        let mut reader = OpenAirReader::new(text);
        reader.with_coordinate_policy(CoordinatePolicy::Fail);
        let mut iter = reader.read_airspaces();

        let err = assert_err!(assert_some!(iter.next()));
        assert_matches!(err, Error::InvalidCoordinate { line: 2, .. });
        assert_some!(iter.context().center);
        assert_eq!(iter.context().direction, ArcDirection::CounterClockwise);

        let polygon = assert_ok!(assert_some!(iter.next()));
        assert_eq!(polygon.coordinates.len(), 270);
        assert_none!(iter.next());
    }

    #[test]
    fn from_bytes_decodes_cp1252() {
        let reader = OpenAirReader::from_bytes(b"AC R\nAN Vall\xE9e\n");
        let polygons: Vec<_> = reader.read_airspaces().map(Result::unwrap).collect();
        assert_eq!(polygons[0].name.as_deref(), Some("Vallée"));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("*\n* only comments\n*\n").is_empty());
    }
}
