//! Recursive-descent parser building the typed value tree.
//!
//! The parser consumes [`Scanner`] output one value at a time, recursing
//! once per nested object or array, and never fails: structurally
//! malformed input degrades instead of erroring.
//!
//! # Key behaviors
//!
//! - **Structural miss**: a missing delimiter makes the scanner return an
//!   empty span at end-of-buffer, which simply terminates the current
//!   loop. Trailing garbage after a value is skipped.
//! - **Scalar classification**: bare tokens are trimmed and read as
//!   `true`/`false`/`null` (case-insensitive) or a number; a token that
//!   parses as none of these becomes the number `0`.
//! - **Name-keyed coercion**: as pairs are inserted, values under the
//!   names `bbox`, `coordinates` and `geometry` are reinterpreted into
//!   their typed GeoJSON shapes via [`coerce_value`]. The outcome is
//!   explicit ([`Coercion`]); a value that does not fit stays untouched
//!   and the pair is added either way, so no document ever aborts over a
//!   malformed sub-structure.
//! - **Array bodies**: nested object/array content is extracted with the
//!   balanced scan and parsed directly as a body, so compact nested
//!   arrays like `[[1,2],[3,4]]` keep every element.

use crate::error::Result;
use crate::geo::{BoundingBox, Coordinate, LineString, Point, Polygon};
use crate::scanner::Scanner;
use crate::types::{Object, Pair, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse one JSON object from `text`.
///
/// The text may be brace-wrapped (`{ … }`) or an already-unwrapped object
/// body; both forms parse to the same tree.
///
/// ```
/// let object = geojson_tree::parse_object(r#"{"name": "alpha", "size": 4.0}"#);
/// assert_eq!(object.get_pair_by_name("name").unwrap().value().as_str(), Some("alpha"));
/// assert_eq!(object.get_pair_by_name("SIZE").unwrap().value().as_number(), Some(4.0));
/// ```
pub fn parse_object(text: &str) -> Object {
    let body = if text.starts_with('{') {
        Scanner::new(text).balanced_content('{', '}')
    } else {
        text
    };

    let mut scanner = Scanner::new(body);
    let mut object = Object::new();

    while scanner.has_remaining() {
        let name = scanner.delimited_content('"');
        scanner.skip_past(':');

        let value = match scanner.peek_significant() {
            // nothing significant left; the loop re-checks and exits
            None => continue,
            Some('"') => Value::String(scanner.delimited_content('"').to_string()),
            Some('{') => {
                let inner = scanner.balanced_content('{', '}');
                Value::Object(parse_object(inner))
            }
            Some('[') => {
                let inner = scanner.balanced_content('[', ']');
                Value::Array(parse_array_body(&mut Scanner::new(inner)))
            }
            Some(_) => match classify_scalar(scanner.text_up_to(',')) {
                Some(value) => value,
                None => continue,
            },
        };

        object.add_pair(Pair::new(name, value));
    }

    object
}

/// Parse one JSON array from `text`, preserving element order and
/// supporting heterogeneous element types.
///
/// The text may be bracket-wrapped (`[ … ]`) or an already-unwrapped
/// sequence of elements.
pub fn parse_array(text: &str) -> Vec<Value> {
    if text.starts_with('[') && text.ends_with(']') {
        let body = Scanner::new(text).balanced_content('[', ']');
        parse_array_body(&mut Scanner::new(body))
    } else {
        parse_array_body(&mut Scanner::new(text))
    }
}

fn parse_array_body(scanner: &mut Scanner<'_>) -> Vec<Value> {
    let mut values = Vec::new();

    while scanner.has_remaining() {
        match scanner.peek_significant() {
            None => break,
            Some('"') => {
                values.push(Value::String(scanner.delimited_content('"').to_string()));
                scanner.skip_past(',');
            }
            Some('{') => {
                let inner = scanner.balanced_content('{', '}');
                values.push(Value::Object(parse_object(inner)));
                scanner.skip_past(',');
            }
            Some('[') => {
                let inner = scanner.balanced_content('[', ']');
                values.push(Value::Array(parse_array_body(&mut Scanner::new(inner))));
                scanner.skip_past(',');
            }
            // the consumed `,` needs no extra skip here
            Some(_) => {
                if let Some(value) = classify_scalar(scanner.text_up_to(',')) {
                    values.push(value);
                }
            }
        }
    }

    values
}

/// Read a whole file, concatenate its lines with `\n`, and parse the
/// result as an object. I/O failures are the only error this crate
/// propagates.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Object> {
    let reader = BufReader::new(File::open(path)?);
    let mut text = String::new();
    for line in reader.lines() {
        text.push_str(&line?);
        text.push('\n');
    }
    Ok(parse_object(&text))
}

fn classify_scalar(token: &str) -> Option<Value> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    if token.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if token.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    if token.eq_ignore_ascii_case("null") {
        return Some(Value::Null);
    }
    // malformed numbers degrade to zero rather than failing the parse
    Some(Value::Number(token.parse().unwrap_or(0.0)))
}

/// Outcome of a name-keyed coercion attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// The value was replaced with its typed GeoJSON shape.
    Applied(Value),
    /// The value did not fit the shape its name suggests (or the name is
    /// not GeoJSON-keyed) and is returned untouched.
    Unchanged(Value),
}

impl Coercion {
    pub fn into_value(self) -> Value {
        match self {
            Coercion::Applied(value) | Coercion::Unchanged(value) => value,
        }
    }

    pub fn was_applied(&self) -> bool {
        matches!(self, Coercion::Applied(_))
    }
}

/// Reinterpret a freshly-parsed value according to its pair name
/// (compared case-insensitively): `bbox` arrays become bounding boxes,
/// `coordinates` arrays become coordinate lists, and `geometry` objects
/// become typed geometries. Values that do not fit are handed back
/// unchanged; coercion is opportunistic, never mandatory.
pub fn coerce_value(name: &str, value: Value) -> Coercion {
    if name.eq_ignore_ascii_case("bbox") {
        if let Value::Array(items) = value {
            return match bounding_box_from_values(&items) {
                Some(bbox) => Coercion::Applied(Value::BBox(bbox)),
                None => Coercion::Unchanged(Value::Array(items)),
            };
        }
        Coercion::Unchanged(value)
    } else if name.eq_ignore_ascii_case("coordinates") {
        if let Value::Array(items) = value {
            return Coercion::Applied(Value::Coordinates(coordinates_from_values(&items)));
        }
        Coercion::Unchanged(value)
    } else if name.eq_ignore_ascii_case("geometry") {
        if let Value::Object(object) = value {
            return match geometry_from_object(&object) {
                Some(geometry) => Coercion::Applied(geometry),
                None => Coercion::Unchanged(Value::Object(object)),
            };
        }
        Coercion::Unchanged(value)
    } else {
        Coercion::Unchanged(value)
    }
}

/// Build a bounding box from a `bbox` array value: exactly 4 numbers for
/// 2D (west, south, east, north) or exactly 6 for 3D (west, south,
/// altitude-min, east, north, altitude-max). Any other shape yields
/// `None`.
pub fn bounding_box_from_values(values: &[Value]) -> Option<BoundingBox> {
    let numbers: Vec<f64> = values
        .iter()
        .map(Value::as_number)
        .collect::<Option<Vec<_>>>()?;
    match numbers[..] {
        [west, south, east, north] => Some(BoundingBox::new(west, south, east, north)),
        [west, south, min, east, north, max] => {
            Some(BoundingBox::with_altitude(west, south, min, east, north, max))
        }
        _ => None,
    }
}

/// Reshape a `coordinates` array value into a coordinate list, deciding
/// the nesting depth from the first element:
///
/// - doubly nested (`[[[x,y],…]]`, a polygon ring): one coordinate per
///   element of the first ring
/// - singly nested (`[[x,y],…]`, a line): one coordinate per element
/// - flat numbers (`[x,y]` or `[x,y,z]`): a single wrapped coordinate
///
/// Malformed or empty input yields an empty list rather than a failure.
pub fn coordinates_from_values(values: &[Value]) -> Vec<Coordinate> {
    match values.first() {
        Some(Value::Array(first)) => match first.first() {
            Some(Value::Array(_)) => first
                .iter()
                .filter_map(|element| match element {
                    Value::Array(position) => Coordinate::from_values(position),
                    _ => None,
                })
                .collect(),
            Some(Value::Number(_)) => values
                .iter()
                .filter_map(|element| match element {
                    Value::Array(position) => Coordinate::from_values(position),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        },
        Some(Value::Number(_)) => Coordinate::from_values(values).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Classify a parsed `geometry` object. The first pair's string value
/// selects the geometry kind (case-insensitive `Point` / `LineString` /
/// `Polygon`); the second pair must already hold a coordinate list.
/// Anything else yields `None` and the caller keeps the raw object.
pub fn geometry_from_object(object: &Object) -> Option<Value> {
    let kind = match object.pair(0)?.value() {
        Value::String(s) => s,
        _ => return None,
    };
    let coordinates = match object.pair(1)?.value() {
        Value::Coordinates(coordinates) => coordinates.clone(),
        _ => return None,
    };

    if kind.eq_ignore_ascii_case("point") {
        Some(Value::Point(Point::new(coordinates)))
    } else if kind.eq_ignore_ascii_case("linestring") {
        Some(Value::LineString(LineString::new(coordinates)))
    } else if kind.eq_ignore_ascii_case("polygon") {
        Some(Value::Polygon(Polygon::new(coordinates)))
    } else {
        None
    }
}
