//! The JSON value tree: tagged values, name/value pairs and objects.
//!
//! The model mirrors plain JSON plus four GeoJSON-specific shapes
//! (bounding box, coordinate list, and the three geometry kinds). The
//! discriminant is the enum variant itself, fixed at construction time;
//! consumers match on [`Value`] rather than inspecting runtime types.
//!
//! Every node renders itself to pretty-printed JSON text given an indent
//! level (a count of leading tab characters); containers render children
//! one level deeper and join them with `",\n"`.

use crate::geo::{BoundingBox, Coordinate, LineString, Point, Polygon};
use std::fmt;

/// A JSON value with GeoJSON-aware variants.
///
/// `Null` is its own variant rather than a payload; strings are stored
/// exactly as scanned (escape sequences are kept, not decoded) and
/// rendered back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Object(Object),
    Array(Vec<Value>),
    BBox(BoundingBox),
    Coordinates(Vec<Coordinate>),
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
}

impl Value {
    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The object payload, if this is an object value.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// The element slice, if this is a plain array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values),
            _ => None,
        }
    }

    /// The coordinate slice, if this is a coordinate-list value.
    pub fn as_coordinates(&self) -> Option<&[Coordinate]> {
        match self {
            Value::Coordinates(coordinates) => Some(coordinates),
            _ => None,
        }
    }

    /// The bounding box, if this is a bounding-box value.
    pub fn as_bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            Value::BBox(bbox) => Some(bbox),
            _ => None,
        }
    }

    /// Render this value at the given indent level.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_indented(indent, &mut out);
        out
    }

    pub(crate) fn write_indented(&self, indent: usize, out: &mut String) {
        match self {
            Value::String(s) => {
                out.push('"');
                out.push_str(s);
                out.push('"');
            }
            Value::Number(n) => out.push_str(&format_number(*n)),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Null => out.push_str("null"),
            Value::Object(object) => object.write_indented(indent, out),
            Value::Array(values) => {
                out.push('[');
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    value.write_indented(indent, out);
                }
                out.push(']');
            }
            Value::BBox(bbox) => out.push_str(&bbox.render()),
            Value::Coordinates(coordinates) => write_coordinate_list(coordinates, out),
            Value::Point(point) => point.write_indented(indent, out),
            Value::LineString(line) => line.write_indented(indent, out),
            Value::Polygon(polygon) => polygon.write_indented(indent, out),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<BoundingBox> for Value {
    fn from(value: BoundingBox) -> Self {
        Value::BBox(value)
    }
}

impl From<Vec<Coordinate>> for Value {
    fn from(value: Vec<Coordinate>) -> Self {
        Value::Coordinates(value)
    }
}

impl From<Point> for Value {
    fn from(value: Point) -> Self {
        Value::Point(value)
    }
}

impl From<LineString> for Value {
    fn from(value: LineString) -> Self {
        Value::LineString(value)
    }
}

impl From<Polygon> for Value {
    fn from(value: Polygon) -> Self {
        Value::Polygon(value)
    }
}

/// A name/value binding inside an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    name: String,
    value: Value,
}

impl Pair {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Render as `"name": value` with the pair's leading indent.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_indented(indent, &mut out);
        out
    }

    pub(crate) fn write_indented(&self, indent: usize, out: &mut String) {
        out.push_str(&make_indent(indent));
        out.push('"');
        out.push_str(&self.name);
        out.push_str("\": ");
        self.value.write_indented(indent, out);
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// An ordered sequence of pairs.
///
/// Insertion order is preserved and duplicate names are retained;
/// [`get_pair_by_name`](Self::get_pair_by_name) returns the first match,
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    pairs: Vec<Pair>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, applying the GeoJSON name-keyed coercion first: pairs
    /// named `bbox`, `coordinates` or `geometry` (any case) may have
    /// their freshly-parsed generic value replaced with the typed
    /// equivalent. Coercion is best-effort; a value that does not fit is
    /// kept as-is and the pair is added regardless.
    pub fn add_pair(&mut self, pair: Pair) {
        let Pair { name, value } = pair;
        let value = crate::parser::coerce_value(&name, value).into_value();
        self.pairs.push(Pair { name, value });
    }

    /// The pair at `index`, if present.
    pub fn pair(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// The first pair whose name matches `name`, ignoring ASCII case.
    pub fn get_pair_by_name(&self, name: &str) -> Option<&Pair> {
        self.pairs
            .iter()
            .find(|pair| pair.name.eq_ignore_ascii_case(name))
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render this object at the given indent level. The opening brace
    /// sits at the caller's position; pairs are indented one level
    /// deeper and the closing brace returns to `indent`.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_indented(indent, &mut out);
        out
    }

    pub(crate) fn write_indented(&self, indent: usize, out: &mut String) {
        if self.pairs.is_empty() {
            out.push_str("{ }");
            return;
        }
        out.push_str("{\n");
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            pair.write_indented(indent + 1, out);
        }
        out.push('\n');
        out.push_str(&make_indent(indent));
        out.push('}');
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

fn write_coordinate_list(coordinates: &[Coordinate], out: &mut String) {
    match coordinates {
        [] => out.push_str("[]"),
        [single] => out.push_str(&single.render()),
        _ => {
            out.push('[');
            for (i, coordinate) in coordinates.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&coordinate.render());
            }
            out.push(']');
        }
    }
}

/// Leading tabs for the given indent level.
pub(crate) fn make_indent(level: usize) -> String {
    "\t".repeat(level)
}

/// Decimal text for a number. Whole finite values keep a trailing `.0`
/// (`102.0`, `10.0`) so numeric and 2D/3D shape information survives a
/// round trip through text; everything else uses the shortest `Display`
/// form.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
