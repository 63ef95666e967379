//! GeoJSON coordinate, bounding-box and geometry types.
//!
//! Each type renders itself to JSON text; geometry renderers take an
//! indent level (a count of leading tabs) and emit their children one
//! level deeper, matching the object renderer in [`crate::types`].

use crate::types::{format_number, make_indent, Value};
use std::fmt;

/// A single 2D or 3D position.
///
/// The coordinate is 2D while `altitude` is absent; any finite altitude
/// (including zero) makes it 3D. Constructors and
/// [`set_altitude`](Self::set_altitude) normalize non-finite altitudes to
/// "absent", which keeps derived equality in line with the documented
/// rule: longitude and latitude compare exactly, altitudes compare
/// exactly or are both absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Coordinate {
    /// A 2D coordinate.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    /// A 3D coordinate. A non-finite `altitude` yields a 2D coordinate.
    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        let mut coordinate = Self::new(longitude, latitude);
        coordinate.set_altitude(altitude);
        coordinate
    }

    /// Build a coordinate from a raw parsed array of 2 or 3 values.
    ///
    /// Longitude and latitude must be numeric. A non-numeric or
    /// non-finite third slot is tolerated and treated as "no altitude".
    /// Any other shape yields `None`.
    pub fn from_values(values: &[Value]) -> Option<Self> {
        match values {
            [lon, lat] => Some(Self::new(lon.as_number()?, lat.as_number()?)),
            [lon, lat, alt] => {
                let mut coordinate = Self::new(lon.as_number()?, lat.as_number()?);
                if let Some(altitude) = alt.as_number() {
                    coordinate.set_altitude(altitude);
                }
                Some(coordinate)
            }
            _ => None,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The altitude, or `None` for a 2D coordinate.
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// Whether this coordinate has an altitude component.
    pub fn is_3d(&self) -> bool {
        self.altitude.is_some()
    }

    /// Set the altitude. A finite value (including zero) makes the
    /// coordinate 3D; `NaN` or an infinity reverts it to 2D.
    pub fn set_altitude(&mut self, altitude: f64) {
        self.altitude = altitude.is_finite().then_some(altitude);
    }

    /// Render as `[lon , lat]` or `[lon , lat , alt]`.
    pub fn render(&self) -> String {
        match self.altitude {
            Some(altitude) => format!(
                "[{} , {} , {}]",
                format_number(self.longitude),
                format_number(self.latitude),
                format_number(altitude)
            ),
            None => format!(
                "[{} , {}]",
                format_number(self.longitude),
                format_number(self.latitude)
            ),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A 2D or 3D geographic extent.
///
/// The altitude bounds are always both present (3D) or both absent (2D);
/// the two constructors are the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
    altitude_min: Option<f64>,
    altitude_max: Option<f64>,
}

impl BoundingBox {
    /// A 2D bounding box.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
            altitude_min: None,
            altitude_max: None,
        }
    }

    /// A 3D bounding box. The argument order matches the 6-element GeoJSON
    /// `bbox` layout: west, south, altitude-min, east, north, altitude-max.
    pub fn with_altitude(
        west: f64,
        south: f64,
        altitude_min: f64,
        east: f64,
        north: f64,
        altitude_max: f64,
    ) -> Self {
        Self {
            west,
            south,
            east,
            north,
            altitude_min: Some(altitude_min),
            altitude_max: Some(altitude_max),
        }
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn altitude_min(&self) -> Option<f64> {
        self.altitude_min
    }

    pub fn altitude_max(&self) -> Option<f64> {
        self.altitude_max
    }

    pub fn is_3d(&self) -> bool {
        self.altitude_min.is_some()
    }

    /// Render as a flat bracketed list of the 4 or 6 components, in the
    /// same order the 4/6-element `bbox` array carries them.
    pub fn render(&self) -> String {
        let mut components = vec![self.west, self.south];
        if let (Some(min), Some(max)) = (self.altitude_min, self.altitude_max) {
            components.extend([min, self.east, self.north, max]);
        } else {
            components.extend([self.east, self.north]);
        }
        let joined: Vec<String> = components.iter().copied().map(format_number).collect();
        format!("[{}]", joined.join(", "))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A Point geometry. Logically holds exactly one coordinate; the first
/// entry of the sequence is the one rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coordinates: Vec<Coordinate>,
}

impl Point {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// The point's position, if one was supplied.
    pub fn coordinate(&self) -> Option<&Coordinate> {
        self.coordinates.first()
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_indented(indent, &mut out);
        out
    }

    pub(crate) fn write_indented(&self, indent: usize, out: &mut String) {
        out.push_str("{\n");
        out.push_str(&make_indent(indent + 1));
        out.push_str("\"type\": \"Point\",\n");
        out.push_str(&make_indent(indent + 1));
        out.push_str("\"coordinates\": ");
        match self.coordinates.first() {
            Some(coordinate) => out.push_str(&coordinate.render()),
            None => out.push_str("[]"),
        }
        out.push('\n');
        out.push_str(&make_indent(indent));
        out.push('}');
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// A LineString geometry: an open sequence of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    coordinates: Vec<Coordinate>,
}

impl LineString {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_indented(indent, &mut out);
        out
    }

    pub(crate) fn write_indented(&self, indent: usize, out: &mut String) {
        out.push_str("{\n");
        out.push_str(&make_indent(indent + 1));
        out.push_str("\"type\": \"LineString\",\n");
        out.push_str(&make_indent(indent + 1));
        if self.coordinates.is_empty() {
            out.push_str("\"coordinates\": []\n");
        } else {
            out.push_str("\"coordinates\": [\n");
            for (i, coordinate) in self.coordinates.iter().enumerate() {
                if i > 0 {
                    out.push_str(",\n");
                }
                out.push_str(&make_indent(indent + 2));
                out.push_str(&coordinate.render());
            }
            out.push('\n');
            out.push_str(&make_indent(indent + 1));
            out.push_str("]\n");
        }
        out.push_str(&make_indent(indent));
        out.push('}');
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// A Polygon geometry: a single ring of coordinates.
///
/// The renderer always repeats the first coordinate as the ring closer,
/// whether or not the stored sequence already ends with it. Callers must
/// not close the ring themselves before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    coordinates: Vec<Coordinate>,
}

impl Polygon {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_indented(indent, &mut out);
        out
    }

    pub(crate) fn write_indented(&self, indent: usize, out: &mut String) {
        out.push_str("{\n");
        out.push_str(&make_indent(indent + 1));
        out.push_str("\"type\": \"Polygon\",\n");
        out.push_str(&make_indent(indent + 1));
        if self.coordinates.is_empty() {
            out.push_str("\"coordinates\": []\n");
        } else {
            out.push_str("\"coordinates\": [\n");
            out.push_str(&make_indent(indent + 2));
            out.push_str("[\n");
            for coordinate in &self.coordinates {
                out.push_str(&make_indent(indent + 3));
                out.push_str(&coordinate.render());
                out.push_str(",\n");
            }
            // close the ring on the first coordinate
            out.push_str(&make_indent(indent + 3));
            out.push_str(&self.coordinates[0].render());
            out.push('\n');
            out.push_str(&make_indent(indent + 2));
            out.push_str("]\n");
            out.push_str(&make_indent(indent + 1));
            out.push_str("]\n");
        }
        out.push_str(&make_indent(indent));
        out.push('}');
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}
