//! # geojson-tree
//!
//! Recursive-descent parser and pretty-printer for JSON with GeoJSON
//! awareness.
//!
//! Raw text goes through a character-level [`Scanner`], a recursive
//! parser, and comes out as a typed value tree: objects are ordered pair
//! lists, and pairs named `bbox`, `coordinates` or `geometry` are
//! reinterpreted into typed bounding boxes, coordinate lists and
//! geometries as they are inserted. Every node renders itself back to
//! tab-indented JSON text. Documents without GeoJSON keys parse as plain
//! JSON.
//!
//! Parsing is deliberately total: malformed sub-structures degrade (bad
//! numbers become `0`, unfit geometry stays a plain object) instead of
//! failing the document. Only the file loader returns an error.
//!
//! ## Quick start
//!
//! ```rust
//! use geojson_tree::{parse_object, Value};
//!
//! let doc = r#"{"type": "Point", "coordinates": [102.0, 0.5]}"#;
//! let object = parse_object(doc);
//!
//! let coordinates = object.get_pair_by_name("coordinates").unwrap();
//! assert!(matches!(coordinates.value(), Value::Coordinates(_)));
//! ```
//!
//! ## Modules
//!
//! - [`scanner`] — forward-only cursor with delimiter and balanced-pair
//!   extraction
//! - [`parser`] — text → [`Object`] tree, plus the GeoJSON coercions
//! - [`types`] — [`Value`] / [`Pair`] / [`Object`] model and rendering
//! - [`geo`] — [`Coordinate`], [`BoundingBox`] and the geometry kinds
//! - [`error`] — error type for the file loader

pub mod error;
pub mod geo;
pub mod parser;
pub mod scanner;
pub mod types;

pub use error::{GeoJsonError, Result};
pub use geo::{BoundingBox, Coordinate, LineString, Point, Polygon};
pub use parser::{
    bounding_box_from_values, coerce_value, coordinates_from_values, geometry_from_object,
    parse_array, parse_file, parse_object, Coercion,
};
pub use scanner::Scanner;
pub use types::{Object, Pair, Value};
