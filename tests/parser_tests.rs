use geojson_tree::{
    parse_array, parse_file, parse_object, Coordinate, GeoJsonError, LineString, Object, Pair,
    Point, Polygon, Value,
};

/// The three-feature document the crate is built around: one Point, one
/// LineString and one Polygon feature, with scalar and nested properties.
const FEATURE_COLLECTION: &str = r#"{ "type": "FeatureCollection",
    "features": [
        { "type": "Feature",
          "geometry": {"type": "Point", "coordinates": [102.0, 0.5]},
          "properties": {"prop0": "value0"}
        },
        { "type": "Feature",
          "geometry": {
              "type": "LineString",
              "coordinates": [
                  [102.0, 0.0], [103.0, 1.0], [104.0, 0.0], [105.0, 1.0]
              ]
          },
          "properties": {
              "prop0": "value0",
              "prop1": 0.0
          }
        },
        { "type": "Feature",
          "geometry": {
              "type": "Polygon",
              "coordinates": [
                  [ [100.0, 0.0], [101.0, 0.0], [101.0, 1.0],
                    [100.0, 1.0], [100.0, 0.0] ]
              ]
          },
          "properties": {
              "prop0": "value0",
              "prop1": {"this": "that"}
          }
        }
    ]
}"#;

// ============================================================================
// Scalar values
// ============================================================================

#[test]
fn parses_each_scalar_shape() {
    let object = parse_object(r#"{"s": "x", "n": 12.5, "t": true, "f": false, "z": null}"#);

    assert_eq!(object.len(), 5);
    assert_eq!(object.get_pair_by_name("s").unwrap().value().as_str(), Some("x"));
    assert_eq!(object.get_pair_by_name("n").unwrap().value().as_number(), Some(12.5));
    assert_eq!(object.get_pair_by_name("t").unwrap().value().as_bool(), Some(true));
    assert_eq!(object.get_pair_by_name("f").unwrap().value().as_bool(), Some(false));
    assert!(object.get_pair_by_name("z").unwrap().value().is_null());
}

#[test]
fn literals_are_case_insensitive() {
    let object = parse_object(r#"{"a": TRUE, "b": NULL, "c": False}"#);
    assert_eq!(object.pair(0).unwrap().value().as_bool(), Some(true));
    assert!(object.pair(1).unwrap().value().is_null());
    assert_eq!(object.pair(2).unwrap().value().as_bool(), Some(false));
}

#[test]
fn malformed_numbers_degrade_to_zero() {
    let object = parse_object(r#"{"n": 12x5, "ok": 3.0}"#);
    assert_eq!(object.get_pair_by_name("n").unwrap().value().as_number(), Some(0.0));
    assert_eq!(object.get_pair_by_name("ok").unwrap().value().as_number(), Some(3.0));
}

#[test]
fn negative_and_exponent_numbers_parse() {
    let object = parse_object(r#"{"a": -7.25, "b": 1e3}"#);
    assert_eq!(object.pair(0).unwrap().value().as_number(), Some(-7.25));
    assert_eq!(object.pair(1).unwrap().value().as_number(), Some(1000.0));
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn parses_nested_objects() {
    let object = parse_object(r#"{"outer": {"inner": 1.0}}"#);
    let inner = object.get_pair_by_name("outer").unwrap().value().as_object().unwrap();
    assert_eq!(inner.get_pair_by_name("inner").unwrap().value().as_number(), Some(1.0));
}

#[test]
fn accepts_an_unwrapped_object_body() {
    let wrapped = parse_object(r#"{"a": 1.0, "b": "two"}"#);
    let unwrapped = parse_object(r#""a": 1.0, "b": "two""#);
    assert_eq!(wrapped, unwrapped);
}

#[test]
fn empty_documents_parse_to_empty_objects() {
    assert!(parse_object("").is_empty());
    assert!(parse_object("{}").is_empty());
    assert!(parse_object("   \n ").is_empty());
}

#[test]
fn trailing_garbage_after_the_root_is_ignored() {
    let object = parse_object(r#"{"a": 1.0} trailing noise"#);
    assert_eq!(object.len(), 1);
    assert_eq!(object.pair(0).unwrap().value().as_number(), Some(1.0));
}

#[test]
fn duplicate_names_are_retained_and_lookup_returns_the_first() {
    let object = parse_object(r#"{"a": 1.0, "A": 2.0}"#);
    assert_eq!(object.len(), 2);
    assert_eq!(object.get_pair_by_name("a").unwrap().value().as_number(), Some(1.0));
    assert_eq!(object.get_pair_by_name("A").unwrap().value().as_number(), Some(1.0));
}

#[test]
fn whitespace_heavy_documents_parse() {
    let object = parse_object("{\n\t\"a\"  :\t 1.0 ,\n  \"b\" : \"two\"\n}");
    assert_eq!(object.len(), 2);
    assert_eq!(object.get_pair_by_name("b").unwrap().value().as_str(), Some("two"));
}

#[test]
fn string_escapes_are_preserved_verbatim() {
    let object = parse_object(r#"{"quote": "say \"hi\""}"#);
    assert_eq!(
        object.pair(0).unwrap().value().as_str(),
        Some(r#"say \"hi\""#)
    );
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn parses_a_wrapped_array() {
    let values = parse_array("[1.0, 2.0, 3.0]");
    assert_eq!(values.len(), 3);
    assert_eq!(values[2].as_number(), Some(3.0));
}

#[test]
fn parses_an_unwrapped_element_sequence() {
    let values = parse_array(r#""a", "b""#);
    assert_eq!(values.len(), 2);
    assert_eq!(values[1].as_str(), Some("b"));
}

#[test]
fn arrays_support_heterogeneous_elements() {
    let values = parse_array(r#"["x", 1.5, true, null, {"k": "v"}, [2.0]]"#);
    assert_eq!(values.len(), 6);
    assert_eq!(values[0].as_str(), Some("x"));
    assert_eq!(values[1].as_number(), Some(1.5));
    assert_eq!(values[2].as_bool(), Some(true));
    assert!(values[3].is_null());
    assert!(values[4].as_object().is_some());
    assert_eq!(values[5].as_array().map(<[Value]>::len), Some(1));
}

#[test]
fn compact_nested_arrays_keep_every_element() {
    let object = parse_object(r#"{"grid": [[1.0,2.0],[3.0,4.0]]}"#);
    let grid = object.pair(0).unwrap().value().as_array().unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0].as_array().unwrap()[0].as_number(), Some(1.0));
    assert_eq!(grid[1].as_array().unwrap()[1].as_number(), Some(4.0));
}

#[test]
fn array_of_objects_parses_each_element() {
    let values = parse_array(r#"[{"a": 1.0}, {"a": 2.0}]"#);
    assert_eq!(values.len(), 2);
    assert_eq!(
        values[1].as_object().unwrap().pair(0).unwrap().value().as_number(),
        Some(2.0)
    );
}

#[test]
fn trailing_whitespace_adds_no_elements() {
    let values = parse_array("[1.0, 2.0, ]");
    assert_eq!(values.len(), 2);
}

// ============================================================================
// End-to-end GeoJSON
// ============================================================================

#[test]
fn feature_collection_builds_the_expected_tree() {
    let root = parse_object(FEATURE_COLLECTION);

    assert_eq!(root.len(), 2);
    assert_eq!(
        root.get_pair_by_name("type").unwrap().value().as_str(),
        Some("FeatureCollection")
    );

    let features = root.get_pair_by_name("features").unwrap().value().as_array().unwrap();
    assert_eq!(features.len(), 3);

    // feature 0: a Point with one scalar property
    let feature = features[0].as_object().unwrap();
    match feature.get_pair_by_name("geometry").unwrap().value() {
        Value::Point(point) => {
            assert_eq!(point.coordinate(), Some(&Coordinate::new(102.0, 0.5)));
        }
        other => panic!("expected a point geometry, got {other:?}"),
    }
    let properties = feature.get_pair_by_name("properties").unwrap().value().as_object().unwrap();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties.get_pair_by_name("prop0").unwrap().value().as_str(), Some("value0"));

    // feature 1: a LineString of four positions
    let feature = features[1].as_object().unwrap();
    match feature.get_pair_by_name("geometry").unwrap().value() {
        Value::LineString(line) => {
            assert_eq!(line.coordinates().len(), 4);
            assert_eq!(line.coordinates()[0], Coordinate::new(102.0, 0.0));
            assert_eq!(line.coordinates()[3], Coordinate::new(105.0, 1.0));
        }
        other => panic!("expected a linestring geometry, got {other:?}"),
    }
    let properties = feature.get_pair_by_name("properties").unwrap().value().as_object().unwrap();
    assert_eq!(properties.get_pair_by_name("prop1").unwrap().value().as_number(), Some(0.0));

    // feature 2: a Polygon ring with a nested property object
    let feature = features[2].as_object().unwrap();
    match feature.get_pair_by_name("geometry").unwrap().value() {
        Value::Polygon(polygon) => {
            assert_eq!(polygon.coordinates().len(), 5);
            assert_eq!(polygon.coordinates()[0], polygon.coordinates()[4]);
        }
        other => panic!("expected a polygon geometry, got {other:?}"),
    }
    let properties = feature.get_pair_by_name("properties").unwrap().value().as_object().unwrap();
    let nested = properties.get_pair_by_name("prop1").unwrap().value().as_object().unwrap();
    assert_eq!(nested.get_pair_by_name("this").unwrap().value().as_str(), Some("that"));
}

#[test]
fn parsed_tree_equals_the_programmatically_built_tree() {
    fn properties(extra: Option<Value>) -> Object {
        let mut object = Object::new();
        object.add_pair(Pair::new("prop0", "value0"));
        if let Some(value) = extra {
            object.add_pair(Pair::new("prop1", value));
        }
        object
    }

    fn feature(geometry: impl Into<Value>, props: Object) -> Value {
        let mut object = Object::new();
        object.add_pair(Pair::new("type", "Feature"));
        object.add_pair(Pair::new("geometry", geometry));
        object.add_pair(Pair::new("properties", props));
        Value::Object(object)
    }

    let mut nested = Object::new();
    nested.add_pair(Pair::new("this", "that"));

    let mut expected = Object::new();
    expected.add_pair(Pair::new("type", "FeatureCollection"));
    expected.add_pair(Pair::new(
        "features",
        vec![
            feature(
                Point::new(vec![Coordinate::new(102.0, 0.5)]),
                properties(None),
            ),
            feature(
                LineString::new(vec![
                    Coordinate::new(102.0, 0.0),
                    Coordinate::new(103.0, 1.0),
                    Coordinate::new(104.0, 0.0),
                    Coordinate::new(105.0, 1.0),
                ]),
                properties(Some(Value::Number(0.0))),
            ),
            feature(
                Polygon::new(vec![
                    Coordinate::new(100.0, 0.0),
                    Coordinate::new(101.0, 0.0),
                    Coordinate::new(101.0, 1.0),
                    Coordinate::new(100.0, 1.0),
                    Coordinate::new(100.0, 0.0),
                ]),
                properties(Some(Value::Object(nested))),
            ),
        ],
    ));

    assert_eq!(parse_object(FEATURE_COLLECTION), expected);
}

#[test]
fn plain_documents_parse_without_geo_coercion() {
    let object = parse_object(r#"{"type": "whatever", "items": [1.0, 2.0]}"#);
    assert!(matches!(object.pair(1).unwrap().value(), Value::Array(_)));
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn parse_file_joins_lines_and_parses() {
    let path = std::env::temp_dir().join("geojson_tree_parse_file_test.json");
    std::fs::write(&path, "{\"name\": \"alpha\",\n \"size\": 4.0\n}").unwrap();

    let object = parse_file(&path).unwrap();
    assert_eq!(object.get_pair_by_name("name").unwrap().value().as_str(), Some("alpha"));
    assert_eq!(object.get_pair_by_name("size").unwrap().value().as_number(), Some(4.0));

    std::fs::remove_file(&path).ok();
}

#[test]
fn parse_file_propagates_io_errors() {
    let missing = std::env::temp_dir().join("geojson_tree_definitely_missing.json");
    match parse_file(&missing) {
        Err(GeoJsonError::Io(_)) => {}
        other => panic!("expected an io error, got {other:?}"),
    }
}
