//! End-to-end: document text through every builder

use geo_digest_lib::{
    Analysis, Config, GeometryKind, MarkupFormat, MultiLinePolicy, detail, envelope,
    parse_document, summarize,
};

const MIXED_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "geometry": { "type": "Point", "coordinates": [20, 10] }, "properties": { "name": "North camp" } },
    { "type": "Feature", "geometry": { "type": "Point", "coordinates": [30, -5] }, "properties": {} },
    { "type": "Feature", "geometry": null, "properties": { "name": "Nowhere" } },
    { "type": "Feature", "geometry": { "type": "LineString", "coordinates": [[2, 1]] }, "properties": { "name": "Stub" } },
    { "type": "Feature", "geometry": { "type": "LineString", "coordinates": [[0, 0], [0, 1], "oops", [0, 1], [0, 2]] }, "properties": { "name": "Spine" } },
    { "type": "Feature", "geometry": { "type": "MultiLineString", "coordinates": [[[0, 0], [0, 1]], [[0, 1], [0, 2]]] }, "properties": {} },
    { "type": "Feature", "geometry": { "type": "Polygon", "coordinates": [[[25, 0], [26, 0], [26, 1], [25, 0]]] }, "properties": { "name": "Field" } },
    { "type": "Feature", "geometry": { "type": "GeometryCollection", "geometries": [] }, "properties": {} }
  ]
}"#;

const TWO_SEGMENT_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="pipeline-test" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="10.0" lon="20.0"><name>Start</name></wpt>
  <trk>
    <name>Split day</name>
    <trkseg>
      <trkpt lat="0.0" lon="0.0"></trkpt>
      <trkpt lat="1.0" lon="0.0"></trkpt>
    </trkseg>
    <trkseg>
      <trkpt lat="0.0" lon="5.0"></trkpt>
      <trkpt lat="0.0" lon="6.0"></trkpt>
    </trkseg>
  </trk>
</gpx>"#;

#[test]
fn summary_counts_recognized_geometries_only() {
    let collection = parse_document(MIXED_GEOJSON, None).unwrap();
    let summary = summarize(&collection);

    assert_eq!(summary.point, 2);
    assert_eq!(summary.line_string, 2);
    assert_eq!(summary.multi_line_string, 1);
    assert_eq!(summary.polygon, 1);
    assert_eq!(summary.total(), 6);
}

#[test]
fn detail_skips_degenerate_and_bad_segments() {
    let collection = parse_document(MIXED_GEOJSON, Some(MarkupFormat::GeoJson)).unwrap();
    let entries = detail(&collection, &Config::default());

    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].name, "Spine");
    assert_eq!(entries[0].kind, GeometryKind::LineString);
    assert_eq!(entries[0].length_km, "222.39");

    assert_eq!(entries[1].name, "Unnamed");
    assert_eq!(entries[1].kind, GeometryKind::MultiLineString);
    assert_eq!(entries[1].length_km, "222.39");
}

#[test]
fn envelope_covers_points_lines_and_polygons() {
    let collection = parse_document(MIXED_GEOJSON, None).unwrap();
    let bounds = envelope(&collection).unwrap();

    assert_eq!(bounds.south, -5.0);
    assert_eq!(bounds.north, 10.0);
    assert_eq!(bounds.west, 0.0);
    assert_eq!(bounds.east, 30.0);
}

#[test]
fn gpx_multi_segment_track_respects_policy() {
    let collection = parse_document(TWO_SEGMENT_GPX, None).unwrap();

    let joined = Analysis::run(&collection, &Config::default());
    assert_eq!(joined.summary.point, 1);
    assert_eq!(joined.summary.multi_line_string, 1);
    assert_eq!(joined.details.len(), 1);
    assert_eq!(joined.details[0].name, "Split day");
    assert_eq!(joined.details[0].length_km, "789.35");

    let config = Config {
        multi_line: MultiLinePolicy::PerSubLine,
        ..Config::default()
    };
    let separate = Analysis::run(&collection, &config);
    assert_eq!(separate.details[0].length_km, "222.39");
    assert_eq!(separate.summary, joined.summary);
    assert_eq!(separate.envelope, joined.envelope);
}

#[test]
fn analysis_serializes_for_consumers() {
    let collection = parse_document(MIXED_GEOJSON, None).unwrap();
    let analysis = Analysis::run(&collection, &Config::default());
    let value = serde_json::to_value(&analysis).unwrap();

    assert_eq!(value["summary"]["Polygon"], 1);
    assert_eq!(value["details"][0]["lengthKm"], "222.39");
    assert_eq!(value["envelope"]["south"], -5.0);
}

#[test]
fn analysis_is_idempotent() {
    let collection = parse_document(MIXED_GEOJSON, None).unwrap();
    let config = Config::default();
    assert_eq!(
        Analysis::run(&collection, &config),
        Analysis::run(&collection, &config)
    );
}

#[test]
fn line_without_two_usable_positions_is_counted_but_not_measured() {
    let text = r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[["a",1],[7]]},"properties":{"name":"Ghost"}}"#;
    let collection = parse_document(text, None).unwrap();
    let analysis = Analysis::run(&collection, &Config::default());

    assert_eq!(analysis.summary.line_string, 1);
    assert!(analysis.details.is_empty());
    assert!(analysis.envelope.is_none());
}

const TRAIL_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Trail</name>
      <LineString><coordinates>0,0 0,1</coordinates></LineString>
    </Placemark>
    <Placemark>
      <name>Hut</name>
      <Point><coordinates>3,-2</coordinates></Point>
    </Placemark>
  </Document>
</kml>"#;

#[test]
fn kml_placemarks_run_through_every_builder() {
    let collection = parse_document(TRAIL_KML, None).unwrap();
    let analysis = Analysis::run(&collection, &Config::default());

    assert_eq!(analysis.summary.line_string, 1);
    assert_eq!(analysis.summary.point, 1);
    assert_eq!(analysis.details.len(), 1);
    assert_eq!(analysis.details[0].name, "Trail");
    assert_eq!(analysis.details[0].length_km, "111.19");

    let bounds = analysis.envelope.unwrap();
    assert_eq!((bounds.south, bounds.west), (-2.0, 0.0));
    assert_eq!((bounds.north, bounds.east), (1.0, 3.0));
}
