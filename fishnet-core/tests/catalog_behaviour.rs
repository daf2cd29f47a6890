//! End-to-end ingestion behaviour against realistic feature collections.

use fishnet_core::{Catalog, CatalogError, GridId};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

/// A small mixed collection: valid cells, a low-score cell, a polygon, and a
/// cell with broken coordinates.
#[fixture]
fn mixed_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "geometry": { "type": "Point", "coordinates": [-74.6, 40.2] },
                "properties": {
                    "grid_id": 101,
                    "score": 4.8,
                    "has_usa": 1,
                    "has_park": "1",
                    "has_museum": true
                }
            },
            {
                "geometry": { "type": "Point", "coordinates": [-74.5, 40.3] },
                "properties": { "grid_id": 102, "score": 2.1 }
            },
            {
                "geometry": { "type": "Polygon", "coordinates": [] },
                "properties": { "grid_id": 103, "score": 5.0 }
            },
            {
                "geometry": { "type": "Point", "coordinates": [null, 40.4] },
                "properties": { "grid_id": 104, "score": 4.2 }
            },
            {
                "geometry": { "type": "Point", "coordinates": [-74.4, 40.5] },
                "properties": { "score": "3.6", "has_mvc": 0 }
            }
        ]
    })
}

#[rstest]
fn keeps_only_valid_qualifying_points(mixed_collection: Value) {
    let catalog = Catalog::from_geojson(&mixed_collection).expect("valid collection");
    assert_eq!(catalog.len(), 2);
}

#[rstest]
fn derives_amenities_and_positional_ids(mixed_collection: Value) {
    let catalog = Catalog::from_geojson(&mixed_collection).expect("valid collection");

    let first = catalog.points().first().expect("first point");
    assert_eq!(first.id, GridId::Cell(101));
    assert_eq!(first.amenity_count, 3);
    assert!(first.amenities.usa && first.amenities.park && first.amenities.museum);

    // The last feature has no grid_id; its positional id counts the skipped
    // features before it (it is the fifth feature in source order).
    let second = catalog.points().get(1).expect("second point");
    assert_eq!(second.id, GridId::Cell(5));
    assert_eq!(second.score, 3.6);
    assert!(!second.amenities.mvc);
    assert_eq!(second.amenity_count, 0);
}

#[rstest]
fn insertion_order_follows_source_order(mixed_collection: Value) {
    let catalog = Catalog::from_geojson(&mixed_collection).expect("valid collection");
    let ids: Vec<GridId> = catalog.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![GridId::Cell(101), GridId::Cell(5)]);
}

#[rstest]
fn load_surfaces_missing_file_as_read_error() {
    let error = Catalog::load(std::path::Path::new("/non-existent/grid.geojson"))
        .expect_err("missing file should error");
    assert!(matches!(error, CatalogError::Read { .. }));
}

#[rstest]
fn structurally_malformed_payload_is_fatal() {
    let payload = json!({ "type": "GridExport", "features": [] });
    let error = Catalog::from_geojson(&payload).expect_err("not a feature collection");
    assert!(matches!(error, CatalogError::NotAFeatureCollection));
}
