use restomap_core::CellValue;

use super::*;

// -----------------------------------------------------------------------
// normalize_row
// -----------------------------------------------------------------------

fn full_row() -> RawRow {
    RawRow::new()
        .with("Name", "Tartine")
        .with("Address", "600 Guerrero St")
        .with("City", "San Francisco")
        .with("State", "CA")
        .with("Country", "USA")
        .with("Latitude", 37.7614)
        .with("Longitude", "-122,4241")
        .with("Phone", "+1 415 487 2600")
        .with("Website", "https://tartinebakery.com")
        .with("Cuisine", "Bakery")
        .with("Notes", "Morning buns")
}

#[test]
fn normalize_row_maps_every_field() {
    let record = normalize_row(&full_row(), 0);
    assert_eq!(record.id, "0-Tartine");
    assert_eq!(record.name, "Tartine");
    assert_eq!(record.address, "600 Guerrero St");
    assert_eq!(record.city, "San Francisco");
    assert_eq!(record.state, "CA");
    assert_eq!(record.country, "USA");
    assert_eq!(record.lat, Some(37.7614));
    assert_eq!(record.lng, Some(-122.4241));
    assert_eq!(record.phone, "+1 415 487 2600");
    assert_eq!(record.website, "https://tartinebakery.com");
    assert_eq!(record.cuisine, "Bakery");
    assert_eq!(record.notes, "Morning buns");
}

#[test]
fn normalize_row_is_idempotent() {
    let row = full_row();
    assert_eq!(normalize_row(&row, 4), normalize_row(&row, 4));
}

#[test]
fn normalize_row_defaults_everything_for_unrecognized_headers() {
    let row = RawRow::new().with("Rating", 4.5).with("Price", "$$");
    let record = normalize_row(&row, 2);
    assert_eq!(record.id, "2-Unnamed");
    assert_eq!(record.name, UNNAMED);
    assert!(record.address.is_empty());
    assert!(record.city.is_empty());
    assert!(record.state.is_empty());
    assert!(record.country.is_empty());
    assert!(record.phone.is_empty());
    assert!(record.website.is_empty());
    assert!(record.cuisine.is_empty());
    assert!(record.notes.is_empty());
    assert_eq!(record.lat, None);
    assert_eq!(record.lng, None);
}

#[test]
fn normalize_row_handles_an_empty_row() {
    let record = normalize_row(&RawRow::new(), 0);
    assert_eq!(record.name, UNNAMED);
    assert_eq!(record.id, "0-Unnamed");
}

#[test]
fn normalize_row_prefers_canonical_case_name() {
    let row = RawRow::new().with("name", "second").with("Name", "first");
    assert_eq!(normalize_row(&row, 0).name, "first");
}

#[test]
fn normalize_row_trims_text_fields() {
    let row = RawRow::new().with("Name", "  Zuni Café ").with("city", " SF ");
    let record = normalize_row(&row, 1);
    assert_eq!(record.name, "Zuni Café");
    assert_eq!(record.city, "SF");
    assert_eq!(record.id, "1-Zuni Café");
}

#[test]
fn normalize_row_stringifies_numeric_text_fields() {
    let row = RawRow::new().with("Name", 1969.0).with("Phone", 5_551_234.0);
    let record = normalize_row(&row, 0);
    assert_eq!(record.name, "1969");
    assert_eq!(record.phone, "5551234");
}

#[test]
fn normalize_row_blank_coordinates_are_none() {
    let row = RawRow::new()
        .with("Name", "A")
        .with("Latitude", "")
        .with("Longitude", CellValue::Empty);
    let record = normalize_row(&row, 0);
    assert_eq!(record.lat, None);
    assert_eq!(record.lng, None);
}

#[test]
fn normalize_row_keeps_half_geocoded_rows_unmappable() {
    let row = RawRow::new().with("lat", "12.5").with("lng", "east");
    let record = normalize_row(&row, 0);
    assert_eq!(record.lat, Some(12.5));
    assert_eq!(record.lng, None);
    assert!(!record.is_geocoded());
}

#[test]
fn duplicate_names_get_distinct_ids() {
    let row = RawRow::new().with("Name", "Same");
    assert_ne!(normalize_row(&row, 1).id, normalize_row(&row, 11).id);
}

// -----------------------------------------------------------------------
// normalize_rows
// -----------------------------------------------------------------------

#[test]
fn normalize_rows_keeps_every_row_in_order() {
    let rows = vec![
        RawRow::new().with("Name", "A"),
        RawRow::new(),
        RawRow::new().with("Name", "A"),
    ];
    let normalized = normalize_rows(&rows);
    let ids: Vec<&str> = normalized.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["0-A", "1-Unnamed", "2-A"]);
}

#[test]
fn normalize_rows_counts_unparsable_coordinates() {
    let rows = vec![
        RawRow::new().with("Latitude", "abc").with("Longitude", "2.0"),
        RawRow::new().with("Latitude", "").with("Longitude", "n/a"),
        RawRow::new().with("Latitude", "1,5").with("Longitude", 2.0),
    ];
    let normalized = normalize_rows(&rows);
    assert_eq!(normalized.coordinate_anomalies, 2);
    assert_eq!(normalized.records[2].lat, Some(1.5));
}

#[test]
fn normalize_rows_of_nothing_is_empty() {
    let normalized = normalize_rows(&[]);
    assert!(normalized.records.is_empty());
    assert_eq!(normalized.coordinate_anomalies, 0);
}
