//! Normalization from decoded [`RawRow`]s to canonical [`Record`]s.
//!
//! Field lookup is delegated to [`crate::aliases`] and coordinate parsing to
//! [`crate::coerce`]; this module assembles the defaulted record.

use restomap_core::{RawRow, Record, UNNAMED};

use crate::aliases::{resolve, Field};
use crate::coerce::safe_float;

/// Records built from a batch of rows, plus coercion bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRows {
    pub records: Vec<Record>,
    /// Non-empty coordinate cells that could not be parsed as numbers.
    pub coordinate_anomalies: usize,
}

/// Normalizes one row at zero-based position `idx` into a [`Record`].
///
/// Never fails: missing text fields become empty strings, a missing name
/// becomes [`UNNAMED`], and unparsable coordinates become `None`.
#[must_use]
pub fn normalize_row(row: &RawRow, idx: usize) -> Record {
    let name = match text(row, Field::Name) {
        name if name.is_empty() => UNNAMED.to_string(),
        name => name,
    };

    Record {
        id: format!("{idx}-{name}"),
        address: text(row, Field::Address),
        city: text(row, Field::City),
        state: text(row, Field::State),
        country: text(row, Field::Country),
        lat: coordinate(row, Field::Latitude),
        lng: coordinate(row, Field::Longitude),
        phone: text(row, Field::Phone),
        website: text(row, Field::Website),
        cuisine: text(row, Field::Cuisine),
        notes: text(row, Field::Notes),
        name,
    }
}

/// Normalizes rows in sheet order; row `i` gets position `i`.
#[must_use]
pub fn normalize_rows(rows: &[RawRow]) -> NormalizedRows {
    let mut coordinate_anomalies = 0usize;

    let records = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            for field in [Field::Latitude, Field::Longitude] {
                if let Some(raw) = resolve(row, field).filter(|v| safe_float(v).is_none()) {
                    coordinate_anomalies += 1;
                    tracing::debug!(
                        row = idx,
                        field = ?field,
                        value = %raw.to_text(),
                        "coordinate cell is not a number; leaving it empty"
                    );
                }
            }
            normalize_row(row, idx)
        })
        .collect();

    NormalizedRows {
        records,
        coordinate_anomalies,
    }
}

fn text(row: &RawRow, field: Field) -> String {
    resolve(row, field)
        .map(|value| value.to_text().trim().to_string())
        .unwrap_or_default()
}

fn coordinate(row: &RawRow, field: Field) -> Option<f64> {
    resolve(row, field).and_then(safe_float)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
