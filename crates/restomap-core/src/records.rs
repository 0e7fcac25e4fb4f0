use serde::{Deserialize, Serialize};

/// Name given to rows that carry no usable name cell.
pub const UNNAMED: &str = "Unnamed";

/// A restaurant imported from a spreadsheet row, fully defaulted.
///
/// Every string field is present (possibly empty). Only `lat` and `lng` may
/// be absent, and when present they are always finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Row position joined with the resolved name, e.g. `"3-Pizza Place"`.
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub phone: String,
    pub website: String,
    pub cuisine: String,
    pub notes: String,
}

impl Record {
    /// Returns the record's position when both coordinates are finite.
    #[must_use]
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.lat?, self.lng?)
    }

    /// Returns `true` if the record can be placed on a map.
    #[must_use]
    pub fn is_geocoded(&self) -> bool {
        self.coordinate().is_some()
    }
}

/// A finite latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting NaN and infinities.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        (lat.is_finite() && lng.is_finite()).then_some(Self { lat, lng })
    }
}
