//! Header aliases for each canonical record field.

use restomap_core::{CellValue, RawRow};

/// Canonical fields a spreadsheet column can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Address,
    City,
    State,
    Country,
    Latitude,
    Longitude,
    Phone,
    Website,
    Cuisine,
    Notes,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Address,
        Field::City,
        Field::State,
        Field::Country,
        Field::Latitude,
        Field::Longitude,
        Field::Phone,
        Field::Website,
        Field::Cuisine,
        Field::Notes,
    ];

    /// Header names accepted for this field, highest priority first.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Name => &["Name", "name", "Title"],
            Field::Address => &["Address", "address"],
            Field::City => &["City", "city"],
            Field::State => &["State", "state"],
            Field::Country => &["Country", "country"],
            Field::Latitude => &["Latitude", "latitude", "lat"],
            Field::Longitude => &["Longitude", "longitude", "lng"],
            Field::Phone => &["Phone", "phone"],
            Field::Website => &["Website", "website"],
            Field::Cuisine => &["Cuisine", "cuisine"],
            Field::Notes => &["Notes", "notes"],
        }
    }
}

/// Finds the cell feeding `field`, skipping blank cells.
///
/// Exact header matches are tried over the whole alias list first, in
/// priority order; only then are headers compared case-insensitively (so
/// `NAME` or `LATITUDE` still resolve). Returns `None` when no alias carries
/// a non-blank value.
#[must_use]
pub fn resolve(row: &RawRow, field: Field) -> Option<&CellValue> {
    let aliases = field.aliases();

    let exact = aliases.iter().find_map(|alias| {
        row.iter()
            .find(|(header, value)| header == alias && !value.is_blank())
            .map(|(_, value)| value)
    });
    if exact.is_some() {
        return exact;
    }

    aliases.iter().find_map(|alias| {
        row.iter()
            .find(|(header, value)| header.trim().eq_ignore_ascii_case(alias) && !value.is_blank())
            .map(|(_, value)| value)
    })
}
