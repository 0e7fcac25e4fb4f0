//! Free-text search over the searchable record fields.

use restomap_core::Record;

/// A trimmed, free-text query. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_string();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    /// The query as entered, minus surrounding whitespace.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if any of name, city, cuisine, state or country contains
    /// the query, ignoring case.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        if self.is_empty() {
            return true;
        }
        searchable_fields(record)
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

fn searchable_fields(record: &Record) -> [&str; 5] {
    [
        &record.name,
        &record.city,
        &record.cuisine,
        &record.state,
        &record.country,
    ]
}

/// Returns the records matching `query`, in their original order.
pub fn filter_records<'a, I>(records: I, query: &SearchQuery) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| query.matches(r)).collect()
}
