use std::sync::Arc;

use restomap_core::{MapSettings, Record};

use crate::geo::MapView;
use crate::search::{filter_records, SearchQuery};

/// The loaded record set and the current search query.
///
/// These are the only two inputs; the list and map views are recomputed from
/// them on every call and never stored. Records sit behind an `Arc` so
/// snapshots are cheap to clone and never observe a partially replaced set.
#[derive(Debug, Clone)]
pub struct ViewState {
    records: Arc<[Record]>,
    query: SearchQuery,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ViewState {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: Arc::from(records),
            query: SearchQuery::default(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Replaces the whole record set. The query is kept.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.records = Arc::from(records);
    }

    pub fn set_query(&mut self, raw: &str) {
        self.query = SearchQuery::new(raw);
    }

    /// Records for the list presentation.
    #[must_use]
    pub fn list_view(&self) -> Vec<&Record> {
        filter_records(self.records.iter(), &self.query)
    }

    /// Markers and camera framing for the map presentation.
    #[must_use]
    pub fn map_view(&self, settings: &MapSettings) -> MapView<'_> {
        MapView::project(&self.records, &self.query, settings)
    }
}
