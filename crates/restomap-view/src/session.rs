//! Shared view state for a running application.
//!
//! Imports decode off the lock and only take the write lock to swap in a
//! finished record set, so readers never see a half-imported sheet. A failed
//! import leaves the previous records and generation untouched.

use restomap_core::{AppConfig, MapSettings};
use restomap_import::{import_payload, FilePayload, ImportDecodeError, ImportOptions, ImportReport};
use tokio::sync::RwLock;

use crate::state::ViewState;

#[derive(Debug, Default)]
struct Inner {
    view: ViewState,
    /// Bumped on every successful import.
    generation: u64,
}

#[derive(Debug)]
pub struct ViewSession {
    inner: RwLock<Inner>,
    settings: MapSettings,
    options: ImportOptions,
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new(MapSettings::default(), ImportOptions::default())
    }
}

impl ViewSession {
    #[must_use]
    pub fn new(settings: MapSettings, options: ImportOptions) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            settings,
            options,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.map, ImportOptions::from_config(config))
    }

    #[must_use]
    pub fn map_settings(&self) -> &MapSettings {
        &self.settings
    }

    /// Imports `payload` and, on success, replaces every loaded record.
    ///
    /// # Errors
    ///
    /// Returns [`ImportDecodeError`] if the payload cannot be imported. The
    /// session is unchanged in that case.
    pub async fn import(&self, payload: FilePayload) -> Result<ImportReport, ImportDecodeError> {
        let outcome = import_payload(payload, self.options).await?;

        let mut inner = self.inner.write().await;
        inner.view.replace_records(outcome.records);
        inner.generation += 1;
        tracing::debug!(
            generation = inner.generation,
            records = outcome.report.records,
            "record set replaced"
        );
        Ok(outcome.report)
    }

    pub async fn set_query(&self, raw: &str) {
        self.inner.write().await.view.set_query(raw);
    }

    /// A consistent copy of the records and query at this instant.
    pub async fn snapshot(&self) -> ViewState {
        self.inner.read().await.view.clone()
    }

    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }
}
