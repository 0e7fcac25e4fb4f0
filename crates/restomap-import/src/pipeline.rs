//! The import operation: payload → decoded rows → records.
//!
//! Decoding and normalization are CPU-bound, so the async entry point moves
//! them onto tokio's blocking pool. Either a complete record set comes back
//! or an error does; nothing partial is ever returned.

use chrono::{DateTime, Utc};
use restomap_core::{AppConfig, Record};
use serde::Serialize;
use tokio::task::JoinError;

use crate::decode::decode_first_sheet;
use crate::error::ImportDecodeError;
use crate::normalize::normalize_rows;
use crate::payload::{FilePayload, FormatHint};

/// Default cap on payload size: 25 MiB.
pub const DEFAULT_MAX_IMPORT_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    pub max_bytes: usize,
}

impl ImportOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_bytes: config.max_import_bytes,
        }
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_IMPORT_BYTES,
        }
    }
}

/// Summary of a successful import, suitable for a status line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub sheet_name: String,
    /// Non-blank data rows found below the header row.
    pub rows_decoded: usize,
    pub records: usize,
    /// Records with both coordinates present and finite.
    pub geocoded: usize,
    /// Non-empty coordinate cells that could not be parsed.
    pub coordinate_anomalies: usize,
    pub imported_at: DateTime<Utc>,
}

/// A complete, normalized record set together with its report.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub records: Vec<Record>,
    pub report: ImportReport,
}

/// Imports a payload on the current thread.
///
/// # Errors
///
/// Returns [`ImportDecodeError`] if the payload is empty, over the size
/// limit, or not a readable workbook.
pub fn import_payload_blocking(
    payload: &FilePayload,
    options: &ImportOptions,
) -> Result<ImportOutcome, ImportDecodeError> {
    if payload.is_empty() {
        return Err(ImportDecodeError::EmptyPayload);
    }
    if payload.len() > options.max_bytes {
        return Err(ImportDecodeError::TooLarge {
            size: payload.len(),
            limit: options.max_bytes,
        });
    }

    let sheet = decode_first_sheet(&payload.bytes, payload.hint)?;
    let normalized = normalize_rows(&sheet.rows);
    let geocoded = normalized
        .records
        .iter()
        .filter(|r| r.is_geocoded())
        .count();

    let report = ImportReport {
        sheet_name: sheet.sheet_name,
        rows_decoded: sheet.rows.len(),
        records: normalized.records.len(),
        geocoded,
        coordinate_anomalies: normalized.coordinate_anomalies,
        imported_at: Utc::now(),
    };

    Ok(ImportOutcome {
        records: normalized.records,
        report,
    })
}

/// Imports a payload on the blocking pool and awaits the result.
///
/// # Errors
///
/// Returns [`ImportDecodeError`] if the payload cannot be decoded or the
/// blocking task is lost.
pub async fn import_payload(
    payload: FilePayload,
    options: ImportOptions,
) -> Result<ImportOutcome, ImportDecodeError> {
    let size = payload.len();
    let hint = payload.hint;
    tracing::info!(bytes = size, format = ?hint, "starting spreadsheet import");

    let joined =
        tokio::task::spawn_blocking(move || import_payload_blocking(&payload, &options)).await;
    settle(joined, size, hint)
}

/// Folds a lost blocking task into the import result and logs the outcome.
fn settle(
    joined: Result<Result<ImportOutcome, ImportDecodeError>, JoinError>,
    size: usize,
    hint: Option<FormatHint>,
) -> Result<ImportOutcome, ImportDecodeError> {
    let result = match joined {
        Ok(result) => result,
        Err(e) => Err(ImportDecodeError::from(e)),
    };

    match &result {
        Ok(outcome) => tracing::info!(
            sheet = %outcome.report.sheet_name,
            records = outcome.report.records,
            geocoded = outcome.report.geocoded,
            coordinate_anomalies = outcome.report.coordinate_anomalies,
            "spreadsheet import complete"
        ),
        Err(e) => tracing::warn!(bytes = size, format = ?hint, error = %e, "spreadsheet import failed"),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_rejected() {
        let payload = FilePayload::from_bytes(Vec::new(), None);
        let err = import_payload_blocking(&payload, &ImportOptions::default()).unwrap_err();
        assert!(matches!(err, ImportDecodeError::EmptyPayload));
    }

    #[test]
    fn oversized_payload_is_rejected_before_decoding() {
        let payload = FilePayload::from_bytes(vec![0u8; 64], None);
        let err = import_payload_blocking(&payload, &ImportOptions { max_bytes: 16 }).unwrap_err();
        assert!(
            matches!(err, ImportDecodeError::TooLarge { size: 64, limit: 16 }),
            "got {err:?}"
        );
    }

    #[test]
    fn default_limit_is_twenty_five_mebibytes() {
        assert_eq!(ImportOptions::default().max_bytes, 26_214_400);
    }

    #[tokio::test]
    async fn unreadable_payload_surfaces_static_message() {
        let payload = FilePayload::from_bytes(b"name,city\nA,X\n".to_vec(), None);
        let err = import_payload(payload, ImportOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ImportDecodeError::Unreadable { .. }), "got {err:?}");
        assert!(err.user_message().starts_with("Failed to read that file"));
    }

    #[tokio::test]
    async fn lost_blocking_task_becomes_a_task_error() {
        let joined = tokio::task::spawn_blocking(|| -> Result<ImportOutcome, ImportDecodeError> {
            panic!("decoder crashed")
        })
        .await;
        assert!(joined.is_err());

        let err = settle(joined, 128, Some(FormatHint::Xls)).unwrap_err();
        assert!(matches!(err, ImportDecodeError::Task(_)), "got {err:?}");
        assert_eq!(err.user_message(), crate::error::IMPORT_FAILED_MESSAGE);
    }
}
