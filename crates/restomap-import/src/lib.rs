//! Spreadsheet import: payload handling, first-sheet decoding, and
//! normalization of loosely-structured rows into canonical [`Record`]s.
//!
//! [`Record`]: restomap_core::Record

pub mod aliases;
pub mod coerce;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod payload;
pub mod pipeline;

pub use decode::{decode_first_sheet, DecodedSheet};
pub use error::ImportDecodeError;
pub use normalize::{normalize_row, normalize_rows};
pub use payload::{FilePayload, FormatHint};
pub use pipeline::{import_payload, import_payload_blocking, ImportOptions, ImportOutcome, ImportReport};
