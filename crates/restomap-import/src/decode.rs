//! First-sheet decoding with `calamine`.
//!
//! The first row of the used range is the header row; every following
//! non-blank row becomes a [`RawRow`] carrying one cell per header.

use std::collections::{HashMap, HashSet};
use std::io::Cursor;

use calamine::{
    open_workbook_auto_from_rs, Data, ExcelDateTime, Ods, Range, Reader, Xls, Xlsb, Xlsx,
};
use chrono::NaiveTime;
use restomap_core::{CellValue, RawRow};

use crate::error::ImportDecodeError;
use crate::payload::FormatHint;

/// Name given to header cells that are blank.
const EMPTY_HEADER: &str = "__EMPTY";

type Source<'a> = Cursor<&'a [u8]>;

/// Rows decoded from the first sheet of a workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSheet {
    pub sheet_name: String,
    /// Column names in sheet order, after blank/duplicate disambiguation.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Decodes the first sheet of a workbook held in memory.
///
/// When `hint` is `None` the container format is sniffed from the bytes.
///
/// # Errors
///
/// Returns [`ImportDecodeError::Unreadable`] if the bytes are not a workbook
/// of the hinted (or any recognised) format, and
/// [`ImportDecodeError::NoSheets`] if the workbook has no worksheet.
pub fn decode_first_sheet(
    bytes: &[u8],
    hint: Option<FormatHint>,
) -> Result<DecodedSheet, ImportDecodeError> {
    let source = Cursor::new(bytes);
    let (sheet_name, range) = match hint {
        Some(format @ FormatHint::Xlsx) => load_first::<Xlsx<Source<'_>>>(source, format)?,
        Some(format @ FormatHint::Xls) => load_first::<Xls<Source<'_>>>(source, format)?,
        Some(format @ FormatHint::Xlsb) => load_first::<Xlsb<Source<'_>>>(source, format)?,
        Some(format @ FormatHint::Ods) => load_first::<Ods<Source<'_>>>(source, format)?,
        None => {
            let workbook =
                open_workbook_auto_from_rs(source).map_err(|e| unreadable("spreadsheet", &e))?;
            first_sheet(workbook, "spreadsheet")?
        }
    };

    let (headers, rows) = rows_from_range(&range);
    tracing::debug!(
        sheet = %sheet_name,
        columns = headers.len(),
        rows = rows.len(),
        "decoded first sheet"
    );

    Ok(DecodedSheet {
        sheet_name,
        headers,
        rows,
    })
}

fn load_first<'a, R>(
    source: Source<'a>,
    format: FormatHint,
) -> Result<(String, Range<Data>), ImportDecodeError>
where
    R: Reader<Source<'a>>,
    R::Error: std::fmt::Display,
{
    let workbook = R::new(source).map_err(|e| unreadable(format, &e))?;
    first_sheet(workbook, format)
}

fn first_sheet<'a, R>(
    mut workbook: R,
    format: impl std::fmt::Display,
) -> Result<(String, Range<Data>), ImportDecodeError>
where
    R: Reader<Source<'a>>,
    R::Error: std::fmt::Display,
{
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportDecodeError::NoSheets)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportDecodeError::NoSheets)?
        .map_err(|e| unreadable(format, &e))?;
    Ok((sheet_name, range))
}

fn unreadable(format: impl std::fmt::Display, err: &impl std::fmt::Display) -> ImportDecodeError {
    ImportDecodeError::Unreadable {
        format: format.to_string(),
        reason: err.to_string(),
    }
}

/// Splits a used range into disambiguated headers and non-blank data rows.
fn rows_from_range(range: &Range<Data>) -> (Vec<String>, Vec<RawRow>) {
    let mut sheet_rows = range.rows();
    let Some(header_cells) = sheet_rows.next() else {
        return (Vec::new(), Vec::new());
    };
    let headers = header_names(header_cells);

    let mut skipped = 0usize;
    let rows = sheet_rows
        .filter_map(|cells| {
            let row: RawRow = headers
                .iter()
                .enumerate()
                .map(|(col, header)| {
                    let value = cells.get(col).map(cell_value).unwrap_or_default();
                    (header.clone(), value)
                })
                .collect();
            if row.is_blank() {
                skipped += 1;
                None
            } else {
                Some(row)
            }
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(skipped, "skipped blank rows");
    }
    (headers, rows)
}

/// Turns header cells into unique column names.
///
/// Blank headers become `__EMPTY`; repeats of a name get `_1`, `_2`, … so the
/// first occurrence keeps the bare name.
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();

    cells
        .iter()
        .map(|cell| {
            let text = cell_value(cell).to_text();
            let base = match text.trim() {
                "" => EMPTY_HEADER.to_string(),
                trimmed => trimmed.to_string(),
            };
            let mut name = base.clone();
            while used.contains(&name) {
                let n = repeats.entry(base.clone()).or_insert(0);
                *n += 1;
                name = format!("{base}_{n}");
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::String(v) => CellValue::Text(v.clone()),
        Data::DateTime(v) => datetime_value(v),
        Data::DateTimeIso(v) | Data::DurationIso(v) => CellValue::Text(v.clone()),
    }
}

/// Renders a date-formatted cell as text: `2024-03-15`, `2024-03-15 18:30:00`,
/// `18:30:00` for a bare time, or `[h]:mm:ss` for a duration.
fn datetime_value(v: &ExcelDateTime) -> CellValue {
    if v.is_duration() {
        if let Some(duration) = v.as_duration() {
            let secs = duration.num_seconds();
            let sign = if secs < 0 { "-" } else { "" };
            let secs = secs.unsigned_abs();
            return CellValue::Text(format!(
                "{sign}{}:{:02}:{:02}",
                secs / 3600,
                secs / 60 % 60,
                secs % 60
            ));
        }
    }
    match v.as_datetime() {
        Some(dt) if v.as_f64().abs() < 1.0 => CellValue::Text(dt.format("%H:%M:%S").to_string()),
        Some(dt) if dt.time() == NaiveTime::MIN => {
            CellValue::Text(dt.format("%Y-%m-%d").to_string())
        }
        Some(dt) => CellValue::Text(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        None => CellValue::Number(v.as_f64()),
    }
}
