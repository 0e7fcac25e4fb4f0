//! Untyped spreadsheet rows, as produced by the decoder and consumed by the
//! normalizer.

use serde::{Deserialize, Serialize};

/// A single decoded cell.
///
/// Missing cells are represented as [`CellValue::Empty`] rather than being
/// absent from the row, so header lookups never have to special-case holes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// Returns `true` for empty cells and text cells holding only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    /// Stringifies the cell the way a spreadsheet shows it in plain text:
    /// integral numbers lose their fractional part (`12.0` → `"12"`).
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One data row of the first sheet, keyed by header text.
///
/// Cells keep the column order of the sheet. Every header of the sheet is
/// present on every decoded row; rows built by hand may carry any subset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell, builder style.
    #[must_use]
    pub fn with(mut self, header: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(header, value);
        self
    }

    pub fn push(&mut self, header: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((header.into(), value.into()));
    }

    /// Exact-match lookup by header.
    #[must_use]
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` when no cell carries a non-blank value.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_blank())
    }
}

impl<H: Into<String>, V: Into<CellValue>> FromIterator<(H, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(h, v)| (h.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_text_drops_fraction_on_integral_numbers() {
        assert_eq!(CellValue::Number(12.0).to_text(), "12");
        assert_eq!(CellValue::Number(12.5).to_text(), "12.5");
        assert_eq!(CellValue::Number(-122.42).to_text(), "-122.42");
    }

    #[test]
    fn to_text_renders_bools_and_empty() {
        assert_eq!(CellValue::Bool(true).to_text(), "true");
        assert_eq!(CellValue::Empty.to_text(), "");
    }

    #[test]
    fn whitespace_text_is_blank() {
        assert!(CellValue::Text("   ".into()).is_blank());
        assert!(!CellValue::Text(" a ".into()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn get_is_exact_match_and_preserves_order() {
        let row = RawRow::new().with("Name", "A").with("name", "b");
        assert_eq!(row.get("Name"), Some(&CellValue::Text("A".into())));
        assert_eq!(row.get("name"), Some(&CellValue::Text("b".into())));
        assert_eq!(row.get("NAME"), None);
        let headers: Vec<&str> = row.iter().map(|(h, _)| h).collect();
        assert_eq!(headers, vec!["Name", "name"]);
    }

    #[test]
    fn row_of_empty_cells_is_blank() {
        let row: RawRow = vec![("A", CellValue::Empty), ("B", CellValue::from(" "))]
            .into_iter()
            .collect();
        assert!(row.is_blank());
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn cell_value_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            CellValue::Empty,
            CellValue::Number(1.5),
            CellValue::Text("x".into()),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,1.5,"x"]"#);
    }
}
