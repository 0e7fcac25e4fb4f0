//! Lenient numeric coercion for coordinate cells.

use restomap_core::CellValue;

/// Coerces a cell to a finite float, tolerating a decimal comma.
///
/// The cell is stringified, its first `,` replaced with `.`, and the result
/// parsed. Anything that does not parse, or parses to NaN or an infinity,
/// yields `None`.
#[must_use]
pub fn safe_float(value: &CellValue) -> Option<f64> {
    let parsed = match value {
        CellValue::Number(n) => *n,
        other => other
            .to_text()
            .trim()
            .replacen(',', ".", 1)
            .parse::<f64>()
            .ok()?,
    };
    parsed.is_finite().then_some(parsed)
}
