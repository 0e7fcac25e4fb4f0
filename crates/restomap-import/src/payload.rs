//! Raw file payloads handed over by the file-picking collaborator.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::error::ImportDecodeError;

/// Spreadsheet container formats the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    /// Office Open XML workbook (`.xlsx`, `.xlsm`).
    Xlsx,
    /// Legacy BIFF workbook (`.xls`).
    Xls,
    /// Binary Office Open XML workbook (`.xlsb`).
    Xlsb,
    /// OpenDocument spreadsheet (`.ods`).
    Ods,
}

impl FormatHint {
    /// Maps a MIME type to a format. Parameters after `;` are ignored.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            | "application/vnd.ms-excel.sheet.macroenabled.12" => Some(Self::Xlsx),
            "application/vnd.ms-excel" | "application/msexcel" | "application/x-msexcel" => {
                Some(Self::Xls)
            }
            "application/vnd.ms-excel.sheet.binary.macroenabled.12" => Some(Self::Xlsb),
            "application/vnd.oasis.opendocument.spreadsheet" => Some(Self::Ods),
            _ => None,
        }
    }

    /// Maps a file extension (with or without the leading dot) to a format.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "xlsx" | "xlsm" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            "xlsb" => Some(Self::Xlsb),
            "ods" => Some(Self::Ods),
            _ => None,
        }
    }

    /// Maps a file name or path to a format by its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for FormatHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatHint::Xlsx => write!(f, "xlsx"),
            FormatHint::Xls => write!(f, "xls"),
            FormatHint::Xlsb => write!(f, "xlsb"),
            FormatHint::Ods => write!(f, "ods"),
        }
    }
}

/// The bytes of one selected file plus an optional format hint.
///
/// Without a hint the format is sniffed from the bytes.
#[derive(Debug, Clone)]
pub struct FilePayload {
    pub bytes: Vec<u8>,
    pub hint: Option<FormatHint>,
}

impl FilePayload {
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>, hint: Option<FormatHint>) -> Self {
        Self { bytes, hint }
    }

    /// Decodes base64 text as delivered by webview and mobile file pickers.
    ///
    /// Accepts a `data:<mime>;base64,` URL prefix; when present and no hint is
    /// given, the MIME type becomes the hint. Embedded whitespace and line
    /// breaks are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ImportDecodeError::InvalidBase64`] if the text is not valid
    /// standard base64.
    pub fn from_base64(text: &str, hint: Option<FormatHint>) -> Result<Self, ImportDecodeError> {
        let (mime, body) = split_data_url(text.trim());
        let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64.decode(compact.as_bytes())?;
        let hint = hint.or_else(|| mime.and_then(FormatHint::from_mime));
        Ok(Self { bytes, hint })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Splits `data:<mime>;base64,<body>` into its MIME type and body.
fn split_data_url(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix("data:") else {
        return (None, text);
    };
    match rest.split_once(',') {
        Some((meta, body)) => {
            let mime = meta.split(';').next().filter(|m| !m.is_empty());
            (mime, body)
        }
        None => (None, text),
    }
}
