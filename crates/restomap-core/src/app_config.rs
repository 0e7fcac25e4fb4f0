#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Camera-framing constants used when projecting records onto a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    /// Slippy-map zoom level used when exactly one record is visible.
    pub center_zoom: f64,
    /// Symmetric edge padding, in screen pixels, for multi-record fits.
    pub fit_padding_px: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_zoom: 14.0,
            fit_padding_px: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub map: MapSettings,
    /// Payloads larger than this are rejected before decoding.
    pub max_import_bytes: usize,
}
