//! Grid configuration.

use serde::Deserialize;
use serde::Serialize;

/// Tunables for a grid instance.
///
/// Every field has a default, so hosts only spell out what they change.
///
/// # Example
///
/// ```
/// use datagrid::GridConfig;
///
/// let config: GridConfig = serde_json::from_str(r#"{ "enableRowSelection": true }"#).unwrap();
/// assert!(config.enable_row_selection);
/// assert_eq!(config.min_width_floor, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    /// Initial width of a column without a minimum.
    pub default_width: f64,
    /// Lowest width a resize can reach on a column without a minimum.
    pub min_width_floor: f64,
    /// Width assumed when neither a width entry nor a minimum exists.
    pub fallback_width: f64,
    /// When off, every selection entry point is a no-op.
    pub enable_row_selection: bool,
    /// Whether the per-column actions menu is offered.
    pub show_column_actions: bool,
    /// Number of stars in the rating editor.
    pub max_rating: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_width: 100.0,
            min_width_floor: 50.0,
            fallback_width: 150.0,
            enable_row_selection: false,
            show_column_actions: true,
            max_rating: 5,
        }
    }
}

impl GridConfig {
    pub fn with_row_selection(mut self) -> Self {
        self.enable_row_selection = true;
        self
    }
}
