//! Grid configuration: per-breakpoint column counts, spacing and padding.
//!
//! Loadable from `grid.toml` (or JSON) for hosts that keep layout settings
//! outside code.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use rgrid_types::breakpoint::Breakpoint;
use rgrid_types::error::{GridError, Result};

/// Column count used for a breakpoint the mapping does not mention.
pub const FALLBACK_COLUMNS: i32 = 1;

/// Layout settings for a responsive grid.
///
/// Column counts are signed so a misconfigured zero or negative value
/// survives loading and is reported by the layout engine when its breakpoint
/// becomes active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfiguration {
    /// Columns per breakpoint. Missing entries use [`FALLBACK_COLUMNS`].
    #[serde(default = "default_columns", rename = "columns")]
    pub columns_for_breakpoint: BTreeMap<Breakpoint, i32>,
    /// Vertical gap between rows.
    #[serde(default = "default_spacing")]
    pub row_spacing: f32,
    /// Horizontal gap between columns.
    #[serde(default = "default_spacing")]
    pub column_spacing: f32,
    /// Inset applied on each side of the grid content.
    #[serde(default)]
    pub padding: f32,
}

fn default_columns() -> BTreeMap<Breakpoint, i32> {
    Breakpoint::ALL.iter().copied().zip(3..).collect()
}

fn default_spacing() -> f32 {
    1.0
}

impl Default for GridConfiguration {
    fn default() -> Self {
        Self {
            columns_for_breakpoint: default_columns(),
            row_spacing: default_spacing(),
            column_spacing: default_spacing(),
            padding: 0.0,
        }
    }
}

impl GridConfiguration {
    /// Column count for `bp`, defaulting to [`FALLBACK_COLUMNS`].
    pub fn columns(&self, bp: Breakpoint) -> i32 {
        self.columns_for_breakpoint
            .get(&bp)
            .copied()
            .unwrap_or(FALLBACK_COLUMNS)
    }

    /// Replace the whole breakpoint mapping.
    pub fn with_column_map(mut self, columns: impl IntoIterator<Item = (Breakpoint, i32)>) -> Self {
        self.columns_for_breakpoint = columns.into_iter().collect();
        self
    }

    pub fn with_columns(mut self, bp: Breakpoint, columns: i32) -> Self {
        self.columns_for_breakpoint.insert(bp, columns);
        self
    }

    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    pub fn with_column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Check that spacing and padding are finite and non-negative.
    ///
    /// Column counts are not checked here; a non-positive count is only an
    /// error once its breakpoint is laid out.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("row_spacing", self.row_spacing),
            ("column_spacing", self.column_spacing),
            ("padding", self.padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. `.json` files are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        log::info!("Loaded grid config: {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_columns_three_to_eight() {
        let config = GridConfiguration::default();
        let counts: Vec<i32> = Breakpoint::ALL.iter().map(|bp| config.columns(*bp)).collect();
        assert_eq!(counts, vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(config.row_spacing, 1.0);
        assert_eq!(config.column_spacing, 1.0);
        assert_eq!(config.padding, 0.0);
    }

    #[test]
    fn missing_breakpoint_defaults_to_one() {
        let config = GridConfiguration::default().with_column_map([(Breakpoint::Xs, 2)]);
        assert_eq!(config.columns(Breakpoint::Xs), 2);
        assert_eq!(config.columns(Breakpoint::Lg), 1);
    }

    #[test]
    fn builders_override_fields() {
        let config = GridConfiguration::default()
            .with_columns(Breakpoint::Md, 10)
            .with_row_spacing(4.0)
            .with_column_spacing(2.0)
            .with_padding(8.0);
        assert_eq!(config.columns(Breakpoint::Md), 10);
        assert_eq!(config.columns(Breakpoint::Sm), 4);
        assert_eq!(config.row_spacing, 4.0);
        assert_eq!(config.column_spacing, 2.0);
        assert_eq!(config.padding, 8.0);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = GridConfiguration::from_toml_str("").unwrap();
        assert_eq!(config, GridConfiguration::default());
    }

    #[test]
    fn toml_partial_columns_table() {
        let toml = r#"
            padding = 6.0
            column_spacing = 2.0

            [columns]
            xs = 1
            sm = 2
        "#;
        let config = GridConfiguration::from_toml_str(toml).unwrap();
        assert_eq!(config.columns(Breakpoint::Xs), 1);
        assert_eq!(config.columns(Breakpoint::Sm), 2);
        assert_eq!(config.columns(Breakpoint::Xxl), 1);
        assert_eq!(config.padding, 6.0);
        assert_eq!(config.column_spacing, 2.0);
        assert_eq!(config.row_spacing, 1.0);
    }

    #[test]
    fn toml_zero_columns_survive_loading() {
        let config = GridConfiguration::from_toml_str("[columns]\nmd = 0\n").unwrap();
        assert_eq!(config.columns(Breakpoint::Md), 0);
    }

    #[test]
    fn toml_unknown_breakpoint_rejected() {
        let err = GridConfiguration::from_toml_str("[columns]\nhuge = 3\n").unwrap_err();
        assert!(matches!(err, GridError::TomlParse(_)));
    }

    #[test]
    fn toml_syntax_error() {
        let err = GridConfiguration::from_toml_str("padding = ").unwrap_err();
        assert!(matches!(err, GridError::TomlParse(_)));
    }

    #[test]
    fn negative_padding_rejected() {
        let err = GridConfiguration::from_toml_str("padding = -4.0").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
        assert!(format!("{err}").contains("padding"));
    }

    #[test]
    fn validate_rejects_nan_spacing() {
        let config = GridConfiguration::default().with_row_spacing(f32::NAN);
        assert!(config.validate().is_err());
        assert!(GridConfiguration::default().validate().is_ok());
    }

    #[test]
    fn json_config() {
        let json = r#"{"columns": {"xs": 1, "xxl": 12}, "padding": 3.5}"#;
        let config = GridConfiguration::from_json_str(json).unwrap();
        assert_eq!(config.columns(Breakpoint::Xs), 1);
        assert_eq!(config.columns(Breakpoint::Xxl), 12);
        assert_eq!(config.columns(Breakpoint::Md), 1);
        assert_eq!(config.padding, 3.5);
    }

    #[test]
    fn json_serialization_round_trips() {
        let config = GridConfiguration::default().with_padding(2.0);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"xxl\":8"));
        assert_eq!(GridConfiguration::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.toml");
        std::fs::write(&path, "[columns]\nxs = 2\n").unwrap();
        let config = GridConfiguration::load(&path).unwrap();
        assert_eq!(config.columns(Breakpoint::Xs), 2);
    }

    #[test]
    fn load_json_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.JSON");
        std::fs::write(&path, r#"{"row_spacing": 0.0}"#).unwrap();
        let config = GridConfiguration::load(&path).unwrap();
        assert_eq!(config.row_spacing, 0.0);
        assert_eq!(config.columns(Breakpoint::Sm), 4);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GridConfiguration::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)));
    }
}
