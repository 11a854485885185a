//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.splitnest/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A color scheme can be supplied as a separate JSON document (see
//! `core::theme`).

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::builder::{LayoutOptions, TitlePolicy};
use crate::core::content::ContentKind;
use crate::core::theme::{ColorScheme, ThemeError};
use crate::core::tree::Orientation;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SplitnestConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub pane_count: Option<usize>,
    pub horizontal: Option<bool>,
    pub border: Option<bool>,
    pub titles: Option<bool>,
    pub use_labels: Option<bool>,
    pub max_panes: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Path to a color scheme JSON file, relative to `~/.splitnest/`.
    pub color_scheme_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PANE_COUNT: usize = 2;
pub const DEFAULT_MAX_PANES: usize = 256;

// ============================================================================
// CLI overrides
// ============================================================================

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub panes: Option<usize>,
    pub horizontal: bool,
    pub border: bool,
    pub titles: bool,
    pub labels: bool,
    pub color_scheme: Option<PathBuf>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub layout: LayoutOptions,
    pub max_panes: usize,
    pub color_scheme: ColorScheme,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Theme(ThemeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Theme(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.splitnest/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".splitnest"))
}

/// Returns the path to `~/.splitnest/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.splitnest/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SplitnestConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SplitnestConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SplitnestConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SplitnestConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<SplitnestConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Read and decode a color scheme JSON file.
pub fn load_color_scheme(path: &Path) -> Result<ColorScheme, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let scheme = ColorScheme::from_json(&contents).map_err(ConfigError::Theme)?;
    info!("Loaded color scheme from {}", path.display());
    Ok(scheme)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Splitnest Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [layout]
# pane_count = 2          # Or set SPLITNEST_PANES env var
# horizontal = false      # Root split stacks panes top/bottom
# border = false
# titles = false          # "View 1", "View 2", ...
# use_labels = false      # Single-line labels instead of text areas
# max_panes = 256

# [theme]
# color_scheme_file = "scheme.json"   # Path relative to ~/.splitnest/
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SplitnestConfig, cli: &CliOverrides) -> ResolvedConfig {
    let layout = &config.layout;

    // Pane count: CLI → env → config → default
    let pane_count = cli
        .panes
        .or_else(env_pane_count)
        .or(layout.pane_count)
        .unwrap_or(DEFAULT_PANE_COUNT);

    // Flags: CLI can only switch on what the file left off
    let horizontal = cli.horizontal || layout.horizontal.unwrap_or(false);
    let border = cli.border || layout.border.unwrap_or(false);
    let titles = cli.titles || layout.titles.unwrap_or(false);
    let use_labels = cli.labels || layout.use_labels.unwrap_or(false);

    let max_panes = layout.max_panes.unwrap_or(DEFAULT_MAX_PANES);
    if pane_count > max_panes {
        warn!("Pane count {} exceeds max_panes {}, clamping", pane_count, max_panes);
    }

    ResolvedConfig {
        layout: LayoutOptions {
            pane_count: pane_count.min(max_panes),
            orientation: if horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            },
            border,
            titles: TitlePolicy::from_enabled(titles),
            content_kind: if use_labels {
                ContentKind::Label
            } else {
                ContentKind::TextArea
            },
        },
        max_panes,
        color_scheme: resolve_color_scheme(config, cli),
    }
}

fn env_pane_count() -> Option<usize> {
    let raw = std::env::var("SPLITNEST_PANES").ok()?;
    match raw.trim().parse() {
        Ok(count) => Some(count),
        Err(e) => {
            warn!("Ignoring SPLITNEST_PANES={:?}: {}", raw, e);
            None
        }
    }
}

/// Resolves the color scheme: CLI path → env path → config file entry → base scheme.
/// A scheme that fails to load is logged and replaced by the base scheme.
fn resolve_color_scheme(config: &SplitnestConfig, cli: &CliOverrides) -> ColorScheme {
    let path = cli
        .color_scheme
        .clone()
        .or_else(|| std::env::var("SPLITNEST_COLOR_SCHEME").ok().map(PathBuf::from))
        .or_else(|| {
            let file = config.theme.color_scheme_file.as_ref()?;
            config_dir().map(|dir| dir.join(file))
        });

    let Some(path) = path else {
        return ColorScheme::base();
    };

    match load_color_scheme(&path) {
        Ok(scheme) => scheme,
        Err(e) => {
            warn!("Failed to load color scheme {}: {}", path.display(), e);
            ColorScheme::base()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::{Attribute, Color};

    #[test]
    fn test_default_config_parses() {
        let config = SplitnestConfig::default();
        assert!(config.layout.pane_count.is_none());
        assert!(config.theme.color_scheme_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = SplitnestConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.layout, LayoutOptions::default());
        assert_eq!(resolved.max_panes, DEFAULT_MAX_PANES);
        assert_eq!(resolved.color_scheme, ColorScheme::base());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SplitnestConfig {
            layout: LayoutConfig {
                pane_count: Some(6),
                horizontal: Some(true),
                border: Some(true),
                titles: Some(true),
                use_labels: Some(true),
                max_panes: Some(10),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.layout.orientation, Orientation::Horizontal);
        assert!(resolved.layout.border);
        assert_eq!(resolved.layout.titles, TitlePolicy::Numbered);
        assert_eq!(resolved.layout.content_kind, ContentKind::Label);
        assert_eq!(resolved.max_panes, 10);
    }

    #[test]
    fn test_resolve_cli_panes_win() {
        let config = SplitnestConfig {
            layout: LayoutConfig {
                pane_count: Some(6),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            panes: Some(3),
            titles: true,
            ..Default::default()
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.layout.pane_count, 3);
        assert_eq!(resolved.layout.titles, TitlePolicy::Numbered);
    }

    #[test]
    fn test_resolve_clamps_to_max_panes() {
        let config = SplitnestConfig {
            layout: LayoutConfig {
                max_panes: Some(8),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            panes: Some(50),
            ..Default::default()
        };
        assert_eq!(resolve(&config, &cli).layout.pane_count, 8);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[layout]
pane_count = 5
horizontal = true
border = false
titles = true
max_panes = 64

[theme]
color_scheme_file = "dark.json"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.layout.pane_count, Some(5));
        assert_eq!(config.layout.horizontal, Some(true));
        assert_eq!(config.layout.use_labels, None);
        assert_eq!(config.layout.max_panes, Some(64));
        assert_eq!(config.theme.color_scheme_file.as_deref(), Some("dark.json"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let config = parse_config("[layout]\nborder = true\n").unwrap();
        assert_eq!(config.layout.border, Some(true));
        assert!(config.layout.pane_count.is_none());
        assert!(config.theme.color_scheme_file.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[layout]\npane_count = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_scheme_file_falls_back_to_base() {
        let cli = CliOverrides {
            color_scheme: Some(PathBuf::from("/nonexistent/splitnest/scheme.json")),
            ..Default::default()
        };
        let resolved = resolve(&SplitnestConfig::default(), &cli);
        assert_eq!(resolved.color_scheme, ColorScheme::base());
    }

    #[test]
    fn test_load_color_scheme_from_file() {
        let path = std::env::temp_dir().join(format!("splitnest-scheme-{}.json", std::process::id()));
        fs::write(&path, r#"{ "Normal": { "Foreground": "Green", "Background": "Black" } }"#).unwrap();

        let scheme = load_color_scheme(&path).unwrap();
        assert_eq!(scheme.normal, Attribute::new(Color::Green, Color::Black));

        fs::write(&path, r#"{ "Bogus": {} }"#).unwrap();
        assert!(matches!(load_color_scheme(&path), Err(ConfigError::Theme(_))));

        let _ = fs::remove_file(&path);
    }
}
