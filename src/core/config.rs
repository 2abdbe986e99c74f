//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.glyphgrid/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlyphgridConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub default_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Published character-grid document rendered when nothing else is given.
pub const DEFAULT_URL: &str = "https://docs.google.com/document/d/e/2PACX-1vQGUck9HIFCyezsrBSnmENk5ieJuYwpt7YHYEzeNJkIb9OSDdx-ov2nRNReKQyey-cwJOoEKUhLmN9z/pub";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE_NAME: &str = "glyphgrid.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub url: String,
    /// `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

/// Values supplied on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.glyphgrid`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".glyphgrid"))
}

/// Returns the path to `~/.glyphgrid/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.glyphgrid/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GlyphgridConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GlyphgridConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GlyphgridConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as `load_config`, for an explicit path.
pub fn load_config_from(path: &Path) -> Result<GlyphgridConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GlyphgridConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GlyphgridConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Glyphgrid Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "/tmp/glyphgrid.log"    # Defaults to ~/.glyphgrid/glyphgrid.log

# [source]
# default_url = "https://example.com/grid.txt"   # Or set GLYPHGRID_URL env var
# timeout_secs = 30                  # Unset = no timeout
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GlyphgridConfig, cli: &CliOverrides) -> ResolvedConfig {
    // URL: CLI → env → config → default
    let url = cli
        .url
        .clone()
        .or_else(|| std::env::var("GLYPHGRID_URL").ok())
        .or_else(|| config.source.default_url.clone())
        .unwrap_or_else(|| DEFAULT_URL.to_string());

    // Timeout: CLI → env → config → none
    let timeout = cli
        .timeout_secs
        .or_else(|| {
            std::env::var("GLYPHGRID_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.trim().parse().ok())
        })
        .or(config.source.timeout_secs)
        .map(Duration::from_secs);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("GLYPHGRID_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .map(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → ~/.glyphgrid/glyphgrid.log
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .or_else(|| config_dir().map(|d| d.join(DEFAULT_LOG_FILE_NAME)));

    ResolvedConfig {
        url,
        timeout,
        log_level,
        log_file,
    }
}

/// Creates (truncating) the log file, along with any missing parent directories.
pub fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::File::create(path)
}

/// Parses a level name, falling back to the default on anything unknown.
fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = GlyphgridConfig::default();
        assert!(config.source.default_url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GlyphgridConfig {
            general: GeneralConfig {
                log_level: Some("debug".to_string()),
                log_file: Some("/tmp/grid.log".to_string()),
            },
            source: SourceConfig {
                default_url: Some("http://example.com/doc.txt".to_string()),
                timeout_secs: Some(7),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        if std::env::var("GLYPHGRID_LOG_LEVEL").is_err() {
            assert_eq!(resolved.log_level, LevelFilter::Debug);
        }
        assert_eq!(resolved.log_file, Some(PathBuf::from("/tmp/grid.log")));
        if std::env::var("GLYPHGRID_URL").is_err() {
            assert_eq!(resolved.url, "http://example.com/doc.txt");
        }
        if std::env::var("GLYPHGRID_TIMEOUT_SECS").is_err() {
            assert_eq!(resolved.timeout, Some(Duration::from_secs(7)));
        }
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = GlyphgridConfig {
            source: SourceConfig {
                default_url: Some("http://config.example".to_string()),
                timeout_secs: Some(7),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            url: Some("http://cli.example".to_string()),
            timeout_secs: Some(2),
            log_level: Some("warn".to_string()),
            log_file: None,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.url, "http://cli.example");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(2)));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        assert_eq!(parse_level("loud"), DEFAULT_LOG_LEVEL);
        assert_eq!(parse_level(" TRACE "), LevelFilter::Trace);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
log_level = "warn"

[source]
default_url = "https://example.com/grid.txt"
timeout_secs = 30
"#;
        let config: GlyphgridConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("warn"));
        assert!(config.general.log_file.is_none());
        assert_eq!(
            config.source.default_url.as_deref(),
            Some("https://example.com/grid.txt")
        );
        assert_eq!(config.source.timeout_secs, Some(30));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[source]
timeout_secs = 5
"#;
        let config: GlyphgridConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.source.timeout_secs, Some(5));
        assert!(config.source.default_url.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("glyphgrid-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.source.default_url.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Glyphgrid Configuration"));

        // The generated file is all comments, so it loads back as defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.source.timeout_secs.is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("glyphgrid-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[source\ntimeout_secs = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("glyphgrid-log-{}", std::process::id()));
        let path = dir.join("nested").join("glyphgrid.log");
        let _ = fs::remove_dir_all(&dir);

        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_open_log_file_reports_unusable_parent() {
        let dir = std::env::temp_dir().join(format!("glyphgrid-log-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        // A regular file where the log directory should be.
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let result = open_log_file(&blocker.join("glyphgrid.log"));
        assert!(result.is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
