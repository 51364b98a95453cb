//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.notes/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::DEFAULT_TAB_WIDTH;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotesConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub tab_width: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_FILE_NAME: &str = "noteData.json";
pub const DEFAULT_LOG_FILE_NAME: &str = "notes.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const CONFIG_DIR_NAME: &str = ".notes";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub tab_width: usize,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
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

/// Returns `~/.notes/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR_NAME))
}

/// Returns the path to `~/.notes/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.notes/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NotesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NotesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NotesConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path, with the same first-run behavior as
/// [`load_config`].
pub fn load_config_from(path: &Path) -> Result<NotesConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(NotesConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NotesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Notes Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [storage]
# data_file = "~/noteData.json"      # Or set NOTES_DATA_FILE, or pass --data-file

# [editor]
# tab_width = 4                      # Spaces inserted by the Tab key

# [log]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "~/.notes/notes.log"        # Or set NOTES_LOG_LEVEL for the level
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
///
/// `cli_data_file` comes from the `--data-file` flag (None = not specified).
pub fn resolve(config: &NotesConfig, cli_data_file: Option<&Path>) -> ResolvedConfig {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

    // Data file: CLI → env → config → default
    let data_file = cli_data_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("NOTES_DATA_FILE").ok().map(|p| expand_home(&p, &home)))
        .or_else(|| config.storage.data_file.as_deref().map(|p| expand_home(p, &home)))
        .unwrap_or_else(|| home.join(DEFAULT_DATA_FILE_NAME));

    // Log level: env → config → default
    let log_level = std::env::var("NOTES_LOG_LEVEL")
        .ok()
        .or_else(|| config.log.level.clone())
        .map(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .log
        .file
        .as_deref()
        .map(|p| expand_home(p, &home))
        .unwrap_or_else(|| home.join(CONFIG_DIR_NAME).join(DEFAULT_LOG_FILE_NAME));

    let tab_width = match config.editor.tab_width {
        Some(0) => {
            warn!("tab_width = 0 is not usable, falling back to {}", DEFAULT_TAB_WIDTH);
            DEFAULT_TAB_WIDTH
        }
        Some(width) => width,
        None => DEFAULT_TAB_WIDTH,
    };

    ResolvedConfig {
        data_file,
        tab_width,
        log_level,
        log_file,
    }
}

/// Parse a level name, falling back to the default for anything unknown.
fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = NotesConfig::default();
        assert!(config.storage.data_file.is_none());
        assert!(config.editor.tab_width.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = NotesConfig::default();
        let resolved = resolve(&config, Some(Path::new("/tmp/notes.json")));
        assert_eq!(resolved.tab_width, DEFAULT_TAB_WIDTH);
        assert!(resolved.log_file.ends_with("notes.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = NotesConfig {
            editor: EditorConfig { tab_width: Some(8) },
            log: LogConfig {
                level: Some("debug".to_string()),
                file: Some("/var/tmp/notes-test.log".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.tab_width, 8);
        assert_eq!(resolved.log_file, PathBuf::from("/var/tmp/notes-test.log"));
    }

    #[test]
    fn test_resolve_cli_data_file_wins() {
        let config = NotesConfig {
            storage: StorageConfig {
                data_file: Some("/from/config.json".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(Path::new("/from/cli.json")));
        assert_eq!(resolved.data_file, PathBuf::from("/from/cli.json"));
    }

    #[test]
    fn test_zero_tab_width_falls_back() {
        let config = NotesConfig {
            editor: EditorConfig { tab_width: Some(0) },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.tab_width, DEFAULT_TAB_WIDTH);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("loud"), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_expand_home() {
        let home = Path::new("/home/user");
        assert_eq!(
            expand_home("~/notes/data.json", home),
            PathBuf::from("/home/user/notes/data.json")
        );
        assert_eq!(expand_home("/abs/data.json", home), PathBuf::from("/abs/data.json"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[storage]
data_file = "~/Documents/notes.json"

[editor]
tab_width = 2

[log]
level = "trace"
"#;
        let config: NotesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage.data_file.as_deref(),
            Some("~/Documents/notes.json")
        );
        assert_eq!(config.editor.tab_width, Some(2));
        assert_eq!(config.log.level.as_deref(), Some("trace"));
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[editor]
tab_width = 3
"#;
        let config: NotesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.editor.tab_width, Some(3));
        assert!(config.storage.data_file.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_missing_config_file_is_generated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.editor.tab_width.is_none());
        assert!(path.exists());

        // The generated file is entirely commented out and parses back to defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.storage.data_file.is_none());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[editor\ntab_width = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }
}
