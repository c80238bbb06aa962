use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CONFIG_FILE: &str = "tags-diff.toml";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Failure to load an explicitly requested config file.
///
/// The implicit `tags-diff.toml` in the working directory never produces
/// these — a missing or malformed implicit file falls back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// Optional TOML overrides — all fields may be omitted.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP listen port (default: 8080).
    port: Option<u16>,
    /// Bind address (default: "127.0.0.1"; use "0.0.0.0" for LAN access).
    bind_address: Option<String>,
    /// Directory served under /static (default: "static").
    static_dir: Option<PathBuf>,
}

fn load_toml(path: &Path) -> Result<TomlConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the implicit `tags-diff.toml` from the working directory.
/// Missing file is normal; a malformed one logs a warning and is ignored.
fn load_implicit_toml() -> TomlConfig {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return TomlConfig::default();
    }
    match load_toml(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(err = %e, "ignoring malformed config file — using defaults");
            TomlConfig::default()
        }
    }
}

// ─── ServerConfig ─────────────────────────────────────────────────────────────

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port.
    pub port: u16,
    /// Bind address for the HTTP server.
    pub bind_address: String,
    /// Directory whose files are served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file (`--config <path>`, or `tags-diff.toml` if present)
    ///   3. Built-in defaults
    ///
    /// An explicit `config_path` that cannot be read or parsed is an error;
    /// the implicit file is best-effort.
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        static_dir: Option<PathBuf>,
        config_path: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let toml = match config_path {
            Some(path) => load_toml(path)?,
            None => load_implicit_toml(),
        };

        Ok(Self {
            port: port.or(toml.port).unwrap_or(DEFAULT_PORT),
            bind_address: bind_address
                .filter(|s| !s.is_empty())
                .or(toml.bind_address)
                .unwrap_or_else(default_bind_address),
            static_dir: static_dir.or(toml.static_dir).unwrap_or_else(default_static_dir),
        })
    }
}
