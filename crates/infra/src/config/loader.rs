//! Configuration loader
//!
//! Loads adapter configuration from environment variables or files and
//! resolves it into an immutable [`GlsConfig`] exactly once. Optional
//! fields receive their defaults here; downstream code never branches on
//! "was this set".
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MYGLS_USERNAME`: MyGLS account username
//! - `MYGLS_PASSWORD`: MyGLS account password (plaintext, hashed per request)
//! - `MYGLS_CLIENT_NUMBER`: MyGLS client number
//! - `MYGLS_COUNTRY`: country code (si, hr, hu, cz, sk, ro, rs)
//! - `MYGLS_PRINTER_TYPE`: optional printer layout (default "A4_2x2")
//! - `MYGLS_WEBSHOP_ENGINE`: optional engine identifier (default "Vendure")
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./mygls.json` or `./mygls.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use mygls_domain::{CountryCode, GlsConfig, GlsError, RawGlsConfig, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `GlsError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<GlsConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Errors
/// Returns `GlsError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<GlsConfig> {
    let username = env_var("MYGLS_USERNAME")?;
    let password = env_var("MYGLS_PASSWORD")?;
    let client_number = env_var("MYGLS_CLIENT_NUMBER").and_then(|s| {
        s.parse::<i64>().map_err(|e| GlsError::Config(format!("Invalid client number: {}", e)))
    })?;
    let country = env_var("MYGLS_COUNTRY")?.parse::<CountryCode>()?;
    let printer_type = std::env::var("MYGLS_PRINTER_TYPE").ok();
    let webshop_engine = std::env::var("MYGLS_WEBSHOP_ENGINE").ok();

    Ok(RawGlsConfig { username, password, client_number, country, printer_type, webshop_engine }
        .resolve())
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `GlsError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<GlsConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GlsError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            GlsError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GlsError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`). The raw
/// record is resolved into a fully-populated [`GlsConfig`].
fn parse_config(contents: &str, path: &Path) -> Result<GlsConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let raw: RawGlsConfig = match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GlsError::Config(format!("Invalid TOML format: {}", e)))?,
        "json" => serde_json::from_str(contents)
            .map_err(|e| GlsError::Config(format!("Invalid JSON format: {}", e)))?,
        _ => return Err(GlsError::Config(format!("Unsupported config format: {}", extension))),
    };

    Ok(raw.resolve())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("mygls.json"),
            cwd.join("mygls.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("mygls.json"),
                exe_dir.join("mygls.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `GlsError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| GlsError::Config(format!("Missing required environment variable: {}", key)))
}
