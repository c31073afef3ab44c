// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--cache-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`M3DAN_STUDIO_CONFIG_DIR`, `M3DAN_STUDIO_CACHE_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The config directory holds `settings.toml`; the cache directory holds
//! downloaded 3D assets and may be wiped at any time.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "M3danStudio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "M3DAN_STUDIO_CONFIG_DIR";

/// Environment variable to override the asset cache directory.
pub const ENV_CACHE_DIR: &str = "M3DAN_STUDIO_CACHE_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CACHE_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for config and cache directories.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>, cache_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_CACHE_DIR.set(cache_dir.map(PathBuf::from)).is_err()
    {
        log::warn!("CLI directory overrides already initialized; ignoring");
    }
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application config directory path.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory where downloaded assets are cached.
pub fn get_asset_cache_dir() -> Option<PathBuf> {
    get_asset_cache_dir_with_override(None)
}

/// Returns the asset cache directory with an optional override.
pub fn get_asset_cache_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CACHE_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CACHE_DIR) {
        return Some(path);
    }

    dirs::cache_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push("assets");
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn asset_cache_dir_is_nested_under_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CACHE_DIR);

        if let Some(path) = get_asset_cache_dir() {
            assert!(path.ends_with("assets"));
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_cache_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/cache/dir";
        std::env::set_var(ENV_CACHE_DIR, test_path);

        let result = get_asset_cache_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CACHE_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
