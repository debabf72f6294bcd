use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to defaults when `init_config()` has not run yet.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `config.toml` (or `path`) plus `LS__*` environment overrides. A
/// broken config file is reported and replaced by defaults.
pub fn init_config(path: Option<&str>) -> Arc<StaticConfig> {
    let loaded = match StaticConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] Failed to load config: {}", e);
            StaticConfig::default()
        }
    };

    match CONFIG.get() {
        Some(current) => current.store(Arc::new(loaded)),
        None => {
            let _ = CONFIG.set(ArcSwap::from_pointee(loaded));
        }
    }

    get_config()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_replaces_global() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("linkshelf.toml");
        std::fs::write(&path, "[shortener]\norigin = \"https://sho.rt\"\n").unwrap();

        let installed = init_config(path.to_str());
        assert_eq!(installed.shortener.origin, "https://sho.rt");
        assert_eq!(get_config().shortener.origin, "https://sho.rt");
        assert_eq!(get_config().shortener.random_code_length, 6);
    }
}
