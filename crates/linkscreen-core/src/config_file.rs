use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub storage: Option<StorageConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the queue CSV file.
    pub csv_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the web server, e.g. "0.0.0.0:5001".
    pub addr: Option<String>,
}

/// Platform config directory path: `<config_dir>/linkscreen/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("linkscreen").join("config.toml"))
}

/// Load config by cascading CWD `.linkscreen.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".linkscreen.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        storage: Some(StorageConfig {
            csv_path: overlay
                .storage
                .as_ref()
                .and_then(|s| s.csv_path.clone())
                .or_else(|| base.storage.as_ref().and_then(|s| s.csv_path.clone())),
        }),
        server: Some(ServerConfig {
            addr: overlay
                .server
                .as_ref()
                .and_then(|s| s.addr.clone())
                .or_else(|| base.server.as_ref().and_then(|s| s.addr.clone())),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_wins_field_by_field() {
        let base: ConfigFile =
            toml::from_str("[storage]\ncsv_path = \"base.csv\"\n[server]\naddr = \"0.0.0.0:5001\"")
                .unwrap();
        let overlay: ConfigFile = toml::from_str("[storage]\ncsv_path = \"overlay.csv\"").unwrap();

        let merged = merge(base, overlay);
        assert_eq!(
            merged.storage.as_ref().unwrap().csv_path.as_deref(),
            Some("overlay.csv")
        );
        assert_eq!(
            merged.server.as_ref().unwrap().addr.as_deref(),
            Some("0.0.0.0:5001")
        );
    }

    #[test]
    fn missing_file_yields_none() {
        assert!(load_from_path(&PathBuf::from("/nonexistent/linkscreen.toml")).is_none());
    }
}
