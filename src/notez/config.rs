use crate::error::{NotezError, Result};
use crate::remote::{DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `get` / `set`, in display order.
pub const CONFIG_KEYS: &[&str] = &["suggestions-url", "backend-url", "timeout"];

/// Configuration for notez, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotezConfig {
    /// Base URL of the suggestion service (`POST {url}/suggestions`)
    #[serde(default)]
    pub suggestions_url: Option<String>,

    /// Base URL of the remote notes backend (`GET|POST {url}/notes`)
    #[serde(default)]
    pub backend_url: Option<String>,

    /// Request timeout for remote calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for NotezConfig {
    fn default() -> Self {
        Self {
            suggestions_url: None,
            backend_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl NotezConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotezError::Io)?;
        let config: NotezConfig =
            serde_json::from_str(&content).map_err(NotezError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotezError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotezError::Serialization)?;
        fs::write(config_path, content).map_err(NotezError::Io)?;
        Ok(())
    }

    /// Request timeout, clamped to `1..=MAX_TIMEOUT_SECS` since config.json may
    /// be edited by hand.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(1, MAX_TIMEOUT_SECS))
    }

    /// Display value for a key. Unset URLs show as an empty string.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "suggestions-url" => Some(self.suggestions_url.clone().unwrap_or_default()),
            "backend-url" => Some(self.backend_url.clone().unwrap_or_default()),
            "timeout" => Some(self.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. An empty URL clears it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "suggestions-url" => self.suggestions_url = parse_url(value)?,
            "backend-url" => self.backend_url = parse_url(value)?,
            "timeout" => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid timeout: {} (expected whole seconds)", value))?;
                if secs == 0 {
                    return Err("Timeout must be at least 1 second".to_string());
                }
                if secs > MAX_TIMEOUT_SECS {
                    return Err(format!(
                        "Timeout must be at most {} seconds",
                        MAX_TIMEOUT_SECS
                    ));
                }
                self.timeout_secs = secs;
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

fn parse_url(value: &str) -> std::result::Result<Option<String>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(format!("Invalid URL: {} (expected http:// or https://)", value));
    }
    Ok(Some(value.trim_end_matches('/').to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotezConfig::default();
        assert_eq!(config.suggestions_url, None);
        assert_eq!(config.backend_url, None);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = NotezConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotezConfig::default());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"suggestions_url":"http://localhost:3000"}"#,
        )
        .unwrap();

        let config = NotezConfig::load(dir.path()).unwrap();
        assert_eq!(
            config.suggestions_url.as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = NotezConfig::default();
        config.set("backend-url", "https://notes.example.com/").unwrap();
        config.set("timeout", "30").unwrap();
        config.save(&nested).unwrap();

        let loaded = NotezConfig::load(&nested).unwrap();
        assert_eq!(
            loaded.backend_url.as_deref(),
            Some("https://notes.example.com")
        );
        assert_eq!(loaded.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = NotezConfig::default();
        assert!(config.set("suggestions-url", "localhost:3000").is_err());
        assert!(config.set("timeout", "soon").is_err());
        assert!(config.set("timeout", "0").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, NotezConfig::default());
    }

    #[test]
    fn test_set_rejects_oversized_timeout() {
        let mut config = NotezConfig::default();
        assert!(config.set("timeout", "18446744073709551615").is_err());
        assert!(config.set("timeout", "3601").is_err());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        config.set("timeout", "3600").unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(MAX_TIMEOUT_SECS));
    }

    #[test]
    fn test_hand_edited_timeout_is_clamped() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"timeout_secs":18446744073709551615}"#,
        )
        .unwrap();
        let config = NotezConfig::load(dir.path()).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(MAX_TIMEOUT_SECS));

        let zero = NotezConfig {
            timeout_secs: 0,
            ..NotezConfig::default()
        };
        assert_eq!(zero.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_empty_url_clears() {
        let mut config = NotezConfig::default();
        config.set("suggestions-url", "http://a").unwrap();
        config.set("suggestions-url", "").unwrap();
        assert_eq!(config.suggestions_url, None);
        assert_eq!(config.get("suggestions-url").as_deref(), Some(""));
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = NotezConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing key {}", key);
        }
        assert_eq!(config.get("nope"), None);
    }
}
