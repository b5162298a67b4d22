//! Settings and configuration utilities.
//!
//! This module provides functionality to read settings from $HOME/.commit-match/settings.json
//! and use them as a fallback for environment variables.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::github::DEFAULT_API_URL;

/// Environment variable overriding the GitHub API base URL.
pub const API_URL_ENV: &str = "COMMIT_MATCH_API_URL";

/// Settings loaded from $HOME/.commit-match/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".commit-match").join("settings.json"))
    }

    /// Resolves the API base URL: explicit value, then environment, then
    /// settings, then the public GitHub API.
    ///
    /// Blank values at any level are skipped.
    pub fn api_url(&self, explicit: Option<&str>) -> String {
        self.api_url_with_env(explicit, env::var(API_URL_ENV).ok())
    }

    fn api_url_with_env(&self, explicit: Option<&str>, from_env: Option<String>) -> String {
        let non_blank = |url: &String| !url.trim().is_empty();
        explicit
            .map(str::to_string)
            .filter(non_blank)
            .or_else(|| from_env.filter(non_blank))
            .or_else(|| self.env.get(API_URL_ENV).cloned().filter(non_blank))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}

/// Resolves the API base URL using the settings file at the default location.
pub fn resolve_api_url(explicit: Option<&str>) -> Result<String> {
    let settings = Settings::load()?;
    Ok(settings.api_url(explicit))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, json: &str) -> PathBuf {
        let settings_path = dir.path().join("settings.json");
        fs::write(&settings_path, json).unwrap();
        settings_path
    }

    #[test]
    fn settings_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = write_settings(
            &temp_dir,
            r#"{
                "env": {
                    "TEST_VAR": "test_value",
                    "COMMIT_MATCH_API_URL": "https://ghe.example.com/api/v3"
                }
            }"#,
        );

        let settings = Settings::load_from_path(&settings_path).unwrap();

        assert_eq!(settings.env.get("TEST_VAR").unwrap(), "test_value");
        assert_eq!(
            settings.env.get(API_URL_ENV).unwrap(),
            "https://ghe.example.com/api/v3"
        );
    }

    #[test]
    fn settings_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn settings_malformed_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings_path = write_settings(&temp_dir, "{ not json");

        let err = Settings::load_from_path(&settings_path).unwrap_err();
        assert!(err.to_string().contains("settings.json"));
    }

    #[test]
    fn api_url_prefers_explicit_value() {
        let settings = Settings::default();
        assert_eq!(
            settings.api_url(Some("http://localhost:8080")),
            "http://localhost:8080"
        );
    }

    #[test]
    fn api_url_falls_back_to_settings_then_default() {
        let mut settings = Settings::default();
        assert_eq!(settings.api_url_with_env(None, None), DEFAULT_API_URL);

        settings.env.insert(
            API_URL_ENV.to_string(),
            "https://ghe.example.com/api/v3".to_string(),
        );
        assert_eq!(
            settings.api_url_with_env(None, None),
            "https://ghe.example.com/api/v3"
        );
    }

    #[test]
    fn api_url_skips_blank_values() {
        let mut settings = Settings::default();
        assert_eq!(
            settings.api_url_with_env(Some("  "), Some(String::new())),
            DEFAULT_API_URL
        );

        settings.env.insert(
            API_URL_ENV.to_string(),
            "https://ghe.example.com/api/v3".to_string(),
        );
        assert_eq!(
            settings.api_url_with_env(None, Some(String::new())),
            "https://ghe.example.com/api/v3"
        );
        assert_eq!(
            settings.api_url_with_env(None, Some("http://localhost:9000".to_string())),
            "http://localhost:9000"
        );
    }
}
