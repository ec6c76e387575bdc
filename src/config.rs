use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::transition::TransitionTiming;

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub transition: TransitionConfig,
    pub scroll: ScrollConfig,
    pub ui: UiConfig,
    pub keymap: KeymapConfig,
    pub contact: ContactConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransitionConfig {
    pub enabled: bool,
    pub cover_ms: u64,
    pub reveal_delay_ms: u64,
    pub reveal_ms: u64,
    pub max_duration_ms: u64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cover_ms: 400,
            reveal_delay_ms: 300,
            reveal_ms: 600,
            max_duration_ms: 3000,
        }
    }
}

impl TransitionConfig {
    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming {
            cover: Duration::from_millis(self.cover_ms),
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
            reveal: Duration::from_millis(self.reveal_ms),
            max_duration: Duration::from_millis(self.max_duration_ms),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScrollConfig {
    /// Rows below the viewport top a section must cross to become active.
    pub activation_offset_rows: i32,
    pub step_rows: u16,
    pub condensed_after_rows: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            activation_offset_rows: 3,
            step_rows: 2,
            condensed_after_rows: 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub frame_ms: u64,
    pub cursor_enabled: bool,
    pub cursor_smoothing: f32,
    pub notice_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            cursor_enabled: true,
            cursor_smoothing: 0.15,
            notice_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub outbox_path: Option<PathBuf>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "hamzabenmarwen@gmail.com".to_string(),
            outbox_path: None,
        }
    }
}

impl ContactConfig {
    pub fn resolved_outbox_path(&self) -> PathBuf {
        self.outbox_path
            .clone()
            .or_else(|| default_data_dir().map(|dir| dir.join("outbox.jsonl")))
            .unwrap_or_else(|| PathBuf::from("folio-outbox.jsonl"))
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::config(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            AppError::config(format!("failed to parse config {}: {source}", path.display()))
        })?;
        Ok(parsed.sanitized())
    }

    pub fn sanitized(mut self) -> Self {
        let transition = &mut self.transition;
        transition.cover_ms = transition.cover_ms.max(1);
        transition.reveal_ms = transition.reveal_ms.max(1);
        let sequence_ms = transition
            .cover_ms
            .saturating_add(transition.reveal_delay_ms)
            .saturating_add(transition.reveal_ms);
        if transition.max_duration_ms <= sequence_ms {
            transition.max_duration_ms = sequence_ms.saturating_mul(2);
        }

        self.scroll.step_rows = self.scroll.step_rows.max(1);
        self.scroll.activation_offset_rows = self.scroll.activation_offset_rows.max(0);

        self.ui.frame_ms = self.ui.frame_ms.max(1);
        if !self.ui.cursor_smoothing.is_finite()
            || self.ui.cursor_smoothing <= 0.0
            || self.ui.cursor_smoothing > 1.0
        {
            self.ui.cursor_smoothing = UiConfig::default().cursor_smoothing;
        }
        if self.log.filter.trim().is_empty() {
            self.log.filter = LogConfig::default().filter;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("FOLIO_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("folio").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("folio")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("folio").join("config.toml"));
    }
    None
}

fn default_data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("folio"));
    }
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".local").join("share").join("folio"))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("folio_config_{suffix}_{}_{}", process::id(), nanos));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [transition]
            cover_ms = 0
            reveal_delay_ms = 100
            reveal_ms = 200
            max_duration_ms = 50

            [scroll]
            step_rows = 0
            activation_offset_rows = -4

            [ui]
            frame_ms = 0
            cursor_smoothing = 3.0

            [keymap]
            preset = "emacs"
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert!(config.transition.enabled);
        assert_eq!(config.transition.cover_ms, 1);
        assert_eq!(config.transition.max_duration_ms, 602);
        assert_eq!(config.scroll.step_rows, 1);
        assert_eq!(config.scroll.activation_offset_rows, 0);
        assert_eq!(config.ui.frame_ms, 1);
        assert_eq!(config.ui.cursor_smoothing, 0.15);
        assert_eq!(config.keymap.preset, "emacs");
        assert_eq!(config.contact.recipient, "hamzabenmarwen@gmail.com");

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn load_from_path_reports_parse_errors_with_path() {
        let path = unique_temp_path("broken.toml");
        fs::write(&path, "[transition\ncover_ms = ").expect("config file should be written");

        let err = Config::load_from_path(&path).expect_err("broken config should fail");
        assert!(err.to_string().contains("failed to parse config"));

        fs::remove_file(&path).expect("config file should be removed");
    }

    #[test]
    fn timing_converts_milliseconds() {
        let timing = Config::default().transition.timing();
        assert_eq!(timing.cover, Duration::from_millis(400));
        assert_eq!(timing.reveal_delay, Duration::from_millis(300));
        assert_eq!(timing.reveal, Duration::from_millis(600));
        assert!(timing.max_duration > timing.cover + timing.reveal_delay + timing.reveal);
    }
}
