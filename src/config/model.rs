//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the board runs without a config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::APP_DIR_NAME;
use crate::store::response_store::DEFAULT_STORAGE_KEY;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub event: EventConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The event being RSVP'd to and the text used when sharing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Link shown on the success screen and passed to every share action.
    #[serde(default = "default_page_url")]
    pub page_url: String,
    /// Promotional text for share intents.
    #[serde(default = "default_share_message")]
    pub share_message: String,
    #[serde(default = "default_title")]
    pub share_title: String,
    #[serde(default = "default_native_share_text")]
    pub native_share_text: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            date: default_date(),
            tagline: default_tagline(),
            page_url: default_page_url(),
            share_message: default_share_message(),
            share_title: default_title(),
            native_share_text: default_native_share_text(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_storage_key")]
    pub key: String,
    /// Keep responses in memory for a demo session; nothing is written.
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_storage_key(),
            in_memory: false,
        }
    }
}

impl StorageConfig {
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME),
        }
    }
}

/// Animation and overlay timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_count_animation_ms")]
    pub count_animation_ms: u64,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default = "default_confetti_pieces")]
    pub confetti_pieces: usize,
    #[serde(default = "default_confetti_ms")]
    pub confetti_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            count_animation_ms: default_count_animation_ms(),
            toast_ms: default_toast_ms(),
            confetti_pieces: default_confetti_pieces(),
            confetti_ms: default_confetti_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// argv of an external share helper; title, text and url are appended.
    /// The native share key is only offered when this is set.
    #[serde(default)]
    pub native_command: Option<Vec<String>>,
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "DKD Run 2026".to_string()
}
fn default_subtitle() -> String {
    "PCMC".to_string()
}
fn default_date() -> String {
    "March 1st, 2026".to_string()
}
fn default_tagline() -> String {
    "Are you in?".to_string()
}
fn default_page_url() -> String {
    "http://localhost:8000/".to_string()
}
fn default_share_message() -> String {
    "I'm running DKD 2026! March 1st - Are you in? Join me! 🏃".to_string()
}
fn default_native_share_text() -> String {
    "I'm running DKD 2026! March 1st - Are you in?".to_string()
}
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}
fn default_count_animation_ms() -> u64 {
    500
}
fn default_toast_ms() -> u64 {
    2000
}
fn default_confetti_pieces() -> usize {
    60
}
fn default_confetti_ms() -> u64 {
    4000
}
fn default_log_dir() -> String {
    "~/.local/share/rsvp-tui/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
