use crate::shared::emit::emit_event;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tauri::AppHandle;
use tokio::fs;
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct AppSettings {
    pub server: ServerSettings,
    pub preferences: UserPreferences,
    pub tuning: ControllerTuning,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct ServerSettings {
    /// Base URL of the translation server, without trailing slash.
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct UserPreferences {
    pub default_source_lang: String,
    pub default_target_lang: String,
}

/// Knobs for the input controller. Applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/settings.ts")]
pub struct ControllerTuning {
    /// Quiet period after the last keystroke before a request fires.
    pub debounce_ms: u64,
    /// Drafts at or below this length never show the loading spinner.
    pub loading_threshold_chars: usize,
    /// Results shorter than this get the transient typewriter emphasis.
    pub emphasis_max_chars: usize,
    pub emphasis_duration_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                endpoint: "http://127.0.0.1:5000".to_string(),
            },
            preferences: UserPreferences {
                default_source_lang: "en".to_string(),
                default_target_lang: "fr".to_string(),
            },
            tuning: ControllerTuning {
                debounce_ms: 500,
                loading_threshold_chars: 5,
                emphasis_max_chars: 100,
                emphasis_duration_ms: 1500,
            },
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "texttranslator", "text-translator")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;

        if !path.exists() {
            let settings = Self::default();
            settings.save_to_disk().await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Internal helper to save to disk without event emission
    async fn save_to_disk(&self) -> AppResult<()> {
        let path = Self::get_settings_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content).await?;
        Ok(())
    }

    /// Save settings to disk and emit update event
    pub async fn save(&self, app: &AppHandle) -> AppResult<()> {
        self.save_to_disk().await?;

        emit_event(app, AppEvent::SettingsUpdated(self.clone()));

        Ok(())
    }
}
