use crate::shared::settings::AppSettings;
use crate::shared::types::TranslatorSnapshot;

/// Application events pushed to the webview.
///
/// Each variant maps to a `domain://event` channel name in `emit.rs`.
#[derive(Debug, Clone)]
pub enum AppEvent {
    TranslatorUpdated(TranslatorSnapshot),
    SettingsUpdated(AppSettings),
}
