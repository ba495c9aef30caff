use super::events::AppEvent;
use crate::core::translator::controller::SnapshotSink;
use crate::shared::types::TranslatorSnapshot;
use tauri::{AppHandle, Emitter};

/// Emit an application event to all windows
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    match &event {
        AppEvent::TranslatorUpdated(snapshot) => {
            if let Err(e) = app.emit("translator://updated", snapshot) {
                eprintln!("[Emit] Failed to emit translator update: {}", e);
            }
        }

        AppEvent::SettingsUpdated(settings) => {
            if let Err(e) = app.emit("settings://update", settings) {
                eprintln!("[Emit] Failed to emit settings update: {}", e);
            }
        }
    }
}

/// Snapshot sink that forwards controller renders to the webview.
pub struct EventSink {
    app: AppHandle,
}

impl EventSink {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl SnapshotSink for EventSink {
    fn render(&self, snapshot: TranslatorSnapshot) {
        emit_event(&self.app, AppEvent::TranslatorUpdated(snapshot));
    }
}
