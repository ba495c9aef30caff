mod commands;
mod core;
mod shared;

use std::sync::Arc;
use tauri::Manager;

use crate::core::translator::{
    ControllerConfig, HttpBackend, SnapshotSink, TranslationBackend, TranslatorController,
};
use crate::shared::emit::EventSink;
use crate::shared::settings::AppSettings;
use crate::shared::types::LanguagePair;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let settings =
                tauri::async_runtime::block_on(AppSettings::load()).unwrap_or_else(|e| {
                    eprintln!("Failed to load settings: {}", e);
                    AppSettings::default()
                });

            let backend = Arc::new(HttpBackend::new(settings.server.endpoint.clone()));
            let sink = Arc::new(EventSink::new(app.handle().clone()));
            let controller = TranslatorController::new(
                backend.clone() as Arc<dyn TranslationBackend>,
                sink as Arc<dyn SnapshotSink>,
                ControllerConfig::from_settings(&settings),
                LanguagePair {
                    source: settings.preferences.default_source_lang.clone(),
                    target: settings.preferences.default_target_lang.clone(),
                },
            );

            app.manage(backend);
            app.manage(controller);

            println!("[Setup] Text Translator ready (server: {})", settings.server.endpoint);

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::set_draft,
            commands::set_languages,
            commands::swap_languages,
            commands::clear_translation,
            commands::copy_translation,
            commands::translator_snapshot,
            commands::get_languages,
            commands::get_settings,
            commands::save_settings,
            commands::log_message,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        });
}
