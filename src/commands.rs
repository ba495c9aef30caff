use crate::core::translator::languages;
use crate::core::translator::{HttpBackend, TranslatorController};
use crate::shared::error::AppError;
use crate::shared::settings::AppSettings;
use crate::shared::types::{LanguagePair, LanguagesResponse, LogRequest, TranslatorSnapshot};
use std::sync::Arc;
use tauri::State;
use tauri_plugin_clipboard_manager::ClipboardExt;

#[tauri::command]
pub async fn set_draft(
    controller: State<'_, Arc<TranslatorController>>,
    text: String,
) -> Result<(), String> {
    controller.inner().edit(text);
    Ok(())
}

#[tauri::command]
pub async fn set_languages(
    controller: State<'_, Arc<TranslatorController>>,
    source: String,
    target: String,
) -> Result<(), String> {
    if source.trim().is_empty() || target.trim().is_empty() {
        return Err(AppError::Validation("Language codes must be non-empty".to_string()).to_string());
    }
    controller.inner().set_languages(LanguagePair { source, target });
    Ok(())
}

#[tauri::command]
pub async fn swap_languages(controller: State<'_, Arc<TranslatorController>>) -> Result<(), String> {
    controller.inner().swap();
    Ok(())
}

#[tauri::command]
pub async fn clear_translation(
    controller: State<'_, Arc<TranslatorController>>,
) -> Result<(), String> {
    controller.inner().clear();
    Ok(())
}

/// Copy the rendered output to the system clipboard.
///
/// Returns whether the output actually reached the clipboard, so the
/// view only shows its "Copied!" feedback on success. Failures are
/// logged and otherwise swallowed; they never reach the status line.
#[tauri::command]
pub async fn copy_translation(
    app: tauri::AppHandle,
    controller: State<'_, Arc<TranslatorController>>,
) -> Result<bool, String> {
    let text = controller.output();
    if text.is_empty() {
        return Ok(false);
    }

    Ok(copy_succeeded(app.clipboard().write_text(text)))
}

fn copy_succeeded<E: std::fmt::Display>(result: Result<(), E>) -> bool {
    if let Err(e) = result {
        eprintln!("[Clipboard] {}", AppError::Clipboard(e.to_string()));
        return false;
    }
    true
}

/// Current render state, fetched once by the view on startup.
#[tauri::command]
pub async fn translator_snapshot(
    controller: State<'_, Arc<TranslatorController>>,
) -> Result<TranslatorSnapshot, String> {
    Ok(controller.snapshot())
}

#[tauri::command]
pub async fn get_languages(
    backend: State<'_, Arc<HttpBackend>>,
) -> Result<LanguagesResponse, String> {
    match backend.languages().await {
        Ok(reply) => Ok(LanguagesResponse {
            source_languages: languages::options_from_codes(reply.source_languages),
            target_languages: languages::options_from_codes(reply.target_languages),
        }),
        Err(e) => {
            eprintln!("[Languages] Falling back to builtin catalog: {}", e);
            let builtin = languages::builtin_options();
            Ok(LanguagesResponse {
                source_languages: builtin.clone(),
                target_languages: builtin,
            })
        }
    }
}

#[tauri::command]
pub async fn get_settings() -> Result<AppSettings, String> {
    AppSettings::load().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn save_settings(app: tauri::AppHandle, settings: AppSettings) -> Result<(), String> {
    settings.save(&app).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn log_message(request: LogRequest) -> Result<(), String> {
    println!("[{}] {}", request.level.to_uppercase(), request.message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_feedback_only_on_successful_write() {
        assert!(copy_succeeded(Ok::<(), String>(())));
        assert!(!copy_succeeded(Err::<(), String>(
            "clipboard access denied".to_string()
        )));
    }
}
