use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Wire request for `POST /translate` on the translation server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranslateRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}

/// Selected source/target language codes (opaque strings, e.g. "en").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn is_same(&self) -> bool {
        self.source == self.target
    }

    pub fn swapped(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }
}

/// Lifecycle tag of the last translation attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "type", content = "payload")]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub enum TranslationStatus {
    Ready,
    Translating,
    Translated,
    SameLanguage,
    Error(String),
}

impl TranslationStatus {
    /// Human-readable label shown in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            TranslationStatus::Ready => "Ready",
            TranslationStatus::Translating => "Translating…",
            TranslationStatus::Translated => "Translated",
            TranslationStatus::SameLanguage => "Same language",
            TranslationStatus::Error(_) => "Error",
        }
    }
}

/// Render projection pushed to the view on every state change.
///
/// The view applies this verbatim; all decisions (loading visibility,
/// emphasis, pluralization) are made on the Rust side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct TranslatorSnapshot {
    pub draft: String,
    pub output: String,
    pub languages: LanguagePair,
    pub status: TranslationStatus,
    pub status_label: String,
    pub char_count: usize,
    pub char_count_label: String,
    /// Show the spinner. Suppressed for short drafts (configurable threshold).
    pub loading: bool,
    /// Apply the transient typewriter emphasis to the output.
    pub emphasize: bool,
    pub emphasis_duration_ms: u64,
    /// Error text to surface, when status is Error.
    pub error_message: Option<String>,
}

/// One selectable language in the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct LanguagesResponse {
    pub source_languages: Vec<LanguageOption>,
    pub target_languages: Vec<LanguageOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../ui/types/bindings.ts")]
pub struct LogRequest {
    pub level: String,
    pub message: String,
}
