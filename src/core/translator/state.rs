//! Pure translator state and transition functions.
//!
//! No I/O and no timers live here; every method is a synchronous
//! `(state, event) -> state` step that returns a [`Directive`] telling
//! the async shell what, if anything, to schedule next.

use crate::shared::types::{LanguagePair, TranslationStatus, TranslatorSnapshot};
use unicode_segmentation::UnicodeSegmentation;

/// Message shown for transport-level failures (network error or non-2xx).
pub const GENERIC_FAILURE: &str = "Translation failed";

/// What the async shell must schedule after a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Directive {
    /// Nothing to do.
    None,
    /// Translate the current draft after the quiet period.
    Debounce,
    /// Translate the current draft immediately.
    TranslateNow,
}

/// Thresholds for the render projection.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Drafts at or below this length never show the loading spinner.
    pub loading_threshold_chars: usize,
    /// Results shorter than this get the transient typewriter emphasis.
    pub emphasis_max_chars: usize,
    pub emphasis_duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct TranslatorState {
    pub draft: String,
    pub languages: LanguagePair,
    pub output: String,
    pub status: TranslationStatus,
}

impl TranslatorState {
    pub fn new(languages: LanguagePair) -> Self {
        Self {
            draft: String::new(),
            languages,
            output: String::new(),
            status: TranslationStatus::Ready,
        }
    }

    /// Draft mutated by a keystroke or paste.
    ///
    /// An effectively empty draft resets the output and status without
    /// requesting anything; otherwise the shell debounces a translation.
    pub fn edit(&mut self, text: String) -> Directive {
        self.draft = text;
        if self.draft.trim().is_empty() {
            self.output.clear();
            self.status = TranslationStatus::Ready;
            Directive::None
        } else {
            Directive::Debounce
        }
    }

    /// Exchange the language selections.
    ///
    /// When both panels hold text, the rendered output becomes the new
    /// draft and a translation under the swapped pair is due. The old
    /// output stays on screen until that translation lands.
    pub fn swap(&mut self) -> Directive {
        self.languages = self.languages.swapped();
        if !self.draft.is_empty() && !self.output.is_empty() {
            self.draft = self.output.clone();
            Directive::TranslateNow
        } else {
            Directive::None
        }
    }

    /// Source or target selection changed.
    pub fn set_languages(&mut self, languages: LanguagePair) -> Directive {
        self.languages = languages;
        if self.draft.trim().is_empty() {
            Directive::None
        } else {
            Directive::TranslateNow
        }
    }

    pub fn clear(&mut self) {
        self.draft.clear();
        self.output.clear();
        self.status = TranslationStatus::Ready;
    }

    pub fn begin_request(&mut self) {
        self.status = TranslationStatus::Translating;
    }

    /// Same-language bypass: echo the draft, no network.
    pub fn echo_same_language(&mut self) {
        self.output = self.draft.clone();
        self.status = TranslationStatus::SameLanguage;
    }

    pub fn apply_translation(&mut self, text: String) {
        self.output = text;
        self.status = TranslationStatus::Translated;
    }

    /// Surface a failure. The stale output is retained on purpose.
    pub fn apply_error(&mut self, message: String) {
        self.status = TranslationStatus::Error(message);
    }

    /// User-perceived character count of the draft.
    pub fn char_count(&self) -> usize {
        self.draft.graphemes(true).count()
    }

    pub fn snapshot(&self, render: &RenderConfig) -> TranslatorSnapshot {
        let char_count = self.char_count();
        let error_message = match &self.status {
            TranslationStatus::Error(message) => Some(message.clone()),
            _ => None,
        };

        TranslatorSnapshot {
            draft: self.draft.clone(),
            output: self.output.clone(),
            languages: self.languages.clone(),
            status_label: self.status.label().to_string(),
            char_count,
            char_count_label: char_count_label(char_count),
            loading: self.status == TranslationStatus::Translating
                && char_count > render.loading_threshold_chars,
            emphasize: self.status == TranslationStatus::Translated
                && !self.output.is_empty()
                && self.output.chars().count() < render.emphasis_max_chars,
            emphasis_duration_ms: render.emphasis_duration_ms,
            status: self.status.clone(),
            error_message,
        }
    }
}

/// "0 characters", "1 character", "2 characters", ...
pub fn char_count_label(count: usize) -> String {
    format!("{} character{}", count, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_fr() -> LanguagePair {
        LanguagePair {
            source: "en".to_string(),
            target: "fr".to_string(),
        }
    }

    fn render() -> RenderConfig {
        RenderConfig {
            loading_threshold_chars: 5,
            emphasis_max_chars: 100,
            emphasis_duration_ms: 1500,
        }
    }

    #[test]
    fn edit_nonempty_draft_requests_debounced_translation() {
        let mut state = TranslatorState::new(en_fr());
        assert_eq!(state.edit("Hello".to_string()), Directive::Debounce);
        assert_eq!(state.draft, "Hello");
    }

    #[test]
    fn edit_whitespace_draft_resets_without_request() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hello".to_string());
        state.apply_translation("Bonjour".to_string());

        assert_eq!(state.edit("   ".to_string()), Directive::None);
        assert_eq!(state.output, "");
        assert_eq!(state.status, TranslationStatus::Ready);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hello".to_string());
        state.apply_translation("Bonjour".to_string());

        state.clear();

        assert_eq!(state.draft, "");
        assert_eq!(state.output, "");
        assert_eq!(state.status, TranslationStatus::Ready);
        assert_eq!(state.char_count(), 0);
    }

    #[test]
    fn swap_with_both_panels_moves_output_into_draft() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hello".to_string());
        state.apply_translation("Bonjour".to_string());

        assert_eq!(state.swap(), Directive::TranslateNow);
        assert_eq!(state.languages.source, "fr");
        assert_eq!(state.languages.target, "en");
        assert_eq!(state.draft, "Bonjour");
        // Old output stays visible until the re-translation lands
        assert_eq!(state.output, "Bonjour");
    }

    #[test]
    fn swap_with_empty_output_only_exchanges_languages() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hello".to_string());

        assert_eq!(state.swap(), Directive::None);
        assert_eq!(state.languages.source, "fr");
        assert_eq!(state.languages.target, "en");
        assert_eq!(state.draft, "Hello");
        assert_eq!(state.output, "");
    }

    #[test]
    fn language_change_retranslates_only_nonempty_drafts() {
        let mut state = TranslatorState::new(en_fr());
        let de = LanguagePair {
            source: "en".to_string(),
            target: "de".to_string(),
        };
        assert_eq!(state.set_languages(de.clone()), Directive::None);

        state.edit("Hello".to_string());
        assert_eq!(state.set_languages(de), Directive::TranslateNow);
    }

    #[test]
    fn same_language_echo_keeps_draft_as_output() {
        let mut state = TranslatorState::new(LanguagePair {
            source: "en".to_string(),
            target: "en".to_string(),
        });
        state.edit("Hello".to_string());
        state.echo_same_language();

        assert_eq!(state.output, "Hello");
        assert_eq!(state.status, TranslationStatus::SameLanguage);
    }

    #[test]
    fn error_retains_stale_output() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hello".to_string());
        state.apply_translation("Bonjour".to_string());
        state.edit("Hello again".to_string());
        state.apply_error("rate limited".to_string());

        assert_eq!(state.output, "Bonjour");
        assert_eq!(
            state.status,
            TranslationStatus::Error("rate limited".to_string())
        );
    }

    #[test]
    fn char_count_uses_graphemes() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("café".to_string());
        assert_eq!(state.char_count(), 4);

        // Family emoji is several scalars but one perceived character
        state.edit("👨\u{200d}👩\u{200d}👧".to_string());
        assert_eq!(state.char_count(), 1);
    }

    #[test]
    fn char_count_label_pluralizes() {
        assert_eq!(char_count_label(0), "0 characters");
        assert_eq!(char_count_label(1), "1 character");
        assert_eq!(char_count_label(42), "42 characters");
    }

    #[test]
    fn snapshot_flags_short_results_for_emphasis() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hello".to_string());
        state.apply_translation("Bonjour".to_string());

        let snapshot = state.snapshot(&render());
        assert!(snapshot.emphasize);
        assert_eq!(snapshot.emphasis_duration_ms, 1500);

        state.apply_translation("x".repeat(150));
        assert!(!state.snapshot(&render()).emphasize);
    }

    #[test]
    fn snapshot_suppresses_loading_for_short_drafts() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hi".to_string());
        state.begin_request();
        assert!(!state.snapshot(&render()).loading);

        state.edit("Hello there".to_string());
        state.begin_request();
        assert!(state.snapshot(&render()).loading);
    }

    #[test]
    fn snapshot_carries_error_message() {
        let mut state = TranslatorState::new(en_fr());
        state.edit("Hello".to_string());
        state.apply_error("rate limited".to_string());

        let snapshot = state.snapshot(&render());
        assert_eq!(snapshot.status_label, "Error");
        assert_eq!(snapshot.error_message.as_deref(), Some("rate limited"));
    }
}
