//! Async shell around the pure translator state.
//!
//! The controller owns the debounce timer and a monotonically
//! increasing request sequence. Every user event bumps the sequence;
//! a debounce task or network completion whose sequence no longer
//! matches the latest one is stale and gets dropped, so an out-of-order
//! response can never clobber the result of a newer request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::translator::service::{TranslateOutcome, TranslationBackend};
use crate::core::translator::state::{
    Directive, RenderConfig, TranslatorState, GENERIC_FAILURE,
};
use crate::shared::settings::AppSettings;
use crate::shared::types::{LanguagePair, TranslateRequest, TranslatorSnapshot};

/// Receives a render projection after every state change.
pub trait SnapshotSink: Send + Sync {
    fn render(&self, snapshot: TranslatorSnapshot);
}

#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub debounce: Duration,
    pub render: RenderConfig,
}

impl ControllerConfig {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            debounce: Duration::from_millis(settings.tuning.debounce_ms),
            render: RenderConfig {
                loading_threshold_chars: settings.tuning.loading_threshold_chars,
                emphasis_max_chars: settings.tuning.emphasis_max_chars,
                emphasis_duration_ms: settings.tuning.emphasis_duration_ms,
            },
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

pub struct TranslatorController {
    state: Mutex<TranslatorState>,
    seq: AtomicU64,
    backend: Arc<dyn TranslationBackend>,
    sink: Arc<dyn SnapshotSink>,
    config: ControllerConfig,
}

impl TranslatorController {
    pub fn new(
        backend: Arc<dyn TranslationBackend>,
        sink: Arc<dyn SnapshotSink>,
        config: ControllerConfig,
        languages: LanguagePair,
    ) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(TranslatorState::new(languages)),
            seq: AtomicU64::new(0),
            backend,
            sink,
            config,
        })
    }

    pub fn snapshot(&self) -> TranslatorSnapshot {
        self.state.lock().unwrap().snapshot(&self.config.render)
    }

    pub fn output(&self) -> String {
        self.state.lock().unwrap().output.clone()
    }

    /// Draft mutated by a keystroke or paste.
    pub fn edit(self: &Arc<Self>, text: String) {
        let seq = self.bump();
        let directive = self.transition(|state| state.edit(text));
        self.dispatch(directive, seq);
    }

    /// Exchange the language selections (and panel contents when both
    /// panels hold text).
    ///
    /// A bare language exchange leaves the sequence alone: a debounce
    /// scheduled by a recent keystroke stays valid and fires under the
    /// swapped pair, since the request reads the languages at fire time.
    pub fn swap(self: &Arc<Self>) {
        let directive = self.transition(|state| state.swap());
        if directive == Directive::TranslateNow {
            let seq = self.bump();
            self.dispatch(directive, seq);
        }
    }

    /// Source or target selection changed.
    pub fn set_languages(self: &Arc<Self>, languages: LanguagePair) {
        let seq = self.bump();
        let directive = self.transition(|state| state.set_languages(languages));
        self.dispatch(directive, seq);
    }

    /// Reset draft, output and status. Orphans any outstanding request.
    pub fn clear(self: &Arc<Self>) {
        let _ = self.bump();
        self.transition(|state| {
            state.clear();
            Directive::None
        });
    }

    fn bump(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, seq: u64) -> bool {
        self.seq.load(Ordering::SeqCst) == seq
    }

    fn transition(&self, f: impl FnOnce(&mut TranslatorState) -> Directive) -> Directive {
        let mut state = self.state.lock().unwrap();
        let directive = f(&mut state);
        self.push(&state);
        directive
    }

    fn push(&self, state: &TranslatorState) {
        self.sink.render(state.snapshot(&self.config.render));
    }

    fn dispatch(self: &Arc<Self>, directive: Directive, seq: u64) {
        match directive {
            Directive::None => {}
            Directive::Debounce => {
                let controller = Arc::clone(self);
                let delay = self.config.debounce;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    controller.translate_if_current(seq).await;
                });
            }
            Directive::TranslateNow => {
                let controller = Arc::clone(self);
                tokio::spawn(async move {
                    controller.translate_if_current(seq).await;
                });
            }
        }
    }

    async fn translate_if_current(&self, seq: u64) {
        let request = {
            let mut state = self.state.lock().unwrap();
            if !self.is_current(seq) || state.draft.trim().is_empty() {
                return;
            }
            if state.languages.is_same() {
                state.echo_same_language();
                self.push(&state);
                return;
            }
            state.begin_request();
            let request = TranslateRequest {
                text: state.draft.clone(),
                source_lang: state.languages.source.clone(),
                target_lang: state.languages.target.clone(),
            };
            self.push(&state);
            request
        };

        let result = self.backend.translate(&request).await;

        let mut state = self.state.lock().unwrap();
        if !self.is_current(seq) {
            println!("[Translator] Dropping stale response for request #{}", seq);
            return;
        }
        match result {
            Ok(TranslateOutcome::Translated(text)) => state.apply_translation(text),
            Ok(TranslateOutcome::Rejected(message)) => {
                eprintln!("[Translator] Server rejected request #{}: {}", seq, message);
                state.apply_error(message);
            }
            Err(e) => {
                eprintln!("[Translator] Request #{} failed: {}", seq, e);
                state.apply_error(GENERIC_FAILURE.to_string());
            }
        }
        self.push(&state);
    }
}
