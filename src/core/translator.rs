//! Translator input controller.
//!
//! `state` holds the pure state record and its transition functions,
//! `controller` wraps it in the async shell (debounce timers, request
//! sequencing), `service` speaks HTTP to the translation server, and
//! `languages` provides the selectable language catalog.

pub mod controller;
pub mod languages;
pub mod service;
pub mod state;

pub use controller::{ControllerConfig, SnapshotSink, TranslatorController};
pub use service::{HttpBackend, TranslateOutcome, TranslationBackend};
