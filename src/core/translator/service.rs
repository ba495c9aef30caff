//! HTTP client for the external translation server.
//!
//! The server contract is small: `POST /translate` answers 2xx with
//! either `{"translation": ...}` or `{"error": ...}`, anything else is
//! a transport failure. `GET /languages` advertises the supported
//! language lists.

use async_trait::async_trait;
use serde::Deserialize;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::TranslateRequest;

/// Result of a request the server actually answered.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslateOutcome {
    Translated(String),
    /// 2xx with an `error` field: recoverable, shown to the user verbatim.
    Rejected(String),
}

#[async_trait]
pub trait TranslationBackend: Send + Sync {
    async fn translate(&self, request: &TranslateRequest) -> AppResult<TranslateOutcome>;
}

#[derive(Debug, Deserialize)]
struct TranslateReply {
    translation: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LanguagesReply {
    pub source_languages: Vec<String>,
    pub target_languages: Vec<String>,
}

pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the language lists advertised by the server.
    pub async fn languages(&self) -> AppResult<LanguagesReply> {
        let url = format!("{}/languages", self.endpoint);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Network(format!(
                "languages endpoint returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    async fn translate(&self, request: &TranslateRequest) -> AppResult<TranslateOutcome> {
        let url = format!("{}/translate", self.endpoint);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            eprintln!(
                "[Backend] translate endpoint returned {}",
                response.status()
            );
            return Err(AppError::Network(format!(
                "translate endpoint returned {}",
                response.status()
            )));
        }

        let reply: TranslateReply = response.json().await?;
        Ok(outcome_from_reply(reply))
    }
}

fn outcome_from_reply(reply: TranslateReply) -> TranslateOutcome {
    // An error field wins even next to a translation; the server only
    // sends one of the two, but the error is authoritative.
    if let Some(message) = reply.error {
        return TranslateOutcome::Rejected(message);
    }
    TranslateOutcome::Translated(reply.translation.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(body: &str) -> TranslateReply {
        serde_json::from_str(body).expect("valid reply json")
    }

    #[test]
    fn translation_field_maps_to_translated() {
        assert_eq!(
            outcome_from_reply(reply(r#"{"translation":"Bonjour"}"#)),
            TranslateOutcome::Translated("Bonjour".to_string())
        );
    }

    #[test]
    fn error_field_maps_to_rejected_verbatim() {
        assert_eq!(
            outcome_from_reply(reply(r#"{"error":"rate limited"}"#)),
            TranslateOutcome::Rejected("rate limited".to_string())
        );
    }

    #[test]
    fn error_field_wins_over_translation() {
        assert_eq!(
            outcome_from_reply(reply(r#"{"translation":"Bonjour","error":"quota"}"#)),
            TranslateOutcome::Rejected("quota".to_string())
        );
    }

    #[test]
    fn empty_reply_is_an_empty_translation() {
        // The original server answers {"translation": ""} for empty input
        assert_eq!(
            outcome_from_reply(reply("{}")),
            TranslateOutcome::Translated(String::new())
        );
    }

    #[test]
    fn languages_reply_parses_both_lists() {
        let parsed: LanguagesReply = serde_json::from_str(
            r#"{"source_languages":["en","fr"],"target_languages":["fr","en"]}"#,
        )
        .expect("valid languages json");
        assert_eq!(parsed.source_languages, vec!["en", "fr"]);
        assert_eq!(parsed.target_languages, vec!["fr", "en"]);
    }
}
