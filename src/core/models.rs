//! Core data models for translation

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::core::errors::TranslationError;

/// Upstream provider that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderTag {
    /// Google Cloud Translation API v2
    GoogleCloud,
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderTag::GoogleCloud => write!(f, "GoogleCloud"),
        }
    }
}

/// Normalized translation result shared by every provider adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub code: u16,
    pub message: String,
    #[serde(rename = "data", default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    #[serde(rename = "method", default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderTag>,
}

impl TranslationResult {
    /// Successful translation
    pub fn success(
        translated_text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        provider: ProviderTag,
    ) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: "Success".to_string(),
            translated_text: Some(translated_text.into()),
            source_lang: Some(source_lang.into()),
            target_lang: Some(target_lang.into()),
            provider: Some(provider),
        }
    }

    /// Failed translation with a status chosen by the adapter
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self::failure_code(status.as_u16(), message)
    }

    /// Failed translation with a raw status code, e.g. one relayed from upstream
    pub fn failure_code(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            translated_text: None,
            source_lang: None,
            target_lang: None,
            provider: None,
        }
    }

    /// Status code as an HTTP status, if it is a valid one
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.code).ok()
    }

    pub fn is_success(&self) -> bool {
        self.code == StatusCode::OK.as_u16()
    }
}

/// Outcome of a single adapter call.
///
/// `Reported` covers every case where the result alone tells the caller what
/// happened: success, rejected input, an upstream refusal or an empty upstream
/// answer. `Failed` additionally carries the local fault behind the result:
/// bad proxy configuration, request construction, transport or parse errors.
#[derive(Debug)]
pub enum TranslateOutcome {
    /// Result only
    Reported(TranslationResult),
    /// Result plus the error that caused it
    Failed {
        /// Result reported to the caller
        result: TranslationResult,
        /// Underlying fault
        error: TranslationError,
    },
}

impl TranslateOutcome {
    pub fn result(&self) -> &TranslationResult {
        match self {
            TranslateOutcome::Reported(result) => result,
            TranslateOutcome::Failed { result, .. } => result,
        }
    }

    pub fn error(&self) -> Option<&TranslationError> {
        match self {
            TranslateOutcome::Reported(_) => None,
            TranslateOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TranslateOutcome::Failed { .. })
    }

    /// Split into the result and the optional error
    pub fn into_parts(self) -> (TranslationResult, Option<TranslationError>) {
        match self {
            TranslateOutcome::Reported(result) => (result, None),
            TranslateOutcome::Failed { result, error } => (result, Some(error)),
        }
    }
}

/// Request body for Google Cloud Translation API v2
#[derive(Debug, Clone, Serialize)]
pub struct GoogleTranslateRequest<'a> {
    pub q: &'a [String],
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'static str,
}

impl<'a> GoogleTranslateRequest<'a> {
    /// Plain-text request for the given texts
    pub fn text(q: &'a [String], source: &'a str, target: &'a str) -> Self {
        Self {
            q,
            source,
            target,
            format: "text",
        }
    }
}

/// Single translation item returned by Google
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleTranslateItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub translated_text: String,
}

/// `data` envelope of a Google response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleTranslateData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub translations: Vec<GoogleTranslateItem>,
}

/// Response body from Google Cloud Translation API v2
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleTranslateResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: GoogleTranslateData,
}

impl GoogleTranslateResponse {
    /// Text of the first translation, the only one the relay uses
    pub fn first_text(&self) -> Option<&str> {
        self.data
            .translations
            .first()
            .map(|item| item.translated_text.as_str())
    }
}

/// Absent and `null` fields both decode to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
