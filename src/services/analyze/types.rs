//! Options for the analyze operation.

use super::features::Features;
use crate::errors::NluResult;
use crate::services::Validator;
use serde::Serialize;
use std::collections::HashMap;

/// Options for `POST /v1/analyze`.
///
/// Exactly one of `text`, `html` or `url` is normally set; the service
/// rejects requests without content.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzeOptions {
    /// Analysis modules to run (required)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Features>,
    /// Plain text to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// HTML to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Public web page to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Remove ads and navigation from web pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,
    /// XPath query selecting the text to analyze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    /// Analyze the raw page when cleaning fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_to_raw: Option<bool>,
    /// Echo the analyzed text in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_analyzed_text: Option<bool>,
    /// ISO 639-1 language code overriding detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Maximum number of characters analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_text_characters: Option<i64>,
    /// Per-call header overrides
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl AnalyzeOptions {
    /// Options with the required feature selection.
    pub fn new(features: Features) -> Self {
        Self {
            features: Some(features),
            ..Self::default()
        }
    }

    option_setters! {
        /// Analysis modules to run.
        features: Features,
        /// Plain text to analyze.
        text: String,
        /// HTML to analyze.
        html: String,
        /// Web page to analyze.
        url: String,
        /// Remove boilerplate from web pages.
        clean: bool,
        /// XPath query.
        xpath: String,
        /// Fall back to the raw page.
        fallback_to_raw: bool,
        /// Return the analyzed text.
        return_analyzed_text: bool,
        /// Language override.
        language: String,
        /// Character limit.
        limit_text_characters: i64,
    }

    header_setters!();

    /// Check required fields.
    pub fn validate(&self) -> NluResult<()> {
        Validator::new().require("features", &self.features).finish()
    }
}
