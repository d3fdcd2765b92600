//! Target-language catalog.
//!
//! The set matches the languages offered by the LinguaSpeak selector;
//! Spanish is the default selection.  Parsing accepts either the English
//! name (case-insensitive) or the ISO-639-1 code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// A translation target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Chinese,
}

impl Language {
    /// Every language offered by the selector, in display order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Chinese,
    ];

    /// English display name (as shown in the selector and used in prompts).
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Chinese => "Chinese",
        }
    }

    /// ISO-639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Chinese => "zh",
        }
    }
}

impl Default for Language {
    /// Spanish — the app's default target selection.
    fn default() -> Self {
        Language::Spanish
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// The given string names no supported language.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language: {0:?} (expected one of English, Spanish, French, German, Chinese, or an ISO code)")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    /// Accepts the English name case-insensitively (`"spanish"`) or the
    /// ISO-639-1 code (`"es"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        for lang in Language::ALL {
            if needle.eq_ignore_ascii_case(lang.name()) || needle.eq_ignore_ascii_case(lang.code())
            {
                return Ok(lang);
            }
        }
        Err(ParseLanguageError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
