//! Translation-prep module for LinguaSpeak.
//!
//! This module provides:
//! * [`Language`] — the target-language catalog offered by the app.
//! * [`PromptBuilder`] — builds the translation prompt around a source
//!   sentence, in flat or chat-message form.
//! * [`ParseLanguageError`] — error for unrecognised language names/codes.
//!
//! Sending the prompt to a chat-completion endpoint is deliberately not
//! handled here; the prompt is plain data for whatever client the caller
//! wires up.
//!
//! # Quick start
//!
//! ```rust
//! use linguaspeak::translate::{Language, PromptBuilder};
//!
//! let builder = PromptBuilder::new(Language::French);
//! let prompt = builder.build("Good morning");
//! assert!(prompt.contains("French"));
//! assert!(prompt.contains("Good morning"));
//! ```

pub mod language;
pub mod prompt;

pub use language::{Language, ParseLanguageError};
pub use prompt::PromptBuilder;
