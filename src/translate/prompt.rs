//! Prompt builder for LLM-backed translation.
//!
//! [`PromptBuilder`] constructs two kinds of prompts:
//! * **Flat** (`build`) — a single user message carrying both instructions
//!   and the source sentence, the shape the app originally sent.
//! * **Chat** (`build_chat`) — a `(system_msg, user_msg)` tuple for
//!   endpoints that separate instructions from payload.
//!
//! Both ask the model to detect the source language itself, translate into
//! the configured target, and reply with nothing but the translation.

use crate::translate::Language;

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds translation prompts for a fixed target language.
///
/// # Example
/// ```rust
/// use linguaspeak::translate::{Language, PromptBuilder};
///
/// let builder = PromptBuilder::new(Language::German);
/// let (system, user) = builder.build_chat("See you tomorrow");
/// assert!(system.contains("German"));
/// assert!(user.contains("See you tomorrow"));
/// ```
pub struct PromptBuilder {
    target: Language,
}

impl PromptBuilder {
    /// Create a builder that translates into `target`.
    pub fn new(target: Language) -> Self {
        Self { target }
    }

    /// The target language this builder translates into.
    pub fn target(&self) -> Language {
        self.target
    }

    /// Build a **flat** prompt: one user message with instructions and the
    /// source sentence inline.
    pub fn build(&self, source_text: &str) -> String {
        format!(
            "You will be provided with a sentence. This sentence:\n\
             {source}\n\
             Your tasks are to:\n\
             - Detect what language the sentence is in\n\
             - Translate the sentence into {target}\n\
             Do not return anything other than the translated sentence.",
            source = source_text,
            target = self.target.name(),
        )
    }

    /// Build a **(system_msg, user_msg)** pair for chat-style endpoints.
    ///
    /// * `system_msg` — the translation instructions.
    /// * `user_msg` — the source sentence, verbatim.
    pub fn build_chat(&self, source_text: &str) -> (String, String) {
        let system_msg = format!(
            "You will be provided with a sentence. Your tasks are to:\n\
             - Detect what language the sentence is in\n\
             - Translate the sentence into {target}\n\
             Do not return anything other than the translated sentence.",
            target = self.target.name(),
        );
        (system_msg, source_text.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
