//! LinguaSpeak — translation-prep toolkit.
//!
//! Turns user-supplied documents into text ready for an LLM translation
//! endpoint:
//!
//! 1. [`input`] — read a file or stdin; RTF uploads are converted to plain
//!    text, anything else passes through.
//! 2. [`rtf`] — the RTF-to-plain-text extractor (tokenizer + group-aware
//!    extraction loop).
//! 3. [`translate`] — target-language catalog and the translation prompt
//!    template.
//! 4. [`clipboard`] — copy the result to the system clipboard.
//! 5. [`config`] — TOML settings (default target language, source cap).
//!
//! Sending the prompt over the network is left to the caller; this crate
//! produces strings, it does not speak HTTP.

pub mod clipboard;
pub mod config;
pub mod input;
pub mod rtf;
pub mod translate;
