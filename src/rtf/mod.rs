//! RTF-to-plain-text extraction for LinguaSpeak.
//!
//! This module converts the raw textual source of an RTF (Rich Text Format)
//! document into plain text, interpreting a minimal subset of the format:
//!
//! | RTF construct        | Output                                  |
//! |----------------------|-----------------------------------------|
//! | `\par`, `\line`      | newline                                 |
//! | `\tab`               | tab                                     |
//! | `\'xx` (hex escape)  | the Latin-1 character for byte `xx`     |
//! | `\ucN`               | nothing — skips the next N characters   |
//! | `{…}` (group)        | content discarded when the group closes |
//! | other control words  | ignored                                 |
//! | anything else        | copied through verbatim                 |
//!
//! Extraction is **total**: any input string — well-formed RTF or not —
//! produces a plain-text string, never an error.  Malformed input degrades
//! gracefully (stray `}` is a no-op, a dangling `\` is dropped, a `\uc` skip
//! past the end of input simply ends the scan).
//!
//! # Quick start
//!
//! ```rust
//! use linguaspeak::rtf::extract_plain_text;
//!
//! let text = extract_plain_text("first\\par{\\fonttbl ignored}second");
//! assert_eq!(text, "first\nsecond");
//! ```

pub mod extract;
pub mod token;

pub use extract::extract_plain_text;
pub use token::{Token, Tokenizer};
