//! Plain-text extraction — the consuming loop over [`Tokenizer`].
//!
//! Output accumulates in a single `String`; each `{` records the current
//! output length as a rewind point, and the matching `}` truncates the
//! output back to it.  RTF groups are overwhelmingly destinations (font
//! tables, stylesheets, info blocks) whose content is not document body
//! text, so group content is discarded wholesale on close.
//!
//! A `}` with no matching `{` is ignored rather than underflowing the
//! rewind stack, so unbalanced input still produces a deterministic result.

use crate::rtf::token::{Token, Tokenizer};

/// Convert raw RTF source into plain text.
///
/// Total over its input: any string in, a string out, never an error.
/// Plain text without `\`, `{`, `}` passes through unchanged.
///
/// # Example
/// ```rust
/// use linguaspeak::rtf::extract_plain_text;
///
/// assert_eq!(extract_plain_text("a\\tabb"), "a\tb");
/// assert_eq!(extract_plain_text("{\\fonttbl junk}body"), "body");
/// ```
pub fn extract_plain_text(source: &str) -> String {
    let mut tokens = Tokenizer::new(source);
    let mut out = String::with_capacity(source.len());
    // Rewind points: output length at each currently-open `{`.  Pops happen
    // in LIFO order, so every remaining entry stays <= out.len().
    let mut group_starts: Vec<usize> = Vec::new();

    while let Some(token) = tokens.next_token() {
        match token {
            Token::GroupOpen => group_starts.push(out.len()),
            Token::GroupClose => {
                // Unmatched close: no-op.
                if let Some(start) = group_starts.pop() {
                    out.truncate(start);
                }
            }
            Token::ControlWord { name: "par" | "line", .. } => out.push('\n'),
            Token::ControlWord { name: "tab", .. } => out.push('\t'),
            Token::ControlWord { name: "uc", param } => {
                // Skip the Unicode fallback characters that follow.  Missing
                // or negative counts skip nothing, keeping the scan
                // forward-only.
                let skip = param.unwrap_or(0).max(0) as usize;
                tokens.skip_chars(skip);
            }
            Token::ControlWord { .. } => {}
            Token::HexEscape(byte) => out.push(char::from(byte)),
            Token::PlainRun(text) => out.push_str(text),
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Identity / trivial inputs
    // -----------------------------------------------------------------------

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(extract_plain_text(""), "");
    }

    #[test]
    fn plain_text_is_identity() {
        let s = "no markup here, just text.";
        assert_eq!(extract_plain_text(s), s);
    }

    #[test]
    fn multibyte_plain_text_is_identity() {
        let s = "héllo wörld — สวัสดี";
        assert_eq!(extract_plain_text(s), s);
    }

    // -----------------------------------------------------------------------
    // Control words
    // -----------------------------------------------------------------------

    #[test]
    fn par_becomes_newline() {
        assert_eq!(extract_plain_text("a\\parb"), "a\nb");
    }

    #[test]
    fn line_becomes_newline() {
        assert_eq!(extract_plain_text("a\\lineb"), "a\nb");
    }

    #[test]
    fn tab_becomes_tab() {
        assert_eq!(extract_plain_text("a\\tabb"), "a\tb");
    }

    #[test]
    fn control_word_trailing_space_is_consumed() {
        assert_eq!(extract_plain_text("a\\par b"), "a\nb");
    }

    #[test]
    fn known_word_applies_when_letters_follow_immediately() {
        assert_eq!(extract_plain_text("a\\parb"), "a\nb");
        assert_eq!(extract_plain_text("a\\lineb"), "a\nb");
        assert_eq!(extract_plain_text("a\\tabb"), "a\tb");
        // The letters after the known word rescan as plain text.
        assert_eq!(extract_plain_text("x\\pard y"), "x\nd y");
    }

    #[test]
    fn unknown_control_words_are_ignored() {
        assert_eq!(extract_plain_text("\\b bold\\b0 plain"), "boldplain");
    }

    #[test]
    fn control_word_params_are_ignored_for_unknown_words() {
        assert_eq!(extract_plain_text("\\fs24 hi"), "hi");
    }

    // -----------------------------------------------------------------------
    // Groups
    // -----------------------------------------------------------------------

    #[test]
    fn balanced_group_content_is_discarded() {
        assert_eq!(extract_plain_text("{discarded}kept"), "kept");
    }

    #[test]
    fn nested_group_close_rewinds_to_inner_open() {
        // `{c}` rewinds past "c" only; the outer close then discards "bd".
        assert_eq!(extract_plain_text("a{b{c}d}e"), "ae");
    }

    #[test]
    fn unmatched_close_is_a_noop() {
        assert_eq!(extract_plain_text("}leading"), "leading");
    }

    #[test]
    fn several_unmatched_closes_are_noops() {
        assert_eq!(extract_plain_text("}}a}}b"), "ab");
    }

    #[test]
    fn unmatched_open_keeps_content() {
        assert_eq!(extract_plain_text("{abc"), "abc");
    }

    #[test]
    fn text_after_destination_group_survives() {
        assert_eq!(
            extract_plain_text("first\\par{\\fonttbl f0 Helvetica;}second"),
            "first\nsecond"
        );
    }

    // -----------------------------------------------------------------------
    // Hex escapes
    // -----------------------------------------------------------------------

    #[test]
    fn hex_escape_decodes_ascii() {
        assert_eq!(extract_plain_text("a\\'41b"), "aAb");
    }

    #[test]
    fn hex_escape_decodes_latin1() {
        assert_eq!(extract_plain_text("caf\\'e9"), "café");
    }

    #[test]
    fn hex_escape_uppercase_digits() {
        assert_eq!(extract_plain_text("\\'4A"), "J");
    }

    #[test]
    fn malformed_hex_escape_degrades_to_text() {
        assert_eq!(extract_plain_text("a\\'zb"), "a'zb");
    }

    // -----------------------------------------------------------------------
    // \uc skip counts
    // -----------------------------------------------------------------------

    #[test]
    fn uc_skips_following_characters() {
        assert_eq!(extract_plain_text("pre\\uc2XXpost"), "prepost");
    }

    #[test]
    fn uc_zero_skips_nothing() {
        assert_eq!(extract_plain_text("a\\uc0b"), "ab");
    }

    #[test]
    fn uc_negative_skips_nothing() {
        assert_eq!(extract_plain_text("pre\\uc-2XXpost"), "preXXpost");
    }

    #[test]
    fn uc_without_param_skips_nothing() {
        assert_eq!(extract_plain_text("a\\uc b"), "ab");
    }

    #[test]
    fn uc_past_end_of_input_terminates_scan() {
        assert_eq!(extract_plain_text("ab\\uc9"), "ab");
    }

    #[test]
    fn uc_skip_is_multibyte_safe() {
        assert_eq!(extract_plain_text("\\uc1 éx"), "x");
    }

    #[test]
    fn uc_skip_can_cross_markup() {
        // The two skipped characters here are `{` and `a`; the group is
        // never opened.
        assert_eq!(extract_plain_text("\\uc2 {ab"), "b");
    }

    // -----------------------------------------------------------------------
    // Malformed input
    // -----------------------------------------------------------------------

    #[test]
    fn dangling_backslash_at_end() {
        assert_eq!(extract_plain_text("abc\\"), "abc");
    }

    #[test]
    fn backslash_before_digit_is_dropped() {
        assert_eq!(extract_plain_text("a\\9b"), "a9b");
    }

    #[test]
    fn backslash_before_brace_acts_as_delimiter() {
        // The reference scanner has no literal-brace escape: the backslash
        // is dropped and the brace opens a group.
        assert_eq!(extract_plain_text("a\\{b}c"), "ac");
    }

    // -----------------------------------------------------------------------
    // Whole-document shape
    // -----------------------------------------------------------------------

    #[test]
    fn fully_wrapped_document_is_discarded_on_outer_close() {
        // Destination-group semantics apply to the outer `{\rtf1 …}` wrapper
        // as well: a balanced close always rewinds to its open.
        assert_eq!(extract_plain_text("{\\rtf1\\ansi Hello}"), "");
    }

    #[test]
    fn body_outside_groups_is_preserved() {
        let src = "\\rtf1\\ansi\\deff0 Hello\\par World\\par{\\info meta}Bye";
        assert_eq!(extract_plain_text(src), "Hello\nWorld\nBye");
    }
}
