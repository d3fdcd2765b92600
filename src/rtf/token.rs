//! RTF tokenizer — a cursor-based scanner over the raw document source.
//!
//! [`Tokenizer`] recognises, in priority order at each position:
//!
//! 1. a hex escape — `\'` followed by exactly two hex digits;
//! 2. a control word — `\` + one or more lowercase ASCII letters, an
//!    optional signed integer parameter, and one optional trailing space
//!    (consumed, not emitted).  Words the extractor acts on (`par`, `line`,
//!    `tab`, `uc`) take first-match priority: `\parb` lexes as `\par`
//!    followed by the text "b", while an unknown word is maximal;
//! 3. a group delimiter — `{` or `}`;
//! 4. a plain run — a maximal run of characters containing none of
//!    `\`, `{`, `}`.
//!
//! A `\` that introduces none of the above (dangling backslash, uppercase
//! word, `\'` without two hex digits) is dropped and scanning resumes at the
//! following character, so no input can make the tokenizer fail.
//!
//! The cursor is shared with the consumer: `\ucN` semantics ("skip the next
//! N fallback characters") are implemented by the consuming loop calling
//! [`Tokenizer::skip_chars`] between tokens.

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One lexical unit of RTF source.  Borrows from the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal `{` — opens a group.
    GroupOpen,
    /// Literal `}` — closes a group.
    GroupClose,
    /// `\word` or `\wordN` — a control word with optional integer parameter.
    ControlWord { name: &'a str, param: Option<i32> },
    /// `\'xx` — an escaped byte given as two hex digits.
    HexEscape(u8),
    /// A maximal run of ordinary text (no `\`, `{`, `}`).
    PlainRun(&'a str),
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Scanning state: the source string and a byte cursor into it.
///
/// The cursor only ever moves forward, so tokenization is linear in the
/// input length.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset into the source (always a char boundary).
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Advance the cursor by `n` characters, saturating at end of input.
    ///
    /// Used by the consumer to honour `\ucN` skip counts.  Counting
    /// characters (Unicode scalar values) rather than bytes guarantees the
    /// cursor always lands on a char boundary.
    pub fn skip_chars(&mut self, n: usize) {
        match self.src[self.pos..].char_indices().nth(n) {
            Some((offset, _)) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            let bytes = self.src.as_bytes();
            if self.pos >= bytes.len() {
                return None;
            }

            match bytes[self.pos] {
                b'{' => {
                    self.pos += 1;
                    return Some(Token::GroupOpen);
                }
                b'}' => {
                    self.pos += 1;
                    return Some(Token::GroupClose);
                }
                b'\\' => {
                    if let Some(token) = self.scan_escape() {
                        return Some(token);
                    }
                    // Unrecognised escape: drop the backslash and rescan.
                    self.pos += 1;
                }
                _ => return Some(self.scan_plain_run()),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Scan a hex escape or control word starting at a `\`.
    ///
    /// Returns `None` when the backslash introduces neither form; the caller
    /// then skips the backslash itself.
    fn scan_escape(&mut self) -> Option<Token<'a>> {
        let bytes = self.src.as_bytes();
        let start = self.pos + 1; // first byte after the backslash

        // `\'xx` — exactly two hex digits, either case.
        if bytes.get(start) == Some(&b'\'') {
            if let (Some(&hi), Some(&lo)) = (bytes.get(start + 1), bytes.get(start + 2)) {
                if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() {
                    self.pos = start + 3;
                    return Some(Token::HexEscape(hex_value(hi) << 4 | hex_value(lo)));
                }
            }
            return None;
        }

        // `\word` — one or more lowercase ASCII letters.
        let mut i = start;
        while i < bytes.len() && bytes[i].is_ascii_lowercase() {
            i += 1;
        }
        if i == start {
            return None;
        }
        let name = &self.src[start..i];

        // Words with meaning take first-match priority over maximal munch:
        // `\parb` is `\par` followed by the text "b", not an unknown word
        // "parb".  The split only applies when the known word is a proper
        // prefix; the remaining letters are rescanned as a plain run.
        const KNOWN_WORDS: [&str; 4] = ["line", "par", "tab", "uc"];
        if !KNOWN_WORDS.contains(&name) {
            if let Some(kw) = KNOWN_WORDS
                .iter()
                .copied()
                .find(|kw| name.starts_with(kw))
            {
                self.pos = start + kw.len();
                return Some(Token::ControlWord {
                    name: kw,
                    param: None,
                });
            }
        }

        // Optional signed integer parameter (the sign counts only when
        // followed by at least one digit).
        let mut param = None;
        let digits_start = if bytes.get(i) == Some(&b'-') { i + 1 } else { i };
        let mut j = digits_start;
        let mut value: i32 = 0;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            value = value
                .saturating_mul(10)
                .saturating_add((bytes[j] - b'0') as i32);
            j += 1;
        }
        if j > digits_start {
            if digits_start > i {
                value = -value;
            }
            param = Some(value);
            i = j;
        }

        // One optional separating space is part of the control word.
        if bytes.get(i) == Some(&b' ') {
            i += 1;
        }

        self.pos = i;
        Some(Token::ControlWord { name, param })
    }

    /// Scan a maximal run of characters containing no `\`, `{`, `}`.
    fn scan_plain_run(&mut self) -> Token<'a> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut i = start;
        while i < bytes.len() && !matches!(bytes[i], b'\\' | b'{' | b'}') {
            i += 1;
        }
        self.pos = i;
        // Delimiters are ASCII, so `i` is always a char boundary.
        Token::PlainRun(&self.src[start..i])
    }
}

/// Value of an ASCII hex digit (caller guarantees `is_ascii_hexdigit`).
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Collect every token of `src` (no `\uc` cursor adjustment).
    fn tokens(src: &str) -> Vec<Token<'_>> {
        let mut tz = Tokenizer::new(src);
        let mut out = Vec::new();
        while let Some(t) = tz.next_token() {
            out.push(t);
        }
        out
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokens("").is_empty());
    }

    #[test]
    fn plain_run_is_maximal() {
        assert_eq!(tokens("hello world"), vec![Token::PlainRun("hello world")]);
    }

    #[test]
    fn group_delimiters() {
        assert_eq!(
            tokens("{a}"),
            vec![
                Token::GroupOpen,
                Token::PlainRun("a"),
                Token::GroupClose,
            ]
        );
    }

    #[test]
    fn control_word_without_param() {
        assert_eq!(
            tokens("\\par"),
            vec![Token::ControlWord { name: "par", param: None }]
        );
    }

    #[test]
    fn control_word_with_param() {
        assert_eq!(
            tokens("\\uc1"),
            vec![Token::ControlWord { name: "uc", param: Some(1) }]
        );
    }

    #[test]
    fn control_word_with_negative_param() {
        assert_eq!(
            tokens("\\uc-2"),
            vec![Token::ControlWord { name: "uc", param: Some(-2) }]
        );
    }

    #[test]
    fn sign_without_digits_is_not_a_param() {
        // The `-` stays in the following plain run.
        assert_eq!(
            tokens("\\uc-x"),
            vec![
                Token::ControlWord { name: "uc", param: None },
                Token::PlainRun("-x"),
            ]
        );
    }

    #[test]
    fn control_word_consumes_one_trailing_space() {
        assert_eq!(
            tokens("\\par  a"),
            vec![
                Token::ControlWord { name: "par", param: None },
                Token::PlainRun(" a"),
            ]
        );
    }

    #[test]
    fn known_word_prefix_takes_priority() {
        // `\parb` is `\par` + text "b", not an unknown word "parb".
        assert_eq!(
            tokens("\\parb"),
            vec![
                Token::ControlWord { name: "par", param: None },
                Token::PlainRun("b"),
            ]
        );
        assert_eq!(
            tokens("\\ucx"),
            vec![
                Token::ControlWord { name: "uc", param: None },
                Token::PlainRun("x"),
            ]
        );
    }

    #[test]
    fn unknown_word_without_known_prefix_is_maximal() {
        assert_eq!(
            tokens("\\ansi"),
            vec![Token::ControlWord { name: "ansi", param: None }]
        );
    }

    #[test]
    fn oversized_param_saturates() {
        assert_eq!(
            tokens("\\uc99999999999999999999"),
            vec![Token::ControlWord { name: "uc", param: Some(i32::MAX) }]
        );
    }

    #[test]
    fn hex_escape_lower_and_upper() {
        assert_eq!(tokens("\\'4a"), vec![Token::HexEscape(0x4a)]);
        assert_eq!(tokens("\\'4A"), vec![Token::HexEscape(0x4a)]);
    }

    #[test]
    fn hex_escape_requires_two_digits() {
        // `\'z…` is not a hex escape; the backslash is dropped and the rest
        // is plain text.
        assert_eq!(tokens("\\'zb"), vec![Token::PlainRun("'zb")]);
    }

    #[test]
    fn dangling_backslash_is_dropped() {
        assert_eq!(tokens("ab\\"), vec![Token::PlainRun("ab")]);
    }

    #[test]
    fn uppercase_word_is_not_a_control_word() {
        assert_eq!(tokens("\\PAR"), vec![Token::PlainRun("PAR")]);
    }

    #[test]
    fn skip_chars_counts_characters_not_bytes() {
        let mut tz = Tokenizer::new("éé rest");
        tz.skip_chars(2); // two 2-byte characters
        assert_eq!(tz.next_token(), Some(Token::PlainRun(" rest")));
    }

    #[test]
    fn skip_chars_saturates_at_end() {
        let mut tz = Tokenizer::new("ab");
        tz.skip_chars(99);
        assert_eq!(tz.next_token(), None);
        assert_eq!(tz.pos(), 2);
    }
}
