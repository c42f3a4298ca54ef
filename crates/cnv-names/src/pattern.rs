use std::fmt;

/// One token of the channel pattern language. The language is deliberately
/// tiny: literal characters plus the digit class written `[0-9]` in the
/// table source. Keeping the matcher explicit (instead of handing the
/// source text to a regex engine) makes the anchoring and first-match
/// semantics auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    Digit,
}

/// A compiled channel pattern. Matching is anchored at both ends: the label
/// must be consumed exactly, so a label that is a strict prefix or extension
/// of the pattern never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    tokens: Vec<Token>,
}

const DIGIT_CLASS: &str = "[0-9]";

impl Pattern {
    /// Compiles the table notation into tokens. Every `[` must introduce
    /// exactly the digit class `[0-9]`; anything else is a malformed marker.
    /// All other characters, including non-ASCII, match literally.
    pub fn compile(source: &str) -> Result<Self, String> {
        let mut tokens = Vec::new();
        let mut rest = source;
        while let Some(ch) = rest.chars().next() {
            if ch == '[' {
                if let Some(tail) = rest.strip_prefix(DIGIT_CLASS) {
                    tokens.push(Token::Digit);
                    rest = tail;
                } else {
                    let offset = source.len() - rest.len();
                    return Err(format!(
                        "expected digit class '{DIGIT_CLASS}' at byte {offset}"
                    ));
                }
            } else {
                tokens.push(Token::Literal(ch));
                rest = &rest[ch.len_utf8()..];
            }
        }
        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// The pattern as written in the table.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, label: &str) -> bool {
        let mut chars = label.chars();
        for token in &self.tokens {
            match (token, chars.next()) {
                (Token::Literal(expected), Some(ch)) if *expected == ch => {}
                (Token::Digit, Some(ch)) if ch.is_ascii_digit() => {}
                _ => return false,
            }
        }
        chars.next().is_none()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
