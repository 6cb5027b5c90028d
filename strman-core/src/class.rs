//! Character classification for identifier tokenizing

/// Classification of a single input character
///
/// End of input is not a class; the scanner treats it as a separate
/// terminal condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII lowercase letter `a`-`z`
    Lower,
    /// ASCII uppercase letter `A`-`Z`
    Upper,
    /// ASCII digit `0`-`9`
    Digit,
    /// Whitespace, `.`, `_` or `-`; discarded between words
    Separator,
    /// Anything else, including every non-ASCII character
    ///
    /// Unlike separators, runs of these form words of their own.
    Other,
}

impl CharClass {
    /// Classify a single byte
    ///
    /// Every byte of a multi-byte UTF-8 sequence is `>= 0x80` and so lands in
    /// [`CharClass::Other`]. A multi-byte character therefore never straddles
    /// a class boundary.
    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            b'a'..=b'z' => CharClass::Lower,
            b'A'..=b'Z' => CharClass::Upper,
            b'0'..=b'9' => CharClass::Digit,
            b' ' | b'\t' | b'\n' | b'\r' | b'.' | b'_' | b'-' => CharClass::Separator,
            _ => CharClass::Other,
        }
    }

    /// Classify a character
    pub const fn from_char(ch: char) -> Self {
        if ch.is_ascii() {
            Self::from_byte(ch as u8)
        } else {
            CharClass::Other
        }
    }

    /// Check if this class is discarded between words
    pub const fn is_separator(self) -> bool {
        matches!(self, CharClass::Separator)
    }

    /// Check if this class is an ASCII letter of either case
    pub const fn is_letter(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Upper)
    }
}
