//! Single-pass word scanner
//!
//! The scanner walks the input once, skipping separator runs and grouping
//! everything else into runs of equal [`CharClass`]. Two rules refine the
//! plain run grouping for letters:
//!
//! - An uppercase letter followed by lowercase letters stays one word
//!   (`New` in `NewWord`).
//! - Once a lowercase letter has been seen anywhere in the input, an
//!   uppercase letter following another uppercase letter starts a new word.
//!   `thisIsATest` becomes `this is a test`, while an all-caps input such as
//!   `SPLIT_SNAKE_CASE` keeps its uppercase runs together.

use crate::class::CharClass;
use alloc::borrow::Cow;
use core::iter::FusedIterator;

/// Scanner state for one tokenizing pass
///
/// A `Splitter` borrows its input and yields words in order of appearance.
/// Words are always lowercase; a word that was already lowercase is returned
/// borrowed from the input.
#[derive(Debug, Clone)]
pub struct Splitter<'a> {
    src: &'a str,
    /// Byte offset where the current word started
    start: usize,
    /// Byte offset of the next unread character
    pos: usize,
    /// Sticky for the whole pass, not reset per word
    has_lower: bool,
    done: bool,
}

impl<'a> Splitter<'a> {
    /// Create a scanner positioned at the start of `src`
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            start: 0,
            pos: 0,
            has_lower: false,
            done: false,
        }
    }

    /// Whether the input has been fully consumed
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The input being scanned
    pub fn source(&self) -> &'a str {
        self.src
    }

    /// Read the class at `pos`, recording any lowercase letter seen.
    fn read_class(&mut self, pos: usize) -> Option<CharClass> {
        let class = CharClass::from_byte(*self.src.as_bytes().get(pos)?);
        if class == CharClass::Lower {
            self.has_lower = true;
        }
        Some(class)
    }

    /// Discard separators. Other-class characters are never skipped here.
    fn skip_separators(&mut self) {
        let bytes = self.src.as_bytes();
        while let Some(&byte) = bytes.get(self.pos) {
            if !CharClass::from_byte(byte).is_separator() {
                break;
            }
            self.pos += 1;
        }
    }

    /// Scan the next word
    ///
    /// Returns `None` once the input is exhausted; further calls keep
    /// returning `None`.
    pub fn next_word(&mut self) -> Option<Cow<'a, str>> {
        if self.done {
            return None;
        }

        self.skip_separators();
        let Some(mut run) = self.read_class(self.pos) else {
            self.done = true;
            return None;
        };

        self.start = self.pos;
        let mut has_upper = run == CharClass::Upper;

        // Every iteration advances `pos`, so the loop ends at the input length.
        loop {
            self.pos += 1;
            let Some(class) = self.read_class(self.pos) else {
                self.done = true;
                break;
            };

            if class != run {
                if run == CharClass::Upper && class == CharClass::Lower {
                    // Capital followed by lowercase: same word, and from here
                    // on the run is lowercase so the next capital ends it.
                    run = CharClass::Lower;
                } else {
                    break;
                }
            } else if class == CharClass::Upper && self.has_lower {
                break;
            }

            has_upper |= class == CharClass::Upper;
        }

        // Boundaries only fall next to an ASCII byte, so this slice is always
        // on char boundaries.
        let word = &self.src[self.start..self.pos];
        if has_upper {
            Some(Cow::Owned(word.to_ascii_lowercase()))
        } else {
            Some(Cow::Borrowed(word))
        }
    }
}

impl<'a> Iterator for Splitter<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_word()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.src.len() - self.pos))
        }
    }
}

impl FusedIterator for Splitter<'_> {}
