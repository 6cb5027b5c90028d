//! Word joiner
//!
//! Everything after tokenizing: apply a per-word transform to the words from
//! index `skip` onward, then join them with a delimiter.

use smallvec::SmallVec;
use std::borrow::Cow;
use strman_core::Splitter;

/// Inline capacity for the word buffer. Most identifiers fit.
const INLINE_WORDS: usize = 8;

/// Per-word transform applied before joining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTransform {
    /// Leave the word as produced by the tokenizer (lowercase)
    Identity,
    /// Uppercase every ASCII letter
    Uppercase,
    /// Uppercase the first character only
    Capitalize,
}

impl WordTransform {
    /// Apply the transform to one word
    pub fn apply<'a>(self, word: Cow<'a, str>) -> Cow<'a, str> {
        match (self, word) {
            (WordTransform::Identity, word) => word,
            (WordTransform::Uppercase, Cow::Borrowed(word)) => uppercase(word),
            (WordTransform::Uppercase, Cow::Owned(mut word)) => {
                word.make_ascii_uppercase();
                Cow::Owned(word)
            }
            (WordTransform::Capitalize, Cow::Borrowed(word)) => capitalize(word),
            (WordTransform::Capitalize, Cow::Owned(mut word)) => {
                if let Some(first) = word.get_mut(..1) {
                    first.make_ascii_uppercase();
                }
                Cow::Owned(word)
            }
        }
    }
}

/// Uppercase the first character, leaving the rest untouched
///
/// The remainder is not lowercased, so mixed-case input keeps its shape:
/// `capitalize("iOS")` is `IOS`.
pub fn capitalize(word: &str) -> Cow<'_, str> {
    match word.as_bytes().first() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase() as char);
            out.push_str(&word[1..]);
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(word),
    }
}

/// Uppercase every ASCII letter, borrowing when nothing changes
pub fn uppercase(word: &str) -> Cow<'_, str> {
    if word.bytes().any(|b| b.is_ascii_lowercase()) {
        Cow::Owned(word.to_ascii_uppercase())
    } else {
        Cow::Borrowed(word)
    }
}

/// Apply `f` to every word at index `skip` or later
pub fn transform<'a, F>(words: &mut [Cow<'a, str>], mut f: F, skip: usize)
where
    F: FnMut(Cow<'a, str>) -> Cow<'a, str>,
{
    for word in words.iter_mut().skip(skip) {
        *word = f(std::mem::take(word));
    }
}

/// Buffered words of one identifier
pub type Words<'a> = SmallVec<[Cow<'a, str>; INLINE_WORDS]>;

/// Tokenize `source` into a word buffer
pub fn collect_words(source: &str) -> Words<'_> {
    Splitter::new(source).collect()
}

/// Transform buffered words from `skip` onward and join with `delimiter`
pub fn join(
    mut words: Words<'_>,
    word_transform: WordTransform,
    skip: usize,
    delimiter: &str,
) -> String {
    if word_transform != WordTransform::Identity {
        transform(&mut words, |word| word_transform.apply(word), skip);
    }
    words.join(delimiter)
}

/// Split `source`, transform words from `skip` onward and join with `delimiter`
pub fn join_words(
    source: &str,
    word_transform: WordTransform,
    skip: usize,
    delimiter: &str,
) -> String {
    join(collect_words(source), word_transform, skip, delimiter)
}
