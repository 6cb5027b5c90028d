//! Identifier tokenizer for case conversion
//!
//! This crate contains the part of strman with actual design content: a
//! character classifier and a single-pass scanner that breaks an identifier
//! such as `splitCamelCase`, `SPLIT_SNAKE_CASE` or `lorem.ipsum.$.sat.12`
//! into lowercase words. Joining those words back together under a target
//! convention lives in `strman-api`.
//!
//! The crate has no external dependencies and builds without `std`. The
//! classifier only needs `core`; the tokenizer needs the `alloc` feature
//! (enabled by `std`).
//!
//! # Example
//!
//! ```rust
//! use strman_core::words;
//!
//! let parts: Vec<_> = words("thisIsATest").collect();
//! assert_eq!(parts, ["this", "is", "a", "test"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod class;
#[cfg(feature = "alloc")]
pub mod splitter;

pub use class::CharClass;
#[cfg(feature = "alloc")]
pub use splitter::Splitter;

/// Lazily split `source` into lowercase words.
#[cfg(feature = "alloc")]
pub fn words(source: &str) -> Splitter<'_> {
    Splitter::new(source)
}
