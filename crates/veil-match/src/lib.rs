//! Evasion-resistant word and phrase detection.
//!
//! Finds registered target words inside free-form text even when the
//! writer tries to slip past detection with accents, repeated letters,
//! homoglyphs, digit-for-letter substitution, inserted spaces, or
//! wildcard masking ("b*st"). Built for content moderation: register a
//! list of patterns, optionally with validator predicates, then hand in
//! arbitrary text and get back the ordered list of accepted matches,
//! each carrying enough context for custom acceptance checks.
//!
//! # Architecture
//!
//! - [`normalize`] -- two-stage text canonicalization pipeline
//! - [`transforms`] -- pluggable stage-1 text transforms (leetspeak
//!   digits, Cyrillic homoglyphs, ...)
//! - [`validators`] -- predicates that can reject a candidate match
//! - [`matcher`] -- the pattern registry and the chunked, wildcard-aware
//!   sliding-window search
//! - [`parse`] -- textual directives for building transforms and
//!   validators at configuration boundaries
//!
//! # Example
//!
//! ```
//! use veil_match::WordMatcher;
//!
//! let mut matcher = WordMatcher::new();
//! matcher.add_words(["Salwyrr", "b*st"]);
//!
//! let text = "I love s al Wyyy r, that is the \"be*t\" thing ever";
//! let found: Vec<&str> = matcher
//!     .search(text)
//!     .iter()
//!     .map(|m| m.pattern().original())
//!     .collect();
//! assert_eq!(found, ["Salwyrr", "b*st"]);
//! ```
//!
//! # Concurrency
//!
//! Build the registry first, then scan. Registration takes `&mut self`
//! while [`WordMatcher::search`] takes `&self` and owns all of its scan
//! state, so a finished matcher can be shared across threads and
//! scanned concurrently.

pub mod matcher;
pub mod normalize;
pub mod parse;
pub mod transforms;
pub mod validators;

pub use matcher::WordMatcher;
pub use normalize::{NormalForms, Normalizer, collapse_runs};
pub use parse::ParseError;
pub use transforms::Transform;
pub use validators::Validator;

pub use veil_core::context::{Match, MatchContext};
pub use veil_core::pattern::WordPattern;
pub use veil_core::wildcard::wildcard_eq;
