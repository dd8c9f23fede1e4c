// Textual directives for building transforms and validators.
//
// Lets a transform or validator choice cross a configuration boundary
// (CLI flags, test fixtures) as plain text instead of code.

use crate::transforms::{CyrillicToLatin, DigitsToLetters, LatinOnly, MergeIAndL, Transform};
use crate::validators::{CharCount, MatchesNormalized, PreviouslyMatched, Validator};

/// Error raised when a textual directive cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unknown transform: {0}")]
    UnknownTransform(String),
    #[error("unknown validator directive: {0}")]
    UnknownValidator(String),
    #[error("validator directive {0:?} expects a single character")]
    InvalidChar(String),
    #[error("validator directive {0:?} has an invalid count")]
    InvalidCount(String),
}

/// Build a transform from its short name.
///
/// Known names: `digits`, `cyrillic`, `latin-only`, `merge-il`.
pub fn transform_from_name(name: &str) -> Result<Box<dyn Transform>, ParseError> {
    match name {
        "digits" => Ok(Box::new(DigitsToLetters)),
        "cyrillic" => Ok(Box::new(CyrillicToLatin)),
        "latin-only" => Ok(Box::new(LatinOnly)),
        "merge-il" => Ok(Box::new(MergeIAndL)),
        other => Err(ParseError::UnknownTransform(other.to_owned())),
    }
}

/// Build a validator from a directive string.
///
/// Formats:
/// - `normalized` -- stage-1 forms must also match
/// - `atleast:<char>:<n>` / `exactly:<char>:<n>` / `atmost:<char>:<n>`
/// - `seen:word1,word2,...` -- one of the words was matched earlier
pub fn validator_from_spec(spec: &str) -> Result<Box<dyn Validator>, ParseError> {
    if spec == "normalized" {
        return Ok(Box::new(MatchesNormalized));
    }
    if let Some(words) = spec.strip_prefix("seen:") {
        return Ok(Box::new(PreviouslyMatched::new(words.split(','))));
    }

    type Make = fn(char, usize) -> CharCount;
    let bounds: [(&str, Make); 3] = [
        ("atleast:", CharCount::at_least),
        ("exactly:", CharCount::exactly),
        ("atmost:", CharCount::at_most),
    ];
    for (prefix, make) in bounds {
        let Some(rest) = spec.strip_prefix(prefix) else {
            continue;
        };
        let Some((ch, count)) = rest.split_once(':') else {
            return Err(ParseError::UnknownValidator(spec.to_owned()));
        };
        let mut chars = ch.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(ParseError::InvalidChar(spec.to_owned()));
        };
        let count = count
            .parse()
            .map_err(|_| ParseError::InvalidCount(spec.to_owned()))?;
        return Ok(Box::new(make(ch, count)));
    }
    Err(ParseError::UnknownValidator(spec.to_owned()))
}
