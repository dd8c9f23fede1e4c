// Character helpers shared by the normalization pipeline and the
// wildcard comparator.

/// The wildcard marker. Matches any single character at the same
/// position in the opposing normalized string and survives every
/// normalization stage unchanged.
pub const WILDCARD: char = '*';

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, only the
/// first character is returned; positional comparison needs a strict
/// one-to-one mapping.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character survives stage-1 filtering: Unicode
/// letters from any alphabet, the space separator, and the wildcard.
/// Digits, punctuation, and symbols are dropped.
pub fn is_retained(c: char) -> bool {
    c.is_alphabetic() || c == ' ' || c == WILDCARD
}
