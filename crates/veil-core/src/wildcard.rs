// Wildcard-aware equality between two normalized strings.

use crate::character::{WILDCARD, simple_lower};

/// Compare two normalized strings for wildcard equality.
///
/// Returns `false` when the character counts differ. Otherwise the
/// strings are compared position by position: a `*` on either side
/// (including on both sides at once) matches unconditionally, and every
/// other pair must be equal after a simple lowercase fold. Wildcard
/// positions carry no information of their own; they resolve against
/// the opposing string's character at the same index.
pub fn wildcard_eq(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(ca), Some(cb)) => {
                if ca == WILDCARD || cb == WILDCARD {
                    continue;
                }
                if simple_lower(ca) != simple_lower(cb) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_equality() {
        assert!(wildcard_eq("best", "best"));
        assert!(!wildcard_eq("best", "bost"));
    }

    #[test]
    fn case_insensitive_fallback() {
        assert!(wildcard_eq("Best", "bEST"));
    }

    #[test]
    fn wildcard_on_left() {
        assert!(wildcard_eq("b*st", "best"));
        assert!(wildcard_eq("b*st", "bost"));
        assert!(wildcard_eq("b*st", "bist"));
    }

    #[test]
    fn wildcard_on_right() {
        assert!(wildcard_eq("best", "b*st"));
        assert!(wildcard_eq("bist", "b*st"));
    }

    #[test]
    fn wildcard_on_both_sides() {
        assert!(wildcard_eq("b*st", "be*t"));
        assert!(wildcard_eq("**", "ab"));
        assert!(wildcard_eq("*a", "a*"));
    }

    #[test]
    fn wildcard_against_wildcard() {
        assert!(wildcard_eq("b**t", "b**t"));
        assert!(wildcard_eq("*", "*"));
    }

    #[test]
    fn length_mismatch_is_never_equal() {
        assert!(!wildcard_eq("b*st", "bst"));
        assert!(!wildcard_eq("b*st", "beast"));
        assert!(!wildcard_eq("", "a"));
        assert!(!wildcard_eq("***", "ab"));
    }

    #[test]
    fn empty_strings_are_equal() {
        assert!(wildcard_eq("", ""));
    }

    #[test]
    fn multibyte_characters_compare_by_position() {
        assert!(wildcard_eq("h\u{00E9}llo", "h*llo"));
        assert!(!wildcard_eq("h\u{00E9}llo", "hello"));
    }
}
