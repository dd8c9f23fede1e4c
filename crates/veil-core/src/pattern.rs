// Registered target patterns and their derived forms.

/// A registered target word or phrase together with its derived forms.
///
/// Patterns are immutable once registered. Spaces in the registered
/// word are stripped before the normalized forms are derived, so a
/// multi-word pattern like "stay calm" is matched as "staycalm"; the
/// spelling as typed is kept for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPattern {
    original: String,
    compact: String,
    normalized: String,
    collapsed: String,
}

impl WordPattern {
    /// Assemble a pattern from its derived forms. The forms are
    /// computed by the registry at registration time; this constructor
    /// only stores them.
    pub fn new(
        original: String,
        compact: String,
        normalized: String,
        collapsed: String,
    ) -> Self {
        Self {
            original,
            compact,
            normalized,
            collapsed,
        }
    }

    /// The word exactly as registered, spaces included. Display only.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The registered word with all spaces stripped.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Stage-1 form: case-folded, accent-stripped, transformed, and
    /// filtered, with letter repetitions still present.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Stage-2 form: the stage-1 form with runs of repeated characters
    /// collapsed. This is the canonical matching key.
    pub fn collapsed(&self) -> &str {
        &self.collapsed
    }
}
