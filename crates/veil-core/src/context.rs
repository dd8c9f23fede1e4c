// Match results and the context object handed to validators.

use crate::pattern::WordPattern;

/// One occurrence of a pattern in scanned text.
///
/// A `Match` is built for every candidate token window that passes
/// length and wildcard equality against a pattern's collapsed form,
/// before any validator runs. Rejected candidates are discarded;
/// accepted ones are appended to the scan's result sequence in the
/// order they were accepted.
#[derive(Debug, Clone)]
pub struct Match<'p> {
    original: String,
    compact: String,
    normalized: String,
    collapsed: String,
    pattern: &'p WordPattern,
}

impl<'p> Match<'p> {
    /// Assemble a match from the reconstructed forms of a token window.
    /// Called by the matcher; the forms are not re-derived here.
    pub fn new(
        original: String,
        compact: String,
        normalized: String,
        collapsed: String,
        pattern: &'p WordPattern,
    ) -> Self {
        Self {
            original,
            compact,
            normalized,
            collapsed,
            pattern,
        }
    }

    /// The matched text exactly as it appeared, original spacing kept.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The matched text with spaces removed, mirroring how the
    /// detection itself works.
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Stage-1 form of the matched text, letter repetitions kept.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Stage-2 form of the matched text; equal in length to the
    /// pattern's collapsed form under wildcard resolution.
    pub fn collapsed(&self) -> &str {
        &self.collapsed
    }

    /// The pattern this text matched.
    pub fn pattern(&self) -> &'p WordPattern {
        self.pattern
    }
}

/// Read-only view over a candidate match and the matches accepted
/// earlier in the same scan, as passed to validators.
///
/// The accepted sequence is owned by the scan call and grows
/// append-only; a context only ever reads it, so validators always see
/// the up-to-date accepted set without being able to alias or mutate
/// it.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a, 'p> {
    candidate: &'a Match<'p>,
    previous: &'a [Match<'p>],
}

impl<'a, 'p> MatchContext<'a, 'p> {
    /// Wrap a candidate match and the accepted-so-far sequence.
    pub fn new(candidate: &'a Match<'p>, previous: &'a [Match<'p>]) -> Self {
        Self {
            candidate,
            previous,
        }
    }

    /// The candidate under validation.
    pub fn matched(&self) -> &'a Match<'p> {
        self.candidate
    }

    /// Matched text with original spacing. See [`Match::original`].
    pub fn original(&self) -> &str {
        self.candidate.original()
    }

    /// Matched text without spaces. See [`Match::compact`].
    pub fn compact(&self) -> &str {
        self.candidate.compact()
    }

    /// Stage-1 form of the matched text. See [`Match::normalized`].
    pub fn normalized(&self) -> &str {
        self.candidate.normalized()
    }

    /// Stage-2 form of the matched text. See [`Match::collapsed`].
    pub fn collapsed(&self) -> &str {
        self.candidate.collapsed()
    }

    /// The pattern the candidate matched.
    pub fn pattern(&self) -> &'p WordPattern {
        self.candidate.pattern()
    }

    /// Matches accepted earlier in the current scan, oldest first.
    pub fn previous(&self) -> &'a [Match<'p>] {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(word: &str) -> WordPattern {
        WordPattern::new(
            word.to_owned(),
            word.to_owned(),
            word.to_owned(),
            word.to_owned(),
        )
    }

    #[test]
    fn context_exposes_candidate_forms() {
        let p = pattern("best");
        let m = Match::new(
            "b est".to_owned(),
            "best".to_owned(),
            "beest".to_owned(),
            "best".to_owned(),
            &p,
        );
        let ctx = MatchContext::new(&m, &[]);
        assert_eq!(ctx.original(), "b est");
        assert_eq!(ctx.compact(), "best");
        assert_eq!(ctx.normalized(), "beest");
        assert_eq!(ctx.collapsed(), "best");
        assert_eq!(ctx.pattern().original(), "best");
        assert!(ctx.previous().is_empty());
    }

    #[test]
    fn context_sees_previously_accepted_matches() {
        let you = pattern("you");
        let stupid = pattern("stupid");
        let earlier = vec![Match::new(
            "you".to_owned(),
            "you".to_owned(),
            "you".to_owned(),
            "you".to_owned(),
            &you,
        )];
        let m = Match::new(
            "stupid".to_owned(),
            "stupid".to_owned(),
            "stupid".to_owned(),
            "stupid".to_owned(),
            &stupid,
        );
        let ctx = MatchContext::new(&m, &earlier);
        assert_eq!(ctx.previous().len(), 1);
        assert_eq!(ctx.previous()[0].compact(), "you");
        assert_eq!(ctx.previous()[0].pattern().original(), "you");
    }
}
