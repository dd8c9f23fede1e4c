// Built-in validators for candidate matches.
//
// A validator is the caller's hook for acceptance rules the matching
// algorithm itself cannot express: tightening recall, bounding letter
// counts, or requiring that something else was detected earlier in the
// same text.

use hashbrown::HashSet;

use veil_core::context::MatchContext;
use veil_core::wildcard::wildcard_eq;

/// A pure predicate over a candidate match that has already passed
/// length and wildcard equality against its pattern.
///
/// Validators attached to one pattern run in attachment order and the
/// first rejection discards the candidate without stopping the scan.
/// The context only hands out shared references, so validators cannot
/// mutate the candidate, the accepted sequence, or any pattern.
pub trait Validator: Send + Sync {
    fn accept(&self, ctx: &MatchContext<'_, '_>) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&MatchContext<'_, '_>) -> bool + Send + Sync,
{
    fn accept(&self, ctx: &MatchContext<'_, '_>) -> bool {
        self(ctx)
    }
}

/// Accept only when the candidate's stage-1 form also matches the
/// pattern's stage-1 form under wildcard equality.
///
/// Run collapsing is aggressive; this validator filters the false
/// positives it creates, at the cost of more false negatives (a
/// repeated-letter evasion no longer matches).
pub struct MatchesNormalized;

impl Validator for MatchesNormalized {
    fn accept(&self, ctx: &MatchContext<'_, '_>) -> bool {
        wildcard_eq(ctx.normalized(), ctx.pattern().normalized())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    AtLeast,
    Exactly,
    AtMost,
}

/// Bound the number of occurrences of one character in the candidate's
/// stage-1 form.
///
/// The stage-1 form keeps letter repetitions, so this can distinguish
/// `pogger` from `poger` even though both collapse to the same stage-2
/// key.
pub struct CharCount {
    ch: char,
    count: usize,
    bound: Bound,
}

impl CharCount {
    /// Require at least `count` occurrences of `ch`.
    pub fn at_least(ch: char, count: usize) -> Self {
        Self {
            ch,
            count,
            bound: Bound::AtLeast,
        }
    }

    /// Require exactly `count` occurrences of `ch`.
    pub fn exactly(ch: char, count: usize) -> Self {
        Self {
            ch,
            count,
            bound: Bound::Exactly,
        }
    }

    /// Require at most `count` occurrences of `ch`.
    pub fn at_most(ch: char, count: usize) -> Self {
        Self {
            ch,
            count,
            bound: Bound::AtMost,
        }
    }
}

impl Validator for CharCount {
    fn accept(&self, ctx: &MatchContext<'_, '_>) -> bool {
        let found = ctx.normalized().chars().filter(|&c| c == self.ch).count();
        match self.bound {
            Bound::AtLeast => found >= self.count,
            Bound::Exactly => found == self.count,
            Bound::AtMost => found <= self.count,
        }
    }
}

/// Accept only when an earlier accepted match in the same scan was for
/// a pattern whose compact (space-stripped) registered text is one of
/// the given words.
///
/// Enables order-sensitive rules such as "only flag this insult when
/// the text already addressed someone", with the address patterns
/// registered before the insult pattern. The comparison keys on the
/// registered word, not on the matched text, so the rule still fires
/// when the earlier word was itself evaded ("YOU", "y0u", "y o u").
pub struct PreviouslyMatched {
    words: HashSet<String>,
}

impl PreviouslyMatched {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for PreviouslyMatched {
    fn accept(&self, ctx: &MatchContext<'_, '_>) -> bool {
        ctx.previous()
            .iter()
            .any(|m| self.words.contains(m.pattern().compact()))
    }
}
