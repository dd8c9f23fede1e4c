// Pattern registry and the chunked, wildcard-aware search engine.
//
// The search slides a variable-width window over the input's
// space-delimited tokens: the concatenated stage-2 forms of the tokens
// inside the window are compared against each pattern's stage-2 form
// under wildcard equality, so a pattern can be found inside one token
// or split across several ("s al Wyyy r" -> "Salwyrr"). The window is
// driven by two explicit state variables, start offset and width, with
// no backtracking.

use veil_core::context::{Match, MatchContext};
use veil_core::pattern::WordPattern;
use veil_core::wildcard::wildcard_eq;

use crate::normalize::{Normalizer, collapse_runs};
use crate::transforms::Transform;
use crate::validators::Validator;

/// One registry slot: a pattern plus its validators, in attachment
/// order.
struct Entry {
    pattern: WordPattern,
    validators: Vec<Box<dyn Validator>>,
}

/// One space-delimited input token in all three representations. The
/// arrays built from one input are positionally aligned: index `i`
/// always refers to the same input word.
struct ScanToken<'t> {
    raw: &'t str,
    normalized: String,
    collapsed: String,
}

/// Ordered registry of target patterns and the search engine over it.
///
/// Registration order is semantically significant: validators on a
/// later pattern may depend on matches already produced by earlier
/// patterns during the same scan. Registering the same word twice
/// yields two independent entries and, potentially, two accepted
/// matches for one input span.
pub struct WordMatcher {
    normalizer: Normalizer,
    entries: Vec<Entry>,
}

impl WordMatcher {
    /// A matcher with no custom transforms; normalization still folds
    /// case, strips accents, and filters the character set.
    pub fn new() -> Self {
        Self::with_transforms(Vec::new())
    }

    /// A matcher whose stage-1 normalization applies `transforms` in
    /// the given order, to registered words and scanned text alike.
    pub fn with_transforms(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self {
            normalizer: Normalizer::new(transforms),
            entries: Vec::new(),
        }
    }

    /// Register a word or phrase to detect, with its validators.
    ///
    /// Spaces are stripped before the normalized forms are derived, to
    /// match how the scan recombines tokens; space-sensitive rules can
    /// still be expressed in validators. Wildcards (`*`) are allowed
    /// and match any single character during the scan.
    pub fn add_word(&mut self, word: &str, validators: Vec<Box<dyn Validator>>) {
        let compact: String = word.chars().filter(|&c| c != ' ').collect();
        let forms = self.normalizer.normalize(&compact);
        let pattern = WordPattern::new(word.to_owned(), compact, forms.normalized, forms.collapsed);
        self.entries.push(Entry {
            pattern,
            validators,
        });
    }

    /// Register words to detect without validators.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref(), Vec::new());
        }
    }

    /// The registered patterns, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &WordPattern> {
        self.entries.iter().map(|entry| &entry.pattern)
    }

    /// Search `text` for every registered pattern.
    ///
    /// Returns the accepted matches ordered primarily by pattern
    /// registration order and secondarily by scan position. Never
    /// mutates the registry; each call owns its token arrays and its
    /// accepted sequence, so a finished matcher can be scanned from
    /// several threads at once.
    ///
    /// Malformed input is not an error: empty text, or text whose
    /// characters are all filtered away, simply yields no matches.
    pub fn search(&self, text: &str) -> Vec<Match<'_>> {
        let tokens = self.tokenize(text);
        let mut accepted = Vec::new();
        for entry in &self.entries {
            self.scan_pattern(entry, &tokens, &mut accepted);
        }
        accepted
    }

    /// Normalize the whole input once and split it into positionally
    /// aligned token arrays. Stage-2 forms are collapsed per token
    /// rather than split from the collapsed full text, so that runs of
    /// spaces cannot shift the alignment.
    fn tokenize<'t>(&self, text: &'t str) -> Vec<ScanToken<'t>> {
        let normalized = self.normalizer.normalized(text);
        debug_assert_eq!(
            text.split(' ').count(),
            normalized.split(' ').count(),
            "transforms must not add or remove spaces"
        );
        text.split(' ')
            .zip(normalized.split(' '))
            .map(|(raw, normalized)| ScanToken {
                raw,
                collapsed: collapse_runs(normalized),
                normalized: normalized.to_owned(),
            })
            .collect()
    }

    /// Run one pattern over the token arrays, appending accepted
    /// matches.
    ///
    /// For every window width from one token up to the character length
    /// of the pattern's collapsed form (a pattern cannot span more
    /// tokens than it has characters), the window start slides left to
    /// right one token at a time. A window that matches and survives
    /// the validators consumes its token range: scanning resumes
    /// strictly after it, and no later window of this pattern may reuse
    /// those tokens. A rejected or unequal window just advances the
    /// start by one.
    fn scan_pattern<'m>(
        &'m self,
        entry: &'m Entry,
        tokens: &[ScanToken<'_>],
        accepted: &mut Vec<Match<'m>>,
    ) {
        let target = entry.pattern.collapsed();
        if target.is_empty() {
            // Nothing left of the pattern after filtering; it can never
            // match anything.
            return;
        }
        let max_width = target.chars().count();
        let mut consumed = vec![false; tokens.len()];

        for width in 0..=max_width {
            let take = width.max(1);
            let mut start = 0;
            while start < tokens.len() {
                let end = usize::min(start + take, tokens.len());
                if consumed[start..end].iter().any(|&used| used) {
                    start += 1;
                    continue;
                }

                let collapsed: String = tokens[start..end]
                    .iter()
                    .map(|token| token.collapsed.as_str())
                    .collect();
                if !wildcard_eq(&collapsed, target) {
                    start += 1;
                    continue;
                }

                let candidate = build_candidate(&entry.pattern, &tokens[start..end], collapsed);
                let verdict = {
                    let ctx = MatchContext::new(&candidate, accepted.as_slice());
                    entry.validators.iter().all(|v| v.accept(&ctx))
                };
                if verdict {
                    for used in &mut consumed[start..end] {
                        *used = true;
                    }
                    accepted.push(candidate);
                    start = end;
                } else {
                    start += 1;
                }
            }
        }
    }
}

impl Default for WordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct the candidate's forms from the matched token range.
fn build_candidate<'m>(
    pattern: &'m WordPattern,
    window: &[ScanToken<'_>],
    collapsed: String,
) -> Match<'m> {
    let original = window
        .iter()
        .map(|token| token.raw)
        .collect::<Vec<_>>()
        .join(" ");
    let compact: String = original.chars().filter(|&c| c != ' ').collect();
    let normalized: String = window
        .iter()
        .map(|token| token.normalized.as_str())
        .collect();
    Match::new(original, compact, normalized, collapsed, pattern)
}
