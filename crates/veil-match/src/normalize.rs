// Two-stage text normalization pipeline.
//
// Stage 1 folds case, strips accents, applies the configured transforms
// in order, and filters down to letters, spaces, and wildcards. Stage 2
// collapses runs of repeated characters into the canonical matching
// key. The same pipeline runs over registered words and scanned text so
// the two stay comparable.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use veil_core::character::{WILDCARD, is_retained};

use crate::transforms::Transform;

/// The two canonical forms produced for one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForms {
    /// Stage-1 form: filtered, letter repetitions kept.
    pub normalized: String,
    /// Stage-2 form: stage-1 with repeated runs collapsed.
    pub collapsed: String,
}

/// Deterministic text-to-text normalizer.
///
/// Caller-supplied transforms run between accent stripping and the
/// character filter, in the order given at construction time.
pub struct Normalizer {
    transforms: Vec<Box<dyn Transform>>,
}

impl Normalizer {
    pub fn new(transforms: Vec<Box<dyn Transform>>) -> Self {
        Self { transforms }
    }

    /// Run the full pipeline, producing both canonical forms.
    pub fn normalize(&self, text: &str) -> NormalForms {
        let normalized = self.normalized(text);
        let collapsed = collapse_runs(&normalized);
        NormalForms {
            normalized,
            collapsed,
        }
    }

    /// Stage-1 normalization, in fixed order:
    ///
    /// 1. Locale-independent lowercase: `WéèélCoMe!!` -> `wéèélcome!!`
    /// 2. Canonical decomposition, then drop all combining marks:
    ///    `wéèélcome!!` -> `weeelcome!!`
    /// 3. Each configured transform, re-lowercasing after every one
    ///    (a transform may emit uppercase, the digit maps do).
    /// 4. Retain only letters, spaces, and `*`: `weeelcome!!` ->
    ///    `weeelcome`. Wildcards are kept so censored words (`w*rd`)
    ///    stay detectable.
    pub fn normalized(&self, text: &str) -> String {
        let mut text = text.to_lowercase();
        text = text.nfd().filter(|&c| !is_combining_mark(c)).collect();
        for transform in &self.transforms {
            text = transform.apply(&text).to_lowercase();
        }
        text.chars().filter(|&c| is_retained(c)).collect()
    }
}

/// Collapse every maximal run of an identical character into a single
/// occurrence: `weeelcome` -> `welcome`.
///
/// Wildcard runs are never collapsed, so a masked pattern like `b**t`
/// keeps both wildcard slots and can still be resolved against the
/// original word length.
pub fn collapse_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if c != WILDCARD && prev == Some(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Normalizer {
        Normalizer::new(Vec::new())
    }

    #[test]
    fn lowercases_and_strips_accents() {
        assert_eq!(plain().normalized("W\u{00E9}\u{00E8}\u{00E9}lCoMe!!"), "weeelcome");
        assert_eq!(plain().normalized("W\u{00C9}\u{00C9}LCOME"), "weelcome");
    }

    #[test]
    fn filters_digits_punctuation_and_symbols() {
        assert_eq!(plain().normalized("he11o, #world!"), "heo world");
    }

    #[test]
    fn keeps_spaces_and_wildcards() {
        assert_eq!(plain().normalized("b*st of 'em"), "b*st of em");
    }

    #[test]
    fn keeps_non_latin_letters() {
        assert_eq!(plain().normalized("s\u{0430}lwyrr"), "s\u{0430}lwyrr");
    }

    #[test]
    fn transforms_run_in_order_and_are_refolded() {
        // Each transform may emit uppercase; the pipeline folds it back
        // before the next one runs.
        let upper_a = |text: &str| text.replace('4', "A");
        let a_to_b = |text: &str| text.replace('a', "b");
        let normalizer = Normalizer::new(vec![
            Box::new(upper_a) as Box<dyn Transform>,
            Box::new(a_to_b),
        ]);
        assert_eq!(normalizer.normalized("4ll c4lm"), "bll cblm");
    }

    #[test]
    fn collapse_removes_repeated_runs() {
        assert_eq!(collapse_runs("weeelcome"), "welcome");
        assert_eq!(collapse_runs("beeeessst"), "best");
        assert_eq!(collapse_runs("aabbaa"), "aba");
    }

    #[test]
    fn collapse_keeps_wildcard_runs() {
        assert_eq!(collapse_runs("b**t"), "b**t");
        assert_eq!(collapse_runs("**aa**"), "**a**");
    }

    #[test]
    fn collapse_merges_space_runs() {
        assert_eq!(collapse_runs("a  b"), "a b");
    }

    #[test]
    fn normalize_produces_both_forms() {
        let forms = plain().normalize("Beeee\u{00E9}sst!");
        assert_eq!(forms.normalized, "beeeeesst");
        assert_eq!(forms.collapsed, "best");
    }

    #[test]
    fn empty_input_stays_empty() {
        let forms = plain().normalize("");
        assert_eq!(forms.normalized, "");
        assert_eq!(forms.collapsed, "");
    }
}
