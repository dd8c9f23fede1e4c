// Built-in stage-1 text transforms.
//
// Transforms are the pluggable half of the normalization pipeline:
// simple character-substitution passes that fold evasion alphabets
// (leetspeak digits, Cyrillic homoglyphs) back onto the letters they
// imitate.

/// A pure text transform applied during stage-1 normalization.
///
/// Transforms must be deterministic and total, and must not add or
/// remove space characters: the matcher aligns its raw and normalized
/// token arrays by position, and that alignment relies on the space
/// structure surviving the pipeline. Output may contain uppercase; the
/// pipeline folds case again after every transform. A panicking
/// transform is a caller configuration error and is not caught.
pub trait Transform: Send + Sync {
    fn apply(&self, text: &str) -> String;
}

impl<F> Transform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, text: &str) -> String {
        self(text)
    }
}

/// Replace digits with the latin letters they are commonly used to
/// mimic: `h3ll0` -> `hELLO`. `6` has no convincing letter shape and is
/// left for the stage-1 filter to drop.
pub struct DigitsToLetters;

impl Transform for DigitsToLetters {
    fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '0' => 'O',
                '1' => 'I',
                '2' => 'Z',
                '3' => 'E',
                '4' => 'A',
                '5' => 'S',
                '7' => 'L',
                '8' => 'B',
                '9' => 'g',
                other => other,
            })
            .collect()
    }
}

/// Merge `l` into `i`, defusing the "uppercase I looks like a lowercase
/// l" trick. Runs after case folding, so only the lowercase form needs
/// mapping.
pub struct MergeIAndL;

impl Transform for MergeIAndL {
    fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| if c == 'l' { 'i' } else { c })
            .collect()
    }
}

/// Retain strictly `a-z`, spaces, and wildcards, dropping every letter
/// the other transforms did not map into the latin range. Useful as the
/// last transform when the pattern list is latin-only.
pub struct LatinOnly;

impl Transform for LatinOnly {
    fn apply(&self, text: &str) -> String {
        text.chars()
            .filter(|&c| c.is_ascii_lowercase() || c == ' ' || c == '*')
            .collect()
    }
}

/// Replace Cyrillic letters with the visually identical or near
/// identical latin letter.
pub struct CyrillicToLatin;

impl Transform for CyrillicToLatin {
    fn apply(&self, text: &str) -> String {
        text.chars().map(latin_lookalike).collect()
    }
}

/// Latin look-alike for a lowercase Cyrillic letter, or the character
/// itself when it has no convincing latin shape.
fn latin_lookalike(c: char) -> char {
    match c {
        '\u{0430}' => 'a',                            // а
        '\u{044A}' | '\u{044C}' | '\u{0432}' => 'b',  // ъ ь в
        '\u{0441}' => 'c',                            // с
        '\u{0454}' | '\u{0435}' | '\u{04D9}' => 'e',  // є е ә
        '\u{0493}' => 'f',                            // ғ
        '\u{043D}' | '\u{04BB}' => 'h',               // н һ
        '\u{0456}' => 'i',                            // і
        '\u{0458}' => 'j',                            // ј
        '\u{043A}' => 'k',                            // к
        '\u{043C}' => 'm',                            // м
        '\u{0438}' => 'n',                            // и
        '\u{043E}' | '\u{04E9}' => 'o',               // о ө
        '\u{0440}' => 'p',                            // р
        '\u{044F}' | '\u{0433}' => 'r',               // я г
        '\u{0455}' => 's',                            // ѕ
        '\u{0442}' => 't',                            // т
        '\u{0446}' | '\u{045F}' => 'u',               // ц џ
        '\u{0448}' | '\u{0449}' => 'w',               // ш щ
        '\u{0445}' | '\u{04B3}' => 'x',               // х ҳ
        '\u{0443}' | '\u{04AF}' => 'y',               // у ү
        other => other,
    }
}
