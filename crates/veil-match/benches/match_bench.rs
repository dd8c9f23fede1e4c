// Criterion benchmarks for the matching engine.
//
// Run:
//   cargo bench -p veil-match

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use veil_match::transforms::{CyrillicToLatin, DigitsToLetters, LatinOnly, Transform};
use veil_match::{Normalizer, WordMatcher};

const WORDS: &[&str] = &[
    "Salwyrr", "welcome", "best", "b*st", "pogger", "stupid", "spam", "scam", "free money",
    "click here", "subscribe", "giveaway", "discord", "nitro", "password", "hack", "cheat",
    "aimbot", "wallhack", "selling", "buying", "cheap", "promo", "follow me",
];

const TEXT: &str = "I love s al Wyyy r, that is the \"be*t\" thing ever and \
    everyone should cl1ck h3re for freee m0ney because this is not a sc4m at \
    all, just a weeelcome giveaway from a very legit dis cord server";

fn transforms() -> Vec<Box<dyn Transform>> {
    vec![
        Box::new(DigitsToLetters),
        Box::new(CyrillicToLatin),
        Box::new(LatinOnly),
    ]
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = Normalizer::new(transforms());
    c.bench_function("normalize_paragraph", |b| {
        b.iter(|| normalizer.normalize(black_box(TEXT)))
    });
}

fn bench_search(c: &mut Criterion) {
    let mut matcher = WordMatcher::with_transforms(transforms());
    matcher.add_words(WORDS);
    c.bench_function("search_paragraph", |b| {
        b.iter(|| matcher.search(black_box(TEXT)))
    });
}

fn bench_search_clean_text(c: &mut Criterion) {
    let mut matcher = WordMatcher::with_transforms(transforms());
    matcher.add_words(WORDS);
    let clean = "nothing objectionable is written anywhere in this perfectly polite paragraph";
    c.bench_function("search_clean_paragraph", |b| {
        b.iter(|| matcher.search(black_box(clean)))
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_search,
    bench_search_clean_text
);
criterion_main!(benches);
