// veil-scan: scan stdin lines for registered words.
//
// Each line read from stdin is scanned independently. For every
// accepted match the tool prints:
//   M: <pattern> <- <matched text>
//
// Usage:
//   veil-scan [-t TRANSFORM]... WORD[=VALIDATOR[;VALIDATOR...]]...
//
// Transforms: digits, cyrillic, latin-only, merge-il
// Validators: normalized, atleast:<c>:<n>, exactly:<c>:<n>,
//             atmost:<c>:<n>, seen:w1,w2,...
//
// Example:
//   echo "you're so stupid" | veil-scan you you're "stupid=seen:you,you're"

use std::io::{self, BufRead, Write};

use veil_match::{WordMatcher, parse};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if veil_cli::wants_help(&args) || args.is_empty() {
        println!("veil-scan: scan stdin lines for registered words.");
        println!();
        println!("Usage: veil-scan [-t TRANSFORM]... WORD[=VALIDATOR[;VALIDATOR...]]...");
        println!();
        println!("Prints 'M: <pattern> <- <matched text>' for every accepted match.");
        println!();
        println!("Transforms: digits, cyrillic, latin-only, merge-il");
        println!("Validators: normalized, atleast:<c>:<n>, exactly:<c>:<n>,");
        println!("            atmost:<c>:<n>, seen:w1,w2,...");
        return;
    }

    let (transforms, words) =
        veil_cli::parse_transforms(&args).unwrap_or_else(|e| veil_cli::fatal(&e));
    if words.is_empty() {
        veil_cli::fatal("no words to detect given");
    }

    let mut matcher = WordMatcher::with_transforms(transforms);
    for spec in &words {
        match spec.split_once('=') {
            Some((word, directives)) => {
                let validators = directives
                    .split(';')
                    .map(parse::validator_from_spec)
                    .collect::<Result<Vec<_>, _>>()
                    .unwrap_or_else(|e| veil_cli::fatal(&e.to_string()));
                matcher.add_word(word, validators);
            }
            None => matcher.add_word(spec, Vec::new()),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| veil_cli::fatal(&format!("failed to read stdin: {e}")));
        for hit in matcher.search(&line) {
            writeln!(out, "M: {} <- {}", hit.pattern().original(), hit.original())
                .unwrap_or_else(|e| veil_cli::fatal(&format!("failed to write output: {e}")));
        }
    }
}
