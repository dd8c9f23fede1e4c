// veil-normalize: print the canonical forms of stdin lines.
//
// A debugging aid for pattern authors: shows, for each input line, the
// stage-1 form (filtered, repetitions kept) and the stage-2 form (the
// collapsed matching key) produced by the configured pipeline.
//
// Usage:
//   veil-normalize [-t TRANSFORM]...
//
// Output per line:
//   1: <stage-1 form>
//   2: <stage-2 form>

use std::io::{self, BufRead, Write};

use veil_match::Normalizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if veil_cli::wants_help(&args) {
        println!("veil-normalize: print the canonical forms of stdin lines.");
        println!();
        println!("Usage: veil-normalize [-t TRANSFORM]...");
        println!();
        println!("Prints '1: <stage-1>' and '2: <stage-2>' for each line.");
        println!("Transforms: digits, cyrillic, latin-only, merge-il");
        return;
    }

    let (transforms, rest) =
        veil_cli::parse_transforms(&args).unwrap_or_else(|e| veil_cli::fatal(&e));
    if !rest.is_empty() {
        veil_cli::fatal(&format!("unexpected argument: {}", rest[0]));
    }

    let normalizer = Normalizer::new(transforms);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| veil_cli::fatal(&format!("failed to read stdin: {e}")));
        let forms = normalizer.normalize(&line);
        writeln!(out, "1: {}", forms.normalized)
            .and_then(|_| writeln!(out, "2: {}", forms.collapsed))
            .unwrap_or_else(|e| veil_cli::fatal(&format!("failed to write output: {e}")));
    }
}
