// veil-cli: shared utilities for the veil command-line tools.

use std::process;

use veil_match::parse;
use veil_match::transforms::Transform;

/// Print an error message and exit with a non-zero status.
pub fn fatal(message: &str) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

/// Check whether the argument list asks for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Collect the values of every `-t NAME` / `--transform NAME` pair,
/// build the corresponding transforms in order, and return them
/// together with the remaining arguments.
pub fn parse_transforms(
    args: &[String],
) -> Result<(Vec<Box<dyn Transform>>, Vec<String>), String> {
    let mut transforms: Vec<Box<dyn Transform>> = Vec::new();
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-t" || arg == "--transform" {
            let name = iter
                .next()
                .ok_or_else(|| format!("{arg} expects a transform name"))?;
            let transform = parse::transform_from_name(name).map_err(|e| e.to_string())?;
            transforms.push(transform);
        } else {
            rest.push(arg.clone());
        }
    }
    Ok((transforms, rest))
}
